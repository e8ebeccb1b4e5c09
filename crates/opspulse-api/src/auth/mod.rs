// Authorization module
// Decision: the gate checks Authorization header PRESENCE only; token
// contents are never validated against an identity provider in this demo

pub mod config;
pub mod middleware;

pub use config::{AuthConfig, AuthMode};
pub use middleware::{require_auth, AuthState};
