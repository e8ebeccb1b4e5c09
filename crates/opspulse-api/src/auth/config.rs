// Authorization configuration

/// How /v1 routes are gated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Require an Authorization header (default)
    Header,
    /// No gate at all, for local demos
    Disabled,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub mode: AuthMode,
}

impl AuthConfig {
    /// Load from AUTH_MODE ("header" default, "none" disables the gate)
    pub fn from_env() -> Self {
        let mode = match std::env::var("AUTH_MODE").as_deref() {
            Ok("none") => AuthMode::Disabled,
            _ => AuthMode::Header,
        };
        Self { mode }
    }
}
