// OpsPulse core
//
// Store-agnostic building blocks for the dashboard backend.
//
// Key design decisions:
// - Uses a trait (KvStore) for pluggable persistence backends
// - The synthesized read path is a pure function over (seed, previous, now, rng)
// - Chat replies come from a fixed-priority keyword classifier with a constant output set
// - Domain entity types (DashboardMetrics, Alert, Project, ...) are defined here
//   for shared use by the API and the storage crate

// Domain entity types
pub mod alert;
pub mod audit;
pub mod metrics;
pub mod notification;
pub mod project;
pub mod system;
pub mod user;

pub mod error;
pub mod keys;
pub mod responder;
pub mod seeds;
pub mod synth;
pub mod traits;

// In-memory implementation for examples and testing
pub mod memory;

// Re-exports for convenience
pub use alert::{Alert, AlertSeverity, AlertStatus};
pub use audit::{AuditEvent, RiskLevel};
pub use error::{DashboardError, Result};
pub use memory::InMemoryKvStore;
pub use metrics::DashboardMetrics;
pub use notification::{Notification, NotificationSeverity};
pub use project::{Project, ProjectStatus};
pub use responder::{select_response, CannedResponse, ResponseCategory};
pub use synth::{is_fresh, jitter, refresh_dashboard, synthesize_dashboard, JitterSpec};
pub use system::{InitMarker, INIT_VERSION};
pub use traits::{get_json, put_json, KvStore, StoredValue};
pub use user::{UserPreferences, UserProfile, UserRole};
