// Service layer for business logic
//
// Each service owns the store interaction for one collection; handlers
// stay thin and deal only with masking and response shapes.

mod alerts;
mod audit;
mod diagnostics;
mod init;
mod metrics;
mod notifications;
mod projects;
mod users;

pub use alerts::AlertsService;
pub use audit::AuditService;
pub use diagnostics::{DiagnosticsService, ProbeResult};
pub use init::InitService;
pub use metrics::MetricsService;
pub use notifications::NotificationsService;
pub use projects::ProjectsService;
pub use users::UsersService;
