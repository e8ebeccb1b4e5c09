// Seed templates
//
// Static fallback records used when no stored value exists yet. Timestamps
// derive from the caller-provided `now` so seeding stays testable; the
// notification feed additionally takes an rng because it is regenerated
// wholesale on every read.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::alert::{Alert, AlertSeverity, AlertStatus};
use crate::audit::{AuditEvent, RiskLevel};
use crate::metrics::DashboardMetrics;
use crate::notification::{Notification, NotificationSeverity};
use crate::project::{Project, ProjectStatus};
use crate::user::{UserPreferences, UserProfile, UserRole};

/// Dashboard snapshot fallback; also the base every jitter pass starts from
pub fn dashboard_seed(now: DateTime<Utc>) -> DashboardMetrics {
    DashboardMetrics {
        system_health: 98.2,
        monthly_spend: 284_500.0,
        cost_savings: 32_400.0,
        carbon_tons: 45.2,
        uptime_percent: 99.95,
        active_alerts: 7,
        generated_at: now,
    }
}

/// Initial alert list
pub fn alerts_seed(now: DateTime<Utc>) -> Vec<Alert> {
    vec![
        Alert {
            id: "alert-001".to_string(),
            title: "CPU saturation on prod-api cluster".to_string(),
            description: "Average CPU above 92% for 15 minutes across 4 nodes.".to_string(),
            severity: AlertSeverity::Critical,
            status: AlertStatus::Active,
            source: "cloudwatch".to_string(),
            assignee: Some("jordan.lee".to_string()),
            created_at: now - Duration::minutes(42),
        },
        Alert {
            id: "alert-002".to_string(),
            title: "Monthly spend projected 8% over budget".to_string(),
            description: "Compute spend trend crosses the budget line around the 24th."
                .to_string(),
            severity: AlertSeverity::Warning,
            status: AlertStatus::Active,
            source: "finops-analyzer".to_string(),
            assignee: None,
            created_at: now - Duration::hours(3),
        },
        Alert {
            id: "alert-003".to_string(),
            title: "Certificate expiring in 14 days".to_string(),
            description: "TLS certificate for api.internal expires on the 21st.".to_string(),
            severity: AlertSeverity::Warning,
            status: AlertStatus::Acknowledged,
            source: "cert-monitor".to_string(),
            assignee: Some("sam.okafor".to_string()),
            created_at: now - Duration::hours(11),
        },
        Alert {
            id: "alert-004".to_string(),
            title: "Nightly backup completed with warnings".to_string(),
            description: "2 of 118 volumes skipped; retry scheduled.".to_string(),
            severity: AlertSeverity::Info,
            status: AlertStatus::Resolved,
            source: "backup-service".to_string(),
            assignee: None,
            created_at: now - Duration::days(1),
        },
    ]
}

/// Initial project list; exactly three entries
pub fn projects_seed(now: DateTime<Utc>) -> Vec<Project> {
    vec![
        Project {
            id: "proj-001".to_string(),
            name: "Cloud cost optimization".to_string(),
            status: ProjectStatus::OnTrack,
            progress: 68,
            budget: 120_000.0,
            spent: 74_500.0,
            team_size: 5,
            due_date: now + Duration::days(45),
        },
        Project {
            id: "proj-002".to_string(),
            name: "Data center carbon reduction".to_string(),
            status: ProjectStatus::AtRisk,
            progress: 41,
            budget: 250_000.0,
            spent: 129_000.0,
            team_size: 8,
            due_date: now + Duration::days(90),
        },
        Project {
            id: "proj-003".to_string(),
            name: "Observability platform migration".to_string(),
            status: ProjectStatus::OnTrack,
            progress: 83,
            budget: 95_000.0,
            spent: 81_200.0,
            team_size: 4,
            due_date: now + Duration::days(21),
        },
    ]
}

/// Notification feed, regenerated wholesale on every read
pub fn notification_feed(now: DateTime<Utc>, rng: &mut impl Rng) -> Vec<Notification> {
    let templates: [(&str, &str, &str, NotificationSeverity, bool, i64); 4] = [
        (
            "ntf-001",
            "Spend threshold reached",
            "Compute spend hit 80% of the monthly budget.",
            NotificationSeverity::Warning,
            false,
            30,
        ),
        (
            "ntf-002",
            "Node recovered",
            "prod-worker-12 rejoined the cluster after a restart.",
            NotificationSeverity::Info,
            false,
            90,
        ),
        (
            "ntf-003",
            "Carbon report ready",
            "The Q3 emissions report is available for download.",
            NotificationSeverity::Info,
            true,
            240,
        ),
        (
            "ntf-004",
            "Deploy completed",
            "dashboard-ui v2.14 rolled out to all regions.",
            NotificationSeverity::Info,
            true,
            480,
        ),
    ];

    templates
        .into_iter()
        .map(|(id, title, message, severity, read, base_minutes)| Notification {
            id: id.to_string(),
            title: title.to_string(),
            message: message.to_string(),
            severity,
            read,
            // Scatter the feed a little so it looks live.
            created_at: now - Duration::minutes(rng.gen_range(base_minutes..base_minutes + 20)),
        })
        .collect()
}

/// Initial audit trail
pub fn audit_seed(now: DateTime<Utc>) -> Vec<AuditEvent> {
    vec![
        AuditEvent {
            id: Uuid::now_v7(),
            actor: "jordan.lee".to_string(),
            action: "alert.status_changed".to_string(),
            resource: "alert-003".to_string(),
            risk_level: RiskLevel::Low,
            created_at: now - Duration::hours(2),
        },
        AuditEvent {
            id: Uuid::now_v7(),
            actor: "system".to_string(),
            action: "backup.completed".to_string(),
            resource: "volume-group-prod".to_string(),
            risk_level: RiskLevel::Low,
            created_at: now - Duration::hours(9),
        },
        AuditEvent {
            id: Uuid::now_v7(),
            actor: "sam.okafor".to_string(),
            action: "permission.granted".to_string(),
            resource: "usr-casey".to_string(),
            risk_level: RiskLevel::High,
            created_at: now - Duration::days(1),
        },
        AuditEvent {
            id: Uuid::now_v7(),
            actor: "usr-demo".to_string(),
            action: "project.progress_updated".to_string(),
            resource: "proj-001".to_string(),
            risk_level: RiskLevel::Low,
            created_at: now - Duration::days(2),
        },
        AuditEvent {
            id: Uuid::now_v7(),
            actor: "system".to_string(),
            action: "cert.rotation_scheduled".to_string(),
            resource: "api.internal".to_string(),
            risk_level: RiskLevel::Medium,
            created_at: now - Duration::days(3),
        },
    ]
}

/// Demo profiles written by init
pub fn users_seed(now: DateTime<Utc>) -> Vec<UserProfile> {
    vec![
        UserProfile {
            user_id: "usr-demo".to_string(),
            name: "Demo Admin".to_string(),
            email: "demo@opspulse.dev".to_string(),
            role: UserRole::Admin,
            preferences: UserPreferences::default(),
            created_at: now,
        },
        UserProfile {
            user_id: "usr-casey".to_string(),
            name: "Casey Rivera".to_string(),
            email: "casey@opspulse.dev".to_string(),
            role: UserRole::Operator,
            preferences: UserPreferences {
                theme: "light".to_string(),
                email_alerts: false,
                digest_frequency: "weekly".to_string(),
            },
            created_at: now,
        },
    ]
}
