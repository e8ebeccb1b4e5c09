// Store key layout
//
// Every collection lives under a single well-known key; user profiles are
// the only per-entity keys.

/// Dashboard metrics snapshot
pub const METRICS_KEY: &str = "metrics:dashboard:current";

/// Alert list
pub const ALERTS_KEY: &str = "alerts:current";

/// Project list
pub const PROJECTS_KEY: &str = "projects:current";

/// Notification feed
pub const NOTIFICATIONS_KEY: &str = "notifications:current";

/// Audit trail
pub const AUDIT_KEY: &str = "audit:events";

/// One-time initialization marker
pub const INIT_KEY: &str = "system:initialized";

/// Key for a single user profile
pub fn user_profile_key(user_id: &str) -> String {
    format!("user:profile:{user_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_profile_key() {
        assert_eq!(user_profile_key("usr-demo"), "user:profile:usr-demo");
    }
}
