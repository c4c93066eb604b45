use std::env;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8100";

/// Process-wide settings consulted on every search request.
pub trait Settings: Send + Sync {
    fn database_url(&self) -> Option<String>;
    fn search_disabled(&self) -> bool;
}

/// Reads settings from the environment at call time, so flipping
/// `DISABLE_SEARCH` takes effect without a restart.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvSettings;

impl Settings for EnvSettings {
    fn database_url(&self) -> Option<String> {
        non_empty(env::var("DATABASE_URL").ok())
    }

    fn search_disabled(&self) -> bool {
        is_enabled(env::var("DISABLE_SEARCH").ok().as_deref())
    }
}

pub fn bind_addr() -> String {
    non_empty(env::var("BIND_ADDR").ok()).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// Only the exact string "true" switches a flag on.
fn is_enabled(value: Option<&str>) -> bool {
    value == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_parsing() {
        assert!(is_enabled(Some("true")));
        assert!(!is_enabled(Some("TRUE")));
        assert!(!is_enabled(Some("1")));
        assert!(!is_enabled(Some("")));
        assert!(!is_enabled(None));
    }

    #[test]
    fn test_empty_values_are_missing() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(
            non_empty(Some("postgres://localhost/res".to_string())),
            Some("postgres://localhost/res".to_string())
        );
    }
}
