//! Environment variable naming for the booking bot configuration.
//!
//! Plain settings map to `LINEBOOK__SECTION__KEY`. Secrets map to
//! `LINEBOOK_SECRET_SECTION_KEY` and fall back to the bare `SECTION_KEY`
//! names used by older deployments (`LINE_CHANNEL_ACCESS_TOKEN`, ...).
//! A few paths also accept the bare names of the first deployment
//! (`SPREADSHEET_ID`, `GOOGLE_CALENDAR_ID`, `GOOGLE_SERVICE_ACCOUNT`).

use serde_json::Value;
use std::env;
use tracing::warn;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "LINEBOOK";

/// The prefix for secret environment variables
pub const SECRET_PREFIX: &str = "LINEBOOK_SECRET";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// The separator for secret environment variables
pub const SECRET_SEPARATOR: &str = "_";

/// Marker value in config files that asks for the value to come from the environment.
pub const SECRET_MARKER: &str = "secret_from_env";

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("LINEBOOK_PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a configuration path (`server.port`) to `LINEBOOK__SERVER__PORT`.
pub fn config_path_to_env_var(path: &str) -> String {
    let prefix = get_config_prefix();
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", prefix, CONFIG_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path (`line.channel_access_token`) to
/// `LINEBOOK_SECRET_LINE_CHANNEL_ACCESS_TOKEN`.
pub fn secret_path_to_env_var(path: &str) -> String {
    let path = path.replace('.', SECRET_SEPARATOR);
    format!("{}{}{}", SECRET_PREFIX, SECRET_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path to its unprefixed name (`LINE_CHANNEL_ACCESS_TOKEN`).
pub fn legacy_secret_path_to_env_var(path: &str) -> String {
    let parts: Vec<&str> = path.split('.').collect();
    if parts.len() < 2 {
        return path.to_uppercase();
    }

    let section = parts[0];
    let key = parts[1..].join(SECRET_SEPARATOR);
    format!("{}_{}", section, key).to_uppercase()
}

pub fn get_config_env_var(path: &str) -> Option<String> {
    env::var(config_path_to_env_var(path)).ok()
}

/// Looks up a secret under the prefixed name first, then the legacy name.
pub fn get_secret_env_var(path: &str) -> Option<String> {
    if let Ok(value) = env::var(secret_path_to_env_var(path)) {
        return Some(value);
    }
    env::var(legacy_secret_path_to_env_var(path)).ok()
}

/// Paths naming credentials are treated as secrets.
pub fn is_secret_path(path: &str) -> bool {
    let path_lower = path.to_lowercase();
    ["secret", "key", "password", "token", "json"]
        .iter()
        .any(|needle| path_lower.contains(needle))
}

/// Bare variable names of the first deployment, by config path.
const DEPLOYMENT_ALIASES: &[(&str, &str)] = &[
    ("sheets.spreadsheet_id", "SPREADSHEET_ID"),
    ("gcal.calendar_id", "GOOGLE_CALENDAR_ID"),
    ("google.service_account_json", "GOOGLE_SERVICE_ACCOUNT"),
];

pub fn deployment_alias(path: &str) -> Option<&'static str> {
    DEPLOYMENT_ALIASES
        .iter()
        .find(|(alias_path, _)| *alias_path == path)
        .map(|(_, name)| *name)
}

pub fn get_env_var(path: &str) -> Option<String> {
    let value = if is_secret_path(path) {
        get_secret_env_var(path)
    } else {
        get_config_env_var(path)
    };
    value.or_else(|| deployment_alias(path).and_then(|name| env::var(name).ok()))
}

/// Replaces every `"secret_from_env"` string in `value` with the matching
/// environment variable. Returns the paths that could not be resolved.
pub fn inject_env_vars(value: &mut Value) -> Vec<String> {
    fn walk(path: &mut Vec<String>, obj: &mut Value, missing: &mut Vec<String>) {
        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    path.push(k.clone());
                    walk(path, v, missing);
                    path.pop();
                }
            }
            Value::String(s) if s == SECRET_MARKER => {
                let path_str = path.join(".");
                match get_env_var(&path_str) {
                    Some(env_val) => *s = env_val,
                    None => {
                        warn!("env var for {} not found", path_str);
                        missing.push(path_str);
                    }
                }
            }
            _ => {}
        }
    }

    let mut missing = Vec::new();
    walk(&mut Vec::new(), value, &mut missing);
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_path_to_env_var() {
        assert_eq!(config_path_to_env_var("server.port"), "LINEBOOK__SERVER__PORT");
        assert_eq!(
            config_path_to_env_var("sheets.spreadsheet_id"),
            "LINEBOOK__SHEETS__SPREADSHEET_ID"
        );
    }

    #[test]
    fn test_secret_path_to_env_var() {
        assert_eq!(
            secret_path_to_env_var("line.channel_access_token"),
            "LINEBOOK_SECRET_LINE_CHANNEL_ACCESS_TOKEN"
        );
    }

    #[test]
    fn test_legacy_secret_path_to_env_var() {
        assert_eq!(
            legacy_secret_path_to_env_var("line.channel_access_token"),
            "LINE_CHANNEL_ACCESS_TOKEN"
        );
        assert_eq!(
            legacy_secret_path_to_env_var("google.service_account_json"),
            "GOOGLE_SERVICE_ACCOUNT_JSON"
        );
    }

    #[test]
    fn test_is_secret_path() {
        assert!(is_secret_path("line.channel_access_token"));
        assert!(is_secret_path("google.service_account_json"));
        assert!(is_secret_path("google.key_path"));
        assert!(!is_secret_path("server.host"));
        assert!(!is_secret_path("gcal.calendar_id"));
    }

    #[test]
    fn test_inject_env_vars_replaces_markers() {
        env::set_var("LINEBOOK_SECRET_TESTLINE_CHANNEL_ACCESS_TOKEN", "tok-123");
        let mut value = json!({
            "testline": { "channel_access_token": "secret_from_env" },
            "server": { "host": "127.0.0.1" }
        });

        let missing = inject_env_vars(&mut value);

        assert!(missing.is_empty());
        assert_eq!(value["testline"]["channel_access_token"], "tok-123");
        assert_eq!(value["server"]["host"], "127.0.0.1");
        env::remove_var("LINEBOOK_SECRET_TESTLINE_CHANNEL_ACCESS_TOKEN");
    }

    #[test]
    fn test_deployment_alias() {
        assert_eq!(deployment_alias("gcal.calendar_id"), Some("GOOGLE_CALENDAR_ID"));
        assert_eq!(deployment_alias("server.port"), None);

        env::set_var("SPREADSHEET_ID", "sheet-from-alias");
        assert_eq!(
            get_env_var("sheets.spreadsheet_id").as_deref(),
            Some("sheet-from-alias")
        );
        env::remove_var("SPREADSHEET_ID");
    }

    #[test]
    fn test_inject_env_vars_reports_missing() {
        let mut value = json!({ "nowhere": { "api_token": "secret_from_env" } });

        let missing = inject_env_vars(&mut value);

        assert_eq!(missing, vec!["nowhere.api_token".to_string()]);
        assert_eq!(value["nowhere"]["api_token"], "secret_from_env");
    }
}
