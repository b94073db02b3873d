use std::path::PathBuf;

/// User agent sent with release queries (GitHub rejects requests without one)
pub const USER_AGENT: &str = "plugin-kit";

/// Name of the plugin configuration file inside the data directory
pub const DEFAULT_CONFIG_FILE: &str = "config.yml";

/// Name of the plugin-local log file inside the data directory
pub const DEFAULT_LOG_FILE: &str = "plugin.log";

/// Default configuration written when a plugin has no config file yet
pub const DEFAULT_CONFIG: &str = include_str!("../resources/config.yml");

/// Config key toggling the update check on enable
pub const UPDATE_CHECK_ENABLED_KEY: &str = "update-check.enabled";

/// Config key holding the release endpoint URL
pub const UPDATE_CHECK_URL_KEY: &str = "update-check.url";

/// Returns the path to the data directory for plugin-kit.
/// Uses $XDG_DATA_HOME/plugin-kit if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/plugin-kit,
/// or ./plugin-kit if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the directory the CLI writes its own tracing log into.
pub fn log_dir() -> PathBuf {
    data_dir().join("logs")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("plugin-kit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/plugin-kit"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.local/share/plugin-kit"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./plugin-kit"));
    }

    #[test]
    fn default_config_enables_update_check() {
        let value: serde_yaml::Value = serde_yaml::from_str(DEFAULT_CONFIG).unwrap();

        assert_eq!(value["update-check"]["enabled"], serde_yaml::Value::Bool(true));
        assert_eq!(value["update-check"]["url"].as_str(), Some(""));
    }
}
