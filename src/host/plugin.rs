//! Plugin lifecycle and the scaffold plugin

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{
    DEFAULT_CONFIG, DEFAULT_CONFIG_FILE, DEFAULT_LOG_FILE, UPDATE_CHECK_ENABLED_KEY,
    UPDATE_CHECK_URL_KEY,
};
use crate::host::config_file::ConfigFile;
use crate::host::description::PluginDescription;
use crate::logging::file::FileLog;
use crate::logging::sink::LogSink;
use crate::update::checker::UpdateChecker;
use crate::update::github::GitHubReleaseSource;
use crate::update::source::ReleaseSource;

/// Lifecycle hooks the host calls on a plugin
#[async_trait::async_trait]
pub trait Plugin: Send + Sync {
    fn description(&self) -> &PluginDescription;

    async fn on_enable(&mut self, sink: &dyn LogSink);

    fn on_disable(&mut self, sink: &dyn LogSink);
}

/// Starting point for a new plugin: loads its config, keeps a file log and
/// checks for a newer release on enable.
pub struct ScaffoldPlugin<S: ReleaseSource = GitHubReleaseSource> {
    description: PluginDescription,
    data_dir: PathBuf,
    config: ConfigFile,
    file_log: FileLog,
    checker: UpdateChecker<S>,
}

impl ScaffoldPlugin<GitHubReleaseSource> {
    pub fn new(description: PluginDescription, data_dir: &Path) -> Self {
        Self::with_checker(description, data_dir, UpdateChecker::new())
    }
}

impl<S: ReleaseSource> ScaffoldPlugin<S> {
    pub fn with_checker(
        description: PluginDescription,
        data_dir: &Path,
        checker: UpdateChecker<S>,
    ) -> Self {
        let config = ConfigFile::new(&data_dir.join(DEFAULT_CONFIG_FILE), &description.name)
            .with_default(DEFAULT_CONFIG);
        let file_log = FileLog::new(data_dir, DEFAULT_LOG_FILE, &description.name);
        Self {
            description,
            data_dir: data_dir.to_path_buf(),
            config,
            file_log,
            checker,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ConfigFile {
        &mut self.config
    }

    pub fn file_log(&self) -> &FileLog {
        &self.file_log
    }

    async fn check_for_updates(&self, sink: &dyn LogSink) {
        if !self.config.get_or(UPDATE_CHECK_ENABLED_KEY, false) {
            debug!("Update check disabled for {}", self.description.name);
            return;
        }

        let url: String = self.config.get_or(UPDATE_CHECK_URL_KEY, String::new());
        if url.is_empty() {
            debug!("No release URL configured for {}", self.description.name);
            return;
        }

        self.checker
            .check_for_updates(&self.description.name, &self.description.version, &url, sink)
            .await;
    }
}

#[async_trait::async_trait]
impl<S: ReleaseSource> Plugin for ScaffoldPlugin<S> {
    fn description(&self) -> &PluginDescription {
        &self.description
    }

    async fn on_enable(&mut self, sink: &dyn LogSink) {
        self.config.load_config(sink);
        self.file_log.initialize(sink);

        let line = format!(
            "[{}] v{} Enabled.",
            self.description.name, self.description.version
        );
        self.file_log.log_to_file(&line, true, sink);
        sink.info(&line);

        self.check_for_updates(sink).await;
    }

    fn on_disable(&mut self, sink: &dyn LogSink) {
        if self.config.is_dirty() {
            self.config.save_config(sink);
        }

        let line = format!(
            "[{}] v{} Disabled.",
            self.description.name, self.description.version
        );
        self.file_log.log_to_file(&line, true, sink);
        sink.info(&line);
    }
}
