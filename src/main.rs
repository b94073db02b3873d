use std::path::PathBuf;

use clap::{Parser, Subcommand};

use plugin_kit::config::{data_dir, log_dir};
use plugin_kit::host::about::about;
use plugin_kit::host::color::translate;
use plugin_kit::host::description::PluginDescription;
use plugin_kit::host::plugin::{Plugin, ScaffoldPlugin};
use plugin_kit::host::sender::ConsoleSender;
use plugin_kit::logging::{self, TracingSink};
use plugin_kit::update::UpdateChecker;

#[derive(Parser)]
#[command(name = "plugin-kit")]
#[command(version, about = "Update checks and scaffold utilities for game-server plugins")]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write JSON logs to the data directory instead of stderr
    #[arg(long, global = true)]
    log_to_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether a newer release is published
    Check {
        /// Plugin name used in log lines
        name: String,
        /// Current version, without a leading `v`
        version: String,
        /// "Latest release" API URL, e.g. https://api.github.com/repos/USER/REPO/releases/latest
        url: String,
    },
    /// Print plugin information from a plugin.yml
    About {
        #[arg(long, default_value = "plugin.yml")]
        manifest: PathBuf,
    },
    /// Translate `&` color codes
    Translate { text: String },
    /// Enable and then disable the scaffold plugin
    Run {
        #[arg(long, default_value = "plugin.yml")]
        manifest: PathBuf,
        /// Plugin data directory (defaults to <data dir>/<plugin name>)
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _guard = if cli.log_to_file {
        logging::init(Some(&log_dir()), cli.verbose)?
    } else {
        logging::init(None, cli.verbose)?
    };

    let sink = TracingSink;

    match cli.command {
        Command::Check { name, version, url } => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(UpdateChecker::new().check_for_updates(&name, &version, &url, &sink)),
        Command::About { manifest } => {
            let description = PluginDescription::from_file(&manifest)?;
            about(&ConsoleSender, &description, &sink);
        }
        Command::Translate { text } => println!("{}", translate(&text)),
        Command::Run {
            manifest,
            data_dir: plugin_dir,
        } => {
            let description = PluginDescription::from_file(&manifest)?;
            let plugin_dir = plugin_dir.unwrap_or_else(|| data_dir().join(&description.name));
            let mut plugin = ScaffoldPlugin::new(description, &plugin_dir);

            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?
                .block_on(plugin.on_enable(&sink));
            plugin.on_disable(&sink);
        }
    }

    Ok(())
}
