//! Host-facing helpers for plugins
//!
//! The game server itself is abstracted behind [`sender::CommandSender`] and
//! the [`crate::logging::LogSink`] passed to each call.
//!
//! # Modules
//!
//! - [`access`]: Permission checks and player-only command guards
//! - [`about`]: Renders plugin information for players and the console
//! - [`color`]: `&` color-code translation
//! - [`config_file`]: YAML plugin configuration with default-file generation
//! - [`description`]: Plugin metadata read from `plugin.yml`
//! - [`plugin`]: Plugin lifecycle and the scaffold plugin
//! - [`sender`]: Command sender abstraction

pub mod about;
pub mod access;
pub mod color;
pub mod config_file;
pub mod description;
pub mod plugin;
pub mod sender;
