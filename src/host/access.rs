//! Permission checks and command restrictions based on the sender type

use crate::host::color::translate;
use crate::host::sender::CommandSender;
use crate::logging::sink::LogSink;

/// Returns whether `sender` may use `node`.
///
/// The console is always allowed; players need the node or operator status.
pub fn has_permission(sender: &dyn CommandSender, node: &str) -> bool {
    if !sender.is_player() {
        return true;
    }

    sender.has_permission(node) || sender.is_op()
}

/// Like [`has_permission`], but tells a denied player why in red.
pub fn require_permission(sender: &dyn CommandSender, node: &str, message: &str) -> bool {
    if has_permission(sender, node) {
        return true;
    }

    sender.send_message(&translate(&format!("&c{}", message)));
    false
}

/// Blocks console execution of player-only commands.
///
/// Returns `true` when the command was blocked.
pub fn command_in_game_only(sender: &dyn CommandSender, sink: &dyn LogSink) -> bool {
    if sender.is_player() {
        return false;
    }

    sink.info("You must be in-game to run this command.");
    true
}
