#[cfg(test)]
use mockall::automock;

/// Entity issuing a command: a player in-game or the server console
#[cfg_attr(test, automock)]
pub trait CommandSender {
    fn is_player(&self) -> bool;

    fn is_op(&self) -> bool;

    fn has_permission(&self, node: &str) -> bool;

    /// Delivers an already color-translated message
    fn send_message(&self, message: &str);
}

/// The server console
///
/// Access checks let non-players through before consulting `is_op` or
/// `has_permission`; both answer `true` for callers that ask directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSender;

impl CommandSender for ConsoleSender {
    fn is_player(&self) -> bool {
        false
    }

    fn is_op(&self) -> bool {
        true
    }

    fn has_permission(&self, _node: &str) -> bool {
        true
    }

    fn send_message(&self, message: &str) {
        tracing::info!("{}", message);
    }
}
