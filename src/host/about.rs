//! Plugin information for the `about` command

use crate::host::color::translate;
use crate::host::description::PluginDescription;
use crate::host::sender::CommandSender;
use crate::logging::sink::LogSink;

/// Sends name, version, description, website and authors of a plugin.
///
/// Players get colored chat lines; the console gets plain lines through
/// `sink`.
pub fn about(sender: &dyn CommandSender, description: &PluginDescription, sink: &dyn LogSink) {
    let summary = description.description.as_deref().unwrap_or_default();
    let website = description.website.as_deref().unwrap_or_default();
    let authors = format_authors(&description.authors());

    if sender.is_player() {
        for line in [
            format!("&e{} &7version &e{}", description.name, description.version),
            format!("&7{}", summary),
            format!("&7Website: &e{}", website),
            format!("&7Author(s): {}", authors),
        ] {
            sender.send_message(&translate(&line));
        }
    } else {
        sink.info(&format!("{} version {}", description.name, description.version));
        sink.info(summary);
        sink.info(&format!("Website: {}", website));
        sink.info(&format!(
            "Author(s): {}",
            authors.replace("&e", "").replace("&7", "")
        ));
    }
}

/// A lone author is shown as is; several are highlighted and comma separated.
fn format_authors(authors: &[String]) -> String {
    match authors {
        [single] => single.clone(),
        _ => authors
            .iter()
            .map(|author| format!("&e{}", author))
            .collect::<Vec<_>>()
            .join("&7, &e"),
    }
}
