//! Commands listing handler.
//!
//! Lists everything a chatter can type: the dynamic text commands from the
//! store plus the built-in command names, as one `!`-prefixed line.

use log::debug;

use crate::commands::command::SPECIAL_COMMANDS;
use crate::store::Store;

/// Returns the full command list, formatted as `!a !b !c`.
///
/// Names are sorted so the reply is stable from one call to the next; a
/// text command shadowing a built-in name is listed once.
pub async fn handle_commands(store: &Store) -> Option<String> {
    debug!("handling commands command");

    let mut names = store.command_names().await;
    names.extend(SPECIAL_COMMANDS.iter().map(|name| (*name).to_owned()));
    names.sort();
    names.dedup();

    Some(format!("!{}", names.join(" !")))
}
