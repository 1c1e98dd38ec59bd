//! Text command handlers.
//!
//! Text commands are the dynamic half of the bot: named responses living in
//! the store, managed from chat by the broadcaster (`!set`, `!add`,
//! `!remove`) and replayed for everyone else by the fallback handler.
//!
//! # Argument Grammar
//!
//! The setter commands parse their argument text as
//! `{command_name} {response_text}`; `!remove` takes just a name. A
//! malformed argument (nothing to split, empty pieces) is a parse failure
//! and degrades to silence, matching the dispatcher's treatment of
//! non-command messages.

use log::debug;

use crate::store::Store;

/// Splits an argument into `(command_name, response_text)`.
///
/// Returns `None` when there is no response text or the name is empty.
fn parse_name_and_response(input: &str) -> Option<(&str, &str)> {
    let (name, response) = input.split_once(' ')?;

    if name.is_empty() || response.is_empty() {
        return None;
    }

    Some((name, response))
}

/// Updates an existing text command's response.
///
/// Replies with a confirmation when the command existed, and with a hint
/// towards `!add` when it did not (nothing is created in that case).
pub async fn handle_set(store: &Store, input: &str) -> Option<String> {
    debug!("handling set command");

    let (name, response) = parse_name_and_response(input)?;

    if store.update_command(name, response).await {
        Some(format!("the command {} has been updated", name))
    } else {
        Some(format!(
            "{} does not exist yet, use !add to create it",
            name
        ))
    }
}

/// Creates a new text command.
///
/// Existing commands are never overwritten; trying to replies with a hint
/// towards `!set`.
pub async fn handle_add(store: &Store, input: &str) -> Option<String> {
    debug!("handling add command");

    let (name, response) = parse_name_and_response(input)?;

    match store.add_command(name, response).await {
        Ok(()) => Some(format!("the command {} has been added", name)),
        Err(_) => Some(format!(
            "{} already exists, use !set if you want to change it",
            name
        )),
    }
}

/// Removes a text command.
///
/// Only the first word of the argument is used as the name. The removal is
/// unconditional: deleting a name that does not exist gets the same
/// confirmation, and aliases pointing at the name are left dangling.
pub async fn handle_remove(store: &Store, input: &str) -> Option<String> {
    debug!("handling remove command");

    let name = input.split_whitespace().next()?;

    store.remove_command(name).await;

    Some(format!("the command {} has been removed", name))
}

/// Fallback handler: replays a stored text command.
///
/// The name is first resolved through the alias table - a single hop, alias
/// chains are not followed. When the effective name has no stored response
/// the reply says so; this is also what an unknown command looks like to a
/// chatter.
pub async fn handle_text(store: &Store, name: &str) -> Option<String> {
    debug!("handling text command {}", name);

    let effective_name = match store.resolve_alias(name).await {
        Some(target) => target,
        None => name.to_owned(),
    };

    match store.command_response(&effective_name).await {
        Some(response) => Some(response),
        None => Some(format!("{} does not exist", effective_name)),
    }
}
