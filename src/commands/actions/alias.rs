//! Alias command handler.
//!
//! `!alias` points a second name at an existing text command, so chatters
//! can type `!t` instead of `!today`. Aliases resolve in a single hop and
//! may never touch a built-in name, on either side.

use log::{debug, warn};

use crate::commands::command::SPECIAL_COMMANDS;
use crate::store::Store;

/// Creates an alias for an existing text command.
///
/// The argument text is parsed as `{alias_name} {target_command_name}`.
/// Refusals:
///
/// - either name is a built-in command: logged, no reply (built-ins resolve
///   before the store is ever consulted, so such an alias could never work)
/// - the target text command does not exist: user-facing refusal
/// - the alias name is already assigned: user-facing refusal
pub async fn handle_alias(store: &Store, input: &str) -> Option<String> {
    debug!("handling alias command");

    let (alias, target) = input.split_once(' ')?;

    if alias.is_empty() || target.is_empty() {
        return None;
    }

    if SPECIAL_COMMANDS.contains(&target) {
        warn!("refusing to alias {} to the built-in command {}", alias, target);
        return None;
    }

    if SPECIAL_COMMANDS.contains(&alias) {
        warn!("refusing to shadow the built-in command {} with an alias", alias);
        return None;
    }

    if store.command_response(target).await.is_none() {
        return Some(format!("{} does not exist, so it cannot be aliased", target));
    }

    match store.add_alias(alias, target).await {
        Ok(()) => Some(format!("{} is now an alias of {}", alias, target)),
        Err(_) => Some(format!(
            "{} is already assigned, remove it first if you want to reassign it",
            alias
        )),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::NamedTempFile;

    use super::*;

    async fn create_test_store() -> Store {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap().to_owned();
        Store::new(path).await
    }

    #[tokio::test]
    async fn test_handle_alias_creates_alias() {
        let store = create_test_store().await;

        let reply = handle_alias(&store, "t today").await;

        assert_eq!(reply.as_deref(), Some("t is now an alias of today"));
        assert_eq!(store.resolve_alias("t").await.as_deref(), Some("today"));
    }

    #[tokio::test]
    async fn test_handle_alias_builtin_target_is_refused_silently() {
        let store = create_test_store().await;

        let reply = handle_alias(&store, "u uptime").await;

        assert_eq!(reply, None);
        assert_eq!(store.resolve_alias("u").await, None);
    }

    #[tokio::test]
    async fn test_handle_alias_builtin_alias_name_is_refused_silently() {
        let store = create_test_store().await;

        let reply = handle_alias(&store, "uptime today").await;

        assert_eq!(reply, None);
        assert_eq!(store.resolve_alias("uptime").await, None);
    }

    #[tokio::test]
    async fn test_handle_alias_missing_target_is_refused_with_a_message() {
        let store = create_test_store().await;

        let reply = handle_alias(&store, "l lurk").await;

        assert_eq!(
            reply.as_deref(),
            Some("lurk does not exist, so it cannot be aliased")
        );
        assert_eq!(store.resolve_alias("l").await, None);
    }

    #[tokio::test]
    async fn test_handle_alias_taken_name_is_refused_with_a_message() {
        let store = create_test_store().await;
        store.add_alias("t", "today").await.unwrap();

        let reply = handle_alias(&store, "t source").await;

        assert_eq!(
            reply.as_deref(),
            Some("t is already assigned, remove it first if you want to reassign it")
        );
        assert_eq!(store.resolve_alias("t").await.as_deref(), Some("today"));
    }

    #[tokio::test]
    async fn test_handle_alias_unparsable_argument_is_silent() {
        let store = create_test_store().await;

        assert_eq!(handle_alias(&store, "t").await, None);
        assert_eq!(handle_alias(&store, "").await, None);
    }
}
