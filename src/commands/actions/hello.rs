//! Hello command handler.
//!
//! Greets the sender by name. Stateless; mostly useful as a quick check
//! that the bot is alive.

use log::debug;

/// Returns the greeting for the sender.
pub fn handle_hello(user_name: &str) -> Option<String> {
    debug!("handling hello command");

    Some(format!("Welcome to the stream, {}", user_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_hello() {
        assert_eq!(
            handle_hello("DataFrittata").as_deref(),
            Some("Welcome to the stream, DataFrittata")
        );
    }
}
