pub const REPLY_PREFIX: &str = "Agent received: ";

/// Placeholder agent: acknowledges the message by echoing it back unchanged.
pub fn generate_reply(user_msg: &str) -> String {
    format!("{}{}", REPLY_PREFIX, user_msg)
}
