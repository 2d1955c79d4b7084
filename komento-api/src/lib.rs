use chrono::Utc;

mod error;
pub use error::Error;

mod node;
pub use node::{prepend_reply, unlink_reply, Comment, NodeId, NodeKind, Reply};

pub type Time = chrono::DateTime<Utc>;

/// Trims `text`, rejecting contents that would render as nothing.
///
/// Every text that enters the store goes through here first; a failure means
/// the operation must not mutate any state.
pub fn validate_text(text: &str) -> Result<&str, Error> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyText);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_trims_surrounding_whitespace() {
        assert_eq!(validate_text("  hello there "), Ok("hello there"));
    }

    #[test]
    fn validate_rejects_empty_and_whitespace_only() {
        assert_eq!(validate_text(""), Err(Error::EmptyText));
        assert_eq!(validate_text("   \t\n"), Err(Error::EmptyText));
    }
}
