//! Composite identifiers for entities keyed by two natural keys
//!
//! The pair is joined with `/` and no escaping is applied, so neither part
//! may itself contain `/`.

use crate::error::{AdminError, Result};

const SEPARATOR: char = '/';

/// Join two identifiers into a single import ID (`"<a>/<b>"`)
pub fn build_two_part_id(a: &str, b: &str) -> String {
    format!("{}{}{}", a, SEPARATOR, b)
}

/// Split an import ID into its two parts
///
/// `a_name` and `b_name` label the parts in the error message.
pub fn split_two_part_id(id: &str, a_name: &str, b_name: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = id.split(SEPARATOR).collect();
    match parts.as_slice() {
        [a, b] if !a.is_empty() && !b.is_empty() => Ok((a.to_string(), b.to_string())),
        _ => Err(AdminError::InvalidId(format!(
            "unexpected format of ID ({}), expected {}/{}",
            id, a_name, b_name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_two_part_id() {
        assert_eq!(
            build_two_part_id("wrkspc_01", "user_01"),
            "wrkspc_01/user_01"
        );
    }

    #[test]
    fn test_round_trip() {
        let pairs = [("wrkspc_01", "user_01"), ("a", "b"), ("x-y_z", "123")];
        for (a, b) in pairs {
            let id = build_two_part_id(a, b);
            let parsed = split_two_part_id(&id, "workspace_id", "user_id").unwrap();
            assert_eq!(parsed, (a.to_string(), b.to_string()));
        }
    }

    #[test]
    fn test_split_rejects_malformed_ids() {
        for id in ["", "/", "abc", "abc/", "/abc", "a/b/c", "a//b"] {
            let result = split_two_part_id(id, "workspace_id", "user_id");
            assert!(result.is_err(), "expected '{}' to be rejected", id);
        }
    }

    #[test]
    fn test_split_error_message() {
        let err = split_two_part_id("only-one", "workspace_id", "user_id").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("only-one"));
        assert!(msg.contains("workspace_id/user_id"));
    }

    #[test]
    fn test_embedded_separator_does_not_round_trip() {
        let id = build_two_part_id("a/b", "c");
        assert!(split_two_part_id(&id, "workspace_id", "user_id").is_err());
    }
}
