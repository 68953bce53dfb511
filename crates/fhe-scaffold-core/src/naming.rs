//! Identifier helpers for generated projects.

use crate::error::{Result, ScaffoldError};

/// Convert a user-supplied example name into a Solidity contract identifier.
///
/// Words are split on `-`, `_` and whitespace; each word gets an upper-case first
/// letter and keeps the rest of its casing, so an already PascalCase name passes
/// through unchanged.
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Lower-case directory/package slug for a single-example project.
pub fn to_slug(s: &str) -> String {
    s.to_lowercase()
}

/// Require a Solidity identifier: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn validate_identifier(s: &str) -> Result<()> {
    let mut chars = s.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(ScaffoldError::InvalidName {
            value: s.to_string(),
            reason: "contract name must be a Solidity identifier ([A-Za-z_][A-Za-z0-9_]*)",
        });
    }
    Ok(())
}

/// Require a slug usable as a single directory name.
pub fn validate_slug(s: &str) -> Result<()> {
    let reason = if s.trim().is_empty() {
        Some("name must not be empty")
    } else if s.contains(['/', '\\']) {
        Some("name must not contain path separators")
    } else if s.contains("..") || s == "." {
        Some("name must not contain '..' or be '.'")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(ScaffoldError::InvalidName {
            value: s.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case_from_kebab() {
        assert_eq!(to_pascal_case("blind-auction"), "BlindAuction");
        assert_eq!(to_pascal_case("my_example name"), "MyExampleName");
    }

    #[test]
    fn test_pascal_case_keeps_inner_casing() {
        assert_eq!(to_pascal_case("MyExample"), "MyExample");
        assert_eq!(to_pascal_case("allowThis-pattern"), "AllowThisPattern");
    }

    #[test]
    fn test_pascal_case_collapses_separators() {
        assert_eq!(to_pascal_case("--a__b  c"), "ABC");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_slug() {
        assert_eq!(to_slug("MyExample"), "myexample");
    }

    #[test]
    fn test_identifier_validation() {
        for ok in ["MyExample", "_Private", "Vote2"] {
            assert!(validate_identifier(ok).is_ok(), "{ok}");
        }
        for bad in ["", "2Fast", "My.example", "../outside", "a-b", "Naïve"] {
            assert!(
                matches!(validate_identifier(bad), Err(ScaffoldError::InvalidName { .. })),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_slug_validation() {
        assert!(validate_slug("my-example").is_ok());
        for bad in ["", "  ", ".", "..", "../outside", "a/b", "a\\b", "x..y"] {
            assert!(
                matches!(validate_slug(bad), Err(ScaffoldError::InvalidName { .. })),
                "{bad}"
            );
        }
    }
}
