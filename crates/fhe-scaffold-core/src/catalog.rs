//! Built-in catalog of example categories.
//!
//! The catalog is a static, read-only table: each category groups a handful of
//! example definitions around one learning theme. Scaffolding reads from it and
//! never mutates it.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, ScaffoldError};

/// Overall difficulty of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CategoryLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Upper-case label used in generated documents.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "BEGINNER",
            Self::Intermediate => "INTERMEDIATE",
            Self::Advanced => "ADVANCED",
        }
    }
}

/// Difficulty of a single example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExampleLevel {
    Easy,
    Medium,
    Hard,
}

impl ExampleLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }
}

impl fmt::Display for CategoryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ExampleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed set of category keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryKey {
    Basic,
    Encryption,
    Decryption,
    AccessControl,
    Advanced,
}

impl CategoryKey {
    /// Every key, in catalog order.
    pub const ALL: [CategoryKey; 5] = [
        Self::Basic,
        Self::Encryption,
        Self::Decryption,
        Self::AccessControl,
        Self::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Encryption => "encryption",
            Self::Decryption => "decryption",
            Self::AccessControl => "access-control",
            Self::Advanced => "advanced",
        }
    }

    /// The catalog entry for this key.
    pub fn config(&self) -> Result<&'static CategoryConfig> {
        resolve(self.as_str())
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKey {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| unknown_category(s))
    }
}

/// One scaffolded unit: a contract, its test suite and its README.
#[derive(Debug, Clone, Serialize)]
pub struct ExampleDefinition {
    /// Directory slug (filesystem-safe).
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Solidity contract identifier, also the base name of the generated files.
    pub contract_name: &'static str,
    pub concepts: &'static [&'static str],
    pub difficulty: ExampleLevel,
}

/// A named group of examples sharing a learning theme.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryConfig {
    pub name: &'static str,
    pub description: &'static str,
    pub difficulty: CategoryLevel,
    /// Ordered steps shown in the category README.
    pub learning_path: &'static [&'static str],
    pub examples: &'static [ExampleDefinition],
}

impl CategoryConfig {
    /// Look up an example by its slug.
    pub fn example(&self, name: &str) -> Option<&ExampleDefinition> {
        self.examples.iter().find(|e| e.name == name)
    }
}

static CATEGORIES: &[(&str, CategoryConfig)] = &[
    (
        "basic",
        CategoryConfig {
            name: "Basic FHE Operations",
            description: "Fundamental FHE concepts and encrypted data types",
            difficulty: CategoryLevel::Beginner,
            learning_path: &[
                "Start with Counter to understand euint types",
                "Learn arithmetic operations with Add/Subtract",
                "Master comparisons with Equality example",
                "Combine concepts in a simple application",
            ],
            examples: &[
                ExampleDefinition {
                    name: "counter",
                    title: "Encrypted Counter",
                    description: "Basic FHE counter with encrypted state",
                    contract_name: "EncryptedCounter",
                    concepts: &["euint32", "FHE.asEuint", "FHE.add", "FHE.sub"],
                    difficulty: ExampleLevel::Easy,
                },
                ExampleDefinition {
                    name: "arithmetic",
                    title: "Arithmetic Operations",
                    description: "FHE arithmetic: add, subtract, multiply",
                    contract_name: "ArithmeticOperations",
                    concepts: &["FHE.add", "FHE.sub", "FHE.mul", "Encrypted math"],
                    difficulty: ExampleLevel::Easy,
                },
                ExampleDefinition {
                    name: "equality",
                    title: "Equality Comparison",
                    description: "Compare encrypted values for equality",
                    contract_name: "EqualityComparison",
                    concepts: &["FHE.eq", "ebool", "Encrypted comparisons"],
                    difficulty: ExampleLevel::Medium,
                },
            ],
        },
    ),
    (
        "encryption",
        CategoryConfig {
            name: "Encryption Techniques",
            description: "Input encryption and external data handling",
            difficulty: CategoryLevel::Beginner,
            learning_path: &[
                "Understand encrypted inputs from clients",
                "Learn input proof validation",
                "Encrypt single values",
                "Handle multiple encrypted values",
            ],
            examples: &[
                ExampleDefinition {
                    name: "single-encryption",
                    title: "Single Value Encryption",
                    description: "Encrypt and store a single value",
                    contract_name: "SingleValueEncryption",
                    concepts: &["encryptedInput", "FHE.fromExternal", "Input proof"],
                    difficulty: ExampleLevel::Easy,
                },
                ExampleDefinition {
                    name: "multi-encryption",
                    title: "Multiple Value Encryption",
                    description: "Encrypt and manage multiple values",
                    contract_name: "MultiValueEncryption",
                    concepts: &["Multiple euints", "Batch operations", "Input validation"],
                    difficulty: ExampleLevel::Medium,
                },
            ],
        },
    ),
    (
        "decryption",
        CategoryConfig {
            name: "Decryption Patterns",
            description: "User and public decryption techniques",
            difficulty: CategoryLevel::Intermediate,
            learning_path: &[
                "Learn user-based decryption",
                "Understand public decryption use cases",
                "Combine with encryption patterns",
                "Implement secure access control",
            ],
            examples: &[
                ExampleDefinition {
                    name: "user-decryption",
                    title: "User Decryption",
                    description: "Allow users to decrypt their encrypted data",
                    contract_name: "UserDecryption",
                    concepts: &["User access", "Decryption permissions", "Privacy"],
                    difficulty: ExampleLevel::Medium,
                },
                ExampleDefinition {
                    name: "public-decryption",
                    title: "Public Decryption",
                    description: "Publicly accessible decrypted results",
                    contract_name: "PublicDecryption",
                    concepts: &["Public decryption", "Result sharing", "Verification"],
                    difficulty: ExampleLevel::Hard,
                },
            ],
        },
    ),
    (
        "access-control",
        CategoryConfig {
            name: "Access Control",
            description: "Permission management and authorized access",
            difficulty: CategoryLevel::Intermediate,
            learning_path: &[
                "Learn FHE.allow pattern",
                "Master FHE.allowThis for contract access",
                "Understand input proof requirements",
                "Implement role-based access",
            ],
            examples: &[
                ExampleDefinition {
                    name: "allow-pattern",
                    title: "FHE.allow Pattern",
                    description: "Grant access to specific addresses",
                    contract_name: "AllowPattern",
                    concepts: &["FHE.allow", "Access grants", "Permission management"],
                    difficulty: ExampleLevel::Medium,
                },
                ExampleDefinition {
                    name: "allowThis-pattern",
                    title: "FHE.allowThis Pattern",
                    description: "Allow contract internal access",
                    contract_name: "AllowThisPattern",
                    concepts: &["FHE.allowThis", "Internal access", "Self-referential"],
                    difficulty: ExampleLevel::Medium,
                },
                ExampleDefinition {
                    name: "role-based",
                    title: "Role-Based Access Control",
                    description: "RBAC with encrypted data",
                    contract_name: "RoleBasedAccess",
                    concepts: &["RBAC", "Multiple roles", "Fine-grained access"],
                    difficulty: ExampleLevel::Hard,
                },
            ],
        },
    ),
    (
        "advanced",
        CategoryConfig {
            name: "Advanced Patterns",
            description: "Complex applications and patterns",
            difficulty: CategoryLevel::Advanced,
            learning_path: &[
                "Study blind auction implementation",
                "Learn secure voting mechanisms",
                "Explore privacy-preserving financial operations",
                "Build your own applications",
            ],
            examples: &[
                ExampleDefinition {
                    name: "blind-auction",
                    title: "Blind Auction",
                    description: "Privacy-preserving auction system",
                    contract_name: "BlindAuction",
                    concepts: &[
                        "Encrypted bids",
                        "Auction logic",
                        "Winner determination",
                        "Privacy",
                    ],
                    difficulty: ExampleLevel::Hard,
                },
                ExampleDefinition {
                    name: "confidential-voting",
                    title: "Confidential Voting",
                    description: "Private voting system",
                    contract_name: "ConfidentialVoting",
                    concepts: &["Encrypted votes", "Vote counting", "Tallying", "Privacy"],
                    difficulty: ExampleLevel::Hard,
                },
            ],
        },
    ),
];

/// All categories in catalog order.
pub fn categories() -> impl Iterator<Item = (&'static str, &'static CategoryConfig)> {
    CATEGORIES.iter().map(|(key, config)| (*key, config))
}

/// Category keys in catalog order.
pub fn category_keys() -> impl Iterator<Item = &'static str> {
    CATEGORIES.iter().map(|(key, _)| *key)
}

/// Resolve a category key to its configuration.
///
/// Fails with [`ScaffoldError::ConfigNotFound`] when the key is unknown. The error
/// carries the list of valid keys so callers can print it.
pub fn resolve(key: &str) -> Result<&'static CategoryConfig> {
    CATEGORIES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, config)| config)
        .ok_or_else(|| unknown_category(key))
}

fn unknown_category(key: &str) -> ScaffoldError {
    ScaffoldError::ConfigNotFound {
        key: key.to_string(),
        available: category_keys().collect::<Vec<_>>().join(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_category_resolves_with_distinct_contracts() {
        for key in category_keys() {
            let category = resolve(key).unwrap();
            assert!(!category.examples.is_empty(), "{key} has no examples");

            let names: HashSet<_> = category.examples.iter().map(|e| e.contract_name).collect();
            assert_eq!(names.len(), category.examples.len(), "{key} repeats a contract name");
        }
    }

    #[test]
    fn test_category_keys_match_catalog() {
        let from_enum: Vec<&str> = CategoryKey::ALL.iter().map(CategoryKey::as_str).collect();
        assert_eq!(from_enum, category_keys().collect::<Vec<_>>());

        for key in CategoryKey::ALL {
            assert_eq!(key.as_str().parse::<CategoryKey>().unwrap(), key);
            assert!(key.config().is_ok());
        }
        assert_eq!(
            serde_json::to_value(CategoryKey::AccessControl).unwrap(),
            "access-control"
        );
        assert!(matches!(
            "nonexistent".parse::<CategoryKey>(),
            Err(ScaffoldError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_resolve_unknown_lists_available_keys() {
        let err = resolve("nonexistent").unwrap_err();
        match err {
            ScaffoldError::ConfigNotFound { key, available } => {
                assert_eq!(key, "nonexistent");
                assert_eq!(
                    available,
                    "basic, encryption, decryption, access-control, advanced"
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_basic_category_shape() {
        let basic = resolve("basic").unwrap();
        let slugs: Vec<_> = basic.examples.iter().map(|e| e.name).collect();
        assert_eq!(slugs, ["counter", "arithmetic", "equality"]);
        assert_eq!(basic.learning_path.len(), 4);
        assert_eq!(basic.difficulty, CategoryLevel::Beginner);
    }

    #[test]
    fn test_slugs_are_filesystem_safe() {
        for (_, category) in categories() {
            for example in category.examples {
                assert!(example
                    .name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-'));
                assert!(example
                    .contract_name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric()));
            }
        }
    }

    #[test]
    fn test_example_lookup() {
        let category = resolve("access-control").unwrap();
        let example = category.example("role-based").unwrap();
        assert_eq!(example.contract_name, "RoleBasedAccess");
        assert!(category.example("missing").is_none());
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(CategoryLevel::Intermediate.label(), "INTERMEDIATE");
        assert_eq!(ExampleLevel::Hard.label(), "HARD");
        assert_eq!(ExampleLevel::Easy.to_string(), "easy");
    }
}
