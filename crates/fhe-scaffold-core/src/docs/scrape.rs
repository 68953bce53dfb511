//! Best-effort structural scraping of Solidity sources.
//!
//! This is pattern matching over text, not a parser. Only NatSpec `/** ... */`
//! blocks are read; `///` comments are ignored. Anything the patterns do not
//! recognize degrades to an empty list, an empty string, `"Unknown"` or
//! `"No description"`. Scraping never fails.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Placeholder for a name or type that could not be recovered.
pub const UNKNOWN: &str = "Unknown";

/// Placeholder for a missing doc comment.
pub const NO_DESCRIPTION: &str = "No description";

/// Body of a `/** ... */` block. The body cannot contain `*/`, so one match never
/// spans two comments.
const DOC_BLOCK: &str = r"/\*\*((?:[^*]|\*+[^*/])*)\*+/";

static CONTRACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(?:abstract\s+)?contract\s+(\w+)").expect("valid regex")
});

static DOC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(DOC_BLOCK).expect("valid regex"));

static FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{DOC_BLOCK}\s*function\s+(\w+)\s*\(([^)]*)\)([^{{;]*)[{{;]"
    ))
    .expect("valid regex")
});

static EVENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bevent\s+(\w+)\s*\(([^)]*)\)\s*;").expect("valid regex")
});

static STATE_VAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{DOC_BLOCK}\s*([^;{{}}]+?)\s*;")).expect("valid regex")
});

/// A doc block directly followed by the `event` keyword.
static EVENT_DOC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{DOC_BLOCK}\s*event\b")).expect("valid regex")
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@(\w+)").expect("valid regex"));

/// Keywords that start a documented item which is not a state variable.
const NON_VARIABLE_KEYWORDS: &[&str] = &[
    "function",
    "event",
    "modifier",
    "constructor",
    "error",
    "struct",
    "enum",
    "emit",
    "return",
    "using",
    "import",
    "pragma",
    "contract",
    "interface",
    "library",
];

const DATA_LOCATIONS: &[&str] = &["memory", "storage", "calldata"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamDoc {
    pub name: String,
    pub ty: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnDoc {
    pub ty: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDoc {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ParamDoc>,
    pub returns: Vec<ReturnDoc>,
    /// Every word between the parameter list and `returns`, in source order.
    pub modifiers: Vec<String>,
    pub visibility: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventParam {
    pub name: String,
    pub ty: String,
    pub indexed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDoc {
    pub name: String,
    pub description: String,
    pub parameters: Vec<EventParam>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateVariableDoc {
    pub name: String,
    pub ty: String,
    pub description: String,
    pub visibility: String,
}

/// Everything recovered from one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractDoc {
    pub name: String,
    pub description: String,
    pub functions: Vec<FunctionDoc>,
    pub events: Vec<EventDoc>,
    pub state_variables: Vec<StateVariableDoc>,
}

/// Scrape a Solidity source file.
pub fn scrape(source: &str) -> ContractDoc {
    let name = CONTRACT_RE
        .captures(source)
        .map(|c| c[1].to_string())
        .unwrap_or_else(|| UNKNOWN.to_string());

    // Whole first block, tags included, with only the `*` decoration removed
    let description = DOC_RE
        .captures(source)
        .map(|c| clean_comment(&c[1]))
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    ContractDoc {
        name,
        description,
        functions: scrape_functions(source),
        events: scrape_events(source),
        state_variables: scrape_state_variables(source),
    }
}

fn scrape_functions(source: &str) -> Vec<FunctionDoc> {
    FUNCTION_RE
        .captures_iter(source)
        .map(|c| {
            let tags = NatSpec::parse(&c[1]);
            let trailer = &c[4];

            let head = match trailer.find("returns") {
                Some(idx) => &trailer[..idx],
                None => trailer,
            };
            let modifiers: Vec<String> = head.split_whitespace().map(str::to_string).collect();
            let visibility = ["public", "external", "private", "internal"]
                .into_iter()
                .find(|v| modifiers.iter().any(|m| m == v))
                .unwrap_or("internal")
                .to_string();

            let parameters = split_list(&c[3])
                .map(|param| {
                    let (ty, name) = split_declaration(param);
                    let name = name.trim_start_matches('_').to_string();
                    let description = tags.param(&name).unwrap_or_default().to_string();
                    ParamDoc {
                        name,
                        ty,
                        description,
                    }
                })
                .collect();

            // One entry per `@return` tag; the signature is not consulted
            let returns = tags
                .returns
                .iter()
                .map(|description| ReturnDoc {
                    ty: UNKNOWN.to_string(),
                    description: description.clone(),
                })
                .collect();

            FunctionDoc {
                name: c[2].to_string(),
                description: tags.description(),
                parameters,
                returns,
                modifiers,
                visibility,
            }
        })
        .collect()
}

fn scrape_events(source: &str) -> Vec<EventDoc> {
    EVENT_RE
        .captures_iter(source)
        .map(|c| {
            // Up to and including this event's own keyword
            let end = c.get(0).map_or(0, |m| m.start() + "event".len());
            let description = EVENT_DOC_RE
                .captures_iter(&source[..end])
                .last()
                .map(|doc| NatSpec::parse(&doc[1]).description())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string());

            let parameters = split_list(&c[2])
                .map(|param| {
                    let indexed = param.split_whitespace().any(|w| w == "indexed");
                    let cleaned: Vec<&str> =
                        param.split_whitespace().filter(|w| *w != "indexed").collect();
                    let (ty, name) = split_declaration(&cleaned.join(" "));
                    EventParam { name, ty, indexed }
                })
                .collect();

            EventDoc {
                name: c[1].to_string(),
                description,
                parameters,
            }
        })
        .collect()
}

fn scrape_state_variables(source: &str) -> Vec<StateVariableDoc> {
    STATE_VAR_RE
        .captures_iter(source)
        .filter_map(|c| {
            let declaration = c[2].trim();
            let first_word = declaration
                .split(|ch: char| ch.is_whitespace() || ch == '(')
                .next()
                .unwrap_or_default();
            if NON_VARIABLE_KEYWORDS.contains(&first_word) {
                return None;
            }

            let declaration = strip_initializer(declaration);
            let (ty, rest) = split_type(declaration);
            let words: Vec<&str> = rest.split_whitespace().collect();
            let (name, modifiers) = match words.split_last() {
                Some((name, modifiers)) => (name.to_string(), modifiers),
                None => (String::new(), &[][..]),
            };
            let visibility = ["public", "private", "internal"]
                .into_iter()
                .find(|v| modifiers.contains(v))
                .unwrap_or("internal")
                .to_string();

            Some(StateVariableDoc {
                name,
                ty,
                description: NatSpec::parse(&c[1]).description(),
                visibility,
            })
        })
        .collect()
}

/// NatSpec tags of one doc block.
struct NatSpec {
    lead: String,
    notice: Vec<String>,
    dev: Vec<String>,
    params: Vec<(String, String)>,
    returns: Vec<String>,
}

impl NatSpec {
    fn parse(body: &str) -> Self {
        let text = clean_comment(body);
        let mut spec = Self {
            lead: String::new(),
            notice: Vec::new(),
            dev: Vec::new(),
            params: Vec::new(),
            returns: Vec::new(),
        };

        let tags: Vec<_> = TAG_RE.captures_iter(&text).collect();
        let lead_end = tags
            .first()
            .and_then(|t| t.get(0))
            .map_or(text.len(), |m| m.start());
        spec.lead = text[..lead_end].trim().to_string();

        for (i, tag) in tags.iter().enumerate() {
            let (Some(whole), Some(kind)) = (tag.get(0), tag.get(1)) else {
                continue;
            };
            let end = tags
                .get(i + 1)
                .and_then(|t| t.get(0))
                .map_or(text.len(), |m| m.start());
            let value = text[whole.end()..end].trim();

            match kind.as_str() {
                "notice" => spec.notice.push(value.to_string()),
                "dev" => spec.dev.push(value.to_string()),
                "param" => {
                    let mut parts = value.splitn(2, char::is_whitespace);
                    let name = parts.next().unwrap_or_default().trim_start_matches('_');
                    let desc = parts.next().unwrap_or_default().trim();
                    spec.params.push((name.to_string(), desc.to_string()));
                }
                "return" => spec.returns.push(value.to_string()),
                _ => {}
            }
        }

        spec
    }

    /// Untagged lead text, then `@notice`, then `@dev`.
    fn description(&self) -> String {
        std::iter::once(self.lead.as_str())
            .chain(self.notice.iter().map(String::as_str))
            .chain(self.dev.iter().map(String::as_str))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, d)| d.as_str())
    }
}

/// Strip the leading `*` decoration from each comment line and join them.
fn clean_comment(body: &str) -> String {
    body.lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix('*').unwrap_or(line).trim()
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Comma-separated declarations, skipping empty entries.
fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|p| !p.is_empty())
}

/// Split `uint256 amount` / `bytes memory data` into `(type, name)`.
///
/// A lone word is taken as an unnamed type.
fn split_declaration(decl: &str) -> (String, String) {
    let words: Vec<&str> = decl.split_whitespace().collect();
    match words.split_last() {
        Some((last, rest)) if !rest.is_empty() && !DATA_LOCATIONS.contains(last) => {
            (rest.join(" "), last.to_string())
        }
        _ => (words.join(" "), String::new()),
    }
}

/// Drop a `= value` initializer, leaving `=>` inside mapping types alone.
fn strip_initializer(declaration: &str) -> &str {
    let bytes = declaration.as_bytes();
    let cut = bytes
        .iter()
        .enumerate()
        .find(|(i, b)| **b == b'=' && bytes.get(i + 1) != Some(&b'>'))
        .map_or(declaration.len(), |(i, _)| i);
    declaration[..cut].trim()
}

/// Split a state variable declaration into its type and the remainder.
///
/// `mapping(...)` types are taken up to their balanced closing parenthesis.
fn split_type(declaration: &str) -> (String, &str) {
    if declaration.starts_with("mapping") {
        let mut depth = 0usize;
        for (idx, ch) in declaration.char_indices() {
            match ch {
                '(' => depth += 1,
                ')' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        let ty = declaration[..=idx].split_whitespace().collect::<Vec<_>>().join(" ");
                        return (ty, &declaration[idx + 1..]);
                    }
                }
                _ => {}
            }
        }
        return (UNKNOWN.to_string(), "");
    }

    match declaration.split_once(char::is_whitespace) {
        Some((ty, rest)) => (ty.to_string(), rest),
        None => (declaration.to_string(), ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
// SPDX-License-Identifier: MIT
pragma solidity ^0.8.24;

/**
 * @title Vault
 * @notice Holds encrypted balances
 * @dev Demo only
 */
contract Vault is SepoliaConfig {
    /**
     * @notice Number of deposits
     */
    uint256 public depositCount;

    /** @notice Per-user balances */
    mapping(address => euint32) private balances;

    /**
     * @notice Emitted on deposit
     */
    event Deposited(address indexed user, uint256 amount);

    event Withdrawn(address indexed user);

    /**
     * @notice Deposit an encrypted amount
     * @param _amount The encrypted amount
     * @param proof Input proof
     */
    function deposit(externalEuint32 _amount, bytes calldata proof) external onlyOwner {
        depositCount++;
    }

    /**
     * @notice Current count
     * @return count Number of deposits
     */
    function getCount() external view returns (uint256 count) {
        return depositCount;
    }
}
"#;

    #[test]
    fn test_contract_header() {
        let doc = scrape(SAMPLE);
        assert_eq!(doc.name, "Vault");
        assert_eq!(
            doc.description,
            "@title Vault @notice Holds encrypted balances @dev Demo only"
        );
    }

    #[test]
    fn test_functions() {
        let doc = scrape(SAMPLE);
        assert_eq!(doc.functions.len(), 2);

        let deposit = &doc.functions[0];
        assert_eq!(deposit.name, "deposit");
        assert_eq!(deposit.visibility, "external");
        assert_eq!(deposit.modifiers, ["external", "onlyOwner"]);
        assert_eq!(deposit.description, "Deposit an encrypted amount");
        assert_eq!(
            deposit.parameters,
            [
                ParamDoc {
                    name: "amount".into(),
                    ty: "externalEuint32".into(),
                    description: "The encrypted amount".into(),
                },
                ParamDoc {
                    name: "proof".into(),
                    ty: "bytes calldata".into(),
                    description: "Input proof".into(),
                },
            ]
        );
        assert!(deposit.returns.is_empty());

        let get_count = &doc.functions[1];
        assert_eq!(get_count.modifiers, ["external", "view"]);
        assert_eq!(
            get_count.returns,
            [ReturnDoc {
                ty: UNKNOWN.into(),
                description: "count Number of deposits".into(),
            }]
        );
    }

    #[test]
    fn test_events() {
        let doc = scrape(SAMPLE);
        assert_eq!(doc.events.len(), 2);

        assert_eq!(doc.events[0].name, "Deposited");
        assert_eq!(doc.events[0].description, "Emitted on deposit");
        assert_eq!(
            doc.events[0].parameters,
            [
                EventParam {
                    name: "user".into(),
                    ty: "address".into(),
                    indexed: true,
                },
                EventParam {
                    name: "amount".into(),
                    ty: "uint256".into(),
                    indexed: false,
                },
            ]
        );

        assert_eq!(doc.events[1].name, "Withdrawn");
        // Undocumented events inherit the nearest documented event's text
        assert_eq!(doc.events[1].description, "Emitted on deposit");
    }

    #[test]
    fn test_event_before_any_event_doc_has_no_description() {
        let doc = scrape("/** @notice unrelated */\nuint256 x;\nevent A(uint x);");
        assert_eq!(doc.events[0].description, NO_DESCRIPTION);
    }

    #[test]
    fn test_undocumented_event_uses_nearest_event_doc() {
        let source = "/** @notice first */ event A(uint x);\n\
                      /** @notice second */ event B(uint y);\n\
                      event C(uint z);";
        let descriptions: Vec<String> =
            scrape(source).events.into_iter().map(|e| e.description).collect();
        assert_eq!(descriptions, ["first", "second", "second"]);

        let doc = scrape("/** @notice first */ event A(uint x); event B(uint y);");
        assert_eq!(doc.events[1].description, "first");
    }

    #[test]
    fn test_returns_come_only_from_return_tags() {
        let doc = scrape("/** @notice get */\nfunction g() external view returns (uint256) {}");
        assert_eq!(doc.functions[0].description, "get");
        assert!(doc.functions[0].returns.is_empty());
    }

    #[test]
    fn test_state_variables() {
        let doc = scrape(SAMPLE);
        assert_eq!(
            doc.state_variables,
            [
                StateVariableDoc {
                    name: "depositCount".into(),
                    ty: "uint256".into(),
                    description: "Number of deposits".into(),
                    visibility: "public".into(),
                },
                StateVariableDoc {
                    name: "balances".into(),
                    ty: "mapping(address => euint32)".into(),
                    description: "Per-user balances".into(),
                    visibility: "private".into(),
                },
            ]
        );
    }

    #[test]
    fn test_initializer_is_dropped() {
        assert_eq!(strip_initializer("uint256 public constant MAX = 10"), "uint256 public constant MAX");
        assert_eq!(
            strip_initializer("mapping(address => bool) public seen"),
            "mapping(address => bool) public seen"
        );
    }

    #[test]
    fn test_unrecognized_source_degrades() {
        let doc = scrape("// just a comment\nlibrary Helpers {}\n");
        assert_eq!(doc.name, UNKNOWN);
        assert_eq!(doc.description, NO_DESCRIPTION);
        assert!(doc.functions.is_empty());
        assert!(doc.events.is_empty());
        assert!(doc.state_variables.is_empty());
    }

    #[test]
    fn test_return_tag_without_signature_is_unknown() {
        let source = "/** @return the value */\nfunction f() external {}";
        let doc = scrape(source);
        assert_eq!(doc.functions[0].returns[0].ty, UNKNOWN);
        assert_eq!(doc.functions[0].returns[0].description, "the value");
    }

    #[test]
    fn test_malformed_comment_yields_empty_fields() {
        let source = "contract C {\n/** */\nfunction g(uint a) public {}\n}";
        let doc = scrape(source);
        assert_eq!(doc.name, "C");
        assert_eq!(doc.description, NO_DESCRIPTION);
        assert_eq!(doc.functions[0].description, "");
        assert_eq!(doc.functions[0].parameters[0].description, "");
    }
}
