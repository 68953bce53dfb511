//! Markdown rendering of scraped contract documentation.

use super::scrape::ContractDoc;

/// One API page per contract. Sections with nothing in them are left out.
pub fn render_markdown(doc: &ContractDoc) -> String {
    let mut md = format!("# {}\n\n{}\n\n", doc.name, doc.description);

    if !doc.state_variables.is_empty() {
        md.push_str("## State Variables\n\n");
        for var in &doc.state_variables {
            md.push_str(&format!("### {}\n", var.name));
            md.push_str(&format!("- **Type**: `{}`\n", var.ty));
            md.push_str(&format!("- **Visibility**: `{}`\n", var.visibility));
            md.push_str(&format!("- **Description**: {}\n\n", var.description));
        }
    }

    if !doc.functions.is_empty() {
        md.push_str("## Functions\n\n");
        for func in &doc.functions {
            md.push_str(&format!("### `{}()`\n", func.name));
            md.push_str(&format!("- **Visibility**: `{}`\n", func.visibility));
            if !func.modifiers.is_empty() {
                md.push_str(&format!("- **Modifiers**: `{}`\n", func.modifiers.join(", ")));
            }
            md.push_str(&format!("- **Description**: {}\n\n", func.description));

            if !func.parameters.is_empty() {
                md.push_str("**Parameters**:\n");
                for param in &func.parameters {
                    md.push_str(&format!(
                        "- `{} {}`: {}\n",
                        param.ty, param.name, param.description
                    ));
                }
                md.push('\n');
            }

            if !func.returns.is_empty() {
                md.push_str("**Returns**:\n");
                for ret in &func.returns {
                    md.push_str(&format!("- `{}`: {}\n", ret.ty, ret.description));
                }
                md.push('\n');
            }
        }
    }

    if !doc.events.is_empty() {
        md.push_str("## Events\n\n");
        for event in &doc.events {
            md.push_str(&format!("### `{}`\n{}\n\n", event.name, event.description));

            if !event.parameters.is_empty() {
                md.push_str("**Parameters**:\n");
                for param in &event.parameters {
                    let indexed = if param.indexed { " (indexed)" } else { "" };
                    md.push_str(&format!("- `{} {}`{indexed}\n", param.ty, param.name));
                }
                md.push('\n');
            }
        }
    }

    md
}

/// `INDEX.md` linking every generated page.
pub fn render_index<S: AsRef<str>>(names: &[S]) -> String {
    let mut index = String::from("# API Reference\n\n");
    index.push_str("Complete API documentation for all smart contracts.\n\n");
    index.push_str("## Contracts\n\n");
    for name in names {
        let name = name.as_ref();
        index.push_str(&format!("- [{name}](./{name}.md)\n"));
    }
    index
}
