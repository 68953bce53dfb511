use console::style;

use fhe_scaffold_core::catalog;

use crate::output;

/// Print every category with its examples.
pub fn run() {
    output::print_header("FHEVM example catalog");
    for (key, category) in catalog::categories() {
        println!();
        println!(
            "{} {} [{}]",
            style(key).bold(),
            category.name,
            category.difficulty.label()
        );
        println!("  {}", style(category.description).dim());
        for example in category.examples {
            println!(
                "  - {} ({}, {}): {}",
                example.name,
                example.contract_name,
                example.difficulty.label(),
                example.title
            );
        }
    }
    println!();
}

/// Short listing used when `category` is run without a key.
pub fn print_available() {
    println!("Available categories:");
    for (key, category) in catalog::categories() {
        let examples: Vec<&str> = category.examples.iter().map(|e| e.name).collect();
        println!("  {}: {}", style(key).bold(), category.description);
        println!("    {}", style(examples.join(", ")).dim());
    }
}
