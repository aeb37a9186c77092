use colored::Colorize;
use std::io::{self, Write};

use crate::registry::ComponentKind;
use crate::wire::{PlanNode, UiPlan};

pub fn show_plan(plan: &UiPlan) {
    println!("\n=== PLAN ===");
    println!("layout: {}", plan.layout.cyan().bold());
    if plan.components.is_empty() {
        println!("(no components)");
        return;
    }
    for node in &plan.components {
        show_node(node, 1);
    }
    println!();
}

fn show_node(node: &PlanNode, depth: usize) {
    let indent = "  ".repeat(depth);
    let tag = match ComponentKind::lookup(&node.kind) {
        Some(ComponentKind::Layout) => node.kind.cyan().bold(),
        Some(ComponentKind::Button) => node.kind.green().bold(),
        Some(ComponentKind::Input) => node.kind.magenta().bold(),
        Some(ComponentKind::Table) => node.kind.blue().bold(),
        Some(ComponentKind::Card) => node.kind.yellow().bold(),
        None => node.kind.red().bold(),
    };
    println!("{indent}{tag}{}", props_summary(node));
    for child in node.children.as_deref().unwrap_or_default() {
        show_node(child, depth + 1);
    }
}

fn props_summary(node: &PlanNode) -> String {
    let Some(props) = node.props.as_ref() else {
        return String::new();
    };
    if props.is_empty() {
        return String::new();
    }
    let rendered = props
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!("  {rendered}")
}

pub fn confirm(prompt: &str) -> bool {
    print!("{} [y/N]: ", prompt);
    let _ = io::stdout().flush();
    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        let ans = s.trim().to_lowercase();
        ans == "y" || ans == "yes"
    } else {
        false
    }
}

/// Render the full validation error list, numbered, after the caller has
/// decided the plan is rejected.
pub fn print_validation_dashboard(errors: &[String]) {
    println!(
        "\n{}",
        "┏━━━━━━━━━━━━━━━━━━━━ Validation Failed ━━━━━━━━━━━━━━━━━━┓".bold()
    );
    println!(
        "  {}: {}",
        "Violations".red().bold(),
        errors.len()
    );
    println!("{}", "┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛".bold());
    for (i, error) in errors.iter().enumerate() {
        println!("{}. {}", i + 1, error.red());
    }
    println!();
}

pub fn print_generation_summary(code: &str, out_path: Option<&std::path::Path>) {
    println!(
        "\n{}",
        "┏━━━━━━━━━━━━━━━━━━━━━ Generated UI ━━━━━━━━━━━━━━━━━━━━━━┓".bold()
    );
    println!(
        "  {}: {}B   {}: {}",
        "Size".bold(),
        code.len(),
        "Written to".bold(),
        match out_path {
            Some(p) => p.display().to_string(),
            None => "(dry run)".to_string(),
        }
    );
    println!("{}", "┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛".bold());
    println!("{code}");
}
