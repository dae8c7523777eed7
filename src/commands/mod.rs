//! Command implementations for the CLI.

pub mod clean;
pub mod scan;

use crate::scanner::CleaningItem;
use humansize::{format_size, BINARY};

/// Print the inventory as a table.
pub(crate) fn print_items_table(items: &[CleaningItem]) {
    println!("\n  {:<16} {:<50} {:>10}", "CATEGORY", "PATH", "SIZE");
    println!("  {}", "─".repeat(80));

    for item in items {
        let path_str = item.path.display().to_string();
        let path_display = if path_str.len() > 48 {
            format!("...{}", &path_str[path_str.len() - 45..])
        } else {
            path_str
        };

        println!(
            "  {:<16} {:<50} {:>10}",
            item.category.display_name(),
            path_display,
            format_size(item.size, BINARY),
        );
    }
}

pub(crate) fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
