//! Scan command implementation.

use crate::cli::ScanArgs;
use crate::commands::{plural, print_items_table};
use crate::scanner::CacheScanner;
use anyhow::Result;
use humansize::{format_size, BINARY};

/// Run the scan command.
pub fn run(args: ScanArgs) -> Result<()> {
    let scanner = CacheScanner::for_current_user()?;
    let mut items = scanner.scan();

    if let Some(categories) = &args.categories {
        if !categories.is_empty() {
            items.retain(|item| categories.contains(&item.category));
        }
    }

    // Biggest wins first
    items.sort_by(|a, b| b.size.cmp(&a.size));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No cleanable caches found.");
        return Ok(());
    }

    print_items_table(&items);

    let total: u64 = items.iter().map(|item| item.size).sum();
    println!(
        "\nTotal: {} in {} item{}",
        format_size(total, BINARY),
        items.len(),
        plural(items.len())
    );

    Ok(())
}
