//! Clean command implementation.

use crate::cleaner::{CleanOptions, Cleaner};
use crate::cli::CleanArgs;
use crate::commands::{plural, print_items_table};
use crate::config::Config;
use crate::scanner::CacheScanner;
use anyhow::Result;
use humansize::{format_size, BINARY};
use std::io::{self, Write};

/// Run the clean command.
pub fn run(args: CleanArgs, config: &Config) -> Result<()> {
    let scanner = CacheScanner::for_current_user()?;
    let mut items = scanner.scan();

    // A category list on the command line overrides the configured set;
    // an empty set means everything is enabled.
    match &args.categories {
        Some(categories) if !categories.is_empty() => {
            items.retain(|item| categories.contains(&item.category));
        }
        _ => items.retain(|item| config.is_category_enabled(item.category)),
    }

    if items.is_empty() {
        println!("No cleanable caches found.");
        return Ok(());
    }

    print_items_table(&items);

    let total_size: u64 = items.iter().map(|item| item.size).sum();
    println!(
        "\nTotal: {} in {} item{}",
        format_size(total_size, BINARY),
        items.len(),
        plural(items.len())
    );

    // Confirmation
    if config.clean.confirm && !args.force && !args.dry_run {
        print!("\nProceed with cleanup? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if args.dry_run {
        println!("\n[DRY RUN] Would clean:");
    } else {
        println!("\nCleaning...");
    }

    let cleaner = Cleaner::new(CleanOptions {
        dry_run: args.dry_run,
    });
    let result = cleaner.clean_items(&items);

    // Print results
    println!("\nResults:");
    println!(
        "  Cleaned: {} item{}",
        result.cleaned_items,
        plural(result.cleaned_items)
    );
    println!("  Freed:   {}", format_size(result.freed_space, BINARY));
    println!("  Took:    {:.2}s", result.duration.as_secs_f64());

    if !result.category_stats.is_empty() {
        println!("\n  By category:");
        for (label, stats) in &result.category_stats {
            println!(
                "    {:<16} {} item{}, {}",
                label,
                stats.items_cleaned,
                plural(stats.items_cleaned),
                format_size(stats.space_freed, BINARY),
            );
        }
    }

    for error in &result.errors {
        eprintln!("  Error: {}", error);
    }

    if !result.success {
        std::process::exit(5); // Partial failure
    }

    Ok(())
}
