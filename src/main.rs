use std::path::Path;

use anyhow::{Context, Result};

use roster_split::process_roster;

// Fixed locations; the tool takes no flags.
const INPUT_FILE: &str = "public/data/rosters/temp.csv";
const OUTPUT_DIR: &str = "public/data/rosters";

fn main() -> Result<()> {
    env_logger::init();

    let input = Path::new(INPUT_FILE);
    if !input.exists() {
        println!("Error: Input file '{}' not found!", INPUT_FILE);
        return Ok(());
    }

    println!("Starting roster processing...");
    println!("Input file: {}", INPUT_FILE);
    println!("Output directory: {}", OUTPUT_DIR);
    println!("{}", "-".repeat(60));

    let summary = process_roster(input, Path::new(OUTPUT_DIR))
        .context("Failed to process roster")?;
    log::debug!(
        "Wrote {} team files, skipped {} unmapped teams",
        summary.written.len(),
        summary.skipped.len()
    );

    println!("{}", "-".repeat(60));
    println!("Roster processing completed!");

    Ok(())
}
