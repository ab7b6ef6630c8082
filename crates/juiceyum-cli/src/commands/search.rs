//! Search command - match apps by name or description

use crate::context::AppContext;
use crate::error::Result;

pub async fn run(term: &str) -> Result<()> {
    let ctx = AppContext::open()?;
    let catalog = ctx.catalog().await?;

    let matches = catalog.search(term);
    if matches.is_empty() {
        println!("No apps matching \"{term}\"");
        return Ok(());
    }

    println!("{:<24} {:<12} {}", "NAME", "VERSION", "DESCRIPTION");
    println!("{}", "-".repeat(72));
    for (name, entry) in matches {
        println!(
            "{:<24} {:<12} {}",
            name,
            entry.version_or_unknown(),
            entry.description.as_deref().unwrap_or("")
        );
    }

    Ok(())
}
