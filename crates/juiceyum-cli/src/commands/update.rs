//! Update command - rebuild the catalog from every registered repository

use console::style;

use crate::context::AppContext;
use crate::error::Result;

pub async fn run() -> Result<()> {
    let ctx = AppContext::open()?;

    if ctx.registry.is_empty() {
        println!("No repositories configured, catalog will be empty.");
    }

    let aggregator = ctx.aggregator().on_repo(|name, outcome| match outcome {
        Ok(count) => println!("Updating {name}... done ({count} apps)"),
        Err(e) => println!("Updating {name}... {} {e}", style("failed:").red()),
    });

    let catalog = aggregator.rebuild(&ctx.registry).await?;

    println!();
    println!(
        "{} Catalog updated: {} app(s) from {} repositories",
        style("✓").green().bold(),
        catalog.len(),
        ctx.registry.len()
    );

    Ok(())
}
