//! List command - every app in the catalog, with install state

use console::style;

use crate::context::AppContext;
use crate::error::Result;

pub async fn run() -> Result<()> {
    let ctx = AppContext::open()?;
    let catalog = ctx.catalog().await?;
    let installed = ctx.installed()?;

    if catalog.is_empty() {
        println!("Catalog is empty. Run 'juiceyum apps update' first.");
        return Ok(());
    }

    println!(
        "{:<24} {:<12} {:<12} {}",
        "NAME", "VERSION", "INSTALLED", "DESCRIPTION"
    );
    println!("{}", "-".repeat(80));

    for (name, entry) in &catalog.entries {
        let installed_version = installed.version_of(name).unwrap_or("-");
        let description = entry.description.as_deref().unwrap_or("");
        println!(
            "{:<24} {:<12} {:<12} {}",
            name,
            entry.version_or_unknown(),
            installed_version,
            description
        );
    }

    println!();
    println!(
        "{} app(s), {} installed",
        catalog.len(),
        style(installed.len()).green()
    );

    Ok(())
}
