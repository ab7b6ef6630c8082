//! Repository management commands

use console::style;
use juiceyum_core::AddOutcome;

use crate::context::AppContext;
use crate::error::Result;

/// Register a new manifest URL
pub fn add(url: &str) -> Result<()> {
    let mut ctx = AppContext::open()?;

    match ctx.registry.add(url)? {
        AddOutcome::Added { name } => {
            println!(
                "{} \"{}\" has been added to your repositories",
                style("✓").green().bold(),
                name
            );
            println!();
            println!("Run 'juiceyum apps update' to fetch its manifest");
        }
        AddOutcome::DuplicateUrl { name } => {
            println!(
                "{} URL already registered as \"{}\", nothing changed",
                style("⚠").yellow(),
                name
            );
        }
    }

    Ok(())
}

/// Remove a repository by name
pub fn remove(name: &str) -> Result<()> {
    let mut ctx = AppContext::open()?;

    if ctx.registry.remove(name)? {
        println!(
            "{} \"{}\" has been removed from your repositories",
            style("✓").green().bold(),
            name
        );
    } else {
        println!("{} No repository named \"{}\"", style("⚠").yellow(), name);
    }

    Ok(())
}

/// List registered repositories in insertion order
pub fn list() -> Result<()> {
    let ctx = AppContext::open()?;

    if ctx.registry.is_empty() {
        println!("No repositories configured.");
        println!();
        println!("Add one with: juiceyum repo add <url>");
        return Ok(());
    }

    println!("{:<24} {}", "NAME", "URL");
    println!("{}", "-".repeat(72));
    for (name, url) in ctx.registry.iter() {
        println!("{:<24} {}", name, url);
    }

    Ok(())
}
