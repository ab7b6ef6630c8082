//! Upgrade command - reinstall apps whose catalog version changed

use std::path::Path;

use console::style;
use juiceyum_engine::{
    InstallOptions, Installer, StdinPrompter, SystemRunner, UpgradeEngine,
};

use crate::context::AppContext;
use crate::error::Result;
use crate::progress;

pub async fn run(download_dir: &Path, silent: bool) -> Result<()> {
    let ctx = AppContext::open()?;
    let catalog = ctx.catalog().await?;
    let mut installed = ctx.installed()?;

    if installed.is_empty() {
        println!("No installed apps to upgrade.");
        return Ok(());
    }

    let downloader = progress::with_progress_bar(ctx.downloader());
    let runner = SystemRunner;
    let prompter = StdinPrompter;
    let installer = Installer::new(&downloader, &runner, &prompter);
    let options = InstallOptions {
        download_dir: download_dir.to_path_buf(),
        silent,
    };

    let report = UpgradeEngine::new(&installer)
        .run(&catalog, &mut installed, &options)
        .await;

    for name in &report.up_to_date {
        println!("{} {} is already up to date", style("✓").green(), name);
    }
    for name in &report.missing {
        println!(
            "{} {} is no longer in the catalog, skipped",
            style("⚠").yellow(),
            name
        );
    }
    for (name, version) in &report.upgraded {
        println!(
            "{} Upgraded {} to {}",
            style("✓").green().bold(),
            style(name).cyan(),
            style(version).yellow()
        );
    }
    for (name, error) in &report.failed {
        eprintln!("{} {}: {error}", style("✗").red().bold(), name);
    }

    Ok(())
}
