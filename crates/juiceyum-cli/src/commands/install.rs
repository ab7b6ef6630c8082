//! Install command - install one or more apps from the catalog
//!
//! Per-app failures are reported and the loop continues; a batch with
//! failures still exits zero. Only store-level failures abort.

use std::path::Path;

use console::style;
use juiceyum_engine::{InstallOptions, InstallOutcome, Installer, StdinPrompter, SystemRunner};

use crate::context::AppContext;
use crate::error::Result;
use crate::progress;

pub async fn run(names: &[String], download_dir: &Path, silent: bool) -> Result<()> {
    let ctx = AppContext::open()?;
    let catalog = ctx.catalog().await?;
    let mut installed = ctx.installed()?;

    let downloader = progress::with_progress_bar(ctx.downloader());
    let runner = SystemRunner;
    let prompter = StdinPrompter;
    let installer = Installer::new(&downloader, &runner, &prompter);
    let options = InstallOptions {
        download_dir: download_dir.to_path_buf(),
        silent,
    };

    for name in names {
        println!("{} Installing {}...", style("→").blue().bold(), style(name).cyan());
        match installer.install(name, &catalog, &mut installed, &options).await {
            Ok(InstallOutcome::Binary { version }) => {
                println!(
                    "{} Installed {} {}",
                    style("✓").green().bold(),
                    style(name).cyan(),
                    style(&version).yellow()
                );
            }
            Ok(InstallOutcome::Script) => {
                println!(
                    "{} Install script for {} completed",
                    style("✓").green().bold(),
                    style(name).cyan()
                );
            }
            Err(e) => {
                eprintln!("{} {}: {e}", style("✗").red().bold(), name);
            }
        }
    }

    Ok(())
}
