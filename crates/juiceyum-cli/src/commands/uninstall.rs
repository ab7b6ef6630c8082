//! Uninstall command - remove one or more installed apps

use console::style;
use juiceyum_engine::{SystemRunner, Uninstaller};

use crate::context::AppContext;
use crate::error::Result;

pub async fn run(names: &[String]) -> Result<()> {
    let ctx = AppContext::open()?;
    let catalog = ctx.catalog().await?;
    let mut installed = ctx.installed()?;

    let runner = SystemRunner;
    let uninstaller = Uninstaller::new(&runner);

    for name in names {
        match uninstaller.uninstall(name, &catalog, &mut installed) {
            Ok(()) => {
                println!(
                    "{} Uninstalled {}",
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
