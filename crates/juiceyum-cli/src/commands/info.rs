//! Info command - everything the catalog knows about one app

use console::style;

use crate::context::AppContext;
use crate::error::Result;
use crate::suggest;

pub async fn run(name: &str) -> Result<()> {
    let ctx = AppContext::open()?;
    let catalog = ctx.catalog().await?;
    let installed = ctx.installed()?;

    let Some(entry) = catalog.get(name) else {
        println!("{} App \"{}\" not found in catalog", style("✗").red(), name);
        if let Some(suggestion) = suggest::closest(name, catalog.names()) {
            println!("  Did you mean \"{suggestion}\"?");
        }
        return Ok(());
    };

    println!("{}", style(name).cyan().bold());
    println!("  Version:     {}", entry.version_or_unknown());
    if let Some(description) = &entry.description {
        println!("  Description: {description}");
    }
    if let Some(url) = &entry.url {
        println!("  Download:    {url}");
    }
    if let Some(exec_path) = &entry.exec_path {
        println!("  Executable:  {exec_path}");
    }

    let method = match entry.install_method() {
        Some(juiceyum_core::InstallMethod::Script(_)) => "script".to_string(),
        Some(juiceyum_core::InstallMethod::Binary(_)) => {
            if entry.silent_install_args.is_some() {
                "binary (supports silent install)".to_string()
            } else {
                "binary".to_string()
            }
        }
        None => format!("{}", style("not installable").yellow()),
    };
    println!("  Install:     {method}");
    println!(
        "  Uninstall:   {}",
        if entry.uninstall_command.is_some() {
            "supported"
        } else {
            "not supported"
        }
    );

    match installed.version_of(name) {
        Some(version) => println!("  Installed:   {}", style(version).green()),
        None => println!("  Installed:   no"),
    }

    Ok(())
}
