//! Upgrade engine
//!
//! Compares every installed-app record against the current catalog and
//! reinstalls apps whose catalog version differs (exact string comparison,
//! no version ordering). Apps that vanished from the catalog are reported
//! and skipped, never uninstalled; the upgrade pass itself removes nothing
//! from the store.

use juiceyum_core::{Catalog, InstalledApps};

use crate::error::EngineError;
use crate::exec::{CommandRunner, Prompter};
use crate::install::{InstallOptions, Installer};

/// Planned action for one installed app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpgradeAction {
    /// Installed but no longer present in the catalog; skipped
    MissingFromCatalog { name: String },
    /// Catalog version equals the installed version
    UpToDate { name: String, version: String },
    /// Catalog version differs; reinstall
    Reinstall {
        name: String,
        from: String,
        to: String,
    },
}

/// What an upgrade pass did, per app
#[derive(Debug, Default)]
pub struct UpgradeReport {
    pub missing: Vec<String>,
    pub up_to_date: Vec<String>,
    pub upgraded: Vec<(String, String)>,
    pub failed: Vec<(String, EngineError)>,
}

/// Compute the per-app upgrade actions without executing anything.
pub fn plan(catalog: &Catalog, installed: &InstalledApps) -> Vec<UpgradeAction> {
    installed
        .iter()
        .map(|(name, installed_version)| match catalog.get(name) {
            None => UpgradeAction::MissingFromCatalog {
                name: name.to_string(),
            },
            Some(entry) => {
                let catalog_version = entry.version_or_unknown();
                if catalog_version == installed_version {
                    UpgradeAction::UpToDate {
                        name: name.to_string(),
                        version: installed_version.to_string(),
                    }
                } else {
                    UpgradeAction::Reinstall {
                        name: name.to_string(),
                        from: installed_version.to_string(),
                        to: catalog_version.to_string(),
                    }
                }
            }
        })
        .collect()
}

pub struct UpgradeEngine<'a, R, P> {
    installer: &'a Installer<'a, R, P>,
}

impl<'a, R: CommandRunner, P: Prompter> UpgradeEngine<'a, R, P> {
    pub fn new(installer: &'a Installer<'a, R, P>) -> Self {
        Self { installer }
    }

    /// Execute the plan. Per-app failures are collected, not propagated,
    /// so one failing reinstall never aborts the rest of the pass.
    pub async fn run(
        &self,
        catalog: &Catalog,
        installed: &mut InstalledApps,
        options: &InstallOptions,
    ) -> UpgradeReport {
        let mut report = UpgradeReport::default();

        for action in plan(catalog, installed) {
            match action {
                UpgradeAction::MissingFromCatalog { name } => {
                    tracing::warn!("'{name}' is no longer in the catalog, skipping");
                    report.missing.push(name);
                }
                UpgradeAction::UpToDate { name, .. } => report.up_to_date.push(name),
                UpgradeAction::Reinstall { name, to, .. } => {
                    match self.installer.install(&name, catalog, installed, options).await {
                        Ok(_) => report.upgraded.push((name, to)),
                        Err(e) => report.failed.push((name, e)),
                    }
                }
            }
        }

        report
    }
}
