//! App manifest entries
//!
//! A manifest is the raw per-repository JSON object mapping app name to
//! install metadata. Every field is optional on the wire; malformed or
//! incomplete entries are kept as-is and simply fail the installability
//! check at resolution time instead of being rejected during fetch.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Raw manifest: app name -> entry, in manifest order
pub type Manifest = IndexMap<String, AppEntry>;

/// One catalog entry describing how to install, run and remove an app
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppEntry {
    /// Version advertised by the repository (free-form, compared as an
    /// exact string, never parsed as semver)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Binary installer download location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Extra arguments that suppress the installer UI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silent_install_args: Option<String>,

    /// Path of the installed executable, offered for launch after install
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exec_path: Option<String>,

    /// Command line that removes the app
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uninstall_command: Option<String>,

    /// Inline install script; takes precedence over `url`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_script: Option<String>,
}

/// Resolved installation method for an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMethod<'a> {
    /// Run an inline script through the script interpreter
    Script(&'a str),
    /// Download a binary installer and execute it
    Binary(&'a str),
}

impl AppEntry {
    /// Resolve the install method once: `install_script` wins over `url`;
    /// an entry with neither is catalog-listed but not installable.
    pub fn install_method(&self) -> Option<InstallMethod<'_>> {
        if let Some(script) = self.install_script.as_deref() {
            Some(InstallMethod::Script(script))
        } else {
            self.url.as_deref().map(InstallMethod::Binary)
        }
    }

    pub fn is_installable(&self) -> bool {
        self.install_method().is_some()
    }

    /// Version string recorded on a successful binary install
    pub fn version_or_unknown(&self) -> &str {
        self.version.as_deref().unwrap_or("unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_takes_precedence_over_url() {
        let entry = AppEntry {
            install_script: Some("echo install".to_string()),
            url: Some("http://example.com/app.exe".to_string()),
            ..Default::default()
        };
        assert_eq!(
            entry.install_method(),
            Some(InstallMethod::Script("echo install"))
        );
    }

    #[test]
    fn url_alone_resolves_to_binary() {
        let entry = AppEntry {
            url: Some("http://example.com/app.exe".to_string()),
            ..Default::default()
        };
        assert_eq!(
            entry.install_method(),
            Some(InstallMethod::Binary("http://example.com/app.exe"))
        );
    }

    #[test]
    fn entry_without_method_is_not_installable() {
        let entry = AppEntry {
            version: Some("1.0".to_string()),
            description: Some("listed but not installable".to_string()),
            ..Default::default()
        };
        assert!(entry.install_method().is_none());
        assert!(!entry.is_installable());
    }

    #[test]
    fn missing_version_records_as_unknown() {
        let entry = AppEntry::default();
        assert_eq!(entry.version_or_unknown(), "unknown");
    }

    #[test]
    fn unknown_wire_fields_are_ignored() {
        let manifest: Manifest = serde_json::from_str(
            r#"{"foo": {"version": "1.0", "homepage": "http://example.com"}}"#,
        )
        .unwrap();
        assert_eq!(manifest["foo"].version.as_deref(), Some("1.0"));
    }
}
