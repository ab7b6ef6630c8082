//! Juiceyum installation lifecycle engine
//!
//! Drives the install, uninstall and upgrade of catalog apps:
//!
//! - **Installer**: resolves an app to its install method (inline script or
//!   downloaded binary), executes it, and records the installed version on
//!   confirmed success
//! - **Uninstaller**: runs the entry's uninstall command and removes the
//!   record on confirmed success
//! - **UpgradeEngine**: compares installed versions against the current
//!   catalog and reinstalls apps whose catalog version differs
//!
//! Command execution and user prompts go through the [`CommandRunner`] and
//! [`Prompter`] capability traits so the whole state machine runs against
//! mocks in tests. The installed-app store is only ever mutated on a zero
//! exit code, never on failure.

pub mod error;
pub mod exec;
pub mod install;
pub mod uninstall;
pub mod upgrade;

// Re-exports for convenience
pub use error::EngineError;
pub use exec::{CommandRunner, Prompter, StdinPrompter, SystemRunner};
pub use install::{InstallOptions, InstallOutcome, Installer};
pub use uninstall::Uninstaller;
pub use upgrade::{UpgradeAction, UpgradeEngine, UpgradeReport};
