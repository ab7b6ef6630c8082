//! Uninstaller
//!
//! Runs the catalog entry's uninstall command; only a zero exit code removes
//! the app from the installed store. A nonzero exit reports the code and
//! leaves the store untouched.

use juiceyum_core::{Catalog, InstalledApps};

use crate::error::{EngineError, Result};
use crate::exec::CommandRunner;

pub struct Uninstaller<'a, R> {
    runner: &'a R,
}

impl<'a, R: CommandRunner> Uninstaller<'a, R> {
    pub fn new(runner: &'a R) -> Self {
        Self { runner }
    }

    pub fn uninstall(
        &self,
        name: &str,
        catalog: &Catalog,
        installed: &mut InstalledApps,
    ) -> Result<()> {
        let entry = catalog.get(name).ok_or_else(|| EngineError::AppNotFound {
            name: name.to_string(),
        })?;
        let command = entry
            .uninstall_command
            .as_ref()
            .ok_or_else(|| EngineError::NoUninstallCommand {
                name: name.to_string(),
            })?;

        let code = self.runner.run_command(command)?;
        if code != 0 {
            return Err(EngineError::UninstallCommandFailed {
                name: name.to_string(),
                code,
            });
        }

        installed.remove(name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct MockRunner {
        exit_code: i32,
        commands: RefCell<Vec<String>>,
    }

    impl MockRunner {
        fn exiting(code: i32) -> Self {
            Self {
                exit_code: code,
                commands: RefCell::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for MockRunner {
        fn run_command(&self, command: &str) -> std::io::Result<i32> {
            self.commands.borrow_mut().push(command.to_string());
            Ok(self.exit_code)
        }

        fn run_script(&self, _script: &str) -> std::io::Result<i32> {
            unreachable!("uninstall never runs scripts")
        }

        fn launch(&self, _path: &str) -> std::io::Result<()> {
            unreachable!("uninstall never launches")
        }
    }

    fn catalog(json: &str) -> Catalog {
        serde_json::from_str(json).unwrap()
    }

    fn installed_with_foo(dir: &tempfile::TempDir) -> InstalledApps {
        let mut store = InstalledApps::load(&dir.path().join("installed.json")).unwrap();
        store.upsert("foo", "1.0").unwrap();
        store
    }

    #[test]
    fn successful_uninstall_removes_the_record() {
        let dir = tempfile::tempdir().unwrap();
        let runner = MockRunner::exiting(0);
        let mut installed = installed_with_foo(&dir);

        Uninstaller::new(&runner)
            .uninstall(
                "foo",
                &catalog(r#"{"foo": {"uninstall_command": "remove-foo --now"}}"#),
                &mut installed,
            )
            .unwrap();

        assert_eq!(runner.commands.borrow().as_slice(), ["remove-foo --now"]);
        assert!(!installed.contains("foo"));
    }

    #[test]
    fn failed_uninstall_leaves_the_record() {
        let dir = tempfile::tempdir().unwrap();
        let runner = MockRunner::exiting(2);
        let mut installed = installed_with_foo(&dir);

        let err = Uninstaller::new(&runner)
            .uninstall(
                "foo",
                &catalog(r#"{"foo": {"uninstall_command": "remove-foo"}}"#),
                &mut installed,
            )
            .unwrap_err();

        assert!(matches!(
            err,
            EngineError::UninstallCommandFailed { code: 2, .. }
        ));
        assert_eq!(installed.version_of("foo"), Some("1.0"));
    }

    #[test]
    fn entry_without_uninstall_command_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let runner = MockRunner::exiting(0);
        let mut installed = installed_with_foo(&dir);

        let err = Uninstaller::new(&runner)
            .uninstall("foo", &catalog(r#"{"foo": {"version": "1.0"}}"#), &mut installed)
            .unwrap_err();

        assert!(matches!(err, EngineError::NoUninstallCommand { .. }));
        assert!(runner.commands.borrow().is_empty());
        assert!(installed.contains("foo"));
    }

    #[test]
    fn app_absent_from_catalog_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let runner = MockRunner::exiting(0);
        let mut installed = installed_with_foo(&dir);

        let err = Uninstaller::new(&runner)
            .uninstall("foo", &catalog("{}"), &mut installed)
            .unwrap_err();

        assert!(matches!(err, EngineError::AppNotFound { .. }));
    }
}
