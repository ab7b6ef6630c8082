//! Installer state machine
//!
//! Per app, entered only for apps present in the catalog:
//!
//! 1. Resolve the install method: `install_script` wins over `url`; neither
//!    means the entry is listed but not installable.
//! 2. Script installs run through the script interpreter. A zero exit code
//!    is success, but the installed-version record is NOT updated, so
//!    upgrade passes re-run script installs.
//! 3. Binary installs download `{app}_{basename(url)}` into the download
//!    directory, execute it (appending silent args only when the caller
//!    asked for silent mode AND the entry defines them), record the version
//!    on a zero exit, optionally offer to launch `exec_path`, and always
//!    try to delete the downloaded installer afterwards.
//!
//! The installed store is touched exactly once, after a confirmed success.

use std::path::{Path, PathBuf};

use juiceyum_core::{AppEntry, Catalog, InstallMethod, InstalledApps};
use juiceyum_repo::Downloader;

use crate::error::{EngineError, Result};
use crate::exec::{CommandRunner, Prompter};

/// Caller-supplied installation options
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Where downloaded installers land (created if absent)
    pub download_dir: PathBuf,
    /// Append `silent_install_args` when the entry defines them
    pub silent: bool,
}

/// What a successful install did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Script ran to completion; no version was recorded
    Script,
    /// Binary installer succeeded; `version` was recorded in the store
    Binary { version: String },
}

/// Drives the install state machine for one app at a time
pub struct Installer<'a, R, P> {
    downloader: &'a Downloader,
    runner: &'a R,
    prompter: &'a P,
}

impl<'a, R: CommandRunner, P: Prompter> Installer<'a, R, P> {
    pub fn new(downloader: &'a Downloader, runner: &'a R, prompter: &'a P) -> Self {
        Self {
            downloader,
            runner,
            prompter,
        }
    }

    pub async fn install(
        &self,
        name: &str,
        catalog: &Catalog,
        installed: &mut InstalledApps,
        options: &InstallOptions,
    ) -> Result<InstallOutcome> {
        let entry = catalog.get(name).ok_or_else(|| EngineError::AppNotFound {
            name: name.to_string(),
        })?;

        match entry.install_method() {
            None => Err(EngineError::NotInstallable {
                name: name.to_string(),
            }),
            Some(InstallMethod::Script(script)) => self.install_script(name, script),
            Some(InstallMethod::Binary(url)) => {
                self.install_binary(name, entry, url, installed, options)
                    .await
            }
        }
    }

    fn install_script(&self, name: &str, script: &str) -> Result<InstallOutcome> {
        let code = self.runner.run_script(script)?;
        if code == 0 {
            // Deliberately no record update for script installs
            Ok(InstallOutcome::Script)
        } else {
            Err(EngineError::ScriptFailed {
                name: name.to_string(),
                code,
            })
        }
    }

    async fn install_binary(
        &self,
        name: &str,
        entry: &AppEntry,
        url: &str,
        installed: &mut InstalledApps,
        options: &InstallOptions,
    ) -> Result<InstallOutcome> {
        std::fs::create_dir_all(&options.download_dir)?;
        let dest = options.download_dir.join(installer_filename(name, url));

        // Download failure aborts before anything runs or is recorded
        self.downloader.download(url, &dest).await?;

        let result = self.run_installer(name, entry, &dest, installed, options);

        if result.is_ok() {
            self.offer_launch(name, entry);
        }

        // Best-effort cleanup, success or not; never fatal
        if let Err(e) = std::fs::remove_file(&dest) {
            tracing::warn!("could not remove installer {}: {e}", dest.display());
        }

        result
    }

    fn run_installer(
        &self,
        name: &str,
        entry: &AppEntry,
        dest: &Path,
        installed: &mut InstalledApps,
        options: &InstallOptions,
    ) -> Result<InstallOutcome> {
        let mut command = dest.display().to_string();
        if options.silent {
            if let Some(args) = &entry.silent_install_args {
                command.push(' ');
                command.push_str(args);
            }
        }

        let code = self.runner.run_command(&command)?;
        if code != 0 {
            return Err(EngineError::InstallCommandFailed {
                name: name.to_string(),
                code,
            });
        }

        let version = entry.version_or_unknown().to_string();
        installed.upsert(name, &version)?;
        Ok(InstallOutcome::Binary { version })
    }

    fn offer_launch(&self, name: &str, entry: &AppEntry) {
        let Some(exec_path) = &entry.exec_path else {
            return;
        };
        if self.prompter.confirm(&format!("Launch {name} now?")) {
            if let Err(e) = self.runner.launch(exec_path) {
                tracing::warn!("could not launch {exec_path}: {e}");
            }
        }
    }
}

/// Destination filename for a downloaded installer: `{app}_{basename(url)}`
fn installer_filename(name: &str, url: &str) -> String {
    let tail = url.split(['?', '#']).next().unwrap_or(url);
    let base = tail.trim_end_matches('/').rsplit('/').next().unwrap_or(tail);
    format!("{name}_{base}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Default)]
    struct MockRunner {
        exit_code: i32,
        commands: RefCell<Vec<String>>,
        scripts: RefCell<Vec<String>>,
        launched: RefCell<Vec<String>>,
    }

    impl MockRunner {
        fn failing(code: i32) -> Self {
            Self {
                exit_code: code,
                ..Default::default()
            }
        }
    }

    impl CommandRunner for MockRunner {
        fn run_command(&self, command: &str) -> std::io::Result<i32> {
            self.commands.borrow_mut().push(command.to_string());
            Ok(self.exit_code)
        }

        fn run_script(&self, script: &str) -> std::io::Result<i32> {
            self.scripts.borrow_mut().push(script.to_string());
            Ok(self.exit_code)
        }

        fn launch(&self, path: &str) -> std::io::Result<()> {
            self.launched.borrow_mut().push(path.to_string());
            Ok(())
        }
    }

    struct MockPrompter {
        answer: bool,
        asked: RefCell<usize>,
    }

    impl MockPrompter {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                asked: RefCell::new(0),
            }
        }
    }

    impl Prompter for MockPrompter {
        fn confirm(&self, _message: &str) -> bool {
            *self.asked.borrow_mut() += 1;
            self.answer
        }
    }

    fn catalog(json: &str) -> Catalog {
        serde_json::from_str(json).unwrap()
    }

    fn store(dir: &tempfile::TempDir) -> InstalledApps {
        InstalledApps::load(&dir.path().join("installed.json")).unwrap()
    }

    fn options(dir: &tempfile::TempDir, silent: bool) -> InstallOptions {
        InstallOptions {
            download_dir: dir.path().join("downloads"),
            silent,
        }
    }

    async fn binary_server(body: &[u8]) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
            .mount(&server)
            .await;
        server
    }

    fn downloader() -> Downloader {
        Downloader::new(reqwest::Client::new()).retry_delay(std::time::Duration::ZERO)
    }

    #[tokio::test]
    async fn app_missing_from_catalog_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let dl = downloader();
        let runner = MockRunner::default();
        let prompter = MockPrompter::answering(false);
        let installer = Installer::new(&dl, &runner, &prompter);

        let err = installer
            .install("ghost", &catalog("{}"), &mut store(&dir), &options(&dir, false))
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::AppNotFound { .. }));
    }

    #[tokio::test]
    async fn entry_without_method_reports_not_installable() {
        let dir = tempfile::tempdir().unwrap();
        let dl = downloader();
        let runner = MockRunner::default();
        let prompter = MockPrompter::answering(false);
        let installer = Installer::new(&dl, &runner, &prompter);
        let mut installed = store(&dir);

        let err = installer
            .install(
                "listed",
                &catalog(r#"{"listed": {"version": "1.0"}}"#),
                &mut installed,
                &options(&dir, false),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, EngineError::NotInstallable { .. }));
        assert!(installed.is_empty());
        assert!(runner.commands.borrow().is_empty());
    }

    #[tokio::test]
    async fn script_install_succeeds_without_recording_a_version() {
        let dir = tempfile::tempdir().unwrap();
        let dl = downloader();
        let runner = MockRunner::default();
        let prompter = MockPrompter::answering(false);
        let installer = Installer::new(&dl, &runner, &prompter);
        let mut installed = store(&dir);

        let outcome = installer
            .install(
                "tool",
                &catalog(r#"{"tool": {"version": "1.0", "install_script": "echo hi"}}"#),
                &mut installed,
                &options(&dir, false),
            )
            .await
            .unwrap();

        assert_eq!(outcome, InstallOutcome::Script);
        assert_eq!(runner.scripts.borrow().as_slice(), ["echo hi"]);
        // Script installs leave no installed record
        assert!(installed.is_empty());
    }

    #[tokio::test]
    async fn failing_script_reports_its_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let dl = downloader();
        let runner = MockRunner::failing(12);
        let prompter = MockPrompter::answering(false);
        let installer = Installer::new(&dl, &runner, &prompter);

        let err = installer
            .install(
                "tool",
                &catalog(r#"{"tool": {"install_script": "boom"}}"#),
                &mut store(&dir),
                &options(&dir, false),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, EngineError::ScriptFailed { code: 12, .. }));
    }

    #[tokio::test]
    async fn binary_install_records_version_and_cleans_up() {
        let server = binary_server(b"installer-bytes").await;
        let dir = tempfile::tempdir().unwrap();
        let dl = downloader();
        let runner = MockRunner::default();
        let prompter = MockPrompter::answering(false);
        let installer = Installer::new(&dl, &runner, &prompter);
        let mut installed = store(&dir);

        let cat = catalog(&format!(
            r#"{{"foo": {{"version": "1.0", "url": "{}/foo.exe"}}}}"#,
            server.uri()
        ));
        let outcome = installer
            .install("foo", &cat, &mut installed, &options(&dir, false))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            InstallOutcome::Binary {
                version: "1.0".to_string()
            }
        );
        assert_eq!(installed.version_of("foo"), Some("1.0"));

        // The executed command is the downloaded path, no extra args
        let commands = runner.commands.borrow();
        let expected = dir.path().join("downloads").join("foo_foo.exe");
        assert_eq!(commands.as_slice(), [expected.display().to_string()]);

        // Installer file is deleted afterwards
        assert!(!expected.exists());
    }

    #[tokio::test]
    async fn silent_args_are_appended_only_on_request() {
        let server = binary_server(b"x").await;
        let dir = tempfile::tempdir().unwrap();
        let dl = downloader();
        let runner = MockRunner::default();
        let prompter = MockPrompter::answering(false);
        let installer = Installer::new(&dl, &runner, &prompter);
        let mut installed = store(&dir);

        let cat = catalog(&format!(
            r#"{{"foo": {{"version": "1.0", "url": "{}/foo.exe", "silent_install_args": "/S /quiet"}}}}"#,
            server.uri()
        ));

        installer
            .install("foo", &cat, &mut installed, &options(&dir, true))
            .await
            .unwrap();
        installer
            .install("foo", &cat, &mut installed, &options(&dir, false))
            .await
            .unwrap();

        let commands = runner.commands.borrow();
        assert!(commands[0].ends_with("foo_foo.exe /S /quiet"));
        assert!(commands[1].ends_with("foo_foo.exe"));
    }

    #[tokio::test]
    async fn failed_install_command_leaves_store_untouched_but_cleans_up() {
        let server = binary_server(b"x").await;
        let dir = tempfile::tempdir().unwrap();
        let dl = downloader();
        let runner = MockRunner::failing(1603);
        let prompter = MockPrompter::answering(false);
        let installer = Installer::new(&dl, &runner, &prompter);
        let mut installed = store(&dir);

        let cat = catalog(&format!(
            r#"{{"foo": {{"version": "1.0", "url": "{}/foo.exe", "exec_path": "/opt/foo"}}}}"#,
            server.uri()
        ));
        let err = installer
            .install("foo", &cat, &mut installed, &options(&dir, false))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            EngineError::InstallCommandFailed { code: 1603, .. }
        ));
        assert!(installed.is_empty());
        // No launch prompt on failure
        assert_eq!(*prompter.asked.borrow(), 0);
        // Cleanup still ran
        assert!(!dir.path().join("downloads").join("foo_foo.exe").exists());
    }

    #[tokio::test]
    async fn download_failure_aborts_before_any_command_runs() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let dl = downloader().max_attempts(1);
        let runner = MockRunner::default();
        let prompter = MockPrompter::answering(false);
        let installer = Installer::new(&dl, &runner, &prompter);
        let mut installed = store(&dir);

        let cat = catalog(&format!(
            r#"{{"foo": {{"version": "1.0", "url": "{}/foo.exe"}}}}"#,
            server.uri()
        ));
        let err = installer
            .install("foo", &cat, &mut installed, &options(&dir, false))
            .await
            .unwrap_err();

        assert!(matches!(err, EngineError::Download(_)));
        assert!(runner.commands.borrow().is_empty());
        assert!(installed.is_empty());
    }

    #[tokio::test]
    async fn successful_install_offers_to_launch_exec_path() {
        let server = binary_server(b"x").await;
        let dir = tempfile::tempdir().unwrap();
        let dl = downloader();
        let runner = MockRunner::default();
        let prompter = MockPrompter::answering(true);
        let installer = Installer::new(&dl, &runner, &prompter);
        let mut installed = store(&dir);

        let cat = catalog(&format!(
            r#"{{"foo": {{"version": "1.0", "url": "{}/foo.exe", "exec_path": "/opt/foo/foo"}}}}"#,
            server.uri()
        ));
        installer
            .install("foo", &cat, &mut installed, &options(&dir, false))
            .await
            .unwrap();

        assert_eq!(*prompter.asked.borrow(), 1);
        assert_eq!(runner.launched.borrow().as_slice(), ["/opt/foo/foo"]);
    }

    #[tokio::test]
    async fn missing_version_is_recorded_as_unknown() {
        let server = binary_server(b"x").await;
        let dir = tempfile::tempdir().unwrap();
        let dl = downloader();
        let runner = MockRunner::default();
        let prompter = MockPrompter::answering(false);
        let installer = Installer::new(&dl, &runner, &prompter);
        let mut installed = store(&dir);

        let cat = catalog(&format!(
            r#"{{"foo": {{"url": "{}/foo.exe"}}}}"#,
            server.uri()
        ));
        installer
            .install("foo", &cat, &mut installed, &options(&dir, false))
            .await
            .unwrap();

        assert_eq!(installed.version_of("foo"), Some("unknown"));
    }

    #[test]
    fn installer_filename_uses_url_basename() {
        assert_eq!(
            installer_filename("foo", "http://x/dir/setup.exe"),
            "foo_setup.exe"
        );
        assert_eq!(
            installer_filename("foo", "http://x/setup.exe?token=abc"),
            "foo_setup.exe"
        );
    }
}
