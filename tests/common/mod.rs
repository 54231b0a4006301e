//! Shared testing utilities for stackup integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use stackup::{AppError, Prompter};

pub const TEMPLATE: &str = "\
# Site settings
LANGUAGE=en
DOMAIN=
HTTP_PORT=8080

# Database
MYSQL_ROOT_PASSWORD=changeme
MYSQL_DATABASE=app
MYSQL_USER=app
MYSQL_PASSWORD=changeme

# Admin login
ADMIN_LOGIN_USER=admin
ADMIN_LOGIN_PASSWORD=changeme
";

pub const PROXY_TEMPLATE: &str = "\
server {
    server_name __DOMAIN__;
    ssl_certificate /etc/letsencrypt/live/__DOMAIN__/fullchain.pem;
    # registered by __SSL_EMAIL__
}
";

/// Isolated project directory holding the shipped templates.
pub struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Project with `example.env` and the proxy template in place.
    pub fn new() -> Self {
        let ctx = Self::empty();
        ctx.write("example.env", TEMPLATE);
        ctx.write("nginx/default.conf.template", PROXY_TEMPLATE);
        ctx
    }

    /// Project without any templates.
    pub fn empty() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|err| panic!("Failed to read {}: {}", relative, err))
    }

    /// Build a CLI command running in the project directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("stackup").expect("Failed to locate stackup binary");
        cmd.current_dir(self.root.path()).env_remove("RUST_LOG");
        cmd
    }
}

/// Shell script standing in for `docker compose`, logging every invocation.
pub struct FakeCompose {
    pub root: TempDir,
    pub script: PathBuf,
    pub log_file: PathBuf,
}

impl FakeCompose {
    pub fn new() -> Self {
        Self::with_up_exit_code(0)
    }

    /// `up` exits with `code`; `version` always succeeds.
    pub fn with_up_exit_code(code: i32) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir for fake compose");
        let script = root.path().join("fake-compose");
        let log_file = root.path().join("compose.log");

        let content = format!(
            r#"#!/bin/sh
echo "$@ @ $(pwd)" >> "{}"
case "$1" in
    version) exit 0 ;;
    up) exit {} ;;
esac
exit 2
"#,
            log_file.to_string_lossy(),
            code
        );
        fs::write(&script, content).expect("Failed to write fake compose script");

        let mut perms = fs::metadata(&script).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script, perms).expect("Failed to set permissions");

        Self { root, script, log_file }
    }

    pub fn command(&self) -> Vec<Vec<String>> {
        vec![vec![self.script.to_string_lossy().into_owned()]]
    }

    pub fn get_log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }
}

/// Prompter replaying canned answers for library-level runs.
#[derive(Default)]
pub struct ScriptedPrompter {
    inputs: RefCell<VecDeque<String>>,
    passwords: RefCell<VecDeque<String>>,
    confirms: RefCell<VecDeque<bool>>,
    selections: RefCell<VecDeque<usize>>,
    pub said: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inputs(self, answers: &[&str]) -> Self {
        self.inputs.borrow_mut().extend(answers.iter().map(|a| a.to_string()));
        self
    }

    pub fn passwords(self, answers: &[&str]) -> Self {
        self.passwords.borrow_mut().extend(answers.iter().map(|a| a.to_string()));
        self
    }

    pub fn confirms(self, answers: &[bool]) -> Self {
        self.confirms.borrow_mut().extend(answers.iter().copied());
        self
    }

    pub fn selections(self, answers: &[usize]) -> Self {
        self.selections.borrow_mut().extend(answers.iter().copied());
        self
    }

    pub fn transcript(&self) -> String {
        self.said.borrow().join("\n")
    }

    fn next<T>(queue: &RefCell<VecDeque<T>>, prompt: &str) -> Result<T, AppError> {
        queue
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| AppError::Prompt(format!("no scripted answer for '{}'", prompt)))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str) -> Result<String, AppError> {
        Self::next(&self.inputs, prompt)
    }

    fn password(&self, prompt: &str) -> Result<String, AppError> {
        Self::next(&self.passwords, prompt)
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool, AppError> {
        Self::next(&self.confirms, prompt)
    }

    fn select(&self, prompt: &str, _items: &[&str], _default: usize) -> Result<usize, AppError> {
        Self::next(&self.selections, prompt)
    }

    fn say(&self, message: &str) {
        self.said.borrow_mut().push(message.to_string());
    }
}
