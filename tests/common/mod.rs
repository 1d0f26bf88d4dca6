// tests/common/mod.rs
//! Shared helpers for binary-level tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use tempfile::TempDir;

/// Command for the built `neko` binary, with logging forced off.
pub fn neko() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_neko"));
    cmd.env_remove("NEKO_LOG");
    cmd
}

/// Temporary directory holding input files for one test.
#[derive(Debug)]
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().expect("create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("write fixture file");
        path
    }

    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
