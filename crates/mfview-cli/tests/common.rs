//! Common test utilities shared across integration tests.
//!
//! Clippy cannot track usage across integration test files, hence the
//! `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    bundle: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".mfview");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        let bundle = mfview_testing::write_sample_bundle(temp_dir.path())
            .expect("Failed to write sample bundle");

        Self {
            _temp_dir: temp_dir,
            data_dir,
            bundle,
        }
    }

    /// Fixture with the sample bundle already imported
    pub fn imported() -> Self {
        let fixture = Self::new();
        fixture.import().expect("Failed to import sample bundle");
        fixture
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn bundle(&self) -> &PathBuf {
        &self.bundle
    }

    pub fn write_config(&self, content: &str) -> anyhow::Result<()> {
        fs::write(self.data_dir.join("config.toml"), content)?;
        Ok(())
    }

    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("mfview");
        cmd.env_remove("RUST_LOG")
            .env_remove("MFVIEW_PATH")
            .arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg("plain");
        cmd
    }

    pub fn import(&self) -> anyhow::Result<()> {
        let output = self.command().arg("import").arg(self.bundle()).output()?;

        if !output.status.success() {
            anyhow::bail!(
                "import failed: {}\nstdout: {}",
                String::from_utf8_lossy(&output.stderr),
                String::from_utf8_lossy(&output.stdout)
            );
        }
        Ok(())
    }

    /// Run a command with `--format json` and parse its stdout
    pub fn json(&self, args: &[&str]) -> anyhow::Result<serde_json::Value> {
        let output = self
            .command()
            .args(args)
            .arg("--format")
            .arg("json")
            .output()?;

        if !output.status.success() {
            anyhow::bail!(
                "{:?} failed: {}",
                args,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Ok(serde_json::from_slice(&output.stdout)?)
    }
}
