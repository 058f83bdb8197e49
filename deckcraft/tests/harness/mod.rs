//! Integration test harness
//!
//! `DeckTest` runs the real `deckcraft` binary inside a temporary working
//! directory, so each test gets its own config file and output location.
//!
//! ```rust,ignore
//! let deck = DeckTest::new()?;
//! let run = deck.run(&["places"])?;
//! assert!(run.stdout.starts_with("golden"));
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Result;
use tempfile::TempDir;

/// Captured output of one CLI invocation
#[derive(Debug)]
pub struct CliRun {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CliRun {
    /// Value of a `key: value` line
    pub fn field(&self, key: &str) -> Option<&str> {
        let prefix = format!("{}: ", key);
        self.stdout
            .lines()
            .find_map(|line| line.strip_prefix(prefix.as_str()))
    }
}

/// A temporary working directory for the CLI
pub struct DeckTest {
    temp_dir: TempDir,
}

impl DeckTest {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir().join(name)
    }

    /// Write `deckcraft.toml` into the working directory
    pub fn write_config(&self, toml: &str) -> Result<()> {
        std::fs::write(self.path("deckcraft.toml"), toml)?;
        Ok(())
    }

    /// Run the binary with the given arguments
    ///
    /// Remote generation is never configured from the environment here.
    pub fn run(&self, args: &[&str]) -> Result<CliRun> {
        let output = Command::new(env!("CARGO_BIN_EXE_deckcraft"))
            .args(args)
            .current_dir(self.dir())
            .env_remove("DECKCRAFT_REMOTE__API_KEY")
            .env("RUST_LOG", "deckcraft=warn")
            .output()?;

        Ok(CliRun {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
