use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// TestHarness provides an isolated working directory for the precond binary.
/// Each harness creates a temporary directory with `.precond/config.md` and
/// points `HOME` at it so no real global config leaks into a test.
pub struct TestHarness {
    pub dir: TempDir,
    pub config_path: PathBuf,
    pub binary: PathBuf,
}

impl TestHarness {
    /// Creates a new test harness with the default configuration.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join(".precond");
        let config_path = config_dir.join("config.md");

        fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        let default_config = r#"---
greeting:
  default_name: Marko
---

# Project Config
"#;
        fs::write(&config_path, default_config).expect("Failed to write config");

        TestHarness {
            dir: temp_dir,
            config_path,
            binary: PathBuf::from(env!("CARGO_BIN_EXE_precond")),
        }
    }

    /// Creates a test harness with custom config content.
    #[allow(dead_code)]
    pub fn with_config(config_content: &str) -> Self {
        let harness = Self::new();
        fs::write(&harness.config_path, config_content).expect("Failed to write custom config");
        harness
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Executes the precond binary with the given arguments in the harness directory.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary)
            .args(args)
            .current_dir(self.path())
            .env("HOME", self.path())
            .env("NO_COLOR", "1")
            .env_remove("PRECOND_QUIET")
            .output()
            .expect("Failed to run precond")
    }
}

/// Stdout of a finished command as a string.
#[allow(dead_code)]
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr of a finished command as a string.
#[allow(dead_code)]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
