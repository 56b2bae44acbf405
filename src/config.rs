//! Configuration for the precond CLI.
//!
//! Configuration lives in markdown files with YAML frontmatter. A global file
//! at `~/.config/precond/config.md` provides user defaults and the project
//! file at `.precond/config.md` overrides them key by key.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::pattern::{Pattern, CAPITALIZED_NAME};

/// Project configuration file, relative to the working directory.
pub const PROJECT_CONFIG: &str = ".precond/config.md";

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub greeting: GreetingConfig,
    #[serde(default)]
    pub hypothesis: HypothesisConfig,
}

#[derive(Debug, Deserialize)]
pub struct GreetingConfig {
    /// Pattern a name must match before it is greeted
    #[serde(default = "default_pattern")]
    pub pattern: String,
    /// Name greeted when no command is given
    #[serde(default = "default_name")]
    pub default_name: String,
}

#[derive(Debug, Deserialize)]
pub struct HypothesisConfig {
    /// Python interpreter used to run icontract-hypothesis
    #[serde(default = "default_python")]
    pub python: String,
}

fn default_python() -> String {
    "python".to_string()
}

impl Default for HypothesisConfig {
    fn default() -> Self {
        Self {
            python: default_python(),
        }
    }
}

fn default_pattern() -> String {
    CAPITALIZED_NAME.to_string()
}

fn default_name() -> String {
    "Marko".to_string()
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            default_name: default_name(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let frontmatter =
            extract_frontmatter(content).context("Failed to extract frontmatter from config")?;

        if frontmatter.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Load merged configuration from the global and project configs.
    pub fn load_merged() -> Result<Self> {
        Self::load_merged_from(global_config_path().as_deref(), Path::new(PROJECT_CONFIG))
    }

    /// Load merged configuration from explicit paths.
    ///
    /// Either file may be missing; built-in defaults fill whatever neither
    /// file sets. A file that exists but cannot be parsed is an error.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: &Path) -> Result<Self> {
        let global = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project = if project_path.exists() {
            PartialConfig::load_from(project_path)?
        } else {
            PartialConfig::default()
        };

        Ok(global.merge_with(project))
    }

    /// The configured name pattern. Compilation is deferred to first use.
    pub fn name_pattern(&self) -> Pattern {
        Pattern::new(self.greeting.pattern.as_str())
    }
}

/// Returns the path to the global config file at ~/.config/precond/config.md
pub fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config/precond/config.md"))
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub greeting: Option<PartialGreetingConfig>,
    pub hypothesis: Option<PartialHypothesisConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialHypothesisConfig {
    pub python: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialGreetingConfig {
    pub pattern: Option<String>,
    pub default_name: Option<String>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        let frontmatter =
            extract_frontmatter(content).context("Failed to extract frontmatter from config")?;

        if frontmatter.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Project value > global value > default
    fn merge_with(self, project: PartialConfig) -> Config {
        let global_greeting = self.greeting.unwrap_or_default();
        let project_greeting = project.greeting.unwrap_or_default();
        let global_hypothesis = self.hypothesis.unwrap_or_default();
        let project_hypothesis = project.hypothesis.unwrap_or_default();

        Config {
            greeting: GreetingConfig {
                pattern: project_greeting
                    .pattern
                    .or(global_greeting.pattern)
                    .unwrap_or_else(default_pattern),
                default_name: project_greeting
                    .default_name
                    .or(global_greeting.default_name)
                    .unwrap_or_else(default_name),
            },
            hypothesis: HypothesisConfig {
                python: project_hypothesis
                    .python
                    .or(global_hypothesis.python)
                    .unwrap_or_else(default_python),
            },
        }
    }
}

/// Text between the opening `---` and the first line that is exactly `---`.
fn extract_frontmatter(content: &str) -> Option<String> {
    let rest = content.trim().strip_prefix("---")?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if offset > 0 && line.trim_end() == "---" {
            return Some(rest[..offset].to_string());
        }
        offset += line.len();
    }

    None
}
