//! Workspace configuration loaded from `.tasklens.yaml`.

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ports::filesystem::FileSystem;

/// Name of the configuration file at the workspace root.
pub const CONFIG_FILE: &str = ".tasklens.yaml";

/// Workspace configuration. Every field has a default, so the file is
/// optional and may be partial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory under the workspace root holding the methodology document
    /// and the `changes/` tree.
    #[serde(default = "default_root_dir")]
    pub root_dir: String,
    /// Filename of the methodology document inside the root directory.
    #[serde(default = "default_methodology_file")]
    pub methodology_file: String,
    /// Filename of the optional project document inside the root directory.
    #[serde(default = "default_project_file")]
    pub project_file: String,
    /// Chat endpoint URL for prompt dispatch. When unset, prompts fall back
    /// to a file.
    #[serde(default)]
    pub chat_url: Option<String>,
}

fn default_root_dir() -> String {
    "openspec".to_string()
}

fn default_methodology_file() -> String {
    "AGENTS.md".to_string()
}

fn default_project_file() -> String {
    "project.md".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            methodology_file: default_methodology_file(),
            project_file: default_project_file(),
            chat_url: None,
        }
    }
}

impl Config {
    /// Loads the configuration from `<workspace>/.tasklens.yaml`, or the
    /// defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(fs: &dyn FileSystem, workspace: &Path) -> Result<Self, String> {
        let path = workspace.join(CONFIG_FILE);
        if !fs.exists(&path) {
            return Ok(Self::default());
        }
        let content = fs
            .read_to_string(&path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        serde_yaml::from_str(&content).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
    }

    /// The effective chat endpoint: `TASKLENS_CHAT_URL` overrides the file.
    #[must_use]
    pub fn chat_endpoint(&self) -> Option<String> {
        env::var("TASKLENS_CHAT_URL").ok().or_else(|| self.chat_url.clone())
    }
}
