use crate::paths::BaseDirs;
use std::path::PathBuf;

pub const DEFAULT_MANIFEST_PATH: &str = "agent_manifest.json";
pub const DEFAULT_REFERENCE_DIR: &str = "docs/sphinx/build/html";
pub const DEFAULT_PAGES_DIR: &str = "docs";
pub const DEFAULT_EXAMPLES_DIR: &str = "examples";
pub const DEFAULT_CONFIGS_DIR: &str = "configs/agents";

/// Startup configuration. Read once; nothing looks at the environment afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct DocsConfig {
    pub manifest_path: PathBuf,
    /// Pre-built static reference tree served under `/reference`.
    pub reference_dir: PathBuf,
    /// Markdown pages, also the root of the `docs` base.
    pub pages_dir: PathBuf,
    pub examples_dir: PathBuf,
    pub configs_dir: PathBuf,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            manifest_path: DEFAULT_MANIFEST_PATH.into(),
            reference_dir: DEFAULT_REFERENCE_DIR.into(),
            pages_dir: DEFAULT_PAGES_DIR.into(),
            examples_dir: DEFAULT_EXAMPLES_DIR.into(),
            configs_dir: DEFAULT_CONFIGS_DIR.into(),
        }
    }
}

impl DocsConfig {
    pub fn base_dirs(&self) -> BaseDirs {
        BaseDirs::new(
            self.examples_dir.clone(),
            self.configs_dir.clone(),
            self.pages_dir.clone(),
        )
    }
}
