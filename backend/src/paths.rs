//! Allow-listed base directories and containment-checked path resolution.

use crate::error::{DocsError, DocsResult};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

/// Logical roots a request may read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Base {
    Examples,
    Configs,
    Docs,
}

impl Base {
    pub const ALL: [Base; 3] = [Base::Examples, Base::Configs, Base::Docs];

    pub fn id(self) -> &'static str {
        match self {
            Base::Examples => "examples",
            Base::Configs => "configs/agents",
            Base::Docs => "docs",
        }
    }
}

impl FromStr for Base {
    type Err = DocsError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        match id {
            "examples" => Ok(Base::Examples),
            "configs/agents" | "agent_configs" => Ok(Base::Configs),
            "docs" => Ok(Base::Docs),
            other => Err(DocsError::InvalidBase(other.to_string())),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Fixed mapping from [`Base`] to its root directory, built once at startup.
#[derive(Clone, Debug)]
pub struct BaseDirs {
    examples: PathBuf,
    configs: PathBuf,
    docs: PathBuf,
}

impl BaseDirs {
    pub fn new(examples: PathBuf, configs: PathBuf, docs: PathBuf) -> Self {
        Self {
            examples,
            configs,
            docs,
        }
    }

    pub fn root(&self, base: Base) -> &Path {
        match base {
            Base::Examples => &self.examples,
            Base::Configs => &self.configs,
            Base::Docs => &self.docs,
        }
    }

    /// Resolves `relative` under the base named `base_id` to an existing regular file.
    ///
    /// The base id is checked before any filesystem access, and the lexical
    /// normalization rejects escapes before anything is read. The canonical
    /// result must still sit under the canonical root, which catches symlinks
    /// pointing outside.
    pub async fn resolve(&self, base_id: &str, relative: &str) -> DocsResult<PathBuf> {
        let base: Base = base_id.parse()?;
        self.resolve_in(base, relative).await
    }

    pub async fn resolve_in(&self, base: Base, relative: &str) -> DocsResult<PathBuf> {
        let normalized = normalize_relative(relative).inspect_err(|_| {
            tracing::warn!("Rejected path {:?} for base {}", relative, base);
        })?;

        let not_found = |_| DocsError::NotFound(relative.to_string());
        let root = tokio::fs::canonicalize(self.root(base))
            .await
            .map_err(not_found)?;
        let candidate = tokio::fs::canonicalize(root.join(&normalized))
            .await
            .map_err(not_found)?;

        if !candidate.starts_with(&root) {
            tracing::warn!("Path {:?} resolves outside base {}", relative, base);
            return Err(DocsError::PathTraversal(relative.to_string()));
        }

        let metadata = tokio::fs::metadata(&candidate).await.map_err(not_found)?;
        if !metadata.is_file() {
            return Err(DocsError::NotFound(relative.to_string()));
        }
        Ok(candidate)
    }
}

/// Lexically normalizes a request path. `..` may never climb above the root,
/// and absolute paths are rejected outright.
pub fn normalize_relative(relative: &str) -> DocsResult<PathBuf> {
    let mut normalized = PathBuf::new();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    return Err(DocsError::PathTraversal(relative.to_string()));
                }
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(DocsError::PathTraversal(relative.to_string()));
            }
        }
    }
    if normalized.as_os_str().is_empty() {
        return Err(DocsError::NotFound(relative.to_string()));
    }
    Ok(normalized)
}

/// Reads a resolved file as text, replacing invalid UTF-8.
pub async fn read_text(path: &Path) -> DocsResult<String> {
    let bytes = tokio::fs::read(path).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
