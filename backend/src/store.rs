use crate::config_loader::{ConfigSource, FileConfigSource};
use crate::error::{DocsError, DocsResult};
use crate::manifest;
use shared::models::Manifest;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Outcome of the one-time build, shared by every caller.
pub type ManifestResult = Result<Arc<Manifest>, Arc<DocsError>>;

/// Lazily built manifest. The first `get` loads and builds; later calls reuse
/// the outcome, failures included, for the lifetime of the store.
pub struct ManifestStore {
    source: Arc<dyn ConfigSource>,
    cell: OnceCell<ManifestResult>,
}

impl ManifestStore {
    pub fn new(source: Arc<dyn ConfigSource>) -> Self {
        Self {
            source,
            cell: OnceCell::new(),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileConfigSource::new(path)))
    }

    pub async fn get(&self) -> ManifestResult {
        self.cell
            .get_or_init(|| async {
                match load_and_build(self.source.as_ref()).await {
                    Ok(manifest) => {
                        tracing::debug!(
                            "Built manifest for {} with {} tools",
                            manifest.agent_name,
                            manifest.tools.len()
                        );
                        Ok(Arc::new(manifest))
                    }
                    Err(e) => {
                        tracing::warn!("Manifest unavailable: {}", e);
                        Err(Arc::new(e))
                    }
                }
            })
            .await
            .clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }
}

async fn load_and_build(source: &dyn ConfigSource) -> DocsResult<Manifest> {
    let config = source.load().await?;
    manifest::build(&config)
}
