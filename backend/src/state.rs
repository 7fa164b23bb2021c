use crate::config::DocsConfig;
use crate::paths::BaseDirs;
use crate::render::{PlainTextRenderer, Renderer};
use crate::store::ManifestStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub manifest: Arc<ManifestStore>,
    pub bases: Arc<BaseDirs>,
    pub renderer: Arc<dyn Renderer>,
}

impl AppState {
    pub fn new(manifest: ManifestStore, bases: BaseDirs) -> Self {
        Self {
            manifest: Arc::new(manifest),
            bases: Arc::new(bases),
            renderer: Arc::new(PlainTextRenderer),
        }
    }

    pub fn from_config(config: &DocsConfig) -> Self {
        Self::new(
            ManifestStore::from_path(config.manifest_path.clone()),
            config.base_dirs(),
        )
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = renderer;
        self
    }
}
