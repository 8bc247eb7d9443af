//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use storefront_cache::Cache;
use storefront_core::cart::{CartEngine, KvCartStore};
use storefront_core::catalog::CatalogItem;
use storefront_core::lookup::{HttpItemLookup, ItemLookup, StaticItemLookup};
use storefront_core::BranchId;

use crate::config::{StorefrontConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: StorefrontConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Directory relative paths in the config resolve against.
    pub root: PathBuf,
    /// The config file in use, if any.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(absolute(&cwd, Path::new(path))),
            None => Self::find_config(&cwd),
        };

        let config = match &config_path {
            Some(path) => StorefrontConfig::load(path)?,
            None => StorefrontConfig::default(),
        };

        let root = config_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.clone());

        tracing::debug!(config = ?config_path, root = %root.display(), "loaded context");

        Ok(Self {
            config,
            output,
            cwd,
            root,
            config_path,
        })
    }

    /// Find a config file in the directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(|dir| {
            CONFIG_FILE_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|path| path.is_file())
        })
    }

    /// Resolve a path relative to the config root.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        absolute(&self.root, path)
    }

    /// Open the persisted cart.
    pub fn open_cart(&self) -> Result<CartEngine<KvCartStore>> {
        let dir = self.resolve_path(&self.config.store.dir);
        let cache = Cache::open_dir(&dir)
            .with_context(|| format!("Failed to open cart store: {}", dir.display()))?;
        Ok(CartEngine::open(KvCartStore::with_key(
            cache,
            self.config.store.key.clone(),
        )))
    }

    /// The configured item source.
    pub fn lookup(&self) -> Result<Box<dyn ItemLookup>> {
        if let Some(file) = &self.config.catalog.file {
            return Ok(Box::new(StaticItemLookup::new(self.read_catalog_file(file)?)));
        }
        if let Some(base_url) = &self.config.catalog.api_base_url {
            return Ok(Box::new(HttpItemLookup::with_base_url(base_url.clone())));
        }
        bail!("No catalog source configured. Set [catalog] file or [catalog] api_base_url.")
    }

    /// Load the full catalog for the configured scope.
    pub fn load_catalog(&self) -> Result<Vec<CatalogItem>> {
        if let Some(file) = &self.config.catalog.file {
            return self.read_catalog_file(file);
        }
        let Some(scope) = &self.config.catalog.scope else {
            bail!("No catalog scope configured. Set [catalog] scope.");
        };
        let items = self
            .lookup()?
            .list_items(&BranchId::new(scope.as_str()))
            .context("Catalog temporarily unavailable")?;
        Ok(items)
    }

    fn read_catalog_file(&self, file: &Path) -> Result<Vec<CatalogItem>> {
        let path = self.resolve_path(file);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))
    }
}

fn absolute(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
