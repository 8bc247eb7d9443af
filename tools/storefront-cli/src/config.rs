//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_core::cart::{ShippingPolicy, DEFAULT_CART_KEY};
use storefront_core::Currency;

/// File names searched for, in order, when no `--config` is given.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Where the cart snapshot lives.
    #[serde(default)]
    pub store: StoreConfig,

    /// Where catalog items come from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Cart totals.
    #[serde(default)]
    pub pricing: PricingConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Shipping rules in the configured currency.
    pub fn shipping_policy(&self) -> Result<ShippingPolicy> {
        let currency: Currency = self
            .pricing
            .currency
            .parse()
            .context("Invalid [pricing] currency")?;
        Ok(ShippingPolicy::new(
            currency,
            self.pricing.free_shipping_threshold,
            self.pricing.shipping_fee,
        ))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Cart persistence settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Snapshot directory, relative to the config file.
    #[serde(default = "default_store_dir")]
    pub dir: PathBuf,

    /// Key the cart snapshot is stored under.
    #[serde(default = "default_store_key")]
    pub key: String,
}

fn default_store_dir() -> PathBuf {
    PathBuf::from(".storefront")
}

fn default_store_key() -> String {
    DEFAULT_CART_KEY.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: default_store_dir(),
            key: default_store_key(),
        }
    }
}

/// Catalog source. A local `file` takes precedence over the item service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Item service base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,

    /// Branch whose catalog is listed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// JSON array of catalog items, used instead of the item service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Pricing settings, in major currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold: f64,

    #[serde(default = "default_shipping_fee")]
    pub shipping_fee: f64,
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

fn default_free_shipping_threshold() -> f64 {
    500.0
}

fn default_shipping_fee() -> f64 {
    50.0
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            free_shipping_threshold: default_free_shipping_threshold(),
            shipping_fee: default_shipping_fee(),
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront configuration

[store]
dir = ".storefront"
key = "{key}"

[catalog]
# api_base_url = "https://items.example.com/api"
# scope = "main-branch"
# file = "catalog.json"

[pricing]
currency = "EGP"
free_shipping_threshold = 500.0
shipping_fee = 50.0
"#,
        key = DEFAULT_CART_KEY
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: StorefrontConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: StorefrontConfig = toml::from_str(
            r#"
            [catalog]
            api_base_url = "https://items.example.com"
            scope = "cairo"

            [pricing]
            currency = "usd"
            "#,
        )
        .unwrap();

        assert_eq!(config.store.key, "cartItems");
        assert_eq!(config.catalog.scope.as_deref(), Some("cairo"));
        let policy = config.shipping_policy().unwrap();
        assert_eq!(policy.currency, Currency::USD);
        assert_eq!(policy.shipping_fee.amount_minor, 5000);
    }

    #[test]
    fn test_unknown_currency_is_rejected() {
        let mut config = StorefrontConfig::default();
        config.pricing.currency = "XYZ".into();
        assert!(config.shipping_policy().is_err());
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.json");

        let mut config = StorefrontConfig::default();
        config.catalog.file = Some(PathBuf::from("items.json"));
        config.save(&path).unwrap();

        assert_eq!(StorefrontConfig::load(&path).unwrap(), config);
    }
}
