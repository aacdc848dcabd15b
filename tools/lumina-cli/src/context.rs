//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use lumina_commerce::catalog::{sample_catalog_in, Catalog};
use lumina_commerce::ledger::OrderLedger;
use lumina_commerce::money::Currency;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Catalog being browsed.
    pub catalog: Catalog,
}

impl Context {
    /// Load context from config and catalog files.
    pub fn load(config_path: Option<&str>, catalog_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };
        let config = config.with_env_overrides();

        let catalog_path = catalog_path
            .or(config.catalog_path.as_deref())
            .map(|path| resolve_path(&cwd, path));
        if let Some(path) = &catalog_path {
            output.debug(&format!("Loading catalog from {}", path.display()));
        }
        let catalog = load_catalog(catalog_path.as_deref(), config.store.currency)?;

        Ok(Self {
            config,
            output,
            cwd,
            catalog,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let config_names = ["lumina.toml", ".lumina.toml", "lumina.json"];

        let mut current = start.to_path_buf();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some(config),
                        Err(e) => tracing::warn!(path = %config_path.display(), error = %e, "skipping unreadable config"),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// A ledger priced with the configured store rules.
    pub fn ledger(&self) -> OrderLedger {
        OrderLedger::from_config(&self.config.store)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve_path(&self.cwd, path)
    }
}

/// Load the catalog file, or the sample books, priced in the store currency.
fn load_catalog(path: Option<&Path>, currency: Currency) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
            Catalog::from_json(&json, currency)
                .with_context(|| format!("Failed to load catalog: {}", path.display()))?
        }
        None => sample_catalog_in(currency),
    };
    catalog
        .ensure_currency(currency)
        .context("Catalog prices do not match the store currency")?;
    Ok(catalog)
}

fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumina_commerce::config::StoreConfig;
    use lumina_commerce::ids::ItemId;
    use lumina_commerce::ledger::SessionState;

    #[test]
    fn test_sample_catalog_follows_store_currency() {
        let store = StoreConfig {
            currency: Currency::EUR,
            ..StoreConfig::default()
        };
        let catalog = load_catalog(None, store.currency).unwrap();
        let item = catalog.get(&ItemId::new("5")).unwrap();

        let ledger = OrderLedger::from_config(&store);
        let mut session = SessionState::new();
        ledger.add_item(&mut session, item).unwrap();
        let summary = ledger.compute_summary(session.cart());
        assert_eq!(summary.total.currency, Currency::EUR);
        assert_eq!(summary.total.display(), "€16.98");
    }

    #[test]
    fn test_missing_catalog_file() {
        let path = Path::new("/nonexistent/lumina-catalog.json");
        assert!(load_catalog(Some(path), Currency::USD).is_err());
    }
}
