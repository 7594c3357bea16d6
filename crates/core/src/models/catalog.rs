use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::asset::ArtAsset;

/// Read-only set of catalogued artworks, keyed by asset id.
///
/// Listing order follows the order the assets were supplied in.
/// Lookups by id go through an index map (O(1)).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<ArtAsset>", into = "Vec<ArtAsset>")]
pub struct AssetCatalog {
    assets: Vec<ArtAsset>,
    index: HashMap<String, usize>,
}

impl AssetCatalog {
    /// Build a catalog, validating every entry.
    ///
    /// Rejects empty ids, `total_fractions == 0`, `available_fractions > total_fractions`,
    /// negative or non-finite fraction prices, and duplicate ids.
    pub fn new(assets: Vec<ArtAsset>) -> Result<Self, CoreError> {
        let mut index = HashMap::with_capacity(assets.len());
        for (pos, asset) in assets.iter().enumerate() {
            Self::validate(asset)?;
            if index.insert(asset.id.clone(), pos).is_some() {
                return Err(CoreError::DuplicateAsset(asset.id.clone()));
            }
        }
        tracing::debug!(assets = assets.len(), "asset catalog loaded");
        Ok(Self { assets, index })
    }

    /// Parse a JSON array of assets and validate it.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let assets: Vec<ArtAsset> = serde_json::from_str(json)?;
        Self::new(assets)
    }

    fn validate(asset: &ArtAsset) -> Result<(), CoreError> {
        if asset.id.trim().is_empty() {
            return Err(CoreError::ValidationError(format!(
                "asset '{}' has an empty id",
                asset.title
            )));
        }
        if asset.total_fractions == 0 {
            return Err(CoreError::ValidationError(format!(
                "asset {} has no fractions",
                asset.id
            )));
        }
        if asset.available_fractions > asset.total_fractions {
            return Err(CoreError::ValidationError(format!(
                "asset {} offers {} fractions but only {} exist",
                asset.id, asset.available_fractions, asset.total_fractions
            )));
        }
        if !asset.fraction_price.is_finite() || asset.fraction_price < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "asset {} has invalid fraction price {}",
                asset.id, asset.fraction_price
            )));
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&ArtAsset> {
        self.index.get(id).map(|&pos| &self.assets[pos])
    }

    /// Current fraction price for an asset id, if catalogued.
    pub fn fraction_price(&self, id: &str) -> Option<f64> {
        self.get(id).map(|a| a.fraction_price)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// All assets in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ArtAsset> {
        self.assets.iter()
    }

    /// Tradable assets (not catalog-only) whose title or artist matches `query`.
    pub fn marketplace(&self, query: &str) -> Vec<&ArtAsset> {
        self.assets
            .iter()
            .filter(|a| !a.is_catalog_only && a.matches_query(query))
            .collect()
    }

    /// Institutional catalog entries (listed, not traded).
    pub fn institutional(&self) -> Vec<&ArtAsset> {
        self.assets.iter().filter(|a| a.is_catalog_only).collect()
    }
}

impl TryFrom<Vec<ArtAsset>> for AssetCatalog {
    type Error = CoreError;

    fn try_from(assets: Vec<ArtAsset>) -> Result<Self, Self::Error> {
        Self::new(assets)
    }
}

impl From<AssetCatalog> for Vec<ArtAsset> {
    fn from(catalog: AssetCatalog) -> Self {
        catalog.assets
    }
}
