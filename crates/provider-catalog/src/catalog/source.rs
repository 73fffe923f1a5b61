//! Catalog source selection and loading.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use super::{sample_products, Product, MAX_RATING};
use crate::error::{CatalogError, Result};

/// The full, unfiltered product list a grid works over.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    is_sample: bool,
}

/// TOML catalogs wrap the list in a `[[products]]` array of tables.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<Product>,
}

impl Catalog {
    /// Use the supplied products, or the sample catalog when none (or an
    /// empty list) is given.
    pub fn new(products: Option<Vec<Product>>) -> Self {
        match products {
            Some(products) if !products.is_empty() => Self {
                products,
                is_sample: false,
            },
            Some(_) => {
                tracing::warn!("supplied product list is empty, using sample catalog");
                Self::sample()
            }
            None => Self::sample(),
        }
    }

    /// The built-in sample catalog.
    pub fn sample() -> Self {
        Self {
            products: sample_products(),
            is_sample: true,
        }
    }

    /// Parse a JSON array of products.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::validated(products)
    }

    /// Parse a TOML document with a `[[products]]` array.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::validated(file.products)
    }

    /// Load a catalog file; `.json` files are parsed as JSON, anything else
    /// as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let catalog = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        tracing::debug!(
            path = %path.display(),
            products = catalog.len(),
            sample = catalog.is_sample,
            "catalog loaded"
        );
        Ok(catalog)
    }

    fn validated(products: Vec<Product>) -> Result<Self> {
        validate(&products)?;
        Ok(Self::new(Some(products)))
    }

    /// All products, in source order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Whether this is the built-in sample catalog.
    pub fn is_sample(&self) -> bool {
        self.is_sample
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Find a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

/// Check the data model invariants of a loaded product list.
pub fn validate(products: &[Product]) -> Result<()> {
    let mut seen = HashSet::with_capacity(products.len());

    for product in products {
        let id = product.id.as_str();
        if !seen.insert(id) {
            return Err(CatalogError::invalid(id, "duplicate id"));
        }
        if !product.price.is_finite() || product.price < 0.0 {
            return Err(CatalogError::invalid(
                id,
                format!("price must be a non-negative number, got {}", product.price),
            ));
        }
        if !(0.0..=MAX_RATING).contains(&product.rating) {
            return Err(CatalogError::invalid(
                id,
                format!("rating must be within 0.0-5.0, got {}", product.rating),
            ));
        }
    }

    Ok(())
}
