//! # Favorites
//!
//! The set of products the shopper hearted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::types::{Product, ProductId};

/// Favorited product ids. No duplicates; iteration is in id order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteSet(BTreeSet<ProductId>);

impl FavoriteSet {
    pub fn new() -> Self {
        FavoriteSet(BTreeSet::new())
    }

    /// Adds the id if absent, removes it if present.
    ///
    /// Returns `true` when the product is a favorite afterwards.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.0.iter().copied()
    }

    /// Favorited products in catalog order.
    pub fn products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog
            .products()
            .iter()
            .filter(|p| self.contains(p.id))
            .collect()
    }
}
