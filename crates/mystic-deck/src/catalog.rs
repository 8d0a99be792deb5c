//! The fixed tarot catalog.
//!
//! The catalog is embedded YAML, parsed once per process and never mutated.
//! Its file order is the canonical deck order.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const CATALOG_YAML: &str = include_str!("../data/catalog.yaml");

static STANDARD: LazyLock<Catalog> = LazyLock::new(|| {
    // The embedded catalog is covered by tests; a parse failure is a build defect.
    Catalog::from_yaml(CATALOG_YAML).expect("embedded tarot catalog is valid")
});

/// Card category. Affects presentation emphasis only, never drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcanaClass {
    /// One of the 22 trump cards.
    Major,
    /// One of the 56 suit cards.
    Minor,
}

/// Immutable identity of a card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Display name, unique within the catalog.
    pub name: String,
    /// Reference to the card face image.
    pub image: String,
    /// Major or minor arcana.
    pub arcana: ArcanaClass,
}

/// Errors raised while loading a catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document is not valid catalog YAML.
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Two cards share a name.
    #[error("duplicate card in catalog: {0}")]
    Duplicate(String),
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    cards: Vec<CardDefinition>,
}

/// An ordered, duplicate-free set of card definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    cards: Vec<CardDefinition>,
}

impl Catalog {
    /// Returns the process-wide 78-card catalog.
    #[must_use]
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    /// Parses a catalog document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed YAML and
    /// `CatalogError::Duplicate` when a card name appears twice.
    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_yaml::from_str(source)?;
        let mut seen = std::collections::HashSet::new();
        for card in &document.cards {
            if !seen.insert(card.name.as_str()) {
                return Err(CatalogError::Duplicate(card.name.clone()));
            }
        }
        Ok(Self {
            cards: document.cards,
        })
    }

    /// Cards in canonical order.
    #[must_use]
    pub fn cards(&self) -> &[CardDefinition] {
        &self.cards
    }

    /// Number of cards in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalog holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// A fresh deck in canonical order.
    #[must_use]
    pub fn fresh_deck(&self) -> Vec<CardDefinition> {
        self.cards.clone()
    }

    /// Looks a card up by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&CardDefinition> {
        self.cards.iter().find(|card| card.name == name)
    }
}
