//! Star catalog: the read-only definitions the game is played over.
//!
//! The catalog is loaded once. Every game start or reset deep-copies its
//! star list into fresh runtime [`Star`]s, so session mutations never reach
//! the source data.

mod star;

pub use star::{BackgroundStar, Star, StarDef};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::api::error::CatalogError;
use crate::systems::effects::Rng;

/// Built-in Matariki cluster shipped with the crate.
const BUILTIN_CATALOG: &str = include_str!("../../assets/matariki.json");

/// Star definitions, discovery order and decorative background field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Star ids in the order they must be discovered.
    pub sequence: Vec<String>,
    pub stars: Vec<StarDef>,
    #[serde(default)]
    pub background: Vec<BackgroundStar>,
}

impl Catalog {
    /// Parse and validate a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The embedded Matariki catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Structural checks. Sequence ids with no matching star are tolerated
    /// (the game skips them at runtime) but logged.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.sequence.is_empty() {
            return Err(CatalogError::EmptySequence);
        }
        let mut seen = HashSet::with_capacity(self.stars.len());
        for star in &self.stars {
            if !seen.insert(star.id.as_str()) {
                return Err(CatalogError::DuplicateStar { id: star.id.clone() });
            }
        }
        for id in &self.sequence {
            if self.star(id).is_none() {
                log::warn!("sequence entry '{}' has no matching star", id);
            }
        }
        Ok(())
    }

    /// Look up a definition by id.
    pub fn star(&self, id: &str) -> Option<&StarDef> {
        self.stars.iter().find(|s| s.id == id)
    }

    /// Fresh runtime copies of every star, all flags cleared.
    pub fn instantiate(&self) -> Vec<Star> {
        self.stars.iter().map(Star::from_def).collect()
    }

    /// Generate a deterministic background field in the design space when the
    /// catalog did not supply one.
    pub fn ensure_background(&mut self, count: usize, width: f32, height: f32, seed: u64) {
        if !self.background.is_empty() {
            return;
        }
        let mut rng = Rng::new(seed);
        self.background = (0..count)
            .map(|_| BackgroundStar {
                x: rng.range(0.0, width),
                y: rng.range(0.0, height),
                brightness: rng.range(0.2, 1.0),
            })
            .collect();
    }
}
