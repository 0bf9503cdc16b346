//! Discovery state machine.
//!
//! A session walks a fixed sequence of stars. Clicking the current target
//! discovers it and links it to the previous one; clicking anything else only
//! shakes that star. Timers and effects live in the game controller; the
//! session holds nothing but progress.

use glam::Vec2;

use crate::catalog::{Catalog, Star};

/// Progress through the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// `index` stars found so far; the next target is `order[index]`.
    InProgress { index: usize },
    Completed,
}

/// Constellation edge between two consecutively discovered stars
/// (indices into the session's star list).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub from: usize,
    pub to: usize,
}

/// What a click on a star did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// The target was found. `completed` is set on the final discovery.
    Discovered { star: usize, completed: bool },
    /// Wrong star; it should shake.
    Rejected { star: usize },
    /// Post-completion click on a discovered star.
    Revisited { star: usize },
    Ignored,
}

pub struct Session {
    stars: Vec<Star>,
    /// Sequence resolved to star indices.
    order: Vec<usize>,
    phase: Phase,
    /// Discovered stars in discovery order.
    discovered: Vec<usize>,
    connections: Vec<Connection>,
}

impl Session {
    /// Fresh session over a deep copy of the catalog.
    pub fn new(catalog: &Catalog) -> Self {
        let stars = catalog.instantiate();
        let order = resolve_sequence(catalog, &stars);
        let mut session = Self {
            stars,
            order,
            phase: Phase::InProgress { index: 0 },
            discovered: Vec::new(),
            connections: Vec::new(),
        };
        session.retarget();
        session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// Number of stars discovered so far.
    pub fn current_index(&self) -> usize {
        match self.phase {
            Phase::InProgress { index } => index,
            Phase::Completed => self.order.len(),
        }
    }

    /// Length of the discovery sequence.
    pub fn sequence_len(&self) -> usize {
        self.order.len()
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn stars_mut(&mut self) -> &mut [Star] {
        &mut self.stars
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.stars.iter().position(|s| s.id() == id)
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Discovered star indices in discovery order.
    pub fn discovered(&self) -> &[usize] {
        &self.discovered
    }

    pub fn discovered_ids(&self) -> impl Iterator<Item = &str> {
        self.discovered.iter().map(|&i| self.stars[i].id())
    }

    /// Index of the star that must be found next.
    pub fn target(&self) -> Option<usize> {
        match self.phase {
            Phase::InProgress { index } => self.order.get(index).copied(),
            Phase::Completed => None,
        }
    }

    pub fn target_star(&self) -> Option<&Star> {
        self.target().map(|i| &self.stars[i])
    }

    /// Nearest star within `tolerance` of `point`. On equal distance the
    /// earlier star in catalog order wins.
    pub fn hit_test(&self, point: Vec2, tolerance: f32) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, star) in self.stars.iter().enumerate() {
            let dist = point.distance(star.screen);
            // Also rejects NaN distances from non-finite clicks.
            if !(dist <= tolerance) {
                continue;
            }
            match best {
                Some((_, d)) if d <= dist => {}
                _ => best = Some((i, dist)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Apply a click on the star at `index`.
    pub fn interact(&mut self, index: usize) -> Interaction {
        if index >= self.stars.len() {
            return Interaction::Ignored;
        }
        match self.phase {
            Phase::Completed => {
                if self.stars[index].discovered {
                    Interaction::Revisited { star: index }
                } else {
                    Interaction::Ignored
                }
            }
            Phase::InProgress { index: step } => {
                if self.order.get(step) == Some(&index) {
                    self.discover(step, index)
                } else {
                    self.stars[index].jiggling = true;
                    Interaction::Rejected { star: index }
                }
            }
        }
    }

    fn discover(&mut self, step: usize, index: usize) -> Interaction {
        let star = &mut self.stars[index];
        star.discovered = true;
        star.is_target = false;
        self.discovered.push(index);

        if step > 0 {
            let previous = self.order[step - 1];
            self.connections.push(Connection { from: previous, to: index });
        }

        let next = step + 1;
        let completed = next >= self.order.len();
        self.phase = if completed {
            Phase::Completed
        } else {
            Phase::InProgress { index: next }
        };
        self.retarget();
        Interaction::Discovered { star: index, completed }
    }

    /// Stop the shake on a star. Harmless if it already stopped.
    pub fn clear_jiggle(&mut self, index: usize) {
        if let Some(star) = self.stars.get_mut(index) {
            star.jiggling = false;
        }
    }

    /// Mark every star as celebrating.
    pub fn set_celebrating(&mut self, on: bool) {
        for star in &mut self.stars {
            star.celebrating = on;
        }
    }

    /// Make exactly the current target carry `is_target`.
    fn retarget(&mut self) {
        let target = self.target();
        for (i, star) in self.stars.iter_mut().enumerate() {
            star.is_target = Some(i) == target;
        }
    }
}

/// Map sequence ids to star indices, skipping ids the catalog lacks.
fn resolve_sequence(catalog: &Catalog, stars: &[Star]) -> Vec<usize> {
    catalog
        .sequence
        .iter()
        .filter_map(|id| {
            let found = stars.iter().position(|s| s.id() == id);
            if found.is_none() {
                log::warn!("skipping sequence entry '{}': not in catalog", id);
            }
            found
        })
        .collect()
}
