//! # Bestiary Domain Layer
//!
//! The heart of the bestiary - pure business logic with zero external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Creature, Movement, RawValue                  ││
//! │  │  repository/- CreatureSource port (not implementations)     ││
//! │  │  service/   - Record Classifier, Ranking Engine             ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Golden Rule
//!
//! **This crate has ZERO external dependencies.**
//!
//! If the creature API moves from JSON to something else, this crate
//! doesn't change. Adapters translate; the domain ranks.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    creature::Creature,
    movement::Movement,
    raw::{field, RawValue},
};

pub use repository::creature_source::{CreatureSource, SourceError};

pub use service::{
    classifier::{admit, classify, is_creature, is_flying_creature, is_swimming_creature},
    ranking::{Ranking, RankingError, Rankings, FLIER_PODIUM_SIZE},
};
