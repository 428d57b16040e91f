//! # Bestiary Use Case Layer
//!
//! Application-specific business rules.
//! This layer orchestrates the flow of data between the domain and adapters:
//!
//! ```text
//! CreatureSource ─fetch─▶ classifier::admit ─▶ Ranking::rank ─▶ SummarySink
//! ```

pub use bestiary_domain;

pub mod error;
pub mod loading;
pub mod summarize_bestiary;
pub mod summary;

pub use error::BestiaryError;
pub use loading::{LoadingFlag, LoadingGuard};
pub use summarize_bestiary::{RunOutcome, SummarizeBestiary};
pub use summary::{Summary, SummarySink};
