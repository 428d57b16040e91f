//! Source Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define WHAT the domain needs from outside,
//! but NOT how it's actually done. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait CreatureSource  │  HttpCreatureSource
//!   fn fetch()          │  InMemoryCreatureSource
//! ```

pub mod creature_source;
