//! # Bestiary Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `gateway/` - Outbound adapters (HTTP creature API, JSON decoding)
//! - `repository/` - Local sources (in-memory)

pub mod error;
pub mod gateway;
pub mod repository;

pub use error::AdapterError;
pub use gateway::http::HttpCreatureSource;
pub use gateway::json_record::JsonRecord;
pub use repository::in_memory::InMemoryCreatureSource;
