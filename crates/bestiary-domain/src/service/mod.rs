//! Domain Services - Logic that doesn't belong to a single model

pub mod classifier;
pub mod ranking;
