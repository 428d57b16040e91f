//! Domain Models - The vocabulary of the bestiary
//!
//! These types represent the "Ubiquitous Language" of the bestiary.
//! Every name here should match how we talk about the system.

pub mod creature;
pub mod movement;
pub mod raw;
