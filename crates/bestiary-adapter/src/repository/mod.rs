//! Local Sources - Creature lists that don't come over the network
//!
//! These implement the `CreatureSource` port from bestiary-domain.

pub mod in_memory;
