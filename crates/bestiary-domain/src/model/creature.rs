//! Creature - A validated bestiary entry
//!
//! Creature is a Value Object: it has no identity beyond its content.
//! Names are for display only and are not assumed unique.
//!
//! Creatures are built once from a raw record and never mutated.

use super::movement::Movement;

/// Creature - A typed bestiary entry
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    /// Display name
    name: String,
    /// Free-text category ("beast", "dragon", ...)
    kind: String,
    armor_class: u32,
    /// Difficulty. Never negative.
    challenge_rating: f64,
    hit_points: u32,
    initiative: i32,
    /// Base (ground) speed. Never negative.
    speed: f64,
    /// Specialized movement, resolved at classification
    movement: Movement,
}

impl Creature {
    /// Create a new ground-only Creature
    pub fn new(name: impl Into<String>, challenge_rating: f64) -> Self {
        Self {
            name: name.into(),
            kind: String::new(),
            armor_class: 0,
            challenge_rating: non_negative(challenge_rating),
            hit_points: 0,
            initiative: 0,
            speed: 0.0,
            movement: Movement::Walker,
        }
    }

    /// Builder: set category label
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_armor_class(mut self, armor_class: u32) -> Self {
        self.armor_class = armor_class;
        self
    }

    pub fn with_hit_points(mut self, hit_points: u32) -> Self {
        self.hit_points = hit_points;
        self
    }

    pub fn with_initiative(mut self, initiative: i32) -> Self {
        self.initiative = initiative;
        self
    }

    /// Builder: set base speed (negative values clamp to zero)
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = non_negative(speed);
        self
    }

    /// Builder: set swim speed (zero or negative removes the capability)
    pub fn with_swim_speed(mut self, swim: f64) -> Self {
        self.movement = self.movement.with_swim(swim);
        self
    }

    /// Builder: set fly speed (zero or negative removes the capability)
    pub fn with_fly_speed(mut self, fly: f64) -> Self {
        self.movement = self.movement.with_fly(fly);
        self
    }

    /// Builder: set the resolved movement tag directly
    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }

    // ========== Getters ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn armor_class(&self) -> u32 {
        self.armor_class
    }

    pub fn challenge_rating(&self) -> f64 {
        self.challenge_rating
    }

    pub fn hit_points(&self) -> u32 {
        self.hit_points
    }

    pub fn initiative(&self) -> i32 {
        self.initiative
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn movement(&self) -> Movement {
        self.movement
    }

    pub fn swim_speed(&self) -> Option<f64> {
        self.movement.swim_speed()
    }

    pub fn fly_speed(&self) -> Option<f64> {
        self.movement.fly_speed()
    }

    // ========== Ranking keys ==========

    /// Swimming pace: the larger of swim and base speed.
    ///
    /// `None` for creatures that cannot swim.
    pub fn swim_pace(&self) -> Option<f64> {
        self.swim_speed().map(|swim| swim.max(self.speed))
    }

    /// Flying pace: the larger of fly and base speed.
    ///
    /// `None` for creatures that cannot fly.
    pub fn fly_pace(&self) -> Option<f64> {
        self.fly_speed().map(|fly| fly.max(self.speed))
    }
}

fn non_negative(value: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        0.0
    }
}
