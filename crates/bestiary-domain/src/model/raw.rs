//! RawValue - The domain's view of an untyped decoded document
//!
//! The domain never depends on a JSON library. Adapters wrap whatever
//! they decode (serde_json, YAML, a test fake) and expose it through
//! this trait.

/// Field names used by bestiary records
pub mod field {
    pub const ARMOR_CLASS: &str = "armorClass";
    pub const CHALLENGE_RATING: &str = "challengeRating";
    pub const HIT_POINTS: &str = "hitPoints";
    pub const INITIATIVE: &str = "initiative";
    pub const NAME: &str = "name";
    pub const KIND: &str = "type";
    pub const SPEED: &str = "speed";
    pub const SWIM_SPEED: &str = "swimSpeed";
    pub const FLY_SPEED: &str = "flySpeed";
}

/// An untyped decoded value: a whole payload or a single record
pub trait RawValue: Sized {
    /// Is the field present at all, whatever its value (null included)?
    fn has(&self, key: &str) -> bool;

    /// Numeric field lookup. `None` if absent or not a number.
    fn number(&self, key: &str) -> Option<f64>;

    /// Text field lookup. `None` if absent or not text.
    fn text(&self, key: &str) -> Option<&str>;

    /// Split a payload into its elements.
    ///
    /// Returns `None` when the value is not a sequence.
    fn into_sequence(self) -> Option<Vec<Self>>;
}
