//! Record Classifier - From untyped records to typed creatures
//!
//! Admission is decided by a single check: the record must carry a
//! challenge rating field. Only its presence counts; a rating that is
//! not a number (`null`, `"1/8"`) reads as 0, the same way every other
//! field is read leniently and falls back to its zero value. Records
//! that fail admission are dropped without an error.
//!
//! This is pure domain logic - no I/O, no logging.

use crate::model::creature::Creature;
use crate::model::movement::Movement;
use crate::model::raw::{field, RawValue};

/// Does this record qualify as a creature?
pub fn is_creature(record: &impl RawValue) -> bool {
    record.has(field::CHALLENGE_RATING)
}

/// Can this creature swim?
pub fn is_swimming_creature(creature: &Creature) -> bool {
    creature.swim_speed().is_some_and(|swim| swim > 0.0)
}

/// Can this creature fly?
pub fn is_flying_creature(creature: &Creature) -> bool {
    creature.fly_speed().is_some_and(|fly| fly > 0.0)
}

/// Build a typed creature from a raw record.
///
/// Returns `None` when the record fails admission.
pub fn classify(record: &impl RawValue) -> Option<Creature> {
    if !is_creature(record) {
        return None;
    }
    let challenge_rating = record.number(field::CHALLENGE_RATING).unwrap_or(0.0);

    let movement = Movement::from_speeds(
        record.number(field::SWIM_SPEED),
        record.number(field::FLY_SPEED),
    );

    let creature = Creature::new(record.text(field::NAME).unwrap_or_default(), challenge_rating)
        .with_kind(record.text(field::KIND).unwrap_or_default())
        .with_armor_class(unsigned(record.number(field::ARMOR_CLASS)))
        .with_hit_points(unsigned(record.number(field::HIT_POINTS)))
        // Truncates fractions and saturates out-of-range values; initiative is display only
        .with_initiative(record.number(field::INITIATIVE).unwrap_or(0.0) as i32)
        .with_speed(record.number(field::SPEED).unwrap_or(0.0))
        .with_movement(movement);

    Some(creature)
}

/// Keep only the records that qualify, in input order.
pub fn admit<R: RawValue>(records: impl IntoIterator<Item = R>) -> Vec<Creature> {
    records
        .into_iter()
        .filter_map(|record| classify(&record))
        .collect()
}

// `as` saturates: negatives and NaN become 0
fn unsigned(value: Option<f64>) -> u32 {
    value.unwrap_or(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::raw::fake::FakeValue;

    fn crab() -> FakeValue {
        FakeValue::record()
            .with_text(field::NAME, "Crab")
            .with_text(field::KIND, "beast")
            .with_num(field::ARMOR_CLASS, 11.0)
            .with_num(field::CHALLENGE_RATING, 0.0)
            .with_num(field::HIT_POINTS, 2.0)
            .with_num(field::INITIATIVE, 0.0)
            .with_num(field::SPEED, 20.0)
            .with_num(field::SWIM_SPEED, 20.0)
    }

    #[test]
    fn test_is_creature_checks_rating_presence() {
        assert!(is_creature(&crab()));

        let no_rating = FakeValue::record()
            .with_text(field::NAME, "Ghost")
            .with_num(field::FLY_SPEED, 40.0);
        assert!(!is_creature(&no_rating));

        // Presence is enough, whatever the value
        let null_rating = FakeValue::record()
            .with_text(field::NAME, "Blob")
            .with_null(field::CHALLENGE_RATING);
        assert!(is_creature(&null_rating));

        let text_rating = FakeValue::record()
            .with_text(field::NAME, "Kobold")
            .with_text(field::CHALLENGE_RATING, "1/8");
        assert!(is_creature(&text_rating));
    }

    #[test]
    fn test_non_numeric_rating_reads_as_zero() {
        let kobold = FakeValue::record()
            .with_text(field::NAME, "Kobold")
            .with_text(field::CHALLENGE_RATING, "1/8")
            .with_num(field::FLY_SPEED, 30.0);
        let creature = classify(&kobold).unwrap();

        assert_eq!(creature.name(), "Kobold");
        assert_eq!(creature.challenge_rating(), 0.0);
        assert!(is_flying_creature(&creature));

        let blob = FakeValue::record().with_null(field::CHALLENGE_RATING);
        assert_eq!(classify(&blob).unwrap().challenge_rating(), 0.0);
    }

    #[test]
    fn test_fractional_initiative_truncates() {
        let record = FakeValue::record()
            .with_num(field::CHALLENGE_RATING, 1.0)
            .with_num(field::INITIATIVE, 2.9);

        assert_eq!(classify(&record).unwrap().initiative(), 2);
    }

    #[test]
    fn test_classify_reads_all_fields() {
        let creature = classify(&crab()).unwrap();

        assert_eq!(creature.name(), "Crab");
        assert_eq!(creature.kind(), "beast");
        assert_eq!(creature.armor_class(), 11);
        assert_eq!(creature.challenge_rating(), 0.0);
        assert_eq!(creature.hit_points(), 2);
        assert_eq!(creature.speed(), 20.0);
        assert_eq!(creature.movement(), Movement::Swimmer { swim: 20.0 });
    }

    #[test]
    fn test_classify_defaults_missing_fields() {
        let bare = FakeValue::record().with_num(field::CHALLENGE_RATING, 2.0);
        let creature = classify(&bare).unwrap();

        assert_eq!(creature.name(), "");
        assert_eq!(creature.armor_class(), 0);
        assert_eq!(creature.speed(), 0.0);
        assert_eq!(creature.movement(), Movement::Walker);
    }

    #[test]
    fn test_classify_clamps_negative_numbers() {
        let odd = FakeValue::record()
            .with_num(field::CHALLENGE_RATING, 1.0)
            .with_num(field::HIT_POINTS, -4.0)
            .with_num(field::SPEED, -30.0)
            .with_num(field::INITIATIVE, -2.0);
        let creature = classify(&odd).unwrap();

        assert_eq!(creature.hit_points(), 0);
        assert_eq!(creature.speed(), 0.0);
        assert_eq!(creature.initiative(), -2);
    }

    #[test]
    fn test_variant_predicates() {
        let walker = Creature::new("Wolf", 0.25).with_speed(40.0);
        let swimmer = Creature::new("Crab", 0.0).with_swim_speed(20.0);
        let flier = Creature::new("Eagle", 0.0).with_fly_speed(80.0);
        let both = Creature::new("Dragon Turtle", 17.0)
            .with_swim_speed(40.0)
            .with_fly_speed(10.0);

        assert!(!is_swimming_creature(&walker));
        assert!(!is_flying_creature(&walker));

        assert!(is_swimming_creature(&swimmer));
        assert!(!is_flying_creature(&swimmer));

        assert!(!is_swimming_creature(&flier));
        assert!(is_flying_creature(&flier));

        // Variants are structural: a creature can be both
        assert!(is_swimming_creature(&both));
        assert!(is_flying_creature(&both));
    }

    #[test]
    fn test_zero_speed_is_not_a_variant() {
        let record = FakeValue::record()
            .with_num(field::CHALLENGE_RATING, 1.0)
            .with_num(field::SWIM_SPEED, 0.0)
            .with_num(field::FLY_SPEED, 0.0);
        let creature = classify(&record).unwrap();

        assert!(!is_swimming_creature(&creature));
        assert!(!is_flying_creature(&creature));
    }

    #[test]
    fn test_admit_drops_records_without_rating() {
        let records = vec![
            crab(),
            FakeValue::record()
                .with_text(field::NAME, "Phantom Bird")
                .with_num(field::FLY_SPEED, 120.0),
            FakeValue::record()
                .with_text(field::NAME, "Wolf")
                .with_num(field::CHALLENGE_RATING, 0.25),
        ];

        let creatures = admit(records);
        let names: Vec<&str> = creatures.iter().map(|c| c.name()).collect();

        assert_eq!(names, vec!["Crab", "Wolf"]);
    }

    #[test]
    fn test_admit_payload_sequence() {
        let payload = FakeValue::List(vec![crab(), FakeValue::record()]);
        let records = payload.into_sequence().unwrap();

        assert_eq!(admit(records).len(), 1);
        assert!(crab().into_sequence().is_none());
    }
}
