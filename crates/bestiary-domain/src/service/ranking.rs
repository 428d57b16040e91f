//! Ranking - The bestiary's three derived views
//!
//! 1. Difficulty: every creature, hardest first
//! 2. Quickest swimmer: the single fastest creature that can swim
//! 3. Fastest fliers: the top five creatures that can fly
//!
//! Swimmers and fliers are ranked by their pace, the larger of the
//! specialized speed and the base speed. A creature that runs faster
//! than it flies still ranks by its running speed.
//!
//! This is pure domain logic - no I/O, no async, no external dependencies.
//! Nothing here mutates the input slice.

use core::cmp::Ordering;

use crate::model::creature::Creature;

/// How many fliers make the podium
pub const FLIER_PODIUM_SIZE: usize = 5;

/// Errors raised while ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankingError {
    /// No creature in the collection can swim
    NoSwimmers,
}

impl core::fmt::Display for RankingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RankingError::NoSwimmers => {
                write!(f, "No swimming creature in the current list")
            }
        }
    }
}

impl std::error::Error for RankingError {}

/// All three views over one collection
#[derive(Debug, Clone, PartialEq)]
pub struct Rankings<'a> {
    pub by_difficulty: Vec<&'a Creature>,
    pub quickest_swimmer: &'a Creature,
    pub fastest_fliers: Vec<&'a Creature>,
}

/// Ranking - The ranking engine
///
/// A stateless domain service. Every method is a pure function of
/// the creatures it is given.
pub struct Ranking;

impl Ranking {
    pub fn new() -> Self {
        Self
    }

    /// Every creature, sorted by descending challenge rating.
    ///
    /// The sort is stable: equal ratings keep their input order.
    pub fn by_difficulty<'a>(&self, creatures: &'a [Creature]) -> Vec<&'a Creature> {
        let mut ranked: Vec<&Creature> = creatures.iter().collect();
        ranked.sort_by(|a, b| descending(a.challenge_rating(), b.challenge_rating()));
        ranked
    }

    /// The swimmer with the highest swim pace.
    ///
    /// Ties go to the creature met first. Fails when nothing can swim.
    pub fn quickest_swimmer<'a>(
        &self,
        creatures: &'a [Creature],
    ) -> Result<&'a Creature, RankingError> {
        creatures
            .iter()
            .filter_map(|c| c.swim_pace().map(|pace| (c, pace)))
            .fold(None::<(&Creature, f64)>, |best, (c, pace)| match best {
                Some((_, best_pace)) if pace <= best_pace => best,
                _ => Some((c, pace)),
            })
            .map(|(c, _)| c)
            .ok_or(RankingError::NoSwimmers)
    }

    /// Up to [`FLIER_PODIUM_SIZE`] fliers, fastest first by fly pace.
    pub fn fastest_fliers<'a>(&self, creatures: &'a [Creature]) -> Vec<&'a Creature> {
        let mut fliers: Vec<(&Creature, f64)> = creatures
            .iter()
            .filter_map(|c| c.fly_pace().map(|pace| (c, pace)))
            .collect();

        fliers.sort_by(|(_, a), (_, b)| descending(*a, *b));
        fliers.truncate(FLIER_PODIUM_SIZE);
        fliers.into_iter().map(|(c, _)| c).collect()
    }

    /// Compute all three views.
    ///
    /// All or nothing: if any view fails, no rankings are returned.
    pub fn rank<'a>(&self, creatures: &'a [Creature]) -> Result<Rankings<'a>, RankingError> {
        let by_difficulty = self.by_difficulty(creatures);
        let quickest_swimmer = self.quickest_swimmer(creatures)?;
        let fastest_fliers = self.fastest_fliers(creatures);

        Ok(Rankings {
            by_difficulty,
            quickest_swimmer,
            fastest_fliers,
        })
    }
}

impl Default for Ranking {
    fn default() -> Self {
        Self::new()
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
