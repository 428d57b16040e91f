//! Summary - The presentable result of one run

use bestiary_domain::Rankings;

/// Names from the three ranked views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Every creature, hardest first
    pub by_difficulty: Vec<String>,
    pub quickest_swimmer: String,
    /// Up to five fliers, fastest first
    pub fastest_fliers: Vec<String>,
}

impl Summary {
    /// The three human-readable summary lines
    pub fn lines(&self) -> [String; 3] {
        [
            format!(
                "Creatures ordered by difficulty: {}.",
                self.by_difficulty.join(", ")
            ),
            format!("Quickest swimming creature: {}.", self.quickest_swimmer),
            format!(
                "Five quickest flying creatures: {}.",
                self.fastest_fliers.join(", ")
            ),
        ]
    }
}

impl From<&Rankings<'_>> for Summary {
    fn from(rankings: &Rankings<'_>) -> Self {
        Self {
            by_difficulty: rankings
                .by_difficulty
                .iter()
                .map(|c| c.name().to_string())
                .collect(),
            quickest_swimmer: rankings.quickest_swimmer.name().to_string(),
            fastest_fliers: rankings
                .fastest_fliers
                .iter()
                .map(|c| c.name().to_string())
                .collect(),
        }
    }
}

/// Where a run reports to
///
/// This is a PORT: the application decides whether lines go to a
/// terminal, a log, or a test buffer.
pub trait SummarySink {
    /// One summary line
    fn line(&mut self, line: &str);

    /// The single error description of a failed run
    fn error(&mut self, message: &str);

    /// A complete summary. Emits [`Summary::lines`] by default.
    fn summary(&mut self, summary: &Summary) {
        for line in summary.lines() {
            self.line(&line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bestiary_domain::{Creature, Ranking};

    #[test]
    fn test_summary_lines() {
        let summary = Summary {
            by_difficulty: vec!["Eagle".into(), "Wolf".into(), "Crab".into()],
            quickest_swimmer: "Crab".into(),
            fastest_fliers: vec!["Eagle".into()],
        };

        assert_eq!(
            summary.lines(),
            [
                "Creatures ordered by difficulty: Eagle, Wolf, Crab.".to_string(),
                "Quickest swimming creature: Crab.".to_string(),
                "Five quickest flying creatures: Eagle.".to_string(),
            ]
        );
    }

    #[test]
    fn test_summary_from_rankings() {
        let creatures = vec![
            Creature::new("Shark", 2.0).with_swim_speed(40.0),
            Creature::new("Owl", 0.0).with_fly_speed(60.0),
        ];
        let rankings = Ranking::new().rank(&creatures).unwrap();

        let summary = Summary::from(&rankings);
        assert_eq!(summary.by_difficulty, vec!["Shark", "Owl"]);
        assert_eq!(summary.quickest_swimmer, "Shark");
        assert_eq!(summary.fastest_fliers, vec!["Owl"]);
    }
}
