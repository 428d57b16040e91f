//! Movement - How a creature gets around besides walking
//!
//! Movement is a Value Object resolved once, when a raw record is
//! classified. Ranking never probes optional attributes again; it
//! matches on the tag instead.

/// Movement tag of a creature
///
/// Only strictly positive specialized speeds count. A record with
/// `swimSpeed: 0` is a plain walker.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Movement {
    /// Ground only
    #[default]
    Walker,
    /// Can swim
    Swimmer { swim: f64 },
    /// Can fly
    Flier { fly: f64 },
    /// Can both swim and fly
    SwimmerFlier { swim: f64, fly: f64 },
}

impl Movement {
    /// Resolve the tag from optional specialized speeds
    pub fn from_speeds(swim: Option<f64>, fly: Option<f64>) -> Self {
        let swim = swim.filter(|s| *s > 0.0);
        let fly = fly.filter(|f| *f > 0.0);

        match (swim, fly) {
            (None, None) => Movement::Walker,
            (Some(swim), None) => Movement::Swimmer { swim },
            (None, Some(fly)) => Movement::Flier { fly },
            (Some(swim), Some(fly)) => Movement::SwimmerFlier { swim, fly },
        }
    }

    pub fn swim_speed(&self) -> Option<f64> {
        match self {
            Movement::Swimmer { swim } | Movement::SwimmerFlier { swim, .. } => Some(*swim),
            Movement::Walker | Movement::Flier { .. } => None,
        }
    }

    pub fn fly_speed(&self) -> Option<f64> {
        match self {
            Movement::Flier { fly } | Movement::SwimmerFlier { fly, .. } => Some(*fly),
            Movement::Walker | Movement::Swimmer { .. } => None,
        }
    }

    /// Builder-style: replace the swim speed, keeping the fly speed
    pub fn with_swim(self, swim: f64) -> Self {
        Self::from_speeds(Some(swim), self.fly_speed())
    }

    /// Builder-style: replace the fly speed, keeping the swim speed
    pub fn with_fly(self, fly: f64) -> Self {
        Self::from_speeds(self.swim_speed(), Some(fly))
    }

    /// Short label used in logs
    pub fn label(&self) -> &'static str {
        match self {
            Movement::Walker => "walker",
            Movement::Swimmer { .. } => "swimmer",
            Movement::Flier { .. } => "flier",
            Movement::SwimmerFlier { .. } => "swimmer+flier",
        }
    }
}

impl core::fmt::Display for Movement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.label())
    }
}
