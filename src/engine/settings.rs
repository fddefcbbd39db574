//! Generation settings and seed derivation.

use serde::{Deserialize, Serialize};

use crate::models::Weekday;

/// Relative emphasis weights, each clamped to [0, 1].
///
/// The weights currently feed seeded variation only: they are folded into
/// the generation seed so that different emphases explore different
/// layouts, without changing the hard-constraint rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityWeights {
    /// Emphasis on even instructor load.
    pub instructor_load: f64,
    /// Emphasis on room utilization.
    pub room_utilization: f64,
    /// Emphasis on compact student schedules.
    pub student_schedule: f64,
    /// Emphasis on constraint satisfaction.
    pub constraints: f64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            instructor_load: 0.5,
            room_utilization: 0.5,
            student_schedule: 0.5,
            constraints: 1.0,
        }
    }
}

impl PriorityWeights {
    /// Clamps every weight to [0, 1].
    pub fn clamped(&self) -> Self {
        Self {
            instructor_load: self.instructor_load.clamp(0.0, 1.0),
            room_utilization: self.room_utilization.clamp(0.0, 1.0),
            student_schedule: self.student_schedule.clamp(0.0, 1.0),
            constraints: self.constraints.clamp(0.0, 1.0),
        }
    }

    /// Folds the weights into a seed contribution.
    ///
    /// Quantized to per-mille so that tiny float noise does not change the
    /// derived seed.
    pub(crate) fn seed_component(&self) -> u32 {
        let w = self.clamped();
        let mut acc: u32 = 0x811c_9dc5;
        for weight in [
            w.instructor_load,
            w.room_utilization,
            w.student_schedule,
            w.constraints,
        ] {
            let quantized = (weight * 1000.0).round() as u32;
            acc = acc.wrapping_mul(0x0100_0193) ^ quantized;
        }
        acc
    }
}

/// Settings for one generation call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptimizationSettings {
    /// Advisory upper bound on inner-loop iterations per attempt.
    pub max_iterations: Option<u32>,
    /// Stop the multi-attempt loop between attempts once elapsed.
    pub time_limit_seconds: Option<u64>,
    /// Relative emphasis weights.
    #[serde(default)]
    pub priority_weights: PriorityWeights,
    /// (day, period) patterns to exclude from candidate slots.
    /// Honored in single-cohort mode only.
    pub avoided_patterns: Vec<(Weekday, u8)>,
    /// Fixed seed for reproducible generation. When unset, a fresh seed is
    /// mixed from the wall clock, a uniform draw, and the weights.
    pub seed: Option<u32>,
}

impl OptimizationSettings {
    /// Creates default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the advisory iteration bound.
    pub fn with_max_iterations(mut self, max: u32) -> Self {
        self.max_iterations = Some(max);
        self
    }

    /// Sets the time limit.
    pub fn with_time_limit_seconds(mut self, seconds: u64) -> Self {
        self.time_limit_seconds = Some(seconds);
        self
    }

    /// Sets the priority weights.
    pub fn with_priority_weights(mut self, weights: PriorityWeights) -> Self {
        self.priority_weights = weights;
        self
    }

    /// Adds an avoided (day, period) pattern.
    pub fn with_avoided_pattern(mut self, day: Weekday, period: u8) -> Self {
        self.avoided_patterns.push((day, period));
        self
    }

    /// Sets a fixed seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The base seed for a generation call.
    ///
    /// A fixed seed is used verbatim; otherwise wall-clock millis, a
    /// uniform draw, and the weight fold are mixed.
    pub(crate) fn base_seed(&self) -> u32 {
        if let Some(seed) = self.seed {
            return seed;
        }
        let clock = chrono::Utc::now().timestamp_millis() as u32;
        let draw: u32 = rand::random();
        clock ^ draw.rotate_left(13) ^ self.priority_weights.seed_component()
    }
}
