use serde::{Deserialize, Serialize};

/// Total duration of the gauge fill-in animation.
pub const ANIMATION_MS: u32 = 1500;
pub const ANIMATION_STEPS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthBand {
    Excellent,
    Good,
    Fair,
    NeedsAttention,
}

impl HealthBand {
    pub fn for_percent(percent: f64) -> HealthBand {
        if percent >= 80.0 {
            HealthBand::Excellent
        } else if percent >= 60.0 {
            HealthBand::Good
        } else if percent >= 40.0 {
            HealthBand::Fair
        } else {
            HealthBand::NeedsAttention
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthBand::Excellent => "Excellent",
            HealthBand::Good => "Good",
            HealthBand::Fair => "Fair",
            HealthBand::NeedsAttention => "Needs Attention",
        }
    }

    /// Text colour; fair shares the danger colour with needs-attention.
    pub fn css_class(self) -> &'static str {
        match self {
            HealthBand::Excellent => "gauge--success",
            HealthBand::Good => "gauge--warning",
            HealthBand::Fair | HealthBand::NeedsAttention => "gauge--danger",
        }
    }
}

/// Barangay health index shown to officials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthIndex {
    pub score: u32,
    pub max: u32,
}

impl HealthIndex {
    pub fn new(score: u32, max: u32) -> Self {
        Self { score, max }
    }

    pub fn percent_of(&self, value: u32) -> f64 {
        if self.max == 0 {
            0.0
        } else {
            f64::from(value) * 100.0 / f64::from(self.max)
        }
    }

    pub fn band_of(&self, value: u32) -> HealthBand {
        HealthBand::for_percent(self.percent_of(value))
    }

    /// Needle angle in degrees; -90 points left (0 %), 90 points right.
    pub fn needle_rotation(&self, value: u32) -> f64 {
        self.percent_of(value) * 180.0 / 100.0 - 90.0
    }

    pub fn step_interval_ms(&self) -> u32 {
        ANIMATION_MS / ANIMATION_STEPS
    }

    /// Displayed value after each animation tick; the last frame is the score.
    pub fn animation_frames(&self) -> Vec<u32> {
        let increment = f64::from(self.score) / f64::from(ANIMATION_STEPS);
        let mut frames = Vec::with_capacity(ANIMATION_STEPS as usize);
        let mut current = 0.0;
        loop {
            current += increment;
            if current >= f64::from(self.score) {
                frames.push(self.score);
                return frames;
            }
            frames.push(current.round() as u32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands() {
        let gauge = HealthIndex::new(78, 100);
        assert_eq!(gauge.band_of(80), HealthBand::Excellent);
        assert_eq!(gauge.band_of(78), HealthBand::Good);
        assert_eq!(gauge.band_of(60), HealthBand::Good);
        assert_eq!(gauge.band_of(59), HealthBand::Fair);
        assert_eq!(gauge.band_of(40), HealthBand::Fair);
        assert_eq!(gauge.band_of(39).label(), "Needs Attention");
    }

    #[test]
    fn test_needle_rotation() {
        let gauge = HealthIndex::new(78, 100);
        assert_eq!(gauge.needle_rotation(0), -90.0);
        assert_eq!(gauge.needle_rotation(50), 0.0);
        assert_eq!(gauge.needle_rotation(100), 90.0);
        assert!((gauge.needle_rotation(78) - 50.4).abs() < 1e-9);
    }

    #[test]
    fn test_animation_ends_on_score() {
        let gauge = HealthIndex::new(78, 100);
        let frames = gauge.animation_frames();
        assert!(frames.len() <= ANIMATION_STEPS as usize + 1);
        assert_eq!(frames.last(), Some(&78));
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(gauge.step_interval_ms(), 25);
    }

    #[test]
    fn test_zero_max_does_not_divide() {
        let gauge = HealthIndex::new(0, 0);
        assert_eq!(gauge.percent_of(10), 0.0);
        assert_eq!(gauge.animation_frames(), vec![0]);
    }
}
