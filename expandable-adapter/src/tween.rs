/// Timing of a single row animation, sampled by the adapter each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timing {
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Timing {
    pub fn new(start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn elapsed(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.start_ms).min(self.duration_ms)
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Eased progress in `0.0..=1.0`.
    pub fn progress(&self, now_ms: u64) -> f32 {
        let t = (self.elapsed(now_ms) as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        self.easing.sample(t)
    }

    /// Starts the opposite animation so it picks up where this one visually stands.
    ///
    /// An insert that is 30% through turns into a delete that is 70% through.
    pub fn reversed(&self, now_ms: u64) -> Self {
        let remaining = self.duration_ms - self.elapsed(now_ms);
        Self::new(
            now_ms.saturating_sub(remaining),
            self.duration_ms,
            self.easing,
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    #[default]
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}
