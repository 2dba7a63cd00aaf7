/// A delayed, eased interpolation between two scroll offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub delay_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(
        from: f64,
        to: f64,
        start_ms: f64,
        delay_ms: f64,
        duration_ms: f64,
        easing: Easing,
    ) -> Self {
        Self {
            from,
            to,
            start_ms,
            delay_ms: delay_ms.max(0.0),
            duration_ms: duration_ms.max(0.0),
            easing,
        }
    }

    /// Whether `now_ms` is still inside the delay window.
    pub fn is_pending(&self, now_ms: f64) -> bool {
        now_ms < self.start_ms + self.delay_ms
    }

    pub fn is_done(&self, now_ms: f64) -> bool {
        now_ms >= self.start_ms + self.delay_ms + self.duration_ms
    }

    /// Normalized progress in `[0, 1]`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        let elapsed = now_ms - self.start_ms - self.delay_ms;
        if self.duration_ms <= 0.0 {
            return if elapsed >= 0.0 { 1.0 } else { 0.0 };
        }
        (elapsed / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now_ms: f64) -> f64 {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return self.to;
        }
        let eased = self.easing.sample(t);
        self.from + (self.to - self.from) * eased
    }
}

/// Easing curves for scroll transitions. The default is cubic in-out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    QuadInOut,
    #[default]
    CubicInOut,
    SinInOut,
}

impl Easing {
    pub fn sample(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u) / 2.0
                }
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::SinInOut => (1.0 - (core::f64::consts::PI * t).cos()) / 2.0,
        }
    }
}
