/// Smallest damping ratio a curve accepts; anything lower never settles
/// inside the transition's duration.
pub const MIN_DAMPING_RATIO: f32 = 0.05;

/// Exponent of the decay envelope at the end of the duration.
///
/// `e^-8` leaves well under a tenth of a percent of residual motion, so the
/// final snap to the target is not visible.
const SETTLE_EXPONENT: f32 = 8.0;

/// Spring easing fitted to a fixed duration and parameterised by damping
/// ratio.
///
/// A ratio of `1.0` is critically damped and approaches the target without
/// overshooting. Lower ratios overshoot and ring before settling. The curve is
/// evaluated on normalized time, so the spring always settles by `t = 1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringCurve {
    damping_ratio: f32,
}

impl SpringCurve {
    /// Critically damped curve, used for instant snaps.
    pub const CRITICAL: Self = Self { damping_ratio: 1.0 };

    /// Create a curve, clamping the ratio into `[MIN_DAMPING_RATIO, 1.0]`.
    pub fn new(damping_ratio: f32) -> Self {
        let damping_ratio = if damping_ratio.is_finite() {
            damping_ratio.clamp(MIN_DAMPING_RATIO, 1.0)
        } else {
            1.0
        };
        Self { damping_ratio }
    }

    pub fn damping_ratio(&self) -> f32 {
        self.damping_ratio
    }

    /// Evaluate the curve at normalized time `t`.
    ///
    /// Returns `0.0` at or before the start and exactly `1.0` at or after the
    /// end. In between the value may exceed `1.0` for under-damped curves.
    pub fn evaluate(&self, t: f32) -> f32 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        let zeta = self.damping_ratio;
        let omega = SETTLE_EXPONENT / zeta;

        if zeta >= 0.999 {
            // Critically damped: x(t) = 1 - e^(-wt) (1 + wt)
            let wt = omega * t;
            return 1.0 - (-wt).exp() * (1.0 + wt);
        }

        // Under-damped: x(t) = 1 - e^(-zwt) (cos(wd t) + zw/wd sin(wd t))
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let decay = (-zeta * omega * t).exp();
        let phase = omega_d * t;
        1.0 - decay * (phase.cos() + (zeta * omega / omega_d) * phase.sin())
    }
}

impl Default for SpringCurve {
    fn default() -> Self {
        Self::CRITICAL
    }
}
