// Q1.15 fixed point, as stored by the synth lookup tables.
// res is 2^-15 = 3.0518e-5
// range is [-0.99997, +0.99997] after scaling by INT16_MAX

use crate::utils::consts::Q1X15_SCALE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Q1x15(i16);

impl Q1x15 {
    pub const ZERO: Q1x15 = Q1x15(0);
    pub const MAX: Q1x15 = Q1x15(Q1X15_SCALE);
    pub const MIN: Q1x15 = Q1x15(-Q1X15_SCALE);

    /// Quantize a value in [-1.0, +1.0], rounding to nearest and clamping
    /// to the symmetric range. NaN maps to zero.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        let scaled = (value * Q1X15_SCALE as f64).round();
        let clamped = scaled.clamp(-(Q1X15_SCALE as f64), Q1X15_SCALE as f64);
        Q1x15(clamped as i16)
    }

    /// Wrap a raw sample. `i16::MIN` has no positive counterpart and is
    /// clamped to `-INT16_MAX`.
    pub fn from_raw(raw: i16) -> Self {
        Q1x15(raw.max(-Q1X15_SCALE))
    }

    pub fn raw(self) -> i16 {
        self.0
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Q1X15_SCALE as f64
    }
}
