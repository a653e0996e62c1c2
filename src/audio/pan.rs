use core::f32::consts::FRAC_PI_4;
use libm::{cosf, sinf};

/// Left/right gains derived from a pan position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanGains {
    pub left: f32,
    pub right: f32,
}

impl PanGains {
    /// Equal-power pan law: θ = (pan + 1) * π/4, left = cos θ, right = sin θ
    ///
    /// The center position gives cos(π/4) ≈ 0.7071 on both sides, so a centered stereo signal is
    /// attenuated by about 3 dB. That is the law, not an error.
    pub fn equal_power(pan: f32) -> Self {
        let theta = (pan + 1.0) * FRAC_PI_4;
        Self {
            left: cosf(theta),
            right: sinf(theta),
        }
    }
}
