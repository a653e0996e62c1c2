/// Parameter identifiers, ranges and defaults shared by the host shell and the core
/// Kept in one place so the nih_plug parameter struct and the standalone store agree

/// Gain parameter (linear, 0.0 = silence, 1.0 = unity)
pub const GAIN_ID: &str = "GAIN";
pub const GAIN_MIN: f32 = 0.0;
pub const GAIN_MAX: f32 = 1.0;
pub const GAIN_DEFAULT: f32 = 0.5;

/// Pan parameter (-1.0 = full left, 1.0 = full right)
pub const PAN_ID: &str = "PAN";
pub const PAN_MIN: f32 = -1.0;
pub const PAN_MAX: f32 = 1.0;
pub const PAN_DEFAULT: f32 = 0.0;

/// Mono switch, stored as a scalar and thresholded on read
pub const MONO_ID: &str = "MONO";
pub const MONO_MIN: f32 = 0.0;
pub const MONO_MAX: f32 = 1.0;
pub const MONO_DEFAULT: bool = false;

/// A stored MONO value strictly above this reads as "on"
pub const MONO_THRESHOLD: f32 = 0.5;

// === HELPER FUNCTIONS ===

/// Convert a mono switch state to the scalar stored in a parameter cell
pub fn mono_to_scalar(mono: bool) -> f32 {
    if mono {
        MONO_MAX
    } else {
        MONO_MIN
    }
}

/// Threshold a stored mono scalar
pub fn scalar_to_mono(value: f32) -> bool {
    value > MONO_THRESHOLD
}
