use super::constants::{scalar_to_mono, GAIN_DEFAULT, MONO_DEFAULT, PAN_DEFAULT};
use super::parameters::ParameterSource;

/// Parameter values for one block, read once before processing starts
///
/// The three fields come from three independent atomic loads. Mixing an old gain with a new pan
/// is acceptable because each value is applied on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSnapshot {
    pub gain: f32,
    pub pan: f32,
    pub mono: bool,
}

impl Default for ParameterSnapshot {
    fn default() -> Self {
        Self {
            gain: GAIN_DEFAULT,
            pan: PAN_DEFAULT,
            mono: MONO_DEFAULT,
        }
    }
}

impl ParameterSnapshot {
    pub fn new(gain: f32, pan: f32, mono: bool) -> Self {
        Self { gain, pan, mono }
    }

    /// Take a snapshot from any parameter source (called once per block on the audio thread)
    pub fn acquire(source: &impl ParameterSource) -> Self {
        Self {
            gain: source.gain(),
            pan: source.pan(),
            mono: scalar_to_mono(source.mono_raw()),
        }
    }
}
