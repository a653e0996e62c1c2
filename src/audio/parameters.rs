use atomic_float::AtomicF32;
use std::sync::atomic::Ordering;
use thiserror::Error;

use super::constants::*;

/// The three controls the plugin exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterId {
    Gain,
    Pan,
    Mono,
}

impl ParameterId {
    pub const ALL: [ParameterId; 3] = [Self::Gain, Self::Pan, Self::Mono];

    /// Stable identifier used for lookups by name
    pub fn name(self) -> &'static str {
        match self {
            Self::Gain => GAIN_ID,
            Self::Pan => PAN_ID,
            Self::Mono => MONO_ID,
        }
    }

    /// Human readable label
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Gain => "Gain",
            Self::Pan => "Pan",
            Self::Mono => "Mono",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }

    /// Inclusive (min, max) of the stored scalar
    pub fn range(self) -> (f32, f32) {
        match self {
            Self::Gain => (GAIN_MIN, GAIN_MAX),
            Self::Pan => (PAN_MIN, PAN_MAX),
            Self::Mono => (MONO_MIN, MONO_MAX),
        }
    }

    pub fn default_value(self) -> f32 {
        match self {
            Self::Gain => GAIN_DEFAULT,
            Self::Pan => PAN_DEFAULT,
            Self::Mono => mono_to_scalar(MONO_DEFAULT),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),
    #[error("invalid value {value} for parameter {id:?}")]
    InvalidValue { id: ParameterId, value: f32 },
}

/// Read side of a parameter store, as seen by the audio thread
///
/// Every method must be a single atomic load. Implementations make no promise that the three
/// values belong to the same update.
pub trait ParameterSource {
    fn gain(&self) -> f32;
    fn pan(&self) -> f32;
    /// The raw stored mono scalar, thresholded by the snapshot
    fn mono_raw(&self) -> f32;
}

/// Get/set by name, for whatever host or control surface owns the parameters
pub trait ParameterHost {
    fn get_by_name(&self, name: &str) -> Result<f32, ParameterError>;

    /// Returns the value that was actually stored after clamping
    fn set_by_name(&self, name: &str, value: f32) -> Result<f32, ParameterError>;
}

/// Lock-free parameter storage with one atomic cell per parameter
///
/// Written from the control thread, read from the audio thread. Each cell is independent; there
/// is no cross-parameter transaction.
pub struct ParameterStore {
    gain: AtomicF32,
    pan: AtomicF32,
    mono: AtomicF32,
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self {
            gain: AtomicF32::new(ParameterId::Gain.default_value()),
            pan: AtomicF32::new(ParameterId::Pan.default_value()),
            mono: AtomicF32::new(ParameterId::Mono.default_value()),
        }
    }
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn cell(&self, id: ParameterId) -> &AtomicF32 {
        match id {
            ParameterId::Gain => &self.gain,
            ParameterId::Pan => &self.pan,
            ParameterId::Mono => &self.mono,
        }
    }

    pub fn get(&self, id: ParameterId) -> f32 {
        self.cell(id).load(Ordering::Relaxed)
    }

    /// Clamp into the parameter's range and store. Non-finite values are rejected and leave the
    /// current value untouched.
    pub fn set(&self, id: ParameterId, value: f32) -> Result<f32, ParameterError> {
        if !value.is_finite() {
            return Err(ParameterError::InvalidValue { id, value });
        }

        let (min, max) = id.range();
        let clamped = value.clamp(min, max);
        self.cell(id).store(clamped, Ordering::Relaxed);
        Ok(clamped)
    }

    pub fn set_mono(&self, mono: bool) {
        self.mono.store(mono_to_scalar(mono), Ordering::Relaxed);
    }

    pub fn mono(&self) -> bool {
        scalar_to_mono(self.mono.load(Ordering::Relaxed))
    }
}

impl ParameterSource for ParameterStore {
    fn gain(&self) -> f32 {
        self.gain.load(Ordering::Relaxed)
    }

    fn pan(&self) -> f32 {
        self.pan.load(Ordering::Relaxed)
    }

    fn mono_raw(&self) -> f32 {
        self.mono.load(Ordering::Relaxed)
    }
}

impl ParameterHost for ParameterStore {
    fn get_by_name(&self, name: &str) -> Result<f32, ParameterError> {
        ParameterId::from_name(name)
            .map(|id| self.get(id))
            .ok_or_else(|| ParameterError::UnknownParameter(name.to_owned()))
    }

    fn set_by_name(&self, name: &str, value: f32) -> Result<f32, ParameterError> {
        let id = ParameterId::from_name(name)
            .ok_or_else(|| ParameterError::UnknownParameter(name.to_owned()))?;
        self.set(id, value)
    }
}
