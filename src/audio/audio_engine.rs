use nih_plug::prelude::*;

use super::parameters::ParameterSource;
use super::snapshot::ParameterSnapshot;
use super::transform::{BlockProcessor, GainPanTransform};

/// Glue between the host callback and the block transform
/// Takes one parameter snapshot per block and hands the buffer to the processor once
pub struct AudioEngine<P: BlockProcessor = GainPanTransform> {
    processor: P,
}

impl Default for AudioEngine {
    fn default() -> Self {
        Self::new(GainPanTransform)
    }
}

impl<P: BlockProcessor> AudioEngine<P> {
    pub fn new(processor: P) -> Self {
        Self { processor }
    }

    /// Process one host buffer. Called from the audio thread, must not allocate.
    pub fn process(&mut self, buffer: &mut Buffer, params: &impl ParameterSource) {
        self.process_channels(buffer.as_slice(), params);
    }

    /// Same as [`Self::process`] for callers that already own per-channel slices
    pub fn process_channels(&mut self, block: &mut [&mut [f32]], params: &impl ParameterSource) {
        let snapshot = ParameterSnapshot::acquire(params);
        self.processor.process_block(block, &snapshot);
    }
}
