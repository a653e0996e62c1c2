use nih_plug::prelude::*;
use thiserror::Error;

/// Channel set of one main port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelSet {
    Disabled,
    Mono,
    Stereo,
    Discrete(u32),
}

impl ChannelSet {
    pub fn from_channels(channels: Option<NonZeroU32>) -> Self {
        match channels.map(NonZeroU32::get) {
            None => Self::Disabled,
            Some(1) => Self::Mono,
            Some(2) => Self::Stereo,
            Some(n) => Self::Discrete(n),
        }
    }

    pub fn num_channels(self) -> u32 {
        match self {
            Self::Disabled => 0,
            Self::Mono => 1,
            Self::Stereo => 2,
            Self::Discrete(n) => n,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("output layout {0:?} is not supported, only mono or stereo")]
    UnsupportedOutput(ChannelSet),
    #[error("input layout {input:?} does not match output layout {output:?}")]
    MismatchedInput {
        input: ChannelSet,
        output: ChannelSet,
    },
}

/// Accept mono or stereo output with an identical input set
pub fn check_layout(input: ChannelSet, output: ChannelSet) -> Result<ChannelSet, LayoutError> {
    if !matches!(output, ChannelSet::Mono | ChannelSet::Stereo) {
        return Err(LayoutError::UnsupportedOutput(output));
    }

    if input != output {
        return Err(LayoutError::MismatchedInput { input, output });
    }

    Ok(output)
}

/// Validate the main ports of a layout the host selected
pub fn check_io_layout(layout: &AudioIOLayout) -> Result<ChannelSet, LayoutError> {
    check_layout(
        ChannelSet::from_channels(layout.main_input_channels),
        ChannelSet::from_channels(layout.main_output_channels),
    )
}
