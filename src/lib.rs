mod audio;

use audio::audio_engine::AudioEngine;
use audio::constants::*;
use audio::layout::check_io_layout;
use nih_plug::prelude::*;
use std::sync::Arc;

pub use audio::layout::{ChannelSet, LayoutError};
pub use audio::parameters::{
    ParameterError, ParameterHost, ParameterId, ParameterSource, ParameterStore,
};
pub use audio::snapshot::ParameterSnapshot;
pub use audio::transform::{BlockProcessor, GainPanTransform};

pub struct GainPan {
    params: Arc<GainPanParams>,
    audio_engine: AudioEngine,
}

#[derive(Params)]
pub struct GainPanParams {
    /// The IDs match [`ParameterId::name`] so hosts and the standalone store agree on names.
    /// Values are read once per block, so none of these use a smoother.
    #[id = "GAIN"]
    pub gain: FloatParam,

    /// -1.0 is hard left, 1.0 is hard right, equal-power law in between
    #[id = "PAN"]
    pub pan: FloatParam,

    #[id = "MONO"]
    pub mono: BoolParam,
}

impl Default for GainPan {
    fn default() -> Self {
        Self {
            params: Arc::new(GainPanParams::default()),
            audio_engine: AudioEngine::default(),
        }
    }
}

impl Default for GainPanParams {
    fn default() -> Self {
        Self {
            // Plain linear gain, 1.0 is unity
            gain: FloatParam::new(
                ParameterId::Gain.display_name(),
                GAIN_DEFAULT,
                FloatRange::Linear {
                    min: GAIN_MIN,
                    max: GAIN_MAX,
                },
            )
            .with_value_to_string(formatters::v2s_f32_rounded(2)),

            pan: FloatParam::new(
                ParameterId::Pan.display_name(),
                PAN_DEFAULT,
                FloatRange::Linear {
                    min: PAN_MIN,
                    max: PAN_MAX,
                },
            )
            .with_value_to_string(formatters::v2s_f32_panning())
            .with_string_to_value(formatters::s2v_f32_panning()),

            mono: BoolParam::new(ParameterId::Mono.display_name(), MONO_DEFAULT),
        }
    }
}

impl ParameterSource for GainPanParams {
    fn gain(&self) -> f32 {
        self.gain.value()
    }

    fn pan(&self) -> f32 {
        self.pan.value()
    }

    fn mono_raw(&self) -> f32 {
        // 0.0 or 1.0, thresholded by the snapshot like any other stored scalar
        self.mono.modulated_normalized_value()
    }
}

impl Plugin for GainPan {
    const NAME: &'static str = "Gain Pan";
    const VENDOR: &'static str = "Cmdv";
    const URL: &'static str = env!("CARGO_PKG_HOMEPAGE");
    const EMAIL: &'static str = "info@cmdv.me";

    const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    // The first layout is the default. Anything else the host asks for is rejected before a
    // buffer ever reaches `process()`.
    const AUDIO_IO_LAYOUTS: &'static [AudioIOLayout] = &[
        AudioIOLayout {
            main_input_channels: NonZeroU32::new(2),
            main_output_channels: NonZeroU32::new(2),
            ..AudioIOLayout::const_default()
        },
        AudioIOLayout {
            main_input_channels: NonZeroU32::new(1),
            main_output_channels: NonZeroU32::new(1),
            ..AudioIOLayout::const_default()
        },
    ];

    const MIDI_INPUT: MidiConfig = MidiConfig::None;
    const MIDI_OUTPUT: MidiConfig = MidiConfig::None;

    // Parameters are sampled once per block
    const SAMPLE_ACCURATE_AUTOMATION: bool = false;

    type SysExMessage = ();
    type BackgroundTask = ();

    fn params(&self) -> Arc<dyn Params> {
        self.params.clone()
    }

    fn initialize(
        &mut self,
        audio_io_layout: &AudioIOLayout,
        buffer_config: &BufferConfig,
        _context: &mut impl InitContext<Self>,
    ) -> bool {
        match check_io_layout(audio_io_layout) {
            Ok(channels) => {
                nih_plug::nih_log!(
                    "Plugin initialize called, layout: {:?} ({} channels), sample rate: {}, buffer_size: {}",
                    channels,
                    channels.num_channels(),
                    buffer_config.sample_rate,
                    buffer_config.max_buffer_size
                );
                true
            }
            Err(err) => {
                nih_plug::nih_log!("Rejecting audio layout: {}", err);
                false
            }
        }
    }

    fn process(
        &mut self,
        buffer: &mut Buffer,
        _aux: &mut AuxiliaryBuffers,
        _context: &mut impl ProcessContext<Self>,
    ) -> ProcessStatus {
        self.audio_engine.process(buffer, self.params.as_ref());
        ProcessStatus::Normal
    }
}

impl ClapPlugin for GainPan {
    const CLAP_ID: &'static str = "me.cmdv.gain-pan";
    const CLAP_DESCRIPTION: Option<&'static str> = Some("Gain, equal-power pan and mono sum");
    const CLAP_MANUAL_URL: Option<&'static str> = Some(Self::URL);
    const CLAP_SUPPORT_URL: Option<&'static str> = None;

    const CLAP_FEATURES: &'static [ClapFeature] = &[
        ClapFeature::AudioEffect,
        ClapFeature::Stereo,
        ClapFeature::Mono,
        ClapFeature::Utility,
    ];
}

impl Vst3Plugin for GainPan {
    const VST3_CLASS_ID: [u8; 16] = *b"GainPanMonoSum01";

    const VST3_SUBCATEGORIES: &'static [Vst3SubCategory] =
        &[Vst3SubCategory::Fx, Vst3SubCategory::Tools];
}

nih_export_clap!(GainPan);
nih_export_vst3!(GainPan);
