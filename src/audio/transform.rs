use super::pan::PanGains;
use super::snapshot::ParameterSnapshot;

/// Anything that can transform one block of per-channel samples in place
///
/// Implementations run on the audio thread: no allocations, no locks, no I/O.
pub trait BlockProcessor {
    fn process_block(&mut self, block: &mut [&mut [f32]], params: &ParameterSnapshot);
}

/// The gain / pan / mono transform. Holds no state between blocks.
#[derive(Debug, Default, Clone, Copy)]
pub struct GainPanTransform;

impl BlockProcessor for GainPanTransform {
    fn process_block(&mut self, block: &mut [&mut [f32]], params: &ParameterSnapshot) {
        apply(block, params);
    }
}

/// Transform one block in place
///
/// 1. With `mono` on and at least two channels, every channel is replaced by the plain average
///    of all channels at that sample index.
/// 2. With two or more channels, channel 0 is scaled by `gain * left` and channel 1 by
///    `gain * right` using the equal-power pan gains. Channels from index 2 on are not scaled.
/// 3. With a single channel, only `gain` is applied.
///
/// The mono sum always happens before scaling.
pub fn apply(block: &mut [&mut [f32]], params: &ParameterSnapshot) {
    let num_samples = common_len(block);
    if num_samples == 0 {
        return;
    }

    if params.mono && block.len() >= 2 {
        mono_sum(block, num_samples);
    }

    // Computed once per block
    let pan = PanGains::equal_power(params.pan);
    let gain = params.gain;

    match block {
        [left, right, ..] => {
            for (left, right) in left[..num_samples]
                .iter_mut()
                .zip(right[..num_samples].iter_mut())
            {
                *left = *left * gain * pan.left;
                *right = *right * gain * pan.right;
            }
        }
        [channel] => {
            for sample in channel[..num_samples].iter_mut() {
                *sample *= gain;
            }
        }
        [] => {}
    }
}

/// Replace every channel with the average of all channels, sample by sample
fn mono_sum(block: &mut [&mut [f32]], num_samples: usize) {
    let num_channels = block.len() as f32;

    for sample_idx in 0..num_samples {
        let sum: f32 = block.iter().map(|channel| channel[sample_idx]).sum();
        let mono = sum / num_channels;

        for channel in block.iter_mut() {
            channel[sample_idx] = mono;
        }
    }
}

/// Sample count shared by every channel. Hosts always hand us equal lengths, anything else is
/// clipped to the shortest channel.
fn common_len(block: &[&mut [f32]]) -> usize {
    let num_samples = block.iter().map(|channel| channel.len()).min().unwrap_or(0);
    nih_plug::nih_debug_assert!(
        block.iter().all(|channel| channel.len() == num_samples),
        "channels in one block must share the same length"
    );

    num_samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_1_SQRT_2;

    const EPSILON: f32 = 1e-5;

    fn run(channels: &mut [Vec<f32>], params: ParameterSnapshot) {
        let mut block: Vec<&mut [f32]> = channels.iter_mut().map(|c| c.as_mut_slice()).collect();
        apply(&mut block, &params);
    }

    fn assert_close(actual: &[f32], expected: &[f32]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < EPSILON, "expected {:?}, got {:?}", expected, actual);
        }
    }

    #[test]
    fn test_single_channel_only_applies_gain() {
        let mut channels = vec![vec![1.0, -0.5]];
        // Pan has no effect on a single channel
        run(&mut channels, ParameterSnapshot::new(0.25, -1.0, false));
        assert_eq!(channels[0], vec![0.25, -0.125]);
    }

    #[test]
    fn test_single_channel_ignores_mono() {
        let mut channels = vec![vec![0.8, 0.4]];
        run(&mut channels, ParameterSnapshot::new(0.5, 0.0, true));
        assert_close(&channels[0], &[0.4, 0.2]);
    }

    #[test]
    fn test_center_pan_attenuates_both_sides() {
        let mut channels = vec![vec![1.0], vec![1.0]];
        run(&mut channels, ParameterSnapshot::new(1.0, 0.0, false));
        assert_close(&channels[0], &[FRAC_1_SQRT_2]);
        assert_close(&channels[1], &[FRAC_1_SQRT_2]);
    }

    #[test]
    fn test_full_left_pan() {
        let mut channels = vec![vec![1.0], vec![1.0]];
        run(&mut channels, ParameterSnapshot::new(1.0, -1.0, false));
        assert_eq!(channels[0], vec![1.0]);
        assert_eq!(channels[1], vec![0.0]);
    }

    #[test]
    fn test_full_right_pan() {
        let mut channels = vec![vec![1.0], vec![1.0]];
        run(&mut channels, ParameterSnapshot::new(1.0, 1.0, false));
        assert_close(&channels[0], &[0.0]);
        assert_close(&channels[1], &[1.0]);
    }

    #[test]
    fn test_gain_and_pan_combine() {
        let mut channels = vec![vec![0.5, -1.0], vec![0.25, 1.0]];
        run(&mut channels, ParameterSnapshot::new(0.5, 0.0, false));
        let g = 0.5 * FRAC_1_SQRT_2;
        assert_close(&channels[0], &[0.5 * g, -g]);
        assert_close(&channels[1], &[0.25 * g, g]);
    }

    #[test]
    fn test_mono_sum_happens_before_pan() {
        let mut channels = vec![vec![2.0], vec![0.0]];
        run(&mut channels, ParameterSnapshot::new(1.0, 0.0, true));
        // Summing after panning would give [1.41421], [0.0]
        assert_close(&channels[0], &[FRAC_1_SQRT_2]);
        assert_close(&channels[1], &[FRAC_1_SQRT_2]);
    }

    #[test]
    fn test_mono_sum_of_equal_channels_is_unchanged() {
        let mut stereo = vec![vec![0.3, -0.6], vec![0.3, -0.6]];
        let mut block: Vec<&mut [f32]> = stereo.iter_mut().map(|c| c.as_mut_slice()).collect();
        mono_sum(&mut block, 2);
        assert_eq!(stereo, vec![vec![0.3, -0.6], vec![0.3, -0.6]]);

        let mut quad = vec![vec![0.5]; 4];
        let mut block: Vec<&mut [f32]> = quad.iter_mut().map(|c| c.as_mut_slice()).collect();
        mono_sum(&mut block, 1);
        assert_eq!(quad, vec![vec![0.5]; 4]);
    }

    #[test]
    fn test_mono_sum_averages_every_channel() {
        let mut channels = vec![vec![3.0], vec![0.0], vec![0.0]];
        run(&mut channels, ParameterSnapshot::new(1.0, -1.0, true));
        // Average is 1.0, hard left keeps channel 0, silences channel 1, channel 2 is not scaled
        assert_close(&channels[0], &[1.0]);
        assert_close(&channels[1], &[0.0]);
        assert_close(&channels[2], &[1.0]);
    }

    #[test]
    fn test_extra_channels_are_bit_identical() {
        let extra = vec![0.123_456_79, -0.987_654_3, f32::MIN_POSITIVE];
        let mut channels = vec![vec![1.0; 3], vec![1.0; 3], extra.clone(), extra.clone()];
        run(&mut channels, ParameterSnapshot::new(0.3, 0.4, false));

        for channel in &channels[2..] {
            let bits: Vec<u32> = channel.iter().map(|s| s.to_bits()).collect();
            let expected: Vec<u32> = extra.iter().map(|s| s.to_bits()).collect();
            assert_eq!(bits, expected);
        }
    }

    #[test]
    fn test_second_call_compounds() {
        let mut channels = vec![vec![1.0], vec![1.0]];
        let params = ParameterSnapshot::new(0.5, 0.0, false);
        run(&mut channels, params);
        run(&mut channels, params);

        let once = 0.5 * FRAC_1_SQRT_2;
        assert_close(&channels[0], &[once * once]);
        assert_close(&channels[1], &[once * once]);
        assert!((channels[0][0] - once).abs() > 0.1);
    }

    #[test]
    fn test_empty_blocks_are_noops() {
        let mut no_channels: Vec<Vec<f32>> = Vec::new();
        run(&mut no_channels, ParameterSnapshot::default());

        let mut no_samples = vec![Vec::new(), Vec::new()];
        run(&mut no_samples, ParameterSnapshot::new(1.0, 0.0, true));
        assert!(no_samples.iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_block_processor_matches_apply() {
        let params = ParameterSnapshot::new(0.7, -0.3, true);
        let mut direct = vec![vec![0.1, 0.9], vec![-0.4, 0.2]];
        let mut via_trait = direct.clone();

        run(&mut direct, params);
        let mut block: Vec<&mut [f32]> = via_trait.iter_mut().map(|c| c.as_mut_slice()).collect();
        GainPanTransform.process_block(&mut block, &params);

        assert_eq!(direct, via_trait);
    }
}
