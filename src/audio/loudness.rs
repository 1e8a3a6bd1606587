//! Frame-wise RMS loudness.

/// Compute RMS loudness for centered, overlapping frames.
///
/// Frame `t` is centered on sample `t * hop_length`; samples outside the
/// signal count as silence. This yields `1 + len / hop_length` frames for an
/// even `frame_length`. Empty input produces no frames.
pub fn rms_frames(samples: &[f32], frame_length: usize, hop_length: usize) -> Vec<f32> {
    if samples.is_empty() || frame_length == 0 || hop_length == 0 {
        return Vec::new();
    }

    let half = frame_length / 2;
    let padded_len = samples.len() + 2 * half;
    if padded_len < frame_length {
        return Vec::new();
    }
    let frame_count = 1 + (padded_len - frame_length) / hop_length;

    #[allow(clippy::cast_precision_loss)]
    let norm = frame_length as f64;

    (0..frame_count)
        .map(|t| {
            // Window bounds in padded coordinates, mapped back onto the signal.
            let start = (t * hop_length).saturating_sub(half);
            let end = (t * hop_length + frame_length - half).min(samples.len());
            let energy: f64 = samples
                .get(start..end)
                .unwrap_or_default()
                .iter()
                .map(|&s| f64::from(s) * f64::from(s))
                .sum();

            #[allow(clippy::cast_possible_truncation)]
            let rms = (energy / norm).sqrt() as f32;
            rms
        })
        .collect()
}
