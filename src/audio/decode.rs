//! Audio decoding using symphonia.

use crate::error::{Error, Result};
use std::fs::File;
use std::path::Path;
use symphonia::core::audio::{AudioBufferRef, SampleBuffer};
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::{debug, warn};

/// Decoded audio data.
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Audio samples as mono f32 in range [-1.0, 1.0].
    pub samples: Vec<f32>,
    /// Native sample rate in Hz.
    pub sample_rate: u32,
    /// Duration in seconds.
    pub duration_secs: f32,
}

/// Decode an audio file to mono f32 samples at its native sample rate.
///
/// Supports WAV, FLAC, MP3, OGG/Vorbis, and AAC/M4A.
pub fn decode_audio_file(path: &Path) -> Result<DecodedAudio> {
    let file = File::open(path).map_err(|e| Error::AudioOpen {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| Error::AudioOpen {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| Error::NoAudioTracks {
            path: path.to_path_buf(),
        })?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| Error::AudioDecode {
            path: path.to_path_buf(),
            source: "missing sample rate".into(),
        })?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| Error::AudioDecode {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let mut mixer = MonoMixer::default();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                return Err(Error::AudioDecode {
                    path: path.to_path_buf(),
                    source: Box::new(e),
                });
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => mixer.push(&decoded),
            // A corrupt frame is skipped; the rest of the stream is still usable.
            Err(symphonia::core::errors::Error::DecodeError(reason)) => {
                warn!("Skipping undecodable packet in {}: {reason}", path.display());
            }
            Err(e) => {
                return Err(Error::AudioDecode {
                    path: path.to_path_buf(),
                    source: Box::new(e),
                });
            }
        }
    }

    let samples = mixer.samples;

    #[allow(clippy::cast_precision_loss)]
    let duration_secs = samples.len() as f32 / sample_rate as f32;

    debug!(
        "Decoded {} samples at {} Hz from {}",
        samples.len(),
        sample_rate,
        path.display()
    );

    Ok(DecodedAudio {
        samples,
        sample_rate,
        duration_secs,
    })
}

/// Accumulates decoded packets as a mono signal.
#[derive(Default)]
struct MonoMixer {
    scratch: Option<SampleBuffer<f32>>,
    scratch_frames: usize,
    samples: Vec<f32>,
}

impl MonoMixer {
    fn push(&mut self, decoded: &AudioBufferRef<'_>) {
        let spec = *decoded.spec();
        let channels = spec.channels.count();
        if channels == 0 || decoded.frames() == 0 {
            return;
        }

        if self.scratch.is_none() || decoded.capacity() > self.scratch_frames {
            self.scratch_frames = decoded.capacity();
            self.scratch = Some(SampleBuffer::new(self.scratch_frames as u64, spec));
        }
        let Some(scratch) = self.scratch.as_mut() else {
            return;
        };

        scratch.copy_interleaved_ref(decoded.clone());
        downmix_into(scratch.samples(), channels, &mut self.samples);
    }
}

/// Average interleaved channels into `output`.
fn downmix_into(interleaved: &[f32], channels: usize, output: &mut Vec<f32>) {
    if channels == 1 {
        output.extend_from_slice(interleaved);
        return;
    }

    #[allow(clippy::cast_precision_loss)]
    let scale = 1.0 / channels as f32;
    output.extend(
        interleaved
            .chunks_exact(channels)
            .map(|frame| frame.iter().sum::<f32>() * scale),
    );
}
