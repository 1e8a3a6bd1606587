//! Audio decoding and loudness analysis.

mod decode;
mod loudness;

pub use decode::{DecodedAudio, decode_audio_file};
pub use loudness::rms_frames;
