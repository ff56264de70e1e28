//! Camera/microphone acquisition for the video panel
//!
//! The stream is display-only: nothing read from it feeds the scores.

pub mod source;
pub mod stream;

pub use source::{
    LocalDeviceSource, MediaConstraints, MediaSource, MediaSourceFactory, MediaSourceKind,
    SyntheticMediaSource, UnavailableMediaSource,
};
pub use stream::{MediaStream, MediaTrack, TrackKind};
