//! Playback collaborators
//!
//! The conversation session and the audio transcoder live outside this
//! crate; the music handler only talks to them through these traits.

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

/// Encoded audio ready to stream to the client
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncodedAudio {
    /// Encoded frames in playback order
    pub frames: Vec<Vec<u8>>,
    /// Total duration in seconds
    pub duration: f64,
}

/// Connection to the client that issued the command
#[async_trait]
pub trait MusicSession: Send + Sync {
    /// Tell the client which track was chosen
    async fn notify_selection(&self, text: &str) -> Result<()>;

    /// Record the track as the session's current output
    fn mark_playing(&self, display_name: &str);

    /// Stream encoded audio to the client
    async fn send_audio(&self, audio: EncodedAudio, display_name: &str) -> Result<()>;
}

/// Turns a file on disk into streamable frames
#[async_trait]
pub trait AudioTranscoder: Send + Sync {
    async fn transcode(&self, path: &Path) -> Result<EncodedAudio>;

    /// Get the transcoder name
    fn name(&self) -> &str;
}
