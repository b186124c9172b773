//! Mock Session for Testing
//!
//! Records every notification and audio stream for verification.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tunefinder::players::{EncodedAudio, MusicSession};

/// Mock session that records what the handler sent
#[derive(Debug, Default)]
pub struct MockSession {
    /// Status messages sent to the client
    pub notifications: Arc<Mutex<Vec<String>>>,
    /// Track marked as currently playing
    pub now_playing: Arc<Mutex<Option<String>>>,
    /// (display name, frame count) per stream
    pub streams: Arc<Mutex<Vec<(String, usize)>>>,
    /// Simulate a dropped connection on send
    pub should_fail: Arc<Mutex<bool>>,
}

impl MockSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn streamed(&self) -> Vec<String> {
        self.streams
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.notifications.lock().unwrap().clone()
    }
}

#[async_trait]
impl MusicSession for MockSession {
    async fn notify_selection(&self, text: &str) -> Result<()> {
        self.notifications.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn mark_playing(&self, display_name: &str) {
        *self.now_playing.lock().unwrap() = Some(display_name.to_string());
    }

    async fn send_audio(&self, audio: EncodedAudio, display_name: &str) -> Result<()> {
        if *self.should_fail.lock().unwrap() {
            return Err(anyhow::anyhow!("Mock session closed"));
        }
        self.streams
            .lock()
            .unwrap()
            .push((display_name.to_string(), audio.frames.len()));
        Ok(())
    }
}
