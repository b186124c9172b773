//! Mock Transcoder for Testing
//!
//! Produces one frame per kilobyte of input without decoding anything.

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tunefinder::players::{AudioTranscoder, EncodedAudio};

#[derive(Debug, Default)]
pub struct MockTranscoder {
    /// Files that were transcoded
    pub requested: Arc<Mutex<Vec<PathBuf>>>,
    /// Simulate a codec failure
    pub should_fail: Arc<Mutex<bool>>,
}

impl MockTranscoder {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AudioTranscoder for MockTranscoder {
    async fn transcode(&self, path: &Path) -> Result<EncodedAudio> {
        if *self.should_fail.lock().unwrap() {
            return Err(anyhow::anyhow!("Mock transcode failure"));
        }
        self.requested.lock().unwrap().push(path.to_path_buf());
        let len = std::fs::metadata(path)?.len() as usize;
        let frames = vec![vec![0u8; 16]; len / 1024 + 1];
        let duration = frames.len() as f64 * 0.06;
        Ok(EncodedAudio { frames, duration })
    }

    fn name(&self) -> &str {
        "mock"
    }
}
