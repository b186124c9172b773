//! Music Handler
//!
//! Owns the catalog for one music configuration and turns resolver
//! decisions into playback on a session.

use crate::config::MusicConfig;
use crate::error::{MusicError, MusicResult};
use crate::library::{Catalog, LocalLibrary};
use crate::players::{AudioTranscoder, MusicSession};
use crate::processor::{MatchDecision, Resolver};
use std::sync::Arc;
use tracing::{debug, error, info};

pub struct MusicHandler {
    library: LocalLibrary,
    catalog: Catalog,
    resolver: Resolver,
    transcoder: Arc<dyn AudioTranscoder>,
}

impl MusicHandler {
    /// Build the handler, loading the catalog once
    pub fn new(config: &MusicConfig, transcoder: Arc<dyn AudioTranscoder>) -> Self {
        let library = LocalLibrary::new(config);
        let catalog = library.load();
        info!(
            "🎶 Music handler ready: {} tracks, transcoder '{}'",
            catalog.len(),
            transcoder.name()
        );
        Self {
            library,
            catalog,
            resolver: Resolver::new(config.music_commands.clone()),
            transcoder,
        }
    }

    /// Build the handler from async code, loading the catalog on the
    /// blocking pool
    pub async fn load(
        config: MusicConfig,
        transcoder: Arc<dyn AudioTranscoder>,
    ) -> MusicResult<Self> {
        tokio::task::spawn_blocking(move || Self::new(&config, transcoder))
            .await
            .map_err(|e| MusicError::Catalog(format!("catalog load task failed: {}", e)))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Rebuild the catalog from disk, rewriting the index
    pub fn rescan(&mut self) {
        self.catalog = self.library.rescan();
    }

    pub fn resolve(&self, text: &str) -> MatchDecision {
        self.resolver.resolve(text, &self.catalog)
    }

    /// Handle a possible music command. Returns true when the command was
    /// consumed, false when other intent handlers should try it.
    pub async fn handle_music_command(&self, session: &dyn MusicSession, text: &str) -> bool {
        match self.resolve(text) {
            MatchDecision::Specific { entry, score } => {
                info!("🎯 Best matching song: {} ({})", entry, score);
                self.play_local_music(session, Some(entry.as_str())).await;
                true
            }
            MatchDecision::Generic => {
                self.play_local_music(session, None).await;
                true
            }
            MatchDecision::NoMatch => false,
        }
    }

    /// Play `specific_file`, or a random track when None. Returns the track
    /// that was streamed; failures are logged and yield None.
    pub async fn play_local_music(
        &self,
        session: &dyn MusicSession,
        specific_file: Option<&str>,
    ) -> Option<String> {
        match self.try_play(session, specific_file).await {
            Ok(name) => Some(name),
            Err(e) => {
                error!("❌ Failed to play music: {}", e);
                None
            }
        }
    }

    async fn try_play(
        &self,
        session: &dyn MusicSession,
        specific_file: Option<&str>,
    ) -> MusicResult<String> {
        let music_dir = self.catalog.base_dir();
        if !music_dir.is_dir() {
            return Err(MusicError::Config(format!(
                "music directory not found: {}",
                music_dir.display()
            )));
        }

        let selected = match specific_file {
            Some(file) => file.to_string(),
            None => self
                .catalog
                .random_entry(&mut rand::thread_rng())
                .map(|e| e.path.clone())
                .ok_or_else(|| MusicError::Playback("no music files in catalog".to_string()))?,
        };

        let music_path = self.catalog.resolve_path(&selected);
        if !music_path.is_file() {
            return Err(MusicError::Playback(format!(
                "music file not found: {}",
                music_path.display()
            )));
        }

        session
            .notify_selection(&format!("Now playing {}", selected))
            .await
            .map_err(|e| MusicError::Playback(e.to_string()))?;
        session.mark_playing(&selected);

        let audio = self
            .transcoder
            .transcode(&music_path)
            .await
            .map_err(|e| MusicError::Transcode(e.to_string()))?;
        debug!(
            "Streaming {} frames ({:.1}s) for {}",
            audio.frames.len(),
            audio.duration,
            selected
        );

        session
            .send_audio(audio, &selected)
            .await
            .map_err(|e| MusicError::Playback(e.to_string()))?;

        Ok(selected)
    }
}
