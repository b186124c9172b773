use std::fs;
use std::sync::Arc;

mod common;
use common::mock_session::MockSession;
use common::mock_transcoder::MockTranscoder;
use common::music_dir;
use tunefinder::config::MusicConfig;
use tunefinder::MusicHandler;

#[tokio::test]
async fn test_specific_song_is_streamed() {
    let dir = music_dir(&["ocean_wave.mp3", "moonlight_sonata.wav"]);
    let transcoder = Arc::new(MockTranscoder::new());
    let handler = MusicHandler::load(MusicConfig::with_dir(dir.path()), transcoder.clone())
        .await
        .expect("Failed to load handler");
    let session = MockSession::new();

    assert!(handler.handle_music_command(&session, "play moonlite sonata!").await);

    assert_eq!(session.streamed(), vec!["moonlight_sonata.wav"]);
    assert_eq!(session.notifications(), vec!["Now playing moonlight_sonata.wav"]);
    assert_eq!(
        session.now_playing.lock().unwrap().as_deref(),
        Some("moonlight_sonata.wav")
    );
    assert_eq!(
        transcoder.requested.lock().unwrap().clone(),
        vec![dir.path().join("moonlight_sonata.wav")]
    );
}

#[tokio::test]
async fn test_generic_request_plays_random_track() {
    let dir = music_dir(&["a.mp3", "b.mp3", "c.wav"]);
    let handler = MusicHandler::new(
        &MusicConfig::with_dir(dir.path()),
        Arc::new(MockTranscoder::new()),
    );
    let session = MockSession::new();

    assert!(handler.handle_music_command(&session, "播放音乐").await);

    let streamed = session.streamed();
    assert_eq!(streamed.len(), 1);
    assert!(handler.catalog().get(&streamed[0]).is_some());
}

#[tokio::test]
async fn test_non_music_command_is_left_alone() {
    let dir = music_dir(&["a.mp3"]);
    let handler = MusicHandler::new(
        &MusicConfig::with_dir(dir.path()),
        Arc::new(MockTranscoder::new()),
    );
    let session = MockSession::new();

    assert!(!handler.handle_music_command(&session, "what's the weather").await);
    assert!(session.notifications().is_empty());
    assert!(session.streamed().is_empty());
}

#[tokio::test]
async fn test_file_deleted_after_indexing_is_reported_not_raised() {
    let dir = music_dir(&["gone.mp3"]);
    let handler = MusicHandler::new(
        &MusicConfig::with_dir(dir.path()),
        Arc::new(MockTranscoder::new()),
    );
    fs::remove_file(dir.path().join("gone.mp3")).expect("Failed to remove file");
    let session = MockSession::new();

    // Still consumed: the command was a music command
    assert!(handler.handle_music_command(&session, "play gone").await);
    assert!(session.notifications().is_empty());
    assert!(session.streamed().is_empty());
}

#[tokio::test]
async fn test_generic_request_with_empty_catalog() {
    let dir = music_dir(&[]);
    let handler = MusicHandler::new(
        &MusicConfig::with_dir(dir.path()),
        Arc::new(MockTranscoder::new()),
    );
    let session = MockSession::new();

    assert!(handler.play_local_music(&session, None).await.is_none());
    assert!(session.streamed().is_empty());
}

#[tokio::test]
async fn test_transcoder_failure_is_contained() {
    let dir = music_dir(&["hey_jude.mp3"]);
    let transcoder = Arc::new(MockTranscoder::new());
    *transcoder.should_fail.lock().unwrap() = true;
    let handler = MusicHandler::new(&MusicConfig::with_dir(dir.path()), transcoder);
    let session = MockSession::new();

    let played = handler.play_local_music(&session, Some("hey_jude.mp3")).await;
    assert!(played.is_none());
    // Selection was announced before transcoding failed
    assert_eq!(session.notifications(), vec!["Now playing hey_jude.mp3"]);
    assert!(session.streamed().is_empty());
}

#[tokio::test]
async fn test_session_failure_is_contained() {
    let dir = music_dir(&["hey_jude.mp3"]);
    let handler = MusicHandler::new(
        &MusicConfig::with_dir(dir.path()),
        Arc::new(MockTranscoder::new()),
    );
    let session = MockSession::new();
    *session.should_fail.lock().unwrap() = true;

    assert!(handler.handle_music_command(&session, "play hey jude").await);
    assert!(session.streamed().is_empty());
}
