//! Current-song register operations.
//!
//! The track payload, playback progress, and play flag live under separate
//! keys so progress ticks do not rewrite the track record. Partial updates
//! run under the song gate and are no-ops while no track is set.

use std::sync::Arc;

use tracing::warn;

use crate::{
    dao::{
        kv_store::KvStore,
        models::{CURRENT_SONG_KEY, CurrentSongEntity, IS_PLAYING_KEY, SONG_PROGRESS_KEY},
    },
    dto::song::{CurrentSongResponse, SetSongRequest, UpdateSongRequest},
    error::ServiceError,
    state::{SharedState, current_song::CurrentSong},
};

/// Current register state. Reads degrade to the absent state when storage is
/// unreachable.
pub async fn get(state: &SharedState) -> CurrentSongResponse {
    let Some(store) = state.kv_store().await else {
        warn!("current-song read while storage unavailable; returning absent state");
        return CurrentSongResponse::from_state(&CurrentSong::default());
    };

    let song = match load(&store).await {
        Ok(song) => song,
        Err(err) => {
            warn!(error = %err, "failed to load current song; returning absent state");
            CurrentSong::default()
        }
    };
    CurrentSongResponse::from_state(&song)
}

/// Replace the register unconditionally with a new track.
pub async fn set(
    state: &SharedState,
    request: SetSongRequest,
) -> Result<CurrentSongResponse, ServiceError> {
    let store = state.require_kv_store().await?;
    let _gate = state.song_gate().lock().await;

    let mut song = CurrentSong::default();
    song.set(
        request.song.into(),
        request.progress_ms.unwrap_or(0),
        request.is_playing.unwrap_or(true),
    );

    persist(&store, &song).await?;
    Ok(CurrentSongResponse::from_state(&song))
}

/// Apply a partial update to progress and/or play state. A no-op while no
/// track is set.
pub async fn update(
    state: &SharedState,
    request: UpdateSongRequest,
) -> Result<CurrentSongResponse, ServiceError> {
    let store = state.require_kv_store().await?;
    let _gate = state.song_gate().lock().await;

    let mut song = load(&store).await?;
    if let Some(progress_ms) = request.progress_ms {
        song.update_progress(progress_ms);
    }
    if let Some(is_playing) = request.is_playing {
        song.update_playing(is_playing);
    }

    if song.track().is_some() {
        persist(&store, &song).await?;
    }
    Ok(CurrentSongResponse::from_state(&song))
}

/// Clear the register back to the absent state.
pub async fn reset(state: &SharedState) -> Result<CurrentSongResponse, ServiceError> {
    let store = state.require_kv_store().await?;
    let _gate = state.song_gate().lock().await;

    store.del(CURRENT_SONG_KEY).await?;
    store.del(SONG_PROGRESS_KEY).await?;
    store.del(IS_PLAYING_KEY).await?;

    Ok(CurrentSongResponse::from_state(&CurrentSong::default()))
}

async fn load(store: &Arc<dyn KvStore>) -> Result<CurrentSong, ServiceError> {
    let entity: CurrentSongEntity = super::record::decode_or_default(
        CURRENT_SONG_KEY,
        store.get(CURRENT_SONG_KEY).await?,
    );
    let progress_ms: u64 =
        super::record::decode_or_default(SONG_PROGRESS_KEY, store.get(SONG_PROGRESS_KEY).await?);
    let is_playing: bool =
        super::record::decode_or_default(IS_PLAYING_KEY, store.get(IS_PLAYING_KEY).await?);

    Ok(CurrentSong::from_parts(entity.song, progress_ms, is_playing))
}

async fn persist(store: &Arc<dyn KvStore>, song: &CurrentSong) -> Result<(), ServiceError> {
    let entity = CurrentSongEntity {
        song: song.track().cloned(),
    };

    store
        .set(
            CURRENT_SONG_KEY,
            super::record::encode(CURRENT_SONG_KEY, &entity)?,
        )
        .await?;
    store
        .set(
            SONG_PROGRESS_KEY,
            super::record::encode(SONG_PROGRESS_KEY, &song.progress_ms())?,
        )
        .await?;
    store
        .set(
            IS_PLAYING_KEY,
            super::record::encode(IS_PLAYING_KEY, &song.is_playing())?,
        )
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        config::AppConfig, dao::kv_store::memory::MemoryKvStore, dto::common::Track,
        state::AppState,
    };

    async fn test_state() -> SharedState {
        let state = AppState::new(AppConfig::default());
        state.install_kv_store(Arc::new(MemoryKvStore::new())).await;
        state
    }

    fn test_track(id: &str) -> Track {
        Track {
            id: id.into(),
            name: "song".into(),
            artists: vec![],
            album: None,
            album_art_url: None,
            duration_ms: None,
            uri: None,
        }
    }

    #[tokio::test]
    async fn set_update_reset_scenario() {
        let state = test_state().await;

        let response = set(
            &state,
            SetSongRequest {
                song: test_track("s1"),
                progress_ms: Some(5000),
                is_playing: Some(true),
            },
        )
        .await
        .unwrap();
        assert_eq!(response.status, "active");
        assert_eq!(response.current_song.progress_ms, 5000);

        let response = update(
            &state,
            UpdateSongRequest {
                progress_ms: Some(9000),
                is_playing: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(response.current_song.progress_ms, 9000);
        assert!(response.current_song.is_playing);
        assert_eq!(
            response.current_song.song.as_ref().map(|song| song.id.as_str()),
            Some("s1")
        );

        let response = reset(&state).await.unwrap();
        assert_eq!(response.status, "none");
        assert!(response.current_song.song.is_none());
        assert_eq!(response.current_song.progress_ms, 0);
        assert!(!response.current_song.is_playing);
    }

    #[tokio::test]
    async fn set_defaults_to_start_and_playing() {
        let state = test_state().await;

        let response = set(
            &state,
            SetSongRequest {
                song: test_track("s1"),
                progress_ms: None,
                is_playing: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(response.current_song.progress_ms, 0);
        assert!(response.current_song.is_playing);
    }

    #[tokio::test]
    async fn update_without_track_is_a_noop() {
        let state = test_state().await;

        let response = update(
            &state,
            UpdateSongRequest {
                progress_ms: Some(9000),
                is_playing: Some(true),
            },
        )
        .await
        .unwrap();

        assert_eq!(response.status, "none");
        assert_eq!(response.current_song.progress_ms, 0);

        // Nothing was written either; the register stays absent on read.
        let response = get(&state).await;
        assert_eq!(response.status, "none");
    }

    #[tokio::test]
    async fn read_survives_a_fresh_load_from_the_store() {
        let state = test_state().await;
        set(
            &state,
            SetSongRequest {
                song: test_track("s1"),
                progress_ms: Some(1234),
                is_playing: Some(false),
            },
        )
        .await
        .unwrap();

        let response = get(&state).await;
        assert_eq!(response.current_song.progress_ms, 1234);
        assert!(!response.current_song.is_playing);
        assert_eq!(
            response.current_song.song.map(|song| song.id),
            Some("s1".to_owned())
        );
    }
}
