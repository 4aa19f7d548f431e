//! Ambient-music panel state.
//!
//! Only the playlist table and the persisted selection live here; actual
//! playback is an embedded player in the presentation layer and failures
//! there (autoplay rejection etc.) never reach core.

use serde::Serialize;

use crate::error::StoreError;
use crate::store::{keys, KvStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SoundTrack {
    pub id: &'static str,
    pub title: &'static str,
    pub url: &'static str,
}

pub const PLAYLIST: [SoundTrack; 3] = [
    SoundTrack {
        id: "1",
        title: "Lofi",
        url: "https://www.youtube.com/embed/jfKfPfyJRdk",
    },
    SoundTrack {
        id: "2",
        title: "Synthwave",
        url: "https://www.youtube.com/embed/4xDzrJKXOOY",
    },
    SoundTrack {
        id: "3",
        title: "Classics",
        url: "https://www.youtube.com/embed/mIYzp5rcTvU",
    },
];

pub fn find(id: &str) -> Option<&'static SoundTrack> {
    PLAYLIST.iter().find(|t| t.id == id)
}

/// The persisted selection, defaulting to the first track when the stored
/// id is missing or no longer in the playlist.
pub fn selected(store: &dyn KvStore) -> &'static SoundTrack {
    store
        .get_lossy(keys::SOUND_TRACK)
        .as_deref()
        .and_then(find)
        .unwrap_or(&PLAYLIST[0])
}

/// Persist a new selection. Unknown ids are rejected.
pub fn select(store: &dyn KvStore, id: &str) -> Result<Option<&'static SoundTrack>, StoreError> {
    match find(id) {
        Some(track) => {
            store.set(keys::SOUND_TRACK, track.id)?;
            Ok(Some(track))
        }
        None => Ok(None),
    }
}
