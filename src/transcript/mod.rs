//! Last-command lookup for a session
//!
//! A fresh scan of the transcript always wins and refreshes the session's
//! cache entry; the cache is only read when the scan finds nothing.

mod parser;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::cache::{CommandStore, SessionKey};

pub(crate) use parser::find_last_command;

/// Scan the transcript for the latest command and remember it for the session
pub(crate) fn extract_last_command(
    transcript: Option<&Path>,
    store: &mut dyn CommandStore,
) -> Option<String> {
    let path = transcript.filter(|p| !p.as_os_str().is_empty())?;

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!("Cannot read transcript {}: {}", path.display(), err);
            return None;
        }
    };
    let command = find_last_command(&String::from_utf8_lossy(&bytes))?;

    let key = SessionKey::from_transcript(Some(path));
    if let Err(err) = store.put(&key, &command) {
        debug!("Failed to cache command: {}", err);
    }
    Some(command)
}

/// Last command remembered for the session, if any
pub(crate) fn get_cached_command(
    transcript: Option<&Path>,
    store: &dyn CommandStore,
) -> Option<String> {
    let key = SessionKey::from_transcript(transcript);
    match store.get(&key) {
        Ok(cached) => cached
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty()),
        Err(err) => {
            debug!("Failed to read cached command: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{FileStore, MemoryStore};

    #[test]
    fn missing_transcript_yields_nothing() {
        let mut store = MemoryStore::default();
        assert_eq!(extract_last_command(None, &mut store), None);
        assert_eq!(extract_last_command(Some(Path::new("")), &mut store), None);
        assert_eq!(
            extract_last_command(Some(Path::new("/definitely/not/here.jsonl")), &mut store),
            None
        );
    }

    #[test]
    fn extraction_updates_cache() {
        let dir = tempfile::tempdir().unwrap();
        let transcript = dir.path().join("session-abc.jsonl");
        fs::write(
            &transcript,
            "{\"role\":\"user\",\"message\":{\"content\":\"/spec:doc-update\"}}\n",
        )
        .unwrap();

        let mut store = MemoryStore::default();
        let cmd = extract_last_command(Some(&transcript), &mut store);
        assert_eq!(cmd.as_deref(), Some("/spec:doc-update"));
        assert_eq!(
            store
                .get(&SessionKey::Session("session-abc".to_string()))
                .unwrap()
                .as_deref(),
            Some("/spec:doc-update")
        );
    }

    #[test]
    fn fresh_result_overwrites_cache() {
        let dir = tempfile::tempdir().unwrap();
        let transcript = dir.path().join("s.jsonl");
        fs::write(&transcript, "/spec:execute now\n").unwrap();

        let mut store = FileStore::new(dir.path().join("cache"));
        store
            .put(&SessionKey::Session("s".to_string()), "/ideate old")
            .unwrap();

        assert_eq!(
            extract_last_command(Some(&transcript), &mut store).as_deref(),
            Some("/spec:execute now")
        );
        assert_eq!(
            get_cached_command(Some(&transcript), &store).as_deref(),
            Some("/spec:execute now")
        );
    }

    #[test]
    fn cache_round_trip_after_transcript_loses_command() {
        let dir = tempfile::tempdir().unwrap();
        let transcript = dir.path().join("session-1.jsonl");
        let mut store = FileStore::new(dir.path());

        fs::write(&transcript, "/ideate remember me\n").unwrap();
        let first = extract_last_command(Some(&transcript), &mut store);

        fs::write(&transcript, "{\"role\":\"assistant\"}\n").unwrap();
        assert_eq!(extract_last_command(Some(&transcript), &mut store), None);
        assert_eq!(get_cached_command(Some(&transcript), &store), first);
    }

    #[test]
    fn no_transcript_uses_fallback_entry() {
        let mut store = MemoryStore::default();
        assert_eq!(get_cached_command(None, &store), None);
        store.put(&SessionKey::Fallback, " /ideate ").unwrap();
        assert_eq!(get_cached_command(None, &store).as_deref(), Some("/ideate"));
    }

    #[test]
    fn non_utf8_transcript_is_read_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let transcript = dir.path().join("bin.jsonl");
        let mut bytes = vec![0xff, 0xfe, b'\n'];
        bytes.extend_from_slice(b"/spec:feedback ok\n");
        fs::write(&transcript, bytes).unwrap();

        let mut store = MemoryStore::default();
        assert_eq!(
            extract_last_command(Some(&transcript), &mut store).as_deref(),
            Some("/spec:feedback ok")
        );
    }
}
