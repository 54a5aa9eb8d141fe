use std::collections::HashMap;

use crate::error::CacheError;

use super::{CommandStore, SessionKey};

/// In-process store, used where touching the filesystem is unwanted
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    entries: HashMap<SessionKey, String>,
}

impl CommandStore for MemoryStore {
    fn get(&self, key: &SessionKey) -> Result<Option<String>, CacheError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &SessionKey, command: &str) -> Result<(), CacheError> {
        self.entries.insert(key.clone(), command.to_string());
        Ok(())
    }
}
