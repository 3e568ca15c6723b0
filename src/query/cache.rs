use crate::models::NotesPage;
use std::collections::HashMap;
use std::fmt;

/// Cache/request key for the notes listing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NotesKey {
    pub search: String,
    pub page: u32,
}

impl NotesKey {
    pub const NAMESPACE: &'static str = "notes";

    pub fn new(search: impl Into<String>, page: u32) -> Self {
        Self {
            search: search.into(),
            page,
        }
    }
}

impl fmt::Display for NotesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {:?}, {}]", Self::NAMESPACE, self.search, self.page)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EntryStatus {
    /// A request is in flight.
    Pending,
    Fresh,
    /// Data (if any) may still be shown but the next read must re-fetch.
    Invalidated,
    Failed,
}

#[derive(Clone, Debug)]
pub(crate) struct CacheEntry {
    pub data: Option<NotesPage>,
    pub fetched_at_ms: i64,
    pub status: EntryStatus,
    /// Epoch of the request that last touched this entry.
    pub epoch: u64,
}

/// Keyed store of listing results, mutated only by fetch completions and
/// explicit invalidation.
#[derive(Clone, Debug, Default)]
pub(crate) struct NotesCache {
    entries: HashMap<NotesKey, CacheEntry>,
}

impl NotesCache {
    pub fn get(&self, key: &NotesKey) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    pub fn data(&self, key: &NotesKey) -> Option<&NotesPage> {
        self.entries.get(key).and_then(|e| e.data.as_ref())
    }

    pub fn is_fresh(&self, key: &NotesKey) -> bool {
        matches!(self.get(key), Some(e) if e.status == EntryStatus::Fresh)
    }

    pub fn is_pending(&self, key: &NotesKey) -> bool {
        matches!(self.get(key), Some(e) if e.status == EntryStatus::Pending)
    }

    pub fn mark_pending(&mut self, key: &NotesKey, epoch: u64) {
        let entry = self.entries.entry(key.clone()).or_insert(CacheEntry {
            data: None,
            fetched_at_ms: 0,
            status: EntryStatus::Pending,
            epoch,
        });
        entry.status = EntryStatus::Pending;
        entry.epoch = epoch;
    }

    /// Store a result. Ignored when a newer request for the same key has been
    /// issued since, so an older response cannot overwrite newer data.
    pub fn fulfill(&mut self, key: &NotesKey, epoch: u64, data: NotesPage, now_ms: i64) -> bool {
        if let Some(entry) = self.entries.get(key) {
            if entry.epoch > epoch {
                return false;
            }
        }

        self.entries.insert(
            key.clone(),
            CacheEntry {
                data: Some(data),
                fetched_at_ms: now_ms,
                status: EntryStatus::Fresh,
                epoch,
            },
        );
        true
    }

    /// Keeps previously fetched data so a failed refresh still has something to show.
    pub fn fail(&mut self, key: &NotesKey, epoch: u64) {
        if let Some(entry) = self.entries.get_mut(key) {
            if entry.epoch <= epoch {
                entry.status = EntryStatus::Failed;
            }
        }
    }

    /// Responses to requests issued before `epoch` are rejected afterwards.
    pub fn invalidate(&mut self, key: &NotesKey, epoch: u64) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.status = EntryStatus::Invalidated;
                entry.epoch = entry.epoch.max(epoch);
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::page_of;

    #[test]
    fn test_key_display_includes_namespace() {
        assert_eq!(NotesKey::new("milk", 2).to_string(), r#"[notes, "milk", 2]"#);
    }

    #[test]
    fn test_fulfill_then_invalidate_keeps_data() {
        let mut cache = NotesCache::default();
        let key = NotesKey::new("", 1);
        cache.mark_pending(&key, 1);
        assert!(cache.is_pending(&key));

        assert!(cache.fulfill(&key, 1, page_of(5, 3), 1_000));
        assert!(cache.is_fresh(&key));
        assert_eq!(cache.get(&key).map(|e| e.fetched_at_ms), Some(1_000));

        assert!(cache.invalidate(&key, 2));
        assert!(!cache.is_fresh(&key));
        assert_eq!(cache.data(&key).map(|p| p.notes.len()), Some(5));
        assert!(!cache.fulfill(&key, 1, page_of(1, 1), 2_000));
    }

    #[test]
    fn test_older_response_does_not_overwrite_newer_request() {
        let mut cache = NotesCache::default();
        let key = NotesKey::new("", 1);
        cache.mark_pending(&key, 1);
        cache.mark_pending(&key, 2);

        assert!(cache.fulfill(&key, 2, page_of(2, 1), 10));
        assert!(!cache.fulfill(&key, 1, page_of(7, 1), 20));
        assert_eq!(cache.data(&key).map(|p| p.notes.len()), Some(2));
    }

    #[test]
    fn test_invalidate_unknown_key_is_noop() {
        let mut cache = NotesCache::default();
        assert!(!cache.invalidate(&NotesKey::new("x", 1), 1));
        assert_eq!(cache.len(), 0);
    }
}
