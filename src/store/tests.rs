//! Store Module Tests
//!
//! Validates identifier determinism, insert-if-absent dedup and the
//! concurrency behavior of the coarse-locked map.

#[cfg(test)]
mod tests {
    use crate::store::{StoreError, TrackId, TrackMeta, TrackStore};
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn make_meta(src_url: &str) -> TrackMeta {
        TrackMeta {
            date: Utc.with_ymd_and_hms(2018, 8, 25, 0, 0, 0).unwrap(),
            pilot: "Aladin Special".to_string(),
            glider: "Magical Carpet".to_string(),
            glider_id: "MGI2".to_string(),
            track_length: 1200.0,
            track_src_url: src_url.to_string(),
        }
    }

    // ============================================================
    // IDENTIFIER DERIVATION
    // ============================================================

    #[test]
    fn test_track_id_is_deterministic() {
        let a = TrackId::from_url("http://example.com/test.igc");
        let b = TrackId::from_url("http://example.com/test.igc");
        assert_eq!(a, b, "the same url should always yield the same id");
    }

    #[test]
    fn test_track_id_differs_for_different_urls() {
        let a = TrackId::from_url("http://example.com/one.igc");
        let b = TrackId::from_url("http://example.com/two.igc");
        assert_ne!(a, b);
    }

    #[test]
    fn test_track_id_serializes_as_bare_number() {
        let id = TrackId(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }

    // ============================================================
    // APPEND / GET
    // ============================================================

    #[test]
    fn test_append_and_get_roundtrip() {
        let store = TrackStore::new();
        let meta = make_meta("http://example.com/aladin.igc");

        let id = store.append(meta.clone()).unwrap();
        assert_eq!(id, TrackId::from_url("http://example.com/aladin.igc"));

        let retrieved = store.get(id);
        assert_eq!(retrieved, Some(meta));
    }

    #[test]
    fn test_get_nonexistent_id() {
        let store = TrackStore::new();
        assert_eq!(store.get(TrackId(12345)), None);
    }

    #[test]
    fn test_duplicate_append_is_rejected() {
        let store = TrackStore::new();
        let meta = make_meta("http://example.com/boeng.igc");

        let id = store.append(meta.clone()).unwrap();
        let second = store.append(meta.clone());
        assert_eq!(second, Err(StoreError::AlreadyExists(id)));

        // The original record is untouched.
        assert_eq!(store.get(id), Some(meta));
        assert_eq!(store.all_ids().len(), 1);
    }

    #[test]
    fn test_all_ids_contains_every_inserted_id() {
        let store = TrackStore::new();

        let mut inserted = Vec::new();
        for i in 0..20 {
            let url = format!("http://example.com/track-{}.igc", i);
            inserted.push(store.append(make_meta(&url)).unwrap());
        }

        let ids = store.all_ids();
        assert_eq!(ids.len(), inserted.len());
        for id in inserted {
            assert!(ids.contains(&id), "id {} missing from listing", id);
        }
    }

    // ============================================================
    // CONCURRENCY
    // ============================================================

    #[tokio::test]
    async fn test_concurrent_appends_with_distinct_urls() {
        let store = Arc::new(TrackStore::new());

        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let url = format!("http://example.com/concurrent-{}.igc", i);
                store.append(make_meta(&url))
            }));
        }

        for handle in handles {
            handle.await.unwrap().expect("distinct urls should all insert");
        }
        assert_eq!(store.all_ids().len(), 32);
    }

    #[tokio::test]
    async fn test_concurrent_appends_with_same_url() {
        let store = Arc::new(TrackStore::new());

        let mut handles = Vec::new();
        for _ in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.append(make_meta("http://example.com/same.igc"))
            }));
        }

        let mut successes = 0;
        let mut duplicates = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(StoreError::AlreadyExists(_)) => duplicates += 1,
            }
        }

        assert_eq!(successes, 1, "exactly one append should win");
        assert_eq!(duplicates, 31);
        assert_eq!(store.all_ids().len(), 1);
    }
}
