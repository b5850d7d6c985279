//! Unit tests for gw-history.

#[cfg(test)]
mod helpers {
    use gw_catalog::RegionCatalog;
    use gw_core::GeoPoint;
    use gw_generator::LocationRecord;
    use gw_resolver::DistrictResolver;

    /// A record with district and neighborhood (Seoul, 강남구).
    pub fn resolved() -> LocationRecord {
        let cat = RegionCatalog::korea();
        let res = DistrictResolver::new(&cat);
        let seoul = cat.by_name("서울").unwrap();
        let rec = LocationRecord::resolve(seoul, GeoPoint::new(37.4975, 127.0275), &res);
        assert!(rec.district().is_some());
        rec
    }

    /// A record with both optional labels absent (수원 has no district table).
    pub fn unresolved() -> LocationRecord {
        let cat = RegionCatalog::korea();
        let res = DistrictResolver::new(&cat);
        let suwon = cat.by_name("수원").unwrap();
        let rec = LocationRecord::resolve(suwon, GeoPoint::new(37.27012345678901, 127.0312345678), &res);
        assert!(rec.district().is_none());
        rec
    }
}

// ── BlobHistory over memory ───────────────────────────────────────────────────

#[cfg(test)]
mod memory_history {
    use super::helpers::{resolved, unresolved};
    use crate::{BlobHistory, HistoryStore, MemoryBlobStore};

    #[test]
    fn empty_history_fetches_nothing() {
        let h = BlobHistory::new(MemoryBlobStore::new());
        assert!(h.fetch_all().unwrap().is_empty());
        assert_eq!(h.limit(), 100);
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let mut h = BlobHistory::new(MemoryBlobStore::new());
        let a = resolved();
        let b = unresolved();
        h.save(a.clone()).unwrap();
        h.save(b.clone()).unwrap();

        let got = h.fetch_all().unwrap();
        assert_eq!(got, vec![b.clone(), a.clone()]);
        assert_eq!(got[0].district(), None);
        assert_eq!(got[0].neighborhood(), None);
        assert_eq!(got[1].district(), a.district());
        assert_eq!(got[0].coordinate(), b.coordinate());
        assert_eq!(got[0].generated_at(), b.generated_at());
    }

    #[test]
    fn save_prepends() {
        let mut h = BlobHistory::new(MemoryBlobStore::new());
        let recs: Vec<_> = (0..3).map(|_| resolved()).collect();
        for r in &recs {
            h.save(r.clone()).unwrap();
        }
        let ids: Vec<_> = h.fetch_all().unwrap().iter().map(|r| r.id()).collect();
        assert_eq!(ids, [recs[2].id(), recs[1].id(), recs[0].id()]);
    }

    #[test]
    fn default_limit_keeps_most_recent_hundred() {
        let mut h = BlobHistory::new(MemoryBlobStore::new());
        let mut last = None;
        for _ in 0..105 {
            let r = unresolved();
            last = Some(r.id());
            h.save(r).unwrap();
        }
        let got = h.fetch_all().unwrap();
        assert_eq!(got.len(), 100);
        assert_eq!(Some(got[0].id()), last);
    }

    #[test]
    fn custom_limit_drops_oldest() {
        let mut h = BlobHistory::with_limit(MemoryBlobStore::new(), 2);
        let recs: Vec<_> = (0..3).map(|_| resolved()).collect();
        for r in &recs {
            h.save(r.clone()).unwrap();
        }
        let got = h.fetch_all().unwrap();
        assert_eq!(got, vec![recs[2].clone(), recs[1].clone()]);
    }

    #[test]
    fn zero_limit_is_clamped() {
        let h = BlobHistory::with_limit(MemoryBlobStore::new(), 0);
        assert_eq!(h.limit(), 1);
    }

    #[test]
    fn delete_removes_only_matching_id() {
        let mut h = BlobHistory::new(MemoryBlobStore::new());
        let a = resolved();
        let b = unresolved();
        h.save(a.clone()).unwrap();
        h.save(b.clone()).unwrap();

        h.delete(a.id()).unwrap();
        assert_eq!(h.fetch_all().unwrap(), vec![b.clone()]);

        // Deleting again is a no-op.
        h.delete(a.id()).unwrap();
        assert_eq!(h.fetch_all().unwrap(), vec![b]);
    }

    #[test]
    fn clear_all_empties() {
        let mut h = BlobHistory::new(MemoryBlobStore::new());
        h.save(resolved()).unwrap();
        h.clear_all().unwrap();
        assert!(h.fetch_all().unwrap().is_empty());
        // Clearing an empty history is fine.
        h.clear_all().unwrap();
    }

    #[test]
    fn corrupt_blob_is_an_error() {
        use crate::{BlobStore, HISTORY_KEY, HistoryError};

        let mut store = MemoryBlobStore::new();
        store.set(HISTORY_KEY, b"{not json").unwrap();
        let h = BlobHistory::new(store);
        assert!(matches!(h.fetch_all(), Err(HistoryError::Json(_))));
    }

    #[test]
    fn absent_labels_are_omitted_from_json() {
        use crate::{BlobStore, HISTORY_KEY};

        let mut h = BlobHistory::new(MemoryBlobStore::new());
        h.save(unresolved()).unwrap();
        let store = h.into_inner();
        let text = String::from_utf8(store.get(HISTORY_KEY).unwrap().unwrap()).unwrap();
        assert!(!text.contains("district"));
        assert!(!text.contains("neighborhood"));
        assert!(text.contains("수원"));
    }
}

// ── FileBlobStore ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod file_store {
    use tempfile::TempDir;

    use super::helpers::{resolved, unresolved};
    use crate::{BlobHistory, BlobStore, FileBlobStore, HISTORY_KEY, HistoryError, HistoryStore};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn creates_directory() {
        let dir = tmp();
        let nested = dir.path().join("a").join("b");
        let store = FileBlobStore::new(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(store.dir(), nested);
    }

    #[test]
    fn blob_get_set_remove() {
        let dir = tmp();
        let mut store = FileBlobStore::new(dir.path()).unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", b"hello").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some(&b"hello"[..]));
        assert!(dir.path().join("k.json").exists());
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        store.remove("k").unwrap();
    }

    #[test]
    fn rejects_path_like_keys() {
        let dir = tmp();
        let mut store = FileBlobStore::new(dir.path()).unwrap();
        for key in ["", "../escape", "a/b", "dot.ted"] {
            assert!(matches!(store.set(key, b"x"), Err(HistoryError::InvalidKey(_))), "{key:?}");
        }
    }

    #[test]
    fn history_survives_reopen() {
        let dir = tmp();
        let a = resolved();
        let b = unresolved();
        {
            let mut h = BlobHistory::new(FileBlobStore::new(dir.path()).unwrap());
            h.save(a.clone()).unwrap();
            h.save(b.clone()).unwrap();
        }
        let h = BlobHistory::new(FileBlobStore::new(dir.path()).unwrap());
        assert_eq!(h.fetch_all().unwrap(), vec![b, a]);
        assert!(dir.path().join(format!("{HISTORY_KEY}.json")).exists());
    }

    #[test]
    fn clear_removes_file() {
        let dir = tmp();
        let mut h = BlobHistory::new(FileBlobStore::new(dir.path()).unwrap());
        h.save(resolved()).unwrap();
        h.clear_all().unwrap();
        assert!(!dir.path().join(format!("{HISTORY_KEY}.json")).exists());
        assert!(h.fetch_all().unwrap().is_empty());
    }
}

// ── SqliteBlobStore ───────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_store {
    use super::helpers::{resolved, unresolved};
    use crate::{BlobHistory, BlobStore, HistoryStore, SqliteBlobStore};

    #[test]
    fn blob_upsert_and_remove() {
        let mut store = SqliteBlobStore::open_in_memory().unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", b"one").unwrap();
        store.set("k", b"two").unwrap();
        assert_eq!(store.get("k").unwrap(), Some(b"two".to_vec()));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn history_persists_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.db");
        let a = resolved();
        let b = unresolved();
        {
            let mut h = BlobHistory::new(SqliteBlobStore::open(&path).unwrap());
            h.save(a.clone()).unwrap();
            h.save(b.clone()).unwrap();
            h.delete(a.id()).unwrap();
        }
        let h = BlobHistory::new(SqliteBlobStore::open(&path).unwrap());
        assert_eq!(h.fetch_all().unwrap(), vec![b]);
    }
}
