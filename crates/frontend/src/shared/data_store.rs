//! Per-entity CRUD facade over the REST backend

use contracts::shared::bulk::BulkDeleteReport;
use contracts::shared::list_view::ListEntity;

/// HTTP-backed collection of one entity kind.
///
/// Every failure is already a human-readable message.
#[allow(async_fn_in_trait)]
pub trait DataStore {
    type Item: ListEntity + Clone + 'static;
    /// Create/update payload (form state plus picked files)
    type Draft;

    /// Used in log lines
    const KIND: &'static str;
    /// Whether the backend exposes a single "delete everything" call
    const SUPPORTS_DELETE_ALL: bool;

    async fn list(&self) -> Result<Vec<Self::Item>, String>;
    async fn get(&self, id: &str) -> Result<Self::Item, String>;
    /// Returns the saved entity when the backend echoes it
    async fn create(&self, draft: Self::Draft) -> Result<Option<Self::Item>, String>;
    async fn update(&self, id: &str, draft: Self::Draft) -> Result<Option<Self::Item>, String>;
    async fn delete(&self, id: &str) -> Result<(), String>;
    async fn delete_all(&self) -> Result<(), String>;
    async fn toggle_status(&self, id: &str, current: bool) -> Result<(), String>;
}

/// Deletes `ids` one request at a time, in order.
///
/// A failed id is recorded and the batch moves on. When the selection is
/// the whole collection and the backend supports it, one `delete_all`
/// request replaces the loop, but only after a fresh `list` confirms the
/// backend holds nothing outside `ids`. Nothing cancels a started batch.
pub async fn delete_selected<S: DataStore>(
    store: &S,
    ids: Vec<String>,
    covers_collection: bool,
) -> BulkDeleteReport {
    let mut report = BulkDeleteReport::default();
    if ids.is_empty() {
        return report;
    }

    if covers_collection && S::SUPPORTS_DELETE_ALL && remote_matches(store, &ids).await {
        log::info!("Deleting all {} {}", ids.len(), S::KIND);
        return match store.delete_all().await {
            Ok(()) => {
                for id in ids {
                    report.record_deleted(id);
                }
                report
            }
            Err(e) => {
                log::warn!("Bulk delete of {} failed: {}", S::KIND, e);
                BulkDeleteReport::fail_all(&ids, &e)
            }
        };
    }

    log::info!("Deleting {} selected {}", ids.len(), S::KIND);
    for id in ids {
        match store.delete(&id).await {
            Ok(()) => report.record_deleted(id),
            Err(e) => {
                log::warn!("Failed to delete {} {}: {}", S::KIND, id, e);
                report.record_failed(id, e);
            }
        }
    }
    report
}

/// Whether every item the backend currently holds is among `ids`
async fn remote_matches<S: DataStore>(store: &S, ids: &[String]) -> bool {
    match store.list().await {
        Ok(items) => {
            let stale = items.iter().any(|item| !ids.iter().any(|id| id == item.list_id()));
            if stale {
                log::info!("{} changed since the last refresh; deleting one by one", S::KIND);
            }
            !stale
        }
        Err(e) => {
            log::warn!("Could not refresh {} before bulk delete: {}", S::KIND, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::users::User;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingStore {
        /// Ids the backend holds right now
        remote: Vec<&'static str>,
        fail_id: Option<&'static str>,
        calls: RefCell<Vec<String>>,
    }

    impl RecordingStore {
        fn holding(remote: &[&'static str]) -> Self {
            Self {
                remote: remote.to_vec(),
                ..Self::default()
            }
        }

        fn failing(id: &'static str) -> Self {
            Self {
                fail_id: Some(id),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl DataStore for RecordingStore {
        type Item = User;
        type Draft = ();

        const KIND: &'static str = "items";
        const SUPPORTS_DELETE_ALL: bool = true;

        async fn list(&self) -> Result<Vec<User>, String> {
            self.calls.borrow_mut().push("list".to_string());
            Ok(self
                .remote
                .iter()
                .map(|id| serde_json::from_value(serde_json::json!({ "_id": id })).unwrap())
                .collect())
        }
        async fn get(&self, id: &str) -> Result<User, String> {
            Err(format!("{} not found", id))
        }
        async fn create(&self, _draft: ()) -> Result<Option<User>, String> {
            Ok(None)
        }
        async fn update(&self, _id: &str, _draft: ()) -> Result<Option<User>, String> {
            Ok(None)
        }
        async fn delete(&self, id: &str) -> Result<(), String> {
            self.calls.borrow_mut().push(format!("delete {}", id));
            match self.fail_id {
                Some(fail) if fail == id => Err(format!("Erro ao apagar {}", id)),
                _ => Ok(()),
            }
        }
        async fn delete_all(&self) -> Result<(), String> {
            self.calls.borrow_mut().push("delete_all".to_string());
            Ok(())
        }
        async fn toggle_status(&self, _id: &str, _current: bool) -> Result<(), String> {
            Ok(())
        }
    }

    /// Same requests, but the backend has no bulk endpoint
    struct NoBulkStore(RecordingStore);

    impl DataStore for NoBulkStore {
        type Item = User;
        type Draft = ();

        const KIND: &'static str = "users";
        const SUPPORTS_DELETE_ALL: bool = false;

        async fn list(&self) -> Result<Vec<User>, String> {
            self.0.list().await
        }
        async fn get(&self, id: &str) -> Result<User, String> {
            self.0.get(id).await
        }
        async fn create(&self, draft: ()) -> Result<Option<User>, String> {
            self.0.create(draft).await
        }
        async fn update(&self, id: &str, draft: ()) -> Result<Option<User>, String> {
            self.0.update(id, draft).await
        }
        async fn delete(&self, id: &str) -> Result<(), String> {
            self.0.delete(id).await
        }
        async fn delete_all(&self) -> Result<(), String> {
            self.0.delete_all().await
        }
        async fn toggle_status(&self, id: &str, current: bool) -> Result<(), String> {
            self.0.toggle_status(id, current).await
        }
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_failed_id_does_not_stop_the_batch() {
        let store = RecordingStore::failing("b");
        let report = block_on(delete_selected(&store, ids(&["a", "b", "c"]), false));

        assert_eq!(store.calls(), vec!["delete a", "delete b", "delete c"]);
        assert_eq!(report.deleted, ids(&["a", "c"]));
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].id, "b");
        assert_eq!(report.failed[0].message, "Erro ao apagar b");
        assert!(!report.is_complete());
        assert_eq!(report.attempted(), 3);
    }

    #[test]
    fn test_whole_collection_uses_single_request() {
        let store = RecordingStore::holding(&["a", "b"]);
        let report = block_on(delete_selected(&store, ids(&["a", "b"]), true));

        assert_eq!(store.calls(), vec!["list", "delete_all"]);
        assert_eq!(report.deleted, ids(&["a", "b"]));
        assert!(report.is_complete());
    }

    #[test]
    fn test_rows_added_elsewhere_survive_whole_collection_delete() {
        let store = RecordingStore::holding(&["a", "b", "new"]);
        let report = block_on(delete_selected(&store, ids(&["a", "b"]), true));

        assert_eq!(store.calls(), vec!["list", "delete a", "delete b"]);
        assert_eq!(report.deleted, ids(&["a", "b"]));
    }

    #[test]
    fn test_without_bulk_endpoint_deletes_one_by_one() {
        let store = NoBulkStore(RecordingStore::default());
        let report = block_on(delete_selected(&store, ids(&["x", "y"]), true));

        assert_eq!(store.0.calls(), vec!["delete x", "delete y"]);
        assert_eq!(report.deleted, ids(&["x", "y"]));
    }

    #[test]
    fn test_empty_selection_sends_nothing() {
        let store = RecordingStore::default();
        let report = block_on(delete_selected(&store, Vec::new(), true));

        assert!(store.calls().is_empty());
        assert_eq!(report.attempted(), 0);
    }
}
