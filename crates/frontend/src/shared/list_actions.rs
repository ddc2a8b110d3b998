//! Remote actions of a list screen: load, delete, bulk delete, status toggle

use std::marker::PhantomData;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::alert::AlertState;
use crate::shared::data_store::{delete_selected, DataStore};
use crate::shared::list_view::ListView;

/// Copyable bundle of a list, its loading/error flags and the alert banner,
/// bound to one store type
pub struct ListActions<S>
where
    S: DataStore,
    S::Item: Send + Sync,
{
    pub list: ListView<S::Item>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// True while a delete or toggle request is in flight
    pub busy: RwSignal<bool>,
    pub alert: AlertState,
    _store: PhantomData<fn() -> S>,
}

impl<S> Clone for ListActions<S>
where
    S: DataStore,
    S::Item: Send + Sync,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for ListActions<S>
where
    S: DataStore,
    S::Item: Send + Sync,
{
}

impl<S> ListActions<S>
where
    S: DataStore + Default + 'static,
    S::Item: Send + Sync,
{
    pub fn new(list: ListView<S::Item>, alert: AlertState) -> Self {
        Self {
            list,
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            busy: RwSignal::new(false),
            alert,
            _store: PhantomData,
        }
    }

    pub fn reload(&self) {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match S::default().list().await {
                Ok(items) => {
                    log::debug!("Loaded {} {}", items.len(), S::KIND);
                    this.list.set_items(items);
                    this.error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load {}: {}", S::KIND, e);
                    this.error.set(Some(e));
                }
            }
            this.loading.set(false);
        });
    }

    /// Deletes one entity, then reloads the collection
    pub fn delete_one(&self, id: String, success_message: String) {
        let this = *self;
        this.busy.set(true);
        spawn_local(async move {
            match S::default().delete(&id).await {
                Ok(()) => {
                    log::info!("Deleted {} {}", S::KIND, id);
                    this.list.deselect(std::slice::from_ref(&id));
                    this.alert.success(success_message);
                    this.reload();
                }
                Err(e) => this.alert.danger(e),
            }
            this.busy.set(false);
        });
    }

    /// Deletes the whole selection one request at a time.
    ///
    /// Successfully deleted ids leave the selection, failed ones stay selected.
    pub fn delete_selection(&self) {
        let this = *self;
        let ids = this.list.selected_ids_untracked();
        if ids.is_empty() {
            return;
        }
        let covers_collection = this.list.selection_covers_collection();

        this.busy.set(true);
        spawn_local(async move {
            let report = delete_selected(&S::default(), ids, covers_collection).await;
            this.list.deselect(&report.deleted);
            if report.is_complete() {
                this.alert.success(report.summary());
            } else {
                this.alert.danger(report.summary());
            }
            this.busy.set(false);
            this.reload();
        });
    }

    /// Flips the status remotely; the row is patched locally on success
    pub fn toggle_status(&self, id: String, current: bool, apply: fn(&mut S::Item, bool)) {
        let this = *self;
        this.busy.set(true);
        spawn_local(async move {
            match S::default().toggle_status(&id, current).await {
                Ok(()) => this.list.update_item(&id, |item| apply(item, !current)),
                Err(e) => {
                    log::warn!("Failed to toggle {} {}: {}", S::KIND, id, e);
                    this.alert.danger(e);
                }
            }
            this.busy.set(false);
        });
    }
}
