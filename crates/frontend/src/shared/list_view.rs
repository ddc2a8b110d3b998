//! Reactive wrapper around the list view-model

use contracts::shared::list_view::{
    FilterCriterion, ListCriteria, ListDescriptor, ListEntity, ListViewModel, SortDirection,
};
use leptos::prelude::*;

/// Copyable handle shared by a list screen and its child components
pub struct ListView<T: Send + Sync + 'static> {
    vm: RwSignal<ListViewModel<T>>,
    on_change: Option<Callback<ListCriteria>>,
}

impl<T: Send + Sync + 'static> Clone for ListView<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListView<T> {}

impl<T> ListView<T>
where
    T: ListEntity + Clone + Send + Sync + 'static,
{
    pub fn new(descriptor: ListDescriptor) -> Self {
        Self {
            vm: RwSignal::new(ListViewModel::new(descriptor)),
            on_change: None,
        }
    }

    /// Starts from `initial` (when given) and reports every criteria change
    pub fn with_persistence(
        descriptor: ListDescriptor,
        initial: Option<ListCriteria>,
        on_change: Callback<ListCriteria>,
    ) -> Self {
        let vm = match initial {
            Some(criteria) => ListViewModel::new(descriptor).with_criteria(criteria),
            None => ListViewModel::new(descriptor),
        };
        Self {
            vm: RwSignal::new(vm),
            on_change: Some(on_change),
        }
    }

    fn notify(&self) {
        if let Some(on_change) = self.on_change {
            on_change.run(self.vm.with_untracked(|vm| vm.criteria().clone()));
        }
    }

    // ------------------------------------------------------------------
    // Reads (tracked)
    // ------------------------------------------------------------------

    pub fn page_rows(&self) -> Vec<T> {
        self.vm
            .with(|vm| vm.page_rows().into_iter().cloned().collect())
    }

    pub fn visible_ids(&self) -> Vec<String> {
        self.vm.with(|vm| vm.visible_ids())
    }

    pub fn current_page(&self) -> usize {
        self.vm.with(|vm| vm.visible().page)
    }

    pub fn total_pages(&self) -> usize {
        self.vm.with(|vm| vm.total_pages())
    }

    pub fn filtered_count(&self) -> usize {
        self.vm.with(|vm| vm.filtered_count())
    }

    pub fn item_count(&self) -> usize {
        self.vm.with(|vm| vm.items().len())
    }

    pub fn criteria(&self) -> ListCriteria {
        self.vm.with(|vm| vm.criteria().clone())
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.vm.with(|vm| vm.is_selected(id))
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.vm.with(|vm| vm.selected_ids().to_vec())
    }

    pub fn selected_ids_untracked(&self) -> Vec<String> {
        self.vm.with_untracked(|vm| vm.selected_ids().to_vec())
    }

    pub fn selected_count(&self) -> usize {
        self.vm.with(|vm| vm.selected_ids().len())
    }

    pub fn all_visible_selected(&self) -> bool {
        self.vm.with(|vm| vm.all_visible_selected())
    }

    pub fn can_bulk_delete(&self) -> bool {
        self.vm.with(|vm| vm.can_bulk_delete())
    }

    pub fn find(&self, id: &str) -> Option<T> {
        self.vm.with(|vm| vm.find(id).cloned())
    }

    /// True when every known item is selected (and nothing else)
    pub fn selection_covers_collection(&self) -> bool {
        self.vm.with_untracked(|vm| {
            !vm.items().is_empty()
                && vm.selected_ids().len() == vm.items().len()
                && vm.items().iter().all(|item| vm.is_selected(item.list_id()))
        })
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    pub fn set_items(&self, items: Vec<T>) {
        self.vm.update(|vm| vm.set_items(items));
    }

    pub fn update_item(&self, id: &str, patch: impl FnOnce(&mut T)) {
        self.vm.update(|vm| {
            vm.update_item(id, patch);
        });
    }

    pub fn set_filter(&self, criterion: FilterCriterion) {
        self.vm.update(|vm| vm.set_filter(criterion));
        self.notify();
    }

    pub fn clear_filters(&self) {
        self.vm.update(|vm| vm.clear_filters());
        self.notify();
    }

    pub fn set_sort(&self, key: &str, direction: SortDirection) {
        self.vm.update(|vm| vm.set_sort(key, direction));
        self.notify();
    }

    pub fn toggle_sort(&self, key: &str) {
        self.vm.update(|vm| vm.toggle_sort(key));
        self.notify();
    }

    pub fn toggle_select(&self, id: &str) {
        self.vm.update(|vm| vm.toggle_select(id));
    }

    /// Header checkbox: scoped to the rows currently on screen
    pub fn toggle_select_all_visible(&self, checked: bool) {
        self.vm.update(|vm| {
            let visible = vm.visible_ids();
            vm.toggle_select_all_visible(checked, &visible);
        });
    }

    pub fn go_to_page(&self, page: usize) {
        self.vm.update(|vm| vm.go_to_page(page));
    }

    pub fn deselect(&self, ids: &[String]) {
        self.vm.update(|vm| vm.deselect(ids));
    }

    pub fn clear_selection(&self) {
        self.vm.update(|vm| vm.clear_selection());
    }
}
