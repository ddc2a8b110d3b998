use super::compute::{compute_visible, VisiblePage};
use super::criteria::{FilterCriterion, ListCriteria, SortDirection, SortSpec};
use super::descriptor::{ListDescriptor, ListEntity};
use std::collections::HashSet;

/// Filter, sort, pagination and multi-select state of one list screen.
///
/// Holds no hidden derived state: every read recomputes the visible page
/// from `items` and `criteria`.
#[derive(Debug, Clone)]
pub struct ListViewModel<T> {
    descriptor: ListDescriptor,
    items: Vec<T>,
    criteria: ListCriteria,
    current_page: usize,
    /// Selection order is kept, bulk actions run in that order
    selected: Vec<String>,
    seen: HashSet<String>,
}

impl<T: ListEntity> ListViewModel<T> {
    pub fn new(descriptor: ListDescriptor) -> Self {
        Self {
            criteria: descriptor.initial_criteria(),
            descriptor,
            items: Vec::new(),
            current_page: 1,
            selected: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Starts from previously persisted criteria
    pub fn with_criteria(mut self, criteria: ListCriteria) -> Self {
        self.criteria = criteria;
        self.current_page = 1;
        self
    }

    pub fn descriptor(&self) -> &ListDescriptor {
        &self.descriptor
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn criteria(&self) -> &ListCriteria {
        &self.criteria
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn selected_ids(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn visible(&self) -> VisiblePage<'_, T> {
        compute_visible(&self.items, &self.descriptor, &self.criteria, self.current_page)
    }

    pub fn page_rows(&self) -> Vec<&T> {
        self.visible().rows
    }

    pub fn visible_ids(&self) -> Vec<String> {
        self.visible().ids()
    }

    pub fn total_pages(&self) -> usize {
        self.visible().total_pages
    }

    pub fn filtered_count(&self) -> usize {
        self.visible().filtered_count
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.list_id() == id)
    }

    /// Replaces the collection with a fresh backend snapshot
    pub fn set_items(&mut self, items: Vec<T>) {
        self.seen
            .extend(items.iter().map(|item| item.list_id().to_string()));
        self.items = items;
        self.clamp_page();
    }

    /// Patches one item in place (e.g. after a successful status toggle)
    pub fn update_item(&mut self, id: &str, patch: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.list_id() == id) {
            Some(item) => {
                patch(item);
                self.clamp_page();
                true
            }
            None => false,
        }
    }

    pub fn set_filter(&mut self, criterion: FilterCriterion) {
        self.criteria.apply(criterion);
        self.current_page = 1;
    }

    /// Neutral filters and page 1; selection and sort are untouched
    pub fn clear_filters(&mut self) {
        self.criteria.clear_filters();
        self.current_page = 1;
    }

    /// Ignored for keys the descriptor does not allow
    pub fn set_sort(&mut self, key: &str, direction: SortDirection) {
        if !self.descriptor.is_sortable(key) {
            return;
        }
        self.criteria.sort = Some(SortSpec::new(key, direction));
        self.current_page = 1;
    }

    /// Same key flips the direction, a new key starts ascending
    pub fn toggle_sort(&mut self, key: &str) {
        let direction = match &self.criteria.sort {
            Some(sort) if sort.key == key => sort.direction.toggled(),
            _ => SortDirection::Asc,
        };
        self.set_sort(key, direction);
    }

    pub fn toggle_select(&mut self, id: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
        } else if self.seen.contains(id) {
            self.selected.push(id.to_string());
        }
    }

    /// Select-all is scoped to `visible_ids`, never global
    pub fn toggle_select_all_visible(&mut self, checked: bool, visible_ids: &[String]) {
        if checked {
            for id in visible_ids {
                if self.seen.contains(id) && !self.is_selected(id) {
                    self.selected.push(id.clone());
                }
            }
        } else {
            self.selected.retain(|id| !visible_ids.contains(id));
        }
    }

    /// `visible_ids` non-empty and every one of them selected
    pub fn all_selected(&self, visible_ids: &[String]) -> bool {
        !visible_ids.is_empty() && visible_ids.iter().all(|id| self.is_selected(id))
    }

    pub fn all_visible_selected(&self) -> bool {
        self.all_selected(&self.visible_ids())
    }

    /// Same threshold for every entity kind
    pub fn can_bulk_delete(&self) -> bool {
        self.all_visible_selected()
    }

    /// No-op outside `[1, total_pages]`
    pub fn go_to_page(&mut self, page: usize) {
        if page >= 1 && page <= self.total_pages() {
            self.current_page = page;
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn deselect(&mut self, ids: &[String]) {
        self.selected.retain(|id| !ids.contains(id));
    }

    fn clamp_page(&mut self) {
        let total = self.total_pages();
        self.current_page = self.current_page.clamp(1, total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::StatusFilter;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        name: String,
        email: String,
        kind: String,
        active: bool,
    }

    impl Row {
        fn new(id: &str, name: &str, active: bool) -> Self {
            Self {
                id: id.to_string(),
                name: name.to_string(),
                email: format!("{}@mail.pt", name.to_lowercase()),
                kind: String::new(),
                active,
            }
        }

        fn of_kind(mut self, kind: &str) -> Self {
            self.kind = kind.to_string();
            self
        }
    }

    impl ListEntity for Row {
        fn list_id(&self) -> &str {
            &self.id
        }

        fn is_active(&self) -> bool {
            self.active
        }

        fn field_value(&self, field: &str) -> Option<String> {
            match field {
                "name" => Some(self.name.clone()),
                "email" => Some(self.email.clone()),
                "type" => Some(self.kind.clone()),
                _ => None,
            }
        }
    }

    const PLAIN: ListDescriptor = ListDescriptor {
        page_size: 10,
        text_fields: &["name"],
        exact_fields: &["type"],
        sort_keys: &[],
        default_sort: None,
    };

    const SORTED: ListDescriptor = ListDescriptor {
        page_size: 5,
        text_fields: &["name", "email"],
        exact_fields: &[],
        sort_keys: &["name", "email"],
        default_sort: Some(("name", SortDirection::Asc)),
    };

    fn numbered(count: usize) -> Vec<Row> {
        (1..=count)
            .map(|i| Row::new(&format!("id-{i}"), &format!("Item {i:02}"), i % 2 == 0))
            .collect()
    }

    fn names(vm: &ListViewModel<Row>) -> Vec<String> {
        vm.page_rows().iter().map(|r| r.name.clone()).collect()
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_twenty_three_items_paginate_into_three_pages() {
        let mut vm = ListViewModel::new(PLAIN);
        vm.set_items(numbered(23));

        assert_eq!(vm.total_pages(), 3);
        vm.go_to_page(3);
        assert_eq!(vm.current_page(), 3);
        assert_eq!(vm.page_rows().len(), 3);

        vm.go_to_page(4);
        assert_eq!(vm.current_page(), 3);
        vm.go_to_page(0);
        assert_eq!(vm.current_page(), 3);
    }

    #[test]
    fn test_total_pages_is_at_least_one() {
        let mut vm: ListViewModel<Row> = ListViewModel::new(PLAIN);
        assert_eq!(vm.total_pages(), 1);
        assert!(vm.page_rows().is_empty());

        vm.set_items(numbered(10));
        assert_eq!(vm.total_pages(), 1);
        vm.set_items(numbered(11));
        assert_eq!(vm.total_pages(), 2);
    }

    #[test]
    fn test_total_pages_follows_filtered_count() {
        let mut vm = ListViewModel::new(PLAIN);
        vm.set_items(numbered(23));
        for status in [StatusFilter::All, StatusFilter::Active, StatusFilter::Inactive] {
            vm.set_filter(FilterCriterion::Status(status));
            let count = vm.filtered_count();
            assert_eq!(vm.total_pages(), ((count + 9) / 10).max(1));
        }
        vm.set_filter(FilterCriterion::Text("zzz".into()));
        assert_eq!(vm.filtered_count(), 0);
        assert_eq!(vm.total_pages(), 1);
    }

    #[test]
    fn test_active_only_filter() {
        let mut vm = ListViewModel::new(PLAIN);
        vm.set_items(vec![Row::new("1", "Rice", true), Row::new("2", "Bread", false)]);
        vm.set_filter(FilterCriterion::Status(StatusFilter::Active));
        assert_eq!(names(&vm), vec!["Rice"]);

        vm.set_filter(FilterCriterion::Status(StatusFilter::Inactive));
        assert_eq!(names(&vm), vec!["Bread"]);
    }

    #[test]
    fn test_text_filter_is_case_insensitive_substring() {
        let mut vm = ListViewModel::new(PLAIN);
        vm.set_items(vec![
            Row::new("1", "Rice", true),
            Row::new("2", "Bread", true),
            Row::new("3", "Brie", true),
        ]);
        vm.set_filter(FilterCriterion::Text("ri".into()));
        assert_eq!(names(&vm), vec!["Rice", "Brie"]);

        vm.set_filter(FilterCriterion::Text("RI".into()));
        assert_eq!(names(&vm), vec!["Rice", "Brie"]);
    }

    #[test]
    fn test_text_filter_matches_any_designated_field() {
        let mut vm = ListViewModel::new(SORTED);
        let mut ana = Row::new("1", "Ana", true);
        ana.email = "contacto@menument.pt".into();
        vm.set_items(vec![ana, Row::new("2", "Rui", true)]);

        vm.set_filter(FilterCriterion::Text("menument".into()));
        assert_eq!(names(&vm), vec!["Ana"]);
    }

    #[test]
    fn test_exact_field_filter_and_unset_sentinel() {
        let mut vm = ListViewModel::new(PLAIN);
        vm.set_items(vec![
            Row::new("1", "Maçã", true).of_kind("Frutas"),
            Row::new("2", "Arroz", true).of_kind("Cereais e derivados"),
            Row::new("3", "Pera", false).of_kind("Frutas"),
        ]);
        vm.set_filter(FilterCriterion::field("type", "Frutas"));
        assert_eq!(names(&vm), vec!["Maçã", "Pera"]);

        vm.set_filter(FilterCriterion::Status(StatusFilter::Active));
        assert_eq!(names(&vm), vec!["Maçã"]);

        vm.set_filter(FilterCriterion::field("type", ""));
        assert_eq!(names(&vm), vec!["Maçã", "Arroz"]);
    }

    #[test]
    fn test_sort_descending_by_name() {
        let mut vm = ListViewModel::new(SORTED);
        vm.set_items(vec![
            Row::new("1", "Bread", true),
            Row::new("2", "Apple", true),
            Row::new("3", "Cherry", true),
        ]);
        assert_eq!(names(&vm), vec!["Apple", "Bread", "Cherry"]);

        vm.set_sort("name", SortDirection::Desc);
        assert_eq!(names(&vm), vec!["Cherry", "Bread", "Apple"]);
    }

    #[test]
    fn test_sort_is_case_insensitive_and_stable() {
        let mut vm = ListViewModel::new(SORTED);
        let mut first = Row::new("1", "bob", true);
        first.email = "same@x.pt".into();
        let mut second = Row::new("2", "Alice", true);
        second.email = "same@x.pt".into();
        let mut third = Row::new("3", "carl", true);
        third.email = "other@x.pt".into();
        vm.set_items(vec![first, second, third]);

        assert_eq!(names(&vm), vec!["Alice", "bob", "carl"]);

        vm.set_sort("email", SortDirection::Asc);
        assert_eq!(names(&vm), vec!["carl", "bob", "Alice"]);
        vm.set_sort("email", SortDirection::Desc);
        assert_eq!(names(&vm), vec!["bob", "Alice", "carl"]);
    }

    #[test]
    fn test_unsortable_descriptor_keeps_backend_order() {
        let mut vm = ListViewModel::new(PLAIN);
        vm.set_items(vec![Row::new("1", "Bread", true), Row::new("2", "Apple", true)]);
        vm.set_sort("name", SortDirection::Asc);
        assert!(vm.criteria().sort.is_none());
        assert_eq!(names(&vm), vec!["Bread", "Apple"]);
    }

    #[test]
    fn test_toggle_sort_flips_direction() {
        let mut vm: ListViewModel<Row> = ListViewModel::new(SORTED);
        vm.toggle_sort("name");
        assert_eq!(
            vm.criteria().sort,
            Some(SortSpec::new("name", SortDirection::Desc))
        );
        vm.toggle_sort("email");
        assert_eq!(
            vm.criteria().sort,
            Some(SortSpec::new("email", SortDirection::Asc))
        );
    }

    #[test]
    fn test_compute_visible_is_pure() {
        let mut vm = ListViewModel::new(SORTED);
        vm.set_items(numbered(12));
        vm.set_filter(FilterCriterion::Text("item".into()));
        vm.go_to_page(2);

        let first = vm.visible();
        let second = vm.visible();
        assert_eq!(first, second);
        assert_eq!(first.page, 2);
    }

    #[test]
    fn test_set_filter_resets_page() {
        let mut vm = ListViewModel::new(PLAIN);
        vm.set_items(numbered(23));
        vm.go_to_page(3);
        assert_eq!(vm.current_page(), 3);

        vm.set_filter(FilterCriterion::Text("Item".into()));
        assert_eq!(vm.current_page(), 1);

        vm.go_to_page(2);
        vm.set_filter(FilterCriterion::Status(StatusFilter::All));
        assert_eq!(vm.current_page(), 1);
    }

    #[test]
    fn test_clear_filters_keeps_selection() {
        let mut vm = ListViewModel::new(PLAIN);
        vm.set_items(numbered(23));
        vm.toggle_select("id-4");
        vm.set_filter(FilterCriterion::Text("03".into()));
        vm.set_filter(FilterCriterion::field("type", "x"));
        vm.set_filter(FilterCriterion::Status(StatusFilter::Inactive));

        vm.clear_filters();
        assert!(vm.criteria().is_neutral());
        assert_eq!(vm.current_page(), 1);
        assert_eq!(vm.selected_ids(), ids(&["id-4"]).as_slice());
    }

    #[test]
    fn test_toggle_select_is_symmetric() {
        let mut vm = ListViewModel::new(PLAIN);
        vm.set_items(numbered(3));
        vm.toggle_select("id-2");
        assert!(vm.is_selected("id-2"));
        vm.toggle_select("id-2");
        assert!(!vm.is_selected("id-2"));
    }

    #[test]
    fn test_unknown_ids_are_never_selected() {
        let mut vm = ListViewModel::new(PLAIN);
        vm.set_items(numbered(3));
        vm.toggle_select("ghost");
        vm.toggle_select_all_visible(true, &ids(&["ghost", "id-1"]));
        assert_eq!(vm.selected_ids(), ids(&["id-1"]).as_slice());
    }

    // Ids selected before and also visible are cleared by the uncheck, not restored
    #[test]
    fn test_select_all_visible_round_trip_restores_selection() {
        let mut vm = ListViewModel::new(PLAIN);
        vm.set_items(numbered(23));
        vm.toggle_select("id-15");
        vm.toggle_select("id-2");
        let before = vm.selected_ids().to_vec();

        let visible = vm.visible_ids();
        vm.toggle_select_all_visible(true, &visible);
        assert!(vm.all_visible_selected());
        vm.toggle_select_all_visible(false, &visible);

        let mut after = vm.selected_ids().to_vec();
        let mut expected: Vec<String> = before
            .into_iter()
            .filter(|id| !visible.contains(id))
            .collect();
        after.sort();
        expected.sort();
        assert_eq!(after, expected);
        assert!(vm.is_selected("id-15"));
    }

    #[test]
    fn test_select_all_then_unselect_with_disjoint_selection_is_identity() {
        let mut vm = ListViewModel::new(PLAIN);
        vm.set_items(numbered(23));
        vm.toggle_select("id-21");
        let before = vm.selected_ids().to_vec();

        let page_one = vm.visible_ids();
        vm.toggle_select_all_visible(true, &page_one);
        vm.toggle_select_all_visible(false, &page_one);
        assert_eq!(vm.selected_ids(), before.as_slice());
    }

    #[test]
    fn test_select_all_is_scoped_to_visible_rows() {
        let mut vm = ListViewModel::new(PLAIN);
        vm.set_items(numbered(23));
        let page_one = vm.visible_ids();
        vm.toggle_select_all_visible(true, &page_one);
        assert_eq!(vm.selected_ids().len(), 10);

        vm.go_to_page(2);
        assert!(!vm.all_visible_selected());
        assert!(!vm.can_bulk_delete());
    }

    #[test]
    fn test_all_visible_selected_requires_rows() {
        let mut vm = ListViewModel::new(PLAIN);
        vm.set_items(numbered(3));
        vm.set_filter(FilterCriterion::Text("nothing".into()));
        assert!(vm.visible_ids().is_empty());
        assert!(!vm.all_visible_selected());
        assert!(!vm.can_bulk_delete());
    }

    #[test]
    fn test_bulk_delete_ready_with_single_visible_row() {
        let mut vm = ListViewModel::new(SORTED);
        vm.set_items(vec![Row::new("1", "Ana", true)]);
        vm.toggle_select("1");
        assert!(vm.can_bulk_delete());
    }

    #[test]
    fn test_selection_survives_filter_churn() {
        let mut vm = ListViewModel::new(PLAIN);
        vm.set_items(vec![Row::new("1", "Rice", true), Row::new("2", "Bread", false)]);
        vm.toggle_select("2");

        vm.set_filter(FilterCriterion::Status(StatusFilter::Active));
        assert!(!vm.visible_ids().contains(&"2".to_string()));
        assert!(vm.is_selected("2"));

        vm.set_filter(FilterCriterion::Status(StatusFilter::All));
        assert!(vm.is_selected("2"));
        assert!(vm.visible_ids().contains(&"2".to_string()));
    }

    #[test]
    fn test_refresh_clamps_current_page() {
        let mut vm = ListViewModel::new(PLAIN);
        vm.set_items(numbered(23));
        vm.go_to_page(3);

        vm.set_items(numbered(12));
        assert_eq!(vm.current_page(), 2);
        vm.set_items(Vec::new());
        assert_eq!(vm.current_page(), 1);
    }

    #[test]
    fn test_selection_of_removed_items_remains_known() {
        let mut vm = ListViewModel::new(PLAIN);
        vm.set_items(numbered(3));
        vm.toggle_select("id-3");
        vm.set_items(numbered(2));
        assert!(vm.is_selected("id-3"));

        vm.deselect(&ids(&["id-3"]));
        assert!(vm.selected_ids().is_empty());
    }

    #[test]
    fn test_update_item_patches_in_place() {
        let mut vm = ListViewModel::new(PLAIN);
        vm.set_items(vec![Row::new("1", "Rice", true)]);
        assert!(vm.update_item("1", |row| row.active = false));
        assert!(!vm.find("1").unwrap().active);
        assert!(!vm.update_item("404", |row| row.active = true));
    }

    #[test]
    fn test_with_criteria_rehydrates_state() {
        let criteria = ListCriteria {
            text: "bre".into(),
            status: StatusFilter::Inactive,
            ..ListCriteria::default()
        };
        let mut vm = ListViewModel::new(PLAIN).with_criteria(criteria);
        vm.set_items(vec![
            Row::new("1", "Bread", false),
            Row::new("2", "Brie", false),
            Row::new("3", "Breadsticks", true),
        ]);
        assert_eq!(names(&vm), vec!["Bread"]);
    }
}
