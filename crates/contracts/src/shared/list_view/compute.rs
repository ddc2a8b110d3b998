use super::criteria::{ListCriteria, SortDirection};
use super::descriptor::{ListDescriptor, ListEntity};
use std::cmp::Ordering;

/// One page of a filtered and sorted collection
#[derive(Debug, Clone, PartialEq)]
pub struct VisiblePage<'a, T> {
    pub rows: Vec<&'a T>,
    /// 1-indexed, already clamped into `[1, total_pages]`
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
}

impl<'a, T: ListEntity> VisiblePage<'a, T> {
    pub fn ids(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.list_id().to_string()).collect()
    }
}

/// `max(1, ceil(count / page_size))`
pub fn total_pages(filtered_count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    if filtered_count == 0 {
        1
    } else {
        (filtered_count + page_size - 1) / page_size
    }
}

/// Logical AND of the text, exact-field and status predicates
pub fn matches_criteria<T: ListEntity>(
    item: &T,
    descriptor: &ListDescriptor,
    criteria: &ListCriteria,
) -> bool {
    if !criteria.text.is_empty() {
        let needle = criteria.text.to_lowercase();
        let hit = descriptor.text_fields.iter().any(|field| {
            item.field_value(field)
                .map(|value| value.to_lowercase().contains(&needle))
                .unwrap_or(false)
        });
        if !hit {
            return false;
        }
    }

    for key in descriptor.exact_fields {
        let expected = criteria.field(key);
        if expected.is_empty() {
            continue;
        }
        if item.field_value(key).as_deref() != Some(expected) {
            return false;
        }
    }

    criteria.status.matches(item.is_active())
}

/// Case-insensitive comparison of one field, missing values sort as `""`
pub fn compare_by_field<T: ListEntity>(a: &T, b: &T, field: &str) -> Ordering {
    let left = a.field_value(field).unwrap_or_default().to_lowercase();
    let right = b.field_value(field).unwrap_or_default().to_lowercase();
    left.cmp(&right)
}

/// Filter, sort and slice `items` into the requested page.
///
/// Pure: identical inputs always give identical rows in identical order.
/// The sort is stable, so equal keys keep their backend order.
pub fn compute_visible<'a, T: ListEntity>(
    items: &'a [T],
    descriptor: &ListDescriptor,
    criteria: &ListCriteria,
    page: usize,
) -> VisiblePage<'a, T> {
    let mut filtered: Vec<&T> = items
        .iter()
        .filter(|item| matches_criteria(*item, descriptor, criteria))
        .collect();

    if let Some(sort) = criteria
        .sort
        .as_ref()
        .filter(|sort| descriptor.is_sortable(&sort.key))
    {
        filtered.sort_by(|a, b| {
            let cmp = compare_by_field(*a, *b, &sort.key);
            match sort.direction {
                SortDirection::Asc => cmp,
                SortDirection::Desc => cmp.reverse(),
            }
        });
    }

    let page_size = descriptor.page_size();
    let filtered_count = filtered.len();
    let total_pages = total_pages(filtered_count, page_size);
    let page = page.clamp(1, total_pages);
    let rows = filtered
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    VisiblePage {
        rows,
        page,
        total_pages,
        filtered_count,
    }
}
