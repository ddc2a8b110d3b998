//! Client-side list view-model shared by every entity list screen.
//!
//! One generic engine (filter, sort, paginate, multi-select) configured per
//! entity kind by a const [`ListDescriptor`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::list_view::{FilterCriterion, ListViewModel, StatusFilter};
//!
//! let mut vm = ListViewModel::new(INGREDIENT_LIST);
//! vm.set_items(ingredients);
//! vm.set_filter(FilterCriterion::Status(StatusFilter::Active));
//! let rows = vm.page_rows();
//! ```

mod compute;
mod criteria;
mod descriptor;
mod view_model;

pub use compute::{compare_by_field, compute_visible, matches_criteria, total_pages, VisiblePage};
pub use criteria::{FilterCriterion, ListCriteria, SortDirection, SortSpec, StatusFilter};
pub use descriptor::{ListDescriptor, ListEntity};
pub use view_model::ListViewModel;
