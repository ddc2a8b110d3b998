//! Clickable header cell that drives the list sort

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::list_view::SortSpec;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Sort key sent to `on_sort`
    #[prop(into)]
    sort_field: String,

    #[prop(into)]
    current_sort: Signal<Option<SortSpec>>,

    on_sort: Callback<String>,

    #[prop(optional, default = 120.0)]
    min_width: f64,
) -> impl IntoView {
    let field_for_click = sort_field.clone();
    let field_for_class = sort_field.clone();

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                on:click=move |_| on_sort.run(field_for_click.clone())
            >
                {label}
                <span class=move || current_sort.with(|sort| get_sort_class(sort.as_ref(), &field_for_class))>
                    {move || current_sort.with(|sort| get_sort_indicator(sort.as_ref(), &sort_field))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
