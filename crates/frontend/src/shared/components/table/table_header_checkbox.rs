//! "Select all on this page" checkbox for a table header

use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Header checkbox with three states.
///
/// Checked when every visible row is selected, indeterminate when only some are.
#[component]
pub fn TableHeaderCheckbox(
    /// Ids of the rows currently rendered
    #[prop(into)]
    visible_ids: Signal<Vec<String>>,

    /// How many of `visible_ids` are selected
    #[prop(into)]
    selected_visible: Signal<usize>,

    /// true = select every visible row, false = deselect them
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_state = Signal::derive(move || {
        let total = visible_ids.with(|ids| ids.len());
        let selected = selected_visible.get();
        if total == 0 || selected == 0 {
            CheckboxState::Unchecked
        } else if selected >= total {
            CheckboxState::Checked
        } else {
            CheckboxState::Indeterminate
        }
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        let state = checkbox_state.get();
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(matches!(state, CheckboxState::Indeterminate));
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(checkbox_state.get(), CheckboxState::Checked)
                prop:disabled=move || visible_ids.with(|ids| ids.is_empty())
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}
