use crate::shared::icons::icon;
use leptos::prelude::*;

/// Numbered pagination: Anterior / 1 2 3 / Próxima.
///
/// Hidden when everything fits on one page.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get_untracked().saturating_sub(1))
                    disabled=move || current_page.get() <= 1
                >
                    {icon("chevron-left")}
                    "Anterior"
                </button>
                {move || {
                    (1..=total_pages.get())
                        .map(|page| {
                            view! {
                                <button
                                    class=move || {
                                        if current_page.get() == page {
                                            "pagination-btn pagination-btn--active"
                                        } else {
                                            "pagination-btn"
                                        }
                                    }
                                    on:click=move |_| on_page_change.run(page)
                                >
                                    {page.to_string()}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get_untracked() + 1)
                    disabled=move || current_page.get() >= total_pages.get()
                >
                    "Próxima"
                    {icon("chevron-right")}
                </button>
            </nav>
        </Show>
    }
}
