/// List helpers shared by the list screens (highlighting, sort indicators, search input)
use contracts::shared::list_view::{SortDirection, SortSpec};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Byte ranges of every case-insensitive occurrence of `filter` in `text`.
///
/// Returns `None` when lowercasing changes byte offsets (some accented
/// characters do), in which case callers render the text unhighlighted.
pub fn match_ranges(text: &str, filter: &str) -> Option<Vec<(usize, usize)>> {
    let filter_lower = filter.trim().to_lowercase();
    if filter_lower.is_empty() {
        return Some(Vec::new());
    }

    let text_lower = text.to_lowercase();
    if text_lower.len() != text.len()
        || text
            .chars()
            .zip(text_lower.chars())
            .any(|(a, b)| a.len_utf8() != b.len_utf8())
    {
        return None;
    }

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = text_lower[from..].find(&filter_lower) {
        let start = from + pos;
        let end = start + filter_lower.len();
        ranges.push((start, end));
        from = end;
    }
    Some(ranges)
}

/// Case-insensitive highlight of `filter` inside `text`
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match match_ranges(text, filter) {
        Some(ranges) if !ranges.is_empty() => ranges,
        _ => return view! { <span>{text.to_string()}</span> }.into_any(),
    };

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;
    for (start, end) in ranges {
        if start > last {
            parts.push(view! { <span>{text[last..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="list__highlight">{text[start..end].to_string()}</mark> }.into_any());
        last = end;
    }
    if last < text.len() {
        parts.push(view! { <span>{text[last..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Sort indicator for a header cell
pub fn get_sort_indicator(current: Option<&SortSpec>, field: &str) -> &'static str {
    match current {
        Some(sort) if sort.key == field => match sort.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => " ⇅",
    }
}

pub fn get_sort_class(current: Option<&SortSpec>, field: &str) -> &'static str {
    match current {
        Some(sort) if sort.key == field => "table__sort-indicator table__sort-indicator--active",
        _ => "table__sort-indicator",
    }
}

/// Text filter input with a short debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Pesquisar...".to_string()
    } else {
        placeholder
    };

    let pending = StoredValue::new_local(None::<Timeout>);

    let schedule = move |text: String| {
        // Dropping a gloo Timeout cancels it
        pending.set_value(Some(Timeout::new(250, move || on_change.run(text))));
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| schedule(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="Limpar"
                    on:click=move |_| {
                        pending.set_value(None);
                        on_change.run(String::new());
                    }
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Bolo de Bolacha", "bol"), Some(vec![(0, 3), (8, 11)]));
        assert_eq!(match_ranges("Sopa", "xyz"), Some(vec![]));
        assert_eq!(match_ranges("Sopa", "  "), Some(vec![]));
    }

    #[test]
    fn test_match_ranges_with_accents() {
        // Lowercasing keeps byte widths here
        assert_eq!(match_ranges("Pão de Ló", "ló"), Some(vec![(8, 11)]));
        // 'İ' lowercases to two chars, offsets would drift
        assert_eq!(match_ranges("İstanbul", "stan"), None);
    }

    #[test]
    fn test_sort_indicator() {
        let sort = SortSpec::new("name", SortDirection::Desc);
        assert_eq!(get_sort_indicator(Some(&sort), "name"), " ▼");
        assert_eq!(get_sort_indicator(Some(&sort), "email"), " ⇅");
        assert_eq!(get_sort_indicator(None, "name"), " ⇅");
    }
}
