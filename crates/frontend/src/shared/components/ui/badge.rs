use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Swatch of an ingredient color with its hex code
#[component]
pub fn ColorBadge(
    #[prop(into)]
    color: String,
    #[prop(into)]
    text_color: String,
) -> impl IntoView {
    let style = format!("background-color: {}; color: {};", color, text_color);
    view! {
        <span class="badge badge--color" style=style>
            {color.clone()}
        </span>
    }
}
