use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::view::RecipeDetails;
use crate::shared::navigation::use_navigator;

/// `/create`
#[component]
pub fn RecipeCreatePage() -> impl IntoView {
    let navigator = use_navigator();
    let back = Callback::new(move |_: ()| navigator.go("/dashboard"));

    view! {
        <div class="page page--details">
            <RecipeDetails id=None on_saved=back on_cancel=back on_missing=back />
        </div>
    }
}

/// `/edit/:id`
#[component]
pub fn RecipeEditPage() -> impl IntoView {
    let params = use_params_map();
    let navigator = use_navigator();
    let back = Callback::new(move |_: ()| navigator.go("/dashboard"));

    view! {
        <div class="page page--details">
            {move || {
                let id = params.with(|p| p.get("id"));
                view! { <RecipeDetails id=id on_saved=back on_cancel=back on_missing=back /> }
            }}
        </div>
    }
}
