use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::view::UserDetails;
use crate::shared::navigation::use_navigator;

/// `/users/create`
#[component]
pub fn UserCreatePage() -> impl IntoView {
    let navigator = use_navigator();
    let back = Callback::new(move |_: ()| navigator.go("/users"));

    view! {
        <div class="page page--details">
            <UserDetails id=None on_saved=back on_cancel=back on_missing=back />
        </div>
    }
}

/// `/users/edit/:id`
#[component]
pub fn UserEditPage() -> impl IntoView {
    let params = use_params_map();
    let navigator = use_navigator();
    let back = Callback::new(move |_: ()| navigator.go("/users"));

    view! {
        <div class="page page--details">
            {move || {
                let id = params.with(|p| p.get("id"));
                view! { <UserDetails id=id on_saved=back on_cancel=back on_missing=back /> }
            }}
        </div>
    }
}
