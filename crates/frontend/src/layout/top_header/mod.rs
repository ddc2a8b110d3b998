//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Brand
//! - Links to the recipe, ingredient and user screens
//! - Current user name and logout

use crate::shared::icons::icon;
use crate::shared::navigation::use_navigator;
use crate::system::auth::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

#[component]
pub fn TopHeader() -> impl IntoView {
    let auth = use_auth();
    let navigator = use_navigator();

    let logout = move |_| {
        spawn_local(async move {
            do_logout(auth).await;
            navigator.go("/login");
        });
    };

    view! {
        <nav class="top-header">
            <div class="top-header__brand">
                <A href="/dashboard" attr:class="top-header__title">"Backoffice"</A>
            </div>

            <div class="top-header__links">
                <A href="/dashboard" attr:class="top-header__link">
                    {icon("recipes")}
                    <span>"Receitas"</span>
                </A>
                <A href="/ingredientes" attr:class="top-header__link">
                    {icon("ingredients")}
                    <span>"Ingredientes"</span>
                </A>
                <A href="/users" attr:class="top-header__link">
                    {icon("users")}
                    <span>"Utilizadores"</span>
                </A>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {move || format!("Welcome, {}", auth.display_name())}
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Sair">
                    {icon("logout")}
                    <span>"Sair"</span>
                </button>
            </div>
        </nav>
    }
}
