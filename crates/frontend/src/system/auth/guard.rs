use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

/// Renders its children only for a signed-in user.
///
/// Nothing is rendered while the session is loading; without a user it
/// redirects to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let signed_in = Memo::new(move |_| auth.is_authenticated());

    move || {
        if auth.loading.get() {
            ().into_any()
        } else if signed_in.get() {
            children().into_any()
        } else {
            view! { <Redirect path="/login" /> }.into_any()
        }
    }
}
