pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

use crate::system::auth::use_auth;

/// Application frame: the navigation bar (signed-in users only) above the
/// routed content.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |               Content                     |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="app-layout">
            <Show when=move || auth.is_authenticated()>
                <TopHeader />
            </Show>
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
