use contracts::system::auth::SessionUser;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

/// Session state shared through context.
///
/// `loading` stays true until the first `/auth/me` answer arrives.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub user: RwSignal<Option<SessionUser>>,
    pub loading: RwSignal<bool>,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        self.user.with(Option::is_some)
    }

    pub fn is_admin(&self) -> bool {
        self.user
            .with(|user| user.as_ref().map(SessionUser::is_admin).unwrap_or(false))
    }

    pub fn display_name(&self) -> String {
        self.user.with(|user| {
            user.as_ref()
                .map(|u| u.display_name().to_string())
                .unwrap_or_default()
        })
    }

    /// Re-reads the session user from the backend cookie
    pub async fn refresh(self) {
        match api::get_current_user().await {
            Ok(user) => {
                log::info!("Session restored for {}", user.email);
                self.user.set(Some(user));
            }
            Err(e) => {
                log::debug!("No active session: {}", e);
                self.user.set(None);
            }
        }
        self.loading.set(false);
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext {
        user: RwSignal::new(None),
        loading: RwSignal::new(true),
    };

    // Restore the session from the cookie on mount
    Effect::new(move |_| {
        spawn_local(auth.refresh());
    });

    provide_context(auth);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}

/// Logs in and loads the session user.
///
/// Takes the context explicitly: it is not reachable after an `.await`.
pub async fn do_login(auth: AuthContext, email: String, password: String) -> Result<(), String> {
    api::login(email, password).await?;
    auth.refresh().await;
    if auth.user.get_untracked().is_none() {
        return Err("Erro ao autenticar".to_string());
    }
    log::info!("Login succeeded");
    Ok(())
}

/// Ends the session; the local state is cleared even if the request fails
pub async fn do_logout(auth: AuthContext) {
    if let Err(e) = api::logout().await {
        log::warn!("Logout request failed: {}", e);
    }
    auth.user.set(None);
    log::info!("Logged out");
}
