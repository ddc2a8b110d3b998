use crate::domain::a001_recipe::ui::details::{RecipeCreatePage, RecipeEditPage};
use crate::domain::a001_recipe::ui::list::RecipesListPage;
use crate::domain::a002_ingredient::ui::list::IngredientsListPage;
use crate::layout::Shell;
use crate::system::auth::{use_auth, RequireAuth};
use crate::system::pages::account_activated::AccountActivatedPage;
use crate::system::pages::activate::ActivatePage;
use crate::system::pages::forgot_password::ForgotPasswordPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;
use crate::system::pages::resend_activation::ResendActivationPage;
use crate::system::pages::reset_password::ResetPasswordPage;
use crate::system::users::ui::details::{UserCreatePage, UserEditPage};
use crate::system::users::ui::list::UsersListPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Router>
            <Show
                when=move || !auth.loading.get()
                fallback=|| view! { <p class="loading">"A carregar..."</p> }
            >
                <Shell>
                    <Routes fallback=|| view! { <Redirect path="/login" /> }>
                        // Public
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/register") view=RegisterPage />
                        <Route path=path!("/activate") view=ActivatePage />
                        <Route path=path!("/account-activated") view=AccountActivatedPage />
                        <Route path=path!("/resend-activation") view=ResendActivationPage />
                        <Route path=path!("/forgot-password") view=ForgotPasswordPage />
                        <Route path=path!("/reset-password/:token") view=ResetPasswordPage />

                        // Signed-in only
                        <Route
                            path=path!("/dashboard")
                            view=|| view! { <RequireAuth><RecipesListPage /></RequireAuth> }
                        />
                        <Route
                            path=path!("/create")
                            view=|| view! { <RequireAuth><RecipeCreatePage /></RequireAuth> }
                        />
                        <Route
                            path=path!("/edit/:id")
                            view=|| view! { <RequireAuth><RecipeEditPage /></RequireAuth> }
                        />
                        <Route
                            path=path!("/ingredientes")
                            view=|| view! { <RequireAuth><IngredientsListPage /></RequireAuth> }
                        />
                        <Route
                            path=path!("/users")
                            view=|| view! { <RequireAuth><UsersListPage /></RequireAuth> }
                        />
                        <Route
                            path=path!("/users/create")
                            view=|| view! { <RequireAuth><UserCreatePage /></RequireAuth> }
                        />
                        <Route
                            path=path!("/users/edit/:id")
                            view=|| view! { <RequireAuth><UserEditPage /></RequireAuth> }
                        />
                    </Routes>
                </Shell>
            </Show>
        </Router>
    }
}
