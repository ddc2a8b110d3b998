pub mod api;
pub mod context;
pub mod guard;

pub use context::{do_login, do_logout, use_auth, AuthContext, AuthProvider};
pub use guard::RequireAuth;
