use crate::shared::config::config;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

/// Copyable navigation handle.
///
/// `use_navigate` returns a closure that is neither `Copy` nor `Send`, so
/// screens write the target path into a signal and a single effect performs
/// the actual navigation.
#[derive(Clone, Copy)]
pub struct Navigator {
    target: RwSignal<Option<String>>,
}

impl Navigator {
    pub fn go(&self, path: impl Into<String>) {
        self.target.set(Some(path.into()));
    }

    /// Navigates after the configured redirect delay
    pub fn go_later(&self, path: impl Into<String>) {
        self.go_after(path, config().ui.redirect_delay_ms);
    }

    pub fn go_after(&self, path: impl Into<String>, delay_ms: u32) {
        let path = path.into();
        let target = self.target;
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            // Ignored when the screen was unmounted in the meantime
            let _ = target.try_set(Some(path));
        });
    }
}

/// Must be called inside a `<Router>`
pub fn use_navigator() -> Navigator {
    let target = RwSignal::new(None::<String>);
    let navigate = use_navigate();

    Effect::new(move |_| {
        target.track();
        if let Some(path) = target.try_update_untracked(|t| t.take()).flatten() {
            log::debug!("Navigating to {}", path);
            navigate(&path, Default::default());
        }
    });

    Navigator { target }
}
