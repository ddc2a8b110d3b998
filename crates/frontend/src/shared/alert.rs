//! Transient alert banner shared by list and form screens

use crate::shared::config::config;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
    Info,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Success => "alert alert--success",
            AlertKind::Danger => "alert alert--danger",
            AlertKind::Info => "alert alert--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

/// Copyable handle; a newer alert replaces the current one and restarts the timer
#[derive(Clone, Copy)]
pub struct AlertState {
    current: RwSignal<Option<Alert>>,
    generation: RwSignal<u64>,
}

impl AlertState {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(AlertKind::Success, message.into());
    }

    pub fn danger(&self, message: impl Into<String>) {
        self.show(AlertKind::Danger, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(AlertKind::Info, message.into());
    }

    pub fn show(&self, kind: AlertKind, message: String) {
        self.current.set(Some(Alert { kind, message }));
        // The screen may already be gone when a request finishes
        let Some(generation) = self.generation.try_update(|g| {
            *g += 1;
            *g
        }) else {
            return;
        };

        let current = self.current;
        let generation_signal = self.generation;
        let timeout_ms = config().ui.alert_timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            if generation_signal.try_get_untracked() == Some(generation) {
                current.set(None);
            }
        });
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    pub fn get(&self) -> Option<Alert> {
        self.current.get()
    }
}

impl Default for AlertState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn AlertBanner(state: AlertState) -> impl IntoView {
    move || {
        state.get().map(|alert| {
            view! {
                <div class=alert.kind.class() role="alert">
                    <span class="alert__message">{alert.message}</span>
                    <button
                        class="alert__close"
                        title="Fechar"
                        on:click=move |_| state.dismiss()
                    >
                        {icon("x")}
                    </button>
                </div>
            }
        })
    }
}
