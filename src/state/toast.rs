//! Toast notification state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session and CRUD operations surface their outcome as at most one toast
//! per call. The `ToastHost` component renders this stack; in the browser
//! each toast auto-dismisses after a short delay.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// How long a toast stays on screen before auto-dismissing.
#[cfg(feature = "hydrate")]
const TOAST_TTL: std::time::Duration = std::time::Duration::from_secs(4);

/// Visual class of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single visible notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    /// Unique id used for dismissal.
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

/// The ordered stack of visible toasts.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: &str) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast {
            id: id.clone(),
            kind,
            message: message.to_owned(),
        });
        id
    }

    /// Remove the toast with `id`, if still present.
    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Copyable handle to the toast stack, provided via context.
#[derive(Clone, Copy)]
pub struct Toasts(RwSignal<ToastState>);

impl Toasts {
    pub fn new() -> Self {
        Self(RwSignal::new(ToastState::default()))
    }

    /// Reactive read of the current stack.
    pub fn read(&self) -> ToastState {
        self.0.get()
    }

    pub fn success(&self, message: &str) {
        self.show(ToastKind::Success, message);
    }

    pub fn error(&self, message: &str) {
        self.show(ToastKind::Error, message);
    }

    pub fn dismiss(&self, id: &str) {
        self.0.update(|s| s.dismiss(id));
    }

    fn show(&self, kind: ToastKind, message: &str) {
        let id = self.0.try_update(|s| s.push(kind, message)).unwrap_or_default();
        #[cfg(feature = "hydrate")]
        {
            let toasts = *self;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(TOAST_TTL).await;
                toasts.dismiss(&id);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}
