//! Toast notifications
//!
//! Thin wrapper over the Thaw toaster. Must be created inside
//! `ToasterProvider` (see `app.rs`).

use leptos::prelude::*;
use thaw::{
    Toast, ToastBody, ToastIntent, ToastOptions, ToastPosition, ToastTitle, ToasterInjection,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotifyKind {
    pub fn title(self) -> &'static str {
        match self {
            NotifyKind::Success => "Éxito",
            NotifyKind::Error => "Error",
            NotifyKind::Warning => "Atención",
            NotifyKind::Info => "Información",
        }
    }

    fn intent(self) -> ToastIntent {
        match self {
            NotifyKind::Success => ToastIntent::Success,
            NotifyKind::Error => ToastIntent::Error,
            NotifyKind::Warning => ToastIntent::Warning,
            NotifyKind::Info => ToastIntent::Info,
        }
    }
}

#[derive(Clone)]
pub struct Notifier {
    toaster: ToasterInjection,
}

impl Notifier {
    pub fn expect_context() -> Self {
        Self {
            toaster: ToasterInjection::expect_context(),
        }
    }

    pub fn show(&self, kind: NotifyKind, message: impl Into<String>) {
        let message = message.into();
        let title = kind.title();
        self.toaster.dispatch_toast(
            move || {
                view! {
                    <Toast>
                        <ToastTitle>{title}</ToastTitle>
                        <ToastBody>{message}</ToastBody>
                    </Toast>
                }
            },
            ToastOptions::default()
                .with_intent(kind.intent())
                .with_position(ToastPosition::TopEnd),
        );
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NotifyKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NotifyKind::Error, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(NotifyKind::Warning, message);
    }
}

/// Notifier handle that can be captured by `Send` closures (thaw buttons, reactive views)
pub type NotifierHandle = StoredValue<Notifier, LocalStorage>;

pub fn use_notifier() -> NotifierHandle {
    StoredValue::new_local(Notifier::expect_context())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_are_distinct() {
        let titles = [
            NotifyKind::Success.title(),
            NotifyKind::Error.title(),
            NotifyKind::Warning.title(),
            NotifyKind::Info.title(),
        ];
        for (i, a) in titles.iter().enumerate() {
            for b in titles.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_intent_mapping() {
        assert!(matches!(NotifyKind::Success.intent(), ToastIntent::Success));
        assert!(matches!(NotifyKind::Warning.intent(), ToastIntent::Warning));
        assert!(matches!(NotifyKind::Error.intent(), ToastIntent::Error));
    }
}
