//! Confirmation dialog
//!
//! `ConfirmService` lives in context; any page calls `ask` with the dialog
//! texts and a callback receiving the user's answer. `ConfirmHost` renders
//! the single Thaw dialog for the whole app.

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ConfirmIcon {
    #[default]
    Question,
    Warning,
}

impl ConfirmIcon {
    fn icon_name(self) -> &'static str {
        match self {
            ConfirmIcon::Question => "help-circle",
            ConfirmIcon::Warning => "alert-triangle",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmOptions {
    pub title: String,
    pub text: String,
    pub icon: ConfirmIcon,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: String::new(),
            icon: ConfirmIcon::default(),
            confirm_label: "Aceptar".to_string(),
            cancel_label: "Cancelar".to_string(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_icon(mut self, icon: ConfirmIcon) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    pub fn with_cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = label.into();
        self
    }
}

#[derive(Clone)]
struct PendingConfirm {
    options: ConfirmOptions,
    on_result: Rc<dyn Fn(bool)>,
}

/// Schedules a confirm callback; the dialog uses the next browser tick
pub type Defer = fn(Box<dyn FnOnce()>);

/// Run on the next tick so the dialog finishes closing before the callback
/// starts network work or opens other UI.
fn defer_next_tick(task: Box<dyn FnOnce()>) {
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        task();
    });
}

#[derive(Clone, Copy)]
pub struct ConfirmService {
    pending: RwSignal<Option<PendingConfirm>, LocalStorage>,
    open: RwSignal<bool>,
    defer: Defer,
}

impl ConfirmService {
    pub fn new() -> Self {
        Self::with_defer(defer_next_tick)
    }

    pub fn with_defer(defer: Defer) -> Self {
        Self {
            pending: RwSignal::new_local(None),
            open: RwSignal::new(false),
            defer,
        }
    }

    fn answer(&self, pending: PendingConfirm, confirmed: bool) {
        (self.defer)(Box::new(move || (pending.on_result)(confirmed)));
    }

    /// Show the dialog. A previous unanswered request counts as cancelled.
    pub fn ask(&self, options: ConfirmOptions, on_result: impl Fn(bool) + 'static) {
        if let Some(previous) = self.pending.get_untracked() {
            self.answer(previous, false);
        }
        self.pending.set(Some(PendingConfirm {
            options,
            on_result: Rc::new(on_result),
        }));
        self.open.set(true);
    }

    /// Close the dialog and hand the answer to the caller
    pub fn resolve(&self, confirmed: bool) {
        self.open.set(false);
        let Some(pending) = self.pending.get_untracked() else {
            return;
        };
        self.pending.set(None);
        self.answer(pending, confirmed);
    }

    /// Dialog closed through the overlay or Escape
    pub fn dismissed(&self) {
        if self.pending.with_untracked(|p| p.is_some()) {
            self.resolve(false);
        }
    }

    fn options(&self) -> Option<ConfirmOptions> {
        self.pending.with(|p| p.as_ref().map(|p| p.options.clone()))
    }
}

impl Default for ConfirmService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_confirm() -> ConfirmService {
    use_context::<ConfirmService>().expect("ConfirmService not found in context")
}

#[component]
pub fn ConfirmHost() -> impl IntoView {
    let service = use_confirm();
    let open = service.open;

    // Closing through the overlay or Escape is an implicit "cancel".
    Effect::new(move |_| {
        if !open.get() {
            service.dismissed();
        }
    });

    let title = move || service.options().map(|o| o.title).unwrap_or_default();
    let text = move || service.options().map(|o| o.text).unwrap_or_default();
    let icon_name = move || {
        service
            .options()
            .map(|o| o.icon)
            .unwrap_or_default()
            .icon_name()
    };
    let confirm_label = move || {
        service
            .options()
            .map(|o| o.confirm_label)
            .unwrap_or_default()
    };
    let cancel_label = move || {
        service
            .options()
            .map(|o| o.cancel_label)
            .unwrap_or_default()
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        <div class="confirm-dialog">
                            <span class="confirm-dialog__icon">{move || icon(icon_name())}</span>
                            <span class="confirm-dialog__text">{text}</span>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| service.resolve(true)
                        >
                            {confirm_label}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| service.resolve(false)
                        >
                            {cancel_label}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn run_now(task: Box<dyn FnOnce()>) {
        task();
    }

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, impl Fn(bool) + 'static) {
        let answers = Rc::new(RefCell::new(Vec::new()));
        let sink = answers.clone();
        (answers, move |confirmed| sink.borrow_mut().push(confirmed))
    }

    #[test]
    fn test_confirmed_request_gets_true() {
        let service = ConfirmService::with_defer(run_now);
        let (answers, on_result) = recorder();
        service.ask(ConfirmOptions::new("x"), on_result);
        assert!(service.open.get_untracked());

        service.resolve(true);
        assert_eq!(*answers.borrow(), vec![true]);
        assert!(!service.open.get_untracked());
        assert!(service.options().is_none());
    }

    #[test]
    fn test_cancelled_request_gets_false() {
        let service = ConfirmService::with_defer(run_now);
        let (answers, on_result) = recorder();
        service.ask(ConfirmOptions::new("x"), on_result);

        service.resolve(false);
        assert_eq!(*answers.borrow(), vec![false]);
    }

    #[test]
    fn test_dismissed_dialog_counts_as_cancel() {
        let service = ConfirmService::with_defer(run_now);
        let (answers, on_result) = recorder();
        service.ask(ConfirmOptions::new("x"), on_result);

        service.dismissed();
        // Nothing pending any more, so a second close is a no-op.
        service.dismissed();
        assert_eq!(*answers.borrow(), vec![false]);
    }

    #[test]
    fn test_replaced_request_is_cancelled() {
        let service = ConfirmService::with_defer(run_now);
        let (first, on_first) = recorder();
        let (second, on_second) = recorder();
        service.ask(ConfirmOptions::new("first"), on_first);
        service.ask(ConfirmOptions::new("second"), on_second);
        assert_eq!(*first.borrow(), vec![false]);
        assert_eq!(service.options().map(|o| o.title).as_deref(), Some("second"));

        service.resolve(true);
        assert_eq!(*first.borrow(), vec![false]);
        assert_eq!(*second.borrow(), vec![true]);
    }

    #[test]
    fn test_resolve_without_request_does_nothing() {
        let service = ConfirmService::with_defer(run_now);
        service.resolve(true);
        assert!(!service.open.get_untracked());
    }

    #[test]
    fn test_options_builder() {
        let options = ConfirmOptions::new("¿Seguro?")
            .with_text("No se puede deshacer")
            .with_icon(ConfirmIcon::Warning)
            .with_confirm_label("Eliminar");
        assert_eq!(options.title, "¿Seguro?");
        assert_eq!(options.text, "No se puede deshacer");
        assert_eq!(options.icon, ConfirmIcon::Warning);
        assert_eq!(options.confirm_label, "Eliminar");
        assert_eq!(options.cancel_label, "Cancelar");
    }

    #[test]
    fn test_default_icon_is_question() {
        let options = ConfirmOptions::new("x");
        assert_eq!(options.icon.icon_name(), "help-circle");
    }
}
