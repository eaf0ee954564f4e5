use crate::domain::a001_category::api::{self, GENERIC_ERROR_MESSAGE};
use crate::shared::notify::NotifierHandle;
use contracts::domain::a001_category::aggregate::{Category, CategoryDto, FormMode};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the shared category modal
#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    api_base: StoredValue<String>,
    pub form: RwSignal<CategoryDto>,
    pub open: RwSignal<bool>,
    pub is_saving: RwSignal<bool>,
}

impl CategoryDetailsViewModel {
    pub fn new(api_base: StoredValue<String>) -> Self {
        Self {
            api_base,
            form: RwSignal::new(CategoryDto::default()),
            open: RwSignal::new(false),
            is_saving: RwSignal::new(false),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.form.with(|f| f.mode())
    }

    /// Open with an empty buffer
    pub fn open_create(&self) {
        self.form.set(CategoryDto::default());
        self.open.set(true);
    }

    /// Open pre-filled with an existing record
    pub fn open_edit(&self, category: &Category) {
        self.form.set(category.to_dto());
        self.open.set(true);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    /// Validate and send the single request for the current buffer.
    ///
    /// Blank fields raise a warning toast and nothing is sent. On success the
    /// modal closes and `on_saved` runs (list refetch).
    pub fn save_command(&self, notifier: NotifierHandle, on_saved: Callback<()>) {
        if self.is_saving.get_untracked() {
            return;
        }

        let command = match self.form.get_untracked().plan_submission() {
            Ok(command) => command,
            Err(e) => {
                log::warn!("Category form rejected: {e}");
                notifier.with_value(|n| n.warning(e.to_string()));
                return;
            }
        };

        let vm = *self;
        vm.is_saving.set(true);
        spawn_local(async move {
            let base = vm.api_base.get_value();
            let result = api::execute(&base, &command).await;
            vm.is_saving.set(false);
            match result {
                Ok(()) => {
                    notifier.with_value(|n| n.success(command.success_message()));
                    vm.close();
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to save category: {e}");
                    notifier.with_value(|n| n.error(e.user_message(GENERIC_ERROR_MESSAGE)));
                }
            }
        });
    }
}
