use crate::routes::routes::AppRoutes;
use crate::shared::confirm::{ConfirmHost, ConfirmService};
use crate::shared::config::AppConfig;
use leptos::prelude::*;
use thaw::{ConfigProvider, ToasterProvider};

#[component]
pub fn App() -> impl IntoView {
    // Pages show the active API source from here.
    provide_context(AppConfig::load());

    // Delete confirmations go through a single dialog host.
    provide_context(ConfirmService::new());

    view! {
        <ConfigProvider>
            <ToasterProvider>
                <AppRoutes />
                <ConfirmHost />
            </ToasterProvider>
        </ConfigProvider>
    }
}
