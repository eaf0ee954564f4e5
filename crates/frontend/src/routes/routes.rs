use crate::domain::a001_category::ui::list::CategoryList;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Página no encontrada"</h1>
            </div>
            <div class="page__content">
                <a href="/">"Volver a categorías"</a>
            </div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=CategoryList />
                </Routes>
            </main>
        </Router>
    }
}
