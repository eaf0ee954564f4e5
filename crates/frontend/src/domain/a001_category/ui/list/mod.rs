pub mod state;

use self::state::{build_rows, create_state, CategoryListState};
use crate::domain::a001_category::api;
use crate::domain::a001_category::ui::details::{CategoryDetails, CategoryDetailsViewModel};
use crate::shared::config::use_api_base;
use crate::shared::confirm::{use_confirm, ConfirmIcon, ConfirmOptions, ConfirmService};
use crate::shared::icons::icon;
use crate::shared::notify::{use_notifier, NotifierHandle, NotifyKind};
use contracts::domain::a001_category::aggregate::{Category, CategoryId};
use contracts::domain::a001_category::commands::delete_plan;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;

const FETCH_ERROR_MESSAGE: &str = "Error al obtener categorías";

fn delete_confirm_options() -> ConfirmOptions {
    ConfirmOptions::new("¿Está seguro de eliminar la categoría?")
        .with_text("La categoría se eliminará de forma permanente")
        .with_icon(ConfirmIcon::Question)
        .with_confirm_label("Eliminar")
        .with_cancel_label("Cancelar")
}

/// Load the whole list, replacing what is cached
fn fetch(
    api_base: StoredValue<String>,
    state: RwSignal<CategoryListState>,
    notifier: NotifierHandle,
    announce: bool,
) {
    state.update(|s| s.is_loading = true);
    spawn_local(async move {
        let base = api_base.get_value();
        match api::fetch_categories(&base).await {
            Ok(items) => {
                log::info!("Loaded {} categories", items.len());
                let count = items.len();
                state.update(|s| {
                    s.items = items;
                    s.is_loaded = true;
                    s.is_loading = false;
                    s.error = None;
                });
                if announce {
                    notifier.with_value(|n| {
                        n.show(NotifyKind::Info, format!("Lista actualizada: {count}"))
                    });
                }
            }
            Err(e) => {
                log::error!("{FETCH_ERROR_MESSAGE}: {e}");
                state.update(|s| {
                    s.is_loading = false;
                    s.error = Some(format!("{FETCH_ERROR_MESSAGE}: {e}"));
                });
                notifier.with_value(|n| n.error(FETCH_ERROR_MESSAGE));
            }
        }
    });
}

/// Ask for confirmation, then issue one DELETE and refetch on success
fn request_delete(
    id: CategoryId,
    confirm: ConfirmService,
    api_base: StoredValue<String>,
    state: RwSignal<CategoryListState>,
    notifier: NotifierHandle,
) {
    confirm.ask(delete_confirm_options(), move |confirmed| {
        let Some(command) = delete_plan(confirmed, id) else {
            return;
        };
        spawn_local(async move {
            let base = api_base.get_value();
            match api::execute(&base, &command).await {
                Ok(()) => {
                    notifier.with_value(|n| n.success(command.success_message()));
                    fetch(api_base, state, notifier, false);
                }
                Err(e) => {
                    log::error!("Failed to delete category {}: {e}", id.value());
                    notifier.with_value(|n| {
                        n.error(e.user_message(api::GENERIC_ERROR_MESSAGE))
                    });
                }
            }
        });
    });
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let state = create_state();
    let notifier = use_notifier();
    let api_base = use_api_base();
    let details = CategoryDetailsViewModel::new(api_base);
    let confirm = use_confirm();
    let source = api_base.get_value();

    let on_saved: Callback<()> = Callback::new(move |_| fetch(api_base, state, notifier, false));

    let on_delete =
        move |id: CategoryId| request_delete(id, confirm, api_base, state, notifier);

    fetch(api_base, state, notifier, false);

    view! {
        <div id="a001_category--list" class="page container" data-page-category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{format!("Lista de {}", Category::list_name())}</h1>
                    <span class="badge badge--primary">
                        {move || state.with(|s| s.items.len()).to_string()}
                    </span>
                </div>
                <div class="page__header-right">
                    <button
                        class="button button--primary"
                        on:click=move |_| details.open_create()
                    >
                        {icon("plus")}
                        {format!("Agregar {}", Category::element_name())}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| fetch(api_base, state, notifier, true)
                        disabled=move || state.with(|s| s.is_loading)
                    >
                        {icon("refresh")}
                        {move || if state.with(|s| s.is_loading) { "Cargando..." } else { "Actualizar" }}
                    </button>
                </div>
            </div>

            <div class="page__content">
                <div class="page__source">{format!("Fuente: {source}")}</div>

                {move || state.with(|s| s.error.clone()).map(|e| view! {
                    <div class="alert alert--error">{e}</div>
                })}

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"#"}</th>
                                <th class="table__header-cell">{"Nombre"}</th>
                                <th class="table__header-cell">{"Imagen"}</th>
                                <th class="table__header-cell">{"Actualizado"}</th>
                                <th class="table__header-cell">{"Acciones"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = state.with(|s| build_rows(&s.items));
                                if rows.is_empty() {
                                    let text = if state.with(|s| s.is_loaded) {
                                        "No hay categorías"
                                    } else {
                                        "Cargando..."
                                    };
                                    return view! {
                                        <tr class="table__row">
                                            <td class="table__cell table__cell--empty" colspan="5">{text}</td>
                                        </tr>
                                    }
                                    .into_any();
                                }
                                rows.into_iter()
                                    .map(|row| {
                                        let for_edit = row.category.clone();
                                        let id = row.category.id;
                                        view! {
                                            <tr class="table__row" data-id=row.key>
                                                <td class="table__cell">{row.index}</td>
                                                <td class="table__cell">{row.name}</td>
                                                <td class="table__cell">
                                                    <img
                                                        src=row.image
                                                        alt="imagen"
                                                        class="image"
                                                        style="max-width: 100px; max-height: 100px;"
                                                    />
                                                </td>
                                                <td class="table__cell">{row.updated_at}</td>
                                                <td class="table__cell table__cell--actions">
                                                    <button
                                                        class="button button--warning"
                                                        on:click=move |_| details.open_edit(&for_edit)
                                                    >
                                                        {icon("edit")}
                                                        {"Editar"}
                                                    </button>
                                                    <button
                                                        class="button button--danger"
                                                        on:click=move |_| on_delete(id)
                                                    >
                                                        {icon("delete")}
                                                        {"Eliminar"}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>

            <CategoryDetails vm=details notifier=notifier on_saved=on_saved />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_dialog_texts() {
        let options = delete_confirm_options();
        assert_eq!(options.title, "¿Está seguro de eliminar la categoría?");
        assert_eq!(options.text, "La categoría se eliminará de forma permanente");
        assert_eq!(options.icon, ConfirmIcon::Question);
        assert_eq!(options.confirm_label, "Eliminar");
        assert_eq!(options.cancel_label, "Cancelar");
    }
}
