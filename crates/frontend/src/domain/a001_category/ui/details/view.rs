use super::view_model::CategoryDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::notify::NotifierHandle;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CategoryDetails(
    vm: CategoryDetailsViewModel,
    notifier: NotifierHandle,
    /// Runs after a successful create/update
    on_saved: Callback<()>,
) -> impl IntoView {
    let image_preview = move || {
        let url = vm.form.with(|f| f.image.trim().to_string());
        if url.is_empty() {
            view! {
                <div class="category-form__preview category-form__preview--empty">
                    {icon("image")}
                </div>
            }
            .into_any()
        } else {
            view! {
                <img class="category-form__preview" src=url alt="vista previa" />
            }
            .into_any()
        }
    };

    view! {
        <Dialog open=vm.open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        <span class="category-form__title">{move || vm.mode().title()}</span>
                    </DialogTitle>
                    <DialogContent>
                        <div class="details-form category-form">
                            <div class="form-group">
                                <label for="nombreCategoria">{"Nombre"}</label>
                                <input
                                    type="text"
                                    id="nombreCategoria"
                                    class="form-control"
                                    prop:value=move || vm.form.with(|f| f.name.clone())
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.name = event_target_value(&ev));
                                    }
                                    placeholder="Nombre de la categoría"
                                />
                            </div>

                            <div class="form-group">
                                <label for="imageCategoria">{"Imagen"}</label>
                                <input
                                    type="text"
                                    id="imageCategoria"
                                    class="form-control"
                                    prop:value=move || vm.form.with(|f| f.image.clone())
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.image = event_target_value(&ev));
                                    }
                                    placeholder="https://..."
                                />
                            </div>

                            {image_preview}
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm.close()
                        >
                            {icon("x")}
                            " Cancelar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.save_command(notifier, on_saved)
                            disabled=Signal::derive(move || vm.is_saving.get())
                        >
                            {icon("save")}
                            {move || {
                                if vm.is_saving.get() {
                                    "Guardando...".to_string()
                                } else {
                                    format!(" {}", vm.mode().submit_label())
                                }
                            }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
