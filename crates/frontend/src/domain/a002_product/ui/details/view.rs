use super::view_model::ProductDetailsViewModel;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn ProductDetails(on_saved: Rc<dyn Fn(())>, on_cancel: Rc<dyn Fn(())>) -> impl IntoView {
    let vm = ProductDetailsViewModel::new();
    let vm_clone = vm.clone();

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{"Nuevo producto"}</h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="nombre">{"Nombre"}</label>
                    <input
                        type="text"
                        id="nombre"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().nombre
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.nombre = event_target_value(&ev));
                            }
                        }
                        placeholder="Nombre del producto"
                    />
                </div>

                <div class="form-group">
                    <label for="precio">{"Precio"}</label>
                    <input
                        type="text"
                        id="precio"
                        inputmode="decimal"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().precio
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.precio = event_target_value(&ev));
                            }
                        }
                        placeholder="0.00"
                    />
                </div>

                <div class="form-group">
                    <label for="stock">{"Stock inicial"}</label>
                    <input
                        type="number"
                        id="stock"
                        min="0"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().stock.to_string()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                if let Ok(n) = event_target_value(&ev).parse::<i32>() {
                                    vm.form.update(|f| f.stock = n);
                                }
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="categoria">{"Categoría"}</label>
                    <input
                        type="text"
                        id="categoria"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().categoria
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.categoria = event_target_value(&ev));
                            }
                        }
                        placeholder="Categoría"
                    />
                </div>

                <div class="form-group">
                    <label for="imagen">{"Imagen"}</label>
                    <input
                        type="file"
                        id="imagen"
                        accept="image/*"
                        node_ref=vm_clone.file_input
                    />
                </div>

                <div class="form-actions">
                    <button class="btn btn-primary"
                        disabled={
                            let vm = vm_clone.clone();
                            move || !vm.is_form_valid()() || vm.saving.get()
                        }
                        on:click={
                            let vm = vm_clone.clone();
                            let on_saved = on_saved.clone();
                            move |_| {
                                vm.save_command(on_saved.clone())();
                            }
                        }
                    >
                        {
                            let vm = vm_clone.clone();
                            move || if vm.saving.get() { "Guardando..." } else { "Guardar" }
                        }
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| on_cancel(())>{"Cancelar"}</button>
                </div>
            </div>
        </div>
    }
}
