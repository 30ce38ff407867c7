use super::view_model::ClientDetailsViewModel;
use leptos::prelude::*;
use std::rc::Rc;

fn text_field(
    vm: &ClientDetailsViewModel,
    field: &'static str,
    label: &'static str,
    placeholder: &'static str,
    read: impl Fn(&contracts::domain::a001_client::ClientDto) -> String + Copy + Send + Sync + 'static,
    write: impl Fn(&mut contracts::domain::a001_client::ClientDto, String) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let vm = vm.clone();
    let vm_value = vm.clone();
    let vm_input = vm.clone();
    let vm_blur = vm.clone();
    let vm_err = vm.clone();

    view! {
        <div class="form-group">
            <label for=field>{label}</label>
            <input
                type="text"
                id=field
                prop:value=move || read(&vm_value.form.get())
                on:input=move |ev| {
                    let v = event_target_value(&ev);
                    vm_input.form.update(|f| write(f, v));
                }
                on:blur=move |_| vm_blur.touch(field)
                placeholder=placeholder
            />
            {move || vm_err.field_error(field).map(|msg| view! {
                <div class="field-error">{msg}</div>
            })}
        </div>
    }
}

#[component]
pub fn ClientDetails(on_saved: Rc<dyn Fn(())>, on_cancel: Rc<dyn Fn(())>) -> impl IntoView {
    let vm = ClientDetailsViewModel::new();
    let vm_clone = vm.clone();

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{"Nuevo cliente"}</h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                {text_field(&vm_clone, "nombre", "Nombre", "Nombre o razón social",
                    |f| f.nombre.clone(), |f, v| f.nombre = v)}
                {text_field(&vm_clone, "cedula_ruc", "Cédula / RUC", "Número de identificación",
                    |f| f.cedula_ruc.clone(), |f, v| f.cedula_ruc = v)}
                {text_field(&vm_clone, "telefono", "Teléfono", "+593 ...",
                    |f| f.telefono.clone(), |f, v| f.telefono = v)}
                {text_field(&vm_clone, "email", "Correo electrónico", "correo@dominio.com",
                    |f| f.email.clone(), |f, v| f.email = v)}
                {text_field(&vm_clone, "direccion", "Dirección", "Calle y número",
                    |f| f.direccion.clone(), |f, v| f.direccion = v)}
                {text_field(&vm_clone, "ciudad", "Ciudad", "Ciudad (opcional)",
                    |f| f.ciudad.clone(), |f, v| f.ciudad = v)}
                {text_field(&vm_clone, "codigo_postal", "Código postal", "Código postal (opcional)",
                    |f| f.codigo_postal.clone(), |f, v| f.codigo_postal = v)}

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
