use crate::domain::a004_dispatch::state::bucket;
use crate::shared::api_utils::{get_json, put_json};
use crate::shared::date_utils::{format_date, today_iso};
use crate::shared::icons::icon;
use contracts::domain::a004_dispatch::{
    Dispatch, ScheduleDispatchRequest, UpdateDispatchStatusRequest,
};
use contracts::enums::DispatchStatus;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
struct ScheduleForm {
    id: i64,
    fecha: String,
    direccion: String,
}

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

#[component]
#[allow(non_snake_case)]
pub fn DispatchBoard() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Dispatch>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (schedule_form, set_schedule_form) = signal::<Option<ScheduleForm>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_dispatches().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    // Replace one record in place; used both for the optimistic write and
    // for the rollback when the server rejects it.
    let replace = move |record: Dispatch| {
        set_items.update(|items| {
            if let Some(slot) = items
                .iter_mut()
                .find(|d| d.id_despacho == record.id_despacho)
            {
                *slot = record;
            }
        });
    };

    let schedule = move |form: ScheduleForm| {
        let Some(previous) = items
            .get_untracked()
            .into_iter()
            .find(|d| d.id_despacho.value() == form.id)
        else {
            return;
        };

        let request = ScheduleDispatchRequest {
            fecha_despacho: form.fecha.clone(),
            estado: DispatchStatus::Enviado,
            direccion_entrega: form.direccion.clone(),
        };

        let mut optimistic = previous.clone();
        optimistic.fecha_despacho = Some(form.fecha.clone());
        optimistic.estado = DispatchStatus::Enviado;
        optimistic.direccion_entrega = form.direccion.clone();
        replace(optimistic);
        set_schedule_form.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            match schedule_dispatch(form.id, &request).await {
                Ok(updated) => replace(updated),
                Err(e) => {
                    replace(previous);
                    alert(&format!("No se pudo agendar el despacho: {}", e));
                }
            }
        });
    };

    let advance = move |id: i64| {
        let Some(previous) = items
            .get_untracked()
            .into_iter()
            .find(|d| d.id_despacho.value() == id)
        else {
            return;
        };
        let Some(next) = previous.estado.next() else {
            return;
        };

        let mut optimistic = previous.clone();
        optimistic.estado = next;
        replace(optimistic);

        wasm_bindgen_futures::spawn_local(async move {
            match update_status(id, next).await {
                Ok(updated) => replace(updated),
                Err(e) => {
                    replace(previous);
                    alert(&format!("No se pudo actualizar el despacho: {}", e));
                }
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Despachos"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <div class="board">
                {move || bucket(&items.get()).into_iter().map(|(status, column)| {
                    view! {
                        <div class="board__column">
                            <div class="board__column-header">
                                <span>{status.display_name()}</span>
                                <span class="board__count">{column.len()}</span>
                            </div>
                            <div class="board__cards">
                                {column.into_iter().map(|d| {
                                    let id = d.id_despacho.value();
                                    let direccion = d.direccion_entrega.clone();
                                    view! {
                                        <div class="board__card">
                                            <div class="board__card-title">
                                                {format!("Despacho #{} · Orden #{}", id, d.id_orden.value())}
                                            </div>
                                            {d.fecha_despacho.clone().map(|f| view! {
                                                <div class="board__card-line">
                                                    {icon("calendar")}
                                                    {format_date(&f)}
                                                </div>
                                            })}
                                            {(!d.direccion_entrega.is_empty()).then(|| view! {
                                                <div class="board__card-line">{d.direccion_entrega.clone()}</div>
                                            })}
                                            {match status {
                                                DispatchStatus::Pendiente => view! {
                                                    <button
                                                        class="button button--primary button--small"
                                                        on:click=move |_| set_schedule_form.set(Some(ScheduleForm {
                                                            id,
                                                            fecha: today_iso(),
                                                            direccion: direccion.clone(),
                                                        }))
                                                    >
                                                        {"Agendar"}
                                                    </button>
                                                }.into_any(),
                                                DispatchStatus::Enviado => view! {
                                                    <button
                                                        class="button button--primary button--small"
                                                        on:click=move |_| advance(id)
                                                    >
                                                        {icon("check")}
                                                        {"Marcar entregado"}
                                                    </button>
                                                }.into_any(),
                                                DispatchStatus::Entregado => view! { <></> }.into_any(),
                                            }}
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>

            // Scheduling modal
            {move || schedule_form.get().map(|form| {
                view! {
                    <div class="modal-backdrop" on:click=move |_| set_schedule_form.set(None)>
                        <div class="modal" on:click=|ev| ev.stop_propagation()>
                            <div class="modal__header">
                                <h3>{format!("Agendar despacho #{}", form.id)}</h3>
                                <button class="button button--icon" on:click=move |_| set_schedule_form.set(None)>
                                    {icon("x")}
                                </button>
                            </div>
                            <div class="modal__body">
                                <div class="form-group">
                                    <label for="fecha">{"Fecha de despacho"}</label>
                                    <input
                                        type="date"
                                        id="fecha"
                                        prop:value=form.fecha.clone()
                                        on:input=move |ev| {
                                            let v = event_target_value(&ev);
                                            set_schedule_form.update(|f| {
                                                if let Some(f) = f.as_mut() {
                                                    f.fecha = v.clone();
                                                }
                                            });
                                        }
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="direccion">{"Dirección de entrega"}</label>
                                    <input
                                        type="text"
                                        id="direccion"
                                        prop:value=form.direccion.clone()
                                        on:input=move |ev| {
                                            let v = event_target_value(&ev);
                                            set_schedule_form.update(|f| {
                                                if let Some(f) = f.as_mut() {
                                                    f.direccion = v.clone();
                                                }
                                            });
                                        }
                                        placeholder="Calle y número"
                                    />
                                </div>
                                <div class="form-actions">
                                    <button
                                        class="button button--primary"
                                        disabled=move || schedule_form.get()
                                            .map(|f| f.fecha.trim().is_empty() || f.direccion.trim().is_empty())
                                            .unwrap_or(true)
                                        on:click=move |_| {
                                            if let Some(current) = schedule_form.get_untracked() {
                                                schedule(current);
                                            }
                                        }
                                    >
                                        {"Confirmar"}
                                    </button>
                                    <button class="button button--secondary" on:click=move |_| set_schedule_form.set(None)>
                                        {"Cancelar"}
                                    </button>
                                </div>
                            </div>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}

async fn fetch_dispatches() -> Result<Vec<Dispatch>, String> {
    get_json("/api/despachos").await
}

async fn schedule_dispatch(id: i64, request: &ScheduleDispatchRequest) -> Result<Dispatch, String> {
    put_json(&format!("/api/despachos/agendar/{}", id), request).await
}

async fn update_status(id: i64, estado: DispatchStatus) -> Result<Dispatch, String> {
    put_json(
        &format!("/api/despachos/{}/estado", id),
        &UpdateDispatchStatusRequest { estado },
    )
    .await
}
