use crate::domain::a005_shipment::state::bucket;
use crate::shared::api_utils::{get_json, post_empty, put_json};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use contracts::domain::a005_shipment::{Shipment, UpdateShipmentStatusRequest};
use contracts::enums::ShipmentStatus;
use leptos::prelude::*;

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ShipmentBoard() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Shipment>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (order_id_input, set_order_id_input) = signal(String::new());
    let (creating, set_creating) = signal(false);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_shipments().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let replace = move |record: Shipment| {
        set_items.update(|items| {
            if let Some(slot) = items.iter_mut().find(|s| s.id_envio == record.id_envio) {
                *slot = record;
            }
        });
    };

    let advance = move |id: i64| {
        let Some(previous) = items
            .get_untracked()
            .into_iter()
            .find(|s| s.id_envio.value() == id)
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
                    alert(&format!("No se pudo actualizar el envío: {}", e));
                }
            }
        });
    };

    let create = move || {
        let raw = order_id_input.get_untracked();
        let Ok(order_id) = raw.trim().parse::<i64>() else {
            alert("Ingrese un número de orden válido");
            return;
        };
        set_creating.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match create_shipment(order_id).await {
                Ok(shipment) => {
                    set_items.update(|items| items.push(shipment));
                    set_order_id_input.set(String::new());
                }
                Err(e) => alert(&format!("No se pudo crear el envío: {}", e)),
            }
            set_creating.set(false);
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Envíos"}</h1>
                </div>
                <div class="header__actions">
                    <input
                        type="text"
                        class="input"
                        inputmode="numeric"
                        placeholder="Nº de orden"
                        prop:value=move || order_id_input.get()
                        on:input=move |ev| set_order_id_input.set(event_target_value(&ev))
                    />
                    <button
                        class="button button--primary"
                        disabled=move || creating.get() || order_id_input.get().trim().is_empty()
                        on:click=move |_| create()
                    >
                        {icon("plus")}
                        {move || if creating.get() { "Creando..." } else { "Crear envío" }}
                    </button>
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
                                {column.into_iter().map(|s| {
                                    let id = s.id_envio.value();
                                    let next_label = s.estado.next().map(|n| {
                                        format!("Pasar a {}", n.display_name())
                                    });
                                    view! {
                                        <div class="board__card">
                                            <div class="board__card-title">
                                                {format!("Envío #{} · Orden #{}", id, s.id_orden.value())}
                                            </div>
                                            {s.fecha_despacho.map(|f| view! {
                                                <div class="board__card-line">
                                                    {icon("calendar")}
                                                    {format_datetime(&f)}
                                                </div>
                                            })}
                                            {(!s.direccion_entrega.is_empty()).then(|| view! {
                                                <div class="board__card-line">{s.direccion_entrega.clone()}</div>
                                            })}
                                            {(!s.correo_usuario.is_empty()).then(|| view! {
                                                <div class="board__card-line">{s.correo_usuario.clone()}</div>
                                            })}
                                            {s.transportista.clone().map(|t| view! {
                                                <div class="board__card-line">
                                                    {icon("shipments")}
                                                    {match s.numero_guia.clone() {
                                                        Some(guia) => format!("{} · Guía {}", t, guia),
                                                        None => t,
                                                    }}
                                                </div>
                                            })}
                                            {next_label.map(|label| view! {
                                                <button
                                                    class="button button--primary button--small"
                                                    on:click=move |_| advance(id)
                                                >
                                                    {label}
                                                </button>
                                            })}
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

async fn fetch_shipments() -> Result<Vec<Shipment>, String> {
    get_json("/api/envios").await
}

async fn create_shipment(order_id: i64) -> Result<Shipment, String> {
    post_empty(&format!("/api/envios?idOrden={}", order_id)).await
}

async fn update_status(id: i64, estado: ShipmentStatus) -> Result<Shipment, String> {
    put_json(
        &format!("/api/envios/{}/estado", id),
        &UpdateShipmentStatusRequest { estado },
    )
    .await
}
