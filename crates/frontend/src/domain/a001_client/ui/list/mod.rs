use crate::shared::api_utils::get_json;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use contracts::domain::a001_client::Client;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Debug)]
pub struct ClientRow {
    pub id: i64,
    pub nombre: String,
    pub direccion: String,
    pub contacto: String,
}

impl From<Client> for ClientRow {
    fn from(c: Client) -> Self {
        Self {
            id: c.id_cliente.value(),
            nombre: c.nombre,
            direccion: c.direccion,
            contacto: c.contacto,
        }
    }
}

impl Searchable for ClientRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let f = filter.to_lowercase();
        self.nombre.to_lowercase().contains(&f)
            || self.direccion.to_lowercase().contains(&f)
            || self.contacto.to_lowercase().contains(&f)
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ClientList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<ClientRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (filter, set_filter) = signal(String::new());

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_clients().await {
                Ok(v) => {
                    let rows: Vec<ClientRow> = v.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let visible = move || filter_list(items.get(), &filter.get());

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Clientes"}</h1>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=filter
                        on_change=Callback::new(move |v| set_filter.set(v))
                        placeholder="Buscar cliente..."
                    />
                    <A href="/clientes/nuevo" attr:class="button button--primary">
                        {icon("plus")}
                        {"Nuevo cliente"}
                    </A>
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

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"ID"}</th>
                            <th class="table__header-cell">{"Nombre"}</th>
                            <th class="table__header-cell">{"Dirección"}</th>
                            <th class="table__header-cell">{"Contacto"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible().into_iter().map(|row| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.id}</td>
                                    <td class="table__cell">{row.nombre}</td>
                                    <td class="table__cell">{row.direccion}</td>
                                    <td class="table__cell">{row.contacto}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            {move || (items.get().is_empty() && error.get().is_none()).then(|| view! {
                <div class="empty-state">{"No hay clientes registrados todavía."}</div>
            })}
        </div>
    }
}

async fn fetch_clients() -> Result<Vec<Client>, String> {
    get_json("/api/clientes").await
}
