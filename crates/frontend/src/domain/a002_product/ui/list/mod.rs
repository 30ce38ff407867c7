use crate::shared::api_utils::get_json;
use crate::shared::cart::CartService;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::money::{format_currency, parse_price};
use contracts::domain::a002_product::{Product, StockLevel};
use leptos::prelude::*;
use leptos_router::components::A;
use std::collections::BTreeSet;

#[derive(Clone, Debug)]
pub struct ProductRow {
    pub product: Product,
}

impl Searchable for ProductRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let f = filter.to_lowercase();
        self.product.nombre.to_lowercase().contains(&f)
            || self.product.categoria.to_lowercase().contains(&f)
    }
}

fn stock_badge(level: StockLevel, stock: i32) -> impl IntoView {
    let (variant, text) = match level {
        StockLevel::Available => ("success", format!("En stock ({})", stock)),
        StockLevel::Low => ("warning", format!("Stock bajo ({})", stock)),
        StockLevel::Out => ("error", "Agotado".to_string()),
    };
    view! { <Badge variant=variant.to_string()>{text}</Badge> }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductCatalog() -> impl IntoView {
    let cart = CartService::expect();

    let (items, set_items) = signal::<Vec<ProductRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (filter, set_filter) = signal(String::new());
    let (category, set_category) = signal(String::new());

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_products().await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(|product| ProductRow { product }).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let categories = move || {
        items
            .get()
            .iter()
            .map(|r| r.product.categoria.clone())
            .filter(|c| !c.trim().is_empty())
            .collect::<BTreeSet<_>>()
    };

    let visible = move || {
        let by_text = filter_list(items.get(), &filter.get());
        let cat = category.get();
        if cat.is_empty() {
            by_text
        } else {
            by_text
                .into_iter()
                .filter(|r| r.product.categoria == cat)
                .collect()
        }
    };

    let add_to_cart = move |product: Product| {
        if !cart.add(&product) {
            if let Some(win) = web_sys::window() {
                let _ = win.alert_with_message(&format!(
                    "No hay stock suficiente de \"{}\"",
                    product.nombre
                ));
            }
        }
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Productos"}</h1>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=filter
                        on_change=Callback::new(move |v| set_filter.set(v))
                        placeholder="Buscar producto..."
                    />
                    <select
                        class="select"
                        on:change=move |ev| set_category.set(event_target_value(&ev))
                    >
                        <option value="">{"Todas las categorías"}</option>
                        {move || categories().into_iter().map(|c| {
                            let selected = category.get() == c;
                            view! { <option value=c.clone() selected=selected>{c.clone()}</option> }
                        }).collect_view()}
                    </select>
                    <A href="/productos/nuevo" attr:class="button button--primary">
                        {icon("plus")}
                        {"Nuevo producto"}
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

            <div class="catalog-grid">
                {move || visible().into_iter().map(|row| {
                    let product = row.product.clone();
                    let product_for_click = product.clone();
                    let out_of_stock = product.stock_level() == StockLevel::Out;
                    view! {
                        <div class="catalog-card">
                            {product.imagen_url.clone().map(|url| view! {
                                <img class="catalog-card__image" src=url alt=product.nombre.clone() />
                            })}
                            <div class="catalog-card__body">
                                <div class="catalog-card__name">{product.nombre.clone()}</div>
                                <div class="catalog-card__category">{product.categoria.clone()}</div>
                                <div class="catalog-card__price">
                                    {format_currency(parse_price(&product.precio))}
                                </div>
                                {stock_badge(product.stock_level(), product.stock)}
                            </div>
                            <div class="catalog-card__actions">
                                <button
                                    class="button button--primary"
                                    disabled=out_of_stock
                                    on:click=move |_| add_to_cart(product_for_click.clone())
                                >
                                    {icon("cart")}
                                    {"Agregar"}
                                </button>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>

            {move || (items.get().is_empty() && error.get().is_none()).then(|| view! {
                <div class="empty-state">{"El catálogo está vacío."}</div>
            })}
        </div>
    }
}

async fn fetch_products() -> Result<Vec<Product>, String> {
    get_json("/api/productos").await
}
