//! Sidebar with collapsible menu groups

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (path, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Panel",
            icon: "dashboard",
            items: vec![("/", "Resumen", "dashboard")],
        },
        MenuGroup {
            id: "catalog",
            label: "Catálogo",
            icon: "products",
            items: vec![
                ("/clientes", "Clientes", "clients"),
                ("/productos", "Productos", "products"),
                ("/carrito", "Carrito", "cart"),
            ],
        },
        MenuGroup {
            id: "operations",
            label: "Operaciones",
            icon: "orders",
            items: vec![
                ("/ordenes", "Órdenes", "orders"),
                ("/despachos", "Despachos", "dispatches"),
                ("/envios", "Envíos", "shipments"),
                ("/pagos", "Pagos", "payments"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    // All groups start expanded; the menu is short enough.
    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();
                let items_stored = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item app-sidebar__item--group"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id_for_exp)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(path, label, icon_name)| {
                                    view! {
                                        <A href=path attr:class="app-sidebar__link">
                                            <div class="app-sidebar__item" style:padding-left="10px">
                                                <div class="app-sidebar__item-content">
                                                    {icon(icon_name)}
                                                    <span>{label}</span>
                                                </div>
                                            </div>
                                        </A>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
