//! Stock page — the single view of the application.
//!
//! Renders the supply table, the add/subtract forms, and the error line.
//! All state lives in signals owned by this component and is mutated only
//! through the named handlers below.

use leptos::prelude::*;
use leptos::task::spawn_local;

use panstock_domain::id::ItemId;
use panstock_domain::supply_item::{Adjustment, SupplyItem, find_by_name};

use crate::api;
use crate::components::StockTable;

/// Inventory view: table of supplies plus create-or-increment and
/// create-or-decrement forms.
///
/// The backend is the sole source of truth: the list is re-fetched after
/// every add/subtract. Delete is the one exception and prunes the local
/// list by id instead.
#[component]
pub fn StockView() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (unit, set_unit) = signal(String::new());
    let (items, set_items) = signal(Vec::<SupplyItem>::new());
    let (error_message, set_error_message) = signal::<Option<String>>(None);
    let (is_submitting, set_is_submitting) = signal(false);

    // Initial load. A failure here is only logged; the page renders empty
    // and recovers on the next successful mutation's re-fetch.
    spawn_local(async move {
        match api::fetch_stock().await {
            Ok(list) => set_items.set(list),
            Err(err) => leptos::logging::error!("error al obtener insumos: {err}"),
        }
    });

    // Shared by both forms; only the adjustment direction differs. A name
    // match folds the amount into the existing row via PUT, otherwise a
    // new row is created via POST — also on the subtract path, which
    // mirrors the add fallback.
    let submit = move |adjustment: Adjustment| {
        let name_value = name.get_untracked();
        let unit_value = unit.get_untracked();
        let Ok(amount) = quantity.get_untracked().parse::<i64>() else {
            set_error_message.set(Some("La cantidad debe ser un número entero".to_string()));
            return;
        };

        let context = match adjustment {
            Adjustment::Add => "Error al agregar o actualizar el insumo",
            Adjustment::Subtract => "Error al descontar el insumo",
        };

        let existing =
            find_by_name(&items.get_untracked(), &name_value).map(|item| (item.id, item.quantity));

        set_is_submitting.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            let outcome = async {
                match existing {
                    Some((id, current)) => {
                        api::update_quantity(id, adjustment.apply(current, amount)).await?;
                    }
                    None => {
                        api::create_item(&name_value, amount, &unit_value).await?;
                    }
                }
                api::fetch_stock().await
            }
            .await;

            match outcome {
                Ok(fresh) => {
                    set_items.set(fresh);
                    set_name.set(String::new());
                    set_quantity.set(String::new());
                    set_unit.set(String::new());
                }
                Err(err) => {
                    set_error_message.set(Some(format!("{context}: {err}")));
                }
            }
            set_is_submitting.set(false);
        });
    };

    let handle_delete = move |id: ItemId| {
        spawn_local(async move {
            match api::delete_item(id).await {
                Ok(()) => set_items.update(|list| list.retain(|item| item.id != id)),
                Err(err) => {
                    set_error_message.set(Some(format!("Error al eliminar el insumo: {err}")));
                }
            }
        });
    };

    view! {
        <div class="app">
            <header>
                <h1>"Panadería del Valle"</h1>
            </header>
            <h2>"Insumos:"</h2>
            {move || view! { <StockTable items=items.get() on_delete=handle_delete/> }}
            <h2>"Actualizar Insumo:"</h2>
            <h3>"Acordate de poner el nombre igual a como se encuentra en la tabla."</h3>
            <form on:submit=move |ev| {
                ev.prevent_default();
                submit(Adjustment::Add);
            }>
                <label>
                    "Nombre:"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        required
                    />
                </label>
                <br/>
                <label>
                    "Cantidad:"
                    <input
                        type="number"
                        prop:value=move || quantity.get()
                        on:input=move |ev| set_quantity.set(event_target_value(&ev))
                        required
                    />
                </label>
                <br/>
                <label>
                    "Unidad:"
                    <input
                        type="text"
                        prop:value=move || unit.get()
                        on:input=move |ev| set_unit.set(event_target_value(&ev))
                        required
                    />
                </label>
                <br/>
                <button type="submit" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Enviando…" } else { "Agregar" }}
                </button>
            </form>
            <form on:submit=move |ev| {
                ev.prevent_default();
                submit(Adjustment::Subtract);
            }>
                <button type="submit" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Enviando…" } else { "Descontar" }}
                </button>
            </form>
            {move || error_message.get().map(|msg| view! {
                <p class="error">{msg}</p>
            })}
        </div>
    }
}
