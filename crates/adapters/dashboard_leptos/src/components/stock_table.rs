//! Stock table component for displaying the list of supply items.

use leptos::prelude::*;
use panstock_domain::id::ItemId;
use panstock_domain::supply_item::SupplyItem;

/// A table displaying supply items, one row per item, in the order the
/// backend returned them. The headers render even when the list is
/// empty, so the page keeps its shape before the first item arrives.
#[component]
pub fn StockTable(
    /// The list of items to display.
    items: Vec<SupplyItem>,
    /// Callback when a row's delete button is clicked.
    #[prop(into)]
    on_delete: Callback<ItemId>,
) -> impl IntoView {
    view! {
        <table>
            <thead>
                <tr>
                    <th>"Insumos"</th>
                    <th>"Cantidad"</th>
                    <th>"Unidad"</th>
                    <th>"Acciones"</th>
                </tr>
            </thead>
            <tbody>
                {items.into_iter().map(|item| {
                    view! {
                        <StockRow item on_delete/>
                    }
                }).collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

/// A single row in the stock table.
#[component]
fn StockRow(
    /// The item to display.
    item: SupplyItem,
    /// Callback when the delete button is clicked.
    #[prop(into)]
    on_delete: Callback<ItemId>,
) -> impl IntoView {
    let id = item.id;
    let name = item.name;
    let quantity = item.quantity;
    let unit = item.unit;

    view! {
        <tr>
            <td>{name}</td>
            <td>{quantity}</td>
            <td>{unit}</td>
            <td>
                <button on:click=move |_| on_delete.run(id)>
                    "Eliminar"
                </button>
            </td>
        </tr>
    }
}
