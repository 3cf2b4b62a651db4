use leptos::prelude::*;

pub mod api;
mod components;
mod pages;

use pages::StockView;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <StockView/>
    }
}
