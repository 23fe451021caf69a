mod view;
mod view_model;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
pub use view::ProductDetails;

/// Route adapter for `/add`.
#[component]
pub fn AddProductPage() -> impl IntoView {
    view! { <ProductDetails id=None /> }
}

/// Route adapter for `/edit/:id`.
#[component]
pub fn EditProductPage() -> impl IntoView {
    let params = use_params_map();

    view! {
        {move || {
            let id = params.read().get("id");
            view! { <ProductDetails id=id /> }
        }}
    }
}
