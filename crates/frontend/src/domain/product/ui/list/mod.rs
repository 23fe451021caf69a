use crate::domain::product::api;
use contracts::domain::product::aggregate::Product;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    // None until the first response; the list then always holds a Vec,
    // empty on failure, so the table never crashes on bad payloads.
    let (items, set_items) = signal::<Option<Vec<Product>>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_products().await {
                Ok(v) => {
                    set_items.set(Some(v));
                    set_error.set(None);
                }
                Err(e) => {
                    set_items.set(Some(Vec::new()));
                    set_error.set(Some(e));
                }
            }
        });
    };

    let delete_handler = move |id: String| {
        let confirmed = web_sys::window()
            .map(|win| win.confirm_with_message("Delete this product?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = api::delete_product(&id).await {
                if let Some(win) = web_sys::window() {
                    let _ = win.alert_with_message(&format!("Failed to delete product: {}", e));
                }
            }
            // Re-sync with the server either way.
            fetch();
        });
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Products"}</h2>
                <div class="header-actions">
                    <a href="/add" class="btn btn-primary">{"Add New"}</a>
                    <button class="btn btn-secondary" on:click=move |_| fetch()>
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th>{"No"}</th>
                            <th>{"Name"}</th>
                            <th>{"Price"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || match items.get() {
                            None => view! {
                                <tr>
                                    <td colspan="4" class="placeholder">{"Loading products..."}</td>
                                </tr>
                            }.into_any(),
                            Some(rows) if rows.is_empty() => view! {
                                <tr>
                                    <td colspan="4" class="placeholder">{"No products found"}</td>
                                </tr>
                            }.into_any(),
                            Some(rows) => rows.into_iter().enumerate().map(|(index, product)| {
                                let id = product.id.as_string();
                                let edit_href = format!("/edit/{}", id);
                                view! {
                                    <tr>
                                        <td>{index + 1}</td>
                                        <td>{product.name.clone()}</td>
                                        <td>{product.price}</td>
                                        <td class="row-actions">
                                            <a href=edit_href class="btn btn-small">{"Edit"}</a>
                                            <button
                                                class="btn btn-small btn-danger"
                                                on:click=move |_| delete_handler(id.clone())
                                            >
                                                {"Delete"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any(),
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
