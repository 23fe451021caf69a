use super::view_model::ProductDetailsViewModel;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn ProductDetails(id: Option<String>) -> impl IntoView {
    let vm = ProductDetailsViewModel::new();
    vm.load_if_needed(id);

    let navigate = use_navigate();
    let is_edit = vm.is_edit_mode();

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let navigate = navigate.clone();
            vm.save_command(move || navigate("/", Default::default()));
        }
    };

    view! {
        <div class="details-container product-details">
            <div class="details-header">
                <h2>{move || if is_edit() { "Edit Product" } else { "Add New Product" }}</h2>
            </div>

            {move || vm.submit_error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show
                when=move || !vm.is_loading.get()
                fallback=|| view! { <p class="placeholder">{"Loading..."}</p> }
            >
                <form class="details-form" on:submit=on_submit.clone() novalidate>
                    <div class="form-group">
                        <label for="name">{"Name"}</label>
                        <input
                            type="text"
                            id="name"
                            prop:value=move || vm.name.get()
                            on:input=move |ev| vm.name.set(event_target_value(&ev))
                            placeholder="Product name"
                        />
                        {move || vm.name_error.get().map(|e| view! { <p class="field-error">{e}</p> })}
                    </div>

                    <div class="form-group">
                        <label for="price">{"Price"}</label>
                        <input
                            type="text"
                            id="price"
                            prop:value=move || vm.price.get()
                            on:input=move |ev| vm.price.set(event_target_value(&ev))
                            placeholder="Price"
                        />
                        {move || vm.price_error.get().map(|e| view! { <p class="field-error">{e}</p> })}
                    </div>

                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary">
                            {move || if is_edit() { "Update" } else { "Save" }}
                        </button>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click={
                                let navigate = navigate.clone();
                                move |_| navigate("/", Default::default())
                            }
                        >
                            {"Cancel"}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
