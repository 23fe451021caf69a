use crate::domain::product::ui::details::{AddProductPage, EditProductPage};
use crate::domain::product::ui::list::ProductList;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="container">
                <h1>{"Product Catalog"}</h1>
                <Routes fallback=|| view! { <p>{"Page not found."}</p> }>
                    <Route path=path!("/") view=ProductList />
                    <Route path=path!("/add") view=AddProductPage />
                    <Route path=path!("/edit/:id") view=EditProductPage />
                </Routes>
            </main>
        </Router>
    }
}
