use crate::domain::product::api;
use contracts::domain::product::aggregate::{
    validate_name, validate_price, ProductDto, UpdateProductDto,
};
use leptos::prelude::*;

/// ViewModel for the add/edit product form.
///
/// Price is kept as raw text so "not a number" can be reported as a
/// validation error instead of being coerced silently.
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub id: RwSignal<Option<String>>,
    pub name: RwSignal<String>,
    pub price: RwSignal<String>,
    pub name_error: RwSignal<Option<String>>,
    pub price_error: RwSignal<Option<String>>,
    pub submit_error: RwSignal<Option<String>>,
    pub is_loading: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            name: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            name_error: RwSignal::new(None),
            price_error: RwSignal::new(None),
            submit_error: RwSignal::new(None),
            is_loading: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(self) -> impl Fn() -> bool + Copy {
        move || self.id.get().is_some()
    }

    /// Load form data from the server if an id is provided.
    pub fn load_if_needed(self, id: Option<String>) {
        self.id.set(id.clone());
        let Some(existing_id) = id else {
            return;
        };

        self.is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_product(&existing_id).await {
                Ok(product) => {
                    self.name.set(product.name);
                    self.price.set(product.price.to_string());
                }
                Err(e) => {
                    self.submit_error.set(Some(format!("Failed to load product: {}", e)));
                }
            }
            self.is_loading.set(false);
        });
    }

    /// Validate the raw form input. Field errors are set as a side effect;
    /// `None` means the form must not be submitted.
    fn validated_dto(self) -> Option<ProductDto> {
        let mut valid = true;

        let name = self.name.get_untracked();
        match validate_name(&name) {
            Ok(()) => self.name_error.set(None),
            Err(msg) => {
                self.name_error.set(Some(msg));
                valid = false;
            }
        }

        let price_text = self.price.get_untracked();
        let price = match price_text.trim().parse::<f64>() {
            Ok(value) => match validate_price(value) {
                Ok(()) => {
                    self.price_error.set(None);
                    value
                }
                Err(msg) => {
                    self.price_error.set(Some(msg));
                    valid = false;
                    value
                }
            },
            Err(_) => {
                let msg = if price_text.trim().is_empty() {
                    "Price is required."
                } else {
                    "Price must be a number."
                };
                self.price_error.set(Some(msg.to_string()));
                valid = false;
                0.0
            }
        };

        if !valid {
            return None;
        }
        Some(ProductDto {
            id: self.id.get_untracked(),
            name: name.trim().to_string(),
            price,
        })
    }

    /// Validate, then create or update. Validation failures never reach the
    /// network layer. A successful create clears the form; `on_saved` runs
    /// after either kind of success.
    pub fn save_command(self, on_saved: impl Fn() + 'static) {
        let Some(dto) = self.validated_dto() else {
            return;
        };

        wasm_bindgen_futures::spawn_local(async move {
            let result = match self.id.get_untracked() {
                Some(id) => {
                    let update = UpdateProductDto {
                        name: Some(dto.name.clone()),
                        price: Some(dto.price),
                    };
                    api::update_product(&id, &update).await
                }
                None => match api::create_product(&dto).await {
                    Ok(_created) => {
                        self.reset();
                        Ok(())
                    }
                    Err(e) => Err(e),
                },
            };

            match result {
                Ok(()) => on_saved(),
                Err(e) => self.submit_error.set(Some(e)),
            }
        });
    }

    fn reset(self) {
        self.name.set(String::new());
        self.price.set(String::new());
        self.name_error.set(None);
        self.price_error.set(None);
        self.submit_error.set(None);
    }
}
