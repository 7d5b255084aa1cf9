use crate::models;
use serde::{Deserialize, Deserializer};
use serde_valid::Validate;

/// Body of `POST /products`. Unknown properties (a client-sent `id`) are dropped.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct ProductForm {
    #[validate(min_length = 1)]
    pub name: String,
    #[validate(min_length = 1)]
    pub description: Option<String>,
    pub price: i32,
}

/// Body of `PUT /products/{id}`. Every field is optional, checked only when sent.
///
/// `description` keeps `null` apart from a missing key: `Some(None)` clears the
/// column, `None` leaves it alone. A `null` name or price counts as missing.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct ProductUpdateForm {
    #[validate(min_length = 1)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[validate(min_length = 1)]
    pub description: Option<Option<String>>,
    pub price: Option<i32>,
}

// Only runs when the key is in the body, so `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl From<ProductForm> for models::NewProduct {
    fn from(form: ProductForm) -> Self {
        models::NewProduct {
            name: form.name,
            description: form.description,
            price: form.price,
        }
    }
}

impl From<ProductUpdateForm> for models::ProductChanges {
    fn from(form: ProductUpdateForm) -> Self {
        models::ProductChanges {
            name: form.name,
            description: form.description,
            price: form.price,
        }
    }
}
