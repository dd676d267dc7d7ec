use serde::Serialize;
use serde_json::Number;

// Products are relayed exactly as the catalog service returns them.
pub type Product = serde_json::Value;

// Cart payload returned to the storefront UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartContent {
    // Kept as a JSON number so an empty cart renders as `0`, not `0.0`.
    pub grand_total: Number,
    pub product_list: Vec<Product>,
}

impl CartContent {
    pub fn empty() -> Self {
        Self {
            grand_total: Number::from(0),
            product_list: Vec::new(),
        }
    }
}
