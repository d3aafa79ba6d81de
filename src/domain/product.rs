use std::fmt;

use serde::{Deserialize, Serialize};

/// Product identifier as delivered by the API (numeric or textual)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    Text(String),
}

impl Default for ProductId {
    fn default() -> Self {
        ProductId::Number(0)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{n}"),
            ProductId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A product record as listed in the grid
///
/// Unknown fields from the API are ignored; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: ProductId,
    #[serde(default, alias = "name")]
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default, alias = "thumbnail")]
    pub image: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// Response shapes accepted from the products endpoint
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProductsResponse {
    List(Vec<Product>),
    Page { products: Vec<Product> },
}

impl ProductsResponse {
    pub fn into_products(self) -> Vec<Product> {
        match self {
            ProductsResponse::List(products) | ProductsResponse::Page { products } => products,
        }
    }
}
