//! Product Commands
//!
//! Product handlers take flat arguments (`name`, `category`, ...) rather than
//! a wrapped payload, so the shared fields are flattened into each command.

use serde::Serialize;

use crate::gateway::GatewayCommand;
use crate::models::{Category, Product};

/// Validated, typed product fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductFields {
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub price: f64,
}

#[derive(Debug, Serialize)]
pub struct GetProducts;

impl GatewayCommand for GetProducts {
    const NAME: &'static str = "get_products";
    type Output = Vec<Product>;
}

#[derive(Debug, Serialize)]
pub struct GetOneProduct {
    pub id: String,
}

impl GatewayCommand for GetOneProduct {
    const NAME: &'static str = "get_one_product";
    type Output = Option<Product>;
}

#[derive(Debug, Serialize)]
pub struct GetProductsByCategory {
    pub category: String,
}

impl GatewayCommand for GetProductsByCategory {
    const NAME: &'static str = "get_products_by_category";
    type Output = Vec<Product>;
}

#[derive(Debug, Serialize)]
pub struct GetCategories;

impl GatewayCommand for GetCategories {
    const NAME: &'static str = "get_categories";
    type Output = Vec<Category>;
}

#[derive(Debug, Serialize)]
pub struct CreateProduct {
    #[serde(flatten)]
    pub fields: ProductFields,
}

impl GatewayCommand for CreateProduct {
    const NAME: &'static str = "create_product";
    type Output = Product;
}

#[derive(Debug, Serialize)]
pub struct UpdateProduct {
    pub id: String,
    #[serde(flatten)]
    pub fields: ProductFields,
}

impl GatewayCommand for UpdateProduct {
    const NAME: &'static str = "update_product";
    type Output = ();
}

#[derive(Debug, Serialize)]
pub struct DeleteProduct {
    pub id: String,
}

impl GatewayCommand for DeleteProduct {
    const NAME: &'static str = "delete_product";
    type Output = ();
}
