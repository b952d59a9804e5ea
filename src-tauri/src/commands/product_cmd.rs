//! Tauri Commands for Products and Categories

use tauri::State;

use crate::domain::{Category, Product};
use crate::repository::Repository;
use crate::AppState;

/// List all products, newest first
#[tauri::command]
pub async fn get_products(state: State<'_, AppState>) -> Result<Vec<Product>, String> {
    state.products.list().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_one_product(
    state: State<'_, AppState>,
    id: String,
) -> Result<Option<Product>, String> {
    state.products.find_by_id(&id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_products_by_category(
    state: State<'_, AppState>,
    category: String,
) -> Result<Vec<Product>, String> {
    state
        .products
        .list_by_category(&category)
        .await
        .map_err(|e| e.to_string())
}

/// Category summaries for the filter bar
#[tauri::command]
pub async fn get_categories(state: State<'_, AppState>) -> Result<Vec<Category>, String> {
    state.products.categories().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn create_product(
    state: State<'_, AppState>,
    name: String,
    category: String,
    quantity: i32,
    price: f64,
) -> Result<Product, String> {
    let product = Product::new(name, category, quantity, price);
    state.products.create(&product).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_product(
    state: State<'_, AppState>,
    id: String,
    name: String,
    category: String,
    quantity: i32,
    price: f64,
) -> Result<(), String> {
    let product = Product {
        id,
        ..Product::new(name, category, quantity, price)
    };
    state
        .products
        .update(&product)
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_product(state: State<'_, AppState>, id: String) -> Result<(), String> {
    state.products.delete(&id).await.map_err(|e| e.to_string())
}
