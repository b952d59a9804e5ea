//! Ledger Desk Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: Tauri command handlers
//!
//! Notes and inventory live in separate SQLite files.

use tauri::Manager;

mod commands;
mod config;
mod domain;
mod repository;

use config::{AppConfig, LOG_NAME};
use repository::{init_db, NoteRepository, ProductRepository, Schema};

/// Application state shared across commands
pub struct AppState {
    pub notes: NoteRepository,
    pub products: ProductRepository,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let config = AppConfig::resolve(app.path().app_data_dir()?, app.path().app_log_dir()?);
            config.ensure_dirs()?;

            rolling_logger::init_logger_with(config.log_dir.clone(), LOG_NAME, config.log_policy)?;
            let _ = rolling_logger::info(&format!(
                "App setup starting, data dir {}",
                config.data_dir.display()
            ));

            // Commands may arrive as soon as the window loads, so both
            // databases are ready before state is managed.
            let opened = tauri::async_runtime::block_on(async {
                let notes = init_db(&config.notes_db_path(), Schema::Notes).await?;
                let inventory = init_db(&config.inventory_db_path(), Schema::Inventory).await?;
                Ok::<_, String>((notes, inventory))
            });
            let (notes_db, inventory_db) = match opened {
                Ok(dbs) => dbs,
                Err(e) => {
                    let _ = rolling_logger::error(&format!("DB init failed: {}", e));
                    return Err(e.into());
                }
            };

            app.manage(AppState {
                notes: NoteRepository::new(notes_db.connection()),
                products: ProductRepository::new(inventory_db.connection()),
            });
            let _ = rolling_logger::info("DB init success");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Notes
            commands::get_all_notes,
            commands::get_note,
            commands::create_note,
            commands::update_note,
            commands::delete_note,
            // Inventory
            commands::get_products,
            commands::get_one_product,
            commands::get_products_by_category,
            commands::get_categories,
            commands::create_product,
            commands::update_product,
            commands::delete_product,
            // Diagnostics
            commands::get_recent_logs,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
