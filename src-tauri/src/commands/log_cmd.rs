//! Tauri Command for the log viewer

/// Lines kept in memory by the rolling logger, oldest first
#[tauri::command]
pub async fn get_recent_logs() -> Result<Vec<String>, String> {
    Ok(rolling_logger::recent_lines())
}
