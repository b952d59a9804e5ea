//! Diagnostic Commands

use serde::Serialize;

use crate::gateway::GatewayCommand;

/// Most recent backend log lines, oldest first
#[derive(Debug, Serialize)]
pub struct GetRecentLogs;

impl GatewayCommand for GetRecentLogs {
    const NAME: &'static str = "get_recent_logs";
    type Output = Vec<String>;
}
