//! Tauri invoke bridge
//!
//! Binds `window.__TAURI__.core.invoke` (requires `withGlobalTauri`) and
//! adapts it to the core's `InvokeBridge`.

use async_trait::async_trait;
use ledger_sync::{GatewayError, InvokeBridge};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], js_name = invoke, catch)]
    async fn tauri_invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TauriBridge;

#[async_trait(?Send)]
impl InvokeBridge for TauriBridge {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, GatewayError> {
        // Maps must arrive as plain objects for Tauri to unpack them.
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let js_args = args
            .serialize(&serializer)
            .map_err(|e| GatewayError::Transport(format!("cannot encode `{}` args: {}", command, e)))?;

        match tauri_invoke(command, js_args).await {
            Ok(reply) => decode_reply(command, reply),
            Err(err) => Err(rejection(err)),
        }
    }
}

/// `()` replies arrive as `null`/`undefined`.
fn decode_reply(command: &str, reply: JsValue) -> Result<Value, GatewayError> {
    if reply.is_undefined() || reply.is_null() {
        return Ok(Value::Null);
    }
    let text = js_sys::JSON::stringify(&reply)
        .map_err(|e| GatewayError::Transport(format!("`{}` reply: {:?}", command, e)))?;
    let text: String = text.into();
    serde_json::from_str(&text)
        .map_err(|e| GatewayError::Transport(format!("`{}` reply: {}", command, e)))
}

/// Backend errors are plain strings; anything else came from the bridge.
fn rejection(err: JsValue) -> GatewayError {
    match err.as_string() {
        Some(message) => GatewayError::Rejected(message),
        None => GatewayError::Transport(
            js_sys::JSON::stringify(&err)
                .ok()
                .map(String::from)
                .unwrap_or_else(|| format!("{:?}", err)),
        ),
    }
}
