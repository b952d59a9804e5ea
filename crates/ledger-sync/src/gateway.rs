//! Remote Command Gateway
//!
//! The untyped `invoke(command, args)` bridge and the statically declared
//! command schema layered over it.

use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Failure reported by, or on the way to, the backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    /// The backend ran the command and returned an error value
    #[error("{0}")]
    Rejected(String),
    /// The bridge itself failed (IPC unavailable, JS exception, ...)
    #[error("transport failure: {0}")]
    Transport(String),
    /// Arguments or reply did not match the declared schema
    #[error("malformed `{command}` payload: {message}")]
    Payload {
        command: &'static str,
        message: String,
    },
}

/// Raw remote-invocation bridge.
///
/// Futures are `!Send`: the UI runs on a single cooperative thread.
#[async_trait(?Send)]
pub trait InvokeBridge {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, GatewayError>;
}

#[async_trait(?Send)]
impl<B: InvokeBridge + ?Sized> InvokeBridge for Rc<B> {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, GatewayError> {
        (**self).invoke(command, args).await
    }
}

/// A named backend command with a fixed argument and reply shape.
///
/// The implementing type *is* the argument payload; it serializes to the
/// object Tauri unpacks into the command's parameters.
pub trait GatewayCommand: Serialize {
    /// Command name as registered with the backend
    const NAME: &'static str;
    /// Reply type
    type Output: DeserializeOwned;
}

/// Serialize `command`, send it across `bridge` and decode the reply.
pub async fn call<B, C>(bridge: &B, command: &C) -> Result<C::Output, GatewayError>
where
    B: InvokeBridge + ?Sized,
    C: GatewayCommand,
{
    let args = serde_json::to_value(command).map_err(|e| GatewayError::Payload {
        command: C::NAME,
        message: e.to_string(),
    })?;

    tracing::debug!(command = C::NAME, "invoking gateway command");
    let reply = bridge.invoke(C::NAME, args).await?;

    serde_json::from_value(reply).map_err(|e| GatewayError::Payload {
        command: C::NAME,
        message: e.to_string(),
    })
}
