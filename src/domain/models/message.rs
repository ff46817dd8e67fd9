//! Incoming echo message.

/// Text used when a request carries no message.
pub const DEFAULT_MESSAGE: &str = "Sem mensagem";

/// A message received by the echo endpoint. Lives for one request only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage(String);

impl IncomingMessage {
    /// Wrap received text as-is.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Build from an optional query value, falling back to [`DEFAULT_MESSAGE`].
    pub fn from_param(param: Option<String>) -> Self {
        param.map_or_else(|| Self::new(DEFAULT_MESSAGE), Self::new)
    }

    /// Received text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Line written to the operational log for this message.
    pub fn log_line(&self) -> String {
        format!("Recebido: {}", self.0)
    }
}
