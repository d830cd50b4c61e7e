use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::fmt;

/// Loading state tag carried by every response chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadingState {
    Loading,
    Streaming,
    Done,
    Error,
}

impl LoadingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadingState::Loading => "Loading",
            LoadingState::Streaming => "Streaming",
            LoadingState::Done => "Done",
            LoadingState::Error => "Error",
        }
    }
}

impl fmt::Display for LoadingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque data frame as returned by a backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub fields: Map<String, JsonValue>,
}

impl Frame {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
}

/// One unit of the merged response stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseChunk {
    pub key: String,
    pub data: Vec<Frame>,
    pub state: LoadingState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ChunkError>,
}

impl ResponseChunk {
    pub fn loading(key: impl Into<String>, data: Vec<Frame>) -> Self {
        Self {
            key: key.into(),
            data,
            state: LoadingState::Loading,
            error: None,
        }
    }

    pub fn error(key: impl Into<String>, backend: &str, message: impl fmt::Display) -> Self {
        Self {
            key: key.into(),
            data: Vec::new(),
            state: LoadingState::Error,
            error: Some(ChunkError {
                message: format!("{}: {}", backend, message),
                backend: Some(backend.to_string()),
            }),
        }
    }

    pub fn with_state(mut self, state: LoadingState) -> Self {
        self.state = state;
        self
    }

    pub fn is_error(&self) -> bool {
        self.state == LoadingState::Error
    }
}

/// A chunk as emitted by a backend, before re-keying.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendChunk {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub data: Vec<Frame>,
    /// Progress reported by the backend. Only `Streaming` is kept; the
    /// router owns `Done` and `Error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<LoadingState>,
}

impl BackendChunk {
    pub fn new(data: Vec<Frame>) -> Self {
        Self {
            key: None,
            data,
            state: None,
        }
    }

    pub fn keyed(key: impl Into<String>, data: Vec<Frame>) -> Self {
        Self {
            key: Some(key.into()),
            data,
            state: None,
        }
    }

    pub fn with_state(mut self, state: LoadingState) -> Self {
        self.state = Some(state);
        self
    }

    /// State of the re-keyed response chunk.
    pub fn response_state(&self) -> LoadingState {
        match self.state {
            Some(LoadingState::Streaming) => LoadingState::Streaming,
            _ => LoadingState::Loading,
        }
    }
}
