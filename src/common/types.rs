use serde::{Deserialize, Serialize};

/// Settings shared by every registry created from them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitterConfig {
    /// Name used to prefix log lines
    #[serde(default)]
    pub name: Option<String>,
    /// Listener count per event above which a warning is logged (0 disables it)
    #[serde(default)]
    pub max_listeners: usize,
}

impl EmitterConfig {
    pub fn named(name: impl Into<String>) -> Self {
        EmitterConfig {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_max_listeners(mut self, max_listeners: usize) -> Self {
        self.max_listeners = max_listeners;
        self
    }

    /// Label used in log output.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("emitter")
    }
}
