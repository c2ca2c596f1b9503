use egui::Color32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::ToolEngine;
use crate::error::PaintError;
use crate::tools::Tool;

/// Errors that can occur while saving or restoring tool settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to serialize tool settings: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid tool settings: {0}")]
    InvalidSettings(#[from] PaintError),
}

/// A serializable snapshot of the tool state, so the owning application
/// can persist the active tool, size, and colors across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSettings {
    pub tool: Tool,
    /// Effective tool size (>= 1).
    pub size: u32,
    pub foreground: Color32,
    pub background: Color32,
}

impl ToolSettings {
    /// Snapshots the engine's current tool state.
    pub fn capture(engine: &ToolEngine) -> Self {
        Self {
            tool: engine.active_tool(),
            size: engine.tool_size(),
            foreground: engine.foreground(),
            background: engine.background(),
        }
    }

    /// Applies this snapshot to `engine`. Fails on a snapshot with a zero
    /// size (hand-edited or from an incompatible version), leaving the
    /// engine unchanged.
    pub fn apply(&self, engine: &mut ToolEngine) -> Result<(), SettingsError> {
        if self.size == 0 {
            return Err(SettingsError::InvalidSettings(PaintError::InvalidArgument(
                "tool size in settings must be >= 1".into(),
            )));
        }
        engine.set_tool_size(self.size as i32 - 1)?;
        engine.set_active_tool(self.tool);
        engine.set_foreground(self.foreground);
        engine.set_background(self.background);
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }
}
