//! Status banner, preview image, and zoom state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state
//! (`connections`, `form`) so the banner and preview panel can evolve
//! independently of the trace data. The banner holds only the latest
//! terminal state of the most recent action, not a history.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Lower zoom bound for the preview image.
pub const ZOOM_MIN: f64 = 0.5;
/// Upper zoom bound for the preview image.
pub const ZOOM_MAX: f64 = 2.0;
/// Zoom increment per button press.
pub const ZOOM_STEP: f64 = 0.1;

/// Severity of the status banner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusLevel {
    #[default]
    Idle,
    Loading,
    Ok,
    Error,
}

/// Presentation state: the one-line status banner, the preview image, and
/// the preview zoom factor.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub status_level: StatusLevel,
    pub status_text: String,
    /// Base64 PNG bytes of the last successful preview. A later failed
    /// preview leaves this in place; only Clear drops it.
    pub preview_image: Option<String>,
    pub zoom: f64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status_level: StatusLevel::Idle,
            status_text: "Idle".to_owned(),
            preview_image: None,
            zoom: 1.0,
        }
    }
}

impl UiState {
    /// Replace the banner with the latest state; no history is kept.
    pub fn set_status(&mut self, level: StatusLevel, text: impl Into<String>) {
        self.status_level = level;
        self.status_text = text.into();
    }

    /// Step the zoom up, clamped to [`ZOOM_MAX`].
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
    }

    /// Step the zoom down, clamped to [`ZOOM_MIN`].
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_MIN);
    }

    /// CSS class for the banner, matching the stylesheet modifiers.
    #[must_use]
    pub fn status_class(&self) -> &'static str {
        match self.status_level {
            StatusLevel::Idle => "status",
            StatusLevel::Loading => "status status--loading",
            StatusLevel::Ok => "status status--ok",
            StatusLevel::Error => "status status--error",
        }
    }
}
