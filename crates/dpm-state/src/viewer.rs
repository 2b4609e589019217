//! Request and status types exchanged with the image viewer.
//!
//! Decoding and rendering belong to the external imaging library; the host
//! view only decides which stack to show, where to start, and which tool
//! the primary mouse button drives.

use std::fmt;

/// Message shown when the imaging library reports a load failure.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load DICOM image";

/// Primary-button tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewerTool {
    /// Window width / level
    #[default]
    WindowLevel,
    Pan,
    Zoom,
}

impl ViewerTool {
    /// Tool name as registered with the imaging library.
    pub const fn library_name(&self) -> &'static str {
        match self {
            Self::WindowLevel => "Wwwc",
            Self::Pan => "Pan",
            Self::Zoom => "Zoom",
        }
    }
}

impl fmt::Display for ViewerTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.library_name())
    }
}

/// What the host asks the viewer to display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerRequest {
    /// Opaque image identifiers, in stack order
    pub image_ids: Vec<String>,
    pub active_tool: ViewerTool,
    pub initial_index: usize,
}

impl ViewerRequest {
    pub fn new(image_ids: Vec<String>) -> Self {
        Self {
            image_ids,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_tool(mut self, tool: ViewerTool) -> Self {
        self.active_tool = tool;
        self
    }

    #[must_use]
    pub fn starting_at(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }

    /// Index of the first image to load, clamped to the stack.
    pub fn target_index(&self) -> Option<usize> {
        let last = self.image_ids.len().checked_sub(1)?;
        Some(self.initial_index.min(last))
    }

    /// Status to show before the library reports back.
    pub fn initial_status(&self) -> ViewerStatus {
        if self.image_ids.is_empty() {
            ViewerStatus::Empty
        } else {
            ViewerStatus::Loading
        }
    }
}

/// Loading state reported back to the host view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerStatus {
    /// Nothing to display
    Empty,
    Loading,
    Ready {
        /// Index of the displayed image
        index: usize,
    },
    Failed {
        /// [`LOAD_FAILURE_MESSAGE`] for library load errors
        message: String,
    },
}

impl ViewerStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
