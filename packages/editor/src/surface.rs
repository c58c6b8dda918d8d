//! Presentation surface: whatever shows print previews and user notices.
//!
//! The editor never talks to a window system directly. Hosts implement
//! [`PresentationSurface`]; [`RecordingSurface`] keeps everything in memory
//! for headless runs and tests.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("Print surface was blocked")]
    Blocked,

    #[error("Print surface failed: {0}")]
    Failed(String),
}

pub trait PresentationSurface {
    /// Hand a rendered card to a print surface
    fn open_print_surface(&mut self, markup: &str, stylesheet: &str) -> Result<(), SurfaceError>;

    /// Show a short message to the user
    fn notify(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintJob {
    pub markup: String,
    pub stylesheet: String,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub print_jobs: Vec<PrintJob>,
    pub notices: Vec<String>,
    blocked: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface that refuses every print request, like a blocked popup
    pub fn blocked() -> Self {
        Self {
            blocked: true,
            ..Self::default()
        }
    }
}

impl PresentationSurface for RecordingSurface {
    fn open_print_surface(&mut self, markup: &str, stylesheet: &str) -> Result<(), SurfaceError> {
        if self.blocked {
            return Err(SurfaceError::Blocked);
        }
        self.print_jobs.push(PrintJob {
            markup: markup.to_string(),
            stylesheet: stylesheet.to_string(),
        });
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
