//! Application lifecycle: start, update and stop a set of widgets in order.

use crate::error::Result;
use crate::widget::Widget;

/// Owns the display widgets and forwards lifecycle calls to each of them.
pub struct Application {
    widgets: Vec<Box<dyn Widget>>,
}

impl Application {
    pub fn new(widgets: Vec<Box<dyn Widget>>) -> Self {
        Self { widgets }
    }

    pub fn widgets(&self) -> &[Box<dyn Widget>] {
        &self.widgets
    }

    /// Start all the widgets.
    pub fn start(&mut self) {
        tracing::info!("Starting widgets...");
        for widget in &mut self.widgets {
            tracing::info!("Starting widget {}", widget.label().unwrap_or("<unlabelled>"));
            widget.start();
        }
    }

    /// Update every widget once, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by a widget.
    pub fn update(&mut self) -> Result<()> {
        for widget in &mut self.widgets {
            tracing::debug!("Updating widget {}", widget.label().unwrap_or("<unlabelled>"));
            widget.update()?;
        }
        Ok(())
    }

    /// Stop all the widgets.
    pub fn stop(&mut self) {
        tracing::info!("Stopping widgets...");
        for widget in &mut self.widgets {
            tracing::info!("Stopping widget {}", widget.label().unwrap_or("<unlabelled>"));
            widget.stop();
        }
    }
}
