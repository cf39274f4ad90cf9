//! Display widgets.
//!
//! A widget shows countdown information somehow (a console line, an LED
//! strip, a web page). Widgets poll a calendar from [`Widget::update`]; the
//! [`Application`](crate::Application) only sequences their lifecycle.

use crate::error::Result;

/// Interface every display widget implements.
///
/// The default `start`/`stop` describe a synchronous widget: there is no
/// background activity to start or stop, and updates happen only when
/// `update` is called.
pub trait Widget {
    /// Optional human readable label, used in logs.
    fn label(&self) -> Option<&str> {
        None
    }

    fn start(&mut self) {
        tracing::info!(
            "Cannot start. {} is synchronous",
            self.label().unwrap_or("widget")
        );
    }

    fn stop(&mut self) {
        tracing::info!("Cannot stop synchronous widget");
    }

    /// Whether the widget's activity is running. Synchronous widgets always are.
    fn is_running(&self) -> bool {
        true
    }

    /// Refresh whatever the widget displays.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget cannot render its data.
    fn update(&mut self) -> Result<()>;
}
