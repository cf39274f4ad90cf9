use sleepcounter_core::{Application, Calendar, Clock, Widget};

use crate::widget::ConsoleWidget;

/// Run the application once: start every widget, update, then stop.
pub fn run<C: Clock + 'static>(calendar: Calendar<C>) -> Result<(), Box<dyn std::error::Error>> {
    let widgets: Vec<Box<dyn Widget>> = vec![Box::new(ConsoleWidget::new(calendar, "console"))];
    let mut app = Application::new(widgets);
    app.start();
    let result = app.update();
    app.stop();
    Ok(result?)
}
