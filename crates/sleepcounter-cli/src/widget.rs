//! A widget that prints the countdown to stdout.

use sleepcounter_core::error::Result;
use sleepcounter_core::{Calendar, Clock, CountdownSnapshot, Widget};

pub struct ConsoleWidget<C: Clock> {
    calendar: Calendar<C>,
    label: String,
}

impl<C: Clock> ConsoleWidget<C> {
    pub fn new(calendar: Calendar<C>, label: impl Into<String>) -> Self {
        Self {
            calendar,
            label: label.into(),
        }
    }

    /// The lines this widget displays for `snapshot`.
    pub fn render(snapshot: &CountdownSnapshot) -> Vec<String> {
        let mut lines = Vec::new();
        if snapshot.is_nighttime {
            lines.push("It's nighttime. Go back to sleep!".to_string());
        }
        if let (true, Some(name)) = (snapshot.special_day_today, &snapshot.todays_event) {
            lines.push(format!("Today is {name}!"));
        }
        match &snapshot.next_event {
            Some(next) if next.sleeps_remaining > 0 => {
                let unit = if next.sleeps_remaining == 1 { "sleep" } else { "sleeps" };
                lines.push(format!("{} {unit} until {}", next.sleeps_remaining, next.name));
            }
            Some(_) => {}
            None => lines.push("No special days coming up".to_string()),
        }
        lines
    }
}

impl<C: Clock> Widget for ConsoleWidget<C> {
    fn label(&self) -> Option<&str> {
        Some(self.label.as_str())
    }

    fn update(&mut self) -> Result<()> {
        let snapshot = self.calendar.snapshot();
        tracing::debug!("Rendering snapshot taken at {}", snapshot.at);
        for line in Self::render(&snapshot) {
            println!("{line}");
        }
        Ok(())
    }
}
