use serde_json::json;
use sleepcounter_core::{Calendar, Clock, Countdown, Event, EventSummary};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// One line describing how far away `event` is.
fn describe<C: Clock>(calendar: &Calendar<C>, event: &Event) -> String {
    let sleeps = calendar.sleeps_to_event(event);
    let unit = if sleeps == 1 { "sleep" } else { "sleeps" };
    format!("{event}: {sleeps} {unit}")
}

pub fn status<C: Clock>(calendar: &Calendar<C>) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(&calendar.snapshot())?);
    Ok(())
}

pub fn next<C: Clock>(calendar: &Calendar<C>, json: bool) -> CmdResult {
    let event = calendar.next_event()?;
    if json {
        let summary = EventSummary::of(event, calendar.now());
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", describe(calendar, event));
    }
    Ok(())
}

pub fn events<C: Clock>(calendar: &Calendar<C>, json: bool) -> CmdResult {
    let events = calendar.events();
    if json {
        let now = calendar.now();
        let summaries: Vec<EventSummary> =
            events.iter().map(|e| EventSummary::of(e, now)).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else if events.is_empty() {
        println!("No special days coming up");
    } else {
        for event in events {
            println!("{}", describe(calendar, event));
        }
    }
    Ok(())
}

pub fn today<C: Clock>(calendar: &Calendar<C>, json: bool) -> CmdResult {
    let special = calendar.special_day_today();
    let todays = calendar.todays_event();
    if json {
        let value = json!({
            "special_day_today": special,
            "todays_event": todays.map(|e| e.name()),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        match todays {
            Some(event) => println!("Today is {}!", event.name()),
            None => println!("Not a special day"),
        }
    }
    Ok(())
}

pub fn night<C: Clock>(calendar: &Calendar<C>) -> CmdResult {
    println!("{}", calendar.is_nighttime());
    Ok(())
}
