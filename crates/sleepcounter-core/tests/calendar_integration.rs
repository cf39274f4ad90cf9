//! Integration tests for calendar date keeping against a pinned clock.

use sleepcounter_core::{
    Anniversary, Calendar, CalendarError, Event, FixedClock, SpecialDay, SECONDS_PER_DAY,
};

fn bonfire_night() -> Event {
    Anniversary::new("Bonfire Night", 11, 5).unwrap().into()
}

fn halloween() -> Event {
    Anniversary::new("Halloween", 10, 31).unwrap().into()
}

fn christmas() -> Event {
    Anniversary::new("xmas", 12, 25).unwrap().into()
}

fn create_calendar(clock: FixedClock) -> Calendar<FixedClock> {
    Calendar::with_clock(clock)
        .with_event(bonfire_night())
        .with_event(halloween())
}

#[test]
fn test_sleeps_to_xmas() {
    let xmas = christmas();
    let calendar =
        Calendar::with_clock(FixedClock::at(2018, 12, 23, 11, 23)).with_event(xmas.clone());
    assert_eq!(calendar.sleeps_to_event(&xmas), 2);
}

#[test]
fn test_sleeps_to_xmas_too_many_sleeps() {
    // More sleeps to go than the event counts: it's too far away to report.
    let xmas: Event = Anniversary::new("xmas", 12, 25).unwrap().with_sleeps(10).into();
    let calendar = create_calendar(FixedClock::at(2018, 12, 2, 11, 23)).with_event(xmas.clone());
    assert!(!calendar.is_listed(&xmas));
    assert!(!calendar.events().contains(&&xmas));
}

#[test]
fn test_one_off_event_with_sleeps_gone_after_it_happened() {
    let foo: Event = SpecialDay::new("foo_event", 2018, 5, 3).unwrap().with_sleeps(10).into();
    let calendar = create_calendar(FixedClock::at(2018, 5, 5, 9, 15)).with_event(foo.clone());
    assert!(!calendar.is_listed(&foo));
    assert_eq!(calendar.next_event().unwrap(), &halloween());
}

#[test]
fn test_one_off_event_without_sleeps_gone_after_it_happened() {
    let foo: Event = SpecialDay::new("foo_event", 2018, 5, 3).unwrap().into();
    let calendar = create_calendar(FixedClock::at(2018, 5, 5, 9, 15)).with_event(foo.clone());
    assert!(!calendar.is_listed(&foo));
    assert_eq!(calendar.next_event().unwrap(), &halloween());
}

#[test]
fn test_one_off_event_listed_before_it_happens() {
    let foo: Event = SpecialDay::new("foo_event", 2018, 5, 3).unwrap().into();
    let calendar = create_calendar(FixedClock::at(2018, 4, 3, 9, 15)).with_event(foo.clone());
    assert!(calendar.is_listed(&foo));
    assert_eq!(calendar.next_event().unwrap(), &foo);
}

#[test]
fn test_seconds_to_xmas() {
    let xmas = christmas();
    let calendar =
        Calendar::with_clock(FixedClock::at(2018, 12, 23, 6, 30)).with_event(xmas.clone());
    assert_eq!(calendar.seconds_to_event(&xmas), 2 * SECONDS_PER_DAY);
    assert_eq!(calendar.seconds_to_next_event().unwrap(), 2 * SECONDS_PER_DAY);
    assert_eq!(calendar.sleeps_to_next_event().unwrap(), 2);
}

#[test]
fn test_get_next_event_to_happen() {
    let calendar = create_calendar(FixedClock::at(2018, 10, 14, 23, 1));
    assert_eq!(calendar.next_event().unwrap(), &halloween());
}

#[test]
fn test_todays_event_exists_after_wakeup_time() {
    let calendar = create_calendar(FixedClock::at(2018, 10, 31, 8, 0));
    assert!(calendar.special_day_today());
    assert_eq!(calendar.todays_event(), Some(&halloween()));
}

#[test]
fn test_no_event_before_wakeup_time() {
    let calendar = create_calendar(FixedClock::at(2018, 10, 31, 5, 0));
    assert_eq!(calendar.todays_event(), None);
    assert!(!calendar.special_day_today());
}

#[test]
fn test_today_not_a_special_day() {
    let calendar = create_calendar(FixedClock::at(2018, 10, 14, 0, 0));
    assert!(!calendar.special_day_today());
}

#[test]
fn test_is_nighttime() {
    let calendar = create_calendar(FixedClock::at(2018, 10, 14, 23, 1));
    assert!(calendar.is_nighttime());
}

#[test]
fn test_is_not_nighttime() {
    let calendar = create_calendar(FixedClock::at(2018, 10, 14, 11, 1));
    assert!(!calendar.is_nighttime());
}

#[test]
fn test_empty_active_set_is_an_error() {
    let calendar = Calendar::with_clock(FixedClock::at(2018, 10, 14, 11, 1));
    assert_eq!(calendar.next_event(), Err(CalendarError::EmptyActiveSet));
}

#[test]
fn test_calendar_follows_the_clock_through_the_night() {
    let mut calendar = create_calendar(FixedClock::at(2018, 10, 30, 18, 0));
    assert_eq!(calendar.sleeps_to_next_event().unwrap(), 1);
    assert!(!calendar.special_day_today());

    // Bedtime the night before.
    calendar.clock_mut().advance(chrono::Duration::hours(6));
    assert!(calendar.is_nighttime());
    assert_eq!(calendar.sleeps_to_next_event().unwrap(), 1);

    // Wake up on Halloween.
    calendar.clock_mut().advance(chrono::Duration::hours(6) + chrono::Duration::minutes(30));
    assert!(!calendar.is_nighttime());
    assert!(calendar.special_day_today());
    assert_eq!(calendar.sleeps_to_next_event().unwrap(), 0);
}
