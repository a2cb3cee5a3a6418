use chrono::{Duration, Local, NaiveDate, NaiveTime};
use ontrack::models::{new_id, Frequency, Reminder, Task};
use ontrack::recurrence::{advance, complete_task, undo_completion};

fn reminder(frequency: Frequency, enabled: bool) -> Reminder {
    Reminder {
        id: new_id("reminder"),
        time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        frequency,
        enabled,
        custom_times: None,
    }
}

fn task(due: NaiveDate, reminders: Vec<Reminder>) -> Task {
    Task {
        id: new_id("task"),
        title: "Water the plants".into(),
        description: String::new(),
        date: due,
        category_id: "category-1".into(),
        attachments: Vec::new(),
        completed: false,
        completed_at: None,
        notes: String::new(),
        reminders,
        created_at: Local::now(),
        previous_completions: Vec::new(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn advance_daily_weekly_monthly() {
    let d = date(2026, 3, 10);
    assert_eq!(advance(d, Frequency::Daily), date(2026, 3, 11));
    assert_eq!(advance(d, Frequency::Weekly), date(2026, 3, 17));
    assert_eq!(advance(d, Frequency::Monthly), date(2026, 4, 10));
}

#[test]
fn advance_monthly_clamps_to_month_end() {
    assert_eq!(advance(date(2026, 1, 31), Frequency::Monthly), date(2026, 2, 28));
    assert_eq!(advance(date(2024, 1, 31), Frequency::Monthly), date(2024, 2, 29));
    assert_eq!(advance(date(2026, 3, 31), Frequency::Monthly), date(2026, 4, 30));
}

#[test]
fn advance_unrecognized_frequency_defaults_to_one_day() {
    let d = date(2026, 3, 10);
    assert_eq!(advance(d, Frequency::Custom), date(2026, 3, 11));
    assert_eq!(advance(d, Frequency::Once), date(2026, 3, 11));
}

#[test]
fn completing_weekly_task_spawns_successor() {
    let due = date(2026, 5, 4);
    let original = task(due, vec![reminder(Frequency::Weekly, true)]);
    let original_id = original.id.clone();
    let now = Local::now();

    let (completed, successor) = complete_task(&original, now);

    assert!(completed.completed);
    assert_eq!(completed.completed_at, Some(now));
    assert_eq!(completed.id, original_id);

    let next = successor.expect("weekly task should spawn a successor");
    assert_ne!(next.id, original_id);
    assert_eq!(next.date, due + Duration::days(7));
    assert!(!next.completed);
    assert!(next.completed_at.is_none());
    assert_eq!(next.title, original.title);
    assert_eq!(next.category_id, original.category_id);
    assert_eq!(next.reminders.len(), 1);

    let last = next.previous_completions.last().expect("history entry");
    assert_eq!(last.id, original_id);
    assert_eq!(last.date, due);
    assert_eq!(last.completed_at, now);
}

#[test]
fn completing_without_reminders_spawns_nothing() {
    let original = task(date(2026, 5, 4), Vec::new());
    let (completed, successor) = complete_task(&original, Local::now());
    assert!(completed.completed);
    assert!(successor.is_none());
}

#[test]
fn once_frequency_spawns_nothing() {
    let original = task(date(2026, 5, 4), vec![reminder(Frequency::Once, true)]);
    let (_, successor) = complete_task(&original, Local::now());
    assert!(successor.is_none());
}

#[test]
fn disabled_reminder_spawns_nothing() {
    let original = task(date(2026, 5, 4), vec![reminder(Frequency::Weekly, false)]);
    let (_, successor) = complete_task(&original, Local::now());
    assert!(successor.is_none());
}

#[test]
fn history_is_bounded_to_five_entries() {
    let mut current = task(date(2026, 1, 1), vec![reminder(Frequency::Daily, true)]);
    let mut completed_ids = Vec::new();

    for _ in 0..6 {
        completed_ids.push(current.id.clone());
        let (_, successor) = complete_task(&current, Local::now());
        current = successor.expect("daily task should keep recurring");
    }

    assert_eq!(current.previous_completions.len(), 5);
    // The very first completion fell off; the five most recent remain in order.
    let kept: Vec<&str> = current
        .previous_completions
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    let expected: Vec<&str> = completed_ids[1..].iter().map(|s| s.as_str()).collect();
    assert_eq!(kept, expected);
    for pair in current.previous_completions.windows(2) {
        assert!(pair[0].completed_at <= pair[1].completed_at);
        assert!(pair[0].date < pair[1].date);
    }
}

#[test]
fn undo_restores_pre_completion_state() {
    let original = task(date(2026, 5, 4), vec![reminder(Frequency::Weekly, true)]);
    let original_id = original.id.clone();
    let before = vec![original];
    let snapshot = serde_json::to_value(&before).unwrap();

    let (completed, successor) = complete_task(&before[0], Local::now());
    let mut tasks = vec![completed];
    tasks.push(successor.unwrap());
    assert_eq!(tasks.len(), 2);

    undo_completion(&mut tasks, &original_id);
    assert_eq!(serde_json::to_value(&tasks).unwrap(), snapshot);
}

#[test]
fn undo_non_recurring_just_clears_completion() {
    let original = task(date(2026, 5, 4), Vec::new());
    let original_id = original.id.clone();
    let (completed, successor) = complete_task(&original, Local::now());
    assert!(successor.is_none());

    let mut tasks = vec![completed];
    undo_completion(&mut tasks, &original_id);
    assert_eq!(tasks.len(), 1);
    assert!(!tasks[0].completed);
    assert!(tasks[0].completed_at.is_none());
}
