use crate::models::{new_id, CompletionRecord, Frequency, Task};
use chrono::{DateTime, Duration, Local, Months, NaiveDate};

/// Completion history keeps only this many entries per lineage.
const HISTORY_LIMIT: usize = 5;

/// Advances a due date by one recurrence step.
///
/// Monthly advancement uses calendar-month addition with end-of-month
/// clamping (Jan 31 + 1 month = Feb 28, or Feb 29 in a leap year).
/// Unrecognized frequencies fall back to one day.
pub fn advance(date: NaiveDate, frequency: Frequency) -> NaiveDate {
    match frequency {
        Frequency::Daily => date + Duration::days(1),
        Frequency::Weekly => date + Duration::days(7),
        Frequency::Monthly => date
            .checked_add_months(Months::new(1))
            .unwrap_or(date + Duration::days(1)),
        _ => date + Duration::days(1),
    }
}

/// The recurrence frequency of a task, if its first reminder is enabled and
/// recurring. Only `reminders[0]` drives recurrence.
fn recurring_frequency(task: &Task) -> Option<Frequency> {
    task.reminders
        .first()
        .filter(|r| r.enabled && r.frequency != Frequency::Once)
        .map(|r| r.frequency)
}

/// Marks a task completed and, if it recurs, builds its successor.
///
/// The completed task keeps its own id and stays in the list; the successor
/// gets a fresh id, the advanced due date, and a completion history extended
/// with a record of this completion (bounded to the most recent five).
pub fn complete_task(task: &Task, now: DateTime<Local>) -> (Task, Option<Task>) {
    let mut completed = task.clone();
    completed.completed = true;
    completed.completed_at = Some(now);

    let successor = recurring_frequency(task).map(|frequency| {
        let mut history = task.previous_completions.clone();
        history.push(CompletionRecord {
            id: task.id.clone(),
            completed_at: now,
            date: task.date,
        });
        if history.len() > HISTORY_LIMIT {
            let drop = history.len() - HISTORY_LIMIT;
            history.drain(..drop);
        }
        Task {
            id: new_id("task"),
            date: advance(task.date, frequency),
            completed: false,
            completed_at: None,
            created_at: now,
            previous_completions: history,
            ..task.clone()
        }
    });

    (completed, successor)
}

/// Reverts a completion: clears the completion fields on the original task
/// and removes any spawned successor, returning the list to its
/// pre-completion state.
///
/// A successor is recognized by a completion-history entry referencing the
/// undone task's id. Meant for the time-boxed undo affordance right after
/// completing, when the only such task is the immediate successor.
pub fn undo_completion(tasks: &mut Vec<Task>, original_id: &str) {
    if let Some(task) = tasks.iter_mut().find(|t| t.id == original_id) {
        task.completed = false;
        task.completed_at = None;
    }
    tasks.retain(|t| {
        t.id == original_id || !t.previous_completions.iter().any(|c| c.id == original_id)
    });
}
