use crate::models::{Category, Suggestion, SuggestionKind, Task};
use chrono::{Datelike, Local, NaiveDate};

/// Builds the deterministic id for a task-derived suggestion.
///
/// The id doubles as the merge key that lets dismissal and feedback state
/// survive regeneration, so it must stay stable for a given task and rule.
pub fn suggestion_id(task_id: &str, rule: &str) -> String {
    format!("suggestion-{}-{}", task_id, rule)
}

fn suggestion(
    id: String,
    message: String,
    kind: SuggestionKind,
    related_task_id: Option<String>,
    relevance: u8,
) -> Suggestion {
    Suggestion {
        id,
        message,
        kind,
        related_task_id,
        relevance,
        feedback: None,
        dismissed: false,
        created_at: Local::now(),
    }
}

/// Scans all incomplete tasks and emits category-specific, time-window-gated
/// suggestions, sorted descending by relevance.
///
/// Pure apart from the wall clock; see [`generate_suggestions_on`] for the
/// date-injected form the tests use.
pub fn generate_suggestions(tasks: &[Task], categories: &[Category]) -> Vec<Suggestion> {
    generate_suggestions_on(tasks, categories, Local::now().date_naive())
}

/// Date-injected form of [`generate_suggestions`].
///
/// Rules are independent and non-exclusive: one task may emit zero, one, or
/// several suggestions. Tasks whose category id resolves to nothing are
/// skipped. Window boundaries are exact: day 0 ("today") is outside every
/// strict `0 < d` window but inside the inclusive subscription and
/// home-maintenance windows.
pub fn generate_suggestions_on(
    tasks: &[Task],
    categories: &[Category],
    today: NaiveDate,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    for task in tasks.iter().filter(|t| !t.completed) {
        let category = match categories.iter().find(|c| c.id == task.category_id) {
            Some(c) => c,
            None => continue,
        };
        let days_until = (task.date - today).num_days();
        let title = task.title.to_lowercase();

        match category.name.as_str() {
            "Travel" => {
                if days_until > 0
                    && days_until <= 90
                    && (title.contains("japan") || title.contains("travel"))
                {
                    let relevance = if days_until <= 30 { 10 } else { 7 };
                    suggestions.push(suggestion(
                        suggestion_id(&task.id, "passport"),
                        format!(
                            "\"{}\" is coming up in {} days. Check that your passport is valid and travel documents are ready.",
                            task.title, days_until
                        ),
                        SuggestionKind::Tip,
                        Some(task.id.clone()),
                        relevance,
                    ));
                }
            }
            "Health" => {
                let months_overdue = -days_until / 30;
                if months_overdue >= 6 && title.contains("dental") {
                    suggestions.push(suggestion(
                        suggestion_id(&task.id, "dental"),
                        format!(
                            "It has been over {} months since \"{}\" was due. Time to book a dental appointment.",
                            months_overdue, task.title
                        ),
                        SuggestionKind::Reminder,
                        Some(task.id.clone()),
                        8,
                    ));
                }
            }
            "Subscriptions" => {
                if (-7..=7).contains(&days_until) {
                    let message = if days_until >= 0 {
                        format!(
                            "\"{}\" renews in {} days. Review whether you still need it.",
                            task.title, days_until
                        )
                    } else {
                        format!(
                            "\"{}\" renewed {} days ago. Cancel now if you no longer use it.",
                            task.title, -days_until
                        )
                    };
                    suggestions.push(suggestion(
                        suggestion_id(&task.id, "renewal"),
                        message,
                        SuggestionKind::Action,
                        Some(task.id.clone()),
                        9,
                    ));
                }
            }
            "Warranties" => {
                if days_until > 0 && days_until <= 30 {
                    suggestions.push(suggestion(
                        suggestion_id(&task.id, "warranty"),
                        format!(
                            "The warranty for \"{}\" expires in {} days. File any claims before it lapses.",
                            task.title, days_until
                        ),
                        SuggestionKind::Reminder,
                        Some(task.id.clone()),
                        8,
                    ));
                }
            }
            "Taxes & Finance" => {
                if days_until > 0 && days_until <= 14 {
                    suggestions.push(suggestion(
                        suggestion_id(&task.id, "tax-deadline"),
                        format!(
                            "\"{}\" is due in {} days. Gather your documents now.",
                            task.title, days_until
                        ),
                        SuggestionKind::Action,
                        Some(task.id.clone()),
                        10,
                    ));
                }
            }
            "Home Maintenance" => {
                if (-30..=0).contains(&days_until) {
                    suggestions.push(suggestion(
                        suggestion_id(&task.id, "maintenance"),
                        format!(
                            "\"{}\" is due. Regular upkeep prevents bigger repairs.",
                            task.title
                        ),
                        SuggestionKind::Reminder,
                        Some(task.id.clone()),
                        7,
                    ));
                }
            }
            _ => {}
        }
    }

    // Stable sort keeps scan order for equal relevance.
    suggestions.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    suggestions
}

/// Emits the single suggestion shown to a user who tracks categories but has
/// no tasks yet. Always returns exactly one suggestion.
pub fn generate_category_suggestion(preferred_categories: &[String]) -> Suggestion {
    generate_category_suggestion_for_month(preferred_categories, Local::now().month())
}

/// Month-injected form of [`generate_category_suggestion`].
///
/// A fixed priority cascade evaluated top to bottom, first match wins. The
/// ordering is seasonal by design: tracking both Vehicle and Health in
/// October yields only the winter-tire suggestion.
pub fn generate_category_suggestion_for_month(
    preferred_categories: &[String],
    month: u32,
) -> Suggestion {
    let tracked = |name: &str| preferred_categories.iter().any(|p| p == name);

    if tracked("Vehicle") && (month == 10 || month == 11) {
        suggestion(
            "suggestion-category-vehicle-winter".to_string(),
            "Winter is coming. Schedule your winter tire change before the first snowfall.".to_string(),
            SuggestionKind::Tip,
            None,
            10,
        )
    } else if tracked("Health") {
        suggestion(
            "suggestion-category-health-checkup".to_string(),
            "Stay ahead of your health: add a reminder for your annual checkup.".to_string(),
            SuggestionKind::Tip,
            None,
            9,
        )
    } else if tracked("Home Maintenance") && (month >= 9 || month <= 3) {
        suggestion(
            "suggestion-category-home-hvac".to_string(),
            "Heating season: replace your HVAC filter for better air and lower bills.".to_string(),
            SuggestionKind::Tip,
            None,
            8,
        )
    } else if tracked("Taxes & Finance") && (1..=4).contains(&month) {
        suggestion(
            "suggestion-category-tax-season".to_string(),
            "Tax season is here. Start collecting your receipts and statements.".to_string(),
            SuggestionKind::Action,
            None,
            9,
        )
    } else if tracked("Travel") {
        suggestion(
            "suggestion-category-travel-passport".to_string(),
            "Planning a trip? Check your passport expiry date well in advance.".to_string(),
            SuggestionKind::Tip,
            None,
            8,
        )
    } else if tracked("Subscriptions") {
        suggestion(
            "suggestion-category-subscriptions-review".to_string(),
            "Add your subscriptions to catch renewals before they charge you.".to_string(),
            SuggestionKind::Action,
            None,
            7,
        )
    } else if tracked("Warranties") {
        suggestion(
            "suggestion-category-warranties-organize".to_string(),
            "Organize your warranties so expiry dates never slip past you.".to_string(),
            SuggestionKind::Tip,
            None,
            7,
        )
    } else if tracked("Insurance") {
        suggestion(
            "suggestion-category-insurance-review".to_string(),
            "Add your insurance renewal dates for an annual coverage review.".to_string(),
            SuggestionKind::Tip,
            None,
            8,
        )
    } else if tracked("Personal") {
        suggestion(
            "suggestion-category-personal-first-task".to_string(),
            "Add your first personal task to get started.".to_string(),
            SuggestionKind::Tip,
            None,
            6,
        )
    } else {
        suggestion(
            "suggestion-category-welcome".to_string(),
            "Welcome to OnTrack! Add a task or pick categories to track to get tailored tips.".to_string(),
            SuggestionKind::Tip,
            None,
            5,
        )
    }
}

/// Carries persisted `dismissed`/`feedback` state onto freshly generated
/// suggestions by matching on their deterministic ids.
pub fn merge_suggestion_state(fresh: Vec<Suggestion>, previous: &[Suggestion]) -> Vec<Suggestion> {
    fresh
        .into_iter()
        .map(|mut s| {
            if let Some(old) = previous.iter().find(|p| p.id == s.id) {
                s.dismissed = old.dismissed;
                s.feedback = old.feedback;
            }
            s
        })
        .collect()
}
