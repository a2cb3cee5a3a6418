use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// How often a reminder fires, and therefore how a completed task recurs.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Once,
    Daily,
    Weekly,
    Monthly,
    /// Multiple times per day, listed in `Reminder::custom_times`.
    Custom,
}

impl Frequency {
    /// Parses the user-facing spelling ("once", "daily", ...).
    pub fn parse(s: &str) -> Option<Frequency> {
        match s.to_lowercase().as_str() {
            "once" => Some(Frequency::Once),
            "daily" => Some(Frequency::Daily),
            "weekly" => Some(Frequency::Weekly),
            "monthly" => Some(Frequency::Monthly),
            "custom" => Some(Frequency::Custom),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Once => "once",
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Custom => "custom",
        }
    }
}

/// A scheduled notification attached to a task or template.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// Unique identifier for the reminder.
    pub id: String,
    /// Time of day the reminder fires.
    pub time: NaiveTime,
    /// Recurrence frequency; drives successor-task scheduling on completion.
    pub frequency: Frequency,
    /// Disabled reminders never spawn recurring successors.
    pub enabled: bool,
    /// Extra times per day when `frequency` is `Custom`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_times: Option<Vec<NaiveTime>>,
}

/// A user-visible grouping for tasks (e.g. "Health", "Vehicle").
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier, timestamp-derived.
    pub id: String,
    /// Human-readable name. Preference and hidden lists key on this,
    /// not on `id`, so renaming a category orphans preferences.
    pub name: String,
    /// Symbolic icon name (e.g. "plane"). Older installs stored emoji
    /// here; the storage layer migrates those on read.
    pub icon: String,
    /// Display color as a hex string.
    pub color: String,
    /// True for user-created categories, false for the predefined set.
    #[serde(default)]
    pub is_custom: bool,
}

impl Category {
    /// The predefined category set created at onboarding.
    pub fn defaults() -> Vec<Category> {
        let presets = [
            ("Travel", "plane", "#0ea5e9"),
            ("Health", "heart", "#ef4444"),
            ("Subscriptions", "repeat", "#8b5cf6"),
            ("Warranties", "shield", "#f59e0b"),
            ("Taxes & Finance", "banknote", "#10b981"),
            ("Home Maintenance", "wrench", "#64748b"),
            ("Vehicle", "car", "#3b82f6"),
            ("Insurance", "umbrella", "#14b8a6"),
            ("Personal", "user", "#ec4899"),
        ];
        presets
            .iter()
            .map(|(name, icon, color)| Category {
                id: new_id("category"),
                name: (*name).to_string(),
                icon: (*icon).to_string(),
                color: (*color).to_string(),
                is_custom: false,
            })
            .collect()
    }
}

/// One prior completion of a recurring task lineage.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    /// Id of the task occurrence that was completed.
    pub id: String,
    /// When it was completed.
    pub completed_at: DateTime<Local>,
    /// The due date it carried.
    pub date: NaiveDate,
}

/// A single actionable item with a due date.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, stable for the lifetime of one occurrence.
    /// Completing a recurring task mints a fresh id for the successor.
    pub id: String,
    /// Short description of the task.
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// The due date driving all scheduling logic.
    pub date: NaiveDate,
    /// Id of the owning category.
    pub category_id: String,
    /// Paths or URLs of attached files.
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Local>>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub reminders: Vec<Reminder>,
    pub created_at: DateTime<Local>,
    /// Completion history for recurring lineages, most recent last,
    /// bounded to the 5 latest entries.
    #[serde(default)]
    pub previous_completions: Vec<CompletionRecord>,
}

/// What kind of action a suggestion invites.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Reminder,
    Tip,
    Action,
}

impl SuggestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionKind::Reminder => "reminder",
            SuggestionKind::Tip => "tip",
            SuggestionKind::Action => "action",
        }
    }
}

/// User reaction to a suggestion.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    More,
    Less,
}

impl Feedback {
    pub fn parse(s: &str) -> Option<Feedback> {
        match s.to_lowercase().as_str() {
            "more" => Some(Feedback::More),
            "less" => Some(Feedback::Less),
            _ => None,
        }
    }
}

/// An engine-generated tip, action, or reminder surfaced to the user.
///
/// Ids are deterministic per rule so that regenerated suggestions can be
/// matched against previously persisted dismissal/feedback state.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_task_id: Option<String>,
    /// Higher is surfaced first.
    pub relevance: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
    #[serde(default)]
    pub dismissed: bool,
    pub created_at: DateTime<Local>,
}

/// A reusable task blueprint, either bundled or user-created.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    /// Unique template name, the key used on the command line.
    pub name: String,
    pub category_id: String,
    /// Default title for tasks created from this template.
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub reminders: Vec<Reminder>,
    #[serde(default)]
    pub is_preset: bool,
    pub created_at: DateTime<Local>,
}

impl Template {
    /// Bundled preset templates, wired to the given category set by name.
    pub fn presets(categories: &[Category]) -> Vec<Template> {
        let find = |name: &str| {
            categories
                .iter()
                .find(|c| c.name == name)
                .map(|c| c.id.clone())
                .unwrap_or_default()
        };
        let entries = [
            (
                "Passport Renewal",
                "Travel",
                "Renew passport",
                "Check expiry date and gather renewal documents.",
            ),
            (
                "Dental Checkup",
                "Health",
                "Dental checkup",
                "Book the next cleaning appointment.",
            ),
            (
                "Oil Change",
                "Vehicle",
                "Oil change",
                "Check mileage since last service.",
            ),
            (
                "Filter Replacement",
                "Home Maintenance",
                "Replace HVAC filter",
                "Standard size noted on the old filter.",
            ),
        ];
        entries
            .iter()
            .map(|(name, cat, title, notes)| Template {
                id: new_id("template"),
                name: (*name).to_string(),
                category_id: find(cat),
                title: (*title).to_string(),
                description: String::new(),
                notes: (*notes).to_string(),
                reminders: Vec::new(),
                is_preset: true,
                created_at: Local::now(),
            })
            .collect()
    }
}

/// Singleton per-installation profile. Absent until onboarding completes;
/// reset to absent when demo mode is turned off.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Category names the user chose to track. Keys on names, not ids.
    #[serde(default)]
    pub preferred_categories: Vec<String>,
    /// Predefined category names the user soft-deleted.
    #[serde(default)]
    pub hidden_categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default)]
    pub has_completed_onboarding: bool,
    #[serde(default)]
    pub calendar_integration: bool,
    #[serde(default)]
    pub notifications_enabled: bool,
    #[serde(default)]
    pub demo_mode: bool,
    /// Pre-migration installs stored a single flat list of tracked
    /// category names; folded into `preferred_categories` on load.
    #[serde(default, skip_serializing)]
    pub tracked_categories: Vec<String>,
}

static ID_SEQ: AtomicU64 = AtomicU64::new(0);

/// Generates a timestamp-derived id unique within this process,
/// e.g. `task-1724500000000-3`.
pub fn new_id(prefix: &str) -> String {
    let seq = ID_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}-{}", prefix, Local::now().timestamp_millis(), seq)
}
