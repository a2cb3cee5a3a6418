use crate::models::{Category, Suggestion, Task, Template, UserProfile};
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::PathBuf;

/// Returns the path to the tasks bucket file (`tasks.json`).
///
/// The path is determined in the following order:
/// 1. `ONTRACK_DB` environment variable.
/// 2. `~/.local/share/ontrack/tasks.json` (on Linux).
/// 3. `./tasks.json` (fallback).
///
/// The other buckets live in the same directory.
fn tasks_path() -> PathBuf {
    std::env::var("ONTRACK_DB").map(PathBuf::from).unwrap_or_else(|_| {
        let mut p = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("ontrack");
        if !p.exists() {
            let _ = fs::create_dir_all(&p);
        }
        p.push("tasks.json");
        p
    })
}

fn sibling(file: &str) -> PathBuf {
    let mut p = tasks_path();
    p.pop();
    p.push(file);
    p
}

fn categories_path() -> PathBuf {
    sibling("categories.json")
}

fn suggestions_path() -> PathBuf {
    sibling("suggestions.json")
}

fn profile_path() -> PathBuf {
    sibling("profile.json")
}

fn templates_path() -> PathBuf {
    sibling("templates.json")
}

fn read_file(path: &PathBuf) -> Option<String> {
    if !path.exists() {
        return None;
    }
    let mut f = OpenOptions::new().read(true).open(path).ok()?;
    let mut s = String::new();
    f.read_to_string(&mut s).ok()?;
    Some(s)
}

fn write_file(path: &PathBuf, contents: &str) -> std::io::Result<()> {
    let mut f = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    f.write_all(contents.as_bytes())?;
    Ok(())
}

/// Loads all tasks from the storage file.
///
/// Returns an empty vector if the file does not exist or cannot be parsed.
pub fn load_tasks() -> Vec<Task> {
    match read_file(&tasks_path()) {
        Some(s) => serde_json::from_str(&s).unwrap_or_else(|_| Vec::new()),
        None => Vec::new(),
    }
}

/// Saves the given list of tasks, overwriting the existing file.
pub fn save_tasks(tasks: &[Task]) -> std::io::Result<()> {
    let s = serde_json::to_string_pretty(tasks).unwrap();
    write_file(&tasks_path(), &s)
}

/// Loads all categories, migrating legacy stored shapes on the way out.
pub fn load_categories() -> Vec<Category> {
    let mut categories: Vec<Category> = match read_file(&categories_path()) {
        Some(s) => serde_json::from_str(&s).unwrap_or_else(|_| Vec::new()),
        None => Vec::new(),
    };
    for c in categories.iter_mut() {
        c.icon = migrate_icon(&c.icon);
    }
    categories
}

/// Saves the given list of categories.
pub fn save_categories(categories: &[Category]) -> std::io::Result<()> {
    let s = serde_json::to_string_pretty(categories).unwrap();
    write_file(&categories_path(), &s)
}

/// Loads persisted suggestions (with their dismissal/feedback state).
pub fn load_suggestions() -> Vec<Suggestion> {
    match read_file(&suggestions_path()) {
        Some(s) => serde_json::from_str(&s).unwrap_or_else(|_| Vec::new()),
        None => Vec::new(),
    }
}

/// Saves the given list of suggestions.
pub fn save_suggestions(suggestions: &[Suggestion]) -> std::io::Result<()> {
    let s = serde_json::to_string_pretty(suggestions).unwrap();
    write_file(&suggestions_path(), &s)
}

/// Loads the user profile, if onboarding has ever completed.
///
/// Legacy profile shapes are upgraded on read; migration is idempotent.
pub fn load_profile() -> Option<UserProfile> {
    let s = read_file(&profile_path())?;
    let profile: UserProfile = serde_json::from_str(&s).ok()?;
    Some(migrate_profile(profile))
}

/// Saves the user profile.
pub fn save_profile(profile: &UserProfile) -> std::io::Result<()> {
    let s = serde_json::to_string_pretty(profile).unwrap();
    write_file(&profile_path(), &s)
}

/// Removes the stored profile entirely (used when demo mode is turned off).
pub fn delete_profile() -> std::io::Result<()> {
    let path = profile_path();
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

/// Loads all templates from the storage file.
pub fn load_templates() -> Vec<Template> {
    match read_file(&templates_path()) {
        Some(s) => serde_json::from_str(&s).unwrap_or_else(|_| Vec::new()),
        None => Vec::new(),
    }
}

/// Saves the given list of templates.
pub fn save_templates(templates: &[Template]) -> std::io::Result<()> {
    let s = serde_json::to_string_pretty(templates).unwrap();
    write_file(&templates_path(), &s)
}

/// Loads a single template by its name.
pub fn load_template(name: &str) -> Option<Template> {
    load_templates().into_iter().find(|t| t.name == name)
}

/// Deletes every bucket file.
pub fn delete_database() -> std::io::Result<()> {
    for path in [
        tasks_path(),
        categories_path(),
        suggestions_path(),
        profile_path(),
        templates_path(),
    ] {
        if path.exists() {
            fs::remove_file(path)?;
        }
    }
    Ok(())
}

/// Maps a legacy emoji icon to its symbolic name. Already-symbolic icons
/// pass through unchanged, so repeated migration is a no-op.
fn migrate_icon(icon: &str) -> String {
    if icon.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return icon.to_string();
    }
    let symbolic = match icon {
        "\u{2708}" | "\u{2708}\u{fe0f}" | "\u{1f6eb}" => "plane",
        "\u{2764}" | "\u{2764}\u{fe0f}" | "\u{1f3e5}" => "heart",
        "\u{1f501}" | "\u{1f4f0}" => "repeat",
        "\u{1f6e1}" | "\u{1f6e1}\u{fe0f}" => "shield",
        "\u{1f4b5}" | "\u{1f4b0}" => "banknote",
        "\u{1f527}" | "\u{1f528}" => "wrench",
        "\u{1f697}" | "\u{1f698}" => "car",
        "\u{2602}" | "\u{2602}\u{fe0f}" => "umbrella",
        "\u{1f464}" => "user",
        _ => "tag",
    };
    symbolic.to_string()
}

/// Upgrades older profile shapes: a legacy flat `trackedCategories` list is
/// folded into `preferredCategories` when the latter is empty. Running on an
/// already-migrated profile changes nothing.
fn migrate_profile(mut profile: UserProfile) -> UserProfile {
    if profile.preferred_categories.is_empty() && !profile.tracked_categories.is_empty() {
        profile.preferred_categories = std::mem::take(&mut profile.tracked_categories);
    } else {
        profile.tracked_categories.clear();
    }
    profile
}
