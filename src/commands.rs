use crate::models::{
    new_id, Category, Feedback, Frequency, Reminder, Suggestion, Task, Template, UserProfile,
};
use crate::recurrence::{complete_task, undo_completion};
use crate::storage::{
    delete_database, delete_profile, load_categories, load_profile, load_suggestions, load_tasks,
    load_template, load_templates, save_categories, save_profile, save_suggestions, save_tasks,
    save_templates,
};
use crate::suggestions::{generate_category_suggestion, generate_suggestions, merge_suggestion_state};
use chrono::{Duration, Local, NaiveDate, NaiveTime};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use std::io::{self, Write};

/// Default reminder time of day for tasks created on the command line.
fn default_reminder_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default()
}

/// Finds a task by exact id or unique id prefix.
///
/// Ids are long timestamp strings, so the CLI accepts any unambiguous
/// prefix. Returns `None` when nothing or more than one task matches.
pub fn find_task_id(tasks: &[Task], id: &str) -> Option<String> {
    if let Some(t) = tasks.iter().find(|t| t.id == id) {
        return Some(t.id.clone());
    }
    let mut matches = tasks.iter().filter(|t| t.id.starts_with(id));
    let first = matches.next()?;
    if matches.next().is_some() {
        return None;
    }
    Some(first.id.clone())
}

/// Completes onboarding: creates the profile with the chosen preferred
/// category names and seeds the predefined categories and preset templates.
pub fn cmd_init(preferred: Vec<String>, silent: bool) {
    if load_profile().is_some() {
        if !silent {
            eprintln!("Already initialized. Use `ontrack reset` to start over.");
        }
        return;
    }

    let mut categories = load_categories();
    if categories.is_empty() {
        categories = Category::defaults();
        if let Err(e) = save_categories(&categories) {
            if !silent {
                eprintln!("Failed to save categories: {}", e);
            }
            return;
        }
    }

    let mut templates = load_templates();
    if templates.is_empty() {
        templates = Template::presets(&categories);
        if let Err(e) = save_templates(&templates) {
            if !silent {
                eprintln!("Failed to save templates: {}", e);
            }
        }
    }

    let profile = UserProfile {
        preferred_categories: preferred,
        has_completed_onboarding: true,
        ..UserProfile::default()
    };
    if let Err(e) = save_profile(&profile) {
        if !silent {
            eprintln!("Failed to save profile: {}", e);
        }
    } else if !silent {
        println!(
            "Profile created, tracking {} categories.",
            profile.preferred_categories.len()
        );
    }
}

/// Adds a new task.
///
/// A named template pre-fills category, description, notes, and reminders;
/// explicit arguments win over template defaults.
pub fn cmd_add(
    title: String,
    category_name: Option<String>,
    due: String,
    description: Option<String>,
    notes: Option<String>,
    recur: Option<String>,
    template_name: Option<String>,
    silent: bool,
) {
    let due_date = match NaiveDate::parse_from_str(&due, "%Y-%m-%d") {
        Ok(d) => d,
        Err(e) => {
            if !silent {
                eprintln!("Invalid due date '{}': {}. Use YYYY-MM-DD.", due, e);
            }
            return;
        }
    };

    let categories = load_categories();
    let mut category_id = String::new();
    if let Some(name) = &category_name {
        match categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
        {
            Some(c) => category_id = c.id.clone(),
            None => {
                if !silent {
                    eprintln!(
                        "Category '{}' not found. Add it with `ontrack category add`.",
                        name
                    );
                }
                return;
            }
        }
    }

    let mut description = description.unwrap_or_default();
    let mut notes = notes.unwrap_or_default();
    let mut reminders = Vec::new();

    if let Some(t_name) = &template_name {
        match load_template(t_name) {
            Some(tmpl) => {
                if category_name.is_none() {
                    category_id = tmpl.category_id.clone();
                }
                if description.is_empty() {
                    description = tmpl.description.clone();
                }
                if notes.is_empty() {
                    notes = tmpl.notes.clone();
                }
                reminders = tmpl.reminders.clone();
            }
            None => {
                if !silent {
                    eprintln!("Template '{}' not found.", t_name);
                }
                return;
            }
        }
    }

    if let Some(r) = &recur {
        match Frequency::parse(r) {
            Some(frequency) => {
                reminders = vec![Reminder {
                    id: new_id("reminder"),
                    time: default_reminder_time(),
                    frequency,
                    enabled: true,
                    custom_times: None,
                }];
            }
            None => {
                if !silent {
                    eprintln!(
                        "Unknown frequency '{}'. Supported: once, daily, weekly, monthly, custom.",
                        r
                    );
                }
                return;
            }
        }
    }

    let task = Task {
        id: new_id("task"),
        title,
        description,
        date: due_date,
        category_id,
        attachments: Vec::new(),
        completed: false,
        completed_at: None,
        notes,
        reminders,
        created_at: Local::now(),
        previous_completions: Vec::new(),
    };
    let task_id = task.id.clone();

    let mut tasks = load_tasks();
    tasks.push(task);
    if let Err(e) = save_tasks(&tasks) {
        if !silent {
            eprintln!("Failed to save tasks: {}", e);
        }
    } else if !silent {
        println!("Task added (id = {})", task_id);
    }
}

/// Marks a task as complete.
///
/// If the task has an enabled recurring reminder, the next occurrence is
/// created with the advanced due date and extended completion history.
pub fn cmd_complete(id: &str, silent: bool) {
    let mut tasks = load_tasks();
    let task_id = match find_task_id(&tasks, id) {
        Some(t) => t,
        None => {
            if !silent {
                eprintln!("Task '{}' not found.", id);
            }
            return;
        }
    };

    let idx = tasks.iter().position(|t| t.id == task_id).unwrap_or(0);
    if tasks[idx].completed {
        if !silent {
            println!("Task {} is already complete.", task_id);
        }
        return;
    }

    let (completed, successor) = complete_task(&tasks[idx], Local::now());
    tasks[idx] = completed;
    if !silent {
        println!("Task {} marked as complete.", task_id);
    }
    if let Some(next) = successor {
        if !silent {
            println!("Recurring task created due on {}", next.date);
        }
        tasks.push(next);
    }

    if let Err(e) = save_tasks(&tasks) {
        if !silent {
            eprintln!("Failed to save tasks: {}", e);
        }
    }
}

/// Reverts a completion, removing any successor the completion spawned.
pub fn cmd_undo(id: &str, silent: bool) {
    let mut tasks = load_tasks();
    let task_id = match find_task_id(&tasks, id) {
        Some(t) => t,
        None => {
            if !silent {
                eprintln!("Task '{}' not found.", id);
            }
            return;
        }
    };

    undo_completion(&mut tasks, &task_id);
    if let Err(e) = save_tasks(&tasks) {
        if !silent {
            eprintln!("Failed to save tasks: {}", e);
        }
    } else if !silent {
        println!("Completion of task {} undone.", task_id);
    }
}

/// Removes a task.
pub fn cmd_remove(id: &str, silent: bool) {
    let mut tasks = load_tasks();
    let task_id = match find_task_id(&tasks, id) {
        Some(t) => t,
        None => {
            if !silent {
                eprintln!("Task '{}' not found.", id);
            }
            return;
        }
    };
    tasks.retain(|t| t.id != task_id);
    if let Err(e) = save_tasks(&tasks) {
        if !silent {
            eprintln!("Failed to save tasks: {}", e);
        }
    } else if !silent {
        println!("Task {} removed.", task_id);
    }
}

/// Edits an existing task's details.
pub fn cmd_edit(
    id: &str,
    title: Option<String>,
    category_name: Option<String>,
    due: Option<String>,
    notes: Option<String>,
    recur: Option<String>,
    silent: bool,
) {
    let mut tasks = load_tasks();
    let task_id = match find_task_id(&tasks, id) {
        Some(t) => t,
        None => {
            if !silent {
                eprintln!("Task '{}' not found.", id);
            }
            return;
        }
    };

    let category_id = match &category_name {
        Some(name) => {
            let categories = load_categories();
            match categories
                .iter()
                .find(|c| c.name.eq_ignore_ascii_case(name))
            {
                Some(c) => Some(c.id.clone()),
                None => {
                    if !silent {
                        eprintln!("Category '{}' not found.", name);
                    }
                    return;
                }
            }
        }
        None => None,
    };

    if let Some(t) = tasks.iter_mut().find(|t| t.id == task_id) {
        if let Some(n) = title {
            t.title = n;
        }
        if let Some(cid) = category_id {
            t.category_id = cid;
        }
        if let Some(n) = notes {
            t.notes = n;
        }
        if let Some(r) = recur {
            match Frequency::parse(&r) {
                Some(frequency) => {
                    if let Some(first) = t.reminders.first_mut() {
                        first.frequency = frequency;
                    } else {
                        t.reminders.push(Reminder {
                            id: new_id("reminder"),
                            time: default_reminder_time(),
                            frequency,
                            enabled: true,
                            custom_times: None,
                        });
                    }
                }
                None => {
                    if !silent {
                        eprintln!("Unknown frequency '{}'.", r);
                    }
                    return;
                }
            }
        }
        if let Some(d) = due {
            match NaiveDate::parse_from_str(&d, "%Y-%m-%d") {
                Ok(date) => t.date = date,
                Err(e) => {
                    if !silent {
                        eprintln!("Invalid due date '{}': {}. Use YYYY-MM-DD.", d, e);
                    }
                    return;
                }
            }
        }
        if let Err(e) = save_tasks(&tasks) {
            if !silent {
                eprintln!("Failed to save tasks: {}", e);
            }
        } else if !silent {
            println!("Task {} updated.", task_id);
        }
    }
}

/// Lists tasks in a formatted table, soonest due first.
///
/// By default, hides completed tasks unless `all` is true.
pub fn cmd_list(all: bool) {
    let mut tasks = load_tasks();
    if !all {
        tasks.retain(|t| !t.completed);
    }
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    tasks.sort_by_key(|t| t.date);
    let categories = load_categories();
    let category_name = |id: &str| {
        categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_default()
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Title").add_attribute(Attribute::Bold),
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Due").add_attribute(Attribute::Bold),
            Cell::new("Time Left").add_attribute(Attribute::Bold),
            Cell::new("Recur").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

    let today = Local::now().date_naive();

    for t in tasks {
        let days_left = (t.date - today).num_days();
        let time_left_str = if days_left < 0 {
            format!("{}d overdue", days_left.abs())
        } else if days_left == 0 {
            "Today".to_string()
        } else {
            format!("{}d", days_left)
        };

        let recur = t
            .reminders
            .first()
            .filter(|r| r.enabled && r.frequency != Frequency::Once)
            .map(|r| r.frequency.as_str())
            .unwrap_or("-");

        let status = if t.completed { "Done" } else { "Pending" };
        let status_color = if t.completed { Color::Green } else { Color::Yellow };

        table.add_row(vec![
            Cell::new(&t.id),
            Cell::new(&t.title),
            Cell::new(category_name(&t.category_id)),
            Cell::new(t.date),
            Cell::new(time_left_str).fg(if days_left < 0 && !t.completed {
                Color::Red
            } else {
                Color::Reset
            }),
            Cell::new(recur),
            Cell::new(status).fg(status_color),
        ]);
    }

    println!("{table}");
}

/// Regenerates suggestions from the current tasks and categories, merges
/// previously persisted dismissal/feedback state by id, persists the result,
/// and returns it.
///
/// When an onboarded, non-demo user has no tasks yet, the single
/// category-derived suggestion is produced instead of the task scan.
pub fn refresh_suggestions() -> Vec<Suggestion> {
    let tasks = load_tasks();
    let categories = load_categories();
    let profile = load_profile();

    let fresh = match &profile {
        Some(p) if tasks.is_empty() && p.has_completed_onboarding && !p.demo_mode => {
            vec![generate_category_suggestion(&p.preferred_categories)]
        }
        _ => generate_suggestions(&tasks, &categories),
    };

    let merged = merge_suggestion_state(fresh, &load_suggestions());
    if let Err(e) = save_suggestions(&merged) {
        eprintln!("Failed to save suggestions: {}", e);
    }
    merged
}

/// Prints the current suggestions as a table, hiding dismissed ones.
pub fn cmd_suggest() {
    let suggestions = refresh_suggestions();
    let visible: Vec<&Suggestion> = suggestions.iter().filter(|s| !s.dismissed).collect();
    if visible.is_empty() {
        println!("No suggestions right now.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Type").add_attribute(Attribute::Bold),
            Cell::new("Suggestion").add_attribute(Attribute::Bold),
            Cell::new("Rel").add_attribute(Attribute::Bold),
        ]);

    for s in visible {
        let kind_color = match s.kind.as_str() {
            "action" => Color::Red,
            "reminder" => Color::Yellow,
            _ => Color::Cyan,
        };
        table.add_row(vec![
            Cell::new(&s.id),
            Cell::new(s.kind.as_str()).fg(kind_color),
            Cell::new(&s.message),
            Cell::new(s.relevance),
        ]);
    }

    println!("{table}");
}

/// Dismisses a suggestion by id (or unique id prefix).
pub fn cmd_dismiss(id: &str, silent: bool) {
    update_suggestion(id, silent, |s| s.dismissed = true, "dismissed");
}

/// Records "more" or "less" feedback on a suggestion.
pub fn cmd_feedback(id: &str, feedback: &str, silent: bool) {
    let parsed = match Feedback::parse(feedback) {
        Some(f) => f,
        None => {
            if !silent {
                eprintln!("Feedback must be 'more' or 'less'.");
            }
            return;
        }
    };
    update_suggestion(id, silent, |s| s.feedback = Some(parsed), "updated");
}

/// Finds a suggestion by exact id or unique id prefix, rejecting
/// ambiguous prefixes like [`find_task_id`] does for tasks.
fn find_suggestion_id(suggestions: &[Suggestion], id: &str) -> Option<String> {
    if let Some(s) = suggestions.iter().find(|s| s.id == id) {
        return Some(s.id.clone());
    }
    let mut matches = suggestions.iter().filter(|s| s.id.starts_with(id));
    let first = matches.next()?;
    if matches.next().is_some() {
        return None;
    }
    Some(first.id.clone())
}

fn update_suggestion<F: FnOnce(&mut Suggestion)>(id: &str, silent: bool, apply: F, verb: &str) {
    let mut suggestions = load_suggestions();
    let full_id = find_suggestion_id(&suggestions, id);
    let matched = full_id.and_then(|fid| suggestions.iter_mut().find(|s| s.id == fid));
    match matched {
        Some(s) => {
            let full_id = s.id.clone();
            apply(s);
            if let Err(e) = save_suggestions(&suggestions) {
                if !silent {
                    eprintln!("Failed to save suggestions: {}", e);
                }
            } else if !silent {
                println!("Suggestion {} {}.", full_id, verb);
            }
        }
        None => {
            if !silent {
                eprintln!("Suggestion '{}' not found.", id);
            }
        }
    }
}

/// Adds a custom category.
pub fn cmd_category_add(name: String, icon: Option<String>, color: Option<String>, silent: bool) {
    let mut categories = load_categories();
    if categories.iter().any(|c| c.name.eq_ignore_ascii_case(&name)) {
        if !silent {
            eprintln!("Category '{}' already exists.", name);
        }
        return;
    }
    categories.push(Category {
        id: new_id("category"),
        name: name.clone(),
        icon: icon.unwrap_or_else(|| "tag".to_string()),
        color: color.unwrap_or_else(|| "#64748b".to_string()),
        is_custom: true,
    });
    if let Err(e) = save_categories(&categories) {
        if !silent {
            eprintln!("Failed to save categories: {}", e);
        }
    } else if !silent {
        println!("Category '{}' added.", name);
    }
}

/// Lists all categories, marking hidden and custom ones.
pub fn cmd_category_list() {
    let categories = load_categories();
    if categories.is_empty() {
        println!("No categories found. Run `ontrack init` to seed the defaults.");
        return;
    }
    let hidden = load_profile().map(|p| p.hidden_categories).unwrap_or_default();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Name", "Icon", "Color", "Kind", "Visible"]);
    for c in categories {
        let kind = if c.is_custom { "custom" } else { "predefined" };
        let visible = if hidden.contains(&c.name) { "hidden" } else { "yes" };
        table.add_row(vec![c.name, c.icon, c.color, kind.to_string(), visible.to_string()]);
    }
    println!("{table}");
}

/// Removes a category by name.
///
/// Custom categories are deleted outright, but only when no task references
/// them; predefined categories are soft-deleted by adding their name to the
/// profile's hidden list.
pub fn cmd_category_remove(name: &str, silent: bool) {
    let mut categories = load_categories();
    let category = match categories
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .cloned()
    {
        Some(c) => c,
        None => {
            if !silent {
                eprintln!("Category '{}' not found.", name);
            }
            return;
        }
    };

    if category.is_custom {
        let tasks = load_tasks();
        let in_use = tasks.iter().filter(|t| t.category_id == category.id).count();
        if in_use > 0 {
            if !silent {
                eprintln!(
                    "Cannot remove '{}': {} task(s) still use it.",
                    category.name, in_use
                );
            }
            return;
        }
        categories.retain(|c| c.id != category.id);
        if let Err(e) = save_categories(&categories) {
            if !silent {
                eprintln!("Failed to save categories: {}", e);
            }
        } else if !silent {
            println!("Category '{}' removed.", category.name);
        }
    } else {
        let mut profile = match load_profile() {
            Some(p) => p,
            None => {
                if !silent {
                    eprintln!("No profile found. Run `ontrack init` first.");
                }
                return;
            }
        };
        if !profile.hidden_categories.contains(&category.name) {
            profile.hidden_categories.push(category.name.clone());
        }
        if let Err(e) = save_profile(&profile) {
            if !silent {
                eprintln!("Failed to save profile: {}", e);
            }
        } else if !silent {
            println!("Predefined category '{}' hidden.", category.name);
        }
    }
}

/// Adds a new task template.
pub fn cmd_template_add(
    name: String,
    category_name: Option<String>,
    title: Option<String>,
    description: Option<String>,
    notes: Option<String>,
    recur: Option<String>,
    silent: bool,
) {
    let mut templates = load_templates();
    if templates.iter().any(|t| t.name == name) {
        if !silent {
            eprintln!("Template '{}' already exists.", name);
        }
        return;
    }

    let mut category_id = String::new();
    if let Some(cat) = &category_name {
        let categories = load_categories();
        match categories.iter().find(|c| c.name.eq_ignore_ascii_case(cat)) {
            Some(c) => category_id = c.id.clone(),
            None => {
                if !silent {
                    eprintln!("Category '{}' not found.", cat);
                }
                return;
            }
        }
    }

    let reminders = match recur.as_deref().map(Frequency::parse) {
        Some(Some(frequency)) => vec![Reminder {
            id: new_id("reminder"),
            time: default_reminder_time(),
            frequency,
            enabled: true,
            custom_times: None,
        }],
        Some(None) => {
            if !silent {
                eprintln!("Unknown frequency.");
            }
            return;
        }
        None => Vec::new(),
    };

    templates.push(Template {
        id: new_id("template"),
        name: name.clone(),
        category_id,
        title: title.unwrap_or_else(|| name.clone()),
        description: description.unwrap_or_default(),
        notes: notes.unwrap_or_default(),
        reminders,
        is_preset: false,
        created_at: Local::now(),
    });
    if let Err(e) = save_templates(&templates) {
        if !silent {
            eprintln!("Failed to save templates: {}", e);
        }
    } else if !silent {
        println!("Template '{}' added.", name);
    }
}

/// Saves an existing task as a reusable template.
pub fn cmd_template_save(task_id: &str, name: String, silent: bool) {
    let tasks = load_tasks();
    let full_id = match find_task_id(&tasks, task_id) {
        Some(t) => t,
        None => {
            if !silent {
                eprintln!("Task '{}' not found.", task_id);
            }
            return;
        }
    };
    let task = tasks.iter().find(|t| t.id == full_id).cloned();
    let task = match task {
        Some(t) => t,
        None => return,
    };

    let mut templates = load_templates();
    if templates.iter().any(|t| t.name == name) {
        if !silent {
            eprintln!("Template '{}' already exists.", name);
        }
        return;
    }
    templates.push(Template {
        id: new_id("template"),
        name: name.clone(),
        category_id: task.category_id,
        title: task.title,
        description: task.description,
        notes: task.notes,
        reminders: task.reminders,
        is_preset: false,
        created_at: Local::now(),
    });
    if let Err(e) = save_templates(&templates) {
        if !silent {
            eprintln!("Failed to save templates: {}", e);
        }
    } else if !silent {
        println!("Template '{}' saved from task {}.", name, full_id);
    }
}

/// Lists all available templates.
pub fn cmd_template_list() {
    let templates = load_templates();
    if templates.is_empty() {
        println!("No templates found.");
        return;
    }
    let categories = load_categories();
    let category_name = |id: &str| {
        categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_default()
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Name", "Category", "Title", "Recur", "Preset"]);
    for t in templates {
        let recur = t
            .reminders
            .first()
            .map(|r| r.frequency.as_str())
            .unwrap_or("-");
        table.add_row(vec![
            t.name,
            category_name(&t.category_id),
            t.title,
            recur.to_string(),
            if t.is_preset { "yes" } else { "no" }.to_string(),
        ]);
    }
    println!("{table}");
}

/// Removes a template by name. Tasks created from it are unaffected.
pub fn cmd_template_remove(name: &str, silent: bool) {
    let mut templates = load_templates();
    let len_before = templates.len();
    templates.retain(|t| t.name != name);
    if templates.len() == len_before {
        if !silent {
            eprintln!("Template '{}' not found.", name);
        }
        return;
    }
    if let Err(e) = save_templates(&templates) {
        if !silent {
            eprintln!("Failed to save templates: {}", e);
        }
    } else if !silent {
        println!("Template '{}' removed.", name);
    }
}

/// Turns demo mode on (loads a fixed sample data set) or off (destroys the
/// profile and clears the sample data).
pub fn cmd_demo(on: bool, silent: bool) {
    if on {
        let mut categories = load_categories();
        if categories.is_empty() {
            categories = Category::defaults();
            if let Err(e) = save_categories(&categories) {
                if !silent {
                    eprintln!("Failed to save categories: {}", e);
                }
                return;
            }
        }
        let mut profile = load_profile().unwrap_or_default();
        profile.has_completed_onboarding = true;
        profile.demo_mode = true;
        if profile.preferred_categories.is_empty() {
            profile.preferred_categories =
                vec!["Travel".to_string(), "Health".to_string(), "Subscriptions".to_string()];
        }
        if let Err(e) = save_profile(&profile) {
            if !silent {
                eprintln!("Failed to save profile: {}", e);
            }
            return;
        }
        if let Err(e) = save_tasks(&demo_tasks(&categories)) {
            if !silent {
                eprintln!("Failed to save tasks: {}", e);
            }
        } else if !silent {
            println!("Demo mode on: sample data loaded.");
        }
    } else {
        let was_demo = load_profile().map(|p| p.demo_mode).unwrap_or(false);
        if was_demo {
            if let Err(e) = save_tasks(&[]) {
                if !silent {
                    eprintln!("Failed to clear tasks: {}", e);
                }
            }
        }
        if let Err(e) = delete_profile() {
            if !silent {
                eprintln!("Failed to remove profile: {}", e);
            }
        } else if !silent {
            println!("Demo mode off: profile reset.");
        }
    }
}

/// The fixed sample tasks loaded by demo mode.
fn demo_tasks(categories: &[Category]) -> Vec<Task> {
    let today = Local::now().date_naive();
    let find = |name: &str| {
        categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.id.clone())
            .unwrap_or_default()
    };
    let entries = [
        ("Trip to Japan", "Travel", 20),
        ("Streaming subscription renewal", "Subscriptions", 3),
        ("Gutter cleaning", "Home Maintenance", -5),
        ("Laptop warranty expires", "Warranties", 25),
    ];
    entries
        .iter()
        .map(|(title, cat, offset)| Task {
            id: new_id("task"),
            title: (*title).to_string(),
            description: String::new(),
            date: today + Duration::days(*offset),
            category_id: find(cat),
            attachments: Vec::new(),
            completed: false,
            completed_at: None,
            notes: String::new(),
            reminders: Vec::new(),
            created_at: Local::now(),
            previous_completions: Vec::new(),
        })
        .collect()
}

/// Resets the database by deleting every bucket file.
pub fn cmd_reset(force: bool) {
    if !force {
        print!("Are you sure you want to delete all data? This cannot be undone. [y/N] ");
        let _ = io::stdout().flush();
        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return;
        }
        if input.trim().to_lowercase() != "y" {
            println!("Aborted.");
            return;
        }
    }

    if let Err(e) = delete_database() {
        eprintln!("Failed to reset database: {}", e);
    } else {
        println!("Database reset successfully.");
    }
}
