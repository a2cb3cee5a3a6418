use chrono::{Duration, Local};
use ontrack::commands::*;
use ontrack::storage::{
    load_categories, load_profile, load_suggestions, load_tasks, load_templates,
};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

// Use a mutex to ensure tests run serially since they modify the environment variable
static TEST_MUTEX: Mutex<()> = Mutex::new(());

fn with_test_db<F>(test_name: &str, f: F)
where
    F: FnOnce(PathBuf),
{
    let _guard = TEST_MUTEX.lock().unwrap();

    let mut dir = env::temp_dir();
    dir.push(format!("ontrack_test_{}", test_name));

    // Clean up before test
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();

    let mut db_path = dir.clone();
    db_path.push("tasks.json");
    env::set_var("ONTRACK_DB", db_path.to_str().unwrap());

    // Run test
    f(dir.clone());

    // Clean up after test
    env::remove_var("ONTRACK_DB");
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
}

fn due_in(days: i64) -> String {
    (Local::now().date_naive() + Duration::days(days)).to_string()
}

#[test]
fn test_add_and_list() {
    with_test_db("add_list", |_dir| {
        cmd_add(
            "Test Task".into(),
            None,
            "2026-12-01".into(),
            None,
            None,
            None,
            None,
            true,
        );

        let tasks = load_tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Test Task");
        assert!(tasks[0].id.starts_with("task-"));
    });
}

#[test]
fn test_add_with_category() {
    with_test_db("add_category", |_dir| {
        cmd_category_add("Chores".into(), None, None, true);
        cmd_add(
            "Mow the lawn".into(),
            Some("Chores".into()),
            "2026-12-01".into(),
            None,
            None,
            None,
            None,
            true,
        );

        let categories = load_categories();
        let tasks = load_tasks();
        assert_eq!(tasks[0].category_id, categories[0].id);
    });
}

#[test]
fn test_complete_task() {
    with_test_db("complete", |_dir| {
        cmd_add(
            "Task to complete".into(),
            None,
            "2026-12-01".into(),
            None,
            None,
            None,
            None,
            true,
        );
        let tasks = load_tasks();
        let id = tasks[0].id.clone();

        cmd_complete(&id, true);

        let tasks = load_tasks();
        assert_eq!(tasks.len(), 1);
        assert!(tasks[0].completed);
        assert!(tasks[0].completed_at.is_some());
    });
}

#[test]
fn test_recurrence() {
    with_test_db("recurrence", |_dir| {
        cmd_add(
            "Recurring Task".into(),
            None,
            "2026-12-01".into(),
            None,
            None,
            Some("weekly".into()),
            None,
            true,
        );
        let tasks = load_tasks();
        let id = tasks[0].id.clone();
        let due = tasks[0].date;

        cmd_complete(&id, true);

        let tasks = load_tasks();
        // Should have 2 tasks: one completed, one new
        assert_eq!(tasks.len(), 2);

        let completed = tasks.iter().find(|t| t.completed).unwrap();
        let new_task = tasks.iter().find(|t| !t.completed).unwrap();

        assert_eq!(completed.id, id);
        assert_eq!(new_task.title, "Recurring Task");
        assert_ne!(completed.id, new_task.id);
        assert_eq!(new_task.date, due + Duration::days(7));
        assert_eq!(new_task.previous_completions.len(), 1);
        assert_eq!(new_task.previous_completions[0].id, id);
    });
}

#[test]
fn test_undo_round_trip() {
    with_test_db("undo", |_dir| {
        cmd_add(
            "Recurring Task".into(),
            None,
            "2026-12-01".into(),
            None,
            None,
            Some("daily".into()),
            None,
            true,
        );
        let before = serde_json::to_value(load_tasks()).unwrap();
        let id = load_tasks()[0].id.clone();

        cmd_complete(&id, true);
        assert_eq!(load_tasks().len(), 2);

        cmd_undo(&id, true);
        let after = serde_json::to_value(load_tasks()).unwrap();
        assert_eq!(after, before);
    });
}

#[test]
fn test_id_prefix_lookup() {
    with_test_db("prefix", |_dir| {
        cmd_add(
            "Prefixed".into(),
            None,
            "2026-12-01".into(),
            None,
            None,
            None,
            None,
            true,
        );
        let id = load_tasks()[0].id.clone();
        let prefix = &id[..id.len() - 2];

        cmd_complete(prefix, true);
        assert!(load_tasks()[0].completed);
    });
}

#[test]
fn test_template_creation_and_usage() {
    with_test_db("template_usage", |_dir| {
        cmd_category_add("Paperwork".into(), None, None, true);
        cmd_template_add(
            "renewal".into(),
            Some("Paperwork".into()),
            Some("Renew something".into()),
            Some("Gather documents first".into()),
            None,
            Some("monthly".into()),
            true,
        );

        let templates = load_templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].name, "renewal");
        assert!(!templates[0].is_preset);

        cmd_add(
            "Renew passport".into(),
            None,
            "2026-12-01".into(),
            None,
            None,
            None,
            Some("renewal".into()),
            true,
        );

        let tasks = load_tasks();
        let categories = load_categories();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].category_id, categories[0].id);
        assert_eq!(tasks[0].description, "Gather documents first");
        assert_eq!(tasks[0].reminders.len(), 1);
    });
}

#[test]
fn test_template_save_from_task() {
    with_test_db("template_save", |_dir| {
        cmd_add(
            "Quarterly review".into(),
            None,
            "2026-12-01".into(),
            Some("Check statements".into()),
            None,
            Some("monthly".into()),
            None,
            true,
        );
        let id = load_tasks()[0].id.clone();

        cmd_template_save(&id, "review".into(), true);

        let templates = load_templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].title, "Quarterly review");
        assert_eq!(templates[0].description, "Check statements");
        assert_eq!(templates[0].reminders.len(), 1);
    });
}

#[test]
fn test_template_remove() {
    with_test_db("template_remove", |_dir| {
        cmd_template_add("temp".into(), None, None, None, None, None, true);
        cmd_template_remove("temp", true);
        assert!(load_templates().is_empty());
    });
}

#[test]
fn test_init_seeds_defaults() {
    with_test_db("init", |_dir| {
        cmd_init(vec!["Travel".into(), "Health".into()], true);

        let profile = load_profile().expect("profile should exist");
        assert!(profile.has_completed_onboarding);
        assert!(!profile.demo_mode);
        assert_eq!(profile.preferred_categories, vec!["Travel", "Health"]);

        let categories = load_categories();
        assert!(categories.iter().any(|c| c.name == "Travel"));
        assert!(categories.iter().any(|c| c.name == "Vehicle"));
        assert!(categories.iter().all(|c| !c.is_custom));

        let templates = load_templates();
        assert!(!templates.is_empty());
        assert!(templates.iter().all(|t| t.is_preset));
    });
}

#[test]
fn test_category_removal_policy() {
    with_test_db("category_policy", |_dir| {
        cmd_init(vec![], true);
        cmd_category_add("Hobby".into(), None, None, true);
        cmd_add(
            "Practice guitar".into(),
            Some("Hobby".into()),
            "2026-12-01".into(),
            None,
            None,
            None,
            None,
            true,
        );

        // Custom category with a task: declined, still present
        cmd_category_remove("Hobby", true);
        assert!(load_categories().iter().any(|c| c.name == "Hobby"));

        // After the task is gone the custom category can be deleted
        let id = load_tasks()[0].id.clone();
        cmd_remove(&id, true);
        cmd_category_remove("Hobby", true);
        assert!(!load_categories().iter().any(|c| c.name == "Hobby"));

        // Predefined categories are hidden, not deleted
        cmd_category_remove("Travel", true);
        assert!(load_categories().iter().any(|c| c.name == "Travel"));
        let profile = load_profile().unwrap();
        assert!(profile.hidden_categories.contains(&"Travel".to_string()));
    });
}

#[test]
fn test_dismissal_survives_regeneration() {
    with_test_db("dismissal", |_dir| {
        cmd_category_add("Travel".into(), None, None, true);
        cmd_add(
            "Trip to Japan".into(),
            Some("Travel".into()),
            due_in(20),
            None,
            None,
            None,
            None,
            true,
        );

        let first = refresh_suggestions();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].relevance, 10);
        let sid = first[0].id.clone();

        cmd_dismiss(&sid, true);
        cmd_feedback(&sid, "less", true);

        let second = refresh_suggestions();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].id, sid);
        assert!(second[0].dismissed);
        assert_eq!(second[0].feedback, Some(ontrack::models::Feedback::Less));
    });
}

#[test]
fn test_ambiguous_suggestion_prefix_is_rejected() {
    with_test_db("suggestion_prefix", |_dir| {
        cmd_category_add("Warranties".into(), None, None, true);
        cmd_add(
            "Phone warranty".into(),
            Some("Warranties".into()),
            due_in(10),
            None,
            None,
            None,
            None,
            true,
        );
        cmd_add(
            "Laptop warranty".into(),
            Some("Warranties".into()),
            due_in(5),
            None,
            None,
            None,
            None,
            true,
        );

        let suggestions = refresh_suggestions();
        assert_eq!(suggestions.len(), 2);

        // A prefix shared by both suggestions is declined outright
        cmd_dismiss("suggestion-task", true);
        assert!(load_suggestions().iter().all(|s| !s.dismissed));

        // A unique prefix still resolves to its single match
        let sid = suggestions[0].id.clone();
        let prefix = &sid[..sid.len() - 2];
        cmd_dismiss(prefix, true);
        let after = load_suggestions();
        assert!(after.iter().find(|s| s.id == sid).unwrap().dismissed);
        assert_eq!(after.iter().filter(|s| s.dismissed).count(), 1);
    });
}

#[test]
fn test_category_suggestion_when_no_tasks() {
    with_test_db("category_suggestion", |_dir| {
        cmd_init(vec!["Health".into()], true);

        let suggestions = refresh_suggestions();
        assert_eq!(suggestions.len(), 1);
        // Health has no seasonal gate, and only the seasonal Vehicle rule
        // outranks it; tracking Health alone always yields the checkup tip.
        assert_eq!(suggestions[0].id, "suggestion-category-health-checkup");
    });
}

#[test]
fn test_demo_mode_round_trip() {
    with_test_db("demo", |_dir| {
        cmd_demo(true, true);
        let profile = load_profile().expect("demo profile should exist");
        assert!(profile.demo_mode);
        assert!(!load_tasks().is_empty());

        cmd_demo(false, true);
        assert!(load_profile().is_none());
        assert!(load_tasks().is_empty());
    });
}

#[test]
fn test_profile_migration_from_tracked_categories() {
    with_test_db("profile_migration", |dir| {
        let mut path = dir.clone();
        path.push("profile.json");
        fs::write(
            &path,
            r#"{"trackedCategories":["Travel","Health"],"hasCompletedOnboarding":true}"#,
        )
        .unwrap();

        let profile = load_profile().expect("legacy profile should load");
        assert_eq!(profile.preferred_categories, vec!["Travel", "Health"]);
        assert!(!profile.demo_mode);

        // Migration is idempotent through a save/load round trip
        ontrack::storage::save_profile(&profile).unwrap();
        let again = load_profile().unwrap();
        assert_eq!(again.preferred_categories, vec!["Travel", "Health"]);
        assert!(again.hidden_categories.is_empty());
    });
}

#[test]
fn test_icon_migration_from_emoji() {
    with_test_db("icon_migration", |dir| {
        let mut path = dir.clone();
        path.push("categories.json");
        fs::write(
            &path,
            r##"[{"id":"category-1","name":"Travel","icon":"✈️","color":"#0ea5e9","isCustom":false},
                {"id":"category-2","name":"Chess","icon":"🎲","color":"#64748b","isCustom":true}]"##,
        )
        .unwrap();

        let categories = load_categories();
        assert_eq!(categories[0].icon, "plane");
        // Unknown emoji fall back to the generic icon
        assert_eq!(categories[1].icon, "tag");

        // Re-saving migrated data and loading again changes nothing
        ontrack::storage::save_categories(&categories).unwrap();
        let again = load_categories();
        assert_eq!(again[0].icon, "plane");
        assert_eq!(again[1].icon, "tag");
    });
}

#[test]
fn test_edit_task() {
    with_test_db("edit", |_dir| {
        cmd_add(
            "Old title".into(),
            None,
            "2026-12-01".into(),
            None,
            None,
            None,
            None,
            true,
        );
        let id = load_tasks()[0].id.clone();

        cmd_edit(
            &id,
            Some("New title".into()),
            None,
            Some("2026-12-15".into()),
            Some("remember the receipt".into()),
            Some("weekly".into()),
            true,
        );

        let tasks = load_tasks();
        assert_eq!(tasks[0].title, "New title");
        assert_eq!(tasks[0].date.to_string(), "2026-12-15");
        assert_eq!(tasks[0].notes, "remember the receipt");
        assert_eq!(tasks[0].reminders.len(), 1);
    });
}

#[test]
fn test_remove_task() {
    with_test_db("remove", |_dir| {
        cmd_add(
            "Disposable".into(),
            None,
            "2026-12-01".into(),
            None,
            None,
            None,
            None,
            true,
        );
        let id = load_tasks()[0].id.clone();
        cmd_remove(&id, true);
        assert!(load_tasks().is_empty());
        assert!(load_suggestions().is_empty());
    });
}
