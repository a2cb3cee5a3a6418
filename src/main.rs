//! # OnTrack
//!
//! A terminal-based personal task and reminder manager with a built-in
//! suggestion engine. OnTrack combines a fast CLI for quick entry with a TUI
//! (Terminal User Interface) for interactive management.
//!
//! ## Features
//!
//! *   **Suggestions**: Category-aware tips, reminders, and actions derived
//!     from your upcoming tasks, ranked by relevance. Dismissals and
//!     more/less feedback survive regeneration.
//! *   **Recurring tasks**: Completing a task with a daily, weekly, or
//!     monthly reminder spawns the next occurrence automatically, with a
//!     bounded completion history per lineage.
//! *   **Categories**: A predefined set (Travel, Health, Subscriptions,
//!     Warranties, Taxes & Finance, Home Maintenance, Vehicle, Insurance,
//!     Personal) plus custom ones.
//! *   **Templates**: Reusable task blueprints, bundled or saved from your
//!     own tasks.
//! *   **Dual interface**: scriptable CLI and interactive TUI.
//! *   **Data persistence**: JSON bucket files in the standard XDG data
//!     directory.
//!
//! ## Usage
//!
//! ### Interactive mode (TUI)
//!
//! Run without arguments to launch the interactive UI:
//!
//! ```bash
//! ontrack
//! # or explicitly
//! ontrack ui
//! ```
//!
//! #### TUI key bindings
//!
//! **Global**
//! *   `q`: Quit
//! *   `v`: Cycle views (Tasks / Suggestions / Templates)
//!
//! **Tasks view**
//! *   `a`: Add new task (step wizard)
//! *   `Space`: Complete selected task
//! *   `z`: Undo the last completion
//! *   `c`: Toggle show/hide completed tasks
//! *   `d`: Delete selected task
//!
//! **Suggestions view**
//! *   `d`: Dismiss selected suggestion
//! *   `m` / `l`: Give "more" / "less" feedback
//!
//! **Templates view**
//! *   `Enter`: Create a task from the selected template
//!
//! ### Command line interface (CLI)
//!
//! ```bash
//! # One-time onboarding: seed categories, templates, and your profile
//! ontrack init --track Travel --track Health
//!
//! # Add tasks
//! ontrack add "Trip to Japan" --category Travel --due 2026-09-15
//! ontrack add "Dental checkup" --category Health --due 2026-08-30 --recur monthly
//! ontrack add "Renew passport" --template "Passport Renewal" --due 2026-10-01
//!
//! # Manage tasks (ids accept any unique prefix)
//! ontrack list
//! ontrack complete <ID>
//! ontrack undo <ID>
//!
//! # Suggestions
//! ontrack suggest
//! ontrack dismiss <SUGGESTION-ID>
//! ontrack feedback <SUGGESTION-ID> more
//! ```
//!
//! ## Data storage
//!
//! Buckets (`tasks.json`, `categories.json`, `suggestions.json`,
//! `profile.json`, `templates.json`) are saved in your local data directory:
//! *   Linux: `~/.local/share/ontrack/`
//! *   macOS: `~/Library/Application Support/ontrack/`
//! *   Windows: `%APPDATA%\ontrack\`
//!
//! Override the location by pointing the `ONTRACK_DB` environment variable
//! at the tasks file; the other buckets live next to it. Data written by
//! older versions (emoji category icons, flat tracked-category lists) is
//! migrated on read.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use ontrack::commands::*;
use ontrack::tui::run_tui;
use std::io;

#[derive(Parser)]
#[command(name = "ontrack")]
#[command(about = "Personal task and reminder manager with suggestions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Complete onboarding: seed categories, presets, and your profile
    Init {
        /// Category names to track (repeatable)
        #[arg(short, long = "track")]
        track: Vec<String>,
    },
    /// Add a new task
    Add {
        /// Task title (quoted if it has spaces)
        title: String,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
        /// Due date in YYYY-MM-DD
        #[arg(short, long)]
        due: String,
        /// Longer description
        #[arg(long)]
        description: Option<String>,
        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
        /// Reminder frequency (once, daily, weekly, monthly)
        #[arg(short, long)]
        recur: Option<String>,
        /// Use a template
        #[arg(short, long)]
        template: Option<String>,
    },
    /// List tasks sorted by due date
    List {
        /// Show completed tasks
        #[arg(short, long)]
        all: bool,
    },
    /// Mark a task as complete (spawns the next occurrence if recurring)
    Complete { id: String },
    /// Undo a completion, removing any spawned occurrence
    Undo { id: String },
    /// Remove a task
    Remove { id: String },
    /// Edit a task
    Edit {
        id: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New category name
        #[arg(short, long)]
        category: Option<String>,
        /// New due date
        #[arg(short, long)]
        due: Option<String>,
        /// New notes
        #[arg(short, long)]
        notes: Option<String>,
        /// New reminder frequency
        #[arg(short, long)]
        recur: Option<String>,
    },
    /// Regenerate and show suggestions
    Suggest,
    /// Dismiss a suggestion
    Dismiss { id: String },
    /// Record feedback (more, less) on a suggestion
    Feedback { id: String, feedback: String },
    /// Manage categories
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },
    /// Manage templates
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },
    /// Toggle demo mode (loads sample data; turning off resets the profile)
    Demo {
        /// "on" or "off"
        state: String,
    },
    /// Reset the database (delete all buckets)
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
    /// Open interactive TUI
    Ui,
}

#[derive(Subcommand)]
enum CategoryCommands {
    /// Add a custom category
    Add {
        /// Category name
        name: String,
        /// Symbolic icon name
        #[arg(short, long)]
        icon: Option<String>,
        /// Hex color
        #[arg(short, long)]
        color: Option<String>,
    },
    /// List categories
    List,
    /// Remove a category (custom: deleted if unused; predefined: hidden)
    Remove {
        /// Category name
        name: String,
    },
}

#[derive(Subcommand)]
enum TemplateCommands {
    /// Add a new template
    Add {
        /// Template name
        name: String,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
        /// Default task title
        #[arg(short, long)]
        title: Option<String>,
        /// Default description
        #[arg(long)]
        description: Option<String>,
        /// Default notes
        #[arg(short, long)]
        notes: Option<String>,
        /// Default reminder frequency
        #[arg(short, long)]
        recur: Option<String>,
    },
    /// Save an existing task as a template
    Save {
        /// Task id
        id: String,
        /// Template name
        name: String,
    },
    /// List templates
    List,
    /// Remove a template
    Remove {
        /// Template name
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Init { track }) => cmd_init(track, false),
        Some(Commands::Add {
            title,
            category,
            due,
            description,
            notes,
            recur,
            template,
        }) => cmd_add(title, category, due, description, notes, recur, template, false),
        Some(Commands::List { all }) => cmd_list(all),
        Some(Commands::Complete { id }) => cmd_complete(&id, false),
        Some(Commands::Undo { id }) => cmd_undo(&id, false),
        Some(Commands::Remove { id }) => cmd_remove(&id, false),
        Some(Commands::Edit {
            id,
            title,
            category,
            due,
            notes,
            recur,
        }) => cmd_edit(&id, title, category, due, notes, recur, false),
        Some(Commands::Suggest) => cmd_suggest(),
        Some(Commands::Dismiss { id }) => cmd_dismiss(&id, false),
        Some(Commands::Feedback { id, feedback }) => cmd_feedback(&id, &feedback, false),
        Some(Commands::Category { command }) => match command {
            CategoryCommands::Add { name, icon, color } => cmd_category_add(name, icon, color, false),
            CategoryCommands::List => cmd_category_list(),
            CategoryCommands::Remove { name } => cmd_category_remove(&name, false),
        },
        Some(Commands::Template { command }) => match command {
            TemplateCommands::Add {
                name,
                category,
                title,
                description,
                notes,
                recur,
            } => cmd_template_add(name, category, title, description, notes, recur, false),
            TemplateCommands::Save { id, name } => cmd_template_save(&id, name, false),
            TemplateCommands::List => cmd_template_list(),
            TemplateCommands::Remove { name } => cmd_template_remove(&name, false),
        },
        Some(Commands::Demo { state }) => match state.as_str() {
            "on" => cmd_demo(true, false),
            "off" => cmd_demo(false, false),
            other => eprintln!("Expected 'on' or 'off', got '{}'.", other),
        },
        Some(Commands::Reset { force }) => cmd_reset(force),
        Some(Commands::Completions { shell }) => {
            let shell_enum = match shell.as_str() {
                "bash" => Shell::Bash,
                "zsh" => Shell::Zsh,
                "fish" => Shell::Fish,
                "powershell" => Shell::PowerShell,
                "elvish" => Shell::Elvish,
                _ => {
                    eprintln!("Unsupported shell: {}", shell);
                    return;
                }
            };
            let mut cmd = Cli::command();
            generate(shell_enum, &mut cmd, "ontrack", &mut io::stdout());
        }
        Some(Commands::Ui) | None => {
            if let Err(e) = run_tui() {
                eprintln!("Error running TUI: {}", e);
            }
        }
    }
}
