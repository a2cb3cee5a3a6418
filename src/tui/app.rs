use crate::commands::{
    cmd_add, cmd_complete, cmd_dismiss, cmd_feedback, cmd_undo, refresh_suggestions,
};
use crate::models::{Category, Suggestion, Task, Template};
use crate::storage::{load_categories, load_tasks, load_templates, save_tasks};
use ratatui::widgets::TableState;

/// The suggestions view shows at most this many entries.
const SUGGESTION_WINDOW: usize = 6;

#[derive(PartialEq)]
pub enum InputMode {
    Normal,
    Adding,
}

#[derive(Clone, Copy, PartialEq)]
pub enum ViewMode {
    Tasks,
    Suggestions,
    Templates,
}

pub struct App {
    pub tasks: Vec<Task>,
    pub suggestions: Vec<Suggestion>,
    pub templates: Vec<Template>,
    pub categories: Vec<Category>,
    pub state: TableState,
    pub suggestion_state: TableState,
    pub template_state: TableState,
    pub view_mode: ViewMode,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub add_state: AddState,
    pub show_completed: bool,
    /// Id of the most recently completed task, for the undo affordance.
    pub last_completed: Option<String>,
}

/// State for the multi-step "Add Task" wizard.
#[derive(Default)]
pub struct AddState {
    pub title: String,
    pub category: Option<String>,
    pub due: String,
    pub recur: Option<String>,
    pub step: usize, // 0: Title, 1: Category, 2: Due, 3: Recur
    pub template: Option<String>,
}

impl App {
    /// Creates a new App instance and loads initial data.
    pub fn new() -> App {
        let mut app = App {
            tasks: Vec::new(),
            suggestions: Vec::new(),
            templates: Vec::new(),
            categories: Vec::new(),
            state: TableState::default(),
            suggestion_state: TableState::default(),
            template_state: TableState::default(),
            view_mode: ViewMode::Tasks,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            add_state: AddState::default(),
            show_completed: false,
            last_completed: None,
        };
        app.reload();
        app
    }

    /// Reloads all buckets and regenerates suggestions.
    pub fn reload(&mut self) {
        let mut tasks = load_tasks();
        if !self.show_completed {
            tasks.retain(|t| !t.completed);
        }
        tasks.sort_by_key(|t| t.date);
        self.tasks = tasks;

        let mut suggestions = refresh_suggestions();
        suggestions.retain(|s| !s.dismissed);
        suggestions.truncate(SUGGESTION_WINDOW);
        self.suggestions = suggestions;

        self.templates = load_templates();
        self.categories = load_categories();

        clamp_selection(&mut self.state, self.tasks.len());
        clamp_selection(&mut self.suggestion_state, self.suggestions.len());
        clamp_selection(&mut self.template_state, self.templates.len());
    }

    fn current_state(&mut self) -> (&mut TableState, usize) {
        match self.view_mode {
            ViewMode::Tasks => (&mut self.state, self.tasks.len()),
            ViewMode::Suggestions => (&mut self.suggestion_state, self.suggestions.len()),
            ViewMode::Templates => (&mut self.template_state, self.templates.len()),
        }
    }

    /// Selects the next item in the current list.
    pub fn next(&mut self) {
        let (state, len) = self.current_state();
        if len == 0 {
            return;
        }
        let i = match state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        state.select(Some(i));
    }

    /// Selects the previous item in the current list.
    pub fn previous(&mut self) {
        let (state, len) = self.current_state();
        if len == 0 {
            return;
        }
        let i = match state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        state.select(Some(i));
    }

    /// Marks the currently selected task as complete.
    pub fn complete_selected(&mut self) {
        if self.view_mode != ViewMode::Tasks {
            return;
        }
        if let Some(i) = self.state.selected() {
            if let Some(t) = self.tasks.get(i) {
                let id = t.id.clone();
                // Command logic handles recurrence
                cmd_complete(&id, true);
                self.last_completed = Some(id);
                self.reload();
            }
        }
    }

    /// Undoes the most recent completion from this session.
    pub fn undo_last(&mut self) {
        if let Some(id) = self.last_completed.take() {
            cmd_undo(&id, true);
            self.reload();
        }
    }

    /// Deletes the selected task, or dismisses the selected suggestion.
    pub fn delete_selected(&mut self) {
        match self.view_mode {
            ViewMode::Tasks => {
                if let Some(i) = self.state.selected() {
                    if let Some(t) = self.tasks.get(i) {
                        let id = t.id.clone();
                        let mut all_tasks = load_tasks();
                        all_tasks.retain(|t| t.id != id);
                        let _ = save_tasks(&all_tasks);
                        self.reload();
                    }
                }
            }
            ViewMode::Suggestions => {
                if let Some(i) = self.suggestion_state.selected() {
                    if let Some(s) = self.suggestions.get(i) {
                        cmd_dismiss(&s.id.clone(), true);
                        self.reload();
                    }
                }
            }
            ViewMode::Templates => {}
        }
    }

    /// Records more/less feedback on the selected suggestion.
    pub fn feedback_selected(&mut self, more: bool) {
        if self.view_mode != ViewMode::Suggestions {
            return;
        }
        if let Some(i) = self.suggestion_state.selected() {
            if let Some(s) = self.suggestions.get(i) {
                cmd_feedback(&s.id.clone(), if more { "more" } else { "less" }, true);
                self.reload();
            }
        }
    }

    /// Toggles the visibility of completed tasks.
    pub fn toggle_completed(&mut self) {
        self.show_completed = !self.show_completed;
        self.reload();
    }

    /// Cycles Tasks -> Suggestions -> Templates -> Tasks.
    pub fn cycle_view(&mut self) {
        self.view_mode = match self.view_mode {
            ViewMode::Tasks => ViewMode::Suggestions,
            ViewMode::Suggestions => ViewMode::Templates,
            ViewMode::Templates => ViewMode::Tasks,
        };
    }

    /// Initiates the "Add Task" wizard.
    pub fn start_add(&mut self) {
        if self.view_mode != ViewMode::Tasks {
            return;
        }
        self.input_mode = InputMode::Adding;
        self.add_state = AddState::default();
        self.input_buffer.clear();
    }

    /// Initiates adding a task from the selected template.
    pub fn start_add_from_template(&mut self) {
        if self.view_mode != ViewMode::Templates {
            return;
        }
        if let Some(i) = self.template_state.selected() {
            if let Some(tmpl) = self.templates.get(i) {
                self.input_mode = InputMode::Adding;
                self.add_state = AddState::default();
                self.add_state.template = Some(tmpl.name.clone());
                self.add_state.title = tmpl.title.clone();
                self.input_buffer.clear();
            }
        }
    }

    /// Advances the "Add Task" wizard by one step.
    pub fn handle_input(&mut self) {
        if self.add_state.template.is_some() {
            // Template flow: Title (prefilled) -> Due -> Recur
            match self.add_state.step {
                0 => {
                    if !self.input_buffer.is_empty() {
                        self.add_state.title = self.input_buffer.clone();
                    }
                    self.add_state.step += 1;
                    self.input_buffer.clear();
                }
                1 => {
                    if !self.input_buffer.is_empty() {
                        self.add_state.due = self.input_buffer.clone();
                        self.add_state.step += 1;
                        self.input_buffer.clear();
                    }
                }
                2 => {
                    if !self.input_buffer.is_empty() {
                        self.add_state.recur = Some(self.input_buffer.clone());
                    }
                    self.finish_add();
                }
                _ => {}
            }
        } else {
            match self.add_state.step {
                0 => {
                    if !self.input_buffer.is_empty() {
                        self.add_state.title = self.input_buffer.clone();
                        self.add_state.step += 1;
                        self.input_buffer.clear();
                    }
                }
                1 => {
                    if !self.input_buffer.is_empty() {
                        self.add_state.category = Some(self.input_buffer.clone());
                    }
                    self.add_state.step += 1;
                    self.input_buffer.clear();
                }
                2 => {
                    if !self.input_buffer.is_empty() {
                        self.add_state.due = self.input_buffer.clone();
                        self.add_state.step += 1;
                        self.input_buffer.clear();
                    }
                }
                3 => {
                    if !self.input_buffer.is_empty() {
                        self.add_state.recur = Some(self.input_buffer.clone());
                    }
                    self.finish_add();
                }
                _ => {}
            }
        }
    }

    fn finish_add(&mut self) {
        cmd_add(
            self.add_state.title.clone(),
            self.add_state.category.clone(),
            self.add_state.due.clone(),
            None,
            None,
            self.add_state.recur.clone(),
            self.add_state.template.clone(),
            true,
        );
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
        self.view_mode = ViewMode::Tasks;
        self.reload();
    }
}

fn clamp_selection(state: &mut TableState, len: usize) {
    if len == 0 {
        state.select(None);
    } else {
        match state.selected() {
            Some(i) if i >= len => state.select(Some(len - 1)),
            Some(_) => {}
            None => state.select(Some(0)),
        }
    }
}
