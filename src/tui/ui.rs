use super::app::{App, InputMode, ViewMode};
use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(0),    // Table
                Constraint::Length(3), // Help
            ]
            .as_ref(),
        )
        .split(f.area());

    match app.view_mode {
        ViewMode::Tasks => {
            let today = Local::now().date_naive();

            let rows: Vec<Row> = app
                .tasks
                .iter()
                .map(|t| {
                    let days_left = (t.date - today).num_days();
                    let time_left_str = if days_left < 0 {
                        format!("{}d overdue", days_left.abs())
                    } else if days_left == 0 {
                        "Today".to_string()
                    } else {
                        format!("{}d", days_left)
                    };

                    let category = app
                        .categories
                        .iter()
                        .find(|c| c.id == t.category_id)
                        .map(|c| c.name.clone())
                        .unwrap_or_default();

                    let recur = t
                        .reminders
                        .first()
                        .filter(|r| r.enabled)
                        .map(|r| r.frequency.as_str())
                        .unwrap_or("-");

                    let style = if t.completed {
                        Style::default().fg(Color::DarkGray)
                    } else if days_left < 0 {
                        Style::default().fg(Color::Red)
                    } else if days_left <= 7 {
                        Style::default().fg(Color::Yellow)
                    } else {
                        Style::default().fg(Color::Green)
                    };

                    Row::new(vec![
                        Cell::from(t.title.clone()),
                        Cell::from(category),
                        Cell::from(t.date.to_string()),
                        Cell::from(time_left_str),
                        Cell::from(recur),
                        Cell::from(if t.completed { "Done" } else { "Pending" }),
                    ])
                    .style(style)
                })
                .collect();

            let widths = [
                Constraint::Min(24),
                Constraint::Length(16),
                Constraint::Length(12),
                Constraint::Length(12),
                Constraint::Length(8),
                Constraint::Length(8),
            ];

            let table = Table::new(rows, widths)
                .header(
                    Row::new(vec!["Title", "Category", "Due", "Time Left", "Recur", "Status"])
                        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                        .bottom_margin(1),
                )
                .block(Block::default().borders(Borders::ALL).title("OnTrack - Tasks"))
                .row_highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray))
                .highlight_symbol(">> ");

            f.render_stateful_widget(table, chunks[0], &mut app.state);
        }
        ViewMode::Suggestions => {
            let rows: Vec<Row> = app
                .suggestions
                .iter()
                .map(|s| {
                    let style = match s.relevance {
                        9..=u8::MAX => Style::default().fg(Color::Red),
                        7..=8 => Style::default().fg(Color::Yellow),
                        _ => Style::default().fg(Color::Green),
                    };
                    let feedback = match s.feedback {
                        Some(crate::models::Feedback::More) => "more",
                        Some(crate::models::Feedback::Less) => "less",
                        None => "-",
                    };
                    Row::new(vec![
                        Cell::from(s.kind.as_str()),
                        Cell::from(s.message.clone()),
                        Cell::from(s.relevance.to_string()),
                        Cell::from(feedback),
                    ])
                    .style(style)
                })
                .collect();

            let widths = [
                Constraint::Length(10),
                Constraint::Min(40),
                Constraint::Length(5),
                Constraint::Length(8),
            ];

            let table = Table::new(rows, widths)
                .header(
                    Row::new(vec!["Type", "Suggestion", "Rel", "Feedback"])
                        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                        .bottom_margin(1),
                )
                .block(Block::default().borders(Borders::ALL).title("OnTrack - Suggestions"))
                .row_highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray))
                .highlight_symbol(">> ");

            f.render_stateful_widget(table, chunks[0], &mut app.suggestion_state);
        }
        ViewMode::Templates => {
            let rows: Vec<Row> = app
                .templates
                .iter()
                .map(|t| {
                    let category = app
                        .categories
                        .iter()
                        .find(|c| c.id == t.category_id)
                        .map(|c| c.name.clone())
                        .unwrap_or_default();
                    Row::new(vec![
                        Cell::from(t.name.clone()),
                        Cell::from(category),
                        Cell::from(t.title.clone()),
                        Cell::from(if t.is_preset { "preset" } else { "custom" }),
                    ])
                })
                .collect();

            let widths = [
                Constraint::Min(20),
                Constraint::Length(16),
                Constraint::Min(20),
                Constraint::Length(8),
            ];

            let table = Table::new(rows, widths)
                .header(
                    Row::new(vec!["Name", "Category", "Title", "Kind"])
                        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                        .bottom_margin(1),
                )
                .block(Block::default().borders(Borders::ALL).title("OnTrack - Templates"))
                .row_highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray))
                .highlight_symbol(">> ");

            f.render_stateful_widget(table, chunks[0], &mut app.template_state);
        }
    }

    let help_text = match app.input_mode {
        InputMode::Normal => match app.view_mode {
            ViewMode::Tasks => {
                "q: Quit | a: Add | Space: Complete | z: Undo | d: Del | c: Toggle Done | v: Next View"
            }
            ViewMode::Suggestions => {
                "q: Quit | d: Dismiss | m: More like this | l: Less like this | v: Next View"
            }
            ViewMode::Templates => "q: Quit | Enter: Create Task from Template | v: Next View",
        },
        InputMode::Adding => "Enter: Next Step | Esc: Cancel",
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, chunks[1]);

    // Render input box if the wizard is active
    if app.input_mode == InputMode::Adding {
        let area = centered_rect(60, 3, f.area());
        f.render_widget(Clear, area); // Clear the area first

        let title_string;
        let title = if let Some(tmpl) = &app.add_state.template {
            title_string = match app.add_state.step {
                0 => format!("Add from '{}': Title (Enter keeps '{}')", tmpl, app.add_state.title),
                1 => format!("Add from '{}': Due Date (YYYY-MM-DD)", tmpl),
                2 => format!("Add from '{}': Recurrence (Optional)", tmpl),
                _ => "Add Task".to_string(),
            };
            title_string.as_str()
        } else {
            match app.add_state.step {
                0 => "Add Task: Enter Title",
                1 => "Add Task: Enter Category (Optional)",
                2 => "Add Task: Enter Due Date (YYYY-MM-DD)",
                3 => "Add Task: Enter Recurrence (Optional)",
                _ => "Add Task",
            }
        };

        let input = Paragraph::new(app.input_buffer.as_str())
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title(title));

        f.render_widget(input, area);
    }
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length((r.height - height) / 2),
                Constraint::Length(height),
                Constraint::Length((r.height - height) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(popup_layout[1])[1]
}
