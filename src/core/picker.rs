use crate::core::session::PromptSession;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{info, warn};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::{io, time::Duration};

struct Picker<'a> {
    session: &'a mut PromptSession,
    state: ListState,
    help_message: &'static str,
}

impl<'a> Picker<'a> {
    fn new(session: &'a mut PromptSession) -> Self {
        let mut state = ListState::default();
        if !session.files().is_empty() {
            state.select(Some(0));
        }
        Picker {
            session,
            state,
            help_message: "↑/↓: Navigate | Space: Toggle | a: All | n: None | d: Remove file | Enter: Confirm | q: Cancel",
        }
    }

    fn next(&mut self) {
        let len = self.session.files().len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    fn previous(&mut self) {
        let len = self.session.files().len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    fn highlighted_name(&self) -> Option<String> {
        self.state
            .selected()
            .and_then(|i| self.session.files().get(i))
            .map(|f| f.name.clone())
    }

    fn toggle_highlighted(&mut self) {
        if let Some(name) = self.highlighted_name() {
            self.session.toggle(&name);
        }
    }

    fn remove_highlighted(&mut self) {
        if let Some(name) = self.highlighted_name() {
            self.session.remove_file(&name);
            let len = self.session.files().len();
            if len == 0 {
                self.state.select(None);
            } else if let Some(i) = self.state.selected() {
                if i >= len {
                    self.state.select(Some(len - 1));
                }
            }
        }
    }
}

fn ui(f: &mut Frame, picker: &mut Picker<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.area());

    let title = Paragraph::new(Span::styled(
        "Select files to include in the prompt",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    f.render_widget(title, chunks[0]);

    let highlight_style = Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let items: Vec<ListItem> = picker
        .session
        .files()
        .iter()
        .enumerate()
        .map(|(i, file)| {
            let selected = picker.session.selection().contains(&file.name);
            let prefix = if selected { "[✓] " } else { "[ ] " };
            let content = format!("{}{}  ({} lines)", prefix, file.name, file.line_count);

            let style = if picker.state.selected() == Some(i) {
                highlight_style
            } else if selected {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };

            ListItem::new(Span::styled(content, style))
        })
        .collect();

    let file_list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Files ({} selected of {})",
            picker.session.selection().len(),
            picker.session.files().len()
        )))
        .highlight_style(highlight_style);

    f.render_stateful_widget(file_list, chunks[1], &mut picker.state);

    let estimate = picker.session.token_estimate();
    let budget = picker.session.budget();
    let estimate_style = if budget.is_over(estimate) {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };
    let status = Paragraph::new(Span::styled(
        format!(
            "~{} tokens (limit {}) | {} lines selected",
            estimate,
            budget.limit,
            picker.session.selected_line_count()
        ),
        estimate_style,
    ));
    f.render_widget(status, chunks[2]);

    let controls = Paragraph::new(Span::styled(
        picker.help_message,
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(controls, chunks[3]);
}

/// Runs the interactive checkbox list over the session's imported files.
/// Confirming with an empty selection is valid (a template-only prompt);
/// cancelling returns an error.
pub fn run_picker(session: &mut PromptSession) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut picker = Picker::new(session);
    let result = run_loop(&mut terminal, &mut picker);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match result {
        Ok(()) => {
            info!("Selection confirmed: {} files", session.selection().len());
            Ok(())
        }
        Err(e) => {
            warn!("Selection cancelled: {}", e);
            Err(e)
        }
    }
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, picker: &mut Picker<'_>) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui(f, picker))?;

        if crossterm::event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        return Err(anyhow::anyhow!("selection cancelled"));
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Err(anyhow::anyhow!("selection cancelled"));
                    }
                    KeyCode::Char('a') => picker.session.select_all(),
                    KeyCode::Char('n') => picker.session.clear_selection(),
                    KeyCode::Char('d') => picker.remove_highlighted(),
                    KeyCode::Char(' ') => picker.toggle_highlighted(),
                    KeyCode::Down => picker.next(),
                    KeyCode::Up => picker.previous(),
                    KeyCode::Enter => return Ok(()),
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::importer::ImportBatch;
    use crate::domain::models::ImportedFile;

    fn session_with(names: &[&str]) -> PromptSession {
        let mut session = PromptSession::default();
        session.commit_batch(ImportBatch {
            files: names
                .iter()
                .map(|n| ImportedFile::new(n.to_string(), 1, "x".to_string()))
                .collect(),
            warnings: Vec::new(),
            skipped: 0,
        });
        session
    }

    #[test]
    fn test_navigation_wraps() {
        let mut session = session_with(&["a.rs", "b.rs", "c.rs"]);
        let mut picker = Picker::new(&mut session);

        assert_eq!(picker.state.selected(), Some(0));
        picker.previous();
        assert_eq!(picker.state.selected(), Some(2));
        picker.next();
        assert_eq!(picker.state.selected(), Some(0));
    }

    #[test]
    fn test_toggle_highlighted_updates_selection() {
        let mut session = session_with(&["a.rs", "b.rs"]);
        let mut picker = Picker::new(&mut session);

        picker.toggle_highlighted();
        assert!(picker.session.selection().contains("a.rs"));
        picker.toggle_highlighted();
        assert!(picker.session.selection().is_empty());
    }

    #[test]
    fn test_remove_highlighted_clamps_cursor() {
        let mut session = session_with(&["a.rs", "b.rs"]);
        let mut picker = Picker::new(&mut session);
        picker.next();

        picker.remove_highlighted();
        assert_eq!(picker.session.files().len(), 1);
        assert_eq!(picker.state.selected(), Some(0));

        picker.remove_highlighted();
        assert!(picker.session.files().is_empty());
        assert_eq!(picker.state.selected(), None);
    }

    #[test]
    fn test_empty_session_has_no_cursor() {
        let mut session = PromptSession::default();
        let picker = Picker::new(&mut session);
        assert_eq!(picker.state.selected(), None);
    }
}
