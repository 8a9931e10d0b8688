//! TUI application state and logic

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;

use super::event::{Event, EventHandler};
use super::terminal::Terminal;
use super::view;
use crate::state::{TaskStore, ThemeController};
use crate::storage::KvStore;

const HELP: &str =
    "j/k:move space:toggle e:edit d:delete i:new task t:theme q:quit";

/// What keystrokes currently go to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Moving through the list
    #[default]
    Browse,
    /// Typing into the "new task" field
    Input,
    /// Typing into the draft of the row being edited
    Edit,
}

/// Application state
pub struct App<K> {
    tasks: TaskStore<K>,
    theme: ThemeController<K>,

    /// Selected row
    selected: usize,

    mode: Mode,

    /// Status message to display
    status_message: Option<String>,

    should_quit: bool,
}

impl<K: KvStore> App<K> {
    pub fn new(tasks: TaskStore<K>, theme: ThemeController<K>) -> Self {
        Self {
            tasks,
            theme,
            selected: 0,
            mode: Mode::Browse,
            status_message: None,
            should_quit: false,
        }
    }

    /// Run the main application loop
    pub fn run(&mut self, terminal: &mut Terminal, events: &EventHandler) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            match events.next()? {
                Event::Key(key) => self.handle_key(key)?,
                Event::Resize | Event::Tick => {}
            }
        }

        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        view::draw(frame, self);
    }

    /// Handle key events
    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }

        self.status_message = None;

        match self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::Input => self.handle_input_key(key),
            Mode::Edit => self.handle_edit_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }

            KeyCode::Char('j') | KeyCode::Down => self.move_selection_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection_up(),
            KeyCode::Char('g') | KeyCode::Home => self.selected = 0,
            KeyCode::Char('G') | KeyCode::End => {
                self.selected = self.tasks.tasks().len().saturating_sub(1);
            }

            KeyCode::Char(' ') | KeyCode::Char('x') => {
                if self.tasks.toggle_complete(self.selected)? {
                    let task = &self.tasks.tasks()[self.selected];
                    let verb = if task.completed { "Completed" } else { "Reopened" };
                    self.status_message = Some(format!("{}: {}", verb, task.text));
                }
            }

            KeyCode::Char('e') | KeyCode::Enter => {
                if self.tasks.start_edit(self.selected) {
                    self.mode = Mode::Edit;
                }
            }

            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(task) = self.tasks.delete(self.selected)? {
                    self.status_message = Some(format!("Deleted: {}", task.text));
                    self.clamp_selection();
                }
            }

            KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Tab => {
                self.mode = Mode::Input;
            }

            KeyCode::Char('t') => {
                let theme = self.theme.toggle()?;
                self.status_message = Some(format!("Switched to {} theme", theme));
            }

            KeyCode::Char('?') => {
                self.status_message = Some(HELP.to_string());
            }

            _ => {}
        }

        Ok(())
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Tab => {
                self.mode = Mode::Browse;
            }
            KeyCode::Enter => match self.tasks.submit_input()? {
                Some(index) => {
                    self.selected = index;
                    self.status_message =
                        Some(format!("Added: {}", self.tasks.tasks()[index].text));
                }
                None => {
                    self.status_message = Some("Type a task first".to_string());
                }
            },
            KeyCode::Backspace => {
                let mut text = self.tasks.pending_input().to_string();
                text.pop();
                self.tasks.set_pending_input(text);
            }
            KeyCode::Char(c) => {
                let mut text = self.tasks.pending_input().to_string();
                text.push(c);
                self.tasks.set_pending_input(text);
            }
            _ => {}
        }

        Ok(())
    }

    fn handle_edit_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(index) = self.tasks.editing_index() else {
            self.mode = Mode::Browse;
            return Ok(());
        };

        match key.code {
            KeyCode::Esc => {
                self.tasks.cancel_edit();
                self.mode = Mode::Browse;
            }
            KeyCode::Enter => {
                if self.tasks.save_edit(index)? {
                    self.mode = Mode::Browse;
                    self.status_message = Some("Saved".to_string());
                } else {
                    self.status_message = Some("Task text cannot be blank".to_string());
                }
            }
            KeyCode::Backspace => {
                let mut draft = self.draft();
                draft.pop();
                self.tasks.set_edit_draft(draft);
            }
            KeyCode::Char(c) => {
                let mut draft = self.draft();
                draft.push(c);
                self.tasks.set_edit_draft(draft);
            }
            _ => {}
        }

        Ok(())
    }

    fn draft(&self) -> String {
        self.tasks
            .edit_session()
            .map(|s| s.draft.clone())
            .unwrap_or_default()
    }

    fn move_selection_down(&mut self) {
        let len = self.tasks.tasks().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    fn move_selection_up(&mut self) {
        let len = self.tasks.tasks().len();
        if len > 0 {
            self.selected = if self.selected == 0 {
                len - 1
            } else {
                self.selected - 1
            };
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.tasks.tasks().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    // Public accessors for views

    pub fn tasks(&self) -> &TaskStore<K> {
        &self.tasks
    }

    pub fn theme(&self) -> &ThemeController<K> {
        &self.theme
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}
