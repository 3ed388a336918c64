//! Main application state and event loop.

use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;

use crossterm::event::KeyEvent;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::prelude::*;
use tracing::debug;

use ticklist_store::{
    FileTaskStore, Filter, IdGenerator, JsonFileAdapter, PersistenceAdapter, Stats, Task,
    TaskStore, TimestampIdGenerator,
};

use crate::error::TuiResult;
use crate::event::{
    filter_shortcut, is_backspace, is_delete, is_down, is_edit, is_enter, is_escape,
    is_interrupt, is_quit, is_tab, is_toggle, is_up, poll_key, typed_char,
};
use crate::ui;

/// Whether keys drive the list or edit the new-task input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys move the selection and act on tasks.
    #[default]
    Normal,
    /// Keys edit the new-task input line.
    Editing,
}

impl InputMode {
    /// Check if the input line is being edited.
    pub fn is_editing(self) -> bool {
        matches!(self, Self::Editing)
    }
}

/// Main application state.
pub struct App<A, G = TimestampIdGenerator> {
    /// The task list and its persistence.
    store: TaskStore<A, G>,
    /// Filter applied to the list view.
    filter: Filter,
    /// Index of the selected task within the filtered list.
    selected_index: usize,
    /// Text typed for the next task.
    input: String,
    input_mode: InputMode,
    /// Whether the application is still running.
    running: bool,
}

impl App<JsonFileAdapter> {
    /// Open the task list file at `store_path`.
    ///
    /// # Errors
    ///
    /// Returns `TuiError::Store` if the path cannot hold a task list file.
    pub fn open(store_path: &Path) -> TuiResult<Self> {
        let adapter = JsonFileAdapter::open(store_path)?;
        debug!(path = %store_path.display(), "opened task list file");
        Ok(Self::with_store(FileTaskStore::open(adapter)))
    }
}

impl<A: PersistenceAdapter, G: IdGenerator> App<A, G> {
    /// Create an App around an already loaded store.
    pub fn with_store(store: TaskStore<A, G>) -> Self {
        Self {
            store,
            filter: Filter::default(),
            selected_index: 0,
            input: String::new(),
            input_mode: InputMode::default(),
            running: true,
        }
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &TaskStore<A, G> {
        &self.store
    }

    /// Get the active filter.
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Get the currently selected task index.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Get the text typed so far.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    /// Check if the application is still running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Tasks matching the active filter, newest first.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.store.filtered(self.filter)
    }

    /// Get the currently selected task, if any.
    pub fn selected_task(&self) -> Option<&Task> {
        self.visible_tasks().get(self.selected_index).copied()
    }

    /// Counts over the whole list.
    pub fn stats(&self) -> Stats {
        self.store.stats()
    }

    /// Request the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Show only tasks matching `filter`.
    pub fn set_filter(&mut self, filter: Filter) {
        if self.filter != filter {
            self.filter = filter;
            self.selected_index = 0;
        }
    }

    /// Cycle to the next filter.
    pub fn next_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    /// Move selection down in the list.
    ///
    /// Clamps to the last item (does not wrap).
    pub fn select_next(&mut self) {
        let max_items = self.visible_tasks().len();
        if max_items > 0 && self.selected_index < max_items - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up in the list.
    ///
    /// Clamps to the first item (does not wrap).
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Start typing a new task.
    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
    }

    /// Leave the input line, discarding what was typed.
    pub fn cancel_editing(&mut self) {
        self.input.clear();
        self.input_mode = InputMode::Normal;
    }

    /// Add the typed text as a task and leave the input line.
    ///
    /// Blank input adds nothing. A new task that is visible under the
    /// active filter becomes the selection.
    pub fn submit_input(&mut self) {
        let text = std::mem::take(&mut self.input);
        self.input_mode = InputMode::Normal;

        if let Some(id) = self.store.add(&text) {
            let pos = self.visible_tasks().iter().position(|t| t.id() == id);
            if let Some(pos) = pos {
                self.selected_index = pos;
            }
        }
        self.clamp_selection();
    }

    /// Toggle completion of the selected task.
    ///
    /// Under the Active or Completed filter the task leaves the view, so the
    /// selection is clamped afterwards.
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task().map(Task::id) {
            self.store.toggle(id);
            self.clamp_selection();
        }
    }

    /// Delete the selected task.
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task().map(Task::id) {
            self.store.delete(id);
            self.clamp_selection();
        }
    }

    /// Keep the selection inside the filtered list.
    fn clamp_selection(&mut self) {
        let len = self.visible_tasks().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// Run the main application loop.
    ///
    /// This initializes the terminal, runs the event loop, and ensures
    /// the terminal is restored on exit (even on panic).
    pub fn run(&mut self) -> TuiResult<()> {
        let mut terminal = init_terminal()?;

        // Restores the terminal even if the loop panics
        let guard = scopeguard::guard((), |()| {
            let _ = restore_terminal();
        });

        let result = self.event_loop(&mut terminal);

        drop(guard);

        result
    }

    /// The main event loop.
    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> TuiResult<()> {
        while self.running {
            terminal.draw(|frame| ui::draw(frame, self))?;

            if let Some(key) = poll_key(Duration::from_millis(100))? {
                self.handle_key(&key);
            }
        }
        Ok(())
    }

    /// Handle a keyboard event.
    pub fn handle_key(&mut self, key: &KeyEvent) {
        // Ctrl+C quits from either mode
        if is_interrupt(key) {
            self.quit();
            return;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Editing => self.handle_editing_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: &KeyEvent) {
        if is_quit(key) {
            self.quit();
        } else if is_edit(key) {
            self.start_editing();
        } else if is_down(key) {
            self.select_next();
        } else if is_up(key) {
            self.select_previous();
        } else if is_toggle(key) {
            self.toggle_selected();
        } else if is_delete(key) {
            self.delete_selected();
        } else if is_tab(key) {
            self.next_filter();
        } else if let Some(filter) = filter_shortcut(key) {
            self.set_filter(filter);
        }
    }

    fn handle_editing_key(&mut self, key: &KeyEvent) {
        if is_enter(key) {
            self.submit_input();
        } else if is_escape(key) {
            self.cancel_editing();
        } else if is_backspace(key) {
            self.input.pop();
        } else if let Some(c) = typed_char(key) {
            self.input.push(c);
        }
    }
}

/// Initialize the terminal for TUI rendering.
fn init_terminal() -> TuiResult<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
fn restore_terminal() -> TuiResult<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
