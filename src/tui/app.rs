use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io;
use crate::io::tasks_io;
use crate::io::watcher::ScheduleWatcher;
use crate::layout::ChartModel;
use crate::model::{ChartConfig, Task};

use super::render;
use super::theme::Theme;

/// Main application state
pub struct App {
    /// Raw input collection, kept for rebuilds
    pub input: Vec<Task>,
    /// Derived chart model; rebuilt whenever the input changes
    pub model: ChartModel,
    pub theme: Theme,
    /// Width of the task-name column in cells
    pub name_width: u16,
    /// Tasks file backing this view, if any (demo mode has none)
    pub tasks_path: Option<PathBuf>,
    /// Selected task row
    pub selected: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    /// Transient message for the status line (reload errors etc.)
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(input: Vec<Task>, tasks_path: Option<PathBuf>, config: ChartConfig) -> Self {
        let model = ChartModel::build(&input, Local::now().date_naive());
        App {
            input,
            model,
            theme: Theme::from_config(&config.ui),
            name_width: config.ui.name_width,
            tasks_path,
            selected: 0,
            scroll_offset: 0,
            status: None,
            should_quit: false,
        }
    }

    /// Re-read the tasks file and rebuild the derived model. Load failures
    /// keep the current model and surface on the status line.
    pub fn reload(&mut self) {
        let Some(path) = self.tasks_path.clone() else {
            return;
        };
        match tasks_io::load_tasks(&path) {
            Ok(input) => {
                if let Ok(config) = config_io::load_config_for(&path) {
                    self.theme = Theme::from_config(&config.ui);
                    self.name_width = config.ui.name_width;
                }
                self.input = input;
                self.rebuild();
                self.status = Some("reloaded".to_string());
            }
            Err(e) => {
                self.status = Some(format!("reload failed: {}", e));
            }
        }
    }

    /// Rebuild the derived model from the current input.
    pub fn rebuild(&mut self) {
        self.model = ChartModel::build(&self.input, Local::now().date_naive());
        if self.selected >= self.model.tasks.len() {
            self.selected = self.model.tasks.len().saturating_sub(1);
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.model.tasks.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.model.tasks.len().saturating_sub(1);
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    app.status = None;
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        KeyCode::Char('r') => app.reload(),
        _ => {}
    }
}

/// Run the TUI on a tasks file, with live reload when it changes on disk.
pub fn run(tasks_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let input = tasks_io::load_tasks(tasks_path)?;
    let config = config_io::load_config_for(tasks_path)?;
    let app = App::new(input, Some(tasks_path.to_path_buf()), config);
    // Live reload is best-effort; the TUI works without a watcher
    let watcher = ScheduleWatcher::start(tasks_path).ok();
    run_terminal(app, watcher)
}

/// Run the TUI on an in-memory task collection (demo mode).
pub fn run_with_tasks(input: Vec<Task>) -> Result<(), Box<dyn std::error::Error>> {
    let app = App::new(input, None, ChartConfig::default());
    run_terminal(app, None)
}

fn run_terminal(
    mut app: App,
    watcher: Option<ScheduleWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, watcher);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<ScheduleWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            handle_key(app, key);
        }

        if let Some(w) = &watcher
            && !w.poll().is_empty()
        {
            app.reload();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
