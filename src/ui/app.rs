//! Main TUI application state and logic

use super::panes::{self, InfoRenderData, Selection, StatusRenderData};
use crate::config::{self, Mode, Settings, STRUCTURE_SEED_COUNT, STRUCTURE_TOP_UP};
use crate::playback::{self, PlaybackError, Session};
use crate::registry::{AlgorithmEntry, Registry, StructureEntry};
use crate::step::Value;
use crate::structures::{Action, Container, StructureKind};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use rand::Rng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

const MIN_DELAY: Duration = Duration::from_millis(25);
const MAX_DELAY: Duration = Duration::from_millis(2000);

/// Longest value the prompt accepts, sign included
const MAX_INPUT_LEN: usize = 12;

/// Which operation a value prompt is collecting input for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Insert,
    Delete,
    Find,
}

impl PromptKind {
    pub fn label(self) -> &'static str {
        match self {
            PromptKind::Insert => "Insert value",
            PromptKind::Delete => "Delete value",
            PromptKind::Find => "Find value",
        }
    }

    /// Turn the typed text into an action
    pub fn action(self, text: &str) -> Option<Action> {
        let text = text.trim();
        if self == PromptKind::Delete && text.is_empty() {
            return Some(Action::Delete(None));
        }
        let value = text.parse::<Value>().ok()?;
        Some(match self {
            PromptKind::Insert => Action::Insert(value),
            PromptKind::Delete => Action::Delete(Some(value)),
            PromptKind::Find => Action::Search(value),
        })
    }
}

/// A value being typed in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub buffer: String,
}

/// The main application state
pub struct App {
    /// Playback of the active run
    pub session: Session,

    /// Sorting or data structures
    pub mode: Mode,

    algorithms: Registry<AlgorithmEntry>,
    structures: Registry<StructureEntry>,

    /// Selected entries, in registry order
    pub algorithm_index: usize,
    pub structure_index: usize,

    /// Input for the next sort run
    pub data: Vec<Value>,

    /// The structure operations are applied to
    pub structure: Box<dyn Container>,

    rng: StdRng,

    /// Delay between steps while playing
    pub delay: Duration,

    /// Open value prompt, if any
    pub prompt: Option<Prompt>,

    /// Narration scroll offset (`usize::MAX` follows the latest caption)
    pub narration_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create the app and start the first run described by `settings`
    pub fn new(settings: &Settings) -> Self {
        let algorithms = Registry::algorithms();
        let structures = Registry::structures();
        let algorithm_index = algorithms
            .iter()
            .position(|entry| entry.algorithm == settings.algorithm)
            .unwrap_or(0);
        let structure_index = structures
            .iter()
            .position(|entry| entry.kind == settings.structure)
            .unwrap_or(0);

        let mut rng = settings.rng();
        let mut structure = settings.structure.create();
        structure.seed(&config::random_values(&mut rng, STRUCTURE_SEED_COUNT));

        let mut app = App {
            session: Session::new(settings.history_limit),
            mode: settings.mode,
            algorithms,
            structures,
            algorithm_index,
            structure_index,
            data: settings.data.clone(),
            structure,
            rng,
            delay: settings.delay,
            prompt: None,
            narration_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        };
        app.restart();
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= self.delay {
                match self.session.step_forward() {
                    Ok(_) => {
                        self.status_message = "Playing...".to_string();
                        self.narration_scroll = usize::MAX;
                    }
                    Err(PlaybackError::AtEnd) => {
                        self.is_playing = false;
                        self.status_message = "Visualization complete".to_string();
                    }
                    Err(e) => {
                        self.is_playing = false;
                        self.status_message = e.to_string();
                    }
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn algorithm_entry(&self) -> Option<&AlgorithmEntry> {
        self.algorithms.iter().nth(self.algorithm_index)
    }

    fn structure_entry(&self) -> Option<&StructureEntry> {
        self.structures.iter().nth(self.structure_index)
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Visual pane and narration on the left, info on the right, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[0]);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        let placeholder = playback::Frame::initial(Vec::new(), "");
        let snapshot = self.session.current().unwrap_or(&placeholder);

        match self.mode {
            Mode::Sort => {
                let title = self
                    .algorithm_entry()
                    .map(|entry| entry.info.name)
                    .unwrap_or("Sorting");
                panes::render_bars_pane(frame, left_rows[0], snapshot, title);
            }
            Mode::Structure => {
                panes::render_structure_pane(frame, left_rows[0], snapshot, self.structure.kind());
            }
        }

        let selection = match self.mode {
            Mode::Sort => self
                .algorithm_entry()
                .map(|entry| Selection::Algorithm(&entry.info)),
            Mode::Structure => self
                .structure_entry()
                .map(|entry| Selection::Structure(&entry.info)),
        };
        if let Some(selection) = selection {
            let info = InfoRenderData {
                selection,
                stats: snapshot.stats,
                delay: self.delay,
                memory_usage: self.session.memory_usage(),
                memory_limit: self.session.memory_limit(),
            };
            panes::render_info_pane(frame, columns[1], &info);
        }

        let status = StatusRenderData {
            message: &self.status_message,
            mode: self.mode,
            current_step: self.session.position(),
            total_steps: self.session.total_frames(),
            is_live: self.session.is_live(),
            is_playing: self.is_playing,
            input: self
                .prompt
                .as_ref()
                .map(|prompt| (prompt.kind.label(), prompt.buffer.as_str())),
        };
        panes::render_status_bar(frame, main_chunks[1], &status);

        panes::render_narration_pane(
            frame,
            left_rows[1],
            self.session.visited(),
            &mut self.narration_scroll,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = (c as u8 - b'0') as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.session.step_forward().is_ok() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.narration_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.mode = match self.mode {
                    Mode::Sort => Mode::Structure,
                    Mode::Structure => Mode::Sort,
                };
                self.restart();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => {
                self.narration_scroll = self.narration_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.narration_scroll = self.narration_scroll.saturating_add(1);
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.status_message = match self.session.jump_to_end() {
                    Ok(_) => "Jumped to end".to_string(),
                    Err(e) => format!("Cannot jump to end: {}", e),
                };
                self.narration_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.status_message = match self.session.rewind_to_start() {
                    Ok(_) => "Jumped to start".to_string(),
                    Err(e) => format!("Cannot rewind: {}", e),
                };
                self.narration_scroll = 0;
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.delay = (self.delay / 2).max(MIN_DELAY);
                self.status_message = format!("Delay {} ms", self.delay.as_millis());
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.delay = (self.delay * 2).min(MAX_DELAY);
                self.status_message = format!("Delay {} ms", self.delay.as_millis());
            }
            KeyCode::Char('n') => self.cycle(true),
            KeyCode::Char('p') => self.cycle(false),
            KeyCode::Char('r') => self.randomize(),
            KeyCode::Char('t') => {
                self.restart();
                self.toggle_play();
            }
            KeyCode::Char('i') => self.open_prompt(PromptKind::Insert),
            KeyCode::Char('d') => self.open_prompt(PromptKind::Delete),
            KeyCode::Char('f') => self.open_prompt(PromptKind::Find),
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.prompt = None;
                self.status_message = "Cancelled".to_string();
            }
            KeyCode::Enter => {
                if let Some(prompt) = self.prompt.take() {
                    self.submit(prompt);
                }
            }
            KeyCode::Backspace => {
                prompt.buffer.pop();
            }
            KeyCode::Char(c)
                if (c.is_ascii_digit() || (c == '-' && prompt.buffer.is_empty()))
                    && prompt.buffer.len() < MAX_INPUT_LEN =>
            {
                prompt.buffer.push(c);
            }
            _ => {}
        }
    }

    fn open_prompt(&mut self, kind: PromptKind) {
        if self.mode != Mode::Structure {
            self.status_message = "Switch to data structures (tab) to edit".to_string();
            return;
        }
        self.is_playing = false;

        // Structures that always remove the same element need no value
        let removes_fixed = matches!(
            self.structure.kind(),
            StructureKind::Stack | StructureKind::Queue | StructureKind::BinaryHeap
        );
        if kind == PromptKind::Delete && removes_fixed {
            self.apply(Action::Delete(None));
            return;
        }

        self.prompt = Some(Prompt {
            kind,
            buffer: String::new(),
        });
        self.status_message = kind.label().to_string();
    }

    fn submit(&mut self, prompt: Prompt) {
        match prompt.kind.action(&prompt.buffer) {
            Some(action) => self.apply(action),
            None => self.status_message = "Please enter a valid number".to_string(),
        }
    }

    /// Apply `action` to the structure and start animating it
    fn apply(&mut self, action: Action) {
        match self.session.start_operation(self.structure.as_mut(), action) {
            Ok(()) => {
                self.narration_scroll = usize::MAX;
                self.status_message = format!("Running {}", action);
                self.start_playing();
            }
            Err(e) => {
                self.status_message = e.to_string();
            }
        }
    }

    /// Start a fresh run for the current mode and selection
    fn restart(&mut self) {
        self.is_playing = false;
        self.narration_scroll = 0;
        let result = match self.mode {
            Mode::Sort => {
                let Some(algorithm) = self.algorithm_entry().map(|entry| entry.algorithm) else {
                    return;
                };
                self.session.start_sort(algorithm, &self.data)
            }
            Mode::Structure => self.session.start_demo(self.structure.as_mut()),
        };
        self.status_message = match result {
            Ok(()) => "Ready!".to_string(),
            Err(e) => e.to_string(),
        };
    }

    /// Select the next or previous algorithm or structure
    fn cycle(&mut self, forward: bool) {
        match self.mode {
            Mode::Sort => {
                self.algorithm_index = wrap(self.algorithm_index, self.algorithms.len(), forward);
            }
            Mode::Structure => {
                self.structure_index = wrap(self.structure_index, self.structures.len(), forward);
                let values = config::random_values(&mut self.rng, STRUCTURE_SEED_COUNT);
                if let Some(mut structure) = self.structure_entry().map(|entry| (entry.create)()) {
                    structure.seed(&values);
                    self.structure = structure;
                }
            }
        }
        self.restart();
    }

    fn randomize(&mut self) {
        match self.mode {
            Mode::Sort => {
                self.data = config::random_data(&mut self.rng);
                self.restart();
                self.status_message = format!("Generated {} random values", self.data.len());
            }
            Mode::Structure => {
                let count = self.rng.gen_range(STRUCTURE_TOP_UP);
                let values = config::random_values(&mut self.rng, count);
                self.structure.seed(&values);
                self.restart();
                self.status_message = format!("Added {} random values", count);
            }
        }
    }

    fn toggle_play(&mut self) {
        if self.is_playing {
            self.is_playing = false;
            self.status_message = "Paused".to_string();
        } else {
            self.start_playing();
            self.status_message = "Playing...".to_string();
        }
    }

    fn start_playing(&mut self) {
        self.is_playing = true;
        self.last_play_time = Instant::now()
            .checked_sub(self.delay)
            .unwrap_or(Instant::now());
    }

    /// Step forward in the run
    fn step_forward(&mut self) {
        match self.session.step_forward() {
            Ok(_) => {
                self.status_message = "Stepped forward".to_string();
                self.narration_scroll = usize::MAX;
            }
            Err(e) => {
                self.status_message = format!("Cannot step forward: {}", e);
            }
        }
    }

    /// Step backward in the run
    fn step_backward(&mut self) {
        match self.session.step_backward() {
            Ok(_) => {
                self.status_message = "Stepped backward".to_string();
                self.narration_scroll = usize::MAX;
            }
            Err(e) => {
                self.status_message = format!("Cannot step backward: {}", e);
            }
        }
    }
}

fn wrap(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        0
    } else if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Cli;
    use clap::Parser;
    use crossterm::event::KeyModifiers;

    fn app(args: &[&str]) -> App {
        let cli = Cli::parse_from(std::iter::once("sortty").chain(args.iter().copied()));
        App::new(&Settings::from_cli(cli).unwrap())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn prompt_parses_values() {
        assert_eq!(PromptKind::Insert.action(" 12 "), Some(Action::Insert(12)));
        assert_eq!(PromptKind::Delete.action(""), Some(Action::Delete(None)));
        assert_eq!(PromptKind::Find.action("-3"), Some(Action::Search(-3)));
        assert_eq!(PromptKind::Insert.action("abc"), None);
    }

    #[test]
    fn wrap_cycles_both_ways() {
        assert_eq!(wrap(4, 5, true), 0);
        assert_eq!(wrap(0, 5, false), 4);
        assert_eq!(wrap(0, 0, true), 0);
    }

    #[test]
    fn stepping_keys_drive_the_session() {
        let mut app = app(&["--data", "3,1,2", "--algorithm", "quick"]);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.session.position(), 3);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.session.position(), 2);
        press(&mut app, KeyCode::Enter);
        assert!(app.session.is_finished());
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.position(), 0);
    }

    #[test]
    fn insert_prompt_applies_operation() {
        let mut app = app(&["--mode", "structure", "--structure", "array", "--seed", "1"]);
        let before = app.structure.len();
        press(&mut app, KeyCode::Char('i'));
        assert!(app.prompt.is_some());
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        assert!(app.prompt.is_none());
        assert_eq!(app.structure.len(), before + 1);
        assert!(app.is_playing);
    }

    #[test]
    fn edit_keys_ignored_while_sorting() {
        let mut app = app(&[]);
        press(&mut app, KeyCode::Char('i'));
        assert!(app.prompt.is_none());
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.mode, Mode::Structure);
    }

    #[test]
    fn speed_keys_stay_in_bounds() {
        let mut app = app(&["--delay-ms", "40"]);
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.delay, MIN_DELAY);
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('-'));
        }
        assert_eq!(app.delay, MAX_DELAY);
    }
}
