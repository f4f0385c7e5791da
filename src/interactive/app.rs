//! TUI application state and logic

use crate::core::{ScoringPolicy, Word};
use crate::engine::{Engine, INVALID_FLASH, Key, KeyOutcome, ShakeToken};
use crate::score::JsonFileStore;
use crate::wordlists::{ALLOWED, Lexicon, pick_from, pick_target};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Application state
pub struct App {
    pub engine: Engine<Lexicon>,
    store: JsonFileStore,
    answers: Vec<Word>,
    /// Pending invalid-word flash: the token to clear and when it was raised
    shake: Option<(ShakeToken, Instant)>,
    pub show_score_card: bool,
    pub should_quit: bool,
}

impl App {
    /// Create the app, pull persisted history, and deal the first round
    ///
    /// Targets are drawn from `answers`; guesses are checked against the
    /// embedded allowed list extended with `answers`, so a custom answer
    /// pool is always guessable.
    #[must_use]
    pub fn new(policy: ScoringPolicy, mut store: JsonFileStore, answers: Vec<Word>) -> Self {
        let lexicon = Lexicon::from_words(
            ALLOWED
                .iter()
                .map(|&word| word.to_string())
                .chain(answers.iter().map(|word| word.text().to_string())),
        );

        let mut engine = Engine::new(lexicon, policy);
        engine.sync_history(&mut store);

        let mut app = Self {
            engine,
            store,
            answers,
            shake: None,
            show_score_card: false,
            should_quit: false,
        };
        app.new_game();
        app
    }

    /// Start a fresh round with a new random target
    pub fn new_game(&mut self) {
        self.shake = None;
        let target = pick_from(&self.answers).unwrap_or_else(pick_target);
        self.engine.start_game(target);
    }

    /// Whether the invalid-word flash is currently showing
    #[must_use]
    pub fn shaking(&self) -> bool {
        self.shake.is_some()
    }

    /// Expire the invalid-word flash once its delay has passed
    ///
    /// A stale token (the flagged round already ended) clears nothing; the
    /// engine treats it as a no-op.
    pub fn tick(&mut self) {
        if let Some((token, raised_at)) = self.shake
            && raised_at.elapsed() >= INVALID_FLASH
        {
            self.engine.clear_invalid(token);
            self.shake = None;
        }
    }

    /// Route one key event
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.show_score_card {
            match key.code {
                KeyCode::Esc | KeyCode::Tab | KeyCode::Enter => self.show_score_card = false,
                _ => {}
            }
            return;
        }

        let over = self.engine.state().is_some_and(|state| state.over());
        if over {
            // Typing is disabled, so plain letters are free for controls
            match key.code {
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.show_score_card = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.show_score_card = true,
            KeyCode::Char(c) => self.apply(Key::Letter(c)),
            KeyCode::Backspace => self.apply(Key::Backspace),
            KeyCode::Enter => self.apply(Key::Enter),
            _ => {}
        }
    }

    fn apply(&mut self, key: Key) {
        match self.engine.submit_key(key) {
            KeyOutcome::NotAWord(token) => {
                self.shake = Some((token, Instant::now()));
            }
            KeyOutcome::Won | KeyOutcome::Lost => {
                // Round finished: fold the new record into the store
                self.engine.sync_history(&mut self.store);
            }
            KeyOutcome::Ignored | KeyOutcome::Edited | KeyOutcome::Advanced => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Short poll so the invalid-word flash expires without a keypress
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.on_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
