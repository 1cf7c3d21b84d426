//! TUI application state and logic

use crate::core::{Lexicon, Pattern, parse_letters};
use crate::game::{GameConfig, GameResult, GameState, GuessError, GuessOutcome, start_new_game};
use crate::solver::{HelperQuery, QueryResult, SelectError, query, suggest_letter};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Rows shown per helper list before any "show more"
pub const INITIAL_ROWS: usize = 5;

/// Rows added by each "show more"
pub const SHOW_MORE_STEP: usize = 10;

/// Application state
pub struct App<'a> {
    pub lexicon: &'a Lexicon,
    pub config: GameConfig,
    rng: StdRng,
    pub screen: Screen,
    pub game: GameState,
    pub helper: HelperState,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Game,
    Helper,
}

/// Which helper input receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelperField {
    Pattern,
    Excluded,
}

/// Helper screen inputs, last result and pagination
#[derive(Debug, Clone)]
pub struct HelperState {
    pub pattern_input: String,
    pub excluded_input: String,
    pub focus: HelperField,
    pub words_to_show: usize,
    pub letters_to_show: usize,
    pub result: Option<QueryResult>,
    pub error: Option<String>,
}

impl Default for HelperState {
    fn default() -> Self {
        Self {
            pattern_input: String::new(),
            excluded_input: String::new(),
            focus: HelperField::Pattern,
            words_to_show: INITIAL_ROWS,
            letters_to_show: INITIAL_ROWS,
            result: None,
            error: None,
        }
    }
}

impl HelperState {
    /// Re-run the query for the current inputs and reset pagination
    pub fn refresh(&mut self, lexicon: &Lexicon) {
        self.words_to_show = INITIAL_ROWS;
        self.letters_to_show = INITIAL_ROWS;
        self.result = None;
        self.error = None;

        if self.pattern_input.trim().is_empty() {
            return;
        }

        match Pattern::parse(self.pattern_input.trim()) {
            Ok(pattern) => {
                let request = HelperQuery::new(pattern, parse_letters(&self.excluded_input));
                self.result = Some(query(lexicon, &request));
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn show_more_words(&mut self) {
        self.words_to_show += SHOW_MORE_STEP;
    }

    pub fn show_more_letters(&mut self) {
        self.letters_to_show += SHOW_MORE_STEP;
    }

    const fn focused_input(&mut self) -> &mut String {
        match self.focus {
            HelperField::Pattern => &mut self.pattern_input,
            HelperField::Excluded => &mut self.excluded_input,
        }
    }

    const fn switch_focus(&mut self) {
        self.focus = match self.focus {
            HelperField::Pattern => HelperField::Excluded,
            HelperField::Excluded => HelperField::Pattern,
        };
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    /// Returns `SelectError::EmptyCandidateSet` if no word fits the length band.
    pub fn new(lexicon: &'a Lexicon, config: GameConfig, mut rng: StdRng) -> Result<Self, SelectError> {
        let game = start_new_game(lexicon, &config, &mut rng)?;

        Ok(Self {
            lexicon,
            config,
            rng,
            screen: Screen::Game,
            game,
            helper: HelperState::default(),
            messages: vec![
                Message {
                    text: "Welcome! Type a letter to guess.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Tab opens the helper, '?' asks it for a letter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        })
    }

    pub fn new_game(&mut self) {
        match start_new_game(self.lexicon, &self.config, &mut self.rng) {
            Ok(game) => {
                self.game = game;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn handle_guess(&mut self, letter: char) {
        match self.game.guess(&letter.to_string()) {
            Ok(GuessOutcome::Hit) => {
                self.add_message(&format!("Yes, there is a {}", letter.to_uppercase()), MessageStyle::Success);
            }
            Ok(GuessOutcome::Miss) => {
                self.add_message(
                    &format!(
                        "No {} ({} misses left)",
                        letter.to_uppercase(),
                        self.game.wrong_remaining()
                    ),
                    MessageStyle::Error,
                );
            }
            Ok(GuessOutcome::Won | GuessOutcome::Lost) => self.finish_game(),
            Err(GuessError::GameOver(_)) => {
                self.add_message("Game over. Press Ctrl-N for a new game.", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self) {
        self.stats.total_games += 1;
        let word = self.game.chosen_word().to_uppercase();

        if self.game.result() == GameResult::Win {
            self.stats.games_won += 1;
            self.add_message(&format!("🎉 You found {word}!"), MessageStyle::Success);
        } else {
            self.add_message(&format!("💀 Out of guesses. The word was {word}."), MessageStyle::Error);
        }
        self.add_message("Press Ctrl-N for a new game or Esc to quit.", MessageStyle::Info);
    }

    pub fn hint(&mut self) {
        if self.game.is_over() {
            return;
        }
        match suggest_letter(self.lexicon, &self.game) {
            Some(letter) => self.add_message(&format!("💡 Try {}", letter.to_uppercase()), MessageStyle::Info),
            None => self.add_message("No suggestion available", MessageStyle::Error),
        }
    }

    /// Fill the helper inputs from the current game's progress and misses
    pub fn load_game_into_helper(&mut self) {
        if let Some(request) = HelperQuery::from_game(&self.game) {
            self.helper.pattern_input = request.pattern.to_string();
            self.helper.excluded_input = request.excluded.iter().collect();
            self.helper.refresh(self.lexicon);
        }
    }

    pub const fn toggle_screen(&mut self) {
        self.screen = match self.screen {
            Screen::Game => Screen::Helper,
            Screen::Helper => Screen::Game,
        };
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.toggle_screen();
                return;
            }
            _ => {}
        }

        match self.screen {
            Screen::Game => self.handle_game_key(key.code, ctrl),
            Screen::Helper => self.handle_helper_key(key.code, ctrl),
        }
    }

    fn handle_game_key(&mut self, code: KeyCode, ctrl: bool) {
        match code {
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char('?') => self.hint(),
            KeyCode::Char(c) if !ctrl => self.handle_guess(c),
            _ => {}
        }
    }

    fn handle_helper_key(&mut self, code: KeyCode, ctrl: bool) {
        match code {
            KeyCode::Char('w') if ctrl => self.helper.show_more_words(),
            KeyCode::Char('l') if ctrl => self.helper.show_more_letters(),
            KeyCode::Char('g') if ctrl => self.load_game_into_helper(),
            KeyCode::Char(c) if !ctrl => {
                self.helper.focused_input().push(c);
                self.helper.refresh(self.lexicon);
            }
            KeyCode::Backspace => {
                self.helper.focused_input().pop();
                self.helper.refresh(self.lexicon);
            }
            KeyCode::Enter | KeyCode::Up | KeyCode::Down => self.helper.switch_focus(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
