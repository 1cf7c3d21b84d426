//! TUI rendering with ratatui
//!
//! Game and helper screens for the Hangman interface.

use super::app::{App, HelperField, MessageStyle, Screen};
use crate::game::GameResult;
use crate::output::formatters::{create_progress_bar, format_letters, format_score, hangman_figure};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    match app.screen {
        Screen::Game => render_game(f, app, chunks[1]),
        Screen::Helper => render_helper(f, app, chunks[1]),
    }

    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.screen {
        Screen::Game => "🪢 HANGMAN - Game",
        Screen::Helper => "🔎 HANGMAN - Helper",
    };
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_game(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let misses = app.game.guessed_wrong().len();
    let figure_color = match app.game.result() {
        GameResult::Lose => Color::Red,
        GameResult::Win => Color::Green,
        GameResult::InProgress => Color::White,
    };
    let figure = Paragraph::new(hangman_figure(misses))
        .style(Style::default().fg(figure_color))
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(figure, chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Word and letters
            Constraint::Length(3), // Misses gauge
        ])
        .split(chunks[1]);

    let progress = if app.game.is_over() {
        // Show the full word once the game is decided
        app.game
            .chosen_word()
            .chars()
            .map(|c| c.to_uppercase().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        app.game.progress()
    };

    let status = match app.game.result() {
        GameResult::InProgress => Span::raw("Type a letter to guess"),
        GameResult::Win => Span::styled(
            "🎉 You win!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        GameResult::Lose => Span::styled(
            "💀 Game over",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            progress,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Correct: "),
            Span::styled(
                format_letters(app.game.guessed_correct()),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::raw("Missed:  "),
            Span::styled(
                format_letters(app.game.guessed_wrong()),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(""),
        Line::from(status),
    ];

    let word = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Word ({} letters) ", app.game.chosen_word().chars().count()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(word, right[0]);

    let max = app.game.max_wrong_allowed().max(1);
    let used = misses.min(max);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Misses ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(if used + 1 >= max { Color::Red } else { Color::Cyan }))
        .ratio(used as f64 / max as f64)
        .label(format!("{used}/{max} | {} left", app.game.wrong_remaining()));
    f.render_widget(gauge, right[1]);
}

fn render_helper(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Inputs
            Constraint::Min(6),    // Results
        ])
        .split(area);

    let inputs = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    render_input(
        f,
        " Pattern (letters and _) ",
        &app.helper.pattern_input,
        app.helper.focus == HelperField::Pattern,
        inputs[0],
    );
    render_input(
        f,
        " Excluded letters ",
        &app.helper.excluded_input,
        app.helper.focus == HelperField::Excluded,
        inputs[1],
    );

    let results = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_word_list(f, app, results[0]);
    render_letter_list(f, app, results[1]);
}

fn render_input(f: &mut Frame, title: &str, value: &str, focused: bool, area: Rect) {
    let color = if focused { Color::Yellow } else { Color::DarkGray };
    let input = Paragraph::new(value.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_type(if focused { BorderType::Double } else { BorderType::Plain })
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_word_list(f: &mut Frame, app: &App, area: Rect) {
    let helper = &app.helper;

    let (title, items) = match (&helper.result, &helper.error) {
        (_, Some(error)) => (
            " Possible words ".to_string(),
            vec![ListItem::new(error.clone()).style(Style::default().fg(Color::Red))],
        ),
        (None, None) => (
            " Possible words ".to_string(),
            vec![ListItem::new("Enter a pattern such as _a_e").style(Style::default().fg(Color::DarkGray))],
        ),
        (Some(result), None) if result.words.is_empty() => (
            " Possible words (0) ".to_string(),
            vec![ListItem::new("No words match this pattern.").style(Style::default().fg(Color::Red))],
        ),
        (Some(result), None) => {
            let mut items: Vec<ListItem> = result
                .words
                .iter()
                .take(helper.words_to_show)
                .map(|ranked| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{:<14}", ranked.word.to_uppercase()),
                            Style::default().fg(Color::White),
                        ),
                        Span::styled(
                            format!("{:>12}", format_score(ranked.frequency)),
                            Style::default().fg(Color::Cyan),
                        ),
                    ]))
                })
                .collect();
            if result.words.len() > helper.words_to_show {
                items.push(
                    ListItem::new(format!(
                        "… {} more (Ctrl-W)",
                        result.words.len() - helper.words_to_show
                    ))
                    .style(Style::default().fg(Color::DarkGray)),
                );
            }
            (format!(" Possible words ({}) ", result.words.len()), items)
        }
    };

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_letter_list(f: &mut Frame, app: &App, area: Rect) {
    let helper = &app.helper;

    let items: Vec<ListItem> = match &helper.result {
        Some(result) if !result.letters.is_empty() => {
            let top = result.letters[0].score;
            let mut items: Vec<ListItem> = result
                .letters
                .iter()
                .take(helper.letters_to_show)
                .map(|scored| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{} ", scored.letter.to_uppercase()),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            create_progress_bar(scored.score, top, 12),
                            Style::default().fg(Color::Green),
                        ),
                        Span::raw(format!(" {}", format_score(scored.score))),
                    ]))
                })
                .collect();
            if result.letters.len() > helper.letters_to_show {
                items.push(
                    ListItem::new(format!(
                        "… {} more (Ctrl-L)",
                        result.letters.len() - helper.letters_to_show
                    ))
                    .style(Style::default().fg(Color::DarkGray)),
                );
            }
            items
        }
        _ => Vec::new(),
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Suggested letters ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Magenta)),
    );
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Percentage(55),
        ])
        .split(area);

    let mode_text = match app.screen {
        Screen::Game => "Mode: Game",
        Screen::Helper => "Mode: Helper",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.screen {
        Screen::Game => "Esc: Quit | Tab: Helper | Ctrl-N: New Game | ?: Hint",
        Screen::Helper => "Esc: Quit | Tab: Game | Enter: Switch Field | Ctrl-W/L: More | Ctrl-G: From Game",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Lexicon;
    use crate::game::GameConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn game_screen_shows_masked_word() {
        let lexicon = Lexicon::from_pairs([("test", 1.0)]).unwrap();
        let app = App::new(&lexicon, GameConfig::default(), StdRng::seed_from_u64(1)).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains("_ _ _ _"));
        assert!(text.contains("Mode: Game"));
    }

    #[test]
    fn helper_screen_lists_candidates() {
        let lexicon = Lexicon::from_pairs([("cat", 10.0), ("car", 8.0), ("cow", 1.0), ("test", 1.0)]).unwrap();
        let mut app = App::new(&lexicon, GameConfig::default(), StdRng::seed_from_u64(1)).unwrap();
        app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        for c in "ca_".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains("CAT"));
        assert!(text.contains("CAR"));
        assert!(!text.contains("COW"));
        assert!(text.contains("Mode: Helper"));
    }
}
