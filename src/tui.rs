//! TUI (Terminal User Interface) module for Wordle Helper
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! The UI follows these state transitions:
//! - `EnteringGuess` → `MarkingFeedback` → `ConfirmingFeedback` → back to `EnteringGuess`
//! - Terminal state: `GameOver` (every row used), left with `N` or `ESC`

use crate::board::{BoardRow, MAX_GUESSES};
use crate::error::HelperError;
use crate::feedback::{LetterState, WORD_LENGTH};
use crate::game_state::{GameInterface, UserAction};
use crate::session::candidate_summary;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const CANDIDATE_PAGE: usize = 10;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const TYPING_COLORS: (Color, Color) = (Color::DarkGray, Color::White);

fn state_colors(state: LetterState) -> (Color, Color) {
    match state {
        LetterState::Correct => (Color::Green, Color::Black),
        LetterState::Present => (Color::Yellow, Color::Black),
        LetterState::Absent => (Color::Gray, Color::White),
    }
}

/// New first-visible index for a scroll key, or `None` for any other key.
fn scroll_candidates(offset: usize, code: KeyCode, len: usize) -> Option<usize> {
    let last = len.saturating_sub(1);
    let next = match code {
        KeyCode::Up => offset.saturating_sub(1),
        KeyCode::Down => offset + 1,
        KeyCode::PageUp => offset.saturating_sub(CANDIDATE_PAGE),
        KeyCode::PageDown => offset + CANDIDATE_PAGE,
        KeyCode::Home => 0,
        KeyCode::End => last,
        _ => return None,
    };
    Some(next.min(last))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringGuess,
    MarkingFeedback { marking_index: usize },
    ConfirmingFeedback,
    GameOver,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    rows: &'a [BoardRow],
    current: &'a BoardRow,
    state: TuiState,
    candidates: &'a [String],
    candidate_scroll: usize,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Full-screen interface: a board of tiles above the candidate list.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    rows: Vec<BoardRow>,
    current: BoardRow,
    state: TuiState,
    candidates: Vec<String>,
    candidate_scroll: usize,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            rows: Vec::new(),
            current: BoardRow::new(),
            state: TuiState::EnteringGuess,
            candidates: Vec::new(),
            candidate_scroll: 0,
            message: String::new(),
            error_message: String::new(),
            status: "Ready - Enter your first 5-letter guess".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            rows: &self.rows,
            current: &self.current,
            state: self.state,
            candidates: &self.candidates,
            candidate_scroll: self.candidate_scroll,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Length(14), // Board
                Constraint::Min(8),     // Candidates
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx);
        Self::render_info(f, chunks[2], ctx);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("WORDLE HELPER")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default().title("Guesses").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        for (index, row) in ctx.rows.iter().enumerate() {
            Self::render_row(f, inner, index, row, None, false);
        }

        if ctx.rows.len() < MAX_GUESSES && ctx.state != TuiState::GameOver {
            let marking = match ctx.state {
                TuiState::MarkingFeedback { marking_index } => Some(marking_index),
                _ => None,
            };
            let typing = ctx.state == TuiState::EnteringGuess;
            Self::render_row(f, inner, ctx.rows.len(), ctx.current, marking, typing);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_row(
        f: &mut Frame,
        area: Rect,
        row_index: usize,
        row: &BoardRow,
        marking: Option<usize>,
        typing: bool,
    ) {
        let y = area.y + (row_index as u16 * ROW_SPACING);
        if y >= area.y + area.height {
            return;
        }

        let mut spans = vec![Span::raw("  ")];
        for (i, tile) in row.tiles().iter().enumerate() {
            let (bg, fg) = if typing || tile.letter.is_none() {
                TYPING_COLORS
            } else {
                state_colors(tile.state)
            };
            let mut style = Style::default().fg(fg).bg(bg);
            if marking == Some(i) {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            }
            let letter = tile.letter.unwrap_or(' ');
            spans.push(Span::styled(format!(" {letter} "), style));
            spans.push(Span::raw(" "));
        }

        if let Some(index) = marking {
            spans.push(Span::raw(format!(" <- Marking letter {} (G/Y/X)", index + 1)));
        }

        let line = Line::from(spans);
        f.render_widget(
            Paragraph::new(line),
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = vec![Line::from(vec![Span::styled(
            candidate_summary(ctx.candidates.len()),
            INFO_STYLE,
        )])];
        if !ctx.message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.message, MESSAGE_STYLE)]));
        }
        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.error_message, ERROR_STYLE)]));
        }
        lines.push(Line::from(""));
        for word in ctx.candidates.iter().skip(ctx.candidate_scroll) {
            lines.push(Line::from(format!("  {word}")));
        }

        let title = if ctx.candidate_scroll > 0 {
            format!("Candidates (from #{})", ctx.candidate_scroll + 1)
        } else {
            "Candidates".to_string()
        };
        let paragraph = Paragraph::new(lines)
            .block(Block::default().title(title).borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringGuess => {
                "Type your 5-letter guess | ENTER: Submit | UP/DOWN/PGUP/PGDN: Scroll | ESC: Quit"
            }
            TuiState::MarkingFeedback { .. } => {
                "G: Green | Y: Yellow | X: Gray | SPACE: Cycle | LEFT/RIGHT: Move | BACKSPACE: Go back"
            }
            TuiState::ConfirmingFeedback => "ENTER: Confirm feedback | BACKSPACE: Go back and edit",
            TuiState::GameOver => "N: New Game | UP/DOWN/PGUP/PGDN: Scroll | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    /// Waits briefly for one key press and routes it by state.
    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };
        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != event::KeyEventKind::Press || Self::has_modifier_keys(&key) {
            debug_log!("handle_input() - Ignoring key event: {:?}", key);
            return Ok(None);
        }

        debug_log!("handle_input() - Key {:?} in state {:?}", key.code, self.state);
        if let Some(offset) =
            scroll_candidates(self.candidate_scroll, key.code, self.candidates.len())
        {
            self.candidate_scroll = offset;
            return Ok(None);
        }
        let action = match self.state {
            TuiState::EnteringGuess => self.handle_guess_input(key),
            TuiState::MarkingFeedback { marking_index } => {
                self.handle_feedback_input(key, marking_index)
            }
            TuiState::ConfirmingFeedback => self.handle_confirming_feedback_input(key),
            TuiState::GameOver => Self::handle_game_over_input(key),
        };
        Ok(action)
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.current.push_letter(c);
            }
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            KeyCode::Backspace => {
                self.current.pop_letter();
            }
            KeyCode::Enter if self.current.is_complete() => {
                let guess = self.current.word();
                info_log!("handle_guess_input() - Guess entered: '{}'", guess);
                return Some(UserAction::Guess(guess));
            }
            KeyCode::Enter => {
                self.error_message = format!("Guess must be exactly {WORD_LENGTH} letters!");
            }
            KeyCode::Esc => return Some(UserAction::Exit),
            _ => {}
        }
        None
    }

    fn handle_feedback_input(&mut self, key: KeyEvent, marking_index: usize) -> Option<UserAction> {
        let mark = |this: &mut Self, state: LetterState| {
            this.current.set_state(marking_index, state);
            this.advance_feedback_marking(marking_index);
        };

        match key.code {
            KeyCode::Esc => return Some(UserAction::Exit),
            KeyCode::Char('g' | 'G') => mark(self, LetterState::Correct),
            KeyCode::Char('y' | 'Y') => mark(self, LetterState::Present),
            KeyCode::Char('x' | 'X') => mark(self, LetterState::Absent),
            KeyCode::Char(' ') => {
                self.current.cycle_state(marking_index);
            }
            KeyCode::Right | KeyCode::Tab => self.advance_feedback_marking(marking_index),
            KeyCode::Left | KeyCode::Backspace if marking_index > 0 => {
                self.state = TuiState::MarkingFeedback {
                    marking_index: marking_index - 1,
                };
            }
            KeyCode::Char(c) => {
                self.error_message = format!(
                    "Invalid feedback! Use G (green), Y (yellow), or X (gray). ('{}' is not valid)",
                    c.to_ascii_uppercase()
                );
                return None;
            }
            _ => {}
        }
        self.error_message.clear();
        None
    }

    fn handle_confirming_feedback_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Esc => Some(UserAction::Exit),
            KeyCode::Enter => {
                let row = std::mem::take(&mut self.current);
                self.rows.push(row.clone());
                self.state = TuiState::EnteringGuess;
                info_log!("handle_confirming_feedback_input() - Feedback confirmed");
                Some(UserAction::Feedback(row))
            }
            KeyCode::Backspace | KeyCode::Left => {
                self.state = TuiState::MarkingFeedback {
                    marking_index: WORD_LENGTH - 1,
                };
                None
            }
            _ => None,
        }
    }

    fn handle_game_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(event::KeyModifiers::ALT)
            || key.modifiers.contains(event::KeyModifiers::CONTROL)
    }

    fn advance_feedback_marking(&mut self, current_index: usize) {
        if current_index < WORD_LENGTH - 1 {
            self.state = TuiState::MarkingFeedback {
                marking_index: current_index + 1,
            };
        } else {
            self.state = TuiState::ConfirmingFeedback;
            self.status = "Press ENTER to confirm feedback".to_string();
        }
    }

    /// Draws and handles keys until one produces an action.
    fn run_until_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("run_until_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match self.handle_input() {
                Ok(Some(action)) => return Some(action),
                Ok(None) => {}
                Err(e) => {
                    info_log!("run_until_action() - Input error: {}", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn read_guess(&mut self) -> Option<UserAction> {
        if self.state != TuiState::GameOver {
            self.state = TuiState::EnteringGuess;
            self.status = "Waiting for guess...".to_string();
        }
        self.run_until_action()
    }

    fn read_feedback(&mut self, guess: &str) -> Option<UserAction> {
        if self.current.word() != guess {
            self.current = BoardRow::from_guess(guess);
        }
        self.state = TuiState::MarkingFeedback { marking_index: 0 };
        self.error_message.clear();
        self.status = format!("Guess entered: {guess} - Now mark feedback");
        self.run_until_action()
    }

    fn display_candidates(&mut self, candidates: &[String]) {
        self.candidates = candidates.to_vec();
        self.candidate_scroll = 0;
        self.status = candidate_summary(candidates.len());
        self.draw_or_log();
    }

    fn display_board_full(&mut self, remaining: usize) {
        self.state = TuiState::GameOver;
        self.message = format!("All rows used - {}", candidate_summary(remaining));
        self.status = "Board full - N for a new game".to_string();
        self.draw_or_log();
    }

    fn display_error(&mut self, error: &HelperError) {
        self.error_message = error.to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }

    fn display_new_game_message(&mut self, word_count: usize) {
        self.rows.clear();
        self.current = BoardRow::new();
        self.state = TuiState::EnteringGuess;
        self.message = format!("New game started. Loaded {word_count} words.");
        self.error_message.clear();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
