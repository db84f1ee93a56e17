//! Interactive text front end and command loop.
//!
//! Reads one command or move per line, applies moves to the current game, and
//! prints the board, the side to move, and the game status after each change.

use std::io::{self, BufRead, Write};

use log::info;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::perft::perft;
use crate::utils::algebraic::parse_move_pair;
use crate::utils::render_game_state::{render_game_state, RenderStyle};

const HELP_TEXT: &str = "\
moves are entered as `e2 e4`, `e2e4`, or `e2-e4`
commands:
  board       show the board
  moves       list legal moves for the side to move
  counts      show remaining pieces per side
  fen         print the current position string
  perft <n>   count positions reachable in n plies
  new         start a new game
  help        show this text
  quit        leave";

const MAX_CONSOLE_PERFT_DEPTH: u8 = 5;

pub fn run_stdio_loop(game_state: GameState, style: RenderStyle) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut console = ConsoleState::new(game_state, style);

    console.print_position(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = console.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct ConsoleState {
    game_state: GameState,
    style: RenderStyle,
}

impl ConsoleState {
    pub fn new(game_state: GameState, style: RenderStyle) -> Self {
        Self { game_state, style }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Handle one input line. Returns `true` when the user asked to quit.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "quit" | "exit" => return Ok(true),
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "board" => self.print_position(out)?,
            "fen" => writeln!(out, "{}", self.game_state.get_fen())?,
            "counts" => self.print_counts(out)?,
            "moves" => self.print_moves(out)?,
            "new" => {
                info!("starting a new game");
                self.game_state = GameState::new_game();
                self.print_position(out)?;
            }
            "perft" => self.handle_perft(parts.next(), out)?,
            _ => self.handle_move(trimmed, out)?,
        }

        Ok(false)
    }

    fn handle_move(&mut self, text: &str, out: &mut impl Write) -> io::Result<()> {
        let (from, to) = match parse_move_pair(text) {
            Ok(pair) => pair,
            Err(err) => {
                writeln!(out, "unrecognized input: {err} (type `help`)")?;
                return Ok(());
            }
        };

        match self.game_state.apply_move_squares(from, to) {
            Ok(outcome) => {
                if let Some(captured) = outcome.captured {
                    writeln!(out, "{} takes {} on {}", outcome.piece, captured.kind, to)?;
                }
                self.print_position(out)?;
            }
            Err(rejection) => writeln!(out, "illegal move: {rejection}")?,
        }

        Ok(())
    }

    fn handle_perft(&self, depth: Option<&str>, out: &mut impl Write) -> io::Result<()> {
        let depth = match depth.map(str::parse::<u8>) {
            Some(Ok(depth)) if depth <= MAX_CONSOLE_PERFT_DEPTH => depth,
            _ => {
                writeln!(out, "usage: perft <0-{MAX_CONSOLE_PERFT_DEPTH}>")?;
                return Ok(());
            }
        };

        match perft(&self.game_state, depth) {
            Ok(counts) => writeln!(
                out,
                "perft {depth}: nodes {} captures {} wins {}",
                counts.nodes, counts.captures, counts.wins
            )?,
            Err(err) => writeln!(out, "perft failed: {err}")?,
        }

        Ok(())
    }

    fn print_position(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", render_game_state(&self.game_state, self.style))?;
        match self.game_state.status().winner() {
            Some(winner) => writeln!(out, "game over: {winner} wins"),
            None => writeln!(out, "{} to move", self.game_state.turn()),
        }
    }

    fn print_counts(&self, out: &mut impl Write) -> io::Result<()> {
        for color in [Color::White, Color::Black] {
            let summary: Vec<String> = self
                .game_state
                .piece_counts(color)
                .iter()
                .map(|(kind, count)| format!("{kind} {count}"))
                .collect();
            writeln!(out, "{color}: {}", summary.join(", "))?;
        }
        Ok(())
    }

    fn print_moves(&self, out: &mut impl Write) -> io::Result<()> {
        let moves: Vec<String> = self
            .game_state
            .legal_moves()
            .into_iter()
            .map(|(from, to)| format!("{from}{to}"))
            .collect();
        if moves.is_empty() {
            writeln!(out, "no legal moves")
        } else {
            writeln!(out, "{} legal moves: {}", moves.len(), moves.join(" "))
        }
    }
}
