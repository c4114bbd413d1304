#![cfg(feature = "std")]

//! Plain-text rendering of boards and parsing of typed coordinates.

use std::fmt::Write;
use std::string::String;

use crate::{
    bitboard::BitBoard,
    board::Board,
    common::{Cell, Coord},
    config::BOARD_SIZE,
};

type BB = BitBoard<u128, BOARD_SIZE>;

/// Format a coordinate the way players type it, e.g. `(4, 0)` -> `A5`.
pub fn coord_to_string((r, c): Coord) -> String {
    let col = (b'A' + c as u8) as char;
    format!("{}{}", col, r + 1)
}

/// Parse `A5`-style input into `(row, col)`.
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    let input = input.trim();
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or("No column letter")?
        .to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .trim()
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok((row - 1, col))
}

fn render_grid<F: Fn(Coord) -> char>(out: &mut String, cell_char: F) {
    out.push_str("    ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    for r in 0..BOARD_SIZE {
        let _ = write!(out, " {:2} ", r + 1);
        for c in 0..BOARD_SIZE {
            let _ = write!(out, " {}", cell_char((r, c)));
        }
        out.push('\n');
    }
}

/// The player's own waters with ships shown, followed by fleet status.
pub fn render_own_board(board: &Board) -> String {
    let mut out = String::new();
    render_grid(&mut out, |coord| match board.cell(coord) {
        Ok(Cell::Hit) => 'X',
        Ok(Cell::Miss) => 'o',
        Ok(Cell::Ship) => 'S',
        _ => '.',
    });
    out.push_str("    Legend: S=Ship  X=Hit  o=Miss  .=Water\n");
    for ship in board.ships() {
        let status = if ship.is_sunk() { "SUNK" } else { "Afloat" };
        let _ = writeln!(
            out,
            "      {} ({}): {}",
            ship.ship_type().name(),
            ship.length(),
            status
        );
    }
    out
}

/// The enemy waters as far as the shooter knows them.
pub fn render_target_board(hits: &BB, misses: &BB) -> String {
    let mut out = String::new();
    render_grid(&mut out, |(r, c)| {
        if hits.get(r, c).unwrap_or(false) {
            'X'
        } else if misses.get(r, c).unwrap_or(false) {
            'o'
        } else {
            '.'
        }
    });
    out.push_str("    Legend: X=Hit  o=Miss  .=Unknown\n");
    out
}
