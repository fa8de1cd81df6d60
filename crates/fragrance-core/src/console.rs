//! Character-cell text surface addressed with escape-style cursor positioning.
//!
//! Supported sequences: `ESC [ row ; col H` (also `f`), `ESC [ 2 J`,
//! `ESC [ K`. Rows and columns are 1-based; missing or zero parameters mean
//! 1 and positions are clamped into the grid. Anything else after `ESC` is
//! swallowed.

use core::{fmt, str};

const ESC: char = '\x1b';
const BLANK: u8 = b' ';
const REPLACEMENT: u8 = b'?';

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ParseState {
    Text,
    Escape,
    Csi {
        params: [Option<u16>; 2],
        index: usize,
    },
}

/// `COLS`x`ROWS` grid of ASCII cells with a cursor.
#[derive(Clone, Debug)]
pub struct TextConsole<const COLS: usize, const ROWS: usize> {
    cells: [[u8; COLS]; ROWS],
    /// Zero-based; `col == COLS` means a wrap is pending.
    col: usize,
    row: usize,
    state: ParseState,
}

impl<const COLS: usize, const ROWS: usize> Default for TextConsole<COLS, ROWS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const COLS: usize, const ROWS: usize> TextConsole<COLS, ROWS> {
    pub const fn new() -> Self {
        Self {
            cells: [[BLANK; COLS]; ROWS],
            col: 0,
            row: 0,
            state: ParseState::Text,
        }
    }

    pub const fn columns(&self) -> usize {
        COLS
    }

    pub const fn rows(&self) -> usize {
        ROWS
    }

    /// Cursor as 1-based `(row, col)`.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row + 1, self.col.min(COLS - 1) + 1)
    }

    /// Blanks every cell and homes the cursor.
    pub fn clear(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(BLANK);
        }
        self.col = 0;
        self.row = 0;
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|&c| c == BLANK))
    }

    /// Character at 1-based `(col, row)`.
    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        if col == 0 || row == 0 {
            return None;
        }
        self.cells
            .get(row - 1)
            .and_then(|r| r.get(col - 1))
            .map(|&b| b as char)
    }

    /// Raw bytes of 1-based `row`.
    pub fn row_bytes(&self, row: usize) -> Option<&[u8; COLS]> {
        row.checked_sub(1).and_then(|r| self.cells.get(r))
    }

    /// Text of 1-based `row` with trailing blanks trimmed.
    pub fn row_text(&self, row: usize) -> &str {
        let Some(bytes) = self.row_bytes(row) else {
            return "";
        };
        let end = bytes
            .iter()
            .rposition(|&b| b != BLANK)
            .map_or(0, |last| last + 1);
        str::from_utf8(&bytes[..end]).unwrap_or("")
    }

    /// Interprets `text`, writing characters and applying escape sequences.
    /// Parser state carries across calls, so a sequence may be split.
    pub fn print(&mut self, text: &str) {
        for ch in text.chars() {
            self.feed(ch);
        }
    }

    fn feed(&mut self, ch: char) {
        match self.state {
            ParseState::Text => match ch {
                ESC => self.state = ParseState::Escape,
                '\n' => self.line_feed(),
                '\r' => self.col = 0,
                c if (c as u32) < 0x20 || c == '\x7f' => {}
                c => self.put(if c.is_ascii() { c as u8 } else { REPLACEMENT }),
            },
            ParseState::Escape => {
                self.state = if ch == '[' {
                    ParseState::Csi {
                        params: [None; 2],
                        index: 0,
                    }
                } else {
                    ParseState::Text
                };
            }
            ParseState::Csi {
                mut params,
                mut index,
            } => match ch {
                '0'..='9' => {
                    if let Some(slot) = params.get_mut(index) {
                        let digit = ch as u16 - '0' as u16;
                        *slot = Some(slot.unwrap_or(0).saturating_mul(10).saturating_add(digit));
                    }
                    self.state = ParseState::Csi { params, index };
                }
                ';' => {
                    index = index.saturating_add(1);
                    self.state = ParseState::Csi { params, index };
                }
                '@'..='~' => {
                    self.state = ParseState::Text;
                    self.apply_csi(ch, params);
                }
                _ => {}
            },
        }
    }

    fn apply_csi(&mut self, command: char, params: [Option<u16>; 2]) {
        match command {
            'H' | 'f' => {
                let row = params[0].unwrap_or(1).max(1) as usize;
                let col = params[1].unwrap_or(1).max(1) as usize;
                self.row = row.min(ROWS) - 1;
                self.col = col.min(COLS) - 1;
            }
            'J' if params[0] == Some(2) => self.clear(),
            'K' => {
                let start = self.col.min(COLS);
                self.cells[self.row][start..].fill(BLANK);
            }
            _ => {}
        }
    }

    fn put(&mut self, byte: u8) {
        if self.col >= COLS {
            self.line_feed();
        }
        self.cells[self.row][self.col] = byte;
        self.col += 1;
    }

    fn line_feed(&mut self) {
        self.col = 0;
        if self.row + 1 < ROWS {
            self.row += 1;
            return;
        }

        self.cells.rotate_left(1);
        self.cells[ROWS - 1].fill(BLANK);
    }
}

impl<const COLS: usize, const ROWS: usize> fmt::Write for TextConsole<COLS, ROWS> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print(s);
        Ok(())
    }
}
