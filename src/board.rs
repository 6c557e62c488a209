use std::fmt::{Debug, Display, Formatter};
use std::iter::Map;
use std::ops::{Deref, DerefMut, Range};
use std::str::FromStr;

use internal_iterator::{InternalIterator, IteratorExt};
use rand::Rng;
use thiserror::Error;

use crate::wdl::OutcomeWDL;

/// One of the two players. `A` always moves first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Player {
    A,
    B,
}

/// The content of a single cell, `None` is an empty cell.
pub type Occupant = Option<Player>;

/// The absolute outcome for a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    WonBy(Player),
    Draw,
}

/// A cell on the board, stored as its row-major index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coord(u8);

/// Error returned when a move is requested on a board that is already done.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
#[error("the board is done")]
pub struct BoardDone;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum PlayError {
    #[error("the board is done")]
    BoardDone,
    #[error("move {0} is not available, the cell is already taken")]
    UnavailableMove(Coord),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
#[error("coordinate ({row}, {col}) is outside of the 3x3 board")]
pub struct CoordOutOfRange {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ParseBoardError {
    #[error("expected 9 cells, got {0}")]
    InvalidLength(usize),
    #[error("invalid cell character {0:?}")]
    InvalidCell(char),
    #[error("invalid next player {0:?}")]
    InvalidPlayer(String),
    #[error("unexpected trailing input {0:?}")]
    TrailingInput(String),
}

impl From<BoardDone> for PlayError {
    fn from(_: BoardDone) -> Self {
        PlayError::BoardDone
    }
}

/// The 3x3 tic-tac-toe board: cell occupancy and the player to move.
///
/// The outcome is not cached, it is always derived from the cells.
/// This keeps [Board::simulate_move] trivially reversible.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    tiles: [Occupant; 9],
    next_player: Player,
}

const LINES: [[usize; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

impl Player {
    pub const BOTH: [Player; 2] = [Player::A, Player::B];

    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Player::A => 'x',
            Player::B => 'o',
        }
    }

    pub fn from_char(c: char) -> Option<Player> {
        match c {
            'x' | 'X' => Some(Player::A),
            'o' | 'O' => Some(Player::B),
            _ => None,
        }
    }
}

impl Outcome {
    /// View this outcome from the POV of `pov`.
    pub fn pov(self, pov: Player) -> OutcomeWDL {
        match self {
            Outcome::WonBy(player) if player == pov => OutcomeWDL::Win,
            Outcome::WonBy(_) => OutcomeWDL::Loss,
            Outcome::Draw => OutcomeWDL::Draw,
        }
    }
}

impl Coord {
    pub const CENTER: Coord = Coord(4);
    pub const CORNER: Coord = Coord(0);

    /// Panics if `row` or `col` is not in `0..3`.
    pub fn new(row: usize, col: usize) -> Self {
        match Coord::try_new(row, col) {
            Ok(coord) => coord,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_new(row: usize, col: usize) -> Result<Self, CoordOutOfRange> {
        if row < 3 && col < 3 {
            Ok(Coord((row * 3 + col) as u8))
        } else {
            Err(CoordOutOfRange { row, col })
        }
    }

    pub fn from_index(i: usize) -> Self {
        assert!(i < 9, "coord index {} out of range", i);
        Coord(i as u8)
    }

    /// All coords in row-major order.
    pub fn all() -> Map<Range<usize>, fn(usize) -> Coord> {
        let f: fn(usize) -> Coord = Coord::from_index;
        (0..9).map(f)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> usize {
        self.index() / 3
    }

    pub fn col(self) -> usize {
        self.index() % 3
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            tiles: [None; 9],
            next_player: Player::A,
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    /// Build a board from explicit rows. No consistency checks are performed,
    /// the mark counts do not have to match `next_player`.
    pub fn from_rows(rows: [[Occupant; 3]; 3], next_player: Player) -> Self {
        let mut tiles = [None; 9];
        for (row, cells) in rows.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                tiles[Coord::new(row, col).index()] = cell;
            }
        }
        Board { tiles, next_player }
    }

    pub fn cell(&self, coord: Coord) -> Occupant {
        self.tiles[coord.index()]
    }

    pub fn current_player(&self) -> Player {
        self.next_player
    }

    pub fn is_available_move(&self, coord: Coord) -> bool {
        self.cell(coord).is_none()
    }

    /// Place the mark of the current player on `coord` and pass the turn.
    pub fn apply_move(&mut self, coord: Coord) -> Result<(), PlayError> {
        if self.is_over() {
            return Err(PlayError::BoardDone);
        }
        if !self.is_available_move(coord) {
            return Err(PlayError::UnavailableMove(coord));
        }

        self.tiles[coord.index()] = Some(self.next_player);
        self.next_player = self.next_player.other();
        Ok(())
    }

    /// Overwrite a single cell without touching the player to move.
    /// This is a scratch primitive for search, set the cell back to `None` to undo it.
    /// Prefer [Board::probe], which undoes itself.
    pub fn simulate_move(&mut self, coord: Coord, occupant: Occupant) {
        self.tiles[coord.index()] = occupant;
    }

    /// Temporarily place `player` on the empty cell `coord`.
    /// The whole board, including anything changed through the guard, is restored when the guard is dropped.
    pub fn probe(&mut self, coord: Coord, player: Player) -> Probe<'_> {
        assert!(
            self.is_available_move(coord),
            "cannot probe occupied cell {} on board\n{}",
            coord,
            self
        );
        let prior = self.clone();
        self.simulate_move(coord, Some(player));
        Probe { board: self, prior }
    }

    /// Whether `player` occupies a full row, column or diagonal.
    pub fn has_won(&self, player: Player) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.tiles[i] == Some(player)))
    }

    pub fn is_full(&self) -> bool {
        self.tiles.iter().all(|tile| tile.is_some())
    }

    /// The outcome of this board, `None` if the game is undecided.
    /// A win by [Player::A] takes precedence if both players have a line.
    pub fn result(&self) -> Option<Outcome> {
        if self.has_won(Player::A) {
            Some(Outcome::WonBy(Player::A))
        } else if self.has_won(Player::B) {
            Some(Outcome::WonBy(Player::B))
        } else if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    /// The empty cells in row-major order. Works on done boards too.
    pub fn moves(&self) -> impl InternalIterator<Item = Coord> + '_ {
        Coord::all()
            .filter(move |&coord| self.is_available_move(coord))
            .into_internal()
    }

    pub fn legal_moves(&self) -> Vec<Coord> {
        self.moves().collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_some()).count()
    }

    /// Pick one of the empty cells uniformly at random.
    pub fn random_legal_move(&self, rng: &mut impl Rng) -> Result<Coord, BoardDone> {
        if self.is_over() {
            return Err(BoardDone);
        }

        let count = self.moves().count();
        let index = rng.gen_range(0..count);
        // SAFETY: unwrap is safe because the index is less than the count.
        Ok(self.moves().nth(index).unwrap())
    }

    /// Return the first move in row-major order that makes `player` win immediately.
    pub fn find_winning_move(&mut self, player: Player) -> Option<Coord> {
        for mv in self.legal_moves() {
            if self.probe(mv, player).has_won(player) {
                return Some(mv);
            }
        }
        None
    }
}

/// Guard returned by [Board::probe], derefs to the probed board.
#[derive(Debug)]
pub struct Probe<'a> {
    board: &'a mut Board,
    prior: Board,
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Probe<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        *self.board = self.prior.clone();
    }
}

fn tile_to_char(tile: Occupant) -> char {
    tile.map_or('.', Player::to_char)
}

impl Debug for Coord {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Coord({}, {})", self.row(), self.col())
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let cells: String = Coord::all()
            .map(|coord| {
                let c = tile_to_char(self.cell(coord));
                if coord.col() == 2 && coord.row() != 2 {
                    format!("{}/", c)
                } else {
                    c.to_string()
                }
            })
            .collect();
        write!(f, "Board(\"{} {}\")", cells, self.next_player.to_char())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "+---+")?;
        for row in 0..3 {
            write!(f, "|")?;
            for col in 0..3 {
                write!(f, "{}", tile_to_char(self.cell(Coord::new(row, col))))?;
            }
            write!(f, "|")?;

            if row == 1 {
                write!(f, "   {}", self.next_player.to_char())?;
            }

            writeln!(f)?;
        }

        writeln!(f, "+---+")?;
        Ok(())
    }
}

/// Parses boards like `"xx./oo./... x"`: nine cells (`x`, `o` or `.`, slashes are ignored),
/// optionally followed by the player to move. When the player is missing it is derived from the mark counts.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let cells = parts.next().unwrap_or("");

        let mut tiles = [None; 9];
        let mut count = 0;
        for c in cells.chars().filter(|&c| c != '/') {
            let tile = match c {
                '.' => None,
                _ => Some(Player::from_char(c).ok_or(ParseBoardError::InvalidCell(c))?),
            };
            if count < 9 {
                tiles[count] = tile;
            }
            count += 1;
        }
        if count != 9 {
            return Err(ParseBoardError::InvalidLength(count));
        }

        let next_player = match parts.next() {
            Some(p) => {
                let mut chars = p.chars();
                match (chars.next().and_then(Player::from_char), chars.next()) {
                    (Some(player), None) => player,
                    _ => return Err(ParseBoardError::InvalidPlayer(p.to_owned())),
                }
            }
            None => {
                let count_a = tiles.iter().filter(|&&t| t == Some(Player::A)).count();
                let count_b = tiles.iter().filter(|&&t| t == Some(Player::B)).count();
                if count_a > count_b {
                    Player::B
                } else {
                    Player::A
                }
            }
        };

        if let Some(rest) = parts.next() {
            return Err(ParseBoardError::TrailingInput(rest.to_owned()));
        }

        Ok(Board { tiles, next_player })
    }
}
