//! Board representation for 4x4 tic-tac-toe

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (4x4)
pub const BOARD_SIZE: usize = 4;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 16

/// The two sides that can place a mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Plays `O` and always moves first
    Human,
    /// Plays `X`
    Computer,
}

impl Player {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Display symbol
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Player::Human => 'O',
            Player::Computer => 'X',
        }
    }
}

/// Contents of one grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Human,
    Computer,
}

impl Cell {
    /// Owner of the cell, `None` when empty
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some(Player::Human),
            Cell::Computer => Some(Player::Computer),
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        self.player().map_or('.', Player::symbol)
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Human => Cell::Human,
            Player::Computer => Cell::Computer,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Checked constructor for coordinates coming from outside the core
    #[inline]
    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    /// On the main diagonal (0,0)-(3,3)
    #[inline]
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.col
    }

    /// On the anti-diagonal (0,3)-(3,0)
    #[inline]
    pub fn on_anti_diagonal(self) -> bool {
        self.row as usize + self.col as usize == BOARD_SIZE - 1
    }

    /// Every cell in row-major order
    pub fn all() -> impl Iterator<Item = Move> {
        (0..TOTAL_CELLS).map(Move::from_index)
    }
}

impl PartialOrd for Move {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Move {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
