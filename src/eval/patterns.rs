//! Line weights for cell scoring

/// Weight applied per own mark already on a line through the cell
pub struct LineWeight;

impl LineWeight {
    /// Marks in the cell's row
    pub const ROW: i32 = 2;
    /// Marks in the cell's column
    pub const COLUMN: i32 = 2;
    /// Marks on the better of the two long diagonals, only for diagonal cells
    pub const DIAGONAL: i32 = 3;
}
