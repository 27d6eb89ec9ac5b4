/// The error type for decoding a wire-format board grid.
///
/// Rule failures (illegal or out-of-range placements) are not errors; they
/// are boolean no-op returns on [`Board`](crate::Board). This type only
/// covers grids that cannot represent a board at all.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardFormatError {
    WrongDimensions { cols: usize, rows: usize },
    InvalidCellValue { col: usize, row: usize, value: i8 },
}

impl std::error::Error for BoardFormatError {}

impl std::fmt::Display for BoardFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardFormatError::WrongDimensions { cols, rows } => write!(
                f,
                "Board grid has {} columns of {} rows, expected {} columns of {} rows",
                cols,
                rows,
                crate::BOARD_WIDTH,
                crate::BOARD_HEIGHT
            ),
            BoardFormatError::InvalidCellValue { col, row, value } => write!(
                f,
                "Cell ({}, {}) holds {}, expected -1 (empty), 0 (white) or 1 (black)",
                col, row, value
            ),
        }
    }
}
