/// Column index, addressing one category on the board.
pub type Col = u8;

/// Row index, addressing one clue within a category.
pub type Row = u8;

/// Two-dimensional cell coordinates `(col, row)`.
pub type CellCoord = (Col, Row);
