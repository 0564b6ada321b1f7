use crate::{GridSize, Loc};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },
}

impl GridError {
    pub(crate) fn out_of_bounds(loc: Loc, size: GridSize) -> Self {
        Self::OutOfBounds {
            row: loc.row,
            col: loc.col,
            width: size.width,
            height: size.height,
        }
    }
}
