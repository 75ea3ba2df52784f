#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use clue::*;
pub use error::*;
pub use sample::*;
pub use text::*;
pub use types::*;

mod clue;
mod error;
mod sample;
mod text;
mod types;

/// Columns on a full board, one per category.
pub const CATEGORY_COUNT: usize = 6;

/// Rows on a full board, one clue per category per row.
pub const CLUES_PER_CATEGORY: usize = 5;

/// One column of the board: a titled, fixed-size run of clues.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: String, clues: Vec<Clue>) -> Result<Self> {
        if clues.len() != CLUES_PER_CATEGORY {
            return Err(GameError::WrongClueCount { got: clues.len() });
        }
        Ok(Self { title, clues })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    pub fn clue_at(&self, row: Row) -> Option<&Clue> {
        self.clues.get(row as usize)
    }

    fn clue_at_mut(&mut self, row: Row) -> Option<&mut Clue> {
        self.clues.get_mut(row as usize)
    }
}

/// The whole board. Always exactly [`CATEGORY_COUNT`] categories of
/// [`CLUES_PER_CATEGORY`] clues each, or it does not exist at all.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        if categories.len() != CATEGORY_COUNT {
            return Err(GameError::WrongCategoryCount {
                got: categories.len(),
            });
        }
        Ok(Self { categories })
    }

    /// `(columns, rows)` of the cell grid.
    pub const fn size(&self) -> (Col, Row) {
        (CATEGORY_COUNT as Col, CLUES_PER_CATEGORY as Row)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn clue_at(&self, (col, row): CellCoord) -> Option<&Clue> {
        self.categories
            .get(col as usize)
            .and_then(|category| category.clue_at(row))
    }

    /// Advances the reveal machine of the clue at `coords`. Clicks outside
    /// the grid or on a terminal cell are ignored.
    pub fn reveal_at(&mut self, coords: CellCoord) -> RevealOutcome {
        let (col, row) = coords;
        let Some(clue) = self
            .categories
            .get_mut(col as usize)
            .and_then(|category| category.clue_at_mut(row))
        else {
            log::trace!("ignored click outside the board: {:?}", coords);
            return RevealOutcome::NoChange;
        };
        clue.reveal()
    }
}
