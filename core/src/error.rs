use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("A category must hold exactly 5 clues, got {got}")]
    WrongClueCount { got: usize },
    #[error("A board must hold exactly 6 categories, got {got}")]
    WrongCategoryCount { got: usize },
    #[error("Cannot sample {wanted} items from a pool of {got}")]
    NotEnoughItems { wanted: usize, got: usize },
}

pub type Result<T> = core::result::Result<T, GameError>;
