use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::text::strip_markup_wrapper;

/// Player-visible state of a single clue cell.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    /// `Answer` accepts no further clicks.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Answer)
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    ShowQuestion,
    ShowAnswer,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            ShowQuestion => true,
            ShowAnswer => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    reveal: RevealState,
}

impl Clue {
    /// Builds a hidden clue, unwrapping an `<i>…</i>` pair around the answer
    /// when the source carries one.
    pub fn new(question: String, answer: String) -> Self {
        let stripped = strip_markup_wrapper(&answer).map(String::from);
        Self {
            question,
            answer: stripped.unwrap_or(answer),
            reveal: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn state(&self) -> RevealState {
        self.reveal
    }

    /// One-directional click machine: hidden shows the question, the question
    /// shows the answer, the answer stays put.
    pub fn reveal(&mut self) -> RevealOutcome {
        use RevealState::*;
        match self.reveal {
            Hidden => {
                self.reveal = Question;
                RevealOutcome::ShowQuestion
            }
            Question => {
                self.reveal = Answer;
                RevealOutcome::ShowAnswer
            }
            Answer => RevealOutcome::NoChange,
        }
    }
}
