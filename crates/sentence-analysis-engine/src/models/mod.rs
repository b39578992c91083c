pub mod passage;
pub mod sentence;
pub mod token;

pub use passage::{Passage, PassageSource, SentenceSource};
pub use sentence::Sentence;
pub use token::{Background, ClauseColor, Ink, NoteColor, Token, TokenKind};
