#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod question_bank;
pub mod rng;
pub mod time;

pub use catalog::{Catalog, Subject, filter_topics};
pub use error::Error;
pub use question_bank::{QuestionBank, QuestionSource};
pub use rng::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use time::Clock;
