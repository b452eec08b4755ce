//! AIMED walkthrough - framework steps, prompts and collected answers.

mod answers;
mod field;
mod framework;

pub use answers::WalkthroughAnswers;
pub use field::WalkthroughField;
pub use framework::{FrameworkStep, ANTIFRAGILITY_PRINCIPLES};
