//! Console front end.
//!
//! A menu-driven terminal UI over a single [`DecisionSession`]:
//! framework overview, stakes classification, the five-step walkthrough
//! with advice and report export, and the case study builder.
//!
//! [`DecisionSession`]: crate::domain::session::DecisionSession

mod app;
mod input;
mod render;
mod screen;

pub use app::{ConsoleApp, ConsoleHandlers};
pub use input::{ConsoleError, EditorInput, LineSource, ScriptedInput};
pub use screen::Screen;
