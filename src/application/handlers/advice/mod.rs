//! Advice handlers.

mod request_advice;

pub use request_advice::RequestAdviceHandler;
