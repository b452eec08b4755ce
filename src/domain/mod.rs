//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machines)
//! - `classification` - Stakes classification of a decision
//! - `walkthrough` - The five AIMED steps and the eight walkthrough prompts
//! - `advice` - One-shot gate around the AI advice request
//! - `session` - The interactive session that owns all of the above
//! - `case_study` - Retrospective case study write-ups

pub mod advice;
pub mod case_study;
pub mod classification;
pub mod foundation;
pub mod session;
pub mod walkthrough;
