//! AIMED Decisions - Guided Decision Support for Construction Leaders
//!
//! This crate implements the five-step AIMED framework (Assess, Investigate,
//! Model, Execute, Debrief): stakes classification, a guided walkthrough,
//! one-shot AI advice and report export.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
