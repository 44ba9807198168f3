//! ResuMate - Conversational Resume Builder
//!
//! This crate implements the turn-based conversation engine that guides
//! a user through building a structured resume, delegating phrasing and
//! content polish to an external language-model service behind a narrow
//! port.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
