//! Core library for the tribunal hallucination-judge harness.
//!
//! A (document, summary) pair is fed to one or more orchestration
//! strategies. Each strategy drives LLM roles (advocates, critics, judges)
//! over the summary or its decomposed units and reduces their free-text
//! output to a single binary verdict via marker-token matching.

pub mod config;
pub mod debate;
pub mod decompose;
pub mod errors;
pub mod eval;
pub mod model;
pub mod prompt;
pub mod providers;
pub mod report;
pub mod strategy;
pub mod verdict;
