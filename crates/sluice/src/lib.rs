//! Sluice - structural analysis for directed pipeline graphs.
//!
//! This crate provides both a CLI application and a library for answering
//! one question about a user-assembled pipeline: how many nodes and edges
//! does it have, and do the edges form a directed acyclic graph?

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod analysis;
pub mod domain;
pub mod error;

// Public CLI module (needed by binary)
pub mod cli;

// Output formatting for CLI results
pub mod output;
