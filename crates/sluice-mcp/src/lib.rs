//! MCP server for sluice pipeline graph analysis.
//!
//! This crate provides an MCP (Model Context Protocol) server that exposes
//! the sluice graph analysis to AI assistants and other MCP clients.
//!
//! # Architecture
//!
//! The server uses the `rmcp` crate for MCP protocol handling and directly
//! wraps the pure `analysis` module from the sluice crate. It holds no
//! state: every call builds and discards its own traversal structures, so
//! concurrent tool invocations need no coordination.
//!
//! # Tools
//!
//! - `ping` - Liveness probe returning a fixed acknowledgment payload
//! - `analyze_pipeline` - Count nodes and edges of a submitted pipeline
//!   and report whether it forms a directed acyclic graph

pub mod error;
pub mod models;
pub mod server;
pub mod tools;

pub use error::{Error, Result};
pub use server::SluiceMcpServer;
