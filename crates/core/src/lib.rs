//! Quick Suggest Core Library
//!
//! This crate provides the core functionality for quick-suggest, a tool that
//! asks a local text-generation backend for a numbered menu of shell commands
//! matching a natural-language task, then executes the operator's pick with
//! live output.
//!
//! # Key Features
//!
//! - **Streaming Consumption**: Decode the backend's newline-delimited frame
//!   stream incrementally, echoing text as it arrives
//! - **Command Menu Parsing**: Extract the numbered command entries out of the
//!   free-form response text
//! - **Live Execution**: Run the chosen command under a shell while forwarding
//!   both of its output streams in real time
//! - **Configuration Management**: Endpoint, model and shell resolution from
//!   flags, a YAML config file and the environment
//! - **Error Handling**: Comprehensive error types for all failure modes

pub mod command_table;
pub mod config;
pub mod context;
pub mod error;
pub mod execution;
pub mod generation;
pub mod prompt;
