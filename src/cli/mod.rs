//! CLI library modules for the biluo binary.
//!
//! This module provides reusable CLI functionality that can be tested
//! independently of the binary.

pub mod commands;
pub mod output;
pub mod parser;
