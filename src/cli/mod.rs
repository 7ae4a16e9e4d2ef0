//! CLI infrastructure for the noughts engine
//!
//! This module provides the command-line interface for playing rounds
//! against the engine and analyzing positions.

pub mod commands;
