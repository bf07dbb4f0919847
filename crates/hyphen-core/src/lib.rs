//! Shared text utilities for the hyphenation crates.
//!
//! - [`character`] -- simple one-to-one case mapping and digit handling
//! - [`case`] -- case detection and restoration for hyphenated output
//! - [`utf8`] -- character-level offsets into UTF-8 strings

pub mod case;
pub mod character;
pub mod utf8;
