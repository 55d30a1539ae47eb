//! Pure HTML/text signal extraction.
//!
//! Nothing in this module performs I/O. Each submodule turns a raw
//! document (and optionally a parsed DOM) into candidate values for one
//! semantic field; the scorer picks winners deterministically.

pub mod candidates;
pub mod patterns;
pub mod scorer;
pub mod team_code;
pub mod text;
