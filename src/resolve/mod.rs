//! Entity resolution — compose extractors into Team and Player records.

pub mod crossref;
pub mod player;
pub mod roster;
pub mod team;
