//! Game implementations on top of the rules engine.

pub mod court;
