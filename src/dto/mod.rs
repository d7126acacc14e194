//! Display-ready structures handed to templates.

pub mod search;
