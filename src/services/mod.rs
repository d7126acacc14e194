//! Page-assembly logic between HTTP handlers and the search controller.

pub mod search;
