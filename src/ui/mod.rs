//! Terminal output for the command line front end.
//!
//! - [`display`]: listing and line-ending reports, error lines

pub mod display;
