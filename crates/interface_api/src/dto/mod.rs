//! Request and response bodies

pub mod matches;
