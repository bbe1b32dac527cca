//! London tube journey planner server.
//!
//! A web application that answers: "what is the fastest tube route
//! between these two London locations?"

pub mod domain;
pub mod geocode;
pub mod map;
pub mod planner;
pub mod tfl;
pub mod web;
