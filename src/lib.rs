//! Terminal front end for the LinkedIn job bot backend.
//!
//! The binary drives [`app::App`] over a crossterm terminal; integration
//! tests drive the same `App` with [`adapters::MockHttpClient`].

pub mod adapters;
pub mod app;
pub mod backend;
pub mod cli;
pub mod error;
pub mod health_check;
pub mod input;
pub mod models;
pub mod prelude;
pub mod startup;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod widgets;
