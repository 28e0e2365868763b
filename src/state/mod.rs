//! State management for the form screen.

pub mod form;

pub use form::{reduce, Effect, FormEvent, FormSnapshot, Phase, Rejection, Transition};
