#![warn(clippy::all, rust_2018_idioms)]

pub mod event;
pub mod frontend;
pub mod json;
pub mod string_error;
