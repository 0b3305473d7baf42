//! Console output: message formatting and the terminal renderer

pub mod console;
pub mod renderer;
