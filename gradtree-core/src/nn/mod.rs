// src/nn/mod.rs
// Component tree: the Module registry and the Parameter wrapper.

pub mod module; // struct Module + trait Forward
pub mod parameter; // struct Parameter + trait GradValue

// Re-export common items
pub use module::{Attr, Forward, Module};
pub use parameter::{GradValue, Parameter};
