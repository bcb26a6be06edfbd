// Declares the main modules of the crate
pub mod nn;
pub mod ops;

// Re-export the component-tree types so they are accessible directly via
// `gradtree_core::Module` etc.
pub use nn::{Forward, GradValue, Module, Parameter};
// Re-export traits required by public functions/structs
pub use num_traits;

pub mod error;
pub use error::GradTreeError;
