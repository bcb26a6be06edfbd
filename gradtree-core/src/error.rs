use thiserror::Error;

/// Custom error type for the gradtree framework.
///
/// Every fallible operation in the core resolves to one of these variants.
/// All other operations are total: name lookups miss with an inert sentinel
/// rather than an error (see [`crate::nn::Attr`]).
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum GradTreeError {
    #[error("Domain error in {operation}: input {input} is outside the valid domain")]
    DomainError { operation: String, input: f64 },

    #[error("forward is not implemented for module '{module}'")]
    Unimplemented { module: String },
}
