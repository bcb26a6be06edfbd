// src/ops/mod.rs
// Primitive library: scalar operators, derivative rules, and the sequence
// combinators used to build vectorized operations from scalar ones.

pub mod combinators;
pub mod scalar;

// Re-export common items
pub use combinators::{add_lists, map, neg_list, prod, reduce, sum, zip_with};
pub use scalar::{
    add, eq, exp, id, inv, inv_back, is_close, log, log_back, lt, max, mul, neg, relu, relu_back,
    sigmoid,
};
