//! Request handlers.

pub mod sum_handler;

pub use sum_handler::{sum_routes, SumRequest};
