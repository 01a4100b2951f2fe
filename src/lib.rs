//! Pointer and memory fundamentals, one module per concept.
//!
//! Every demonstration is a plain function over borrowed or owned data so it
//! can be exercised from tests; the binaries in `src/bin` only add console I/O.

pub mod arrays;
pub mod buffer;
pub mod catalog;
pub mod config;
pub mod division;
pub mod error;
pub mod indirection;
pub mod mutation;
pub mod person;
pub mod sphere;
pub mod style;
pub mod swap;
pub mod tasks;

pub use error::{DemoError, DemoResult};
