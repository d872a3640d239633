pub mod analysis;
pub mod ast;
pub mod cli;
pub mod error;
pub mod issue;
pub mod lexical;
pub mod output;
pub mod scanner;
pub mod source;
pub mod structural;

pub use error::{Result, StyleGuardError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ISSUES_FOUND: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
