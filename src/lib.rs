//! # Cyclone BASIC
//!
//! A small BASIC dialect with dynamically typed values, dictionary
//! literals, emoji identifiers, and label-based control flow.
//! ```text
//! INPUT A, B
//! PRINT A," + ",B," == ",A+B
//! ```
//!
//! The interpreter lexes a source string into lines of tokens, indexes
//! the jump labels, then executes by walking tokens and mutating a
//! program counter. Host I/O flows through a [`mach::Delegate`].
//!
//! This is the manual: every statement, operator, and function of the
//! dialect is documented in the chapters below.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
