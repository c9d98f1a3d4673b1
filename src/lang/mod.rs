/*!
## Language module

Lexical analysis of Cyclone BASIC: the line lexer, tokens with their
classifier, and the crate-wide error type.

*/

pub type LineIndex = usize;

mod error;
mod lex;
pub mod token;

pub use error::Error;
pub use error::ErrorKind;
pub use lex::lex;
pub use token::Token;
