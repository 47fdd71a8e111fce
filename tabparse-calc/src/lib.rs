//! # tabparse-calc
//!
//! A small statement calculator built on **tabparse**. It drives the engine
//! with hand-written LALR(1) tables and a byte scanner, and exercises every
//! engine path: shift, reduce, accept, local recovery through the `error`
//! terminal, panic mode after a failed reduction, and fatal errors.
//!
//! The language is a list of `;`-terminated sums and differences of decimal
//! integers:
//!
//! ```text
//! 1 + 2;    # 3
//! 10 - 4;   # 6
//! ```
//!
//! ## Modules
//!
//! - [`scanner`]: byte scanner producing [`CalcToken`]s
//! - [`parser_data`]: ACTION/GOTO tables, productions and follow sets
//! - [`parser`]: reduce functions and the [`CalcParser`] front end
//! - [`token`]: the [`CalcToken`] type
//!
//! ## Example
//!
//! ```rust
//! use tabparse_calc::CalcParser;
//!
//! let mut parser = CalcParser::new();
//! let stats = parser.parse_str("1 + 2; 3 - 1;").unwrap();
//! assert_eq!(stats[0].result, Ok(3));
//! assert_eq!(stats[1].result, Ok(2));
//! ```
pub mod error;
pub mod parser;
pub mod parser_data;
pub mod scanner;
pub mod token;

pub use error::CalcError;
pub use parser::{CalcDriver, CalcParseError, CalcParser, CalcValue, Statement};
pub use parser_data::TokenID;
pub use scanner::CalcScanner;
pub use token::CalcToken;
