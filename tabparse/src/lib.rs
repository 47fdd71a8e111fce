//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! Table-driven LR(1) parsing engine.
//!
//! `tabparse` runs shift-reduce parsing over precomputed ACTION/GOTO tables
//! supplied through the [`ParserData`] trait, pulling tokens from a
//! [`Scanner`] and building semantic values through a [`ParserDriver`].
//!
//! Syntax errors are handled in two stages:
//!  * **local recovery** shifts the grammar's `error` terminal in the nearest
//!    state that accepts it and skips input until parsing can continue;
//!  * **panic mode** discards input up to a token in the follow set of a
//!    nonterminal reachable through the stack and pretends that nonterminal
//!    was recognized.
//!
//! Key components:
//! - `tables`: the table contract ([`ParserData`], [`ParserAction`], token ids)
//! - `token`: tokens and the [`Scanner`] contract
//! - `stack`: the state/attribute [`Stack`]
//! - `parser`: the driver loop ([`Parser`])
//! - `recovery`: local and panic-mode error recovery
//! - `trace`: per-step observers

mod error;
mod parser;
mod recovery;
mod span;
mod stack;
mod tables;
mod token;
mod trace;

#[cfg(test)]
mod test_parser_data;

pub use crate::error::{ErrorCause, ParseError, SemanticError};
pub use crate::parser::{
    Attrib, DEFAULT_MAX_RECOVERIES, Parser, ParserConfig, ParserDriver, ParserStats,
};
pub use crate::span::{Position, Span};
pub use crate::stack::{INITIAL_STACK_SIZE, Stack};
pub use crate::tables::{
    FollowSet, ParserAction, ParserData, ParserProdID, ParserStateID, ParserTokenID, Production,
};
pub use crate::token::{IterScanner, Scanner, Token};
pub use crate::trace::{LogTrace, NoTrace, StepObserver};
