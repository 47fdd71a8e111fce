//! Error types reported by the engine and by reduce functions.

use crate::{Attrib, Span, Token};
use smartstring::alias::String;
use std::fmt;
use thiserror::Error;

/// A flattened error raised by a reduce function.
///
/// Carries only a message and an optional `Span`. Use [`from_err`] to wrap
/// errors from other crates while attaching a location.
///
/// [`from_err`]: SemanticError::from_err
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SemanticError {
    pub message: String,
    pub span: Option<Span>,
}

impl SemanticError {
    pub fn new(message: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    /// Convert any error into `SemanticError`, preserving an existing
    /// `SemanticError` and overriding its span when `span.is_some()`.
    pub fn from_err<E>(err: E, span: Option<Span>) -> Self
    where
        E: fmt::Display + 'static,
    {
        if let Some(se) = (&err as &dyn std::any::Any).downcast_ref::<SemanticError>() {
            let mut out = se.clone();
            if span.is_some() {
                out.span = span;
            }
            out
        } else {
            SemanticError {
                message: err.to_string().into(),
                span,
            }
        }
    }
}

/// Why a parse step failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorCause {
    /// No action for the lookahead in the current state.
    #[error("syntax error")]
    Syntax,

    /// A reduce function rejected its right-hand side.
    #[error("semantic error: {0}")]
    Semantic(SemanticError),

    /// More recoveries were attempted in one parse than the configured limit.
    #[error("error recovery limit of {0} exceeded")]
    RecoveryLimit(usize),

    #[error("error recovery led to an invalid action")]
    InvalidRecovery,

    #[error("no goto entry for {0} after reduction")]
    MissingGoto(&'static str),

    #[error("stack underflow")]
    StackUnderflow,
}

impl ErrorCause {
    /// Table or engine inconsistencies, as opposed to errors in the input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            ErrorCause::InvalidRecovery | ErrorCause::MissingGoto(_) | ErrorCause::StackUnderflow
        )
    }
}

/// A snapshot of the parser at the point an error was detected.
///
/// Local recovery pushes these onto the stack as the attribute of the shifted
/// `error` terminal; an unrecoverable one is returned from
/// [`Parser::parse`](crate::Parser::parse).
#[derive(Debug, Clone)]
pub struct ParseError<T, V>
where
    T: Token,
{
    pub cause: ErrorCause,
    /// The lookahead when the error was reported.
    pub token: T,
    /// Attributes of the frames discarded while unwinding the stack.
    pub error_symbols: Vec<Attrib<T, V>>,
    /// Labels of the terminals that would have been accepted.
    pub expected: Vec<&'static str>,
    /// The state on top of the stack, as a table row index.
    pub stack_top: usize,
}

impl<T, V> ParseError<T, V>
where
    T: Token,
{
    pub fn span(&self) -> Option<Span> {
        match &self.cause {
            ErrorCause::Semantic(e) if e.span.is_some() => e.span,
            _ => self.token.span(),
        }
    }
}

impl<T, V> fmt::Display for ParseError<T, V>
where
    T: Token,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cause)?;
        if let Some(span) = self.span() {
            write!(f, " at {}", span)?;
        }
        if let ErrorCause::Semantic(_) = self.cause {
            return Ok(());
        }
        if self.token.is_end() {
            write!(f, ": unexpected end of input")?;
        } else {
            write!(
                f,
                ": unexpected {:?} ({})",
                std::string::String::from_utf8_lossy(self.token.literal()),
                crate::ParserTokenID::label(&self.token.token_id()),
            )?;
        }
        if !self.expected.is_empty() {
            write!(f, "; expected one of: {}", self.expected.join(", "))?;
        }
        Ok(())
    }
}

impl<T, V> std::error::Error for ParseError<T, V>
where
    T: Token,
    V: fmt::Debug,
{
}
