//! # Calculator Error Type
//!
//! [`CalcError`] collects the failures raised by the calculator's reduce
//! functions. They reach the engine as a [`tabparse::SemanticError`] through
//! [`SemanticError::from_err`](tabparse::SemanticError::from_err), which
//! makes the enclosing statement invalid.
use thiserror::Error;

/// Errors raised while evaluating calculator expressions.
///
/// # Examples
/// ```rust
/// # use tabparse_calc::CalcError;
/// # fn demo(s: &str) -> Result<i64, CalcError> {
/// let n: i64 = s.parse()?; // ParseIntError -> CalcError via #[from]
/// # Ok(n) }
/// assert!(matches!(demo("x"), Err(CalcError::ParseInt(_))));
/// ```
#[derive(Debug, Error)]
pub enum CalcError {
    /// An integer literal could not be parsed from its string representation.
    #[error("unable to parse {0:?}")]
    ParseInt(#[from] std::num::ParseIntError),

    /// Checked arithmetic overflowed `i64`.
    #[error("integer overflow in {lhs} {op} {rhs}")]
    Overflow { lhs: i64, op: char, rhs: i64 },
}
