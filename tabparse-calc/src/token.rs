//! # Calculator Tokens
//!
//! [`CalcToken`] is the concrete token produced by [`CalcScanner`] and
//! consumed by the parser. It pairs a [`TokenID`] with the exact bytes it was
//! scanned from and the source range it covers.
//!
//! [`CalcScanner`]: crate::CalcScanner
use crate::TokenID;
use smartstring::alias::String;
use tabparse::{Span, Token};

/// A lexical token of the calculator language.
///
/// # Example
/// ```rust
/// # use tabparse_calc::{CalcToken, TokenID};
/// # use tabparse::{Token, span};
/// let tok = CalcToken {
///     token_id: TokenID::Number,
///     literal: "99".into(),
///     span: span!(0, 0, 0, 2),
/// };
///
/// assert_eq!(tok.token_id(), TokenID::Number);
/// assert_eq!(tok.literal(), b"99");
/// assert_eq!(tok.span(), span!(0, 0, 0, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcToken {
    /// The token's kind.
    pub token_id: TokenID,
    /// Source text of the token; empty for end of input.
    pub literal: String,
    /// Where the token occurs in the input.
    pub span: Option<Span>,
}

impl Token for CalcToken {
    type TokenID = TokenID;

    fn token_id(&self) -> Self::TokenID {
        self.token_id
    }

    fn literal(&self) -> &[u8] {
        self.literal.as_bytes()
    }

    fn span(&self) -> Option<Span> {
        self.span
    }
}
