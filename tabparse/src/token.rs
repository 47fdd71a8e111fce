//! Tokens and the scanner contract.
//!
//! The scanner is an external collaborator: the engine pulls tokens one at a
//! time and never pushes anything back. Once the input is exhausted the
//! scanner must keep returning its end-of-input token, because recovery
//! discards tokens in loops that stop only when they see it.

use crate::{ParserTokenID, Span};
use std::fmt::Debug;
use std::iter::Fuse;

pub trait Token: Clone + Debug {
    type TokenID: ParserTokenID;

    fn token_id(&self) -> Self::TokenID;

    /// The input bytes the token was scanned from.
    fn literal(&self) -> &[u8];

    fn span(&self) -> Option<Span> {
        None
    }

    #[inline]
    fn is_end(&self) -> bool {
        self.token_id() == <Self::TokenID as ParserTokenID>::END
    }
}

pub trait Scanner {
    type Token: Token;

    /// Returns the next token, or the end-of-input token forever once the
    /// input is exhausted.
    fn scan(&mut self) -> Self::Token;
}

/// Adapts an iterator of tokens into a [`Scanner`].
///
/// # Examples
///
/// ```rust
/// # use tabparse::{IterScanner, Scanner, Token, ParserTokenID};
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// # enum Id { Word, End, Error }
/// # impl From<Id> for usize { fn from(id: Id) -> usize { id as usize } }
/// # impl TryFrom<usize> for Id {
/// #     type Error = ();
/// #     fn try_from(i: usize) -> Result<Self, ()> {
/// #         [Id::Word, Id::End, Id::Error].get(i).copied().ok_or(())
/// #     }
/// # }
/// # impl ParserTokenID for Id {
/// #     const COUNT_NONTERMINALS: usize = 0;
/// #     const COUNT_TERMINALS: usize = 2;
/// #     const COUNT: usize = 3;
/// #     const END: Self = Id::End;
/// #     const ERROR: Self = Id::Error;
/// #     fn label(&self) -> &'static str { "" }
/// # }
/// # #[derive(Debug, Clone)]
/// # struct Tok(Id);
/// # impl Token for Tok {
/// #     type TokenID = Id;
/// #     fn token_id(&self) -> Id { self.0 }
/// #     fn literal(&self) -> &[u8] { b"" }
/// # }
/// let mut scanner = IterScanner::new(vec![Tok(Id::Word)], Tok(Id::End));
/// assert_eq!(scanner.scan().token_id(), Id::Word);
/// assert!(scanner.scan().is_end());
/// assert!(scanner.scan().is_end());
/// ```
pub struct IterScanner<I>
where
    I: Iterator,
{
    iter: Fuse<I>,
    end: I::Item,
}

impl<I> IterScanner<I>
where
    I: Iterator,
    I::Item: Token,
{
    pub fn new<T>(tokens: T, end: I::Item) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: tokens.into_iter().fuse(),
            end,
        }
    }
}

impl<I> Scanner for IterScanner<I>
where
    I: Iterator,
    I::Item: Token,
{
    type Token = I::Item;

    #[inline]
    fn scan(&mut self) -> Self::Token {
        self.iter.next().unwrap_or_else(|| self.end.clone())
    }
}
