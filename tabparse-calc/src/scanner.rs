//! # Calculator Scanner
//!
//! A hand-written byte scanner for the calculator language. It recognizes
//! decimal integers, `+`, `-` and `;`, skips whitespace and `#` comments that
//! run to the end of the line, and warns about and drops any other byte.
//! Positions are 0-based lines and byte columns.

use crate::{CalcToken, TokenID};
use smartstring::alias::String;
use std::iter::{Fuse, Peekable};
use tabparse::{Position, Scanner, Span};

/// Pulls bytes from `I` and produces [`CalcToken`]s.
///
/// Once the input is exhausted every call to [`scan`](Scanner::scan)
/// returns an end token positioned just past the last byte.
///
/// # Example
/// ```rust
/// # use tabparse_calc::{CalcScanner, TokenID};
/// # use tabparse::{Scanner, Token};
/// let mut scanner = CalcScanner::new("12 + 3;".bytes());
/// let ids: Vec<_> = (0..5).map(|_| scanner.scan().token_id()).collect();
/// assert_eq!(
///     ids,
///     [TokenID::Number, TokenID::Plus, TokenID::Number, TokenID::Semi, TokenID::End]
/// );
/// assert!(scanner.scan().is_end());
/// ```
pub struct CalcScanner<I>
where
    I: Iterator<Item = u8>,
{
    input: Peekable<Fuse<I>>,
    pos: Position,
    skipped: usize,
}

impl<I> CalcScanner<I>
where
    I: Iterator<Item = u8>,
{
    pub fn new(input: I) -> Self {
        Self {
            input: input.fuse().peekable(),
            pos: Position::default(),
            skipped: 0,
        }
    }

    /// Number of unrecognized bytes dropped so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.input.next()?;
        if b == b'\n' {
            self.pos.line += 1;
            self.pos.column = 0;
        } else {
            self.pos.column += 1;
        }
        Some(b)
    }

    fn token(&self, token_id: TokenID, literal: String, start: Position) -> CalcToken {
        CalcToken {
            token_id,
            literal,
            span: Some(Span::new(start, self.pos)),
        }
    }
}

impl<I> Scanner for CalcScanner<I>
where
    I: Iterator<Item = u8>,
{
    type Token = CalcToken;

    fn scan(&mut self) -> CalcToken {
        loop {
            let start = self.pos;
            let Some(b) = self.bump() else {
                return self.token(TokenID::End, String::new(), start);
            };
            let token_id = match b {
                b' ' | b'\t' | b'\r' | b'\n' => continue,
                b'#' => {
                    while let Some(&c) = self.input.peek() {
                        if c == b'\n' {
                            break;
                        }
                        self.bump();
                    }
                    continue;
                }
                b'0'..=b'9' => TokenID::Number,
                b'+' => TokenID::Plus,
                b'-' => TokenID::Minus,
                b';' => TokenID::Semi,
                _ => {
                    log::warn!(
                        "skipping unexpected byte {:#04x} at {}:{}",
                        b,
                        start.line,
                        start.column
                    );
                    self.skipped += 1;
                    continue;
                }
            };

            let mut literal = String::new();
            literal.push(b as char);
            if token_id == TokenID::Number {
                while let Some(&c) = self.input.peek() {
                    if !c.is_ascii_digit() {
                        break;
                    }
                    literal.push(c as char);
                    self.bump();
                }
            }
            let token = self.token(token_id, literal, start);
            log::trace!("scanned {:?}", token);
            return token;
        }
    }
}
