//! # Calculator Parser
//!
//! This module couples the calculator tables in [`parser_data`] with
//! calculator-specific semantic actions. It exposes:
//!
//! - [`CalcDriver`]: the reduce functions,
//! - [`CalcParser`]: a thin adapter that scans bytes and returns one
//!   [`Statement`] per `;`-terminated statement.
//!
//! ## Behavior highlights
//! - Arithmetic is checked; overflow makes the enclosing statement invalid
//!   instead of aborting the parse.
//! - A malformed statement is absorbed by the `Stat → error ;` production and
//!   reported as an invalid [`Statement`].
//! - A statement missing its final `;` is a fatal error.
//!
//! [`parser_data`]: crate::parser_data

use crate::parser_data::{ParData, ProdID, StateID};
use crate::{CalcError, CalcScanner, CalcToken};
use smartstring::alias::String;
use std::fmt;
use tabparse::{
    Attrib, LogTrace, NoTrace, ParseError, Parser, ParserConfig, ParserDriver, ParserStats,
    SemanticError, Span, StepObserver,
};

static PARSER_DATA: ParData = ParData;

/// One statement of the input and the value it evaluated to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// The value, or the message of the error that made the statement invalid.
    pub result: Result<i64, String>,
    pub span: Option<Span>,
}

impl Statement {
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(span) = self.span {
            write!(f, "{}:{}: ", span.start.line + 1, span.start.column + 1)?;
        }
        match &self.result {
            Ok(value) => write!(f, "{}", value),
            Err(message) => write!(f, "error: {}", message),
        }
    }
}

/// Semantic value of a calculator nonterminal.
#[derive(Debug, Clone)]
pub enum CalcValue {
    Expr { value: i64, span: Option<Span> },
    Stat(Statement),
    List(Vec<Statement>),
}

pub type CalcAttrib = Attrib<CalcToken, CalcValue>;
pub type CalcParseError = ParseError<CalcToken, CalcValue>;

fn token(attrib: Option<CalcAttrib>) -> CalcToken {
    let Some(Attrib::Token(token)) = attrib else {
        unreachable!()
    };
    token
}

fn invalid(error: &CalcParseError, semi: &CalcToken) -> Statement {
    log::debug!("invalid statement: {}", error);
    Statement {
        result: Err(error.to_string().into()),
        span: Span::merge_opt(error.span(), semi.span),
    }
}

/// Reduce functions of the calculator grammar.
#[derive(Debug, Default)]
pub struct CalcDriver {
    invalid: usize,
}

impl CalcDriver {
    /// Number of invalid statements seen so far.
    pub fn invalid(&self) -> usize {
        self.invalid
    }
}

impl ParserDriver for CalcDriver {
    type ParserData = ParData;
    type Token = CalcToken;
    type Value = CalcValue;

    fn reduce(
        &mut self,
        prod_id: ProdID,
        attribs: Vec<CalcAttrib>,
    ) -> Result<CalcAttrib, SemanticError> {
        let mut attribs = attribs.into_iter();
        let value = match prod_id {
            ProdID::Start => {
                // Start -> List
                // Accept - does not get reduced
                unreachable!()
            }
            ProdID::List1 => {
                // List -> List Stat
                let (
                    Some(Attrib::Value(CalcValue::List(mut list))),
                    Some(Attrib::Value(CalcValue::Stat(stat))),
                ) = (attribs.next(), attribs.next())
                else {
                    unreachable!()
                };
                list.push(stat);
                CalcValue::List(list)
            }
            ProdID::List2 => {
                // List ->
                CalcValue::List(Vec::new())
            }
            ProdID::Stat1 => {
                // Stat -> Expr ;
                let expr = attribs.next();
                let semi = token(attribs.next());
                let stat = match expr {
                    Some(Attrib::Value(CalcValue::Expr { value, span })) => Statement {
                        result: Ok(value),
                        span: Span::merge_opt(span, semi.span),
                    },
                    Some(Attrib::Recovered { error, .. }) => {
                        self.invalid += 1;
                        invalid(&error, &semi)
                    }
                    _ => unreachable!(),
                };
                CalcValue::Stat(stat)
            }
            ProdID::Stat2 => {
                // Stat -> error ;
                let Some(Attrib::Error(error)) = attribs.next() else {
                    unreachable!()
                };
                let semi = token(attribs.next());
                self.invalid += 1;
                CalcValue::Stat(invalid(&error, &semi))
            }
            ProdID::Expr1 | ProdID::Expr2 => {
                // Expr -> Expr + number | Expr - number
                let lhs = attribs.next();
                attribs.next();
                let number = token(attribs.next());
                let (value, span) = match lhs {
                    Some(Attrib::Value(CalcValue::Expr { value, span })) => (value, span),
                    Some(recovered @ Attrib::Recovered { .. }) => return Ok(recovered),
                    _ => unreachable!(),
                };
                let span = Span::merge_opt(span, number.span);
                let rhs = parse_number(&number)?;
                let (op, result) = match prod_id {
                    ProdID::Expr1 => ('+', value.checked_add(rhs)),
                    _ => ('-', value.checked_sub(rhs)),
                };
                let value = result.ok_or_else(|| {
                    SemanticError::from_err(
                        CalcError::Overflow {
                            lhs: value,
                            op,
                            rhs,
                        },
                        span,
                    )
                })?;
                CalcValue::Expr { value, span }
            }
            ProdID::Expr3 => {
                // Expr -> number
                let number = token(attribs.next());
                CalcValue::Expr {
                    value: parse_number(&number)?,
                    span: number.span,
                }
            }
        };
        Ok(Attrib::Value(value))
    }
}

fn parse_number(token: &CalcToken) -> Result<i64, SemanticError> {
    token
        .literal
        .parse::<i64>()
        .map_err(|e| SemanticError::from_err(CalcError::from(e), token.span))
}

/// The calculator parser.
///
/// # Example
///
/// ```rust
/// # use tabparse_calc::CalcParser;
/// let mut parser = CalcParser::new();
/// let stats = parser.parse_str("1 + 2;\n 3 - ;\n 10 - 4;").unwrap();
/// let results: Vec<_> = stats.iter().map(|s| s.result.clone().ok()).collect();
/// assert_eq!(results, vec![Some(3), None, Some(6)]);
/// ```
pub struct CalcParser<O = NoTrace> {
    parser: Parser<'static, CalcDriver, O>,
}

impl CalcParser<NoTrace> {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            parser: Parser::with_config(&PARSER_DATA, CalcDriver::default(), config),
        }
    }

    /// Logs every parser step at trace level.
    pub fn with_trace(self) -> CalcParser<LogTrace> {
        CalcParser {
            parser: self.parser.with_observer(LogTrace),
        }
    }
}

impl Default for CalcParser<NoTrace> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> CalcParser<O>
where
    O: StepObserver<StateID, ProdID, CalcToken, CalcAttrib>,
{
    pub fn parse_bytes<I>(&mut self, input: I) -> Result<Vec<Statement>, CalcParseError>
    where
        I: Iterator<Item = u8>,
    {
        let mut scanner = CalcScanner::new(input);
        let Attrib::Value(CalcValue::List(list)) = self.parser.parse(&mut scanner)? else {
            unreachable!()
        };
        Ok(list)
    }

    pub fn parse_str(&mut self, input: &str) -> Result<Vec<Statement>, CalcParseError> {
        self.parse_bytes(input.bytes())
    }

    pub fn stats(&self) -> ParserStats {
        self.parser.stats()
    }

    pub fn driver(&self) -> &CalcDriver {
        self.parser.driver()
    }
}
