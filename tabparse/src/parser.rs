use crate::trace::{NoTrace, StepObserver};
use crate::{
    ErrorCause, ParseError, ParserAction, ParserData, ParserTokenID, Scanner, SemanticError, Stack,
    Token,
};
use std::fmt::Debug;

/// Semantic value carried by a stack frame.
#[derive(Debug, Clone)]
pub enum Attrib<T, V>
where
    T: Token,
{
    /// A shifted terminal.
    Token(T),
    /// The result of a reduce function.
    Value(V),
    /// The record pushed with the `error` terminal by local recovery.
    Error(Box<ParseError<T, V>>),
    /// Stands in for a nonterminal that panic-mode recovery pretended to
    /// have recognized.
    Recovered {
        nonterminal: T::TokenID,
        error: Box<ParseError<T, V>>,
    },
}

impl<T, V> Attrib<T, V>
where
    T: Token,
{
    pub fn as_token(&self) -> Option<&T> {
        match self {
            Attrib::Token(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&V> {
        match self {
            Attrib::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<V> {
        match self {
            Attrib::Value(v) => Some(v),
            _ => None,
        }
    }

    /// The error behind an `Error` or `Recovered` attribute.
    pub fn as_error(&self) -> Option<&ParseError<T, V>> {
        match self {
            Attrib::Error(e) | Attrib::Recovered { error: e, .. } => Some(e),
            _ => None,
        }
    }
}

/// Semantic actions for a grammar.
///
/// The driver supplies one reduce function per production, dispatched on
/// the production id.
pub trait ParserDriver {
    type ParserData: ParserData;
    type Token: Token<TokenID = <Self::ParserData as ParserData>::TokenID>;
    type Value: Debug;

    /// Builds the attribute of `prod_id`'s left-hand side from the
    /// attributes of its right-hand side, given left to right.
    ///
    /// Returning an error starts panic-mode recovery.
    fn reduce(
        &mut self,
        prod_id: <Self::ParserData as ParserData>::ProdID,
        attribs: Vec<Attrib<Self::Token, Self::Value>>,
    ) -> Result<Attrib<Self::Token, Self::Value>, SemanticError>;
}

pub(crate) type StateOf<R> = <<R as ParserDriver>::ParserData as ParserData>::StateID;
pub(crate) type ProdOf<R> = <<R as ParserDriver>::ParserData as ParserData>::ProdID;
pub(crate) type AttribOf<R> = Attrib<<R as ParserDriver>::Token, <R as ParserDriver>::Value>;
pub(crate) type ErrorOf<R> = ParseError<<R as ParserDriver>::Token, <R as ParserDriver>::Value>;

/// Maximum number of recoveries per parse unless configured otherwise.
pub const DEFAULT_MAX_RECOVERIES: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Upper bound on error recoveries within one `parse` call. `None`
    /// disables the bound.
    pub max_recoveries: Option<usize>,
    /// Frames reserved up front for the parser stack.
    pub stack_capacity: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_recoveries: Some(DEFAULT_MAX_RECOVERIES),
            stack_capacity: crate::stack::INITIAL_STACK_SIZE,
        }
    }
}

impl ParserConfig {
    pub fn max_recoveries(mut self, max: Option<usize>) -> Self {
        self.max_recoveries = max;
        self
    }

    pub fn stack_capacity(mut self, capacity: usize) -> Self {
        self.stack_capacity = capacity;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserStats {
    pub tokens: usize,
    pub shifts: usize,
    pub reductions: usize,
    pub recoveries: usize,
    pub discarded: usize,
}

/// The table-driven shift-reduce engine.
///
/// A `Parser` borrows its tables, owns its driver and stack, and runs one
/// parse at a time. Calling [`parse`](Parser::parse) again reuses the stack.
pub struct Parser<'t, R, O = NoTrace>
where
    R: ParserDriver,
{
    pub(crate) data: &'t R::ParserData,
    pub(crate) driver: R,
    pub(crate) stack: Stack<StateOf<R>, AttribOf<R>>,
    pub(crate) config: ParserConfig,
    pub(crate) observer: O,
    pub(crate) stats: ParserStats,
    /// Recoveries attempted during the current parse.
    pub(crate) recoveries: usize,
}

impl<'t, R> Parser<'t, R, NoTrace>
where
    R: ParserDriver,
{
    pub fn new(data: &'t R::ParserData, driver: R) -> Self {
        Self::with_config(data, driver, ParserConfig::default())
    }

    pub fn with_config(data: &'t R::ParserData, driver: R, config: ParserConfig) -> Self {
        Self {
            data,
            driver,
            stack: Stack::with_capacity(data.start_state(), config.stack_capacity),
            config,
            observer: NoTrace,
            stats: ParserStats::default(),
            recoveries: 0,
        }
    }
}

impl<'t, R, O> Parser<'t, R, O>
where
    R: ParserDriver,
    O: StepObserver<StateOf<R>, ProdOf<R>, R::Token, AttribOf<R>>,
{
    /// Replaces the step observer.
    pub fn with_observer<O2>(self, observer: O2) -> Parser<'t, R, O2>
    where
        O2: StepObserver<StateOf<R>, ProdOf<R>, R::Token, AttribOf<R>>,
    {
        Parser {
            data: self.data,
            driver: self.driver,
            stack: self.stack,
            config: self.config,
            observer,
            stats: self.stats,
            recoveries: self.recoveries,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn stats(&self) -> ParserStats {
        self.stats.clone()
    }

    pub fn stack(&self) -> &Stack<StateOf<R>, AttribOf<R>> {
        &self.stack
    }

    pub fn driver(&self) -> &R {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut R {
        &mut self.driver
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Restores the initial stack configuration.
    pub fn reset(&mut self) {
        self.stack.reset(self.data.start_state());
        self.recoveries = 0;
    }

    /// Parses the token stream produced by `scanner`.
    ///
    /// Errors that local or panic-mode recovery can absorb never reach the
    /// caller; the first one that cannot be recovered from is returned.
    pub fn parse<S>(&mut self, scanner: &mut S) -> Result<AttribOf<R>, ErrorOf<R>>
    where
        S: Scanner<Token = R::Token>,
    {
        self.reset();
        let mut lookahead = self.next_token(scanner);
        loop {
            let action = match self.data.lookup(self.stack.top(), lookahead.token_id()) {
                ParserAction::Error => {
                    self.begin_recovery(&lookahead)?;
                    if !self.recover_locally(scanner, &mut lookahead)
                        && !self.panic_mode(scanner, &mut lookahead, ErrorCause::Syntax)
                    {
                        return Err(self.fatal_error(ErrorCause::Syntax, lookahead));
                    }
                    match self.data.lookup(self.stack.top(), lookahead.token_id()) {
                        ParserAction::Error => {
                            return Err(self.fatal_error(ErrorCause::InvalidRecovery, lookahead));
                        }
                        action => action,
                    }
                }
                action => action,
            };

            self.observer.step(&self.stack, &lookahead, &action);

            match action {
                ParserAction::Accept => {
                    // The bottom frame carries no attribute and must stay.
                    if self.stack.top_index() == 0 {
                        return Err(self.fatal_error(ErrorCause::StackUnderflow, lookahead));
                    }
                    return match self.stack.pop_n(1).pop().flatten() {
                        Some(result) => Ok(result),
                        None => Err(self.fatal_error(ErrorCause::StackUnderflow, lookahead)),
                    };
                }

                ParserAction::Shift(state) => {
                    self.stack.push(state, Some(Attrib::Token(lookahead)));
                    lookahead = self.next_token(scanner);
                    self.stats.shifts += 1;
                }

                ParserAction::Reduce(prod_id) => {
                    let prod = self.data.production(prod_id);
                    // The bottom frame is never part of a right-hand side.
                    if prod.size > self.stack.top_index() {
                        return Err(self.fatal_error(ErrorCause::StackUnderflow, lookahead));
                    }
                    let Some(attribs) = self
                        .stack
                        .pop_n(prod.size)
                        .into_iter()
                        .collect::<Option<Vec<_>>>()
                    else {
                        return Err(self.fatal_error(ErrorCause::StackUnderflow, lookahead));
                    };
                    self.stats.reductions += 1;
                    match self.driver.reduce(prod_id, attribs) {
                        Ok(attrib) => {
                            let Some(state) = self.data.goto(self.stack.top(), prod.lhs) else {
                                return Err(self.fatal_error(
                                    ErrorCause::MissingGoto(prod.lhs.label()),
                                    lookahead,
                                ));
                            };
                            self.stack.push(state, Some(attrib));
                        }
                        Err(e) => {
                            log::debug!("reduce {} failed: {}", prod.label, e);
                            let cause = ErrorCause::Semantic(e);
                            self.begin_recovery(&lookahead)?;
                            if !self.panic_mode(scanner, &mut lookahead, cause.clone()) {
                                return Err(self.fatal_error(cause, lookahead));
                            }
                        }
                    }
                }

                ParserAction::Error => unreachable!(),
            }
        }
    }

    #[inline]
    pub(crate) fn next_token<S>(&mut self, scanner: &mut S) -> R::Token
    where
        S: Scanner<Token = R::Token>,
    {
        self.stats.tokens += 1;
        scanner.scan()
    }

    /// Counts a recovery against the configured bound.
    fn begin_recovery(&mut self, lookahead: &R::Token) -> Result<(), ErrorOf<R>> {
        self.recoveries += 1;
        self.stats.recoveries += 1;
        match self.config.max_recoveries {
            Some(max) if self.recoveries > max => {
                Err(self.fatal_error(ErrorCause::RecoveryLimit(max), lookahead.clone()))
            }
            _ => Ok(()),
        }
    }

    /// Builds the error returned to the caller from the current top state.
    pub(crate) fn fatal_error(&self, cause: ErrorCause, token: R::Token) -> ErrorOf<R> {
        let top = self.stack.top();
        log::debug!("fatal {} in state {:?} on {:?}", cause, top, token);
        ParseError {
            cause,
            token,
            error_symbols: Vec::new(),
            expected: self.data.expected_tokens(top),
            stack_top: top.into(),
        }
    }
}
