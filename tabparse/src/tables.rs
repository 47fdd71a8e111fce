//! The contract between the engine and precomputed LR(1) tables.
//!
//! Tables are produced upstream by a grammar-analysis tool and are treated as
//! immutable for the lifetime of the process. A generated module usually
//! declares `#[repr(usize)]` enums for token and production ids and a set of
//! `const` arrays, then implements [`ParserData`] over them. The engine only
//! ever borrows the tables, so one instance can serve any number of parsers.

use std::fmt::Debug;

/// One cell of the ACTION table.
///
/// `Error` marks an undefined cell: no move is possible for that
/// (state, terminal) pair and error recovery takes over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParserAction<S, P> {
    Error,
    Accept,
    Shift(S),
    Reduce(P),
}

impl<S, P> ParserAction<S, P> {
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, ParserAction::Error)
    }
}

pub trait ParserStateID: Copy + Debug + Eq + Into<usize> {}

pub trait ParserProdID: Copy + Debug + Eq + Into<usize> {}

/// Identifier of a grammar symbol.
///
/// Terminals and nonterminals share one id space. Nonterminals come first
/// (`0..COUNT_NONTERMINALS`), then the terminals including the end-of-input
/// terminal, and the distinguished `error` terminal is the last id.
pub trait ParserTokenID: Copy + Debug + Eq + Into<usize> + TryFrom<usize> {
    const COUNT_NONTERMINALS: usize;
    const COUNT_TERMINALS: usize;
    const COUNT: usize;

    /// The end-of-input terminal returned by an exhausted scanner.
    const END: Self;
    /// The terminal shifted by local error recovery.
    const ERROR: Self;

    fn label(&self) -> &'static str;

    #[inline]
    fn is_terminal(&self) -> bool {
        Into::<usize>::into(*self) >= Self::COUNT_NONTERMINALS
    }

    /// All nonterminals in table column order.
    fn nonterminals() -> impl Iterator<Item = Self> {
        (0..Self::COUNT_NONTERMINALS).filter_map(|i| <Self as TryFrom<usize>>::try_from(i).ok())
    }

    /// All terminals in table column order, `error` last.
    fn terminals() -> impl Iterator<Item = Self> {
        (Self::COUNT_NONTERMINALS..Self::COUNT).filter_map(|i| <Self as TryFrom<usize>>::try_from(i).ok())
    }
}

/// Static description of a production `lhs → x1 … xn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Production<T> {
    /// Nonterminal on the left-hand side.
    pub lhs: T,
    /// Number of symbols on the right-hand side.
    pub size: usize,
    pub label: &'static str,
}

/// Terminals that may follow a nonterminal, by literal text.
///
/// Panic-mode recovery discards input until a token whose literal text is in
/// this set shows up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FollowSet<T> {
    pub nonterminal: T,
    pub terminals: &'static [&'static str],
}

impl<T> FollowSet<T> {
    #[inline]
    pub fn contains(&self, literal: &[u8]) -> bool {
        self.terminals.iter().any(|t| t.as_bytes() == literal)
    }
}

/// Read-only ACTION/GOTO tables, production metadata and follow sets.
pub trait ParserData {
    type StateID: ParserStateID;
    type TokenID: ParserTokenID;
    type ProdID: ParserProdID;

    fn start_state(&self) -> Self::StateID;

    /// `ACTION[state][token]`. Nonterminal columns are always `Error`.
    fn lookup(
        &self,
        state_id: Self::StateID,
        token_id: Self::TokenID,
    ) -> ParserAction<Self::StateID, Self::ProdID>;

    /// `GOTO[state][nonterminal]`.
    fn goto(&self, state_id: Self::StateID, token_id: Self::TokenID) -> Option<Self::StateID>;

    /// Whether the state can shift the `error` terminal.
    fn can_recover(&self, state_id: Self::StateID) -> bool;

    fn production(&self, prod_id: Self::ProdID) -> Production<Self::TokenID>;

    fn follow_sets(&self) -> &[FollowSet<Self::TokenID>];

    fn follow_set(&self, nonterminal: Self::TokenID) -> Option<&FollowSet<Self::TokenID>> {
        self.follow_sets()
            .iter()
            .find(|f| f.nonterminal == nonterminal)
    }

    /// Labels of every terminal with a defined action in `state_id`.
    fn expected_tokens(&self, state_id: Self::StateID) -> Vec<&'static str> {
        <Self::TokenID as ParserTokenID>::terminals()
            .filter(|t| !self.lookup(state_id, *t).is_error())
            .map(|t| t.label())
            .collect()
    }
}
