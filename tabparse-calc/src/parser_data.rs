//! LALR(1) tables for the calculator grammar.
//!
//! ```text
//! Start → List
//! List  → List Stat | ε
//! Stat  → Expr ";" | error ";"
//! Expr  → Expr "+" number | Expr "-" number | number
//! ```
//!
//! Laid out the way a table generator emits them: id enums, one ACTION row
//! per state with a cell for every symbol, a GOTO row per state, production
//! metadata and follow sets. States whose only move is a reduction carry it
//! on every terminal, so a stray token after a complete statement is
//! detected in the statement list state and never costs the statement.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use tabparse::{
    FollowSet, ParserAction, ParserData, ParserProdID, ParserStateID, ParserTokenID, Production,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateID(pub u8);
impl ParserStateID for StateID {}

impl From<StateID> for usize {
    fn from(s: StateID) -> Self {
        s.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(usize)]
pub enum ProdID {
    Start = 0,
    List1 = 1,
    List2 = 2,
    Stat1 = 3,
    Stat2 = 4,
    Expr1 = 5,
    Expr2 = 6,
    Expr3 = 7,
}

impl ParserProdID for ProdID {}

impl ProdID {
    pub const PRODUCTIONS: &'static [Production<TokenID>] = &[
        Production { lhs: TokenID::Start, size: 1, label: "Start → List" }, // 0
        Production { lhs: TokenID::List, size: 2, label: "List → List Stat" }, // 1
        Production { lhs: TokenID::List, size: 0, label: "List → ε" }, // 2
        Production { lhs: TokenID::Stat, size: 2, label: "Stat → Expr ;" }, // 3
        Production { lhs: TokenID::Stat, size: 2, label: "Stat → error ;" }, // 4
        Production { lhs: TokenID::Expr, size: 3, label: "Expr → Expr + number" }, // 5
        Production { lhs: TokenID::Expr, size: 3, label: "Expr → Expr - number" }, // 6
        Production { lhs: TokenID::Expr, size: 1, label: "Expr → number" }, // 7
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(usize)]
pub enum TokenID {
    // Nonterminals:
    Start = 0,
    List = 1,
    Expr = 2,
    Stat = 3,

    // Terminals:
    Number = 4,
    Plus = 5,
    Minus = 6,
    Semi = 7,
    End = 8,

    // Error:
    Error = 9,
}

impl ParserTokenID for TokenID {
    const COUNT_NONTERMINALS: usize = 4;
    const COUNT_TERMINALS: usize = 5;
    const COUNT: usize = Self::COUNT_NONTERMINALS + Self::COUNT_TERMINALS + 1;
    const END: Self = TokenID::End;
    const ERROR: Self = TokenID::Error;

    fn label(&self) -> &'static str {
        TokenID::LABELS[Into::<usize>::into(*self)]
    }
}

impl TokenID {
    pub const LABELS: &'static [&'static str] = &[
        "Start",  // 0
        "List",   // 1
        "Expr",   // 2
        "Stat",   // 3
        "number", // 4
        "+",      // 5
        "-",      // 6
        ";",      // 7
        "$end",   // 8
        "error",  // 9
    ];
}

pub type Action = ParserAction<StateID, ProdID>;

pub struct ParData;
impl ParData {
    const TAB: &'static [[Action; TokenID::COUNT]] = &[
        /* STATE 0 */ [
            Action::Error, /* 0(Start) */
            Action::Error, /* 1(List) */
            Action::Error, /* 2(Expr) */
            Action::Error, /* 3(Stat) */
            Action::Reduce(ProdID::List2), /* 4(number) */
            Action::Reduce(ProdID::List2), /* 5(+) */
            Action::Reduce(ProdID::List2), /* 6(-) */
            Action::Reduce(ProdID::List2), /* 7(;) */
            Action::Reduce(ProdID::List2), /* 8($end) */
            Action::Reduce(ProdID::List2), /* 9(error) */
        ],
        /* STATE 1 */ [
            Action::Error, /* 0(Start) */
            Action::Error, /* 1(List) */
            Action::Error, /* 2(Expr) */
            Action::Error, /* 3(Stat) */
            Action::Shift(StateID(4)), /* 4(number) */
            Action::Error, /* 5(+) */
            Action::Error, /* 6(-) */
            Action::Error, /* 7(;) */
            Action::Accept, /* 8($end) */
            Action::Shift(StateID(3)), /* 9(error) */
        ],
        /* STATE 2 */ [
            Action::Error, /* 0(Start) */
            Action::Error, /* 1(List) */
            Action::Error, /* 2(Expr) */
            Action::Error, /* 3(Stat) */
            Action::Reduce(ProdID::List1), /* 4(number) */
            Action::Reduce(ProdID::List1), /* 5(+) */
            Action::Reduce(ProdID::List1), /* 6(-) */
            Action::Reduce(ProdID::List1), /* 7(;) */
            Action::Reduce(ProdID::List1), /* 8($end) */
            Action::Reduce(ProdID::List1), /* 9(error) */
        ],
        /* STATE 3 */ [
            Action::Error, /* 0(Start) */
            Action::Error, /* 1(List) */
            Action::Error, /* 2(Expr) */
            Action::Error, /* 3(Stat) */
            Action::Error, /* 4(number) */
            Action::Error, /* 5(+) */
            Action::Error, /* 6(-) */
            Action::Shift(StateID(6)), /* 7(;) */
            Action::Error, /* 8($end) */
            Action::Error, /* 9(error) */
        ],
        /* STATE 4 */ [
            Action::Error, /* 0(Start) */
            Action::Error, /* 1(List) */
            Action::Error, /* 2(Expr) */
            Action::Error, /* 3(Stat) */
            Action::Error, /* 4(number) */
            Action::Reduce(ProdID::Expr3), /* 5(+) */
            Action::Reduce(ProdID::Expr3), /* 6(-) */
            Action::Reduce(ProdID::Expr3), /* 7(;) */
            Action::Error, /* 8($end) */
            Action::Error, /* 9(error) */
        ],
        /* STATE 5 */ [
            Action::Error, /* 0(Start) */
            Action::Error, /* 1(List) */
            Action::Error, /* 2(Expr) */
            Action::Error, /* 3(Stat) */
            Action::Error, /* 4(number) */
            Action::Shift(StateID(8)), /* 5(+) */
            Action::Shift(StateID(9)), /* 6(-) */
            Action::Shift(StateID(7)), /* 7(;) */
            Action::Error, /* 8($end) */
            Action::Error, /* 9(error) */
        ],
        /* STATE 6 */ [
            Action::Error, /* 0(Start) */
            Action::Error, /* 1(List) */
            Action::Error, /* 2(Expr) */
            Action::Error, /* 3(Stat) */
            Action::Reduce(ProdID::Stat2), /* 4(number) */
            Action::Reduce(ProdID::Stat2), /* 5(+) */
            Action::Reduce(ProdID::Stat2), /* 6(-) */
            Action::Reduce(ProdID::Stat2), /* 7(;) */
            Action::Reduce(ProdID::Stat2), /* 8($end) */
            Action::Reduce(ProdID::Stat2), /* 9(error) */
        ],
        /* STATE 7 */ [
            Action::Error, /* 0(Start) */
            Action::Error, /* 1(List) */
            Action::Error, /* 2(Expr) */
            Action::Error, /* 3(Stat) */
            Action::Reduce(ProdID::Stat1), /* 4(number) */
            Action::Reduce(ProdID::Stat1), /* 5(+) */
            Action::Reduce(ProdID::Stat1), /* 6(-) */
            Action::Reduce(ProdID::Stat1), /* 7(;) */
            Action::Reduce(ProdID::Stat1), /* 8($end) */
            Action::Reduce(ProdID::Stat1), /* 9(error) */
        ],
        /* STATE 8 */ [
            Action::Error, /* 0(Start) */
            Action::Error, /* 1(List) */
            Action::Error, /* 2(Expr) */
            Action::Error, /* 3(Stat) */
            Action::Shift(StateID(10)), /* 4(number) */
            Action::Error, /* 5(+) */
            Action::Error, /* 6(-) */
            Action::Error, /* 7(;) */
            Action::Error, /* 8($end) */
            Action::Error, /* 9(error) */
        ],
        /* STATE 9 */ [
            Action::Error, /* 0(Start) */
            Action::Error, /* 1(List) */
            Action::Error, /* 2(Expr) */
            Action::Error, /* 3(Stat) */
            Action::Shift(StateID(11)), /* 4(number) */
            Action::Error, /* 5(+) */
            Action::Error, /* 6(-) */
            Action::Error, /* 7(;) */
            Action::Error, /* 8($end) */
            Action::Error, /* 9(error) */
        ],
        /* STATE 10 */ [
            Action::Error, /* 0(Start) */
            Action::Error, /* 1(List) */
            Action::Error, /* 2(Expr) */
            Action::Error, /* 3(Stat) */
            Action::Error, /* 4(number) */
            Action::Reduce(ProdID::Expr1), /* 5(+) */
            Action::Reduce(ProdID::Expr1), /* 6(-) */
            Action::Reduce(ProdID::Expr1), /* 7(;) */
            Action::Error, /* 8($end) */
            Action::Error, /* 9(error) */
        ],
        /* STATE 11 */ [
            Action::Error, /* 0(Start) */
            Action::Error, /* 1(List) */
            Action::Error, /* 2(Expr) */
            Action::Error, /* 3(Stat) */
            Action::Error, /* 4(number) */
            Action::Reduce(ProdID::Expr2), /* 5(+) */
            Action::Reduce(ProdID::Expr2), /* 6(-) */
            Action::Reduce(ProdID::Expr2), /* 7(;) */
            Action::Error, /* 8($end) */
            Action::Error, /* 9(error) */
        ],
    ];

    const GOTO: &'static [[Option<StateID>; TokenID::COUNT_NONTERMINALS]] = &[
        /* STATE 0 */ [None, Some(StateID(1)), None, None],
        /* STATE 1 */ [None, None, Some(StateID(5)), Some(StateID(2))],
        /* STATE 2 */ [None, None, None, None],
        /* STATE 3 */ [None, None, None, None],
        /* STATE 4 */ [None, None, None, None],
        /* STATE 5 */ [None, None, None, None],
        /* STATE 6 */ [None, None, None, None],
        /* STATE 7 */ [None, None, None, None],
        /* STATE 8 */ [None, None, None, None],
        /* STATE 9 */ [None, None, None, None],
        /* STATE 10 */ [None, None, None, None],
        /* STATE 11 */ [None, None, None, None],
    ];

    const CAN_RECOVER: &'static [bool] = &[
        false, true, false, false, false, false, false, false, false, false, false, false,
    ];

    const FOLLOW: &'static [FollowSet<TokenID>] = &[FollowSet {
        nonterminal: TokenID::Expr,
        terminals: &["+", "-", ";"],
    }];
}

impl ParserData for ParData {
    type StateID = StateID;
    type TokenID = TokenID;
    type ProdID = ProdID;

    #[inline]
    fn start_state(&self) -> StateID {
        StateID(0)
    }

    #[inline]
    fn lookup(&self, state_id: StateID, token_id: TokenID) -> Action {
        Self::TAB[Into::<usize>::into(state_id)][Into::<usize>::into(token_id)]
    }

    #[inline]
    fn goto(&self, state_id: StateID, token_id: TokenID) -> Option<StateID> {
        Self::GOTO[Into::<usize>::into(state_id)]
            .get(Into::<usize>::into(token_id))
            .copied()
            .flatten()
    }

    #[inline]
    fn can_recover(&self, state_id: StateID) -> bool {
        Self::CAN_RECOVER[Into::<usize>::into(state_id)]
    }

    #[inline]
    fn production(&self, prod_id: ProdID) -> Production<TokenID> {
        ProdID::PRODUCTIONS[Into::<usize>::into(prod_id)]
    }

    fn follow_sets(&self) -> &[FollowSet<TokenID>] {
        Self::FOLLOW
    }
}
