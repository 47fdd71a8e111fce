//! Small hand-built grammars shared by the unit tests.
//!
//! Token ids: nonterminals `Start`, `S`, `L`; terminals `a`, `b`, `c`,
//! `$end`, `error`.
//!
//! - `G0`: `Start → a`, no GOTO entries at all.
//! - `G1`: `S → a b`. `G1_SYNC_ON_B` adds `b` as the follow set of `S`,
//!   although no state can shift `b` after `S`.
//! - `G2`: `S → a error b`.
//! - `G3`: `L → L S | S`, `S → a b`, with `a` following both `S` and `L`.
//! - `G4`: `G3` plus `S → c | error b`; both list states shift `error`, and
//!   `a` and `c` follow `S` and `L`.
//! - `G5`: accepts in the start state.

use crate::{
    Attrib, FollowSet, IterScanner, ParseError, ParserAction, ParserData, ParserDriver,
    ParserProdID, ParserStateID, ParserTokenID, Production, SemanticError, Span, Token,
};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use smartstring::alias::String;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(usize)]
pub enum TokenID {
    // Nonterminals:
    Start = 0,
    S = 1,
    L = 2,

    // Terminals:
    A = 3,
    B = 4,
    C = 5,
    End = 6,
    Error = 7,
}

impl TokenID {
    pub const LABELS: &'static [&'static str] = &[
        "Start", // 0
        "S",     // 1
        "L",     // 2
        "a",     // 3
        "b",     // 4
        "c",     // 5
        "$end",  // 6
        "error", // 7
    ];
}

impl ParserTokenID for TokenID {
    const COUNT_NONTERMINALS: usize = 3;
    const COUNT_TERMINALS: usize = 5;
    const COUNT: usize = 8;
    const END: Self = TokenID::End;
    const ERROR: Self = TokenID::Error;

    fn label(&self) -> &'static str {
        TokenID::LABELS[Into::<usize>::into(*self)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateID(pub u8);
impl ParserStateID for StateID {}

impl From<StateID> for usize {
    fn from(s: StateID) -> Self {
        s.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProdID(pub u8);
impl ParserProdID for ProdID {}

impl From<ProdID> for usize {
    fn from(p: ProdID) -> Self {
        p.0 as usize
    }
}

#[derive(Debug, Clone)]
pub struct TestToken {
    pub token_id: TokenID,
    pub literal: String,
    pub span: Option<Span>,
}

impl Token for TestToken {
    type TokenID = TokenID;

    fn token_id(&self) -> TokenID {
        self.token_id
    }

    fn literal(&self) -> &[u8] {
        self.literal.as_bytes()
    }

    fn span(&self) -> Option<Span> {
        self.span
    }
}

pub fn tok(token_id: TokenID, literal: &str) -> TestToken {
    TestToken {
        token_id,
        literal: literal.into(),
        span: None,
    }
}

pub fn scanner(input: &[(TokenID, &str)]) -> IterScanner<std::vec::IntoIter<TestToken>> {
    let tokens: Vec<_> = input.iter().map(|(id, lit)| tok(*id, lit)).collect();
    IterScanner::new(tokens, tok(TokenID::End, ""))
}

type Action = ParserAction<StateID, ProdID>;

const E: Action = ParserAction::Error;
const ACC: Action = ParserAction::Accept;

const fn s(n: u8) -> Action {
    ParserAction::Shift(StateID(n))
}

const fn r(n: u8) -> Action {
    ParserAction::Reduce(ProdID(n))
}

const NO_GOTO: [Option<StateID>; 3] = [None, None, None];

const fn prod(lhs: TokenID, size: usize, label: &'static str) -> Production<TokenID> {
    Production { lhs, size, label }
}

pub struct Grammar {
    /// Indexed by state, then by token id.
    actions: &'static [[Action; 8]],
    /// Indexed by state, then by nonterminal id.
    gotos: &'static [[Option<StateID>; 3]],
    recover: &'static [bool],
    prods: &'static [Production<TokenID>],
    follow: &'static [FollowSet<TokenID>],
}

impl ParserData for Grammar {
    type StateID = StateID;
    type TokenID = TokenID;
    type ProdID = ProdID;

    fn start_state(&self) -> StateID {
        StateID(0)
    }

    fn lookup(&self, state_id: StateID, token_id: TokenID) -> Action {
        self.actions[usize::from(state_id)][usize::from(token_id)]
    }

    fn goto(&self, state_id: StateID, token_id: TokenID) -> Option<StateID> {
        self.gotos[usize::from(state_id)]
            .get(usize::from(token_id))
            .copied()
            .flatten()
    }

    fn can_recover(&self, state_id: StateID) -> bool {
        self.recover[usize::from(state_id)]
    }

    fn production(&self, prod_id: ProdID) -> Production<TokenID> {
        self.prods[usize::from(prod_id)]
    }

    fn follow_sets(&self) -> &[FollowSet<TokenID>] {
        self.follow
    }
}

//                       Start S  L  a     b     c  $end   error
pub static G0: Grammar = Grammar {
    actions: &[
        [E, E, E, s(1), E, E, E, E], // 0
        [E, E, E, E, E, E, ACC, E],  // 1
    ],
    gotos: &[NO_GOTO, NO_GOTO],
    recover: &[false, false],
    prods: &[prod(TokenID::Start, 1, "Start → a")],
    follow: &[],
};

const G1_ACTIONS: &[[Action; 8]] = &[
    [E, E, E, s(2), E, E, E, E], // 0
    [E, E, E, E, E, E, ACC, E],  // 1
    [E, E, E, E, s(3), E, E, E], // 2
    [E, E, E, E, E, E, r(1), E], // 3
];

const G1_GOTOS: &[[Option<StateID>; 3]] = &[
    [None, Some(StateID(1)), None], // 0
    NO_GOTO,
    NO_GOTO,
    NO_GOTO,
];

const G1_PRODS: &[Production<TokenID>] = &[
    prod(TokenID::Start, 1, "Start → S"),
    prod(TokenID::S, 2, "S → a b"),
];

pub static G1: Grammar = Grammar {
    actions: G1_ACTIONS,
    gotos: G1_GOTOS,
    recover: &[false; 4],
    prods: G1_PRODS,
    follow: &[],
};

pub static G1_SYNC_ON_B: Grammar = Grammar {
    actions: G1_ACTIONS,
    gotos: G1_GOTOS,
    recover: &[false; 4],
    prods: G1_PRODS,
    follow: &[FollowSet {
        nonterminal: TokenID::S,
        terminals: &["b"],
    }],
};

pub static G2: Grammar = Grammar {
    actions: &[
        [E, E, E, s(2), E, E, E, E], // 0
        [E, E, E, E, E, E, ACC, E],  // 1
        [E, E, E, E, E, E, E, s(3)], // 2
        [E, E, E, E, s(4), E, E, E], // 3
        [E, E, E, E, E, E, r(1), E], // 4
    ],
    gotos: &[[None, Some(StateID(1)), None], NO_GOTO, NO_GOTO, NO_GOTO, NO_GOTO],
    recover: &[false, false, true, false, false],
    prods: &[
        prod(TokenID::Start, 1, "Start → S"),
        prod(TokenID::S, 3, "S → a error b"),
    ],
    follow: &[],
};

pub static G3: Grammar = Grammar {
    actions: &[
        [E, E, E, s(3), E, E, E, E],    // 0
        [E, E, E, s(3), E, E, ACC, E],  // 1
        [E, E, E, r(2), E, E, r(2), E], // 2
        [E, E, E, E, s(5), E, E, E],    // 3
        [E, E, E, r(1), E, E, r(1), E], // 4
        [E, E, E, r(3), E, E, r(3), E], // 5
    ],
    gotos: &[
        [None, Some(StateID(2)), Some(StateID(1))], // 0
        [None, Some(StateID(4)), None],             // 1
        NO_GOTO,
        NO_GOTO,
        NO_GOTO,
        NO_GOTO,
    ],
    recover: &[false; 6],
    prods: &[
        prod(TokenID::Start, 1, "Start → L"),
        prod(TokenID::L, 2, "L → L S"),
        prod(TokenID::L, 1, "L → S"),
        prod(TokenID::S, 2, "S → a b"),
    ],
    follow: &[
        FollowSet {
            nonterminal: TokenID::S,
            terminals: &["a"],
        },
        FollowSet {
            nonterminal: TokenID::L,
            terminals: &["a"],
        },
    ],
};

pub static G4: Grammar = Grammar {
    actions: &[
        [E, E, E, s(3), E, s(8), E, s(6)],          // 0
        [E, E, E, s(3), E, s(8), ACC, s(6)],        // 1
        [E, E, E, r(2), E, r(2), r(2), r(2)],       // 2
        [E, E, E, E, s(5), E, E, E],                // 3
        [E, E, E, r(1), E, r(1), r(1), r(1)],       // 4
        [E, E, E, r(3), E, r(3), r(3), r(3)],       // 5
        [E, E, E, E, s(7), E, E, E],                // 6
        [E, E, E, r(5), E, r(5), r(5), r(5)],       // 7
        [E, E, E, r(4), E, r(4), r(4), r(4)],       // 8
    ],
    gotos: &[
        [None, Some(StateID(2)), Some(StateID(1))], // 0
        [None, Some(StateID(4)), None],             // 1
        NO_GOTO,
        NO_GOTO,
        NO_GOTO,
        NO_GOTO,
        NO_GOTO,
        NO_GOTO,
        NO_GOTO,
    ],
    recover: &[true, true, false, false, false, false, false, false, false],
    prods: &[
        prod(TokenID::Start, 1, "Start → L"),
        prod(TokenID::L, 2, "L → L S"),
        prod(TokenID::L, 1, "L → S"),
        prod(TokenID::S, 2, "S → a b"),
        prod(TokenID::S, 1, "S → c"),
        prod(TokenID::S, 2, "S → error b"),
    ],
    follow: &[
        FollowSet {
            nonterminal: TokenID::S,
            terminals: &["a", "c"],
        },
        FollowSet {
            nonterminal: TokenID::L,
            terminals: &["a", "c"],
        },
    ],
};

pub static G5: Grammar = Grammar {
    actions: &[[E, E, E, E, E, E, ACC, E]],
    gotos: &[NO_GOTO],
    recover: &[false],
    prods: &[prod(TokenID::Start, 0, "Start → ε")],
    follow: &[],
};

pub type TestValue = Vec<String>;

/// Builds list values for the test grammars.
///
/// An `S` becomes one item with its right-hand side joined by spaces; any
/// other nonterminal concatenates the items of its children. Error and
/// recovered attributes are recorded in `errors`. A token spelled `bad` makes
/// the reduction fail.
pub struct TestDriver {
    grammar: &'static Grammar,
    pub errors: Vec<ParseError<TestToken, TestValue>>,
}

impl TestDriver {
    pub fn new(grammar: &'static Grammar) -> Self {
        Self {
            grammar,
            errors: Vec::new(),
        }
    }
}

impl ParserDriver for TestDriver {
    type ParserData = Grammar;
    type Token = TestToken;
    type Value = TestValue;

    fn reduce(
        &mut self,
        prod_id: ProdID,
        attribs: Vec<Attrib<TestToken, TestValue>>,
    ) -> Result<Attrib<TestToken, TestValue>, SemanticError> {
        let prod = self.grammar.production(prod_id);
        let mut items = TestValue::new();
        for attrib in attribs {
            match attrib {
                Attrib::Token(t) if t.literal.as_str() == "bad" => {
                    return Err(SemanticError::new(
                        format!("bad {}", t.token_id.label()),
                        t.span,
                    ));
                }
                Attrib::Token(t) => items.push(t.literal),
                Attrib::Value(v) => items.extend(v),
                Attrib::Error(e) => {
                    self.errors.push(*e);
                    items.push("<error>".into());
                }
                Attrib::Recovered { error, .. } => {
                    self.errors.push(*error);
                    items.push("<recovered>".into());
                }
            }
        }
        if prod.lhs == TokenID::S {
            let joined: Vec<&str> = items.iter().map(|s| s.as_str()).collect();
            items = vec![joined.join(" ").into()];
        }
        Ok(Attrib::Value(items))
    }
}
