//! Error recovery.
//!
//! Two strategies run in order when the ACTION table has no entry for the
//! current lookahead:
//!
//! 1. *Local recovery* unwinds to the nearest state that can shift the
//!    `error` terminal, shifts it, and discards input until some token has a
//!    defined action.
//! 2. *Panic mode* finds the nearest stack frame with a GOTO entry for some
//!    nonterminal `A`, discards input until a token from `A`'s follow set
//!    appears, and then pretends `A` was recognized there.
//!
//! Panic mode also handles failures reported by reduce functions.

use crate::parser::{AttribOf, ErrorOf, ProdOf, StateOf};
use crate::trace::StepObserver;
use crate::{
    Attrib, ErrorCause, ParseError, Parser, ParserAction, ParserData, ParserDriver, ParserTokenID,
    Scanner, Token,
};

impl<'t, R, O> Parser<'t, R, O>
where
    R: ParserDriver,
    O: StepObserver<StateOf<R>, ProdOf<R>, R::Token, AttribOf<R>>,
{
    /// Index of the topmost frame whose state can shift `error`.
    fn first_recovery_state(&self) -> Option<usize> {
        (0..self.stack.len())
            .rev()
            .find(|&i| self.data.can_recover(self.stack.peek(i)))
    }

    /// Index of the topmost frame with a GOTO entry, and the nonterminal and
    /// target state of that entry.
    fn goto_ancestor(&self) -> Option<(usize, <R::ParserData as ParserData>::TokenID, StateOf<R>)> {
        (0..self.stack.len()).rev().find_map(|i| {
            let state = self.stack.peek(i);
            <<R::ParserData as ParserData>::TokenID as ParserTokenID>::nonterminals()
                .find_map(|nt| self.data.goto(state, nt).map(|g| (i, nt, g)))
        })
    }

    /// Pops every frame above `index` and returns their attributes.
    fn unwind_to(&mut self, index: usize) -> Vec<AttribOf<R>> {
        let n = self.stack.top_index() - index;
        self.stack.pop_n(n).into_iter().flatten().collect()
    }

    fn snapshot(&self, cause: ErrorCause, token: R::Token) -> ErrorOf<R> {
        let top = self.stack.top();
        ParseError {
            cause,
            token,
            error_symbols: Vec::new(),
            expected: self.data.expected_tokens(top),
            stack_top: top.into(),
        }
    }

    /// Shifts the `error` terminal and skips input until the parser can move.
    ///
    /// The error record lists the terminals expected in the state where the
    /// error was detected, taken before the stack is unwound, rather than
    /// those of the recovery state the `error` terminal is shifted from.
    ///
    /// On failure `lookahead` is put back to the token that raised the error.
    pub(crate) fn recover_locally<S>(&mut self, scanner: &mut S, lookahead: &mut R::Token) -> bool
    where
        S: Scanner<Token = R::Token>,
    {
        let Some(index) = self.first_recovery_state() else {
            log::debug!("no state on the stack can shift error");
            return false;
        };

        let mut error = self.snapshot(ErrorCause::Syntax, lookahead.clone());
        error.error_symbols = self.unwind_to(index);

        let error_id = <<R::ParserData as ParserData>::TokenID as ParserTokenID>::ERROR;
        let ParserAction::Shift(state) = self.data.lookup(self.stack.top(), error_id) else {
            log::debug!("state {:?} cannot shift error", self.stack.top());
            return false;
        };
        log::debug!(
            "local recovery: shift error into {:?} after unwinding to frame {}",
            state,
            index
        );
        let offending = error.token.clone();
        self.stack.push(state, Some(Attrib::Error(Box::new(error))));

        loop {
            if !self.data.lookup(state, lookahead.token_id()).is_error() {
                return true;
            }
            if lookahead.is_end() {
                log::debug!("local recovery reached end of input");
                *lookahead = offending;
                return false;
            }
            *lookahead = self.next_token(scanner);
            self.stats.discarded += 1;
        }
    }

    /// Discards input up to a synchronizing token and replaces the top of
    /// the stack with a recognized nonterminal.
    ///
    /// The stack is left untouched when this fails.
    pub(crate) fn panic_mode<S>(
        &mut self,
        scanner: &mut S,
        lookahead: &mut R::Token,
        cause: ErrorCause,
    ) -> bool
    where
        S: Scanner<Token = R::Token>,
    {
        let Some((index, nonterminal, state)) = self.goto_ancestor() else {
            log::debug!("panic mode: no goto entry on the stack");
            return false;
        };
        let Some(follow) = self.data.follow_set(nonterminal) else {
            log::debug!("panic mode: no follow set for {}", nonterminal.label());
            return false;
        };

        let mut error = self.snapshot(cause, lookahead.clone());

        while !follow.contains(lookahead.literal()) {
            if lookahead.is_end() {
                log::debug!("panic mode reached end of input");
                return false;
            }
            *lookahead = self.next_token(scanner);
            self.stats.discarded += 1;
        }

        log::debug!(
            "panic mode: recognized {} in {:?}, resuming on {:?}",
            nonterminal.label(),
            state,
            lookahead
        );
        error.error_symbols = self.unwind_to(index);
        self.stack.push(
            state,
            Some(Attrib::Recovered {
                nonterminal,
                error: Box::new(error),
            }),
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::test_parser_data::{G2, G3, StateID, TestDriver, TokenID, init_logger, scanner};
    use crate::{Attrib, ErrorCause, Parser, ParserTokenID, Token};

    #[test]
    fn local_recovery_unwinds_to_recovery_state() {
        init_logger();
        let mut parser = Parser::new(&G2, TestDriver::new(&G2));
        parser.stack.push(StateID(2), None);
        parser.stack.push(StateID(3), None);
        parser.stack.push(StateID(4), None);
        let mut input = scanner(&[(TokenID::C, "c"), (TokenID::B, "b")]);
        let mut lookahead = parser.next_token(&mut input);

        assert!(parser.recover_locally(&mut input, &mut lookahead));
        assert_eq!(lookahead.token_id, TokenID::B);
        assert_eq!(parser.stack.states(), &[StateID(0), StateID(2), StateID(3)]);
        let Some(Some(Attrib::Error(error))) = parser.stack.attribs().last() else {
            panic!("error record on top of the stack");
        };
        assert_eq!(error.stack_top, 4);
        assert_eq!(error.error_symbols.len(), 0);
        assert_eq!(error.token.literal.as_str(), "c");
        assert_eq!(parser.stats.discarded, 1);
    }

    #[test]
    fn panic_mode_strictly_shrinks_the_stack() {
        init_logger();
        let mut parser = Parser::new(&G3, TestDriver::new(&G3));
        parser.stack.push(StateID(1), None);
        parser.stack.push(StateID(3), None);
        parser.stack.push(StateID(5), None);
        let mut input = scanner(&[(TokenID::C, "c"), (TokenID::A, "a")]);
        let mut lookahead = parser.next_token(&mut input);

        let depth = parser.stack.len();
        assert!(parser.panic_mode(&mut input, &mut lookahead, ErrorCause::Syntax));
        assert!(parser.stack.len() < depth);
        assert_eq!(parser.stack.states(), &[StateID(0), StateID(1), StateID(4)]);
        assert_eq!(lookahead.token_id, TokenID::A);
        match parser.stack.attribs().last() {
            Some(Some(Attrib::Recovered { nonterminal, error })) => {
                assert_eq!(nonterminal.label(), "S");
                assert_eq!(error.stack_top, 5);
                assert_eq!(error.expected, vec!["a", "$end"]);
            }
            other => panic!("unexpected top attribute {:?}", other),
        }
    }

    #[test]
    fn failed_panic_mode_leaves_the_stack_alone() {
        init_logger();
        let mut parser = Parser::new(&G3, TestDriver::new(&G3));
        parser.stack.push(StateID(3), None);
        let mut input = scanner(&[(TokenID::C, "c"), (TokenID::B, "b")]);
        let mut lookahead = parser.next_token(&mut input);

        assert!(!parser.panic_mode(&mut input, &mut lookahead, ErrorCause::Syntax));
        assert_eq!(parser.stack.states(), &[StateID(0), StateID(3)]);
        assert!(lookahead.is_end());
        assert_eq!(parser.stats.discarded, 2);
    }
}
