//! Per-step observers for the driver loop.
//!
//! The driver calls [`StepObserver::step`] once per action it is about to
//! execute. Observers only watch; they cannot influence the parse.

use crate::{ParserAction, Stack};
use std::fmt::Debug;

pub trait StepObserver<S, P, T, A> {
    fn step(&mut self, stack: &Stack<S, A>, lookahead: &T, action: &ParserAction<S, P>);
}

/// The default observer; does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl<S, P, T, A> StepObserver<S, P, T, A> for NoTrace {
    #[inline(always)]
    fn step(&mut self, _stack: &Stack<S, A>, _lookahead: &T, _action: &ParserAction<S, P>) {}
}

/// Logs every step through `log::trace!`, followed by a dump of the stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTrace;

impl<S, P, T, A> StepObserver<S, P, T, A> for LogTrace
where
    S: Copy + Debug,
    P: Debug,
    T: Debug,
    A: Debug,
{
    fn step(&mut self, stack: &Stack<S, A>, lookahead: &T, action: &ParserAction<S, P>) {
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("S{:?} {:?} {:?}", stack.top(), lookahead, action);
            log::trace!("{}", stack);
        }
    }
}
