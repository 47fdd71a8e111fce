//! The parser stack: parallel sequences of states and attributes.

use std::fmt;

/// Initial capacity reserved for both sequences.
pub const INITIAL_STACK_SIZE: usize = 100;

/// A shift-reduce stack of `(state, attribute)` frames.
///
/// States and attributes live in two vectors of equal length. The bottom
/// frame holds the start state and no attribute; it is only ever popped by an
/// accepting parse.
#[derive(Debug, Clone)]
pub struct Stack<S, A> {
    states: Vec<S>,
    attribs: Vec<Option<A>>,
}

impl<S, A> Stack<S, A>
where
    S: Copy,
{
    pub fn new(start: S) -> Self {
        Self::with_capacity(start, INITIAL_STACK_SIZE)
    }

    pub fn with_capacity(start: S, capacity: usize) -> Self {
        let mut stack = Self {
            states: Vec::with_capacity(capacity),
            attribs: Vec::with_capacity(capacity),
        };
        stack.push(start, None);
        stack
    }

    /// Truncates the stack and seeds it with the bottom frame.
    pub fn reset(&mut self, start: S) {
        self.states.clear();
        self.attribs.clear();
        self.push(start, None);
    }

    #[inline]
    pub fn push(&mut self, state: S, attrib: Option<A>) {
        self.states.push(state);
        self.attribs.push(attrib);
    }

    /// Removes the `n` topmost frames and returns their attributes in the
    /// order they were pushed.
    ///
    /// Panics if `n` exceeds the depth of the stack.
    #[inline]
    pub fn pop_n(&mut self, n: usize) -> Vec<Option<A>> {
        assert!(n <= self.states.len(), "stack underflow");
        let lo = self.states.len() - n;
        self.states.truncate(lo);
        self.attribs.split_off(lo)
    }

    /// State of the topmost frame.
    #[inline]
    pub fn top(&self) -> S {
        self.states[self.states.len() - 1]
    }

    /// State of the frame at `index`, counted from the bottom.
    #[inline]
    pub fn peek(&self, index: usize) -> S {
        self.states[index]
    }

    #[inline]
    pub fn top_index(&self) -> usize {
        self.states.len() - 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> &[S] {
        &self.states
    }

    pub fn attribs(&self) -> &[Option<A>] {
        &self.attribs
    }
}

impl<S, A> fmt::Display for Stack<S, A>
where
    S: fmt::Debug,
    A: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "stack:")?;
        for (i, (state, attrib)) in self.states.iter().zip(self.attribs.iter()).enumerate() {
            match attrib {
                Some(attrib) => writeln!(f, "\t{}: {:?} , {:?}", i, state, attrib)?,
                None => writeln!(f, "\t{}: {:?} , nil", i, state)?,
            }
        }
        Ok(())
    }
}
