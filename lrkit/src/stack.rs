//! The parser stack.
//!
//! Kept as two parallel vectors, the way the driver reads them: `states` holds
//! one entry more than `nodes`, because the bottom entry is the start state,
//! which carries no node. Entry `i` of the logical stack is
//! `(states[i + 1], nodes[i])`.

use crate::symbol::StateId;
use crate::tree::Node;
use std::fmt::Debug;
use std::fmt::Write;

#[derive(Debug, Clone)]
pub struct ParserStack<T> {
    states: Vec<StateId>,
    nodes: Vec<Node<T>>,
}

impl<T> Default for ParserStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ParserStack<T> {
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Empties the stack, keeping its capacity, and seeds it with `start`.
    pub fn reset(&mut self, start: StateId) {
        self.states.clear();
        self.nodes.clear();
        self.states.push(start);
    }

    #[inline]
    pub fn push(&mut self, state: StateId, node: Node<T>) {
        self.states.push(state);
        self.nodes.push(node);
    }

    /// The state on top of the stack.
    ///
    /// Panics if the stack was never seeded with [`reset`](Self::reset).
    #[inline]
    pub fn top_state(&self) -> StateId {
        self.states[self.states.len() - 1]
    }

    /// Number of entries above the bottom (start state) entry.
    #[inline]
    pub fn depth(&self) -> usize {
        self.nodes.len()
    }

    /// Removes the top `k` entries, returning their nodes in original
    /// (bottom-to-top) order. Returns `None`, leaving the stack untouched,
    /// if fewer than `k` entries are present.
    #[inline]
    pub fn pop_k(&mut self, k: usize) -> Option<Vec<Node<T>>> {
        let n = self.nodes.len();
        if k > n {
            return None;
        }
        self.states.truncate(self.states.len() - k);
        Some(self.nodes.split_off(n - k))
    }

    /// Removes and returns the single remaining node, if exactly one is left.
    pub fn take_root(&mut self) -> Option<Node<T>> {
        if self.nodes.len() != 1 {
            return None;
        }
        self.states.truncate(1);
        self.nodes.pop()
    }

    /// The state sequence, bottom to top.
    pub fn states(&self) -> &[StateId] {
        &self.states
    }

    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }
}

impl<T: Debug> ParserStack<T> {
    /// Renders the stack with the incoming lookahead for trace logging:
    /// `<0>  Leaf(..)  <2>  <-  lookahead`.
    pub fn dump(&self, incoming: &T) -> String {
        let mut output = String::new();
        if self.states.is_empty() {
            output.push_str("<>");
            return output;
        }
        for (i, state) in self.states.iter().enumerate() {
            let _ = write!(output, "<{}>  ", state);
            match self.nodes.get(i) {
                Some(Node::Leaf(token)) => {
                    let _ = write!(output, "{:?}  ", token);
                }
                Some(Node::Interior {
                    nonterminal,
                    children,
                    ..
                }) => {
                    let _ = write!(output, "N{}[{}]  ", nonterminal.index(), children.len());
                }
                None => {
                    let _ = write!(output, "<-  {:?}", incoming);
                }
            }
        }
        output
    }
}
