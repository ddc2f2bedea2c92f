//! Parse tree nodes.
//!
//! The tree is a strict ownership tree: every interior node owns its children
//! in right-hand-side order, and the root is handed to the caller on accept.
//!
//! Left-recursive rules nest one level per input token, so tree depth grows
//! with input length. Walking, comparing and dropping a tree therefore use an
//! explicit work stack instead of recursion.

use crate::error::InvalidTable;
use crate::source::Token;
use crate::symbol::{NonTerminal, ProdId, Symbol};
use crate::table::ParserData;

/// A node in a parse tree.
#[derive(Debug, Clone)]
pub enum Node<T> {
    /// A shifted token.
    Leaf(T),
    /// A reduction: the non-terminal, the production used and one child per
    /// right-hand-side symbol (none for an ε-production).
    Interior {
        nonterminal: NonTerminal,
        production: ProdId,
        children: Vec<Node<T>>,
    },
}

impl<T> Node<T> {
    /// Builds the node for a reduction. `children` must already be in
    /// right-hand-side order.
    #[inline]
    pub fn interior(nonterminal: NonTerminal, production: ProdId, children: Vec<Node<T>>) -> Self {
        Node::Interior {
            nonterminal,
            production,
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// The token of a leaf.
    pub fn token(&self) -> Option<&T> {
        match self {
            Node::Leaf(t) => Some(t),
            Node::Interior { .. } => None,
        }
    }

    /// Children of an interior node; empty for leaves.
    pub fn children(&self) -> &[Node<T>] {
        match self {
            Node::Leaf(_) => &[],
            Node::Interior { children, .. } => children,
        }
    }

    pub fn production(&self) -> Option<ProdId> {
        match self {
            Node::Leaf(_) => None,
            Node::Interior { production, .. } => Some(*production),
        }
    }

    /// Height of the tree; a leaf or an empty interior node has depth 1.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            max = max.max(level);
            stack.extend(node.children().iter().map(|child| (child, level + 1)));
        }
        max
    }

    /// The frontier of the tree: its tokens in left-to-right order.
    pub fn leaves(&self) -> Leaves<'_, T> {
        Leaves { stack: vec![self] }
    }
}

impl<T: Token> Node<T> {
    /// The grammar symbol this node stands for.
    pub fn symbol(&self) -> Symbol {
        match self {
            Node::Leaf(t) => Symbol::Terminal(t.terminal()),
            Node::Interior { nonterminal, .. } => Symbol::NonTerminal(*nonterminal),
        }
    }

    /// Checks that every interior node matches the production recorded on it:
    /// same left-hand side, and one child per right-hand-side symbol with the
    /// matching symbol.
    pub fn check_arity<D: ParserData>(&self, data: &D) -> Result<(), InvalidTable> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            let Node::Interior {
                nonterminal,
                production,
                children,
            } = node
            else {
                continue;
            };
            let prod = data.production(*production)?;
            let matches = prod.lhs == *nonterminal
                && prod.len() == children.len()
                && prod.rhs.iter().zip(children).all(|(s, c)| *s == c.symbol());
            if !matches {
                return Err(InvalidTable::ArityMismatch {
                    prod: *production,
                    expected: prod.len(),
                    found: children.len(),
                });
            }
            stack.extend(children.iter());
        }
        Ok(())
    }

    /// Renders the tree with symbol labels, e.g. `S(S(a), a)` or `A()`.
    pub fn display<D: ParserData>(&self, data: &D) -> String {
        enum Step<'a, T> {
            Visit(&'a Node<T>),
            Emit(&'static str),
        }

        let mut out = String::new();
        let mut stack = vec![Step::Visit(self)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Emit(text) => out.push_str(text),
                Step::Visit(Node::Leaf(t)) => out.push_str(data.terminal_label(t.terminal())),
                Step::Visit(Node::Interior {
                    nonterminal,
                    children,
                    ..
                }) => {
                    out.push_str(data.nonterminal_label(*nonterminal));
                    out.push('(');
                    stack.push(Step::Emit(")"));
                    for (i, child) in children.iter().enumerate().rev() {
                        stack.push(Step::Visit(child));
                        if i > 0 {
                            stack.push(Step::Emit(", "));
                        }
                    }
                }
            }
        }
        out
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let Node::Interior { children, .. } = self else {
            return;
        };
        if children.iter().all(Node::is_leaf) {
            return;
        }
        let mut stack = std::mem::take(children);
        while let Some(mut node) = stack.pop() {
            if let Node::Interior { children, .. } = &mut node {
                stack.append(children);
            }
        }
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some(pair) = stack.pop() {
            match pair {
                (Node::Leaf(a), Node::Leaf(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (
                    Node::Interior {
                        nonterminal: n1,
                        production: p1,
                        children: c1,
                    },
                    Node::Interior {
                        nonterminal: n2,
                        production: p2,
                        children: c2,
                    },
                ) => {
                    if n1 != n2 || p1 != p2 || c1.len() != c2.len() {
                        return false;
                    }
                    stack.extend(c1.iter().zip(c2));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<T: Eq> Eq for Node<T> {}

/// Iterator over the leaves of a tree, left to right.
pub struct Leaves<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for Leaves<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Node::Leaf(t) => return Some(t),
                Node::Interior { children, .. } => self.stack.extend(children.iter().rev()),
            }
        }
        None
    }
}
