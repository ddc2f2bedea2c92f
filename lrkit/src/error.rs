//! Source-location and error types reported by the engine.
//!
//! [`Position`] and [`Span`] let token sources attach locations to tokens so
//! that failures can point at the offending input. The `span!` macro builds an
//! `Option<Span>` inline, which is what [`Token::span`](crate::Token::span)
//! returns.
//!
//! The error taxonomy follows the parse contract:
//!
//! - [`SyntaxError`]: the input does not conform to the grammar at a specific
//!   token. Recoverable at the caller level by re-parsing fresh input.
//! - [`InvalidTable`]: the supplied table is internally inconsistent. This is
//!   a bug in whatever produced the table, never a property of the input.
//! - [`ParseError`]: everything a single parse invocation may fail with,
//!   including errors propagated from the token source.
//!
//! # Examples
//!
//! ```rust
//! # use lrkit::{Position, Span, span};
//! let sp = Span::new(Position::new(3, 5), Position::new(3, 10));
//! assert!(sp.start < sp.end);
//! assert_eq!(span!(3, 5, 3, 10), Some(sp));
//! ```

use crate::symbol::{NonTerminal, ProdId, StateId, Terminal};
use thiserror::Error;

/// A line/column position in source text.
///
/// The engine never interprets positions; whether they are 0- or 1-based is
/// up to the token source.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A half-open source range: `[start, end)`.
///
/// Invariants are not enforced here, but it is conventional for `start <= end`
/// in lexicographic `(line, column)` ordering.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// Build an `Option<Span>` inline from line/column coordinates.
///
/// ```rust
/// # use lrkit::span;
/// let s = span!(1, 1, 1, 5);
/// assert!(s.is_some());
/// ```
#[macro_export]
macro_rules! span {
    ($line_start:expr, $col_start:expr, $line_end:expr, $col_end:expr) => {
        Some($crate::Span {
            start: $crate::Position { line: $line_start, column: $col_start },
            end:   $crate::Position { line: $line_end,   column: $col_end   },
        })
    };
}

/// The input does not conform to the grammar at a specific token.
///
/// Carries everything needed for a good diagnostic without the engine
/// attempting recovery: the offending terminal and where it was, the
/// terminals the automaton would have accepted in its current state, and the
/// stack's state sequence (bottom to top). Use
/// [`SyntaxError::render`](crate::SyntaxError::render) for a rendering with
/// symbol names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error: unexpected terminal {} at {span:?}", .found.index())]
pub struct SyntaxError {
    pub found: Terminal,
    pub span: Option<crate::Span>,
    pub expected: Vec<Terminal>,
    pub states: Vec<StateId>,
}

impl SyntaxError {
    /// The automaton state in which the error was detected.
    pub fn state(&self) -> StateId {
        self.states.last().copied().unwrap_or_default()
    }
}

/// The supplied table is internally inconsistent.
///
/// Fatal and non-recoverable: it indicates a bug in the table generator, not
/// in the input being parsed. The engine fails fast instead of guessing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTable {
    #[error("table has no states")]
    Empty,

    #[error("table has no terminals (the end-of-input terminal is required)")]
    NoTerminals,

    #[error("table has no productions (the augmented start production is required)")]
    NoProductions,

    #[error("action row {state} has {found} entries, expected {expected}")]
    ActionRowWidth {
        state: usize,
        expected: usize,
        found: usize,
    },

    #[error("goto row {state} has {found} entries, expected {expected}")]
    GotoRowWidth {
        state: usize,
        expected: usize,
        found: usize,
    },

    #[error("table has {count} {what}, more than the identifier type can index")]
    TooLarge { what: &'static str, count: usize },

    #[error("action table has {actions} rows but goto table has {gotos}")]
    RowCountMismatch { actions: usize, gotos: usize },

    #[error("state {state} is out of range ({count} states)")]
    StateOutOfRange { state: StateId, count: usize },

    #[error("production {} is out of range ({count} productions)", .prod.index())]
    ProductionOutOfRange { prod: ProdId, count: usize },

    #[error("terminal {} in production {} is out of range", .terminal.index(), .prod.index())]
    TerminalOutOfRange { prod: ProdId, terminal: Terminal },

    #[error("non-terminal {} in production {} is out of range", .nonterminal.index(), .prod.index())]
    NonTerminalOutOfRange {
        prod: ProdId,
        nonterminal: NonTerminal,
    },

    #[error("no goto for non-terminal {} in state {state}", .nonterminal.index())]
    MissingGoto {
        state: StateId,
        nonterminal: NonTerminal,
    },

    #[error("state {state} shifts the end-of-input terminal")]
    ShiftOnEnd { state: StateId },

    #[error("state {state} accepts on non-end terminal {}", .terminal.index())]
    AcceptOnTerminal { state: StateId, terminal: Terminal },

    #[error("table has no accept action")]
    NoAccept,

    #[error("reduce by production {} needs {needed} stack entries, only {available} present", .prod.index())]
    StackUnderflow {
        prod: ProdId,
        needed: usize,
        available: usize,
    },

    #[error("accept with {depth} nodes on the stack, expected exactly one")]
    AcceptDepth { depth: usize },

    #[error("node for production {} has {found} children, expected {expected}", .prod.index())]
    ArityMismatch {
        prod: ProdId,
        expected: usize,
        found: usize,
    },
}

/// Everything a single parse invocation can fail with.
///
/// All variants terminate the parse immediately; the engine never retries and
/// never returns a partially built tree.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("invalid parse table: {0}")]
    InvalidTable(#[from] InvalidTable),

    /// The token source failed; its error is carried opaquely.
    #[error("token source error at {span:?}: {source}")]
    TokenSource {
        span: Option<Span>,
        #[source]
        source: anyhow::Error,
    },

    /// The token source ran dry before producing the end-of-input terminal.
    #[error("unexpected end of stream after {span:?}")]
    UnexpectedEndOfStream {
        span: Option<Span>,
        states: Vec<StateId>,
    },

    /// The token source was cancelled between driver steps.
    #[error("parse cancelled at {span:?}")]
    Cancelled { span: Option<Span> },
}

impl ParseError {
    /// Returns the syntax error, if this is one.
    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            ParseError::Syntax(err) => Some(err),
            _ => None,
        }
    }

    /// `true` for failures caused by the table rather than by the input.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ParseError::InvalidTable(_))
    }
}
