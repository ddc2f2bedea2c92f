//! The automaton driver: the shift/reduce/goto loop.
//!
//! A [`Parser`] borrows an immutable table, validates it once, and then runs
//! any number of parses, reusing its stack buffers between them. Each parse
//! pulls tokens lazily from a [`TokenSource`], never holding more than one
//! unshifted lookahead, and ends in exactly one of: a complete tree, or an
//! error. The driver performs no disambiguation of its own; every decision is
//! a table lookup.

use crate::error::{InvalidTable, ParseError, Span, SyntaxError};
use crate::source::{Cancelled, Token, TokenSource};
use crate::stack::ParserStack;
use crate::table::{Action, ParserData};
use crate::tree::Node;

/// Counters for the most recent parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserStats {
    /// Tokens pulled from the source, including the end terminal.
    pub tokens: usize,
    pub shifts: usize,
    pub reductions: usize,
}

/// LR driver bound to one table.
///
/// A `Parser` is exclusively owned by the thread running it; the table it
/// borrows may be shared by any number of parsers at once.
pub struct Parser<'t, D, T>
where
    D: ParserData,
{
    data: &'t D,
    stack: ParserStack<T>,
    stats: ParserStats,
}

impl<'t, D, T> Parser<'t, D, T>
where
    D: ParserData,
    T: Token,
{
    /// Validates `data` and returns a parser for it.
    ///
    /// Validation happens here, before any token source is touched, so a
    /// malformed table is reported without consuming input.
    pub fn new(data: &'t D) -> Result<Self, InvalidTable> {
        data.validate()?;
        Ok(Self {
            data,
            stack: ParserStack::new(),
            stats: ParserStats::default(),
        })
    }

    pub fn data(&self) -> &'t D {
        self.data
    }

    pub fn stats(&self) -> ParserStats {
        self.stats.clone()
    }

    /// Parses one input.
    ///
    /// The source is consumed: it is pulled until the automaton accepts or
    /// fails, and is not usable for another parse. On failure the stack is
    /// cleared and no partial tree escapes.
    pub fn parse<S>(&mut self, source: S) -> Result<Node<T>, ParseError>
    where
        S: TokenSource<Token = T>,
    {
        self.stats = ParserStats::default();
        let result = self.run(source);
        if result.is_err() {
            self.stack.reset(self.data.start_state());
        }
        result
    }

    fn run<S>(&mut self, mut source: S) -> Result<Node<T>, ParseError>
    where
        S: TokenSource<Token = T>,
    {
        let data = self.data;
        self.stack.reset(data.start_state());
        let mut last_span = None;
        let mut token = self.pull(&mut source, &mut last_span)?;
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("{}", self.stack.dump(&token));
        }

        loop {
            let state = self.stack.top_state();
            match data.action(state, token.terminal())? {
                Action::Shift(next) => {
                    log::trace!("Shift {}", next);
                    self.stack.push(next, Node::Leaf(token));
                    self.stats.shifts += 1;
                    token = self.pull(&mut source, &mut last_span)?;
                }

                Action::Reduce(prod_id) => {
                    let prod = data.production(prod_id)?;
                    log::trace!("Reduce {}({})", prod.label, prod_id.index());
                    let children =
                        self.stack
                            .pop_k(prod.len())
                            .ok_or(InvalidTable::StackUnderflow {
                                prod: prod_id,
                                needed: prod.len(),
                                available: self.stack.depth(),
                            })?;
                    let next = data.goto(self.stack.top_state(), prod.lhs)?;
                    self.stack
                        .push(next, Node::interior(prod.lhs, prod_id, children));
                    self.stats.reductions += 1;
                }

                Action::Accept => {
                    let terminal = token.terminal();
                    if terminal != data.end_terminal() {
                        return Err(InvalidTable::AcceptOnTerminal { state, terminal }.into());
                    }
                    let depth = self.stack.depth();
                    let root = self
                        .stack
                        .take_root()
                        .ok_or(InvalidTable::AcceptDepth { depth })?;
                    log::debug!("Accept {:?}", self.stats);
                    return Ok(root);
                }

                Action::Error => {
                    let err = SyntaxError {
                        found: token.terminal(),
                        span: token.span(),
                        expected: data.expected_terminals(state),
                        states: self.stack.states().to_vec(),
                    };
                    log::debug!("Error on token {:?} in state {}", token, state);
                    return Err(err.into());
                }
            }

            if log::log_enabled!(log::Level::Trace) {
                log::trace!("{}", self.stack.dump(&token));
            }
        }
    }

    #[inline]
    fn pull<S>(&mut self, source: &mut S, last_span: &mut Option<Span>) -> Result<T, ParseError>
    where
        S: TokenSource<Token = T>,
    {
        match source.try_next() {
            Ok(Some(token)) => {
                self.stats.tokens += 1;
                if let Some(span) = token.span() {
                    *last_span = Some(span);
                }
                Ok(token)
            }
            Ok(None) => Err(ParseError::UnexpectedEndOfStream {
                span: *last_span,
                states: self.stack.states().to_vec(),
            }),
            Err(err) if err.is::<Cancelled>() => {
                log::debug!("Cancelled after {} tokens", self.stats.tokens);
                Err(ParseError::Cancelled { span: *last_span })
            }
            Err(err) => Err(ParseError::TokenSource {
                span: *last_span,
                source: err,
            }),
        }
    }
}

/// Validates `data` and parses the tokens of `source` in one call.
///
/// Convenient for one-off parses; when parsing many inputs against the same
/// table, build a [`Parser`] once to validate once and reuse its stack.
pub fn parse<D, S>(data: &D, source: S) -> Result<Node<S::Token>, ParseError>
where
    D: ParserData,
    S: TokenSource,
{
    Parser::new(data)?.parse(source)
}
