//! Tokens and the pull-based token source the driver consumes.
//!
//! A [`TokenSource`] is a lazy, finite, one-shot stream: the driver asks for
//! the next token only when it needs a new lookahead, and never holds more
//! than one token it has not yet shifted. End of input is an ordinary token
//! whose terminal is the table's end terminal ([`Terminal::END`]); a source
//! that simply runs dry before producing it makes the parse fail.

use crate::error::Span;
use crate::symbol::Terminal;
use std::fmt::Debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// A token as seen by the parser: a terminal plus whatever payload the
/// source attaches to it. The token is stored unchanged in the leaf node it
/// is shifted into.
pub trait Token: Debug {
    fn terminal(&self) -> Terminal;

    /// Source location, if the token source tracks one.
    fn span(&self) -> Option<Span> {
        None
    }
}

impl Token for Terminal {
    fn terminal(&self) -> Terminal {
        *self
    }
}

/// A plain token: terminal, arbitrary payload, optional span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicToken<V = ()> {
    pub terminal: Terminal,
    pub value: V,
    pub span: Option<Span>,
}

impl<V> BasicToken<V> {
    pub fn new(terminal: Terminal, value: V, span: Option<Span>) -> Self {
        Self {
            terminal,
            value,
            span,
        }
    }
}

impl<V: Debug> Token for BasicToken<V> {
    #[inline]
    fn terminal(&self) -> Terminal {
        self.terminal
    }

    #[inline]
    fn span(&self) -> Option<Span> {
        self.span
    }
}

/// A forward-only stream of tokens pulled on demand by the driver.
///
/// `Ok(None)` means the source is exhausted. Errors are carried opaquely and
/// terminate the parse as [`ParseError::TokenSource`](crate::ParseError).
pub trait TokenSource {
    type Token: Token;

    fn try_next(&mut self) -> anyhow::Result<Option<Self::Token>>;
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    type Token = S::Token;

    #[inline]
    fn try_next(&mut self) -> anyhow::Result<Option<Self::Token>> {
        (**self).try_next()
    }
}

/// Adapts any iterator of tokens into an infallible [`TokenSource`].
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iter: I,
    pulled: usize,
}

impl<I> IterSource<I>
where
    I: Iterator,
    I::Item: Token,
{
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: iter.into_iter(),
            pulled: 0,
        }
    }

    /// Number of tokens handed out so far.
    pub fn pulled(&self) -> usize {
        self.pulled
    }
}

impl<I> TokenSource for IterSource<I>
where
    I: Iterator,
    I::Item: Token,
{
    type Token = I::Item;

    #[inline]
    fn try_next(&mut self) -> anyhow::Result<Option<Self::Token>> {
        let next = self.iter.next();
        if next.is_some() {
            self.pulled += 1;
        }
        Ok(next)
    }
}

/// Error produced by a [`Cancellable`] source once its flag is raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("token source cancelled")]
pub struct Cancelled;

/// A shared flag used to stop a parse between driver steps.
///
/// Clones share the same flag, so one clone can be handed to the thread that
/// runs the parse and another kept by whoever decides to cancel it.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Wraps a token source so that it stops producing once a [`CancelFlag`] is
/// raised.
///
/// Cancellation is cooperative: the flag is checked each time the driver
/// pulls a token, so a reduction chain already in progress runs to the next
/// pull before the parse ends with
/// [`ParseError::Cancelled`](crate::ParseError::Cancelled).
#[derive(Debug)]
pub struct Cancellable<S> {
    inner: S,
    flag: CancelFlag,
}

impl<S: TokenSource> Cancellable<S> {
    pub fn new(inner: S, flag: CancelFlag) -> Self {
        Self { inner, flag }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: TokenSource> TokenSource for Cancellable<S> {
    type Token = S::Token;

    #[inline]
    fn try_next(&mut self) -> anyhow::Result<Option<Self::Token>> {
        if self.flag.is_cancelled() {
            return Err(Cancelled.into());
        }
        self.inner.try_next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span;

    #[test]
    fn iter_source_counts_pulls() {
        let mut src = IterSource::new([Terminal::new(1), Terminal::END]);
        assert_eq!(src.pulled(), 0);
        assert_eq!(src.try_next().unwrap(), Some(Terminal::new(1)));
        assert_eq!(src.try_next().unwrap(), Some(Terminal::END));
        assert_eq!(src.try_next().unwrap(), None);
        assert_eq!(src.pulled(), 2);
    }

    #[test]
    fn basic_token_exposes_terminal_and_span() {
        let tok = BasicToken::new(Terminal::new(4), "x", span!(0, 1, 0, 2));
        assert_eq!(tok.terminal(), Terminal::new(4));
        assert_eq!(tok.span(), span!(0, 1, 0, 2));
        assert_eq!(Terminal::new(4).span(), None);
    }

    #[test]
    fn cancellable_stops_after_flag_is_raised() {
        let flag = CancelFlag::new();
        let mut src = Cancellable::new(
            IterSource::new([Terminal::new(1), Terminal::new(1), Terminal::END]),
            flag.clone(),
        );
        assert!(src.try_next().unwrap().is_some());
        flag.cancel();
        let err = src.try_next().unwrap_err();
        assert!(err.downcast_ref::<Cancelled>().is_some());
        assert_eq!(src.into_inner().pulled(), 1);
    }

    #[test]
    fn mutable_reference_is_a_source() {
        let mut src = IterSource::new([Terminal::END]);
        {
            let mut by_ref = &mut src;
            assert_eq!(
                TokenSource::try_next(&mut by_ref).unwrap(),
                Some(Terminal::END)
            );
        }
        assert_eq!(src.pulled(), 1);
    }
}
