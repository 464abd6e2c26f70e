//! Guarded clause dispatch.
//!
//! A `Dispatcher` is an ordered list of clauses. Each clause's argument
//! patterns are compiled into one array matcher over the whole argument
//! list. Dispatch is first-match: clauses are tried in declaration order and
//! the first whose patterns match and whose guard accepts the bindings wins.

use std::fmt;

use elx_value::Value;

use crate::{compile, no_match_for_args, Bindings, MatchError, Matcher, Pattern};

/// Clause body, called with the clause's bindings.
pub type Handler<R> = Box<dyn Fn(&[Value]) -> R + Send + Sync>;

/// Clause guard, called with the clause's bindings; `false` vetoes the match.
pub type Guard = Box<dyn Fn(&[Value]) -> bool + Send + Sync>;

/// One alternative of a dispatcher.
pub struct Clause<R> {
    matcher: Matcher,
    guard: Option<Guard>,
    handler: Handler<R>,
}

impl<R> Clause<R> {
    /// Clause over the positional argument `patterns`.
    pub fn new<I, P, H>(patterns: I, handler: H) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Pattern>,
        H: Fn(&[Value]) -> R + Send + Sync + 'static,
    {
        Clause {
            matcher: compile(&Pattern::array(patterns)),
            guard: None,
            handler: Box::new(handler),
        }
    }

    /// Attach a guard, replacing any existing one.
    #[must_use]
    pub fn with_guard<G>(mut self, guard: G) -> Self
    where
        G: Fn(&[Value]) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Box::new(guard));
        self
    }

    /// The argument-list pattern.
    pub fn pattern(&self) -> &Pattern {
        self.matcher.pattern()
    }

    pub fn has_guard(&self) -> bool {
        self.guard.is_some()
    }

    /// Run the matcher and guard; bindings on acceptance.
    fn accept(&self, subject: &Value) -> Option<Bindings> {
        let bindings = self.matcher.bind(subject)?;
        match &self.guard {
            Some(guard) if !guard(&bindings) => None,
            _ => Some(bindings),
        }
    }
}

impl<R> fmt::Debug for Clause<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clause")
            .field("pattern", &format_args!("{}", self.pattern()))
            .field("guarded", &self.has_guard())
            .finish_non_exhaustive()
    }
}

/// Ordered, guarded clauses resolved by first match.
pub struct Dispatcher<R> {
    clauses: Vec<Clause<R>>,
}

impl<R> Dispatcher<R> {
    pub fn new(clauses: Vec<Clause<R>>) -> Self {
        Dispatcher { clauses }
    }

    pub fn builder() -> DispatcherBuilder<R> {
        DispatcherBuilder {
            clauses: Vec::new(),
        }
    }

    pub fn clauses(&self) -> &[Clause<R>] {
        &self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Call the first clause accepting `args`.
    ///
    /// # Errors
    /// Returns `MatchError::NoMatch` carrying the rendered arguments when no
    /// clause accepts them.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(args = args.len(), clauses = self.clauses.len())
    )]
    pub fn dispatch(&self, args: &[Value]) -> Result<R, MatchError> {
        let subject = Value::list(args.to_vec());
        for (index, clause) in self.clauses.iter().enumerate() {
            if let Some(bindings) = clause.accept(&subject) {
                tracing::trace!(clause = index, bindings = bindings.len(), "clause matched");
                return Ok((clause.handler)(&bindings));
            }
            tracing::trace!(clause = index, "clause rejected");
        }
        tracing::debug!(args = %subject, "no clause matched");
        Err(no_match_for_args(args))
    }
}

impl<R> fmt::Debug for Dispatcher<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.clauses).finish()
    }
}

/// Incremental `Dispatcher` construction, clauses kept in call order.
pub struct DispatcherBuilder<R> {
    clauses: Vec<Clause<R>>,
}

impl<R> DispatcherBuilder<R> {
    #[must_use]
    pub fn clause<I, P, H>(self, patterns: I, handler: H) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Pattern>,
        H: Fn(&[Value]) -> R + Send + Sync + 'static,
    {
        self.push(Clause::new(patterns, handler))
    }

    #[must_use]
    pub fn guarded<I, P, G, H>(self, patterns: I, guard: G, handler: H) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Pattern>,
        G: Fn(&[Value]) -> bool + Send + Sync + 'static,
        H: Fn(&[Value]) -> R + Send + Sync + 'static,
    {
        self.push(Clause::new(patterns, handler).with_guard(guard))
    }

    #[must_use]
    pub fn push(mut self, clause: Clause<R>) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn build(self) -> Dispatcher<R> {
        Dispatcher::new(self.clauses)
    }
}
