use crate::context::RequestContext;
use futures::future::BoxFuture;
use regex_automata::meta::{BuildError, Regex};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Synchronous origin predicate.
pub type OriginPredicateFn =
    dyn for<'a> Fn(&RequestContext<'a>) -> MatchOutcome + Send + Sync;

/// Asynchronous origin predicate. Evaluation suspends until it resolves; no
/// lock is held while waiting and no other request is blocked.
pub type AsyncOriginPredicateFn =
    dyn for<'a> Fn(&'a RequestContext<'a>) -> BoxFuture<'a, MatchOutcome> + Send + Sync;

/// The configured origin policy.
#[derive(Clone, Default)]
pub enum Origin {
    /// Accept every origin, mirroring the declared value (`*` when absent).
    #[default]
    Any,
    /// Never emit an allow-origin header.
    Disabled,
    /// Evaluate rules in order; the first unconditional accept wins.
    Rules(Vec<OriginRule>),
}

/// One element of an origin rule set.
#[derive(Clone)]
pub enum OriginRule {
    /// Bare host fragments (`example.com`) match by substring; values
    /// containing `://` require whole-string equality.
    Literal(String),
    /// Unanchored match against the declared origin, compiled as written.
    Pattern(Regex),
    Predicate(Arc<OriginPredicateFn>),
    AsyncPredicate(Arc<AsyncOriginPredicateFn>),
    /// Recursively evaluated; any accepting sub-rule accepts the group.
    List(Vec<OriginRule>),
}

/// Verdict a predicate hands back to the matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Accept, mirroring the declared origin. Short-circuits the rule set.
    Accept,
    /// Accept with an explicit origin value. Values collected from the whole
    /// rule set are emitted as one comma-space joined list; kept for policies
    /// migrated from predicates that returned static origin strings.
    AcceptAs(String),
    /// Re-run literal matching over each element; any match accepts.
    AcceptAny(Vec<String>),
    Reject,
}

impl MatchOutcome {
    pub fn accept() -> Self {
        Self::Accept
    }

    pub fn accept_as<S: Into<String>>(value: S) -> Self {
        Self::AcceptAs(value.into())
    }

    pub fn accept_any<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::AcceptAny(values.into_iter().map(Into::into).collect())
    }

    pub fn reject() -> Self {
        Self::Reject
    }
}

impl From<bool> for MatchOutcome {
    fn from(value: bool) -> Self {
        if value {
            MatchOutcome::Accept
        } else {
            MatchOutcome::Reject
        }
    }
}

impl<T> From<Option<T>> for MatchOutcome
where
    T: Into<String>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => MatchOutcome::AcceptAs(inner.into()),
            None => MatchOutcome::Reject,
        }
    }
}

/// A failing rule rejects its element instead of failing the request.
impl<E> From<Result<MatchOutcome, E>> for MatchOutcome {
    fn from(value: Result<MatchOutcome, E>) -> Self {
        value.unwrap_or(MatchOutcome::Reject)
    }
}

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern")]
    Build(#[source] Box<BuildError>),
    #[error("compiling origin pattern exceeded the configured budget")]
    Timeout { elapsed: Duration, budget: Duration },
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 50_000;
const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Outcome of matching the configured policy against one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum OriginVerdict {
    /// Echo the declared origin (`*` when absent); `Vary: *`.
    Any,
    /// A top-level literal `*` is configured; echo `*`; `Vary: *`.
    Wildcard,
    /// A rule accepted unconditionally; echo the declared origin;
    /// `Vary: Origin`.
    Mirror,
    /// Only explicit values were accepted; echo the joined list;
    /// `Vary: Origin`.
    Collected(String),
    /// No allow-origin header; `Vary: Origin`.
    Disallow,
}

pub(crate) enum RuleOutcome {
    Accept,
    AcceptAs(String),
    Reject,
}

impl OriginRule {
    pub fn literal<S: Into<String>>(value: S) -> Self {
        Self::Literal(value.into())
    }

    pub fn pattern(regex: Regex) -> Self {
        Self::Pattern(regex)
    }

    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        Self::compile_pattern(pattern, PATTERN_COMPILE_BUDGET).map(Self::Pattern)
    }

    fn compile_pattern(pattern: &str, budget: Duration) -> Result<Regex, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let started = Instant::now();
        let regex = Regex::new(pattern).map_err(|err| PatternError::Build(Box::new(err)))?;
        let elapsed = started.elapsed();
        if elapsed > budget {
            return Err(PatternError::Timeout { elapsed, budget });
        }

        Ok(regex)
    }

    #[cfg(test)]
    pub(crate) fn pattern_str_with_budget(
        pattern: &str,
        budget: Duration,
    ) -> Result<Self, PatternError> {
        Self::compile_pattern(pattern, budget).map(Self::Pattern)
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: for<'a> Fn(&RequestContext<'a>) -> MatchOutcome + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    pub fn async_predicate<F>(predicate: F) -> Self
    where
        F: for<'a> Fn(&'a RequestContext<'a>) -> BoxFuture<'a, MatchOutcome>
            + Send
            + Sync
            + 'static,
    {
        Self::AsyncPredicate(Arc::new(predicate))
    }

    pub fn group<I, T>(rules: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginRule>,
    {
        Self::List(rules.into_iter().map(Into::into).collect())
    }

    pub(crate) fn evaluate<'a>(
        &'a self,
        declared: &'a str,
        ctx: &'a RequestContext<'a>,
    ) -> BoxFuture<'a, RuleOutcome> {
        Box::pin(async move {
            match self {
                OriginRule::Literal(value) => literal_accepts(value, declared).into(),
                OriginRule::Pattern(regex) => regex.is_match(declared.as_bytes()).into(),
                OriginRule::Predicate(predicate) => interpret(predicate(ctx), declared),
                OriginRule::AsyncPredicate(predicate) => {
                    interpret(predicate(ctx).await, declared)
                }
                OriginRule::List(rules) => {
                    for rule in rules {
                        // Explicit values inside a group coerce to an
                        // unconditional accept; collection is top-level only.
                        if !matches!(rule.evaluate(declared, ctx).await, RuleOutcome::Reject) {
                            return RuleOutcome::Accept;
                        }
                    }
                    RuleOutcome::Reject
                }
            }
        })
    }
}

fn interpret(outcome: MatchOutcome, declared: &str) -> RuleOutcome {
    match outcome {
        MatchOutcome::Accept => RuleOutcome::Accept,
        MatchOutcome::AcceptAs(value) if value.is_empty() => RuleOutcome::Reject,
        MatchOutcome::AcceptAs(value) => RuleOutcome::AcceptAs(value),
        MatchOutcome::AcceptAny(values) => values
            .iter()
            .any(|value| literal_accepts(value, declared))
            .into(),
        MatchOutcome::Reject => RuleOutcome::Reject,
    }
}

fn literal_accepts(value: &str, declared: &str) -> bool {
    if value.contains("://") {
        value == declared
    } else {
        declared.contains(value)
    }
}

impl From<bool> for RuleOutcome {
    fn from(value: bool) -> Self {
        if value {
            RuleOutcome::Accept
        } else {
            RuleOutcome::Reject
        }
    }
}

impl From<String> for OriginRule {
    fn from(value: String) -> Self {
        OriginRule::Literal(value)
    }
}

impl From<&str> for OriginRule {
    fn from(value: &str) -> Self {
        OriginRule::Literal(value.to_owned())
    }
}

impl From<Regex> for OriginRule {
    fn from(value: Regex) -> Self {
        OriginRule::Pattern(value)
    }
}

impl From<Vec<OriginRule>> for OriginRule {
    fn from(value: Vec<OriginRule>) -> Self {
        OriginRule::List(value)
    }
}

impl Origin {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn disabled() -> Self {
        Self::Disabled
    }

    pub fn list<I, T>(rules: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginRule>,
    {
        Self::Rules(rules.into_iter().map(Into::into).collect())
    }

    /// Wraps a single rule into a one-element rule set.
    pub fn rule(rule: impl Into<OriginRule>) -> Self {
        Self::Rules(vec![rule.into()])
    }

    /// Fast path computed once at engine construction: a top-level literal
    /// `*` short-circuits every evaluation.
    pub(crate) fn has_wildcard_literal(&self) -> bool {
        match self {
            Origin::Rules(rules) => rules
                .iter()
                .any(|rule| matches!(rule, OriginRule::Literal(value) if value == "*")),
            _ => false,
        }
    }

    pub(crate) async fn resolve(
        &self,
        wildcard_literal: bool,
        ctx: &RequestContext<'_>,
    ) -> OriginVerdict {
        if let Some(origin) = ctx.origin
            && origin.len() > MAX_ORIGIN_LENGTH
        {
            return OriginVerdict::Disallow;
        }

        match self {
            Origin::Any => OriginVerdict::Any,
            Origin::Disabled => OriginVerdict::Disallow,
            Origin::Rules(_) if wildcard_literal => OriginVerdict::Wildcard,
            Origin::Rules(rules) if rules.is_empty() => OriginVerdict::Disallow,
            Origin::Rules(rules) => {
                let declared = ctx.origin.unwrap_or("");
                let mut collected: Vec<String> = Vec::new();

                for rule in rules {
                    match rule.evaluate(declared, ctx).await {
                        RuleOutcome::Accept => return OriginVerdict::Mirror,
                        RuleOutcome::AcceptAs(value) => collected.push(value),
                        RuleOutcome::Reject => {}
                    }
                }

                if collected.is_empty() {
                    OriginVerdict::Disallow
                } else {
                    OriginVerdict::Collected(collected.join(", "))
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
