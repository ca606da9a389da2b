//! Validator chain: ordered asynchronous predicates over a command's options.
//!
//! Each validator resolves to `Valid` or an `Invalid` message. Validators run
//! strictly in order and the chain stops at the first failure, before any
//! option-set check or network operation. Validators must not mutate the
//! options they inspect; aliasing and defaulting happen earlier, in
//! `Command::normalize`.

use crate::session::Session;
use futures::future::BoxFuture;

/// Outcome of a single validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid(String),
}

impl Validation {
    /// Fail with a user-facing message.
    pub fn fail(message: impl Into<String>) -> Self {
        Validation::Invalid(message.into())
    }
}

/// A boxed asynchronous predicate over a command's typed options.
///
/// Validators receive the session so existence checks can issue their own
/// network calls; such validators are awaited in declaration order because
/// later ones may assume earlier network-derived state is settled.
pub type Validator<C> =
    Box<dyn for<'a> Fn(&'a C, &'a Session) -> BoxFuture<'a, Validation> + Send + Sync>;

/// Wrap a synchronous check as a validator.
pub fn check<C, F>(f: F) -> Validator<C>
where
    C: Sync,
    F: Fn(&C) -> Validation + Send + Sync + 'static,
{
    Box::new(move |cmd, _session| {
        let outcome = f(cmd);
        Box::pin(async move { outcome })
    })
}

/// Run the chain, short-circuiting on the first failure.
pub async fn run_validators<C>(
    cmd: &C,
    session: &Session,
    validators: &[Validator<C>],
) -> Result<(), String> {
    for validator in validators {
        match validator(cmd, session).await {
            Validation::Valid => continue,
            Validation::Invalid(message) => return Err(message),
        }
    }
    Ok(())
}

/// Whether `value` parses as a GUID.
pub fn is_valid_guid(value: &str) -> bool {
    uuid::Uuid::try_parse(value).is_ok()
}

/// Whether `value` looks like a site URL the platform will accept:
/// https scheme and a non-empty host.
pub fn is_valid_site_url(value: &str) -> bool {
    let Some(rest) = value.strip_prefix("https://") else {
        return false;
    };
    let host = rest.split('/').next().unwrap_or("");
    !host.is_empty()
}
