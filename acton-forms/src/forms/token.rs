//! Security-token collaborator
//!
//! Nonce fields are not rendered by this crate. Their `name` and `value` are
//! handed to the host's token emitter and its output is spliced into the form
//! verbatim. Generating and verifying tokens stays with the host.

/// Emits the markup for an anti-forgery token
///
/// Implemented for closures, so a host can pass its own token helper:
///
/// ```rust
/// use acton_forms::forms::TokenEmitter;
///
/// let emitter = |name: &str, action: &str| {
///     format!(r#"<input type="hidden" name="{name}" value="token-for-{action}">"#)
/// };
/// assert_eq!(
///     emitter.emit("_token", "signup"),
///     r#"<input type="hidden" name="_token" value="token-for-signup">"#
/// );
/// ```
pub trait TokenEmitter: Send + Sync {
    /// Markup for the token field `name`, bound to the action `value`
    fn emit(&self, name: &str, value: &str) -> String;
}

impl<F> TokenEmitter for F
where
    F: Fn(&str, &str) -> String + Send + Sync,
{
    fn emit(&self, name: &str, value: &str) -> String {
        self(name, value)
    }
}
