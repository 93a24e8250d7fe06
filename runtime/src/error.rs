//! Errors a scope can raise while resolving or tearing down beans.

/////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ScopeError {
    #[error("no bean registered for {type_name} (qualifier: {qualifier:?})")]
    Unregistered {
        type_name: String,
        qualifier: Option<String>,
    },

    #[error("{count} normal-priority candidates for {type_name}; qualify the lookup or mark one primary")]
    MultipleNormal { type_name: String, count: usize },

    #[error("{count} primary candidates for {type_name}; only one primary is allowed")]
    MultiplePrimary { type_name: String, count: usize },

    #[error("{count} secondary candidates for {type_name} and no higher-priority candidate to prefer")]
    MultipleSecondary { type_name: String, count: usize },

    #[error("bean registered for {type_name} does not downcast to the requested Rust type")]
    TypeMismatch { type_name: String },

    #[error("lifecycle hook {hook} on {type_name} failed: {reason}")]
    LifecycleHookFailed {
        type_name: String,
        hook: &'static str,
        reason: String,
    },

    #[error("scope is closed")]
    Closed,
}
