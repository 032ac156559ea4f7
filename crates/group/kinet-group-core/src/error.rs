//! Error taxonomy for the group engine.
//!
//! There is no I/O here and no transient failure mode: every error is a
//! programming error at the application boundary (a bad key accessor or a
//! failing lifecycle callback) and is surfaced to the caller, never retried.

use thiserror::Error;

/// Failure raised inside an application-supplied lifecycle callback.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum GroupError {
    /// The key accessor produced the same key twice within one snapshot.
    /// Keys must be unique per snapshot; display order for colliding keys
    /// would be undefined, so this is rejected up front.
    #[error("key accessor produced duplicate key {key} within one snapshot")]
    DuplicateKey { key: String },

    /// A lifecycle callback failed while dispatching. Nodes dispatched before
    /// the fault keep their in-flight transitions; the rest of the dispatch
    /// pass is abandoned.
    #[error("lifecycle callback failed for key {key}")]
    Callback {
        key: String,
        #[source]
        source: CallbackError,
    },
}
