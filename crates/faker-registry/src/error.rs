//! Error types for the faker-registry crate.
//!
//! Dispatch failures surface as [`FakerError`]; failures raised by an
//! individual generator function surface as [`GenerateError`] and reach the
//! caller wrapped in [`FakerError::GenerationFailure`].

use thiserror::Error;

/// Errors raised while resolving, binding, or invoking a generator function.
///
/// Lookup and binding run before any random draw, so none of these leave the
/// instance's random source advanced when raised ahead of invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FakerError {
    /// No function with this name exists in the registry.
    #[error("unknown function '{name}'")]
    UnknownFunction {
        /// The name that was not found.
        name: String,
    },

    /// A mandatory parameter was omitted and declares no default.
    #[error("function '{function}' requires parameter '{parameter}'")]
    MissingParameter {
        /// Function being invoked.
        function: String,
        /// Name of the missing parameter.
        parameter: String,
    },

    /// The invocation itself was malformed.
    #[error("invalid invocation: {message}")]
    InvalidInvocation {
        /// Description of what was wrong with the call.
        message: String,
    },

    /// The generator function rejected its parameters or failed to produce a
    /// value.
    #[error("function '{function}' failed: {source}")]
    GenerationFailure {
        /// Function that failed.
        function: String,
        /// Failure reported by the generator.
        #[source]
        source: GenerateError,
    },
}

/// Errors reported by generator functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A bound parameter value could not be interpreted as its declared type.
    #[error("parameter '{parameter}' has invalid value '{value}': {message}")]
    InvalidParameter {
        /// Parameter name.
        parameter: String,
        /// Raw bound value.
        value: String,
        /// Parser error message.
        message: String,
    },

    /// A parameter the generator relies on was not bound.
    #[error("parameter '{parameter}' was not supplied")]
    MissingParameter {
        /// Parameter name.
        parameter: String,
    },

    /// The lower bound of a range is greater than its upper bound.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Lower bound as supplied.
        min: String,
        /// Upper bound as supplied.
        max: String,
    },

    /// A selection was requested from an empty list.
    #[error("parameter '{parameter}' must contain at least one value")]
    EmptyChoice {
        /// Parameter holding the list.
        parameter: String,
    },
}
