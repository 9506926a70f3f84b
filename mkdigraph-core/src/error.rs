//! Error types for the mkdigraph core library.
//!
//! Defines the configuration error enum exposed by the public API, the
//! decoder error used by the output readers, and a convenient result alias.

use std::io;

use thiserror::Error;

/// Generates a stable error-code enum for an error type.
///
/// Each listed variant maps to a machine-readable string which the CLI logs as
/// a structured field. Provider crates reuse the macro for their own errors.
#[doc(hidden)]
#[macro_export]
macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::core::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced when a [`crate::DigraphConfigBuilder`] holds values outside
/// the generator's parameter space.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DigraphError {
    /// The vertex count was negative or does not fit in `usize`.
    #[error("invalid number of vertices: {got}")]
    InvalidVertexCount {
        /// The rejected vertex count.
        got: i64,
    },
    /// The per-vertex trial count was negative or does not fit in `usize`.
    #[error("invalid maximum number of outgoing edges: {got}")]
    InvalidTrialCount {
        /// The rejected trial count.
        got: i64,
    },
    /// The edge probability was NaN or outside `[0, 1]`.
    #[error("invalid edge probability: {got}")]
    InvalidProbability {
        /// The rejected probability.
        got: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`DigraphError`] variants.
    enum DigraphErrorCode for DigraphError {
        /// The vertex count was out of range.
        InvalidVertexCount => InvalidVertexCount { .. } => "DIGRAPH_INVALID_VERTEX_COUNT",
        /// The trial count was out of range.
        InvalidTrialCount => InvalidTrialCount { .. } => "DIGRAPH_INVALID_TRIAL_COUNT",
        /// The edge probability was out of range.
        InvalidProbability => InvalidProbability { .. } => "DIGRAPH_INVALID_PROBABILITY",
    }
}

/// Error produced while decoding a serialized digraph.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Reading from the underlying source failed.
    #[error("failed to read encoded digraph: {0}")]
    Io(#[from] io::Error),
    /// A line did not match the expected record shape.
    #[error("line {line}: malformed record `{content}`")]
    MalformedLine {
        /// One-based line number of the offending line.
        line: usize,
        /// Raw line contents.
        content: String,
    },
    /// A DOT document did not start with `digraph {`.
    #[error("missing `digraph {{` header")]
    MissingHeader,
    /// A DOT document ended before its closing brace.
    #[error("missing closing `}}`")]
    MissingFooter,
    /// A DOT document contained data after its closing brace.
    #[error("line {line}: unexpected content after closing `}}`")]
    TrailingContent {
        /// One-based line number of the offending line.
        line: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DecodeError`] variants.
    enum DecodeErrorCode for DecodeError {
        /// Reading from the underlying source failed.
        Io => Io(..) => "DECODE_IO",
        /// A line did not match the expected record shape.
        MalformedLine => MalformedLine { .. } => "DECODE_MALFORMED_LINE",
        /// A DOT document did not start with `digraph {`.
        MissingHeader => MissingHeader => "DECODE_MISSING_HEADER",
        /// A DOT document ended before its closing brace.
        MissingFooter => MissingFooter => "DECODE_MISSING_FOOTER",
        /// A DOT document contained data after its closing brace.
        TrailingContent => TrailingContent { .. } => "DECODE_TRAILING_CONTENT",
    }
}

/// Convenient result alias for configuration operations.
pub type Result<T, E = DigraphError> = std::result::Result<T, E>;
