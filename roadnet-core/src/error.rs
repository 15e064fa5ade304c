//! Error types for the roadnet core library.
//!
//! Graph construction and both graph algorithms are total; the only failure
//! the core reports is a ratio the caller asked to reject.

use std::fmt;

use thiserror::Error;

use crate::road::Weight;

/// Generates a stable code enum for an error type, with `as_str`, `Display`
/// and a `code()` accessor on the error.
///
/// Variants may be unit, struct (`Variant { .. }`) or tuple (`Variant(_)`)
/// patterns.
#[doc(hidden)]
#[macro_export]
macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident
                    $( { $($fields:tt)* } )?
                    $( ( $($tuple:tt)* ) )?
                    => $code:expr
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
                    $(
                        Self::$ErrVariant $( { $($fields)* } )? $( ( $($tuple)* ) )?
                            => $CodeTy::$CodeVariant,
                    )+
                }
            }
        }
    };
}

/// Names the comparison a [`crate::Ratio`] was computed for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RatioKind {
    /// Total road length of the reduced map over the original map.
    Material,
    /// Fastest-route length on the reduced map over the original map.
    Route,
}

impl fmt::Display for RatioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Material => f.write_str("material"),
            Self::Route => f.write_str("route"),
        }
    }
}

/// Error type produced when running [`crate::MapAnalyzer`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum AnalysisError {
    /// A ratio had a zero denominator and the analyzer was configured with
    /// [`crate::DegenerateRatioPolicy::Reject`].
    #[error("{kind} ratio {numerator}/{denominator} is undefined")]
    DegenerateRatio {
        /// Which comparison produced the ratio.
        kind: RatioKind,
        /// Value measured on the barely connected map.
        numerator: Weight,
        /// Value measured on the original map.
        denominator: Weight,
    },
}

define_error_codes! {
    /// Stable codes describing [`AnalysisError`] variants.
    enum AnalysisErrorCode for AnalysisError {
        /// A ratio had a zero denominator.
        DegenerateRatio => DegenerateRatio { .. } => "ANALYSIS_DEGENERATE_RATIO",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, AnalysisError>;
