//! Builder utilities for configuring map analysis.
//!
//! Exposes the ratio policy selection surface and the builder used to
//! construct [`MapAnalyzer`] instances.

use crate::{analyzer::MapAnalyzer, graph::WeightDedup};

/// Decides what [`MapAnalyzer`] does with a ratio whose denominator is zero.
///
/// The original map can have no roads at all, or its fastest route can be
/// empty because the start and end coincide or are disconnected. Either way
/// one of the two comparisons divides by zero.
///
/// # Examples
/// ```
/// use roadnet_core::DegenerateRatioPolicy;
///
/// assert_eq!(DegenerateRatioPolicy::default(), DegenerateRatioPolicy::Sentinel);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DegenerateRatioPolicy {
    /// Keep the ratio and render it as `NaN` or `Infinity`.
    #[default]
    Sentinel,
    /// Fail the analysis with [`crate::AnalysisError::DegenerateRatio`].
    Reject,
}

/// Configures and constructs [`MapAnalyzer`] instances.
///
/// # Examples
/// ```
/// use roadnet_core::{AnalyzerBuilder, DegenerateRatioPolicy, WeightDedup};
///
/// let analyzer = AnalyzerBuilder::new()
///     .with_weight_dedup(WeightDedup::EdgeId)
///     .with_degenerate_ratio_policy(DegenerateRatioPolicy::Reject)
///     .build();
/// assert_eq!(analyzer.weight_dedup(), WeightDedup::EdgeId);
/// assert_eq!(analyzer.degenerate_ratio_policy(), DegenerateRatioPolicy::Reject);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AnalyzerBuilder {
    weight_dedup: WeightDedup,
    degenerate_ratio_policy: DegenerateRatioPolicy,
}

impl AnalyzerBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use roadnet_core::{AnalyzerBuilder, DegenerateRatioPolicy, WeightDedup};
    ///
    /// let builder = AnalyzerBuilder::new();
    /// assert_eq!(builder.weight_dedup(), WeightDedup::EndpointPair);
    /// assert_eq!(builder.degenerate_ratio_policy(), DegenerateRatioPolicy::Sentinel);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides how total road length counts parallel roads.
    #[must_use]
    pub fn with_weight_dedup(mut self, dedup: WeightDedup) -> Self {
        self.weight_dedup = dedup;
        self
    }

    /// Returns the configured weight dedup policy.
    #[must_use]
    pub fn weight_dedup(&self) -> WeightDedup {
        self.weight_dedup
    }

    /// Overrides the handling of ratios with a zero denominator.
    ///
    /// # Examples
    /// ```
    /// use roadnet_core::{AnalyzerBuilder, DegenerateRatioPolicy};
    ///
    /// let builder =
    ///     AnalyzerBuilder::new().with_degenerate_ratio_policy(DegenerateRatioPolicy::Reject);
    /// assert_eq!(builder.degenerate_ratio_policy(), DegenerateRatioPolicy::Reject);
    /// ```
    #[must_use]
    pub fn with_degenerate_ratio_policy(mut self, policy: DegenerateRatioPolicy) -> Self {
        self.degenerate_ratio_policy = policy;
        self
    }

    /// Returns the configured degenerate ratio policy.
    #[must_use]
    pub fn degenerate_ratio_policy(&self) -> DegenerateRatioPolicy {
        self.degenerate_ratio_policy
    }

    /// Constructs a [`MapAnalyzer`] from the current configuration.
    #[must_use]
    pub fn build(self) -> MapAnalyzer {
        MapAnalyzer::new(self.weight_dedup, self.degenerate_ratio_policy)
    }
}
