//! Map analysis orchestration.
//!
//! Provides the [`MapAnalyzer`] entry point, which runs both graph algorithms
//! on the original map, rebuilds the barely connected map, runs the fastest
//! route again on it and compares the two.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    Result,
    builder::DegenerateRatioPolicy,
    error::{AnalysisError, RatioKind},
    graph::{Graph, WeightDedup},
    ratio::Ratio,
    report::AnalysisReport,
    shortest_path::shortest_path,
    source::RoadSource,
    spanning::spanning_subgraph,
};

/// Entry point for analysing a road map.
///
/// # Examples
/// ```
/// use roadnet_core::{AnalyzerBuilder, EdgeId, Road, RoadMap};
///
/// let map = RoadMap::new(
///     "triangle",
///     "A",
///     "C",
///     vec![
///         Road::new("A", "B", 5, EdgeId::new(1)),
///         Road::new("B", "C", 3, EdgeId::new(2)),
///         Road::new("A", "C", 10, EdgeId::new(3)),
///     ],
/// );
/// let report = AnalyzerBuilder::new().build().run(&map)?;
/// assert_eq!(report.original_total(), 18);
/// assert_eq!(report.reduced_total(), 8);
/// assert_eq!(report.material_ratio().to_string(), "0.44");
/// assert_eq!(report.route_ratio().to_string(), "1.00");
/// # Ok::<(), roadnet_core::AnalysisError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct MapAnalyzer {
    weight_dedup: WeightDedup,
    degenerate_ratio_policy: DegenerateRatioPolicy,
}

impl MapAnalyzer {
    pub(crate) fn new(
        weight_dedup: WeightDedup,
        degenerate_ratio_policy: DegenerateRatioPolicy,
    ) -> Self {
        Self {
            weight_dedup,
            degenerate_ratio_policy,
        }
    }

    /// Returns how total road length counts parallel roads.
    #[must_use]
    pub fn weight_dedup(&self) -> WeightDedup {
        self.weight_dedup
    }

    /// Returns the handling of ratios with a zero denominator.
    #[must_use]
    pub fn degenerate_ratio_policy(&self) -> DegenerateRatioPolicy {
        self.degenerate_ratio_policy
    }

    /// Builds a graph from `source` and analyses it.
    ///
    /// # Errors
    /// Returns [`AnalysisError::DegenerateRatio`] when a ratio divides by zero
    /// and the analyzer was built with [`DegenerateRatioPolicy::Reject`].
    pub fn run<S: RoadSource + ?Sized>(&self, source: &S) -> Result<AnalysisReport> {
        debug!(
            data_source = source.name(),
            roads = source.roads().len(),
            "building graph from road source"
        );
        let graph = Graph::from_roads(source.roads().iter().cloned());
        self.analyze(&graph, source.start(), source.end())
    }

    /// Analyses an already built graph for the route `start -> end`.
    ///
    /// The barely connected map is rooted at `start`.
    ///
    /// # Errors
    /// Returns [`AnalysisError::DegenerateRatio`] when a ratio divides by zero
    /// and the analyzer was built with [`DegenerateRatioPolicy::Reject`].
    #[instrument(
        name = "core.analyze",
        err,
        skip(self, graph),
        fields(
            nodes = graph.node_count(),
            roads = graph.edge_count(),
            dedup = ?self.weight_dedup,
            policy = ?self.degenerate_ratio_policy,
        ),
    )]
    pub fn analyze(&self, graph: &Graph, start: &str, end: &str) -> Result<AnalysisReport> {
        let original_route = shortest_path(graph, start, end);
        let original_total = graph.total_weight(self.weight_dedup);

        let barely_connected = spanning_subgraph(graph, start);
        let reduced = barely_connected.to_graph();
        let reduced_route = shortest_path(&reduced, start, end);
        let reduced_total = reduced.total_weight(self.weight_dedup);

        let material_ratio = self.checked(
            RatioKind::Material,
            Ratio::new(reduced_total, original_total),
        )?;
        let route_ratio = self.checked(
            RatioKind::Route,
            Ratio::new(reduced_route.total_distance(), original_route.total_distance()),
        )?;

        info!(
            original_total,
            reduced_total,
            original_distance = original_route.total_distance(),
            reduced_distance = reduced_route.total_distance(),
            "map analysis complete"
        );

        Ok(AnalysisReport {
            start: Arc::from(start),
            end: Arc::from(end),
            original_route,
            original_total,
            barely_connected,
            reduced_route,
            reduced_total,
            material_ratio,
            route_ratio,
        })
    }

    fn checked(&self, kind: RatioKind, ratio: Ratio) -> Result<Ratio> {
        if !ratio.is_degenerate() {
            return Ok(ratio);
        }
        warn!(
            %kind,
            numerator = ratio.numerator(),
            denominator = ratio.denominator(),
            "ratio has a zero denominator"
        );
        match self.degenerate_ratio_policy {
            DegenerateRatioPolicy::Sentinel => Ok(ratio),
            DegenerateRatioPolicy::Reject => Err(AnalysisError::DegenerateRatio {
                kind,
                numerator: ratio.numerator(),
                denominator: ratio.denominator(),
            }),
        }
    }
}
