//! Roadnet core library.
//!
//! Models a road network as a weighted, undirected multigraph and answers
//! two questions about it: which route between two points is the fastest,
//! and which subset of roads keeps every reachable point connected with the
//! least construction material. [`MapAnalyzer`] chains both algorithms and
//! compares the original network with its barely connected reduction.
//!
//! Both algorithms resolve ties deterministically: when two candidates have
//! equal cost the one with the lower [`EdgeId`] wins, regardless of the order
//! in which roads were supplied.

mod analyzer;
mod builder;
mod error;
mod graph;
mod ratio;
mod report;
mod road;
mod shortest_path;
mod source;
mod spanning;

#[cfg(test)]
mod test_utils;

pub use crate::{
    analyzer::MapAnalyzer,
    builder::{AnalyzerBuilder, DegenerateRatioPolicy},
    error::{AnalysisError, AnalysisErrorCode, RatioKind, Result},
    graph::{Graph, Lane, NodeId, WeightDedup},
    ratio::Ratio,
    report::AnalysisReport,
    road::{EdgeId, Road, Weight},
    shortest_path::{Route, RouteHop, shortest_path},
    source::{RoadMap, RoadSource},
    spanning::{SpanningSubgraph, spanning_subgraph},
};
