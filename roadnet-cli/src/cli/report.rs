//! Plain-text rendering of an [`AnalysisReport`].

use std::io::{self, Write};

use roadnet_core::{AnalysisReport, Route};

/// Renders `report` to `writer`.
///
/// Route lines show the road as recorded in the map together with the
/// distance covered by that hop alone. The final line carries no trailing
/// newline.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use roadnet_cli::cli::render_report;
/// # use roadnet_core::{AnalyzerBuilder, EdgeId, Road, RoadMap};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let map = RoadMap::new("pair", "A", "B", vec![Road::new("A", "B", 4, EdgeId::new(1))]);
/// let report = AnalyzerBuilder::new().build().run(&map)?;
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("Fastest Route from A to B (4 KM):\nA\tB\t4\t1\n"));
/// assert!(text.ends_with("Original Map: 1.00"));
/// # Ok(())
/// # }
/// ```
pub fn render_report(report: &AnalysisReport, mut writer: impl Write) -> io::Result<()> {
    write_route(&mut writer, report, report.original_route(), "")?;

    writeln!(writer, "Roads of Barely Connected Map is:")?;
    for road in report.barely_connected().roads() {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            road.source(),
            road.target(),
            road.weight(),
            road.id()
        )?;
    }

    write_route(
        &mut writer,
        report,
        report.reduced_route(),
        " on Barely Connected Map",
    )?;

    writeln!(writer, "Analysis:")?;
    writeln!(
        writer,
        "Ratio of Construction Material Usage Between Barely Connected and Original Map: {}",
        report.material_ratio()
    )?;
    write!(
        writer,
        "Ratio of Fastest Route Between Barely Connected and Original Map: {}",
        report.route_ratio()
    )
}

fn write_route(
    writer: &mut impl Write,
    report: &AnalysisReport,
    route: &Route,
    qualifier: &str,
) -> io::Result<()> {
    let (start, end) = (report.start(), report.end());
    if route.is_empty() {
        return writeln!(writer, "No path found from {start} to {end}.");
    }
    writeln!(
        writer,
        "Fastest Route from {start} to {end}{qualifier} ({} KM):",
        route.total_distance()
    )?;
    for (hop, distance) in route.legs() {
        let road = hop.road();
        writeln!(
            writer,
            "{}\t{}\t{distance}\t{}",
            road.source(),
            road.target(),
            road.id()
        )?;
    }
    Ok(())
}
