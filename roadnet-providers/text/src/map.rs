use std::io::BufRead;
use std::sync::Arc;

use roadnet_core::{Road, RoadSource};
use tracing::{Span, field, instrument, warn};

use crate::errors::MapFileError;
use crate::parse::{self, SkippedLine};

/// A road map read from tab-separated text.
///
/// # Examples
/// ```
/// use roadnet_core::RoadSource;
/// use roadnet_providers_text::TextMap;
///
/// let map = TextMap::try_from_str("demo", "A\tC\nA\tB\t5\t1\nB\tC\t3\t2\n")?;
/// assert_eq!((map.start(), map.end()), ("A", "C"));
/// assert_eq!(map.roads().len(), 2);
/// assert!(map.skipped().is_empty());
/// # Ok::<(), roadnet_providers_text::MapFileError>(())
/// ```
#[derive(Clone, Debug)]
pub struct TextMap {
    name: Arc<str>,
    start: Arc<str>,
    end: Arc<str>,
    roads: Vec<Road>,
    skipped: Vec<SkippedLine>,
}

impl TextMap {
    /// Reads a map from `reader`.
    ///
    /// Lines are trimmed and blank lines ignored before anything else looks
    /// at them.
    ///
    /// # Errors
    /// Returns [`MapFileError::Io`] when reading fails,
    /// [`MapFileError::TooFewLines`] when fewer than two non-empty lines are
    /// present, and [`MapFileError::MalformedRoutePair`] when the first
    /// non-empty line is not `<start>\t<end>`.
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<Arc<str>>,
        reader: R,
    ) -> Result<Self, MapFileError> {
        Self::read(name.into(), reader)
    }

    /// Reads a map held in memory.
    ///
    /// # Errors
    /// Same as [`Self::try_from_reader`], minus I/O failures.
    pub fn try_from_str(name: impl Into<Arc<str>>, text: &str) -> Result<Self, MapFileError> {
        Self::read(name.into(), text.as_bytes())
    }

    /// Returns the road lines that were left out, in file order.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    #[instrument(
        name = "providers.text.read",
        err,
        skip(reader),
        fields(data_source = %name, roads = field::Empty, skipped = field::Empty),
    )]
    fn read<R: BufRead>(name: Arc<str>, reader: R) -> Result<Self, MapFileError> {
        let mut lines = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                lines.push((index + 1, trimmed.to_owned()));
            }
        }

        let [(route_line, route), rest @ ..] = lines.as_slice() else {
            return Err(MapFileError::TooFewLines { found: 0 });
        };
        if rest.is_empty() {
            return Err(MapFileError::TooFewLines { found: 1 });
        }
        let (start, end) = parse::route_pair(route).ok_or_else(|| {
            MapFileError::MalformedRoutePair {
                line: *route_line,
                content: route.clone(),
            }
        })?;

        let mut roads = Vec::with_capacity(rest.len());
        let mut skipped = Vec::new();
        for (line_number, content) in rest {
            match parse::road(content) {
                Ok(road) => roads.push(road),
                Err(reason) => {
                    warn!(
                        line = line_number,
                        %reason,
                        content = content.as_str(),
                        "skipping invalid line"
                    );
                    skipped.push(SkippedLine {
                        line_number: *line_number,
                        content: content.clone(),
                        reason,
                    });
                }
            }
        }

        let span = Span::current();
        span.record("roads", roads.len());
        span.record("skipped", skipped.len());
        Ok(Self {
            start: Arc::from(start),
            end: Arc::from(end),
            name,
            roads,
            skipped,
        })
    }
}

impl RoadSource for TextMap {
    fn name(&self) -> &str {
        &self.name
    }

    fn start(&self) -> &str {
        &self.start
    }

    fn end(&self) -> &str {
        &self.end
    }

    fn roads(&self) -> &[Road] {
        &self.roads
    }
}
