use roadnet_core::{EdgeId, Road, RoadMap};

pub fn road(source: &str, target: &str, weight: u64, id: i64) -> Road {
    Road::new(source, target, weight, EdgeId::new(id))
}

/// The three-point map with one redundant long road.
pub fn triangle() -> RoadMap {
    RoadMap::new(
        "triangle",
        "A",
        "C",
        vec![road("A", "B", 5, 1), road("B", "C", 3, 2), road("A", "C", 10, 3)],
    )
}

/// Two disconnected pieces; `D` and `E` are unreachable from `A`.
pub fn split() -> RoadMap {
    RoadMap::new(
        "split",
        "A",
        "D",
        vec![road("A", "B", 5, 1), road("B", "C", 3, 2), road("D", "E", 1, 3)],
    )
}
