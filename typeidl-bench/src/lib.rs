//! # typeidl Bench
//!
//! Fixture types and source text shared by the benchmarks.

use typeidl::Describe;

/// Point on the plane.
#[derive(Describe)]
#[idl(namespace = "bench")]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate.
    pub y: i64,
}

/// Segment between two points.
#[derive(Describe)]
#[idl(namespace = "bench")]
pub struct Line {
    /// Start.
    pub a: Point,
    /// End.
    pub b: Point,
}

/// A wide record reaching every other fixture type several times.
#[derive(Describe)]
#[idl(namespace = "bench")]
pub struct Scene {
    /// Scene name.
    pub name: String,
    /// Frame counter.
    pub frame: u64,
    /// Origin.
    pub origin: Point,
    /// First axis.
    pub x_axis: Line,
    /// Second axis.
    pub y_axis: Line,
    /// Diagonal.
    pub diagonal: Line,
}

/// Builds source text declaring `count` chained structs, each referencing
/// the previous one.
#[must_use]
pub fn chained_source(count: usize) -> String {
    let mut text = String::from("struct T0 { value: i64, label: String }\n");
    for i in 1..count {
        text.push_str(&format!(
            "struct T{i} {{ prev: T{}, value: i64, other: T0 }}\n",
            i - 1
        ));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chained_source_declares_count_structs() {
        let text = chained_source(3);
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("struct T2 { prev: T1"));
    }
}
