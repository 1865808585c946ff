//! Plain text polygon format.
//!
//! ```text
//! <contour count>
//! <point count of contour 0>
//! <x> <y>
//! ...
//! <point count of contour 1>
//! ...
//! <contour index>: <hole index> <hole index> ...
//! ```
//!
//! Hole lines are optional and only written for contours that have holes.
//! The writer indents point lines with a tab; the reader accepts any leading
//! whitespace.

use crate::core::math::Point;
use crate::core::traits::Real;
use crate::polygon::{Contour, Polygon};
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

/// Errors producible when parsing the polygon text format.
#[derive(Debug, Error)]
pub enum ParsePolygonError {
    #[error("i/o error reading polygon")]
    Io(#[from] std::io::Error),
    #[error("unexpected end of input on line {0}")]
    UnexpectedEof(usize),
    #[error("invalid count on line {0}")]
    InvalidCount(usize),
    #[error("invalid coordinate on line {0}")]
    InvalidCoordinate(usize),
    #[error("malformed hole line on line {0}")]
    InvalidHoleLine(usize),
    #[error("hole reference out of range on line {0}")]
    HoleIndexOutOfRange(usize),
}

struct Lines<R> {
    reader: R,
    line: usize,
}

impl<R: BufRead> Lines<R> {
    fn next_line(&mut self) -> Result<Option<String>, ParsePolygonError> {
        let mut buf = String::new();
        self.line += 1;
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    fn require_line(&mut self) -> Result<String, ParsePolygonError> {
        self.next_line()?
            .ok_or(ParsePolygonError::UnexpectedEof(self.line))
    }
}

/// Reads a polygon in the text format.
///
/// Duplicate consecutive points and a final point equal to the first are
/// dropped; contours left with fewer than 3 points are discarded.
pub fn read_polygon<T, R>(reader: R) -> Result<Polygon<T>, ParsePolygonError>
where
    T: Real,
    R: BufRead,
{
    let mut lines = Lines { reader, line: 0 };
    let mut polygon = Polygon::new();

    let contour_count: usize = {
        let l = lines.require_line()?;
        l.parse()
            .map_err(|_| ParsePolygonError::InvalidCount(lines.line))?
    };

    for _ in 0..contour_count {
        let point_count: usize = {
            let l = lines.require_line()?;
            l.parse()
                .map_err(|_| ParsePolygonError::InvalidCount(lines.line))?
        };

        let mut contour = Contour::with_capacity(point_count);
        for j in 0..point_count {
            let l = lines.require_line()?;
            let p: Point<T> = parse_point(&l, lines.line)?;

            if j > 0 && !contour.is_empty() && p == contour.point(contour.len() - 1) {
                continue;
            }
            if j == point_count - 1 && !contour.is_empty() && p == contour.point(0) {
                continue;
            }
            contour.add(p);
        }
        if contour.len() >= 3 {
            polygon.add(contour);
        }
    }

    // remaining lines describe hole relations
    while let Some(l) = lines.next_line()? {
        if l.is_empty() {
            continue;
        }
        let (contour_part, holes_part) = l
            .split_once(':')
            .ok_or(ParsePolygonError::InvalidHoleLine(lines.line))?;
        let contour_index: usize = contour_part
            .trim()
            .parse()
            .map_err(|_| ParsePolygonError::InvalidHoleLine(lines.line))?;
        if contour_index >= polygon.len() {
            return Err(ParsePolygonError::HoleIndexOutOfRange(lines.line));
        }
        for part in holes_part.split_whitespace() {
            let hole: usize = part
                .parse()
                .map_err(|_| ParsePolygonError::InvalidHoleLine(lines.line))?;
            if hole >= polygon.len() {
                return Err(ParsePolygonError::HoleIndexOutOfRange(lines.line));
            }
            polygon.contour_mut(contour_index).add_hole(hole);
            polygon.contour_mut(hole).set_is_hole(true);
        }
    }

    Ok(polygon)
}

fn parse_point<T>(line: &str, line_no: usize) -> Result<Point<T>, ParsePolygonError>
where
    T: Real,
{
    let mut parts = line.split_whitespace();
    let x = parse_coord(parts.next(), line_no)?;
    let y = parse_coord(parts.next(), line_no)?;
    Ok(Point::new(x, y))
}

fn parse_coord<T>(part: Option<&str>, line_no: usize) -> Result<T, ParsePolygonError>
where
    T: Real,
{
    let raw: f64 = part
        .ok_or(ParsePolygonError::InvalidCoordinate(line_no))?
        .parse()
        .map_err(|_| ParsePolygonError::InvalidCoordinate(line_no))?;
    T::from(raw).ok_or(ParsePolygonError::InvalidCoordinate(line_no))
}

/// Writes the polygon in the text format.
pub fn write_polygon<T, W>(writer: &mut W, polygon: &Polygon<T>) -> std::io::Result<()>
where
    T: Real,
    W: Write,
{
    write!(writer, "{}", polygon)
}

impl<T> fmt::Display for Polygon<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.len())?;
        for contour in self {
            writeln!(f, "{}", contour.len())?;
            for p in contour.points() {
                writeln!(f, "\t{:?} {:?}", p.x, p.y)?;
            }
        }
        for (i, contour) in self.iter().enumerate() {
            if contour.holes().is_empty() {
                continue;
            }
            let holes: Vec<String> = contour.holes().iter().map(|h| h.to_string()).collect();
            writeln!(f, "{}: {}", i, holes.join(" "))?;
        }
        Ok(())
    }
}

impl<T> FromStr for Polygon<T>
where
    T: Real,
{
    type Err = ParsePolygonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_polygon(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basic_polygon() {
        let text = "1\n4\n0.0 0.0\n1.0 0.0\n1.0 1.0\n0.0 1.0\n";
        let p: Polygon<f64> = text.parse().unwrap();
        assert_eq!(p.len(), 1);
        assert_eq!(p.contour(0).len(), 4);
        assert_eq!(p.contour(0).point(2), Point::new(1.0, 1.0));
    }

    #[test]
    fn parses_hole_lines() {
        let text = "2\n4\n0 0\n9 0\n9 9\n0 9\n4\n1 1\n8 1\n8 8\n1 8\n0: 1\n";
        let p: Polygon<f64> = text.parse().unwrap();
        assert_eq!(p.contour(0).holes(), &[1]);
        assert!(p.contour(1).is_hole());
        assert!(!p.contour(0).is_hole());
    }

    #[test]
    fn drops_duplicate_and_closing_points() {
        let text = "1\n6\n0 0\n1 0\n1 0\n1 1\n0 1\n0 0\n";
        let p: Polygon<f64> = text.parse().unwrap();
        assert_eq!(p.contour(0).len(), 4);
    }

    #[test]
    fn discards_degenerate_contours() {
        let text = "2\n2\n0 0\n1 0\n4\n0 0\n1 0\n1 1\n0 1\n";
        let p: Polygon<f64> = text.parse().unwrap();
        assert_eq!(p.len(), 1);
        assert_eq!(p.contour(0).len(), 4);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            "x\n".parse::<Polygon<f64>>(),
            Err(ParsePolygonError::InvalidCount(1))
        ));
        assert!(matches!(
            "1\n3\n0 0\n1 zzz\n1 1\n".parse::<Polygon<f64>>(),
            Err(ParsePolygonError::InvalidCoordinate(4))
        ));
        assert!(matches!(
            "1\n3\n0 0\n1 0\n1 1\n0: 7\n".parse::<Polygon<f64>>(),
            Err(ParsePolygonError::HoleIndexOutOfRange(6))
        ));
        assert!(matches!(
            "1\n".parse::<Polygon<f64>>(),
            Err(ParsePolygonError::UnexpectedEof(2))
        ));
    }

    #[test]
    fn writes_tab_indented_point_lines() {
        let p: Polygon<f64> = "1\n3\n0 0\n1 0\n1 1\n".parse().unwrap();
        let text = p.to_string();
        assert_eq!(text, "1\n3\n\t0.0 0.0\n\t1.0 0.0\n\t1.0 1.0\n");
        let back: Polygon<f64> = text.parse().unwrap();
        assert_eq!(back.contour(0).points(), p.contour(0).points());
    }

    #[test]
    fn round_trips_through_text() {
        let text = "2\n4\n0.0 0.0\n9.0 0.0\n9.0 9.0\n0.0 9.0\n4\n1.0 1.0\n8.0 1.0\n8.0 8.0\n1.0 8.0\n0: 1\n";
        let p: Polygon<f64> = text.parse().unwrap();
        let mut out = Vec::new();
        write_polygon(&mut out, &p).unwrap();
        let back: Polygon<f64> = String::from_utf8(out).unwrap().parse().unwrap();
        assert_eq!(back.len(), p.len());
        for (a, b) in back.iter().zip(p.iter()) {
            assert_eq!(a.points(), b.points());
            assert_eq!(a.holes(), b.holes());
            assert_eq!(a.is_hole(), b.is_hole());
        }
    }
}
