//! Loads region boundaries from Well-Known Text.
//!
//! Input is a sequence of WKT geometries separated by blank lines. Each
//! polygon contributes the envelope of its exterior ring.

use std::fs;
use std::path::Path;

use wkt::types::{Coord, Polygon};
use wkt::{Geometry, Wkt};

use crate::{Coordinate, IndexError, Rectangle, Result};

pub fn envelopes_from_wkt(text: &str) -> Result<Vec<Rectangle>> {
    let mut envelopes = Vec::new();
    for (block_idx, block) in text
        .split("\n\n")
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .enumerate()
    {
        let parsed = Wkt::<f64>::from_str(block).map_err(|e| IndexError::Wkt(e.to_string()))?;
        log::trace!(
            "WKT block {} holds {} geometries",
            block_idx,
            parsed.items.len()
        );
        for geometry in &parsed.items {
            collect_envelopes(geometry, &mut envelopes)?;
        }
    }
    Ok(envelopes)
}

pub fn read_wkt_file(path: impl AsRef<Path>) -> Result<Vec<Rectangle>> {
    let contents = fs::read_to_string(path.as_ref())?;
    envelopes_from_wkt(&contents)
}

fn collect_envelopes(geometry: &Geometry<f64>, envelopes: &mut Vec<Rectangle>) -> Result<()> {
    match geometry {
        Geometry::Polygon(polygon) => {
            if let Some(envelope) = polygon_envelope(polygon)? {
                envelopes.push(envelope);
            }
        }
        Geometry::MultiPolygon(multi) => {
            for polygon in &multi.0 {
                if let Some(envelope) = polygon_envelope(polygon)? {
                    envelopes.push(envelope);
                }
            }
        }
        Geometry::Point(point) => {
            if let Some(coord) = &point.0 {
                let coord = to_coordinate(coord);
                envelopes.push(Rectangle::new(coord, coord));
            }
        }
        Geometry::GeometryCollection(collection) => {
            for geometry in &collection.0 {
                collect_envelopes(geometry, envelopes)?;
            }
        }
        Geometry::LineString(_) => {
            return Err(IndexError::UnsupportedGeometry("LINESTRING".into()));
        }
        Geometry::MultiPoint(_) => {
            return Err(IndexError::UnsupportedGeometry("MULTIPOINT".into()));
        }
        Geometry::MultiLineString(_) => {
            return Err(IndexError::UnsupportedGeometry("MULTILINESTRING".into()));
        }
    }
    Ok(())
}

fn polygon_envelope(polygon: &Polygon<f64>) -> Result<Option<Rectangle>> {
    let shell = match polygon.0.first() {
        Some(shell) if !shell.0.is_empty() => shell,
        _ => {
            log::warn!("Skipping empty polygon");
            return Ok(None);
        }
    };
    let coords = shell
        .0
        .iter()
        .map(to_coordinate)
        .collect::<Vec<Coordinate>>();
    let envelope = Rectangle::of(&coords);
    envelope.validate()?;
    Ok(Some(envelope))
}

fn to_coordinate(coord: &Coord<f64>) -> Coordinate {
    Coordinate::new(coord.x, coord.y)
}
