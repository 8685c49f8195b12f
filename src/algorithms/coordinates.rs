//! Station coordinates and labels
//!
//! Stations are lettered from the origin: A, B, C, ... The unadjusted
//! polygon ends at A' (the misclosed return to A); the adjusted polygon
//! relabels intermediate stations B', C', ... and returns to A itself.

use nalgebra::Vector2;

use crate::core::types::{LegVector, Station};

/// Walks leg vectors cumulatively from an origin
pub struct CoordinateReconstructor;

impl CoordinateReconstructor {
    /// Stations 0..=n for n vectors; station k = station k-1 + vector k-1
    pub fn reconstruct(vectors: &[LegVector], origin: Station) -> Vec<Station> {
        let mut stations = Vec::with_capacity(vectors.len() + 1);
        let mut position = Vector2::new(origin.north, origin.east);
        stations.push(Station { index: 0, ..origin });

        for (i, vector) in vectors.iter().enumerate() {
            position += vector.to_vector2();
            stations.push(Station {
                index: i + 1,
                north: position.x,
                east: position.y,
            });
        }

        stations
    }
}

/// Spreadsheet-style letter for a station index: A..Z, then AA, AB, ...
pub fn station_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut i = index;
    loop {
        letters.push((b'A' + (i % 26) as u8) as char);
        if i < 26 {
            break;
        }
        i = i / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// Label of leg `index`, e.g. "A-B" for the first leg
pub fn line_label(index: usize) -> String {
    format!("{}-{}", station_letter(index), station_letter(index + 1))
}

/// Labels of the unadjusted stations: A, B, ..., A'
pub fn unadjusted_station_labels(leg_count: usize) -> Vec<String> {
    (0..=leg_count)
        .map(|i| {
            if i == leg_count {
                format!("{}'", station_letter(0))
            } else {
                station_letter(i)
            }
        })
        .collect()
}

/// Labels of the adjusted stations: A, B', C', ..., A
pub fn adjusted_station_labels(leg_count: usize) -> Vec<String> {
    (0..=leg_count)
        .map(|i| {
            if i == 0 || i == leg_count {
                station_letter(0)
            } else {
                format!("{}'", station_letter(i))
            }
        })
        .collect()
}
