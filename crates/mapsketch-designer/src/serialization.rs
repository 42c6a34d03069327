//! GeoJSON export format.
//!
//! Coordinates are written `[longitude, latitude]`.

use anyhow::{Context, Result};
use geo::{LineString, Polygon};
use mapsketch_core::ShapeKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::collection::FeatureStore;
use crate::model::{DrawnFeature, FeatureGeometry};

type Position = [f64; 2];

/// Top level export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub id: String,
    pub geometry: Geometry,
    pub properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    LineString { coordinates: Vec<Position> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Properties {
    pub id: String,
    pub shape_type: ShapeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    pub created_at: i64,
}

fn positions(line: &LineString<f64>) -> Vec<Position> {
    line.coords().map(|c| [c.x, c.y]).collect()
}

fn polygon_rings(polygon: &Polygon<f64>) -> Vec<Vec<Position>> {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(positions)
        .collect()
}

impl From<&FeatureGeometry> for Geometry {
    fn from(geometry: &FeatureGeometry) -> Self {
        match geometry {
            FeatureGeometry::Polygon(p) => Geometry::Polygon {
                coordinates: polygon_rings(p),
            },
            FeatureGeometry::MultiPolygon(mp) => Geometry::MultiPolygon {
                coordinates: mp.0.iter().map(polygon_rings).collect(),
            },
            FeatureGeometry::LineString(ls) => Geometry::LineString {
                coordinates: positions(ls),
            },
        }
    }
}

impl From<&DrawnFeature> for Feature {
    fn from(feature: &DrawnFeature) -> Self {
        let props = feature.properties();
        Feature {
            id: feature.id().to_string(),
            geometry: Geometry::from(feature.geometry()),
            properties: Properties {
                id: props.id.clone(),
                shape_type: props.shape_type,
                radius: props.radius,
                created_at: props.created_at,
            },
        }
    }
}

impl From<&FeatureStore> for FeatureCollection {
    fn from(store: &FeatureStore) -> Self {
        FeatureCollection {
            features: store.iter().map(Feature::from).collect(),
        }
    }
}

impl FeatureCollection {
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.context("Failed to serialize feature collection")
    }

    /// Write the document to `path`.
    pub fn save_to_file(&self, path: impl AsRef<Path>, pretty: bool) -> Result<()> {
        let json = self.to_json(pretty)?;
        std::fs::write(path.as_ref(), json).with_context(|| {
            format!("Failed to write feature file {}", path.as_ref().display())
        })?;
        Ok(())
    }

    /// Load a previously exported document.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read feature file")?;
        serde_json::from_str(&content).context("Failed to parse feature file")
    }
}
