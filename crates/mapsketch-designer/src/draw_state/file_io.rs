//! Export operations for the draw session.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use super::DrawSession;
use crate::renderer::MapRenderer;
use crate::serialization::FeatureCollection;

impl<R: MapRenderer> DrawSession<R> {
    /// The collection as a GeoJSON document.
    pub fn to_geojson(&self) -> FeatureCollection {
        FeatureCollection::from(&self.collection)
    }

    /// The collection as GeoJSON text, formatted per the export settings.
    pub fn export_json(&self) -> Result<String> {
        self.to_geojson().to_json(self.config.export.pretty)
    }

    /// Writes the collection to `path`.
    ///
    /// If `path` is a directory the configured file name is used inside
    /// it. Returns the path actually written.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let target = if path.is_dir() {
            path.join(&self.config.export.file_name)
        } else {
            path.to_path_buf()
        };

        self.to_geojson()
            .save_to_file(&target, self.config.export.pretty)?;
        info!(
            "Exported {} feature(s) to {}",
            self.collection.len(),
            target.display()
        );
        Ok(target)
    }
}
