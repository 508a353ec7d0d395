//! Catalog bounded context.
//!
//! The catalog is an immutable list of [`VideoRecord`]s built once at
//! startup, either from the bundled sample set or from a JSON file. Lookups
//! are linear; the catalog is a handful of entries and ordering is part of the
//! contract (the list endpoint returns records in catalog order).
//!
//! A catalog file is a JSON array of records in the wire shape served by
//! `/api/videos`. `duration` is a whole, non-negative number of seconds:
//! `734` loads, `734.5` or `-1` fails with [`CatalogError::Parse`].

mod sample;

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use smartcast_model::VideoRecord;
use tracing::{debug, info};
use url::Url;

use crate::error::CatalogError;

/// Where the catalog records come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    #[default]
    BuiltIn,
    File(PathBuf),
}

impl CatalogSource {
    pub fn from_optional_path(path: Option<PathBuf>) -> Self {
        path.map(CatalogSource::File).unwrap_or_default()
    }
}

/// Read-only video catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    videos: Vec<VideoRecord>,
}

impl Catalog {
    /// The bundled Blender/Google sample videos.
    pub fn sample() -> Self {
        Self {
            videos: sample::records(),
        }
    }

    pub fn empty() -> Self {
        Self { videos: Vec::new() }
    }

    pub fn load(source: &CatalogSource) -> Result<Self, CatalogError> {
        match source {
            CatalogSource::BuiltIn => {
                let catalog = Self::sample();
                info!(videos = catalog.len(), "using built-in sample catalog");
                Ok(catalog)
            }
            CatalogSource::File(path) => {
                let catalog = Self::from_json_file(path)?;
                info!(
                    path = %path.display(),
                    videos = catalog.len(),
                    "catalog loaded from file"
                );
                Ok(catalog)
            }
        }
    }

    /// Builds a catalog from externally supplied records, rejecting duplicate
    /// ids, structurally invalid records and unparsable URLs.
    pub fn from_records(
        videos: Vec<VideoRecord>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(videos.len());
        for video in &videos {
            video.validate()?;
            if !seen.insert(video.id.as_str()) {
                return Err(CatalogError::DuplicateId(video.id.to_string()));
            }
            check_url(video, "videoUrl", &video.video_url)?;
            check_url(video, "thumbnailUrl", &video.thumbnail_url)?;
        }
        debug!(videos = videos.len(), "catalog records validated");
        Ok(Self { videos })
    }

    /// Loads records from a JSON array. Durations must be integer seconds.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let contents =
            fs::read_to_string(path).map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let videos: Vec<VideoRecord> = serde_json::from_str(&contents)
            .map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_records(videos)
    }

    pub fn list(&self) -> &[VideoRecord] {
        &self.videos
    }

    /// Absence is an ordinary outcome, not an error.
    pub fn get(&self, id: &str) -> Option<&VideoRecord> {
        self.videos.iter().find(|video| video.id == id)
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

fn check_url(
    video: &VideoRecord,
    field: &'static str,
    value: &str,
) -> Result<(), CatalogError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|_| CatalogError::InvalidUrl {
            id: video.id.to_string(),
            field,
            value: value.to_string(),
        })
}
