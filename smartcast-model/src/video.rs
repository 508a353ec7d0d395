use chrono::NaiveDate;

use crate::{error::ModelError, ids::VideoId};

/// One playable entry of the catalog.
///
/// Records are created once when the catalog is built and never mutated
/// afterwards. The JSON shape is the wire contract of the catalog API, so the
/// field names are camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct VideoRecord {
    pub id: VideoId,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub video_url: String,
    /// Whole seconds as advertised by the catalog.
    #[cfg_attr(feature = "serde", serde(rename = "duration"))]
    pub duration_seconds: u32,
    /// Display label such as `1080p`.
    pub resolution: String,
    pub upload_date: NaiveDate,
}

impl VideoRecord {
    pub fn duration_hint(&self) -> f64 {
        f64::from(self.duration_seconds)
    }

    /// Structural checks applied when a catalog is loaded from outside the
    /// binary. URL syntax is checked by the catalog loader, not here.
    pub fn validate(&self) -> Result<(), ModelError> {
        let invalid = |reason: &str| ModelError::InvalidRecord {
            id: self.id.to_string(),
            reason: reason.to_string(),
        };

        if self.id.as_str().trim().is_empty() {
            return Err(ModelError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(invalid("title is empty"));
        }
        if self.video_url.trim().is_empty() {
            return Err(invalid("videoUrl is empty"));
        }
        if self.resolution.trim().is_empty() {
            return Err(invalid("resolution is empty"));
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    fn record() -> VideoRecord {
        VideoRecord {
            id: VideoId::new("3").unwrap(),
            title: "Tears of Steel".into(),
            description: "Robots.".into(),
            thumbnail_url: "https://example.com/tos.jpg".into(),
            video_url: "https://example.com/tos.mp4".into(),
            duration_seconds: 734,
            resolution: "1080p".into(),
            upload_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        }
    }

    #[test]
    fn serializes_with_catalog_field_names() {
        let value = serde_json::to_value(record()).unwrap();
        assert_eq!(value["id"], "3");
        assert_eq!(value["thumbnailUrl"], "https://example.com/tos.jpg");
        assert_eq!(value["videoUrl"], "https://example.com/tos.mp4");
        assert_eq!(value["duration"], 734);
        assert_eq!(value["uploadDate"], "2024-03-10");
        assert!(value.get("durationSeconds").is_none());
    }

    #[test]
    fn negative_duration_is_not_representable() {
        let mut value = serde_json::to_value(record()).unwrap();
        value["duration"] = serde_json::json!(-5);
        assert!(serde_json::from_value::<VideoRecord>(value).is_err());
    }

    #[test]
    fn validate_rejects_blank_title() {
        let mut bad = record();
        bad.title = "   ".into();
        assert!(matches!(
            bad.validate(),
            Err(ModelError::InvalidRecord { .. })
        ));
        assert!(record().validate().is_ok());
    }
}
