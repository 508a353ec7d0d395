//! Library screen: the catalog list with pull-to-refresh.

use smartcast_model::VideoRecord;

use crate::{
    api_client::ApiClient,
    formatting::{format_date, format_time},
};

pub const EMPTY_TITLE: &str = "No Videos Available";
pub const EMPTY_DESCRIPTION: &str =
    "Your video library is empty. Pull down to refresh and check for new content.";

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryLoadState {
    Loading,
    Loaded(Vec<VideoRecord>),
    Empty,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct LibraryScreen {
    pub load_state: LibraryLoadState,
    /// A refetch is in flight while the previous list stays on screen.
    pub refreshing: bool,
    /// Failure of the last refetch when an older list is still shown.
    pub refresh_error: Option<String>,
}

impl Default for LibraryScreen {
    fn default() -> Self {
        Self {
            load_state: LibraryLoadState::Loading,
            refreshing: false,
            refresh_error: None,
        }
    }
}

impl LibraryScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn videos(&self) -> &[VideoRecord] {
        match &self.load_state {
            LibraryLoadState::Loaded(videos) => videos,
            _ => &[],
        }
    }

    pub fn begin_refresh(&mut self) {
        match self.load_state {
            LibraryLoadState::Loaded(_) => self.refreshing = true,
            _ => self.load_state = LibraryLoadState::Loading,
        }
    }

    pub fn finish_refresh(&mut self, result: Result<Vec<VideoRecord>, String>) {
        let had_list = self.refreshing;
        self.refreshing = false;

        match result {
            Ok(videos) if videos.is_empty() => {
                self.refresh_error = None;
                self.load_state = LibraryLoadState::Empty;
            }
            Ok(videos) => {
                log::debug!("library loaded {} videos", videos.len());
                self.refresh_error = None;
                self.load_state = LibraryLoadState::Loaded(videos);
            }
            Err(message) if had_list => {
                log::warn!("library refresh failed, keeping previous list: {message}");
                self.refresh_error = Some(message);
            }
            Err(message) => {
                log::error!("library load failed: {message}");
                self.load_state = LibraryLoadState::Failed(message);
            }
        }
    }

    /// Refetches the catalog.
    pub async fn refresh(&mut self, client: &ApiClient) {
        self.begin_refresh();
        let result = client
            .list_videos()
            .await
            .map_err(|err| format!("{err:#}"));
        self.finish_refresh(result);
    }
}

/// One card in the library list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCard {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub resolution: String,
    pub uploaded: String,
}

impl From<&VideoRecord> for VideoCard {
    fn from(record: &VideoRecord) -> Self {
        Self {
            id: record.id.to_string(),
            title: record.title.clone(),
            duration: format_time(record.duration_hint()),
            resolution: record.resolution.clone(),
            uploaded: format_date(record.upload_date),
        }
    }
}
