use crate::{GalleryError, GalleryResult};
use gallery_config::AnchorIds;
use gallery_types::{AlbumCard, Photo};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fs, path::Path};

/// Everything the controller reads from the static page: the photo source
/// list, the album cards and the ids of elements present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSource {
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub album_cards: Vec<AlbumCard>,
    #[serde(default)]
    pub anchors: BTreeSet<String>,
}

impl PageSource {
    pub fn new(photos: Vec<Photo>) -> Self {
        Self {
            photos,
            ..Self::default()
        }
    }

    pub fn with_cards(mut self, cards: Vec<AlbumCard>) -> Self {
        self.album_cards = cards;
        self
    }

    pub fn with_anchor(mut self, id: impl Into<String>) -> Self {
        self.anchors.insert(id.into());
        self
    }

    /// Adds every anchor named in `ids`, including the optional ones.
    pub fn with_anchors(mut self, ids: &AnchorIds) -> Self {
        self.anchors.extend(ids.required().iter().map(|id| id.to_string()));
        self.anchors.insert(ids.scroll_to_top.clone());
        self
    }

    pub fn from_json_str(contents: &str) -> GalleryResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn load(path: &Path) -> GalleryResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn has_anchor(&self, id: &str) -> bool {
        self.anchors.contains(id)
    }

    pub fn require_anchors(&self, ids: &AnchorIds) -> GalleryResult<()> {
        match ids.required().into_iter().find(|id| !self.has_anchor(id)) {
            Some(missing) => Err(GalleryError::MissingAnchor(missing.to_string())),
            None => Ok(()),
        }
    }
}
