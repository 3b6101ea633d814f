use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, fmt};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlbumId(String);

impl AlbumId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for AlbumId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AlbumId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AlbumId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One photo as read from the page's source list.
///
/// `high_res_src` is the deferred source: grid items reveal it when they
/// first become visible and the lightbox always displays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub low_res_src: String,
    pub high_res_src: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub album: Option<AlbumId>,
    #[serde(default = "default_lazy")]
    pub lazy: bool,
}

fn default_lazy() -> bool {
    true
}

impl Photo {
    pub fn new(
        low_res_src: impl Into<String>,
        high_res_src: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            low_res_src: low_res_src.into(),
            high_res_src: high_res_src.into(),
            caption: caption.into(),
            album: None,
            lazy: true,
        }
    }

    pub fn with_album(mut self, album: impl Into<AlbumId>) -> Self {
        self.album = Some(album.into());
        self
    }

    pub fn with_lazy(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }

    /// The album this photo is tagged with, ignoring empty identifiers.
    pub fn album_id(&self) -> Option<&AlbumId> {
        self.album.as_ref().filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub photos: Vec<Photo>,
}

impl Album {
    pub fn new(id: AlbumId) -> Self {
        Self {
            id,
            photos: Vec::new(),
        }
    }

    pub fn push(&mut self, photo: Photo) {
        self.photos.push(photo);
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Photo> {
        self.photos.iter()
    }
}

/// A clickable card on the album-selection view naming its target album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumCard {
    pub album: AlbumId,
    #[serde(default)]
    pub title: Option<String>,
}

impl AlbumCard {
    pub fn new(album: impl Into<AlbumId>) -> Self {
        Self {
            album: album.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(self.album.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActiveView {
    #[default]
    AlbumSelection,
    Album,
}

impl fmt::Display for ActiveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveView::AlbumSelection => write!(f, "Album Selection"),
            ActiveView::Album => write!(f, "Album"),
        }
    }
}
