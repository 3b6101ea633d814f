pub mod types;

pub use shared::LoadingState;
pub use types::{ActiveView, Album, AlbumCard, AlbumId, Photo};

/// Identifies a grid item across album switches.
///
/// `generation` changes on every album open, so ids of items from an
/// earlier open never match the current grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct GridItemId {
    pub generation: u64,
    pub index: usize,
}

impl GridItemId {
    pub fn new(generation: u64, index: usize) -> Self {
        Self { generation, index }
    }
}

/// Grid view object, built fresh from a `Photo` on every album open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridItem {
    pub id: GridItemId,
    pub photo: Photo,
    pub src: Option<String>,
    pub loading: LoadingState,
}

impl GridItem {
    pub fn new(id: GridItemId, photo: Photo, lazy_loading: bool) -> Self {
        if lazy_loading && photo.lazy {
            Self {
                id,
                photo,
                src: None,
                loading: LoadingState::Deferred,
            }
        } else {
            let src = Some(photo.low_res_src.clone());
            Self {
                id,
                photo,
                src,
                loading: LoadingState::Eager,
            }
        }
    }

    pub fn is_lazy(&self) -> bool {
        self.loading.is_lazy_marked()
    }

    pub fn deferred_src(&self) -> &str {
        &self.photo.high_res_src
    }

    pub fn caption(&self) -> &str {
        &self.photo.caption
    }
}

/// Thumbnail in the lightbox strip. Uses the high-res source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub index: usize,
    pub src: String,
    pub active: bool,
}

impl Thumbnail {
    pub fn new(index: usize, photo: &Photo) -> Self {
        Self {
            index,
            src: photo.high_res_src.clone(),
            active: false,
        }
    }
}
