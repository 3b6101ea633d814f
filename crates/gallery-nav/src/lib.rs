use gallery_types::Photo;
use tracing::debug;

pub mod album_index;

pub use album_index::AlbumIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open,
}

/// Wraps `index` into `[0, len)` in both directions. `None` when `len` is 0.
pub fn wrap_index(index: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some(index.rem_euclid(len as isize) as usize)
}

/// Index navigation over the photos of the open album.
#[derive(Debug, Clone, Default)]
pub struct LightboxNavigator {
    photos: Vec<Photo>,
    cur_idx: usize,
    state: LightboxState,
}

impl LightboxNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the album. The lightbox state is left as is.
    pub fn load(&mut self, photos: Vec<Photo>) {
        self.photos = photos;
        self.cur_idx = 0;
    }

    pub fn current(&self) -> Option<&Photo> {
        self.photos.get(self.cur_idx)
    }

    pub fn index(&self) -> Option<usize> {
        (!self.photos.is_empty()).then_some(self.cur_idx)
    }

    pub fn total(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == LightboxState::Open
    }

    pub fn show(&mut self, index: isize) -> Option<&Photo> {
        let idx = wrap_index(index, self.photos.len())?;
        self.cur_idx = idx;
        debug!("Lightbox showing {}/{}", idx + 1, self.photos.len());
        self.current()
    }

    /// Shows `start` and opens the lightbox. No-op on an empty album.
    pub fn open(&mut self, start: isize) -> Option<&Photo> {
        if self.photos.is_empty() {
            return None;
        }

        self.state = LightboxState::Open;
        self.show(start)
    }

    pub fn go_next(&mut self) -> Option<&Photo> {
        self.show(self.cur_idx as isize + 1)
    }

    pub fn go_prev(&mut self) -> Option<&Photo> {
        self.show(self.cur_idx as isize - 1)
    }

    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }
}
