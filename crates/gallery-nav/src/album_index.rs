use gallery_config::{AlbumPolicy, AlbumRange, ConfigResult, validate_ranges};
use gallery_types::{Album, AlbumId, Photo};
use std::collections::HashMap;
use tracing::{info, warn};

/// Albums built once from the page's photo list, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct AlbumIndex {
    albums: Vec<Album>,
    lookup: HashMap<AlbumId, usize>,
}

impl AlbumIndex {
    pub fn build(photos: &[Photo], policy: &AlbumPolicy) -> ConfigResult<Self> {
        let index = match policy {
            AlbumPolicy::Grouping => Self::group(photos),
            AlbumPolicy::FixedRanges { ranges } => Self::slice(photos, ranges)?,
        };

        info!(
            "Indexed {} photos into {} albums ({})",
            index.total_photos(),
            index.len(),
            policy
        );

        Ok(index)
    }

    /// Groups photos by album attribute. Untagged photos are skipped.
    pub fn group(photos: &[Photo]) -> Self {
        let mut index = Self::default();

        for photo in photos {
            let Some(id) = photo.album_id() else {
                continue;
            };
            index.album_mut(id).push(photo.clone());
        }

        index
    }

    /// Slices the flat list by `ranges`, which must tile `[0, n)`.
    pub fn slice(photos: &[Photo], ranges: &[AlbumRange]) -> ConfigResult<Self> {
        let covered = validate_ranges(ranges)?;

        if covered != photos.len() {
            warn!(
                "Album ranges cover {} photos but the page has {}; photos may land in the wrong album",
                covered,
                photos.len()
            );
        }

        let mut index = Self::default();
        for range in ranges {
            let start = range.start.min(photos.len());
            let end = range.end.min(photos.len());
            index
                .album_mut(&range.album)
                .photos
                .extend_from_slice(&photos[start..end]);
        }

        Ok(index)
    }

    fn album_mut(&mut self, id: &AlbumId) -> &mut Album {
        let idx = match self.lookup.get(id) {
            Some(&idx) => idx,
            None => {
                self.albums.push(Album::new(id.clone()));
                self.lookup.insert(id.clone(), self.albums.len() - 1);
                self.albums.len() - 1
            }
        };
        &mut self.albums[idx]
    }

    pub fn get(&self, id: &str) -> Option<&Album> {
        self.lookup.get(id).map(|&idx| &self.albums[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lookup.contains_key(id)
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn ids(&self) -> impl Iterator<Item = &AlbumId> {
        self.albums.iter().map(|album| &album.id)
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    pub fn total_photos(&self) -> usize {
        self.albums.iter().map(Album::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_config::ConfigError;

    fn photo(name: &str, album: Option<&str>) -> Photo {
        let photo = Photo::new(format!("{name}.jpg"), format!("{name}_hi.jpg"), name);
        match album {
            Some(album) => photo.with_album(album),
            None => photo,
        }
    }

    fn captions(album: &Album) -> Vec<&str> {
        album.iter().map(|p| p.caption.as_str()).collect()
    }

    #[test]
    fn test_grouping_keeps_document_order() {
        let photos = vec![
            photo("p0", Some("x")),
            photo("p1", Some("y")),
            photo("p2", Some("x")),
        ];

        let index = AlbumIndex::build(&photos, &AlbumPolicy::Grouping).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(captions(index.get("x").unwrap()), ["p0", "p2"]);
        assert_eq!(captions(index.get("y").unwrap()), ["p1"]);
        let ids: Vec<&str> = index.ids().map(AlbumId::as_str).collect();
        assert_eq!(ids, ["x", "y"]);
    }

    #[test]
    fn test_grouping_skips_untagged() {
        let photos = vec![
            photo("p0", None),
            photo("p1", Some("")),
            photo("p2", Some("z")),
        ];

        let index = AlbumIndex::group(&photos);

        assert_eq!(index.len(), 1);
        assert_eq!(index.total_photos(), 1);
        assert!(!index.contains(""));
    }

    #[test]
    fn test_grouping_keeps_whitespace_album() {
        let photos = vec![photo("p0", Some(" ")), photo("p1", Some("x"))];

        let index = AlbumIndex::group(&photos);

        assert_eq!(index.total_photos(), 2);
        assert_eq!(captions(index.get(" ").unwrap()), ["p0"]);
    }

    #[test]
    fn test_slicing_by_ranges() {
        let photos: Vec<Photo> = (0..5).map(|i| photo(&format!("p{i}"), None)).collect();
        let policy = AlbumPolicy::FixedRanges {
            ranges: vec![AlbumRange::new("a", 0, 2), AlbumRange::new("b", 2, 5)],
        };

        let index = AlbumIndex::build(&photos, &policy).unwrap();

        assert_eq!(captions(index.get("a").unwrap()), ["p0", "p1"]);
        assert_eq!(captions(index.get("b").unwrap()), ["p2", "p3", "p4"]);
    }

    #[test]
    fn test_slicing_truncates_short_list() {
        let photos: Vec<Photo> = (0..3).map(|i| photo(&format!("p{i}"), None)).collect();
        let ranges = vec![
            AlbumRange::new("a", 0, 2),
            AlbumRange::new("b", 2, 4),
            AlbumRange::new("c", 4, 6),
        ];

        let index = AlbumIndex::slice(&photos, &ranges).unwrap();

        assert_eq!(captions(index.get("b").unwrap()), ["p2"]);
        assert!(index.get("c").unwrap().is_empty());
        assert_eq!(index.total_photos(), 3);
    }

    #[test]
    fn test_slicing_rejects_bad_ranges() {
        let photos: Vec<Photo> = (0..4).map(|i| photo(&format!("p{i}"), None)).collect();
        let ranges = vec![AlbumRange::new("a", 0, 2), AlbumRange::new("b", 1, 4)];

        assert!(matches!(
            AlbumIndex::slice(&photos, &ranges),
            Err(ConfigError::RangeOverlap { .. })
        ));
    }
}
