use crate::{ConfigError, ConfigResult};
use gallery_types::AlbumId;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, ops::Range};

/// Half-open slice `[start, end)` of the flat photo list assigned to one album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumRange {
    pub album: AlbumId,
    pub start: usize,
    pub end: usize,
}

impl AlbumRange {
    pub fn new(album: impl Into<AlbumId>, start: usize, end: usize) -> Self {
        Self {
            album: album.into(),
            start,
            end,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn overlaps(&self, other: &AlbumRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Checks that `ranges` start at 0 and tile the list without gaps or
/// overlaps. Returns the covered extent.
pub fn validate_ranges(ranges: &[AlbumRange]) -> ConfigResult<usize> {
    if ranges.is_empty() {
        return Err(ConfigError::NoRanges);
    }

    let mut seen = HashSet::new();
    let mut expected_start = 0;

    for range in ranges {
        if !seen.insert(range.album.as_str()) {
            return Err(ConfigError::DuplicateAlbum(range.album.to_string()));
        }

        if range.is_empty() {
            return Err(ConfigError::EmptyRange {
                album: range.album.to_string(),
                start: range.start,
                end: range.end,
            });
        }

        if range.start > expected_start {
            return Err(ConfigError::RangeGap {
                album: range.album.to_string(),
                expected: expected_start,
                found: range.start,
            });
        }

        if range.start < expected_start {
            return Err(ConfigError::RangeOverlap {
                album: range.album.to_string(),
                expected: expected_start,
                found: range.start,
            });
        }

        expected_start = range.end;
    }

    Ok(expected_start)
}
