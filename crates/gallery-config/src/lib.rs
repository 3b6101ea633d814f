use serde::{Deserialize, Serialize};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, info};

pub mod ranges;

pub use ranges::{AlbumRange, validate_ranges};

const APP_DIR: &str = "lightbox-gallery";
const CONFIG_FILE: &str = "config.toml";

/// Scroll offset past which the scroll-to-top control is revealed.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 100.0;
/// Delay between showing the control and fading it in.
pub const DEFAULT_FADE_DELAY_MS: u64 = 10;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Fixed-range policy has no ranges")]
    NoRanges,

    #[error("Album '{0}' is assigned more than one range")]
    DuplicateAlbum(String),

    #[error("Range for album '{album}' is empty ({start}..{end})")]
    EmptyRange {
        album: String,
        start: usize,
        end: usize,
    },

    #[error("Gap before album '{album}': expected start {expected}, found {found}")]
    RangeGap {
        album: String,
        expected: usize,
        found: usize,
    },

    #[error("Album '{album}' overlaps the previous range: expected start {expected}, found {found}")]
    RangeOverlap {
        album: String,
        expected: usize,
        found: usize,
    },
}

/// How the flat photo list is partitioned into albums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AlbumPolicy {
    /// Group by each photo's album attribute, albums in first-seen order.
    #[default]
    Grouping,
    /// Slice the list by fixed index ranges.
    ///
    /// Any reorder or insertion in the source list silently shifts photos
    /// into neighbouring albums, so prefer `Grouping` where possible.
    FixedRanges { ranges: Vec<AlbumRange> },
}

impl fmt::Display for AlbumPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlbumPolicy::Grouping => write!(f, "Grouping"),
            AlbumPolicy::FixedRanges { ranges } => write!(f, "Fixed Ranges ({})", ranges.len()),
        }
    }
}

/// Element ids the controller expects to find on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorIds {
    pub album_selection: String,
    pub album_view: String,
    pub album_photos: String,
    pub back_button: String,
    pub scroll_to_top: String,
}

impl AnchorIds {
    /// Anchors without which the page is malformed.
    pub fn required(&self) -> [&str; 4] {
        [
            self.album_selection.as_str(),
            self.album_view.as_str(),
            self.album_photos.as_str(),
            self.back_button.as_str(),
        ]
    }
}

impl Default for AnchorIds {
    fn default() -> Self {
        Self {
            album_selection: "album-selection".to_string(),
            album_view: "album-view".to_string(),
            album_photos: "album-photos".to_string(),
            back_button: "back-to-albums".to_string(),
            scroll_to_top: "scroll-to-top-btn".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollToTopConfig {
    pub threshold: f64,
    pub fade_delay_ms: u64,
}

impl ScrollToTopConfig {
    pub fn fade_delay(&self) -> Duration {
        Duration::from_millis(self.fade_delay_ms)
    }
}

impl Default for ScrollToTopConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SCROLL_THRESHOLD,
            fade_delay_ms: DEFAULT_FADE_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub album_policy: AlbumPolicy,
    pub anchors: AnchorIds,
    pub scroll_to_top: ScrollToTopConfig,
    pub lazy_loading: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            album_policy: AlbumPolicy::default(),
            anchors: AnchorIds::default(),
            scroll_to_top: ScrollToTopConfig::default(),
            lazy_loading: true,
        }
    }
}

impl GalleryConfig {
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: GalleryConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        debug!("Loading gallery config from {:?}", path);
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads the per-user config file, or defaults if there is none.
    pub fn load_or_default() -> ConfigResult<Self> {
        match default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                info!("No gallery config found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if let AlbumPolicy::FixedRanges { ranges } = &self.album_policy {
            validate_ranges(ranges)?;
        }
        Ok(())
    }
}

pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
