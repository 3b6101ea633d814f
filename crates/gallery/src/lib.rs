pub mod controller;
pub mod event_loop;
pub mod lazy;
pub mod message;
pub mod page;
pub mod scroll_top;

pub use controller::{GalleryController, GalleryView, LightboxView};
pub use event_loop::EventLoop;
pub use message::{
    AlbumMessage, ContextMenuTarget, Effect, FadeTicket, LightboxMessage, Message, OverlayTarget,
};
pub use page::PageSource;

use gallery_config::ConfigError;

pub type GalleryResult<T> = Result<T, GalleryError>;

#[derive(thiserror::Error, Debug)]
pub enum GalleryError {
    #[error("Missing required page element: #{0}")]
    MissingAnchor(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid page description: {0}")]
    Page(#[from] serde_json::Error),
}
