use gallery_types::{AlbumId, GridItemId};
use std::time::Duration;

/// Which part of the lightbox overlay received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTarget {
    Background,
    Image,
    Caption,
    Thumbnail(usize),
    Control,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuTarget {
    LightboxImage,
    GridItem(usize),
    Other,
}

/// Pairs a scheduled fade with the reveal that requested it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FadeTicket(pub(crate) u64);

/// Host events, as delivered by the page adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Album(AlbumMessage),
    Lightbox(LightboxMessage),
    Visibility { item: GridItemId, intersecting: bool },
    ContextMenu(ContextMenuTarget),
    Scrolled { offset_y: f64 },
    ScrollToTopClicked,
    FadeElapsed(FadeTicket),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlbumMessage {
    CardClicked(AlbumId),
    BackClicked,
    GridItemClicked(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LightboxMessage {
    Prev,
    Next,
    ThumbnailClicked(usize),
    CloseClicked,
    OverlayClicked(OverlayTarget),
}

/// One-shot side effects the host carries out after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ScrollThumbnailIntoView(usize),
    SmoothScrollToTop,
    ScheduleFade { ticket: FadeTicket, delay: Duration },
    PreventContextMenu,
}
