//! Gallery state and the intent methods that drive it

use crate::{
    GalleryResult,
    lazy::LazyLoader,
    message::{AlbumMessage, ContextMenuTarget, Effect, LightboxMessage, Message, OverlayTarget},
    page::PageSource,
    scroll_top::{ControlStyle, ScrollToTop},
};
use gallery_config::GalleryConfig;
use gallery_nav::{AlbumIndex, LightboxNavigator};
use gallery_types::{ActiveView, Album, AlbumCard, AlbumId, GridItem, GridItemId, Thumbnail};
use serde::Serialize;
use tracing::{debug, info, warn};

/// What the lightbox overlay currently displays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LightboxView {
    pub open: bool,
    pub image_src: Option<String>,
    pub caption: Option<String>,
}

/// Snapshot of everything the host reflects onto the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryView {
    pub active_view: ActiveView,
    pub open_album: Option<AlbumId>,
    pub lightbox: LightboxView,
    pub current_index: Option<usize>,
    pub active_thumbnail: Option<usize>,
    pub thumbnail_count: usize,
    pub thumbnail_sources: Vec<String>,
    pub grid_sources: Vec<Option<String>>,
    pub grid_lazy: Vec<bool>,
    pub page_scroll_locked: bool,
    pub scroll_to_top: Option<ControlStyle>,
}

pub struct GalleryController {
    config: GalleryConfig,
    index: AlbumIndex,
    cards: Vec<AlbumCard>,
    active_view: ActiveView,
    open_album: Option<AlbumId>,
    nav: LightboxNavigator,
    lightbox: LightboxView,
    grid: Vec<GridItem>,
    thumbnails: Vec<Thumbnail>,
    lazy: LazyLoader,
    scroll_top: Option<ScrollToTop>,
    page_scroll_locked: bool,
    generation: u64,
    effects: Vec<Effect>,
}

impl GalleryController {
    /// Validates the page anchors and builds the album index.
    pub fn new(page: PageSource, config: GalleryConfig) -> GalleryResult<Self> {
        page.require_anchors(&config.anchors)?;

        let index = AlbumIndex::build(&page.photos, &config.album_policy)?;

        for card in &page.album_cards {
            if !index.contains(card.album.as_str()) {
                warn!("Album card '{}' has no matching photos", card.album);
            }
        }

        let scroll_top = page
            .has_anchor(&config.anchors.scroll_to_top)
            .then(|| ScrollToTop::new(&config.scroll_to_top));

        Ok(Self {
            index,
            cards: page.album_cards,
            active_view: ActiveView::AlbumSelection,
            open_album: None,
            nav: LightboxNavigator::new(),
            lightbox: LightboxView::default(),
            grid: Vec::new(),
            thumbnails: Vec::new(),
            lazy: LazyLoader::new(),
            scroll_top,
            page_scroll_locked: false,
            generation: 0,
            effects: Vec::new(),
            config,
        })
    }

    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::Album(AlbumMessage::CardClicked(id)) => self.open_album(id.as_str()),
            Message::Album(AlbumMessage::BackClicked) => self.back_to_albums(),
            Message::Album(AlbumMessage::GridItemClicked(idx)) => self.open_lightbox(idx),
            Message::Lightbox(LightboxMessage::Prev) => self.prev(),
            Message::Lightbox(LightboxMessage::Next) => self.next(),
            Message::Lightbox(LightboxMessage::ThumbnailClicked(idx)) => {
                if idx < self.thumbnails.len() {
                    self.show(idx as isize);
                } else {
                    debug!("Ignoring click on missing thumbnail {}", idx);
                }
            }
            Message::Lightbox(LightboxMessage::CloseClicked) => self.close(),
            Message::Lightbox(LightboxMessage::OverlayClicked(target)) => {
                if target == OverlayTarget::Background {
                    self.close();
                }
            }
            Message::Visibility { item, intersecting } => {
                self.on_visibility(item, intersecting);
            }
            Message::ContextMenu(target) => self.on_context_menu(target),
            Message::Scrolled { offset_y } => self.on_scroll(offset_y),
            Message::ScrollToTopClicked => {
                if let Some(control) = &self.scroll_top {
                    self.effects.push(control.on_click());
                }
            }
            Message::FadeElapsed(ticket) => {
                if let Some(control) = &mut self.scroll_top {
                    control.on_fade_elapsed(ticket);
                }
            }
        }

        self.take_effects()
    }

    /// Rebuilds the grid and thumbnail strip for `id` and switches to the
    /// album view. Unknown ids open an empty album. An open lightbox is
    /// closed first.
    pub fn open_album(&mut self, id: &str) {
        if self.lightbox.open {
            self.close();
        }

        let photos = match self.index.get(id) {
            Some(album) => album.photos.clone(),
            None => {
                warn!("Opening unknown album '{}' as empty", id);
                Vec::new()
            }
        };

        self.generation += 1;
        self.lazy.clear();

        let lazy_loading = self.config.lazy_loading;
        let generation = self.generation;
        self.grid = photos
            .iter()
            .enumerate()
            .map(|(idx, photo)| {
                GridItem::new(GridItemId::new(generation, idx), photo.clone(), lazy_loading)
            })
            .collect();
        for item in &self.grid {
            self.lazy.observe(item);
        }

        self.thumbnails = photos
            .iter()
            .enumerate()
            .map(|(idx, photo)| Thumbnail::new(idx, photo))
            .collect();

        info!("Opened album '{}' with {} photos", id, photos.len());

        self.nav.load(photos);
        self.open_album = Some(AlbumId::new(id));
        self.active_view = ActiveView::Album;
    }

    pub fn back_to_albums(&mut self) {
        self.active_view = ActiveView::AlbumSelection;
    }

    /// Shows `idx` in the lightbox and locks page scroll.
    pub fn open_lightbox(&mut self, idx: usize) {
        if idx >= self.nav.total() {
            debug!("Ignoring click on missing grid item {}", idx);
            return;
        }

        if self.nav.open(idx as isize).is_some() {
            self.present();
            self.lightbox.open = true;
            self.page_scroll_locked = true;
        }
    }

    /// Displays the photo at `index` wrapped into the album.
    pub fn show(&mut self, index: isize) {
        if self.nav.show(index).is_some() {
            self.present();
        }
    }

    pub fn next(&mut self) {
        if self.nav.go_next().is_some() {
            self.present();
        }
    }

    pub fn prev(&mut self) {
        if self.nav.go_prev().is_some() {
            self.present();
        }
    }

    /// Hides the overlay. Photos and thumbnails stay until the next open.
    pub fn close(&mut self) {
        self.nav.close();
        self.lightbox.open = false;
        self.page_scroll_locked = false;
    }

    fn present(&mut self) {
        let Some(idx) = self.nav.index() else {
            return;
        };
        let Some(photo) = self.nav.current() else {
            return;
        };

        self.lightbox.image_src = Some(photo.high_res_src.clone());
        self.lightbox.caption = Some(photo.caption.clone());

        for thumb in &mut self.thumbnails {
            thumb.active = thumb.index == idx;
        }
        self.effects.push(Effect::ScrollThumbnailIntoView(idx));
    }

    fn on_visibility(&mut self, id: GridItemId, intersecting: bool) {
        if id.generation != self.generation {
            debug!("Ignoring visibility of stale grid item {:?}", id);
            return;
        }

        if let Some(item) = self.grid.get_mut(id.index) {
            self.lazy.on_visibility(item, intersecting);
        }
    }

    fn on_context_menu(&mut self, target: ContextMenuTarget) {
        let suppress = match target {
            ContextMenuTarget::LightboxImage => self.lightbox.open,
            ContextMenuTarget::GridItem(idx) => idx < self.grid.len(),
            ContextMenuTarget::Other => false,
        };

        if suppress {
            self.effects.push(Effect::PreventContextMenu);
        }
    }

    fn on_scroll(&mut self, offset_y: f64) {
        if let Some(control) = &mut self.scroll_top
            && let Some(effect) = control.on_scroll(offset_y)
        {
            self.effects.push(effect);
        }
    }

    /// Drains effects queued by intent methods.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn view(&self) -> GalleryView {
        GalleryView {
            active_view: self.active_view,
            open_album: self.open_album.clone(),
            lightbox: self.lightbox.clone(),
            current_index: self.nav.index(),
            active_thumbnail: self.thumbnails.iter().position(|t| t.active),
            thumbnail_count: self.thumbnails.len(),
            thumbnail_sources: self.thumbnails.iter().map(|t| t.src.clone()).collect(),
            grid_sources: self.grid.iter().map(|item| item.src.clone()).collect(),
            grid_lazy: self.grid.iter().map(GridItem::is_lazy).collect(),
            page_scroll_locked: self.page_scroll_locked,
            scroll_to_top: self.scroll_top.as_ref().map(ScrollToTop::style),
        }
    }

    pub fn albums(&self) -> &[Album] {
        self.index.albums()
    }

    pub fn album_index(&self) -> &AlbumIndex {
        &self.index
    }

    pub fn album_cards(&self) -> &[AlbumCard] {
        &self.cards
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    pub fn current_index(&self) -> Option<usize> {
        self.nav.index()
    }

    pub fn is_modal_open(&self) -> bool {
        self.lightbox.open
    }

    pub fn lightbox(&self) -> &LightboxView {
        &self.lightbox
    }

    pub fn grid_items(&self) -> &[GridItem] {
        &self.grid
    }

    pub fn thumbnails(&self) -> &[Thumbnail] {
        &self.thumbnails
    }

    pub fn current_album_photos(&self) -> &[gallery_types::Photo] {
        self.nav.photos()
    }

    pub fn is_page_scroll_locked(&self) -> bool {
        self.page_scroll_locked
    }

    pub fn scroll_to_top(&self) -> Option<&ScrollToTop> {
        self.scroll_top.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_types::Photo;

    fn controller(photos: Vec<Photo>) -> GalleryController {
        let config = GalleryConfig::default();
        let page = PageSource::new(photos).with_anchors(&config.anchors);
        GalleryController::new(page, config).unwrap()
    }

    fn sample() -> GalleryController {
        controller(vec![
            Photo::new("p0.jpg", "p0_hi.jpg", "zero").with_album("x"),
            Photo::new("p1.jpg", "p1_hi.jpg", "one").with_album("y"),
            Photo::new("p2.jpg", "p2_hi.jpg", "two").with_album("x"),
        ])
    }

    #[test]
    fn test_open_album_switches_view() {
        let mut gallery = sample();
        assert_eq!(gallery.active_view(), ActiveView::AlbumSelection);

        gallery.open_album("x");

        assert_eq!(gallery.active_view(), ActiveView::Album);
        assert_eq!(gallery.grid_items().len(), 2);
        assert_eq!(gallery.thumbnails().len(), 2);
        assert!(!gallery.is_modal_open());

        gallery.back_to_albums();
        assert_eq!(gallery.active_view(), ActiveView::AlbumSelection);
    }

    #[test]
    fn test_present_shows_high_res_and_caption() {
        let mut gallery = sample();
        gallery.open_album("x");
        gallery.open_lightbox(1);

        let lightbox = gallery.lightbox();
        assert!(lightbox.open);
        assert_eq!(lightbox.image_src.as_deref(), Some("p2_hi.jpg"));
        assert_eq!(lightbox.caption.as_deref(), Some("two"));
        assert!(gallery.is_page_scroll_locked());
        assert_eq!(
            gallery.take_effects(),
            vec![Effect::ScrollThumbnailIntoView(1)]
        );
    }

    #[test]
    fn test_close_restores_scroll_and_keeps_album() {
        let mut gallery = sample();
        gallery.open_album("x");
        gallery.open_lightbox(0);
        gallery.close();

        assert!(!gallery.is_modal_open());
        assert!(!gallery.is_page_scroll_locked());
        assert_eq!(gallery.thumbnails().len(), 2);
        assert_eq!(gallery.current_album_photos().len(), 2);
    }

    #[test]
    fn test_switching_album_closes_lightbox() {
        let mut gallery = sample();
        gallery.open_album("x");
        gallery.open_lightbox(0);
        assert!(gallery.is_page_scroll_locked());

        gallery.open_album("y");

        assert!(!gallery.is_modal_open());
        assert!(!gallery.is_page_scroll_locked());
        assert!(gallery.thumbnails().iter().all(|t| !t.active));

        gallery.open_lightbox(0);
        assert_eq!(gallery.lightbox().image_src.as_deref(), Some("p1_hi.jpg"));
        assert_eq!(gallery.view().active_thumbnail, Some(0));
    }

    #[test]
    fn test_view_reports_thumbnails_and_lazy_flags() {
        let mut gallery = sample();
        gallery.open_album("x");
        let item = gallery.grid_items()[1].id;
        gallery.update(Message::Visibility {
            item,
            intersecting: true,
        });

        let view = gallery.view();
        assert_eq!(view.thumbnail_sources, vec!["p0_hi.jpg", "p2_hi.jpg"]);
        assert_eq!(view.grid_lazy, vec![true, false]);
        assert_eq!(
            view.grid_sources,
            vec![None, Some("p2_hi.jpg".to_string())]
        );
    }

    #[test]
    fn test_unknown_album_is_empty_and_inert() {
        let mut gallery = sample();
        gallery.open_album("missing");

        assert_eq!(gallery.active_view(), ActiveView::Album);
        assert!(gallery.grid_items().is_empty());
        assert!(gallery.thumbnails().is_empty());

        gallery.next();
        gallery.prev();
        gallery.show(-1);
        gallery.open_lightbox(0);

        assert!(!gallery.is_modal_open());
        assert_eq!(gallery.current_index(), None);
        assert!(gallery.take_effects().is_empty());
    }

    #[test]
    fn test_overlay_click_closes_only_on_background() {
        let mut gallery = sample();
        gallery.open_album("x");
        gallery.open_lightbox(0);

        for target in [
            OverlayTarget::Image,
            OverlayTarget::Caption,
            OverlayTarget::Thumbnail(1),
            OverlayTarget::Control,
        ] {
            gallery.update(Message::Lightbox(LightboxMessage::OverlayClicked(target)));
            assert!(gallery.is_modal_open(), "{target:?} closed the lightbox");
        }

        gallery.update(Message::Lightbox(LightboxMessage::OverlayClicked(
            OverlayTarget::Background,
        )));
        assert!(!gallery.is_modal_open());
    }

    #[test]
    fn test_context_menu_suppression() {
        let mut gallery = sample();
        gallery.open_album("x");

        let effects = gallery.update(Message::ContextMenu(ContextMenuTarget::GridItem(0)));
        assert_eq!(effects, vec![Effect::PreventContextMenu]);

        let effects = gallery.update(Message::ContextMenu(ContextMenuTarget::LightboxImage));
        assert!(effects.is_empty());

        gallery.open_lightbox(0);
        gallery.take_effects();
        let effects = gallery.update(Message::ContextMenu(ContextMenuTarget::LightboxImage));
        assert_eq!(effects, vec![Effect::PreventContextMenu]);

        let effects = gallery.update(Message::ContextMenu(ContextMenuTarget::Other));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_stale_visibility_is_ignored() {
        let mut gallery = sample();
        gallery.open_album("x");
        let stale = gallery.grid_items()[0].id;

        gallery.open_album("x");
        gallery.update(Message::Visibility {
            item: stale,
            intersecting: true,
        });

        assert!(gallery.grid_items()[0].src.is_none());
    }

    #[test]
    fn test_scroll_to_top_disabled_without_anchor() {
        let config = GalleryConfig::default();
        let page = PageSource::default()
            .with_anchor("album-selection")
            .with_anchor("album-view")
            .with_anchor("album-photos")
            .with_anchor("back-to-albums");
        let mut gallery = GalleryController::new(page, config).unwrap();

        assert!(gallery.scroll_to_top().is_none());
        assert!(gallery.update(Message::Scrolled { offset_y: 900.0 }).is_empty());
        assert!(gallery.update(Message::ScrollToTopClicked).is_empty());
        assert!(gallery.view().scroll_to_top.is_none());
    }
}
