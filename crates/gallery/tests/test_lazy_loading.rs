#[cfg(test)]
mod tests {
    use gallery::{GalleryController, Message, PageSource};
    use gallery_config::GalleryConfig;
    use gallery_types::{LoadingState, Photo};

    fn gallery(lazy_loading: bool) -> GalleryController {
        let config = GalleryConfig {
            lazy_loading,
            ..GalleryConfig::default()
        };
        let photos = vec![
            Photo::new("a.jpg", "a_hi.jpg", "A").with_album("x"),
            Photo::new("b.jpg", "b_hi.jpg", "B").with_album("x"),
            Photo::new("c.jpg", "c_hi.jpg", "C")
                .with_album("x")
                .with_lazy(false),
        ];
        let page = PageSource::new(photos).with_anchors(&config.anchors);
        GalleryController::new(page, config).unwrap()
    }

    fn visible(gallery: &mut GalleryController, index: usize, intersecting: bool) {
        let item = gallery.grid_items()[index].id;
        gallery.update(Message::Visibility { item, intersecting });
    }

    #[test]
    fn test_reveal_on_first_visibility_only() {
        let mut gallery = gallery(true);
        gallery.open_album("x");

        assert_eq!(gallery.grid_items()[0].src, None);
        assert!(gallery.grid_items()[0].is_lazy());

        visible(&mut gallery, 0, true);
        let revealed = gallery.grid_items()[0].clone();
        assert_eq!(revealed.src.as_deref(), Some("a_hi.jpg"));
        assert_eq!(revealed.loading, LoadingState::Loaded);
        assert!(!revealed.is_lazy());

        visible(&mut gallery, 0, false);
        visible(&mut gallery, 0, true);
        assert_eq!(gallery.grid_items()[0], revealed);

        // Neighbours are untouched
        assert_eq!(gallery.grid_items()[1].src, None);
    }

    #[test]
    fn test_leaving_viewport_before_reveal() {
        let mut gallery = gallery(true);
        gallery.open_album("x");

        visible(&mut gallery, 1, false);
        assert_eq!(gallery.grid_items()[1].src, None);

        visible(&mut gallery, 1, true);
        assert_eq!(gallery.grid_items()[1].src.as_deref(), Some("b_hi.jpg"));
    }

    #[test]
    fn test_non_lazy_photo_shows_low_res() {
        let mut gallery = gallery(true);
        gallery.open_album("x");

        assert_eq!(gallery.grid_items()[2].src.as_deref(), Some("c.jpg"));
        visible(&mut gallery, 2, true);
        assert_eq!(gallery.grid_items()[2].src.as_deref(), Some("c.jpg"));
    }

    #[test]
    fn test_lazy_loading_disabled() {
        let mut gallery = gallery(false);
        gallery.open_album("x");

        let sources: Vec<Option<&str>> = gallery
            .grid_items()
            .iter()
            .map(|item| item.src.as_deref())
            .collect();
        assert_eq!(sources, vec![Some("a.jpg"), Some("b.jpg"), Some("c.jpg")]);
        assert_eq!(
            gallery.view().grid_sources,
            vec![
                Some("a.jpg".to_string()),
                Some("b.jpg".to_string()),
                Some("c.jpg".to_string())
            ]
        );
    }
}
