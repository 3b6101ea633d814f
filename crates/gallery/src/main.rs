use gallery::{GalleryController, GalleryResult, PageSource};
use gallery_config::GalleryConfig;
use std::{path::PathBuf, process::ExitCode};
use tracing::{error, info};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = std::env::args().skip(1).map(PathBuf::from);
    let Some(page_path) = args.next() else {
        error!("Usage: lightbox-gallery <page.json> [config.toml]");
        return ExitCode::FAILURE;
    };
    let config_path = args.next();

    match run(page_path, config_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(page_path: PathBuf, config_path: Option<PathBuf>) -> GalleryResult<()> {
    let config = match config_path {
        Some(path) => GalleryConfig::load(&path)?,
        None => GalleryConfig::load_or_default()?,
    };
    let page = PageSource::load(&page_path)?;
    let gallery = GalleryController::new(page, config)?;

    for album in gallery.albums() {
        info!("Album '{}': {} photos", album.id, album.len());
    }

    let orphans: Vec<&str> = gallery
        .album_cards()
        .iter()
        .filter(|card| !gallery.album_index().contains(card.album.as_str()))
        .map(|card| card.label())
        .collect();
    if !orphans.is_empty() {
        info!("Cards without photos: {}", orphans.join(", "));
    }

    Ok(())
}
