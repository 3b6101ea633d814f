pub mod loading_state;

pub use loading_state::{LoadingEvent, LoadingState};
