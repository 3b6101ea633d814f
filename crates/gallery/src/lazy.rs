use gallery_types::{GridItem, GridItemId};
use shared::LoadingEvent;
use std::collections::HashSet;
use tracing::debug;

/// Tracks which deferred grid items are still being watched for visibility.
#[derive(Debug, Clone, Default)]
pub struct LazyLoader {
    observed: HashSet<GridItemId>,
}

impl LazyLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, item: &GridItem) {
        if item.is_lazy() {
            self.observed.insert(item.id);
        }
    }

    pub fn unobserve(&mut self, id: GridItemId) {
        self.observed.remove(&id);
    }

    pub fn is_observing(&self, id: GridItemId) -> bool {
        self.observed.contains(&id)
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    pub fn clear(&mut self) {
        self.observed.clear();
    }

    /// Applies a visibility change. Returns `true` if `item` was revealed.
    pub fn on_visibility(&mut self, item: &mut GridItem, intersecting: bool) -> bool {
        if !self.is_observing(item.id) {
            return false;
        }

        let next = LoadingEvent::from_intersecting(intersecting).apply_to_state(item.loading);
        if next == item.loading {
            return false;
        }

        item.loading = next;
        item.src = Some(item.deferred_src().to_string());
        self.unobserve(item.id);
        debug!("Revealed lazy grid item {}", item.id.index);

        true
    }
}
