use crate::message::{Effect, FadeTicket};
use gallery_config::ScrollToTopConfig;
use serde::Serialize;
use std::time::Duration;

/// Inline style of the scroll-to-top control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ControlStyle {
    pub displayed: bool,
    pub opacity: f32,
    pub visible: bool,
}

impl ControlStyle {
    fn hidden() -> Self {
        Self {
            displayed: false,
            opacity: 0.0,
            visible: false,
        }
    }
}

impl Default for ControlStyle {
    fn default() -> Self {
        Self::hidden()
    }
}

#[derive(Debug, Clone)]
pub struct ScrollToTop {
    threshold: f64,
    fade_delay: Duration,
    style: ControlStyle,
    ticket: u64,
    pending: Option<FadeTicket>,
}

impl ScrollToTop {
    pub fn new(config: &ScrollToTopConfig) -> Self {
        Self {
            threshold: config.threshold,
            fade_delay: config.fade_delay(),
            style: ControlStyle::default(),
            ticket: 0,
            pending: None,
        }
    }

    pub fn style(&self) -> ControlStyle {
        self.style
    }

    pub fn is_shown(&self) -> bool {
        self.style.displayed && self.style.visible
    }

    /// Past the threshold the control is displayed and a fade is scheduled;
    /// otherwise it is hidden at once and any pending fade is dropped.
    pub fn on_scroll(&mut self, offset_y: f64) -> Option<Effect> {
        if offset_y > self.threshold {
            self.style.displayed = true;

            if self.style.visible || self.pending.is_some() {
                return None;
            }

            self.ticket += 1;
            let ticket = FadeTicket(self.ticket);
            self.pending = Some(ticket);

            Some(Effect::ScheduleFade {
                ticket,
                delay: self.fade_delay,
            })
        } else {
            self.style.opacity = 0.0;
            self.style.visible = false;
            self.pending = None;
            None
        }
    }

    /// Completes a fade. Stale tickets are ignored.
    pub fn on_fade_elapsed(&mut self, ticket: FadeTicket) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }

        self.pending = None;
        self.style.opacity = 1.0;
        self.style.visible = true;
        true
    }

    pub fn on_click(&self) -> Effect {
        Effect::SmoothScrollToTop
    }
}
