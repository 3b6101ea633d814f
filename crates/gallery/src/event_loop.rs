use crate::{
    GalleryController,
    message::{Effect, FadeTicket, Message},
};
use tokio::{
    sync::mpsc,
    time::{Instant, sleep_until},
};
use tracing::debug;

/// Drives a controller from a channel of host events.
///
/// Messages are applied one at a time in arrival order. Fade timers are
/// handled here; every other effect is forwarded to the host.
pub struct EventLoop {
    controller: GalleryController,
    messages: mpsc::Receiver<Message>,
    effects: mpsc::UnboundedSender<Effect>,
}

impl EventLoop {
    pub fn new(
        controller: GalleryController,
        messages: mpsc::Receiver<Message>,
        effects: mpsc::UnboundedSender<Effect>,
    ) -> Self {
        Self {
            controller,
            messages,
            effects,
        }
    }

    pub fn channel(
        controller: GalleryController,
        capacity: usize,
    ) -> (
        Self,
        mpsc::Sender<Message>,
        mpsc::UnboundedReceiver<Effect>,
    ) {
        let (message_tx, message_rx) = mpsc::channel(capacity);
        let (effect_tx, effect_rx) = mpsc::unbounded_channel();

        (
            Self::new(controller, message_rx, effect_tx),
            message_tx,
            effect_rx,
        )
    }

    /// Runs until every message sender is dropped, then hands the
    /// controller back.
    pub async fn run(mut self) -> GalleryController {
        let mut pending_fade: Option<(FadeTicket, Instant)> = None;

        loop {
            let deadline = pending_fade.map(|(_, at)| at);

            tokio::select! {
                message = self.messages.recv() => {
                    let Some(message) = message else {
                        break;
                    };
                    let effects = self.controller.update(message);
                    self.dispatch(effects, &mut pending_fade);
                }
                _ = fade_timer(deadline) => {
                    if let Some((ticket, _)) = pending_fade.take() {
                        let effects = self.controller.update(Message::FadeElapsed(ticket));
                        self.dispatch(effects, &mut pending_fade);
                    }
                }
            }
        }

        debug!("Gallery event loop finished");
        self.controller
    }

    fn dispatch(&self, effects: Vec<Effect>, pending_fade: &mut Option<(FadeTicket, Instant)>) {
        for effect in effects {
            match effect {
                Effect::ScheduleFade { ticket, delay } => {
                    *pending_fade = Some((ticket, Instant::now() + delay));
                }
                other => {
                    if self.effects.send(other).is_err() {
                        debug!("Effect receiver dropped");
                    }
                }
            }
        }
    }
}

async fn fade_timer(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => std::future::pending().await,
    }
}
