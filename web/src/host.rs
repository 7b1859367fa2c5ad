use core::future::Future;
use core::time::Duration;
use futures_channel::oneshot;
use gloo::timers::callback::Timeout;
use memshuffle_core as game;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::game::{GameView, Msg};
use crate::utils::timer_millis;

/// Runs the phase sequence against the rendered arena of a [`GameView`].
pub(crate) struct WebHost {
    link: Scope<GameView>,
    arena_ref: NodeRef,
}

impl WebHost {
    pub(crate) fn new(link: Scope<GameView>, arena_ref: NodeRef) -> Self {
        Self { link, arena_ref }
    }

    fn arena(&self) -> Option<HtmlElement> {
        self.arena_ref.cast::<HtmlElement>()
    }
}

impl game::PhaseHost for WebHost {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        let millis = timer_millis(duration);
        async move {
            let (tx, rx) = oneshot::channel();
            let _timeout = Timeout::new(millis, move || {
                let _ = tx.send(());
            });
            if rx.await.is_err() {
                log::warn!("timer dropped before firing");
            }
        }
    }

    fn measure_arena(&self) -> game::Result<game::Extent> {
        let arena = self.arena().ok_or(game::GameError::ArenaUnavailable)?;
        Ok(game::Extent::new(
            arena.client_width().max(0) as game::Px,
            arena.client_height().max(0) as game::Px,
        ))
    }

    fn measure_tile(&self, rank: game::Rank) -> game::Extent {
        let selector = format!(".game-button[data-rank=\"{rank}\"]");
        self.arena()
            .and_then(|arena| arena.query_selector(&selector).ok().flatten())
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .map_or_else(game::Extent::default, |tile| {
                game::Extent::new(
                    tile.offset_width().max(0) as game::Px,
                    tile.offset_height().max(0) as game::Px,
                )
            })
    }

    fn changed(&self) {
        self.link.send_message(Msg::Refresh);
    }
}
