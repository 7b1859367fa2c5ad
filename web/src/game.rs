use crate::host::WebHost;
use crate::settings;
use crate::utils::*;
use clap::Args;
use gloo::timers::callback::Interval;
use memshuffle_core as game;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use web_time::Instant;
use yew::prelude::*;

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<game::GuessOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome: game::GuessOutcome| outcome.has_update())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Input(String),
    Submit,
    Guess(game::Rank),
    Tick,
    Refresh,
}

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    rank: game::Rank,
    color: game::Color,
    placement: game::Placement,
    label_visible: bool,
    enabled: bool,
    callback: Callback<game::Rank>,
}

fn tile_style(color: game::Color, placement: game::Placement) -> String {
    match placement {
        game::Placement::Row(_) => format!("background-color: {color};"),
        game::Placement::Arena(point) => format!(
            "background-color: {color}; left: {}px; top: {}px;",
            point.x, point.y
        ),
    }
}

fn tile_label(rank: game::Rank, visible: bool) -> String {
    if visible {
        rank.to_string()
    } else {
        String::new()
    }
}

#[function_component(TileView)]
fn tile_component(props: &TileProps) -> Html {
    let TileProps {
        rank,
        color,
        placement,
        label_visible,
        enabled,
        callback,
    } = props.clone();

    let mut class = classes!("game-button");
    if placement.is_scrambled() {
        class.push("scrambled");
    }
    if !enabled {
        class.push("locked");
    }

    let style = tile_style(color, placement);
    let label = tile_label(rank, label_visible);

    let onclick = enabled.then(|| {
        Callback::from(move |_: MouseEvent| {
            log::trace!("tile {} clicked", rank);
            callback.emit(rank);
        })
    });

    html! {
        <button type="button" {class} {style} {onclick} data-rank={rank.to_string()}>
            { label }
        </button>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    #[arg(skip)]
    pub config: Rc<game::GameConfig>,
}

pub(crate) struct GameView {
    session: Rc<RefCell<game::GameSession>>,
    settings: settings::Settings,
    input_text: String,
    arena_ref: NodeRef,
    prev_time: Option<u64>,
    _stopwatch_interval: Interval,
}

impl GameView {
    fn create_session(props: &GameProps) -> game::GameSession {
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);
        game::GameSession::new(game::GameConfig::clone(&props.config), seed).unwrap_or_else(|err| {
            log::error!("rejected config ({}), using defaults", err);
            game::GameSession::new(game::GameConfig::default(), seed)
                .expect("default config is valid")
        })
    }

    fn create_timer(ctx: &Context<Self>, cadence_ms: u32) -> Interval {
        let link = ctx.link().clone();
        Interval::new(cadence_ms, move || link.send_message(Msg::Tick))
    }

    fn get_time(&self) -> Option<u64> {
        self.session.borrow().elapsed_secs(Instant::now())
    }

    fn start_round(&mut self, ctx: &Context<Self>) {
        let started = self.session.borrow_mut().start_from_input(&self.input_text);
        let round = match started {
            Ok(round) => round,
            Err(err) => {
                log::debug!("start refused: {}", err);
                return;
            }
        };

        self.settings.last_count = self.session.borrow().tile_count();
        self.settings.local_save();
        self.prev_time = None;

        let session = Rc::clone(&self.session);
        let host = WebHost::new(ctx.link().clone(), self.arena_ref.clone());
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = game::run_phases(&session, round, &host).await;
            log::debug!("round {:?} phases ended: {:?}", round, outcome);
        });
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let session = Self::create_session(ctx.props());
        let cadence_ms = timer_millis(session.config().stopwatch_cadence());
        let settings: settings::Settings = LocalOrDefault::local_or_default();
        Self {
            session: Rc::new(RefCell::new(session)),
            input_text: settings.last_count.to_string(),
            settings,
            arena_ref: NodeRef::default(),
            prev_time: None,
            _stopwatch_interval: GameView::create_timer(ctx, cadence_ms),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Input(text) => {
                self.input_text = text;
                false
            }
            Submit => {
                self.start_round(ctx);
                true
            }
            Guess(rank) => {
                log::debug!("guess: {}", rank);
                self.session
                    .borrow_mut()
                    .guess(rank, Instant::now())
                    .has_update()
            }
            Tick => {
                let time = self.get_time();
                if self.prev_time != time {
                    self.prev_time = time;
                    true
                } else {
                    false
                }
            }
            Refresh => true,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let session = self.session.borrow();
        let config = session.config();
        let messages = &config.messages;

        let moves = format_stat(Some(session.moves()).filter(|&moves| moves > 0), "");
        let elapsed_time = format_stat(self.get_time(), "s");
        let score = format_stat(session.score(), "%");

        let oninput = ctx.link().callback(|e: InputEvent| {
            Msg::Input(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let on_guess = ctx.link().callback(Msg::Guess);

        let tile_view = |tile: &game::Tile| {
            html! {
                <TileView
                    key={tile.rank().to_string()}
                    rank={tile.rank()}
                    color={tile.color()}
                    placement={tile.placement()}
                    label_visible={tile.is_label_visible()}
                    enabled={tile.accepts_input()}
                    callback={on_guess.clone()}
                />
            }
        };
        let (scrambled, in_row): (Vec<_>, Vec<_>) = session
            .tiles()
            .iter()
            .partition(|tile| tile.placement().is_scrambled());

        html! {
            <div class="memshuffle">
                <h1>{ messages.title.clone() }</h1>
                <form {onsubmit}>
                    <label for="button-count">{ messages.prompt.clone() }</label>
                    <input
                        id="button-count"
                        type="number"
                        min={config.min_tiles.to_string()}
                        max={config.max_tiles.to_string()}
                        value={self.input_text.clone()}
                        {oninput}
                    />
                    <button type="submit">{ messages.go.clone() }</button>
                </form>
                <aside id="game-stats">
                    <h2>{ messages.game_stats.clone() }</h2>
                    <p>{ format!("{}: {}", messages.moves, moves) }</p>
                    <p>{ format!("{}: {}", messages.time, elapsed_time) }</p>
                    <p>{ format!("{}: {}", messages.score, score) }</p>
                </aside>
                <div id="game-space" ref={self.arena_ref.clone()}>
                    <div id="button-container">
                        { for in_row.into_iter().map(tile_view) }
                    </div>
                    { for scrambled.into_iter().map(tile_view) }
                </div>
                <p id="status-message" class={classes!(session.status().is_rejection().then_some("rejected"))}>
                    { session.status_message() }
                </p>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_tiles_render_an_empty_label() {
        assert_eq!(tile_label(4, true), "4");
        assert_eq!(tile_label(4, false), "");
    }

    #[test]
    fn scrambled_tiles_are_offset_inside_the_arena() {
        let color = game::DEFAULT_PALETTE[0];

        assert_eq!(
            tile_style(color, game::Placement::Row(0)),
            "background-color: #FF6B6B;"
        );
        assert_eq!(
            tile_style(color, game::Placement::Arena(game::Point::new(12, 34))),
            "background-color: #FF6B6B; left: 12px; top: 34px;"
        );
    }

    #[test]
    fn only_real_guesses_trigger_a_redraw() {
        assert!(Ok::<_, game::GameError>(game::GuessOutcome::Correct).has_update());
        assert!(!Ok::<_, game::GameError>(game::GuessOutcome::NoChange).has_update());
        assert!(!Err::<game::GuessOutcome, _>(game::GameError::UnknownTile(9)).has_update());
    }
}
