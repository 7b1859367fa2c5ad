use core::time::Duration;
use rand::prelude::*;
use rand::rngs::SmallRng;
use web_time::Instant;

use crate::*;

/// Valid transitions:
/// - Idle | Displaying | AwaitingGuess | Won | Lost -> Displaying (start)
/// - Displaying -> Scrambling
/// - Scrambling -> AwaitingGuess
/// - Scrambling -> Idle (phase sequence failed)
/// - any phase but Scrambling -> Idle (reset)
/// - AwaitingGuess -> Won
/// - AwaitingGuess -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No tiles exist
    #[default]
    Idle,
    /// Tiles sit in a row with their labels shown
    Displaying,
    /// Tiles are being repositioned, a new round cannot start
    Scrambling,
    /// Player reproduces the original order
    AwaitingGuess,
    /// Every tile was picked in order
    Won,
    /// A tile was picked out of order
    Lost,
}

impl Phase {
    /// Indicates that `start` is currently refused.
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Scrambling)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn accepts_guesses(self) -> bool {
        matches!(self, Self::AwaitingGuess)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    NoChange,
    Correct,
    Won,
    Lost,
}

impl GuessOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    rng: SmallRng,
    round: RoundId,
    phase: Phase,
    status: Status,
    tiles: Vec<Tile>,
    current_index: TileCount,
    scrambles_done: TileCount,
    scoreboard: Scoreboard,
    stopwatch: Stopwatch,
}

impl GameSession {
    pub fn new(config: GameConfig, seed: u64) -> core::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: SmallRng::seed_from_u64(seed),
            round: RoundId::default(),
            phase: Phase::Idle,
            status: Status::Ready,
            tiles: Vec::new(),
            current_index: 0,
            scrambles_done: 0,
            scoreboard: Scoreboard::new(),
            stopwatch: Stopwatch::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn round(&self) -> RoundId {
        self.round
    }

    pub fn is_current(&self, round: RoundId) -> bool {
        self.round == round
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn status_message(&self) -> String {
        self.status.message(&self.config)
    }

    /// Tiles in expected order, so `tiles()[i]` has rank `i + 1`.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, rank: Rank) -> Option<&Tile> {
        self.tile_index(rank).map(|index| &self.tiles[index])
    }

    pub fn tile_count(&self) -> TileCount {
        self.tiles.len() as TileCount
    }

    pub fn current_index(&self) -> TileCount {
        self.current_index
    }

    pub fn scrambles_done(&self) -> TileCount {
        self.scrambles_done
    }

    pub fn moves(&self) -> TileCount {
        self.scoreboard.moves()
    }

    pub fn correct(&self) -> TileCount {
        self.scoreboard.correct()
    }

    pub fn score(&self) -> Option<u8> {
        self.scoreboard.score_percent()
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    pub fn elapsed_secs(&self, now: Instant) -> Option<u64> {
        self.stopwatch.elapsed_secs(now)
    }

    pub fn display_duration(&self) -> Duration {
        self.config.display_duration(self.tile_count())
    }

    /// Parses `input` as a tile count, then behaves like [`Self::start`].
    pub fn start_from_input(&mut self, input: &str) -> Result<RoundId> {
        match parse_tile_count(input) {
            Ok(count) => self.start(count),
            Err(err) => self.reject(err),
        }
    }

    /// Replaces any previous round with `count` fresh tiles in the display phase.
    ///
    /// Rejected while scrambling; every other phase is abandoned.
    pub fn start(&mut self, count: i64) -> Result<RoundId> {
        let count = match self.config.check_tile_count(count) {
            Ok(count) => count,
            Err(err) => return self.reject(err),
        };
        if self.phase.is_busy() {
            return self.reject(GameError::Busy);
        }

        if !matches!(self.phase, Phase::Idle) {
            log::debug!("abandoning round {:?} in {:?}", self.round, self.phase);
        }
        self.clear();

        let colors = PaletteSampler::new(&self.config.palette).sample(&mut self.rng, count);
        self.tiles = colors
            .into_iter()
            .zip(1..)
            .map(|(color, rank)| Tile::new(rank, color))
            .collect();
        self.scoreboard.set_total(count);
        self.phase = Phase::Displaying;
        self.status = Status::Showing { count };

        log::debug!("round {:?} started with {} tiles", self.round, count);
        Ok(self.round)
    }

    /// Drops the current round and returns to idle.
    pub fn reset(&mut self) -> Result<()> {
        if self.phase.is_busy() {
            return self.reject(GameError::Busy);
        }
        self.clear();
        self.status = Status::Ready;
        Ok(())
    }

    /// Moves a displayed round into its scramble phase, hiding every label.
    ///
    /// Returns `false` if `round` is no longer the live one.
    pub fn begin_scramble(&mut self, round: RoundId) -> bool {
        if !self.is_current(round) || !matches!(self.phase, Phase::Displaying) {
            return false;
        }

        for tile in &mut self.tiles {
            tile.show_label(false);
            tile.disable_input();
        }
        self.scrambles_done = 0;
        self.phase = Phase::Scrambling;
        self.status = Status::Shuffling;
        log::debug!("round {:?} scrambling", round);
        true
    }

    /// Places every tile independently at a uniformly random offset inside `arena`.
    ///
    /// A tile's reachable offsets are the arena size minus its own size; tiles
    /// may overlap. Returns `false` if `round` is not scrambling anymore.
    pub fn scramble_once(
        &mut self,
        round: RoundId,
        arena: Extent,
        mut tile_size: impl FnMut(Rank) -> Extent,
    ) -> bool {
        if !self.is_current(round) || !matches!(self.phase, Phase::Scrambling) {
            return false;
        }

        for tile in self.tiles.iter_mut() {
            let room = arena.room_for(tile_size(tile.rank()));
            let point = Point::new(
                self.rng.random_range(0..=room.width),
                self.rng.random_range(0..=room.height),
            );
            log::trace!("tile {} -> {:?}", tile.rank(), point);
            tile.place(point);
        }
        self.scrambles_done = self.scrambles_done.saturating_add(1);
        true
    }

    pub fn scrambles_remaining(&self) -> TileCount {
        match self.phase {
            Phase::Displaying => self.tile_count(),
            Phase::Scrambling => self.tile_count().saturating_sub(self.scrambles_done),
            _ => 0,
        }
    }

    /// Ends the scramble phase: labels hidden, input enabled, stopwatch running.
    pub fn open_guessing(&mut self, round: RoundId, now: Instant) -> bool {
        if !self.is_current(round) || !matches!(self.phase, Phase::Scrambling) {
            return false;
        }

        for tile in &mut self.tiles {
            tile.show_label(false);
            tile.enable_input();
        }
        self.stopwatch.start(now);
        self.phase = Phase::AwaitingGuess;
        self.status = Status::Guess;
        log::debug!("round {:?} awaiting guesses", round);
        true
    }

    /// Leaves a failed phase sequence in a state where `start` is accepted again.
    pub fn abort_round(&mut self, round: RoundId, err: GameError) {
        if !self.is_current(round) {
            return;
        }
        log::warn!("round {:?} failed in {:?}: {}", round, self.phase, err);
        self.clear();
        self.status = Status::Failed;
    }

    /// Checks the selected tile against the next expected rank.
    ///
    /// Selecting a tile that does not accept input is a no-op.
    pub fn guess(&mut self, rank: Rank, now: Instant) -> Result<GuessOutcome> {
        let index = self.tile_index(rank).ok_or(GameError::UnknownTile(rank))?;
        if !self.phase.accepts_guesses() || !self.tiles[index].accepts_input() {
            log::debug!("ignoring guess on tile {} in {:?}", rank, self.phase);
            return Ok(GuessOutcome::NoChange);
        }

        let expected = self.tiles[usize::from(self.current_index)].rank();
        let is_correct = rank == expected;
        self.scoreboard.record_guess(is_correct);

        if !is_correct {
            log::debug!("tile {} picked, expected {}", rank, expected);
            self.finish(false, now);
            return Ok(GuessOutcome::Lost);
        }

        let tile = &mut self.tiles[index];
        tile.show_label(true);
        tile.disable_input();
        self.current_index += 1;
        debug_assert_eq!(self.current_index, self.scoreboard.correct());

        if self.current_index == self.tile_count() {
            self.finish(true, now);
            Ok(GuessOutcome::Won)
        } else {
            Ok(GuessOutcome::Correct)
        }
    }

    fn finish(&mut self, won: bool, now: Instant) {
        if self.phase.is_finished() {
            return;
        }

        self.stopwatch.stop(now);
        for tile in &mut self.tiles {
            tile.disable_input();
            if !won {
                tile.show_label(true);
            }
        }
        (self.phase, self.status) = if won {
            (Phase::Won, Status::Won)
        } else {
            (Phase::Lost, Status::Lost)
        };
        log::debug!("round {:?} ended: {:?}", self.round, self.phase);
    }

    fn clear(&mut self) {
        self.round = self.round.next();
        self.tiles.clear();
        self.current_index = 0;
        self.scrambles_done = 0;
        self.scoreboard.set_total(0);
        self.stopwatch.reset();
        self.phase = Phase::Idle;
    }

    fn reject<T>(&mut self, err: GameError) -> Result<T> {
        log::info!("request rejected: {}", err);
        self.status = Status::Rejected(err);
        Err(err)
    }

    fn tile_index(&self, rank: Rank) -> Option<usize> {
        let index = usize::from(rank).checked_sub(1)?;
        (index < self.tiles.len()).then_some(index)
    }
}
