use core::cell::RefCell;
use core::future::Future;
use core::time::Duration;
use web_time::Instant;

use crate::*;

/// Host environment the timed phase sequence runs against.
pub trait PhaseHost {
    /// Resolves once `duration` has passed, without blocking the thread.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;

    /// Current drawable size of the arena.
    fn measure_arena(&self) -> Result<Extent>;

    /// Rendered size of the tile with `rank`.
    fn measure_tile(&self, rank: Rank) -> Extent;

    /// Called after every state change so the host can redraw.
    fn changed(&self) {}

    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PhaseOutcome {
    /// Input is open for guesses.
    Completed,
    /// Another round took over before the sequence finished.
    Superseded,
    /// The sequence hit an error and the round was dropped.
    Failed(GameError),
}

/// Drives `round` from its display phase to the guess phase.
///
/// Waits the display duration, then scrambles once per tile with the configured
/// interval after each scramble, then opens input. The session is only borrowed
/// between suspension points and the round is re-checked at every resumption,
/// so a newer round makes this sequence stop quietly.
pub async fn run_phases<H: PhaseHost>(
    session: &RefCell<GameSession>,
    round: RoundId,
    host: &H,
) -> PhaseOutcome {
    match drive(session, round, host).await {
        Ok(true) => PhaseOutcome::Completed,
        Ok(false) => {
            log::debug!("round {:?} superseded", round);
            PhaseOutcome::Superseded
        }
        Err(err) => {
            session.borrow_mut().abort_round(round, err);
            host.changed();
            PhaseOutcome::Failed(err)
        }
    }
}

async fn drive<H: PhaseHost>(
    session: &RefCell<GameSession>,
    round: RoundId,
    host: &H,
) -> Result<bool> {
    let (count, display, interval) = {
        let session = session.borrow();
        if !session.is_current(round) || session.phase() != Phase::Displaying {
            return Ok(false);
        }
        (
            session.tile_count(),
            session.display_duration(),
            session.config().scramble_interval(),
        )
    };

    host.sleep(display).await;
    if !session.borrow_mut().begin_scramble(round) {
        return Ok(false);
    }
    host.changed();

    for _ in 0..count {
        let arena = host.measure_arena()?;
        if !session
            .borrow_mut()
            .scramble_once(round, arena, |rank| host.measure_tile(rank))
        {
            return Ok(false);
        }
        host.changed();
        host.sleep(interval).await;
    }

    if !session.borrow_mut().open_guessing(round, host.now()) {
        return Ok(false);
    }
    host.changed();
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use core::future;
    use futures::executor::block_on;

    const ARENA: Extent = Extent::new(320, 240);
    const TILE: Extent = Extent::new(60, 30);

    #[derive(Debug, PartialEq)]
    enum Event {
        Sleep(Duration, Phase),
        Changed(Phase, TileCount),
    }

    /// Resolves every sleep immediately, recording what the sequence asked for.
    struct FakeHost<'a> {
        session: &'a RefCell<GameSession>,
        events: RefCell<Vec<Event>>,
        arena: Cell<Option<Extent>>,
        on_sleep: RefCell<Box<dyn FnMut(usize, &RefCell<GameSession>) + 'a>>,
    }

    impl<'a> FakeHost<'a> {
        fn new(session: &'a RefCell<GameSession>) -> Self {
            Self {
                session,
                events: RefCell::new(Vec::new()),
                arena: Cell::new(Some(ARENA)),
                on_sleep: RefCell::new(Box::new(|_: usize, _: &RefCell<GameSession>| {})),
            }
        }

        fn sleeps(&self) -> Vec<Duration> {
            self.events
                .borrow()
                .iter()
                .filter_map(|event| match event {
                    Event::Sleep(duration, _) => Some(*duration),
                    Event::Changed(..) => None,
                })
                .collect()
        }
    }

    impl PhaseHost for FakeHost<'_> {
        fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
            let index = self.sleeps().len();
            let phase = self.session.borrow().phase();
            self.events.borrow_mut().push(Event::Sleep(duration, phase));
            let mut on_sleep = self.on_sleep.borrow_mut();
            (*on_sleep)(index, self.session);
            future::ready(())
        }

        fn measure_arena(&self) -> Result<Extent> {
            self.arena.get().ok_or(GameError::ArenaUnavailable)
        }

        fn measure_tile(&self, _rank: Rank) -> Extent {
            TILE
        }

        fn changed(&self) {
            let session = self.session.borrow();
            self.events
                .borrow_mut()
                .push(Event::Changed(session.phase(), session.scrambles_done()));
        }
    }

    fn session() -> RefCell<GameSession> {
        RefCell::new(GameSession::new(GameConfig::default(), 99).unwrap())
    }

    #[test]
    fn display_then_one_scramble_per_tile_then_guessing() {
        for count in 3..=7u8 {
            let session = session();
            let round = session.borrow_mut().start(count.into()).unwrap();
            let host = FakeHost::new(&session);

            assert_eq!(
                block_on(run_phases(&session, round, &host)),
                PhaseOutcome::Completed
            );

            let mut expected = vec![Event::Sleep(
                Duration::from_secs(count.into()),
                Phase::Displaying,
            )];
            expected.push(Event::Changed(Phase::Scrambling, 0));
            for i in 1..=count {
                expected.push(Event::Changed(Phase::Scrambling, i));
                expected.push(Event::Sleep(Duration::from_millis(2000), Phase::Scrambling));
            }
            expected.push(Event::Changed(Phase::AwaitingGuess, count));
            assert_eq!(*host.events.borrow(), expected);

            let session = session.borrow();
            assert_eq!(session.phase(), Phase::AwaitingGuess);
            assert!(session.stopwatch().is_running());
            for tile in session.tiles() {
                assert!(!tile.is_label_visible());
                assert!(tile.accepts_input());
                assert!(tile.placement().is_scrambled());
            }
        }
    }

    #[test]
    fn full_round_of_three_is_won_in_order() {
        let session = session();
        let round = session.borrow_mut().start(3).unwrap();
        let host = FakeHost::new(&session);
        block_on(run_phases(&session, round, &host));

        let total: Duration = host.sleeps().iter().sum();
        assert_eq!(total, Duration::from_secs(3 + 6));

        let mut session = session.borrow_mut();
        let now = Instant::now();
        assert_eq!(session.guess(1, now).unwrap(), GuessOutcome::Correct);
        assert_eq!(session.guess(2, now).unwrap(), GuessOutcome::Correct);
        assert_eq!(session.guess(3, now).unwrap(), GuessOutcome::Won);
        assert_eq!(session.moves(), 3);
        assert_eq!(session.correct(), 3);
        assert_eq!(session.score(), Some(100));
    }

    #[test]
    fn start_mid_scramble_is_refused_and_round_continues() {
        let session = session();
        let round = session.borrow_mut().start(4).unwrap();
        let results = RefCell::new(Vec::new());
        let host = FakeHost::new(&session);
        *host.on_sleep.borrow_mut() = Box::new(|index: usize, session: &RefCell<GameSession>| {
            if index == 2 {
                results.borrow_mut().push(session.borrow_mut().start(5));
            }
        });

        assert_eq!(
            block_on(run_phases(&session, round, &host)),
            PhaseOutcome::Completed
        );

        assert_eq!(*results.borrow(), vec![Err(GameError::Busy)]);
        let session = session.borrow();
        assert_eq!(session.round(), round);
        assert_eq!(session.tile_count(), 4);
        assert_eq!(session.phase(), Phase::AwaitingGuess);
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn restart_during_display_supersedes_old_sequence() {
        let session = session();
        let first = session.borrow_mut().start(3).unwrap();
        let second = Cell::new(None);
        let host = FakeHost::new(&session);
        *host.on_sleep.borrow_mut() = Box::new(|index: usize, session: &RefCell<GameSession>| {
            if index == 0 {
                second.set(session.borrow_mut().start(6).ok());
            }
        });

        assert_eq!(
            block_on(run_phases(&session, first, &host)),
            PhaseOutcome::Superseded
        );
        assert_eq!(host.sleeps().len(), 1);

        let second = second.get().unwrap();
        assert_eq!(session.borrow().phase(), Phase::Displaying);
        assert_eq!(session.borrow().tile_count(), 6);

        *host.on_sleep.borrow_mut() = Box::new(|_: usize, _: &RefCell<GameSession>| {});
        assert_eq!(
            block_on(run_phases(&session, second, &host)),
            PhaseOutcome::Completed
        );
    }

    #[test]
    fn reset_during_display_stops_sequence() {
        let session = session();
        let round = session.borrow_mut().start(3).unwrap();
        let host = FakeHost::new(&session);
        *host.on_sleep.borrow_mut() = Box::new(|_: usize, session: &RefCell<GameSession>| {
            session.borrow_mut().reset().unwrap();
        });

        assert_eq!(
            block_on(run_phases(&session, round, &host)),
            PhaseOutcome::Superseded
        );
        assert_eq!(session.borrow().phase(), Phase::Idle);
    }

    #[test]
    fn missing_arena_fails_safely() {
        let session = session();
        let round = session.borrow_mut().start(3).unwrap();
        let host = FakeHost::new(&session);
        host.arena.set(None);

        assert_eq!(
            block_on(run_phases(&session, round, &host)),
            PhaseOutcome::Failed(GameError::ArenaUnavailable)
        );

        let mut session = session.borrow_mut();
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.status(), Status::Failed);
        assert!(session.start(3).is_ok());
    }

    #[test]
    fn stale_round_does_nothing() {
        let session = session();
        let stale = session.borrow_mut().start(3).unwrap();
        session.borrow_mut().start(3).unwrap();
        let host = FakeHost::new(&session);

        assert_eq!(
            block_on(run_phases(&session, stale, &host)),
            PhaseOutcome::Superseded
        );
        assert!(host.events.borrow().is_empty());
    }
}
