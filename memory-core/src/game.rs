//! The game controller: a single event-driven state machine.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::board::{self, Tile, TileFace};
use crate::clock::{self, LevelClock};
use crate::constants::{LEVEL_PAIRS, TIMER_TICK_MS};

/// Where the controller currently is within a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No board dealt yet.
    Idle,
    /// No tile held; the next pick starts a pair.
    PickingFirst,
    /// One tile held face-up.
    PickingSecond,
    /// A mismatched pair is face-up; the board is locked until the
    /// delayed unflip fires.
    Resolving,
    /// All pairs found; waiting out the pause before the next deal.
    LevelCleared,
    /// Final level cleared; the summary stays up until play-again.
    GameOver,
}

/// What a call to [`Game::select_tile`] did, so the presentation layer
/// knows which visuals to touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Click ignored: locked board, matched tile, or a re-click of the
    /// held tile.
    Ignored,
    /// Tile revealed and held as the first of a pair.
    FirstUp,
    /// Pair matched and kept face-up.
    Matched {
        first: usize,
        second: usize,
        level_cleared: bool,
        game_over: bool,
    },
    /// Pair differs; the pair stays up and the board stays locked until
    /// [`Game::resolve_mismatch`] runs after the mismatch delay.
    Mismatch,
}

/// The controller. All mutation goes through the event methods below;
/// accessors expose read-only state for rendering and tests.
pub struct Game {
    level: usize,
    tiles: Vec<Tile>,
    first_pick: Option<usize>,
    second_pick: Option<usize>,
    moves: u32,
    matches: u32,
    clock: LevelClock,
    total_moves: u32,
    total_ms: u64,
    phase: Phase,
    epoch: u64,
    rng: SmallRng,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Game {
            level: 0,
            tiles: Vec::new(),
            first_pick: None,
            second_pick: None,
            moves: 0,
            matches: 0,
            clock: LevelClock::default(),
            total_moves: 0,
            total_ms: 0,
            phase: Phase::Idle,
            epoch: 0,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Deal the given level. Out-of-range indices are a no-op returning
    /// `false`. Every deal bumps the epoch, so delayed callbacks scheduled
    /// against the previous board become stale.
    pub fn start_level(&mut self, level: usize) -> bool {
        if level >= LEVEL_PAIRS.len() {
            return false;
        }
        self.level = level;
        self.epoch += 1;
        self.first_pick = None;
        self.second_pick = None;
        self.moves = 0;
        self.matches = 0;
        self.tiles = board::deal(LEVEL_PAIRS[level], &mut self.rng);
        self.clock.restart();
        self.phase = Phase::PickingFirst;
        true
    }

    /// Re-deal the current level, discarding its board and progress.
    /// Totals from already-completed levels are kept.
    pub fn restart(&mut self) {
        self.start_level(self.level);
    }

    /// Dismissing the end-of-game summary: wipe the session totals and
    /// deal the first level again.
    pub fn play_again(&mut self) {
        self.total_moves = 0;
        self.total_ms = 0;
        self.start_level(0);
    }

    /// Handle a tile activation.
    pub fn select_tile(&mut self, idx: usize) -> SelectOutcome {
        if !matches!(self.phase, Phase::PickingFirst | Phase::PickingSecond) {
            return SelectOutcome::Ignored;
        }
        let Some(tile) = self.tiles.get(idx) else {
            return SelectOutcome::Ignored;
        };
        if tile.is_matched() || self.first_pick == Some(idx) {
            return SelectOutcome::Ignored;
        }

        self.tiles[idx].face = TileFace::Revealed;
        let Some(first) = self.first_pick else {
            self.first_pick = Some(idx);
            self.phase = Phase::PickingSecond;
            return SelectOutcome::FirstUp;
        };

        self.second_pick = Some(idx);
        self.moves += 1;

        if self.tiles[first].symbol != self.tiles[idx].symbol {
            self.phase = Phase::Resolving;
            return SelectOutcome::Mismatch;
        }

        self.tiles[first].face = TileFace::Matched;
        self.tiles[idx].face = TileFace::Matched;
        self.matches += 1;
        self.clear_selection();

        let level_cleared = self.matches as usize == self.pair_count();
        if level_cleared {
            self.complete_level();
        } else {
            self.phase = Phase::PickingFirst;
        }
        SelectOutcome::Matched {
            first,
            second: idx,
            level_cleared,
            game_over: self.phase == Phase::GameOver,
        }
    }

    /// Flip a mismatched pair back over after the delay. Returns the pair
    /// of indices to hide, or `None` when the callback is stale (the board
    /// was re-dealt since it was scheduled) or nothing is pending.
    pub fn resolve_mismatch(&mut self, epoch: u64) -> Option<(usize, usize)> {
        if epoch != self.epoch || self.phase != Phase::Resolving {
            return None;
        }
        let (first, second) = (self.first_pick?, self.second_pick?);
        self.tiles[first].face = TileFace::Hidden;
        self.tiles[second].face = TileFace::Hidden;
        self.clear_selection();
        self.phase = Phase::PickingFirst;
        Some((first, second))
    }

    /// Deal the next level after the completion pause. Stale callbacks and
    /// calls outside the pause are ignored.
    pub fn advance_level(&mut self, epoch: u64) -> Option<usize> {
        if epoch != self.epoch || self.phase != Phase::LevelCleared {
            return None;
        }
        let next = self.level + 1;
        self.start_level(next).then_some(next)
    }

    /// One period of the elapsed-time ticker. A stopped clock (level
    /// cleared, game over) ignores it.
    pub fn tick(&mut self) -> u64 {
        self.clock.tick(u64::from(TIMER_TICK_MS));
        self.clock.elapsed_ms()
    }

    fn clear_selection(&mut self) {
        self.first_pick = None;
        self.second_pick = None;
    }

    fn complete_level(&mut self) {
        self.clock.stop();
        self.total_ms += self.clock.elapsed_ms();
        self.total_moves += self.moves;
        self.phase = if self.level + 1 < LEVEL_PAIRS.len() {
            Phase::LevelCleared
        } else {
            Phase::GameOver
        };
    }

    // --- read-only state -------------------------------------------------

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn total_levels(&self) -> usize {
        LEVEL_PAIRS.len()
    }

    pub fn pair_count(&self) -> usize {
        LEVEL_PAIRS[self.level]
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn matches(&self) -> u32 {
        self.matches
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current deal epoch, captured by callers when scheduling the delayed
    /// unflip and level-advance callbacks.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.clock.elapsed_ms()
    }

    // --- HUD text --------------------------------------------------------

    /// Level progress indicator, e.g. `"2/3"`.
    pub fn level_label(&self) -> String {
        format!("{}/{}", self.level + 1, LEVEL_PAIRS.len())
    }

    /// Message shown when a level is dealt.
    pub fn level_message(&self) -> String {
        format!("Level {}: find all pairs.", self.level + 1)
    }

    /// Message shown when a level is cleared.
    pub fn completion_message(&self) -> String {
        format!(
            "Level {} complete! You used {} moves in {} seconds.",
            self.level + 1,
            self.moves,
            clock::fmt_seconds_tenths(self.clock.elapsed_ms()),
        )
    }

    /// End-of-game summary line: cumulative time and moves across all
    /// completed levels.
    pub fn summary_text(&self) -> String {
        format!(
            "Time: {}    Moves: {}",
            clock::fmt_mm_ss(self.total_ms),
            self.total_moves,
        )
    }

    /// Live timer text, one decimal place of seconds.
    pub fn timer_text(&self) -> String {
        clock::fmt_seconds_tenths(self.clock.elapsed_ms())
    }
}
