//! Move choosers that drive the puzzle toward the solved state.
//!
//! These are placeholders. They always terminate, but make no attempt at an
//! efficient solution.

use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};

use crate::{Direction, Face, Facelet, PyraminxState, Section, Twist};

/// Something that picks the next twist to apply to a puzzle.
pub trait MoveChooser {
    /// Returns the next twist to apply to `state`.
    fn choose(&mut self, state: &PyraminxState) -> Twist;

    /// Chooses a twist and applies it to `state`.
    fn step(&mut self, state: &mut PyraminxState) -> Twist {
        let twist = self.choose(state);
        state.apply_twist(twist);
        twist
    }

    /// Steps until the puzzle is solved or `max_steps` twists have been
    /// applied.
    fn solve(&mut self, state: &mut PyraminxState, max_steps: usize) -> SolveOutcome {
        let mut twists = vec![];
        while !state.is_solved() && twists.len() < max_steps {
            twists.push(self.step(state));
        }
        log::debug!(
            "solver stopped after {} twists (solved: {})",
            twists.len(),
            state.is_solved(),
        );
        SolveOutcome {
            solved: state.is_solved(),
            twists,
        }
    }
}

/// Result of running a [`MoveChooser`] until the puzzle is solved or the step
/// budget runs out.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    /// Whether the puzzle ended up solved.
    pub solved: bool,
    /// Twists applied, in order.
    pub twists: Vec<Twist>,
}

/// Picks twists at random.
///
/// Sections are drawn from a bag without replacement, so every section is
/// twisted once before any section is twisted twice. The direction is a coin
/// flip.
#[derive(Debug, Clone)]
pub struct RandomSolver {
    rng: ChaCha12Rng,
    bag: Vec<Section>,
}
impl Default for RandomSolver {
    fn default() -> Self {
        Self::new()
    }
}
impl RandomSolver {
    /// Constructs a solver seeded from the thread-local RNG.
    pub fn new() -> Self {
        Self::from_rng(ChaCha12Rng::from_rng(&mut rand::rng()))
    }

    /// Constructs a deterministic solver.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha12Rng::seed_from_u64(seed))
    }

    fn from_rng(rng: ChaCha12Rng) -> Self {
        Self {
            rng,
            bag: Section::ALL.to_vec(),
        }
    }

    /// Returns the sections not yet drawn from the current bag.
    pub fn remaining_in_bag(&self) -> &[Section] {
        &self.bag
    }

    /// Draws the next random twist.
    pub fn next_twist(&mut self) -> Twist {
        let section = self.bag.swap_remove(self.rng.random_range(0..self.bag.len()));
        if self.bag.is_empty() {
            log::trace!("refilling solver bag");
            self.bag = Section::ALL.to_vec();
        }
        let direction = match self.rng.random_bool(0.5) {
            true => Direction::Clockwise,
            false => Direction::CounterClockwise,
        };
        Twist::new(section, direction)
    }
}
impl MoveChooser for RandomSolver {
    fn choose(&mut self, _state: &PyraminxState) -> Twist {
        self.next_twist()
    }
}

/// Picks the twist that leaves the most facelets matching the majority color
/// of their face, previewing each candidate with
/// [`PyraminxState::get_from_color()`].
///
/// Ties are broken by a [`RandomSolver`], and the twist that would undo the
/// previous one is never chosen, so the solver does not oscillate.
#[derive(Debug, Clone, Default)]
pub struct PreviewSolver {
    random: RandomSolver,
    last: Option<Twist>,
}
impl PreviewSolver {
    /// Constructs a solver seeded from the thread-local RNG.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a deterministic solver.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            random: RandomSolver::with_seed(seed),
            last: None,
        }
    }

    /// Returns how many facelets would match the most common color on their
    /// face after `twist`.
    pub fn score(state: &PyraminxState, twist: Twist) -> usize {
        Face::ALL
            .into_iter()
            .map(|face| {
                face.positions()
                    .into_iter()
                    .filter_map(|position| {
                        state
                            .get_from_color(twist.section, twist.direction, face, position)
                            .ok()
                    })
                    .counts()
                    .into_values()
                    .max()
                    .unwrap_or(0)
            })
            .sum()
    }
}
impl MoveChooser for PreviewSolver {
    fn choose(&mut self, state: &PyraminxState) -> Twist {
        let forbidden = self.last.map(Twist::rev);
        let random = self.random.next_twist();
        let candidates = Twist::iter_all().filter(|&t| Some(t) != forbidden);
        let best = candidates
            .max_set_by_key(|&t| Self::score(state, t))
            .into_iter()
            .find_or_first(|&t| t == random)
            .unwrap_or(random);
        self.last = Some(best);
        best
    }
}

/// Returns how many facelets already show their face's solved color.
pub fn solved_facelet_count(state: &PyraminxState) -> usize {
    Facelet::iter()
        .filter(|&f| state.color(f) == crate::Color::of_face(f.face()))
        .count()
}
