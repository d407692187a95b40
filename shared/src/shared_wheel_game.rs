use rand::Rng;
use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::constants::*;
use crate::shared_wheel_animator::{AnimatorState, Continuation, SpinTiming, Tick, WheelAnimator};
use crate::validation::validate_question_count;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum WedgeColor {
    Even,
    Odd,
    JustAnswered,
    Visited,
}

impl WedgeColor {
    pub fn hex(&self) -> &'static str {
        match self {
            WedgeColor::Even => EVEN_WEDGE_COLOR,
            WedgeColor::Odd => ODD_WEDGE_COLOR,
            WedgeColor::JustAnswered => JUST_ANSWERED_COLOR,
            WedgeColor::Visited => VISITED_COLOR,
        }
    }
}

/// One wedge of the wheel. Its identity is its position in the round.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Question {
    pub label: String,
    pub weight: u32,
    pub color: WedgeColor,
    pub answered: bool,
}

/// Where a spin with `total_steps` advances stops, relative to the previous
/// landing when there is one. Always in `0..wedge_count`.
pub fn destination(total_steps: u32, previous_final: Option<usize>, wedge_count: usize) -> usize {
    let n = wedge_count as i64;
    let idx = match previous_final {
        Some(previous) => (total_steps as i64 + previous as i64) % n,
        None => (total_steps as i64 - 1) % n,
    };
    // `%` keeps the dividend's sign; zero steps with no previous landing gives -1.
    let idx = if idx < 0 { idx + n } else { idx };
    idx as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    /// Landed on a fresh question, now marked answered.
    Answered { index: usize, last: bool },
    /// Landed on an answered question; a follow-up spin should run after `pause_ms`.
    AlreadyAnswered {
        index: usize,
        continuation: Continuation,
        pause_ms: u32,
    },
    /// Landed on an answered question with nothing left to move to.
    Exhausted { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelEvent {
    Advanced { next_delay_ms: u32 },
    Landed(Landing),
}

/// A game in progress.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelRound {
    questions: Vec<Question>,
    rotation_offset: usize,
    selected_index: Option<usize>,
    is_spinning: bool,
    status_text: String,
    animator: WheelAnimator,
}

impl WheelRound {
    pub fn new(count: usize, timing: SpinTiming) -> Self {
        let questions = (0..count)
            .map(|i| Question {
                label: format!("{}", i + 1),
                weight: 1,
                color: if i % 2 == 0 { WedgeColor::Even } else { WedgeColor::Odd },
                answered: false,
            })
            .collect();
        Self {
            questions,
            rotation_offset: 0,
            selected_index: None,
            is_spinning: false,
            status_text: String::new(),
            animator: WheelAnimator::new(timing),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn wedge_count(&self) -> usize {
        self.questions.len()
    }

    pub fn rotation_offset(&self) -> usize {
        self.rotation_offset
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn is_spinning(&self) -> bool {
        self.is_spinning
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn animator_state(&self) -> &AnimatorState {
        self.animator.state()
    }

    pub fn answered_count(&self) -> usize {
        self.questions.iter().filter(|q| q.answered).count()
    }

    pub fn all_answered(&self) -> bool {
        self.questions.iter().all(|q| q.answered)
    }

    pub fn can_spin(&self) -> bool {
        !self.is_spinning
    }

    /// Questions in the order the wheel currently shows them, leading wedge first.
    pub fn wedges_in_display_order(&self) -> impl Iterator<Item = (usize, &Question)> + '_ {
        let n = self.questions.len();
        (0..n).map(move |i| {
            let index = (self.rotation_offset + i) % n;
            (index, &self.questions[index])
        })
    }

    /// The wedge under the pointer: the last one in display order.
    pub fn pointer_index(&self) -> usize {
        let n = self.questions.len();
        (self.rotation_offset + n - 1) % n
    }

    /// Circular distance from `from` to the first unanswered wedge, `Some(0)`
    /// when `from` itself is unanswered.
    pub fn next_unanswered_distance(&self, from: usize) -> Option<usize> {
        let n = self.questions.len();
        (0..n).find(|d| !self.questions[(from + d) % n].answered)
    }

    /// Starts a spin of `increments` advances. Refused while a spin is running.
    /// Returns the destination wedge.
    pub fn spin_with(&mut self, increments: u32, carried_previous_final: Option<usize>) -> Option<usize> {
        if self.is_spinning {
            log::debug!("spin requested while the wheel is spinning");
            return None;
        }
        Some(self.launch(increments, carried_previous_final, false))
    }

    /// Runs the queued follow-up spin, if the last landing queued one.
    pub fn resume(&mut self) -> Option<usize> {
        let continuation = self.animator.take_continuation()?;
        Some(self.launch(continuation.increments, Some(continuation.previous_final), true))
    }

    fn launch(&mut self, increments: u32, carried_previous_final: Option<usize>, continuation: bool) -> usize {
        self.is_spinning = true;
        self.status_text.clear();

        if let Some(previous) = self.selected_index {
            self.questions[previous].color = WedgeColor::Visited;
        }

        let target = destination(
            increments,
            carried_previous_final.or(self.selected_index),
            self.questions.len(),
        );
        self.selected_index = Some(target);
        self.animator.start(increments, target, continuation);
        log::debug!(
            "spinning {} steps towards question {}",
            increments,
            self.questions[target].label
        );
        target
    }

    /// Advances the wheel by one wedge. `None` when no spin is running.
    pub fn tick(&mut self) -> Option<WheelEvent> {
        let tick = self.animator.tick()?;
        self.rotation_offset = (self.rotation_offset + 1) % self.questions.len();
        match tick {
            Tick::Advance { next_delay_ms } => Some(WheelEvent::Advanced { next_delay_ms }),
            Tick::Land {
                destination,
                continuation,
            } => Some(WheelEvent::Landed(self.land(destination, continuation))),
        }
    }

    fn land(&mut self, index: usize, continuation: bool) -> Landing {
        let label = self.questions[index].label.clone();

        if self.questions[index].answered {
            return match self.next_unanswered_distance(index) {
                Some(distance) if distance > 0 => {
                    let next = Continuation {
                        increments: distance as u32,
                        previous_final: index,
                    };
                    self.status_text = format!(
                        "You landed on question {}, but you've already answered that question...",
                        label
                    );
                    self.animator.await_continuation(next);
                    log::info!("question {} already answered, moving {} more", label, distance);
                    Landing::AlreadyAnswered {
                        index,
                        continuation: next,
                        pause_ms: self.animator.timing().continuation_pause_ms,
                    }
                }
                _ => {
                    log::warn!("landed on question {} with no unanswered questions left", label);
                    Landing::Exhausted { index }
                }
            };
        }

        self.questions[index].answered = true;
        self.questions[index].color = WedgeColor::JustAnswered;
        let last = self.all_answered();
        self.status_text = format!(
            "{} landed on question {}{}",
            if continuation { "Now, you" } else { "You" },
            label,
            if last { LAST_QUESTION_SUFFIX } else { "!" }
        );
        // Once everything is answered the spin control stays disabled.
        self.is_spinning = last;
        if last {
            self.animator.finish();
        } else {
            self.animator.rest();
        }
        log::info!("landed on question {} ({}/{})", label, self.answered_count(), self.wedge_count());
        Landing::Answered { index, last }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum GameState {
    NotStarted,
    InProgress(WheelRound),
}

/// Owns the whole game. Every start or reset bumps the generation so that
/// ticks scheduled for an earlier round can be recognised and dropped.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QuestionWheel {
    state: GameState,
    generation: u64,
    config: WheelConfig,
}

impl Default for QuestionWheel {
    fn default() -> Self {
        Self::new(WheelConfig::default())
    }
}

impl QuestionWheel {
    pub fn new(config: WheelConfig) -> Self {
        Self {
            state: GameState::NotStarted,
            generation: 0,
            config,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub fn round(&self) -> Option<&WheelRound> {
        match &self.state {
            GameState::InProgress(round) => Some(round),
            GameState::NotStarted => None,
        }
    }

    fn round_mut(&mut self) -> Option<&mut WheelRound> {
        match &mut self.state {
            GameState::InProgress(round) => Some(round),
            GameState::NotStarted => None,
        }
    }

    pub fn start_game(&mut self, count: usize) -> Result<(), ValidationError> {
        let count = validate_question_count(count as i64)?;
        self.state = GameState::InProgress(WheelRound::new(count, SpinTiming::from(&self.config)));
        self.generation += 1;
        log::info!("started a game with {} questions", count);
        Ok(())
    }

    pub fn reset_game(&mut self) {
        self.state = GameState::NotStarted;
        self.generation += 1;
        log::info!("game reset");
    }

    /// User-initiated spin with a random number of advances.
    pub fn spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        let increments = rng.gen_range(self.config.min_increments..self.config.max_increments);
        self.spin_with(increments)
    }

    pub fn spin_with(&mut self, increments: u32) -> Option<usize> {
        self.round_mut()?.spin_with(increments, None)
    }

    /// Advances the running spin. Ticks from an older generation are dropped.
    pub fn tick(&mut self, generation: u64) -> Option<WheelEvent> {
        if !self.is_current(generation) {
            log::debug!("dropping tick from generation {}", generation);
            return None;
        }
        self.round_mut()?.tick()
    }

    pub fn resume(&mut self, generation: u64) -> Option<usize> {
        if !self.is_current(generation) {
            return None;
        }
        self.round_mut()?.resume()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run_to_landing(wheel: &mut QuestionWheel) -> Landing {
        let generation = wheel.generation();
        loop {
            match wheel.tick(generation).expect("spin in progress") {
                WheelEvent::Advanced { .. } => continue,
                WheelEvent::Landed(landing) => return landing,
            }
        }
    }

    /// Spins until a fresh question is answered, following continuations.
    fn play_turn(wheel: &mut QuestionWheel, rng: &mut StdRng) -> usize {
        wheel.spin(rng).expect("spin allowed");
        loop {
            match run_to_landing(wheel) {
                Landing::Answered { index, .. } => return index,
                Landing::AlreadyAnswered { .. } => {
                    wheel.resume(wheel.generation()).expect("continuation queued");
                }
                Landing::Exhausted { .. } => panic!("wheel exhausted mid game"),
            }
        }
    }

    #[test]
    fn test_destination_without_previous() {
        for n in 2..=30usize {
            for steps in 0..=200u32 {
                let expected = (steps as i64 - 1).rem_euclid(n as i64) as usize;
                assert_eq!(destination(steps, None, n), expected);
            }
        }
    }

    #[test]
    fn test_destination_with_previous() {
        for n in 2..=30usize {
            for previous in 0..n {
                for steps in (0..=1000u32).step_by(7) {
                    assert_eq!(destination(steps, Some(previous), n), (steps as usize + previous) % n);
                }
            }
        }
    }

    #[test]
    fn test_destination_examples() {
        assert_eq!(destination(30, None, 2), 1);
        assert_eq!(destination(5, Some(1), 2), 0);
        assert_eq!(destination(0, None, 7), 6);
    }

    #[test]
    fn test_start_game() {
        let mut wheel = QuestionWheel::default();
        wheel.start_game(5).unwrap();
        let round = wheel.round().unwrap();
        assert_eq!(round.wedge_count(), 5);
        assert!(round.questions().iter().all(|q| !q.answered && q.weight == 1));
        let labels: Vec<&str> = round.questions().iter().map(|q| q.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "2", "3", "4", "5"]);
        assert_eq!(round.questions()[0].color, WedgeColor::Even);
        assert_eq!(round.questions()[1].color, WedgeColor::Odd);
        assert!(round.can_spin());
    }

    #[test]
    fn test_start_game_rejects_bad_counts() {
        let mut wheel = QuestionWheel::default();
        assert!(wheel.start_game(1).is_err());
        assert!(wheel.start_game(31).is_err());
        assert_eq!(wheel.state(), &GameState::NotStarted);
        assert_eq!(wheel.generation(), 0);
    }

    #[test]
    fn test_spin_before_start() {
        let mut wheel = QuestionWheel::default();
        assert_eq!(wheel.spin_with(10), None);
        assert_eq!(wheel.tick(wheel.generation()), None);
    }

    #[test]
    fn test_first_landing() {
        let mut wheel = QuestionWheel::default();
        wheel.start_game(2).unwrap();
        assert_eq!(wheel.spin_with(30), Some(1));
        assert_eq!(wheel.spin_with(30), None);

        let landing = run_to_landing(&mut wheel);
        assert_eq!(landing, Landing::Answered { index: 1, last: false });

        let round = wheel.round().unwrap();
        assert!(round.questions()[1].answered);
        assert_eq!(round.questions()[1].color, WedgeColor::JustAnswered);
        assert_eq!(round.status_text(), "You landed on question 2!");
        assert!(!round.is_spinning());
        assert_eq!(round.pointer_index(), 1);
    }

    #[test]
    fn test_continuation_after_answered_landing() {
        let mut wheel = QuestionWheel::default();
        wheel.start_game(4).unwrap();
        // Lands on index 1.
        wheel.spin_with(2).unwrap();
        run_to_landing(&mut wheel);
        // 4 more from index 1 comes back to index 1.
        assert_eq!(wheel.spin_with(4), Some(1));
        let round = wheel.round().unwrap();
        assert_eq!(round.questions()[1].color, WedgeColor::Visited);
        assert_eq!(round.status_text(), "");

        let landing = run_to_landing(&mut wheel);
        let expected = Continuation { increments: 1, previous_final: 1 };
        assert_eq!(
            landing,
            Landing::AlreadyAnswered { index: 1, continuation: expected, pause_ms: CONTINUATION_PAUSE_MS }
        );
        let round = wheel.round().unwrap();
        assert!(round.is_spinning());
        assert!(round.status_text().contains("already answered"));
        assert_eq!(round.animator_state(), &AnimatorState::AwaitingContinuation(expected));

        // The user can't spin while the follow-up is pending.
        assert_eq!(wheel.spin_with(3), None);

        assert_eq!(wheel.resume(wheel.generation()), Some(2));
        let landing = run_to_landing(&mut wheel);
        assert_eq!(landing, Landing::Answered { index: 2, last: false });
        let round = wheel.round().unwrap();
        assert_eq!(round.status_text(), "Now, you landed on question 3!");
        assert_eq!(round.answered_count(), 2);
        assert_eq!(round.pointer_index(), 2);
    }

    #[test]
    fn test_resume_without_continuation() {
        let mut wheel = QuestionWheel::default();
        wheel.start_game(3).unwrap();
        assert_eq!(wheel.resume(wheel.generation()), None);
    }

    #[test]
    fn test_last_question_locks_spin() {
        let mut wheel = QuestionWheel::default();
        wheel.start_game(2).unwrap();
        wheel.spin_with(1).unwrap(); // index 0
        run_to_landing(&mut wheel);
        wheel.spin_with(1).unwrap(); // index 1
        let landing = run_to_landing(&mut wheel);
        assert_eq!(landing, Landing::Answered { index: 1, last: true });

        let round = wheel.round().unwrap();
        assert!(round.all_answered());
        assert!(round.is_spinning());
        assert_eq!(
            round.status_text(),
            "You landed on question 2. That's the last question - thanks for playing!"
        );
        assert_eq!(round.animator_state(), &AnimatorState::Finished);
        assert_eq!(wheel.spin_with(5), None);

        wheel.reset_game();
        assert_eq!(wheel.state(), &GameState::NotStarted);
    }

    #[test]
    fn test_full_games_answer_every_question() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 2..=30 {
            let mut wheel = QuestionWheel::default();
            wheel.start_game(n).unwrap();
            let mut seen = Vec::new();
            for turn in 1..=n {
                let index = play_turn(&mut wheel, &mut rng);
                assert!(!seen.contains(&index));
                seen.push(index);

                let round = wheel.round().unwrap();
                assert_eq!(round.answered_count(), turn);
                assert_eq!(round.pointer_index(), index);
                assert!(round.rotation_offset() < n);
            }
            let round = wheel.round().unwrap();
            assert!(round.all_answered());
            assert!(!round.can_spin());
            assert_eq!(wheel.spin(&mut rng), None);
        }
    }

    #[test]
    fn test_only_previous_landing_is_visited() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut wheel = QuestionWheel::default();
        wheel.start_game(6).unwrap();
        let first = play_turn(&mut wheel, &mut rng);
        let second = play_turn(&mut wheel, &mut rng);
        let round = wheel.round().unwrap();
        assert_eq!(round.questions()[first].color, WedgeColor::Visited);
        assert_eq!(round.questions()[second].color, WedgeColor::JustAnswered);
        assert!(round
            .questions()
            .iter()
            .filter(|q| !q.answered)
            .all(|q| matches!(q.color, WedgeColor::Even | WedgeColor::Odd)));
    }

    #[test]
    fn test_random_spin_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let mut wheel = QuestionWheel::default();
            wheel.start_game(30).unwrap();
            wheel.spin(&mut rng).unwrap();
            let AnimatorState::Spinning { total_steps, .. } = wheel.round().unwrap().animator_state().clone() else {
                panic!("expected a running spin");
            };
            assert!((MIN_INCREMENTS..MAX_INCREMENTS).contains(&total_steps));
        }
    }

    #[test]
    fn test_reset_makes_ticks_stale() {
        let mut wheel = QuestionWheel::default();
        wheel.start_game(5).unwrap();
        let generation = wheel.generation();
        wheel.spin_with(40).unwrap();
        wheel.tick(generation).unwrap();

        wheel.reset_game();
        assert_eq!(wheel.tick(generation), None);

        wheel.start_game(5).unwrap();
        assert_eq!(wheel.tick(generation), None);
        assert_eq!(wheel.round().unwrap().rotation_offset(), 0);
        assert!(wheel.round().unwrap().can_spin());
    }

    #[test]
    fn test_zero_step_spin_lands_behind_pointer() {
        let mut wheel = QuestionWheel::default();
        wheel.start_game(5).unwrap();
        assert_eq!(wheel.spin_with(0), Some(4));
        assert_eq!(run_to_landing(&mut wheel), Landing::Answered { index: 4, last: false });
        // One advance still happens, so the pointer has moved past the landing.
        assert_eq!(wheel.round().unwrap().pointer_index(), 0);
    }

    #[test]
    fn test_reset_drops_pending_continuation() {
        let mut wheel = QuestionWheel::default();
        wheel.start_game(4).unwrap();
        let old = wheel.generation();
        wheel.spin_with(2).unwrap();
        run_to_landing(&mut wheel);
        wheel.spin_with(4).unwrap();
        assert!(matches!(run_to_landing(&mut wheel), Landing::AlreadyAnswered { .. }));

        // Reset while the follow-up spin is still waiting out its pause.
        wheel.reset_game();
        wheel.start_game(4).unwrap();
        let new = wheel.generation();

        assert_eq!(wheel.resume(old), None);
        assert_eq!(wheel.resume(new), None);
        let round = wheel.round().unwrap();
        assert!(round.can_spin());
        assert_eq!(round.answered_count(), 0);
        assert_eq!(round.animator_state(), &AnimatorState::Idle);
        assert_eq!(wheel.spin_with(2), Some(1));
    }

    #[test]
    fn test_display_order_follows_offset() {
        let mut wheel = QuestionWheel::default();
        wheel.start_game(4).unwrap();
        wheel.spin_with(3).unwrap();
        run_to_landing(&mut wheel);
        let order: Vec<usize> = wheel.round().unwrap().wedges_in_display_order().map(|(i, _)| i).collect();
        assert_eq!(order, vec![3, 0, 1, 2]);
    }

    #[test]
    fn test_exhausted_landing_keeps_spinning() {
        let mut round = WheelRound::new(2, SpinTiming::default());
        round.spin_with(1, None).unwrap();
        while let Some(WheelEvent::Advanced { .. }) = round.tick() {}
        // Force the other wedge answered behind the wheel's back.
        round.questions[1].answered = true;
        round.is_spinning = false;
        round.spin_with(2, None).unwrap();
        let mut last = None;
        while let Some(event) = round.tick() {
            last = Some(event);
            if matches!(event, WheelEvent::Landed(_)) {
                break;
            }
        }
        assert_eq!(last, Some(WheelEvent::Landed(Landing::Exhausted { index: 0 })));
        assert!(round.is_spinning());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut wheel = QuestionWheel::default();
        wheel.start_game(3).unwrap();
        let json = serde_json::to_string(&wheel).unwrap();
        let back: QuestionWheel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, wheel);
    }
}
