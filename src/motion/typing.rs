use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypingError {
    #[error("typing animation needs at least one phrase")]
    NoPhrases,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTiming {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub hold: Duration,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(100),
            delete_delay: Duration::from_millis(50),
            hold: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Growing,
    Holding,
    Shrinking,
}

/// Types out each phrase, holds it, deletes it, then moves on to the next.
#[derive(Debug, Clone)]
pub struct TypingCycler {
    phrases: Vec<String>,
    timing: TypingTiming,
    index: usize,
    // in chars, not bytes
    shown: usize,
    phase: Phase,
}

impl TypingCycler {
    pub fn new<I, S>(phrases: I, timing: TypingTiming) -> Result<Self, TypingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases = phrases.into_iter().map(Into::into).collect::<Vec<_>>();
        if phrases.is_empty() {
            return Err(TypingError::NoPhrases);
        }
        Ok(Self {
            phrases,
            timing,
            index: 0,
            shown: 0,
            phase: Phase::Growing,
        })
    }

    /// Delay before the first tick.
    pub fn first_delay(&self) -> Duration {
        self.timing.type_delay
    }

    /// Advances one step and returns how long to wait before the next.
    pub fn tick(&mut self) -> Duration {
        match self.phase {
            Phase::Growing => {
                let full = self.current_len();
                if self.shown < full {
                    self.shown += 1;
                }
                if self.shown == full {
                    self.phase = Phase::Holding;
                    self.timing.hold
                } else {
                    self.timing.type_delay
                }
            }
            Phase::Holding | Phase::Shrinking => {
                self.phase = Phase::Shrinking;
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Growing;
                    self.timing.type_delay
                } else {
                    self.timing.delete_delay
                }
            }
        }
    }

    pub fn text(&self) -> &str {
        let full = &self.phrases[self.index];
        match full.char_indices().nth(self.shown) {
            Some((end, _)) => &full[..end],
            None => full,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn current_len(&self) -> usize {
        self.phrases[self.index].chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::schedule::manual::ManualTimer;
    use crate::motion::schedule::{RepeatingTask, Trigger, Wait};
    use std::sync::{Arc, Mutex};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_empty_phrase_list_is_rejected() {
        let res = TypingCycler::new(Vec::<String>::new(), TypingTiming::default());
        assert_eq!(res.unwrap_err(), TypingError::NoPhrases);
    }

    #[test]
    fn test_full_cycle_returns_to_empty_and_advances() {
        let phrases = ["GenAI", "Problem Solver", "Creative Thinker"];
        for start in 0..phrases.len() {
            let mut cycler = TypingCycler::new(phrases, TypingTiming::default()).unwrap();
            // walk forward to the requested starting phrase
            while cycler.index() != start {
                cycler.tick();
            }
            assert_eq!(cycler.text(), "");

            let len = phrases[start].chars().count();
            let mut delays = Vec::new();
            for _ in 0..(2 * len) {
                delays.push(cycler.tick());
            }

            assert_eq!(cycler.text(), "");
            assert_eq!(cycler.index(), (start + 1) % phrases.len());
            assert_eq!(cycler.phase(), Phase::Growing);
            // growing ticks, one hold, shrinking ticks, then back to typing speed
            assert!(delays[..len - 1].iter().all(|d| *d == ms(100)));
            assert_eq!(delays[len - 1], ms(2000));
            assert!(delays[len..2 * len - 1].iter().all(|d| *d == ms(50)));
            assert_eq!(delays[2 * len - 1], ms(100));
        }
    }

    #[test]
    fn test_text_grows_and_shrinks_one_char_at_a_time() {
        let mut cycler = TypingCycler::new(["abc"], TypingTiming::default()).unwrap();
        let mut seen = vec![cycler.text().to_string()];
        for _ in 0..6 {
            cycler.tick();
            seen.push(cycler.text().to_string());
        }
        assert_eq!(seen, ["", "a", "ab", "abc", "ab", "a", ""]);
    }

    #[test]
    fn test_single_phrase_wraps_to_itself() {
        let mut cycler = TypingCycler::new(["hi"], TypingTiming::default()).unwrap();
        for _ in 0..4 {
            cycler.tick();
        }
        assert_eq!(cycler.index(), 0);
        cycler.tick();
        assert_eq!(cycler.text(), "h");
    }

    #[test]
    fn test_multibyte_phrases_never_split_a_char() {
        let mut cycler = TypingCycler::new(["héllo ☕"], TypingTiming::default()).unwrap();
        cycler.tick();
        cycler.tick();
        assert_eq!(cycler.text(), "hé");
        for _ in 0..5 {
            cycler.tick();
        }
        assert_eq!(cycler.text(), "héllo ☕");
        assert_eq!(cycler.phase(), Phase::Holding);
    }

    #[test]
    fn test_empty_phrase_in_list_is_skipped_over() {
        let mut cycler = TypingCycler::new(["", "x"], TypingTiming::default()).unwrap();
        assert_eq!(cycler.tick(), ms(2000));
        assert_eq!(cycler.tick(), ms(100));
        assert_eq!(cycler.index(), 1);
        cycler.tick();
        assert_eq!(cycler.text(), "x");
    }

    #[test]
    fn test_driven_by_timer_and_cancelled_on_teardown() {
        let timer = ManualTimer::new();
        let cycler = Arc::new(Mutex::new(
            TypingCycler::new(["ab", "cd"], TypingTiming::default()).unwrap(),
        ));
        let first = cycler.lock().unwrap().first_delay();
        let task = RepeatingTask::start(timer.clone(), Trigger::After(first), {
            let cycler = cycler.clone();
            move || Wait::After(cycler.lock().unwrap().tick())
        });

        timer.advance(ms(200));
        assert_eq!(cycler.lock().unwrap().text(), "ab");
        timer.advance(ms(2000));
        assert_eq!(cycler.lock().unwrap().text(), "a");
        timer.advance(ms(50));
        assert_eq!(cycler.lock().unwrap().text(), "");
        assert_eq!(cycler.lock().unwrap().index(), 1);

        drop(task);
        assert_eq!(timer.pending(), 0);
        timer.advance(ms(10_000));
        assert_eq!(cycler.lock().unwrap().text(), "");
    }
}
