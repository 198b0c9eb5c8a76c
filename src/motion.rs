//! Decorative motion: the particle background, the typing subtitle, magnetic
//! buttons, and the task scheduling that keeps them running.

pub mod magnetic;
pub mod particles;
pub mod schedule;
pub mod typing;

pub use magnetic::{magnetic_offset, Offset, Rect};
pub use particles::{Bounds, Particle, ParticleConfig, ParticleField};
pub use schedule::{RepeatingTask, ScheduleError, Timer, Trigger, Wait};
pub use typing::{Phase, TypingCycler, TypingError, TypingTiming};
