//! Frame-by-frame animation of the triangle, driven by an external clock.

use std::collections::{HashMap, VecDeque};

use algebra::group::D3Element;
use tracing::{debug, trace};

use crate::pose::{Transform, STEP_DEGREES};

const EPS: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationOptions {
  /// Milliseconds to turn through one 120 degree step.
  pub rotation_step_ms: f64,
  pub flip_ms: f64,
  pub raise_ms: f64,
  /// Uniform scale of the triangle while it is held down.
  pub raise_scale: f64,
}

impl AnimationOptions {
  pub fn with_rotation_step_ms(&self, rotation_step_ms: f64) -> Self {
    Self {
      rotation_step_ms,
      ..*self
    }
  }

  pub fn with_flip_ms(&self, flip_ms: f64) -> Self {
    Self { flip_ms, ..*self }
  }

  pub fn with_raise_ms(&self, raise_ms: f64) -> Self {
    Self { raise_ms, ..*self }
  }

  pub fn with_raise_scale(&self, raise_scale: f64) -> Self {
    Self {
      raise_scale,
      ..*self
    }
  }
}

impl Default for AnimationOptions {
  fn default() -> Self {
    Self {
      rotation_step_ms: 500.0,
      flip_ms: 500.0,
      raise_ms: 150.0,
      raise_scale: 1.2,
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Motion {
  /// Uniform scale to the given value.
  Lift(f64),
  /// Horizontal scale to the given value.
  Flip(f64),
  /// Turn through the given number of degrees.
  Turn(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Phase {
  motion: Motion,
  duration_ms: f64,
}

impl Phase {
  /// How long the phase runs. A negative or non-finite duration completes
  /// the phase on the first frame.
  fn span(&self) -> f64 {
    if self.duration_ms.is_finite() {
      self.duration_ms.max(0.0)
    } else {
      0.0
    }
  }

  fn apply(&self, from: Transform, progress: f64) -> Transform {
    let lerp = |a: f64, b: f64| {
      if progress >= 1.0 {
        b
      } else {
        a + progress * (b - a)
      }
    };
    match self.motion {
      Motion::Lift(to) => Transform {
        lift: lerp(from.lift, to),
        ..from
      },
      Motion::Flip(to) => Transform {
        scale_x: lerp(from.scale_x, to),
        ..from
      },
      Motion::Turn(by) => Transform {
        rotation: from.rotation + progress * by,
        ..from
      },
    }
  }
}

/// A queue of phases played one after the other. The clock starts on the
/// first call to `step`, and each phase begins the instant the previous one
/// ends.
#[derive(Clone, Debug)]
pub struct Animation {
  phases: VecDeque<Phase>,
  phase_start: Option<f64>,
  phase_from: Transform,
  current: Transform,
}

impl Animation {
  pub fn new(from: Transform) -> Self {
    Self {
      phases: VecDeque::new(),
      phase_start: None,
      phase_from: from,
      current: from,
    }
  }

  fn then(mut self, motion: Motion, duration_ms: f64) -> Self {
    self.phases.push_back(Phase {
      motion,
      duration_ms,
    });
    self
  }

  pub fn then_lift(self, to: f64, duration_ms: f64) -> Self {
    self.then(Motion::Lift(to), duration_ms)
  }

  pub fn then_flip(self, to: f64, duration_ms: f64) -> Self {
    self.then(Motion::Flip(to), duration_ms)
  }

  pub fn then_turn(self, by: f64, duration_ms: f64) -> Self {
    self.then(Motion::Turn(by), duration_ms)
  }

  /// Scales the triangle up, as when it is pressed, while it keeps moving
  /// to the resting transform of `to`.
  pub fn raise(from: Transform, to: D3Element, options: &AnimationOptions) -> Self {
    Self::new(from)
      .then_lift(options.raise_scale, options.raise_ms)
      .then_settle(from, to, options)
  }

  /// Moves the triangle from wherever it is to the resting transform of `to`:
  /// first settle any lift, then flip if the handedness changes, then turn
  /// clockwise until the rotation matches.
  pub fn toward(from: Transform, to: D3Element, options: &AnimationOptions) -> Self {
    let mut animation = Self::new(from);
    if (from.lift - 1.0).abs() > EPS {
      animation = animation.then_lift(1.0, options.raise_ms);
    }
    animation.then_settle(from, to, options)
  }

  /// Appends the flip and turn taking the orientation of `from` to that of
  /// `to`. The lift is left alone.
  fn then_settle(mut self, from: Transform, to: D3Element, options: &AnimationOptions) -> Self {
    let target = Transform::for_element(to);
    if (from.scale_x - target.scale_x).abs() > EPS {
      self = self.then_flip(target.scale_x, options.flip_ms);
    }

    let turn = (target.rotation - from.rotation).rem_euclid(360.0);
    if turn > EPS && (360.0 - turn) > EPS {
      self = self.then_turn(turn, options.rotation_step_ms * turn / STEP_DEGREES);
    }
    self
  }

  /// Advances to time `now`, in milliseconds, and returns the transform to
  /// draw.
  pub fn step(&mut self, now: f64) -> Transform {
    let mut start = *self.phase_start.get_or_insert(now);

    while let Some(phase) = self.phases.front() {
      let span = phase.span();
      let progress = if span == 0.0 {
        1.0
      } else {
        ((now - start) / span).clamp(0.0, 1.0)
      };
      self.current = phase.apply(self.phase_from, progress);
      if progress < 1.0 {
        break;
      }

      start += span;
      self.phase_from = self.current;
      self.phases.pop_front();
    }

    self.phase_start = Some(start);
    self.current
  }

  pub fn finished(&self) -> bool {
    self.phases.is_empty()
  }

  /// The transform most recently drawn.
  pub fn current(&self) -> Transform {
    self.current
  }

  /// Total running time of the phases not yet completed, from the start of
  /// the current phase.
  pub fn remaining_ms(&self) -> f64 {
    self.phases.iter().map(Phase::span).sum()
  }

  /// Where the animation comes to rest.
  pub fn target(&self) -> Transform {
    self
      .phases
      .iter()
      .fold(self.phase_from, |from, phase| phase.apply(from, 1.0))
  }
}

/// Plays at most one animation per visual target. Starting a new animation on
/// a target cancels the one in flight, leaving the target where it was last
/// drawn.
#[derive(Debug, Default)]
pub struct Animator {
  active: HashMap<String, Animation>,
  drawn: HashMap<String, Transform>,
}

impl Animator {
  pub fn new() -> Self {
    Self::default()
  }

  /// The transform last drawn for `target`.
  pub fn transform(&self, target: &str) -> Transform {
    self.drawn.get(target).copied().unwrap_or_default()
  }

  pub fn is_animating(&self, target: &str) -> bool {
    self.active.contains_key(target)
  }

  pub fn is_idle(&self) -> bool {
    self.active.is_empty()
  }

  pub fn start(&mut self, target: &str, animation: Animation) {
    if self.active.remove(target).is_some() {
      debug!(id = target, "replacing in-flight animation");
    }
    debug!(id = target, to = %animation.target(), "starting animation");
    if !animation.finished() {
      self.active.insert(target.to_owned(), animation);
    }
  }

  /// Cancels everything and puts every target back to the identity.
  pub fn cancel_all(&mut self) {
    self.active.clear();
    self.drawn.clear();
  }

  /// Advances every animation to `now` and returns the transforms drawn this
  /// frame. Finished animations are dropped.
  pub fn tick(&mut self, now: f64) -> Vec<(String, Transform)> {
    let mut frame = Vec::with_capacity(self.active.len());
    for (target, animation) in self.active.iter_mut() {
      let transform = animation.step(now);
      trace!(id = target.as_str(), now, %transform, "frame");
      self.drawn.insert(target.clone(), transform);
      frame.push((target.clone(), transform));
    }
    self.active.retain(|_, animation| !animation.finished());
    frame
  }
}
