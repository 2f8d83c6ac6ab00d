use algebra::group::D3Element;
use anyhow::{ensure, Context};
use group_demo::{generator_label, AnimationOptions, TriangleDemo};
use itertools::Itertools;
use tracing::{debug, warn};

#[derive(clap::Args, Debug)]
pub struct WalkCommand {
  /// Generators to press in order: 1, r, r2, f, rf, r2f, or reset.
  generators: Vec<String>,

  /// Simulated time between animation frames.
  #[arg(long, default_value_t = 16.0)]
  frame_ms: f64,

  #[arg(long)]
  rotation_step_ms: Option<f64>,

  #[arg(long)]
  flip_ms: Option<f64>,

  #[arg(long)]
  raise_ms: Option<f64>,

  #[arg(long)]
  raise_scale: Option<f64>,
}

impl WalkCommand {
  fn options(&self) -> AnimationOptions {
    let mut options = AnimationOptions::default();
    if let Some(ms) = self.rotation_step_ms {
      options = options.with_rotation_step_ms(ms);
    }
    if let Some(ms) = self.flip_ms {
      options = options.with_flip_ms(ms);
    }
    if let Some(ms) = self.raise_ms {
      options = options.with_raise_ms(ms);
    }
    if let Some(scale) = self.raise_scale {
      options = options.with_raise_scale(scale);
    }
    options
  }

  fn validate(&self) -> anyhow::Result<()> {
    ensure!(
      self.frame_ms.is_finite() && self.frame_ms > 0.0,
      "--frame-ms must be positive"
    );
    for (flag, ms) in [
      ("--rotation-step-ms", self.rotation_step_ms),
      ("--flip-ms", self.flip_ms),
      ("--raise-ms", self.raise_ms),
    ] {
      if let Some(ms) = ms {
        ensure!(ms.is_finite() && ms >= 0.0, "{flag} must be a finite, non-negative duration");
      }
    }
    if let Some(scale) = self.raise_scale {
      ensure!(scale.is_finite() && scale > 0.0, "--raise-scale must be positive");
    }
    Ok(())
  }

  pub fn run(self) -> anyhow::Result<()> {
    self.validate()?;

    let mut demo = TriangleDemo::new(self.options());
    let mut now = 0.0;

    for token in &self.generators {
      if token == "reset" {
        demo.reset();
        println!("reset: {}", demo.current());
        continue;
      }

      let generator: D3Element = token
        .parse()
        .with_context(|| format!("cannot press \"{token}\""))?;
      let step = demo.press(generator);
      println!(
        "{}: {} · {} = {}",
        generator_label(step.generator),
        step.generator,
        step.previous,
        step.product
      );
      debug!(formula = demo.formula_display(), "formula");

      let mut frames = 0;
      demo.tick(now);
      while demo.is_animating() {
        now += self.frame_ms;
        demo.tick(now);
        frames += 1;
      }

      let transform = demo.transform();
      debug!(frames, now, "animation settled");
      if transform.resting_element() != Some(demo.current()) {
        warn!(%transform, current = demo.current().name(), "triangle out of step");
      }
      println!(
        "  transform: {transform}, labels: {}",
        demo.vertex_labels().iter().join(" ")
      );
    }

    println!("current element: {}", demo.current());
    Ok(())
  }
}
