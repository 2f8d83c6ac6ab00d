//! Where the triangle sits on screen for a given element of D3.

use std::fmt::Display;

use algebra::group::D3Element;

/// Degrees turned by one rotation step.
pub const STEP_DEGREES: f64 = 120.0;

/// Vertex labels in their starting positions: top, bottom right, bottom left.
pub const VERTEX_LABELS: [char; 3] = ['1', '2', '3'];

/// A transform of the triangle, as applied to the SVG group holding it:
/// `rotate(rotation) scale(scale_x, 1)`, then a uniform `lift` while it is
/// held down. The rotation is not reduced mod 360, so animations keep turning
/// in one direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
  pub rotation: f64,
  pub scale_x: f64,
  pub lift: f64,
}

impl Transform {
  pub const IDENTITY: Self = Self {
    rotation: 0.0,
    scale_x: 1.0,
    lift: 1.0,
  };

  /// The resting transform of the triangle after `el` has been applied to it.
  pub fn for_element(el: D3Element) -> Self {
    Self {
      rotation: STEP_DEGREES * el.rotation() as f64,
      scale_x: if el.reflected() { -1.0 } else { 1.0 },
      lift: 1.0,
    }
  }

  /// The element this transform shows, if it is at rest on one.
  pub fn resting_element(&self) -> Option<D3Element> {
    const EPS: f64 = 1e-6;

    if (self.lift - 1.0).abs() > EPS || (self.scale_x.abs() - 1.0).abs() > EPS {
      return None;
    }
    let steps = self.rotation.rem_euclid(360.0) / STEP_DEGREES;
    let nearest = steps.round();
    if (steps - nearest).abs() > EPS {
      return None;
    }

    D3Element::ALL.into_iter().find(|el| {
      el.rotation() == (nearest as u16) % 3 && el.reflected() == (self.scale_x < 0.0)
    })
  }
}

impl Default for Transform {
  fn default() -> Self {
    Self::IDENTITY
  }
}

impl Display for Transform {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "rotate({}) scale({}, 1)", self.rotation, self.scale_x)?;
    if self.lift != 1.0 {
      write!(f, " scale({})", self.lift)?;
    }
    Ok(())
  }
}

/// The screen position a vertex ends up in once `el` is applied. Positions
/// are numbered clockwise from the top. Rotation moves each vertex one
/// position clockwise per step, and reflection through the vertical axis
/// swaps the two bottom positions: `p -> k + (-1)^d p (mod 3)`.
pub fn vertex_position(el: D3Element, vertex: usize) -> usize {
  debug_assert!(vertex < 3);
  let k = el.rotation() as usize;
  let p = if el.reflected() {
    (3 - vertex) % 3
  } else {
    vertex
  };
  (k + p) % 3
}

/// The vertex labels as they appear after `el` is applied, listed by screen
/// position clockwise from the top.
pub fn vertex_labels(el: D3Element) -> [char; 3] {
  let mut labels = [' '; 3];
  for (vertex, label) in VERTEX_LABELS.into_iter().enumerate() {
    labels[vertex_position(el, vertex)] = label;
  }
  labels
}
