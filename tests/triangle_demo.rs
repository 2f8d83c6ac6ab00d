use algebra::group::D3Element;
use googletest::prelude::*;
use group_demo::{
  AnimationOptions, Axiom, Component, Transform, TriangleDemo, VERTEX_LABELS,
};
use itertools::iproduct;

const FRAME_MS: f64 = 16.0;

/// Ticks until the triangle stops, returning the time it stopped at.
fn settle(demo: &mut TriangleDemo, mut now: f64) -> f64 {
  demo.tick(now);
  while demo.is_animating() {
    now += FRAME_MS;
    demo.tick(now);
  }
  now
}

#[gtest]
fn test_closure_panel() {
  let demo = TriangleDemo::default();
  expect_eq!(
    Component::check(&demo, Axiom::Closure, &["r", "f"]).as_str(),
    "Result: <math><mrow><mi>r</mi><mo>&#x22C5;</mo><mi>f</mi><mo>=</mo>\
     <mrow><mi>r</mi><mo>&#x22C5;</mo><mi>f</mi></mrow></mrow></math>. \
     Closure holds because the result is in D₃."
  );
}

#[gtest]
fn test_identity_panel() {
  let demo = TriangleDemo::default();
  expect_eq!(
    Component::check(&demo, Axiom::Identity, &["r2"]).as_str(),
    "Result: <math><mrow><mi>1</mi><mo>&#x22C5;</mo><msup><mi>r</mi><mn>2</mn></msup>\
     <mo>=</mo><msup><mi>r</mi><mn>2</mn></msup></mrow></math>. The identity element is 1."
  );
}

#[gtest]
fn test_associativity_panel() {
  let demo = TriangleDemo::default();
  for (a, b, c) in iproduct!(D3Element::ALL, D3Element::ALL, D3Element::ALL) {
    let panel = Component::check(&demo, Axiom::Associativity, &[a.name(), b.name(), c.name()]);
    expect_true!(panel.ends_with("Associativity holds."));
  }
  expect_eq!(
    Component::check(&demo, Axiom::Associativity, &["r", "f", "1"]).as_str(),
    "Result: <math><mrow>( <mi>r</mi><mo>&#x22C5;</mo><mi>f</mi> )<mo>&#x22C5;</mo><mi>1</mi>\
     <mo>=</mo><mrow><mi>r</mi><mo>&#x22C5;</mo><mi>f</mi></mrow></mrow></math> and \
     <math><mrow><mi>r</mi><mo>&#x22C5;</mo>( <mi>f</mi><mo>&#x22C5;</mo><mi>1</mi> )\
     <mo>=</mo><mrow><mi>r</mi><mo>&#x22C5;</mo><mi>f</mi></mrow></mrow></math>. \
     Associativity holds."
  );
}

#[gtest]
fn test_inverse_panel() {
  let demo = TriangleDemo::default();
  expect_eq!(
    Component::check(&demo, Axiom::Inverse, &["r"]).as_str(),
    "Result: <math><mrow><mi>r</mi><mo>&#x22C5;</mo><msup><mi>r</mi><mn>2</mn></msup>\
     <mo>=</mo><mi>1</mi></mrow></math>. Inverse holds."
  );
  for el in D3Element::ALL {
    expect_true!(Component::check(&demo, Axiom::Inverse, &[el.name()])
      .ends_with("Inverse holds."));
  }
}

#[gtest]
fn test_unknown_selection() {
  let demo = TriangleDemo::default();
  expect_eq!(
    Component::check(&demo, Axiom::Inverse, &["g"]).as_str(),
    "Result: <math><mrow><mi>g</mi><mo>&#x22C5;</mo><mi>?</mi><mo>=</mo><mi>?</mi></mrow></math>. \
     \"g\" is not an element of D₃."
  );
  expect_true!(Component::check(&demo, Axiom::Associativity, &["r", "f", "x"])
    .ends_with("\"x\" is not an element of D₃."));
}

#[gtest]
fn test_walk_settles_on_accumulated_element() {
  let mut demo = TriangleDemo::default();
  let mut now = 0.0;

  for generator in [D3Element::R, D3Element::F, D3Element::R2F, D3Element::One, D3Element::RF] {
    let step = demo.press(generator);
    expect_eq!(step.product, demo.current());
    now = settle(&mut demo, now);
    expect_that!(demo.transform().resting_element(), some(eq(demo.current())));
  }

  // r, f, r²f, 1, rf multiplied on the left in turn.
  let expected = D3Element::RF * D3Element::One * D3Element::R2F * D3Element::F * D3Element::R;
  expect_eq!(demo.current(), expected);
}

#[gtest]
fn test_interrupted_animation_still_lands() {
  let mut demo = TriangleDemo::default();
  demo.press(D3Element::R2);
  demo.tick(0.0);
  demo.tick(300.0);
  expect_true!(demo.is_animating());
  expect_that!(demo.transform().resting_element(), none());

  demo.press(D3Element::F);
  settle(&mut demo, 300.0);
  expect_eq!(demo.current(), D3Element::F * D3Element::R2);
  expect_that!(demo.transform().resting_element(), some(eq(demo.current())));
}

#[gtest]
fn test_rotation_duration_scales_with_angle() {
  let options = AnimationOptions::default().with_rotation_step_ms(100.0);
  let mut demo = TriangleDemo::new(options);
  demo.press(D3Element::R2);
  demo.tick(0.0);
  demo.tick(199.0);
  expect_true!(demo.is_animating());
  demo.tick(200.0);
  expect_false!(demo.is_animating());
  expect_eq!(demo.transform().rotation, 240.0);
}

#[gtest]
fn test_pointer_cancel_changes_nothing() {
  let mut demo = TriangleDemo::default();
  demo.press(D3Element::R);
  let now = settle(&mut demo, 0.0);

  demo.pointer_down();
  demo.tick(now + 1000.0);
  demo.tick(now + 2000.0);
  expect_that!(demo.transform().lift, near(demo.options().raise_scale, 1e-9));
  expect_that!(demo.transform().resting_element(), none());

  demo.pointer_cancel();
  settle(&mut demo, now + 3000.0);
  expect_eq!(demo.current(), D3Element::R);
  expect_eq!(demo.transform(), Transform::for_element(D3Element::R));
  expect_that!(demo.transform().resting_element(), some(eq(D3Element::R)));
}

#[gtest]
fn test_pointer_cancel_mid_turn_lands_on_current() {
  let mut demo = TriangleDemo::default();
  demo.press(D3Element::R);
  demo.tick(0.0);
  demo.tick(250.0);
  expect_that!(demo.transform().rotation, near(60.0, 1e-9));

  demo.pointer_down();
  demo.tick(260.0);
  demo.pointer_cancel();
  settle(&mut demo, 260.0);
  expect_eq!(demo.current(), D3Element::R);
  expect_that!(demo.transform().resting_element(), some(eq(D3Element::R)));
}

#[gtest]
fn test_held_press_keeps_turning() {
  let mut demo = TriangleDemo::default();
  demo.press(D3Element::RF);
  demo.tick(0.0);
  demo.tick(100.0);

  demo.pointer_down();
  demo.tick(100.0);
  demo.tick(5000.0);
  let held = demo.transform();
  expect_false!(demo.is_animating());
  expect_that!(held.lift, near(demo.options().raise_scale, 1e-9));
  expect_that!(
    Transform { lift: 1.0, ..held }.resting_element(),
    some(eq(D3Element::RF))
  );

  demo.pointer_up(D3Element::One);
  settle(&mut demo, 5000.0);
  expect_eq!(demo.current(), D3Element::RF);
  expect_that!(demo.transform().resting_element(), some(eq(D3Element::RF)));
}

#[gtest]
fn test_infinite_duration_completes_at_once() {
  let options = AnimationOptions::default()
    .with_rotation_step_ms(f64::INFINITY)
    .with_flip_ms(f64::NAN);
  let mut demo = TriangleDemo::new(options);
  demo.press(D3Element::R2F);
  demo.tick(0.0);
  expect_false!(demo.is_animating());
  expect_that!(demo.transform().resting_element(), some(eq(D3Element::R2F)));
}

#[gtest]
fn test_reset() {
  let mut demo = TriangleDemo::default();
  demo.press(D3Element::RF);
  demo.tick(0.0);
  demo.tick(100.0);

  demo.reset();
  expect_eq!(demo.current(), D3Element::One);
  expect_false!(demo.is_animating());
  expect_eq!(demo.transform(), Transform::IDENTITY);
  expect_eq!(demo.vertex_labels(), VERTEX_LABELS);
  expect_eq!(
    demo.formula_display(),
    "Result: <math><mrow><mi>1</mi><mo>=</mo><mi>1</mi></mrow></math>"
  );
}

#[gtest]
fn test_vertex_labels_follow_composition() {
  for (g, h) in iproduct!(D3Element::ALL, D3Element::ALL) {
    let composed = group_demo::vertex_labels(g * h);
    let mut stepwise = [' '; 3];
    for (position, label) in group_demo::vertex_labels(h).into_iter().enumerate() {
      stepwise[group_demo::vertex_position(g, position)] = label;
    }
    expect_eq!(composed, stepwise);
  }
}
