use tracing::debug;

use crate::{
  component::Component,
  error::DemoResult,
  integer_demo::{IntegerDemo, EVEN_GROUP_TAG, Z_GROUP_TAG},
  make_demo_error,
  triangle_demo::{TriangleDemo, TRIANGLE_GROUP_TAG},
};

/// Builds a fresh component. Components take no parameters.
pub type Factory = fn() -> Box<dyn Component>;

fn even_group_demo() -> Box<dyn Component> {
  Box::new(IntegerDemo::evens())
}

fn z_group_demo() -> Box<dyn Component> {
  Box::new(IntegerDemo::integers())
}

fn triangle_group_demo() -> Box<dyn Component> {
  Box::new(TriangleDemo::default())
}

/// Maps tag names to the components embedded under them. Tags are defined
/// once and cannot be redefined.
#[derive(Default)]
pub struct Registry {
  entries: Vec<(&'static str, Factory)>,
}

impl Registry {
  pub fn new() -> Self {
    Self::default()
  }

  /// A registry holding the integer, even integer and triangle demos.
  pub fn with_builtin() -> Self {
    let mut registry = Self::new();
    let builtin: [(&'static str, Factory); 3] = [
      (EVEN_GROUP_TAG, even_group_demo),
      (Z_GROUP_TAG, z_group_demo),
      (TRIANGLE_GROUP_TAG, triangle_group_demo),
    ];
    for (tag, factory) in builtin {
      if let Err(err) = registry.define(tag, factory) {
        unreachable!("builtin tags are valid and distinct: {err}");
      }
    }
    registry
  }

  /// A valid tag starts with a lowercase letter, contains a hyphen, and has no
  /// uppercase letters or whitespace.
  pub fn is_valid_tag(tag: &str) -> bool {
    tag.starts_with(|c: char| c.is_ascii_lowercase())
      && tag.contains('-')
      && !tag
        .chars()
        .any(|c| c.is_ascii_uppercase() || c.is_whitespace())
  }

  pub fn define(&mut self, tag: &'static str, factory: Factory) -> DemoResult {
    if !Self::is_valid_tag(tag) {
      return Err(make_demo_error!("\"{}\" is not a valid tag name", tag));
    }
    if self.get(tag).is_some() {
      return Err(make_demo_error!("\"{}\" has already been defined", tag));
    }

    debug!(tag, "defined component");
    self.entries.push((tag, factory));
    Ok(())
  }

  pub fn get(&self, tag: &str) -> Option<Factory> {
    self
      .entries
      .iter()
      .find(|(defined, _)| *defined == tag)
      .map(|(_, factory)| *factory)
  }

  pub fn create(&self, tag: &str) -> DemoResult<Box<dyn Component>> {
    self
      .get(tag)
      .map(|factory| factory())
      .ok_or_else(|| make_demo_error!("no component is defined for \"{}\"", tag))
  }

  /// Defined tags, in the order they were defined.
  pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.entries.iter().map(|(tag, _)| *tag)
  }
}
