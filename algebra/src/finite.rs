/// A set with a fixed number of elements, known from its type alone. For a
/// finite group this is the order of the group.
pub trait Finite {
  const SIZE: usize;
}
