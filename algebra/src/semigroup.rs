use std::ops::Mul;

/// An algebraic semigroup. The operation is always written multiplicatively,
/// even for groups like the integers where it is addition.
pub trait Semigroup: PartialEq + Sized + Mul<Output = Self> {}
