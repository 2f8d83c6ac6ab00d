pub mod error;
pub mod finite;
pub mod group;
pub mod monoid;
pub mod ordinal;
pub mod semigroup;
