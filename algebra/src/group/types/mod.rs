mod cyclic;
mod d3;
mod dihedral;
mod integer;

pub use cyclic::*;
pub use d3::*;
pub use dihedral::*;
pub use integer::*;
