pub mod accumulator;
pub mod animation;
pub mod axiom;
pub mod component;
pub mod error;
pub mod input;
pub mod integer_demo;
pub mod pose;
pub mod registry;
pub mod symbol;
pub mod triangle_demo;

pub use accumulator::*;
pub use animation::*;
pub use axiom::*;
pub use component::*;
pub use integer_demo::*;
pub use pose::*;
pub use registry::*;
pub use triangle_demo::*;
