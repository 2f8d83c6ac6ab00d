mod group_impl;
mod types;

pub use group_impl::*;
pub use types::*;
