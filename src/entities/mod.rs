//! SeaORM entity definitions

pub mod prelude;

pub mod channels;
pub mod posts;
pub mod publications;
