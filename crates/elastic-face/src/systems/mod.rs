pub mod effects;
pub mod physics;
