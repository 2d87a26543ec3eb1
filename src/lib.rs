pub mod core;
pub mod serialization;
pub mod spawning;
pub mod systems;
