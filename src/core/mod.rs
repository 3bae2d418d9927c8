// Core helpers shared by the game modules

pub mod bounds;

pub use bounds::Bounds;
