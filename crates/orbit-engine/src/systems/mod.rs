pub mod interaction;
pub mod render;
pub mod rng;
pub mod spawn;
