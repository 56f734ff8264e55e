pub mod background;
pub mod scene;
pub mod time;
