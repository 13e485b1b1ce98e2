pub mod config;
pub mod draw;
pub mod randomizer;
pub mod tick_limit;
pub mod window;
