pub mod app;
pub mod flash;
pub mod input;
pub mod item_view;
pub mod layout;
pub mod render;
pub mod theme;

pub use app::run;
