pub mod theme;

pub use theme::{provide_theme_context, use_theme, Theme};
