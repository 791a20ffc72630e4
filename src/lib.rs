//! Styling passes that rewrite UI asset files to the fixed Windows 11 theme.

pub mod args;
pub mod dispatch;
pub mod installer;
pub mod patcher;
pub mod theme;
