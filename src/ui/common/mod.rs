//! Common reusable UI components

pub mod tabs;

pub use tabs::{TabItem, Tabs};
