pub mod common;
pub mod icon;
pub mod motion;
pub mod pages;
pub mod scroll;
pub mod sections;
pub mod seo;
pub mod styles;
pub mod viewport;

#[cfg(all(test, feature = "ssr"))]
mod tests;

pub use icon::{Icon, icons};
pub use pages::{HomePage, NotFoundPage};
