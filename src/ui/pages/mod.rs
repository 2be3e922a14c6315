//! Application pages module
//!
//! - Home page (every section of the site)
//! - Not found page

mod home;
mod not_found;

pub use home::HomePage;
pub use not_found::NotFoundPage;
