//! Page state and animation model, independent of the browser

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
#[cfg(feature = "ssr")]
pub mod error;
pub mod faq;
pub mod motion;
pub mod page;
pub mod particles;
pub mod presence;
pub mod roadmap;
pub mod scroll;
#[cfg(test)]
mod tests;
pub mod viewport;

pub use faq::{FAQS, FaqAccordion, FaqEntry};
pub use motion::{Motion, MotionState, Orchestration, StylePatch, Transition, Variant};
pub use page::{NavTarget, PAGE_ORDER, PageSection};
pub use presence::{Presence, Swap, SwapChange, SwapPhase, Ticket};
pub use roadmap::{Roadmap, RoadmapStep, RoadmapTab, StepKey};
pub use viewport::{InView, ObserveMode, ViewportOptions};
