//! Frame-gated scroll sampling for components that follow the page position

use leptos::prelude::*;

use crate::core::scroll::ScrollSample;

#[cfg(not(feature = "ssr"))]
use crate::core::scroll::FrameGate;

/// Scroll position, sampled at most once per animation frame.
///
/// The window listener lives as long as the calling component. Each caller
/// gets its own subscription.
pub fn use_scroll_sample() -> ReadSignal<ScrollSample> {
    let (sample, set_sample) = signal(ScrollSample::default());

    #[cfg(not(feature = "ssr"))]
    {
        let gate = StoredValue::new(FrameGate::new());

        let take_sample = move || {
            gate.try_update_value(FrameGate::complete);
            if let Some(current) = read_scroll() {
                // No-op once the component is gone
                let _ = set_sample.try_set(current);
            }
        };

        // A reload can restore the page mid-scroll
        Effect::new(move |_| request_animation_frame(take_sample));

        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            if gate.try_update_value(FrameGate::request).unwrap_or(false) {
                request_animation_frame(take_sample);
            }
        });
        on_cleanup(move || handle.remove());
    }

    sample
}

#[cfg(not(feature = "ssr"))]
fn read_scroll() -> Option<ScrollSample> {
    let window = leptos::web_sys::window()?;
    let offset = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let scroll_height = window
        .document()
        .and_then(|document| document.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(viewport_height);

    Some(ScrollSample {
        offset,
        scroll_height,
        viewport_height,
    })
}
