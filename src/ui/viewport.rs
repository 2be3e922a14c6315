//! `IntersectionObserver` binding for the in-view model
//!
//! [`use_in_view`] watches one element and exposes whether it is in view as a
//! signal. The observer is created once the element is mounted and
//! disconnected when the owning component unmounts. Fire-once observers also
//! disconnect as soon as they latch.

use leptos::html::ElementType;
use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;

use crate::core::viewport::{InView, ViewportOptions};

#[cfg(not(feature = "ssr"))]
use leptos::logging::warn;
#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::{JsValue, closure::Closure};
#[cfg(not(feature = "ssr"))]
use leptos::web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    js_sys::Array,
};

#[cfg(not(feature = "ssr"))]
type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// In-view signal for the element behind `target`.
///
/// Always false during server rendering, so sections render in their hidden
/// state and reveal after hydration.
#[cfg_attr(feature = "ssr", allow(unused_variables))]
pub fn use_in_view<E>(target: NodeRef<E>, options: ViewportOptions) -> Signal<bool>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let state = RwSignal::new(InView::new(options.mode));

    #[cfg(not(feature = "ssr"))]
    {
        let active = StoredValue::new_local(None::<(IntersectionObserver, ObserverCallback)>);

        Effect::new(move |_| {
            let Some(node) = target.get() else {
                return;
            };
            let element: Element = node.unchecked_into();

            // Re-mounted element: drop the previous observer first
            disconnect(active);

            match observe(&element, options, state) {
                Ok(observer) => active.set_value(Some(observer)),
                Err(err) => {
                    warn!("IntersectionObserver unavailable ({err:?}), checking bounds once");
                    check_bounds(&element, options, state);
                }
            }
        });

        on_cleanup(move || disconnect(active));
    }

    Signal::derive(move || state.with(InView::get))
}

#[cfg(not(feature = "ssr"))]
fn disconnect(active: StoredValue<Option<(IntersectionObserver, ObserverCallback)>, LocalStorage>) {
    active.try_update_value(|slot| {
        if let Some((observer, _callback)) = slot.take() {
            observer.disconnect();
        }
    });
}

#[cfg(not(feature = "ssr"))]
fn observe(
    element: &Element,
    options: ViewportOptions,
    state: RwSignal<InView>,
) -> Result<(IntersectionObserver, ObserverCallback), JsValue> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !record(state, entry.is_intersecting()) {
                    // Owner disposed
                    observer.disconnect();
                    return;
                }
            }
            if state.try_with_untracked(InView::is_settled).unwrap_or(true) {
                observer.disconnect();
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&options.root_margin());
    init.set_threshold(&JsValue::from_f64(0.0));

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);
    Ok((observer, callback))
}

/// Fallback when no observer can be built: one geometry test at mount
#[cfg(not(feature = "ssr"))]
fn check_bounds(element: &Element, options: ViewportOptions, state: RwSignal<InView>) {
    let Some(viewport_height) = leptos::web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64())
    else {
        return;
    };
    let rect = element.get_bounding_client_rect();
    record(
        state,
        options.qualifies(rect.top(), rect.bottom(), viewport_height),
    );
}

/// Feeds one sample into `state`. Returns false once the signal is disposed.
#[cfg(not(feature = "ssr"))]
fn record(state: RwSignal<InView>, intersecting: bool) -> bool {
    let Some(mut next) = state.try_get_untracked() else {
        return false;
    };
    if next.record(intersecting) {
        state.try_set(next);
    }
    true
}
