//! Scroll-triggered reveal.
//!
//! Elements carrying `data-reveal` start hidden in CSS and transition in
//! once the `is-revealed` class is added. One `IntersectionObserver` per
//! distinct margin adds the class the first time each element enters the
//! viewport, then stops watching it. `data-reveal-margin` picks the margin.

use std::collections::BTreeMap;

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Class applied once an element has been revealed.
pub const REVEALED_CLASS: &str = "is-revealed";

/// Name of the optional attribute that overrides the reveal margin.
pub const MARGIN_ATTR: &str = "data-reveal-margin";

/// Negative margins that delay a reveal until the element is well inside
/// the viewport. Sections use the default; smaller targets trigger sooner.
pub const SECTION_REVEAL_MARGIN_PX: u32 = 80;
pub const FOOTER_REVEAL_MARGIN_PX: u32 = 60;
pub const CARD_REVEAL_MARGIN_PX: u32 = 30;

/// Delay for the `index`-th item of a staggered group, in seconds.
#[must_use]
pub fn stagger_delay(base: f64, index: usize, step: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let index = index as f64;
    base + index * step
}

/// Inline style carrying a transition delay for the reveal CSS.
#[must_use]
pub fn delay_style(seconds: f64) -> String {
    format!("--delay: {:.2}s", seconds.max(0.0))
}

/// Margin for an element given its `data-reveal-margin` value. Missing or
/// unparsable values fall back to the section margin.
#[must_use]
pub fn margin_for(attr: Option<&str>) -> u32 {
    attr.and_then(|v| v.trim().parse().ok()).unwrap_or(SECTION_REVEAL_MARGIN_PX)
}

/// Bucket items by margin so each bucket can share one observer.
pub fn group_by_margin<T>(items: impl IntoIterator<Item = (T, u32)>) -> BTreeMap<u32, Vec<T>> {
    let mut groups: BTreeMap<u32, Vec<T>> = BTreeMap::new();
    for (item, margin) in items {
        groups.entry(margin).or_default().push(item);
    }
    groups
}

/// `rootMargin` for the observer.
#[must_use]
pub fn root_margin(margin_px: u32) -> String {
    format!("-{margin_px}px 0px -{margin_px}px 0px")
}

/// Observe every not-yet-revealed `[data-reveal]` element, one observer
/// per margin. The observers and their shared callback live for the rest
/// of the page.
///
/// # Errors
///
/// Fails when there is no document or an observer cannot be created.
#[cfg(feature = "hydrate")]
pub fn observe_reveals() -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("no document"))?;

    let nodes = document.query_selector_all("[data-reveal]:not(.is-revealed)")?;
    let elements = (0..nodes.length())
        .filter_map(|i| nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()))
        .map(|el| {
            let margin = margin_for(el.get_attribute(MARGIN_ATTR).as_deref());
            (el, margin)
        });
    let groups = group_by_margin(elements);

    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Err(err) = target.class_list().add_1(REVEALED_CLASS) {
                    log::warn!("reveal: failed to add class: {err:?}");
                }
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    for (margin, elements) in &groups {
        let init = IntersectionObserverInit::new();
        init.set_root_margin(&root_margin(*margin));
        init.set_threshold(&wasm_bindgen::JsValue::from_f64(0.0));
        let observer = IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)?;
        for el in elements {
            observer.observe(el);
        }
        log::debug!("reveal: observing {} elements at -{margin}px", elements.len());
    }
    on_intersect.forget();
    Ok(())
}
