//! Window scroll helpers.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Element id targeted by an in-page `#fragment` link.
#[must_use]
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Current scroll metrics of the window, if available.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn current_state() -> Option<crate::state::scroll::ScrollState> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let scroll_height = window.document()?.document_element()?.scroll_height();
    Some(crate::state::scroll::ScrollState::from_metrics(
        scroll_y,
        f64::from(scroll_height),
        viewport_height,
    ))
}

/// Smooth-scroll the window back to the top.
#[cfg(feature = "hydrate")]
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smooth-scroll to the element an in-page link points at.
///
/// Returns `false` when `href` is not a fragment or the target is missing.
#[cfg(feature = "hydrate")]
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(id) = anchor_id(href) else {
        return false;
    };
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::debug!("scroll: no element #{id}");
        return false;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
    true
}
