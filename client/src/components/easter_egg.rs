//! Konami code banner.

use leptos::prelude::*;

#[component]
pub fn EasterEgg() -> impl IntoView {
    let shown = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Timeout;

        use crate::util::konami::{BANNER_MS, KonamiDetector};

        let detector = RwSignal::new(KonamiDetector::default());
        let on_key = window_event_listener(leptos::ev::keydown, move |ev| {
            let key = ev.key();
            if detector.try_update(|d| d.push(&key)).unwrap_or(false) {
                log::info!("konami code entered");
                shown.set(true);
                Timeout::new(BANNER_MS, move || {
                    shown.try_set(false);
                })
                .forget();
            }
        });
        on_cleanup(move || on_key.remove());
    }

    view! {
        <Show when=move || shown.get()>
            <div class="easter-egg" role="status">
                <div class="easter-egg__card">
                    <p class="easter-egg__emoji">"🔥"</p>
                    <p class="easter-egg__title">"KONAMI UNLOCKED!"</p>
                    <p class="easter-egg__text">"You found the secret. You're a real one."</p>
                    <div class="easter-egg__timer"></div>
                </div>
            </div>
        </Show>
    }
}
