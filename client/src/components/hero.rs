//! Landing section: name, roles, typing tagline, counters and the globe.

use leptos::prelude::*;

use crate::components::globe_canvas::GlobeCanvas;
use crate::content::{PROFILE, ROLES, STATS, Stat, TAGLINE};
use crate::util::counter::CountUp;
use crate::util::reveal::{delay_style, stagger_delay};
use crate::util::typing::Typewriter;

#[component]
pub fn Hero() -> impl IntoView {
    let typed = RwSignal::new(Typewriter::new(TAGLINE));

    #[cfg(feature = "hydrate")]
    {
        use crate::util::ticker::spawn_ticker;
        use crate::util::typing::TYPING_TICK_MS;

        let ticker = spawn_ticker(TYPING_TICK_MS, move || typed.try_update(Typewriter::tick).unwrap_or(false));
        on_cleanup(move || ticker.stop());
    }

    view! {
        <section id="hero" class="hero">
            <div class="hero__blobs" aria-hidden="true">
                <div class="hero__blob hero__blob--1"></div>
                <div class="hero__blob hero__blob--2"></div>
                <div class="hero__blob hero__blob--3"></div>
            </div>
            <div class="hero__inner">
                <div class="hero__copy">
                    <p class="hero__kicker">{PROFILE.headline}</p>
                    <h1 class="hero__name">
                        <span class="hero__first">{PROFILE.first_name}</span>
                        <br />
                        <span class="hero__last glitch" data-text=PROFILE.last_name>
                            {PROFILE.last_name}
                        </span>
                    </h1>
                    <p class="hero__education">{PROFILE.education}</p>

                    <div class="hero__roles">
                        {ROLES
                            .iter()
                            .enumerate()
                            .map(|(i, role)| {
                                view! {
                                    <span class="chip hero__role" style=delay_style(stagger_delay(0.5, i, 0.1))>
                                        {*role}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>

                    <p class="hero__tagline">
                        {move || typed.with(Typewriter::displayed)}
                        <Show when=move || !typed.with(Typewriter::is_done)>
                            <span class="hero__caret">"|"</span>
                        </Show>
                    </p>

                    <div class="hero__stats">
                        {STATS.iter().map(|stat| view! { <Counter stat=stat /> }).collect_view()}
                    </div>

                    <div class="hero__actions">
                        <a href=PROFILE.resume_href download="" class="btn btn--primary">
                            "↓ Download Resume"
                        </a>
                        <a href="#contact-form" class="btn btn--outline">
                            "→ Get In Touch"
                        </a>
                    </div>
                </div>
                <div class="hero__globe">
                    <GlobeCanvas />
                </div>
            </div>
            <span class="hero__scroll-hint" aria-hidden="true">"⌄"</span>
        </section>
    }
}

/// Statistic that counts up from zero on mount.
#[component]
pub fn Counter(stat: &'static Stat) -> impl IntoView {
    let count = RwSignal::new(CountUp::new(stat.target));

    #[cfg(feature = "hydrate")]
    {
        use crate::util::counter::COUNT_TICK_MS;
        use crate::util::ticker::spawn_ticker;

        let ticker = spawn_ticker(COUNT_TICK_MS, move || count.try_update(CountUp::tick).unwrap_or(false));
        on_cleanup(move || ticker.stop());
    }

    view! {
        <div class="stat">
            <span class="stat__value">{move || count.with(CountUp::value)} {stat.suffix}</span>
            <p class="stat__label">{stat.label}</p>
        </div>
    }
}
