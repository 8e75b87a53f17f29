//! Closing section with social links and credits.

use leptos::prelude::*;

use crate::components::magnetic::Magnetic;
use crate::content::{CONTACT_LINKS, PROFILE};
use crate::util::clock::{copyright_line, current_year};
use crate::util::reveal::{FOOTER_REVEAL_MARGIN_PX, delay_style, stagger_delay};

#[component]
pub fn Footer() -> impl IntoView {
    let owner = format!("{} {}", PROFILE.first_name, PROFILE.last_name);

    // Server clock on first paint; the browser clock takes over once hydrated.
    let year = RwSignal::new(current_year());
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || year.set(current_year()));
    }

    view! {
        <footer id="contact" class="section footer" data-reveal="up" data-reveal-margin=FOOTER_REVEAL_MARGIN_PX.to_string()>
            <div class="section__inner section__inner--center">
                <h2 class="section__kicker">"// Connect"</h2>
                <h3 class="section__title">"Let's " <span class="text-primary">"Build"</span> " Together"</h3>
                <p class="section__lead">
                    "Open to collaborations, open-source contributions, and interesting conversations about AI, "
                    "architecture, and engineering."
                </p>

                <div class="footer__links">
                    {CONTACT_LINKS
                        .iter()
                        .enumerate()
                        .map(|(i, link)| {
                            let target = if link.external { Some("_blank") } else { None };
                            view! {
                                <Magnetic>
                                    <a
                                        class="footer__link"
                                        href=link.href
                                        target=target
                                        rel="noopener noreferrer"
                                        style=delay_style(stagger_delay(0.3, i, 0.08))
                                    >
                                        <span class="footer__icon">{link.icon.glyph()}</span>
                                        <span class="footer__text">
                                            <span class="footer__label">{link.label}</span>
                                            <span class="footer__tag">{link.tag}</span>
                                        </span>
                                        <span class="footer__external" aria-hidden="true">"↗"</span>
                                    </a>
                                </Magnetic>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="footer__credits">
                    <p>"Designed & Built by " <span class="footer__owner">{owner}</span></p>
                    <p>"Made with " <span class="footer__heart">"♥"</span> " and a lot of caffeine"</p>
                    <p class="footer__copyright">{move || copyright_line(year.get())}</p>
                </div>
            </div>
        </footer>
    }
}
