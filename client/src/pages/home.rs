//! The one-page portfolio.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::back_to_top::BackToTop;
use crate::components::contact_section::ContactSection;
use crate::components::cursor_trail::CursorTrail;
use crate::components::easter_egg::EasterEgg;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::noise_overlay::NoiseOverlay;
use crate::components::particle_background::ParticleBackground;
use crate::components::projects::Projects;
use crate::components::scroll_progress::ScrollProgress;
use crate::components::section_divider::SectionDivider;
use crate::components::skills::Skills;
use crate::components::vision::Vision;
use crate::state::scroll::ScrollState;

/// Overlays first, then the sections in page order separated by dividers.
#[component]
pub fn HomePage() -> impl IntoView {
    let scroll = RwSignal::new(ScrollState::default());
    provide_context(scroll);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::reveal::observe_reveals;
        use crate::util::scroll::current_state;

        let refresh = move || {
            if let Some(next) = current_state()
                && next != scroll.get_untracked()
            {
                scroll.set(next);
            }
        };
        let on_scroll = window_event_listener(leptos::ev::scroll, move |_| refresh());
        let on_resize = window_event_listener(leptos::ev::resize, move |_| refresh());

        Effect::new(move || {
            refresh();
            if let Err(err) = observe_reveals() {
                log::warn!("reveal: {err:?}");
            }
        });

        on_cleanup(move || {
            on_scroll.remove();
            on_resize.remove();
        });
    }

    view! {
        <div class="home">
            <ParticleBackground />
            <NoiseOverlay />
            <ScrollProgress />
            <CursorTrail />
            <BackToTop />
            <EasterEgg />

            <div class="home__content">
                <Navbar />
                <Hero />
                <SectionDivider />
                <About />
                <SectionDivider />
                <Skills />
                <SectionDivider />
                <Projects />
                <SectionDivider />
                <Vision />
                <SectionDivider />
                <ContactSection />
                <SectionDivider />
                <Footer />
            </div>
        </div>
    }
}
