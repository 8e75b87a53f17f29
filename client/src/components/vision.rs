//! Vision and engineering philosophy.

use leptos::prelude::*;

use crate::content::{DRIVERS, VISION_PILLARS};
use crate::util::reveal::{delay_style, stagger_delay};

#[component]
pub fn Vision() -> impl IntoView {
    view! {
        <section id="vision" class="section vision" data-reveal="up">
            <div class="section__inner section__inner--narrow">
                <h2 class="section__kicker">"// What Drives Me"</h2>
                <h3 class="section__title">"What " <span class="text-primary">"Drives"</span> " Me"</h3>
                <p class="section__lead">"I am deeply interested in building:"</p>

                <div class="vision__drivers">
                    {DRIVERS
                        .iter()
                        .enumerate()
                        .map(|(i, driver)| {
                            view! {
                                <div class="vision__driver" data-reveal="left" style=delay_style(stagger_delay(0.25, i, 0.08))>
                                    <span class="vision__bullet"></span>
                                    <span>{*driver}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="vision__mindset" data-reveal="up">
                    <p>"My mindset is " <span class="text-primary text-strong">"architectural"</span> "."</p>
                    <p>"Every API, model, and UI component is part of a larger ecosystem."</p>
                </div>

                <h2 class="section__kicker section__kicker--ember">"// My Engineering Philosophy"</h2>
                <h3 class="section__title section__title--small">
                    "Engineering " <span class="text-primary">"Philosophy"</span>
                </h3>

                <blockquote class="vision__quote" data-reveal="left">
                    <p>
                        "\"Intelligence is not added to a system. It is "
                        <span class="text-primary text-strong">"architected"</span>
                        " into it.\""
                    </p>
                </blockquote>

                <div class="vision__explain" data-reveal="up">
                    <p>
                        "I believe great engineering begins at the "
                        <span class="text-primary text-strong">"architecture layer"</span>
                        ". Machine learning models, APIs, and cloud infrastructure must operate as a unified "
                        "ecosystem, not isolated components."
                    </p>
                    <p>"My focus is on designing systems where:"</p>
                </div>

                <div class="pillars" data-reveal="up">
                    {VISION_PILLARS
                        .iter()
                        .enumerate()
                        .map(|(i, pillar)| {
                            view! {
                                <div class="pillars__item" style=delay_style(stagger_delay(0.1, i, 0.1))>
                                    <span class="pillars__icon">{pillar.icon.glyph()}</span>
                                    <span class="pillars__label">{pillar.label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="vision__closing" data-reveal="left">
                    <p>
                        "Every system I build is structured to "
                        <span class="text-primary text-strong">"evolve"</span>
                        ", "
                        <span class="text-primary text-strong">"adapt"</span>
                        ", and "
                        <span class="text-primary text-strong">"grow"</span>
                        "."
                    </p>
                </div>

                <div class="vision__goal" data-reveal="up">
                    <p>
                        "I'm currently building toward becoming an "
                        <span class="text-primary text-strong">"Agentic AI Systems Architect"</span>
                        ", capable of designing adaptive platforms that operate autonomously and scale globally."
                    </p>
                </div>
            </div>
        </section>
    }
}
