//! About section with the data-to-impact pipeline.

use leptos::prelude::*;

use crate::content::ABOUT_PIPELINE;
use crate::util::reveal::{delay_style, stagger_delay};

#[component]
pub fn About() -> impl IntoView {
    let last = ABOUT_PIPELINE.len().saturating_sub(1);

    view! {
        <section id="about" class="section about" data-reveal="up">
            <div class="section__inner section__inner--narrow">
                <h2 class="section__kicker">"// About Me"</h2>
                <h3 class="section__title">
                    "Systems-first engineer driven by "
                    <span class="text-primary">"intelligence"</span>
                    ", "
                    <span class="text-ember">"automation"</span>
                    ", and scalable architecture."
                </h3>

                <div class="about__motto" data-reveal="up" style=delay_style(0.1)>
                    <p class="about__motto-line">"I don't build features."</p>
                    <p class="about__motto-line about__motto-line--strong">"I design systems."</p>
                </div>

                <p class="about__body" data-reveal="up" style=delay_style(0.2)>
                    "As a Computer Science student focused on "
                    <span class="text-primary">"Agentic AI"</span>
                    ", "
                    <span class="text-primary">"Machine Learning"</span>
                    ", "
                    <span class="text-primary">"Full Stack Engineering"</span>
                    ", and "
                    <span class="text-primary">"Cloud Architecture"</span>
                    ", I engineer intelligent platforms that transform raw data into autonomous decision systems."
                </p>
                <p class="about__body" data-reveal="up" style=delay_style(0.3)>
                    "From Python and Java backends with FastAPI, Django, and Spring Boot to interactive "
                    "React dashboards and production-ready ML pipelines, I build systems that think, learn, "
                    "adapt, and scale."
                </p>

                <div class="pipeline" data-reveal="up" style=delay_style(0.4)>
                    {ABOUT_PIPELINE
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <div class="pipeline__item">
                                    <div class="pipeline__step" style=delay_style(stagger_delay(0.5, i, 0.12))>
                                        <span class="pipeline__icon">{step.icon.glyph()}</span>
                                        <span class="pipeline__label">{step.label}</span>
                                    </div>
                                    <Show when=move || i < last>
                                        <span class="pipeline__arrow" aria-hidden="true">"→"</span>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
