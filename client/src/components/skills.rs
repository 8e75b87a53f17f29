//! Tabbed tech-stack section with animated proficiency bars.

use leptos::prelude::*;

use crate::content::{SKILL_TABS, Skill};
use crate::state::skills::{SkillsState, bar_width_style};
use crate::util::reveal::{delay_style, stagger_delay};

#[component]
pub fn Skills() -> impl IntoView {
    let state = RwSignal::new(SkillsState::default());

    let panel = move || {
        let Some(tab) = state.with(SkillsState::active_tab) else {
            return ().into_any();
        };
        view! {
            <div class="skills__panel" data-tab=tab.id>
                <div class="skills__badges">
                    {tab.badges.iter().map(|badge| view! { <span class="chip">{*badge}</span> }).collect_view()}
                </div>
                <div class="skills__bars">
                    {tab
                        .skills
                        .iter()
                        .enumerate()
                        .map(|(i, skill)| view! { <SkillBar skill=skill delay=stagger_delay(0.0, i, 0.05) /> })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <section id="skills" class="section skills" data-reveal="up">
            <div class="section__inner">
                <h2 class="section__kicker">"// Tech Stack"</h2>
                <h3 class="section__title">"What I " <span class="text-primary">"Build"</span> " With"</h3>

                <div class="skills__tabs" role="tablist">
                    {SKILL_TABS
                        .iter()
                        .map(|tab| {
                            let id = tab.id;
                            let class = move || {
                                if state.with(|s| s.is_active(id)) { "skills__tab skills__tab--active" } else { "skills__tab" }
                            };
                            view! {
                                <button
                                    class=class
                                    role="tab"
                                    aria-selected=move || state.with(|s| s.is_active(id)).to_string()
                                    on:click=move |_| {
                                        state.update(|s| {
                                            s.select(id);
                                        });
                                    }
                                >
                                    <span class="skills__tab-icon">{tab.icon.glyph()}</span>
                                    <span>{tab.label}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                {panel}
            </div>
        </section>
    }
}

#[component]
fn SkillBar(skill: &'static Skill, delay: f64) -> impl IntoView {
    view! {
        <div class="skill-bar" style=delay_style(delay)>
            <div class="skill-bar__head">
                <span class="skill-bar__name">{skill.name}</span>
                <span class="skill-bar__level">{skill.level} "%"</span>
            </div>
            <div class="skill-bar__track">
                <div class="skill-bar__fill" style=bar_width_style(skill.level)></div>
            </div>
        </div>
    }
}
