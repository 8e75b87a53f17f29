//! Filterable project grids.
//!
//! Each [`ProjectSection`] owns its own [`ProjectFilter`]; the two
//! sections filter independently.

use leptos::prelude::*;

use crate::content::{Accent, PROJECT_GROUPS, Project, ProjectGroup};
use crate::state::projects::{ProjectFilter, all_tech};
use crate::util::reveal::{CARD_REVEAL_MARGIN_PX, delay_style, stagger_delay};
use crate::util::tilt::CardTilt;

/// Both project sections in page order.
#[component]
pub fn Projects() -> impl IntoView {
    PROJECT_GROUPS
        .iter()
        .map(|group| view! { <ProjectSection group=group /> })
        .collect_view()
}

#[component]
pub fn ProjectSection(group: &'static ProjectGroup) -> impl IntoView {
    let filter = RwSignal::new(ProjectFilter::default());
    let tech = all_tech(group.projects);
    let total = group.projects.len();
    let visible = Memo::new(move |_| filter.with(|f| f.apply(group.projects)));
    let accent = group.accent.modifier();

    view! {
        <section id=group.id class=format!("section projects projects--{accent}") data-reveal="up">
            <div class="section__inner">
                <h2 class=format!("section__kicker section__kicker--{accent}")>"// " {group.label}</h2>
                <h3 class="section__title">
                    <span class=format!("projects__count projects__count--{accent}")>{total}</span>
                    " "
                    {group.sublabel}
                </h3>

                <div class="projects__filters">
                    <Show when=move || filter.with(ProjectFilter::is_filtering)>
                        <button class="filter filter--clear" on:click=move |_| filter.update(ProjectFilter::clear)>
                            "✕ Clear"
                        </button>
                    </Show>
                    {tech
                        .into_iter()
                        .map(|name| {
                            let class = move || {
                                if filter.with(|f| f.is_active(name)) { "filter filter--active" } else { "filter" }
                            };
                            view! {
                                <button
                                    class=class
                                    aria-pressed=move || filter.with(|f| f.is_active(name)).to_string()
                                    on:click=move |_| filter.update(|f| f.toggle(name))
                                >
                                    {name}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <p class="projects__summary">{move || filter.with(|f| f.summary(total, visible.with(Vec::len)))}</p>

                <div class="projects__grid" data-reveal="cards" data-reveal-margin=CARD_REVEAL_MARGIN_PX.to_string()>
                    <For
                        each=move || visible.get().into_iter().enumerate()
                        key=|(_, project)| project.title
                        children=move |(index, project)| {
                            view! { <ProjectCard project=project index=index accent=group.accent /> }
                        }
                    />
                </div>

                <Show when=move || visible.with(Vec::is_empty)>
                    <p class="projects__empty">"No projects match the selected filters."</p>
                </Show>
            </div>
        </section>
    }
}

/// Card with pointer-driven 3D tilt, spotlight and hover sparkles.
#[component]
pub fn ProjectCard(project: &'static Project, index: usize, accent: Accent) -> impl IntoView {
    let tilt = RwSignal::new(CardTilt::flat());
    let hovered = RwSignal::new(false);
    let base_delay = stagger_delay(0.0, index, 0.06);

    let class = move || {
        let hover = if hovered.get() { " project-card--hovered" } else { "" };
        format!("project-card project-card--{}{hover}", accent.modifier())
    };
    let style = move || format!("{}; {}", delay_style(base_delay), tilt.get().style());

    let on_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        if let Some(bounds) = crate::util::magnetic::event_bounds(&ev) {
            let (cx, cy) = bounds.center();
            tilt.set(CardTilt::from_pointer(f64::from(ev.client_x()) - cx, f64::from(ev.client_y()) - cy));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };
    let on_leave = move |_| {
        tilt.set(CardTilt::flat());
        hovered.set(false);
    };

    view! {
        <article class=class style=style on:mousemove=on_move on:mouseenter=move |_| hovered.set(true) on:mouseleave=on_leave>
            <div class="project-card__spotlight" aria-hidden="true"></div>
            <div class="project-card__shimmer" aria-hidden="true"></div>
            <div class="project-card__edge" aria-hidden="true"></div>
            <div class="project-card__sparks" aria-hidden="true">
                {(0..4).map(|i| view! { <span class=format!("project-card__spark project-card__spark--{i}")></span> }).collect_view()}
            </div>

            <h4 class="project-card__title">{project.title}</h4>
            <div class="project-card__underline" aria-hidden="true"></div>
            <p class="project-card__description">{project.description}</p>

            <div class="project-card__tags">
                {project
                    .tags
                    .iter()
                    .enumerate()
                    .map(|(i, tag)| {
                        view! { <span class="tag" style=delay_style(stagger_delay(base_delay + 0.3, i, 0.08))>{*tag}</span> }
                    })
                    .collect_view()}
            </div>
            <div class="project-card__tech">
                {project
                    .tech
                    .iter()
                    .enumerate()
                    .map(|(i, tech)| {
                        view! { <span class="tech" style=delay_style(stagger_delay(base_delay + 0.4, i, 0.06))>{*tech}</span> }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}
