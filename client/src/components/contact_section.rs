//! Contact form with simulated submission.
//!
//! Submitting validates through [`ContactForm`], logs the payload as JSON,
//! waits out the simulated send delay, shows the success state, then
//! returns to idle.

use leptos::prelude::*;

use crate::state::contact::{ContactError, ContactForm, SubmitStatus};

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let error = RwSignal::new(None::<ContactError>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(ContactForm::begin_submit) {
            Some(Ok(payload)) => {
                error.set(None);
                match serde_json::to_string(&payload) {
                    Ok(json) => log::info!("contact: simulated send {json}"),
                    Err(err) => log::warn!("contact: payload not serializable: {err}"),
                }
                #[cfg(feature = "hydrate")]
                schedule_completion(form);
            }
            Some(Err(err)) => {
                log::debug!("contact: rejected: {err}");
                error.set(Some(err));
            }
            None => {}
        }
    };

    let status = move || form.with(|f| f.status);
    let button_class = move || match status() {
        SubmitStatus::Sent => "btn btn--primary contact__submit contact__submit--sent",
        SubmitStatus::Sending => "btn btn--primary contact__submit contact__submit--sending",
        SubmitStatus::Idle => "btn btn--primary contact__submit",
    };
    let button_icon = move || match status() {
        SubmitStatus::Idle => "➤",
        SubmitStatus::Sending => "◌",
        SubmitStatus::Sent => "✓",
    };

    view! {
        <section id="contact-form" class="section contact" data-reveal="up">
            <div class="section__inner section__inner--form">
                <h2 class="section__kicker">"// Get In Touch"</h2>
                <h3 class="section__title">"Send Me a " <span class="text-primary">"Message"</span></h3>
                <p class="section__lead">"Have a project idea or just want to connect? Drop a message."</p>

                <form class="contact__form" on:submit=on_submit novalidate>
                    <div class="contact__row">
                        <label class="field">
                            <span class="field__label">"Name"</span>
                            <input
                                class="field__input"
                                type="text"
                                name="name"
                                placeholder="Your name"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"Email"</span>
                            <input
                                class="field__input"
                                type="email"
                                name="email"
                                placeholder="your@email.com"
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <label class="field">
                        <span class="field__label">"Message"</span>
                        <textarea
                            class="field__input field__input--area"
                            name="message"
                            rows="5"
                            placeholder="What's on your mind?"
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                        ></textarea>
                    </label>

                    <Show when=move || error.with(Option::is_some)>
                        <p class="contact__error" role="alert">
                            {move || error.with(|e| e.as_ref().map(ToString::to_string).unwrap_or_default())}
                        </p>
                    </Show>

                    <button class=button_class type="submit" disabled=move || !form.with(ContactForm::is_idle)>
                        <span class="contact__submit-icon">{button_icon}</span>
                        {move || form.with(ContactForm::button_label)}
                    </button>
                </form>
            </div>
        </section>
    }
}

#[cfg(feature = "hydrate")]
fn schedule_completion(form: RwSignal<ContactForm>) {
    use gloo_timers::callback::Timeout;

    use crate::state::contact::{SEND_DELAY_MS, SENT_BANNER_MS};

    Timeout::new(SEND_DELAY_MS, move || {
        match form.try_update(ContactForm::complete) {
            Some(Ok(())) => log::info!("contact: message sent"),
            Some(Err(err)) => log::warn!("contact: {err}"),
            None => return,
        }
        Timeout::new(SENT_BANNER_MS, move || {
            form.try_update(ContactForm::reset);
        })
        .forget();
    })
    .forget();
}
