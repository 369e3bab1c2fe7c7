//! Contact section: details, social links and the contact form.

use dioxus::prelude::*;
use portfolio_core::{FormField, NavSection, SiteConfig, ToastNotifier, ViewEvent, ViewState};

use super::{icons, SectionHeader};

#[component]
pub fn ContactSection(state: Signal<ViewState>) -> Element {
    let config = use_context::<SiteConfig>();
    let profile = &config.profile;

    rsx! {
        section {
            id: NavSection::Contact.anchor(),
            class: "section section-alt",

            SectionHeader {
                title: "Get In Touch".to_string(),
                subtitle: "Let's work together on your next project".to_string(),
            }

            div {
                class: "contact-grid",

                div {
                    class: "contact-info",
                    h3 {
                        class: "contact-heading",
                        "Contact Information"
                    }
                    InfoRow { icon: icons::MAIL, text: profile.email.clone() }
                    InfoRow { icon: icons::PHONE, text: profile.phone.clone() }
                    InfoRow { icon: icons::PIN, text: profile.location.clone() }

                    div {
                        class: "social",
                        h4 {
                            class: "social-heading",
                            "Follow Me"
                        }
                        div {
                            class: "social-row",
                            for (i, link) in config.social.iter().enumerate() {
                                {
                                    let glyph = icons::social_glyph(link.kind);
                                    let label = link.kind.label();
                                    rsx! {
                                        a {
                                            key: "{i}",
                                            class: "social-link",
                                            href: "{link.href}",
                                            title: "{label}",
                                            "{glyph}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                ContactFormPanel {
                    state,
                    phone_hint: profile.phone.clone(),
                }
            }
        }
    }
}

/// One line of contact details.
#[component]
fn InfoRow(icon: &'static str, text: String) -> Element {
    rsx! {
        div {
            class: "info-row",
            span {
                class: "info-icon",
                "{icon}"
            }
            span { "{text}" }
        }
    }
}

/// The simulated contact form.
#[component]
fn ContactFormPanel(mut state: Signal<ViewState>, phone_hint: String) -> Element {
    let notifier = use_context::<ToastNotifier>();
    let mut rejection = use_signal(|| None::<String>);
    let form = state.read().form.clone();
    let rejection_text = rejection().unwrap_or_default();

    let on_submit = move |evt: FormEvent| {
        // Nothing is posted anywhere
        evt.prevent_default();
        let result = state.write().submit_contact(&notifier);
        match result {
            Ok(_) => rejection.set(None),
            Err(e) => rejection.set(Some(e.to_string())),
        }
    };

    rsx! {
        form {
            class: "contact-form",
            onsubmit: on_submit,

            for field in FormField::ALL {
                FieldInput {
                    key: "{field.key()}",
                    state,
                    field,
                    value: form.get(field).to_string(),
                    phone_hint: phone_hint.clone(),
                }
            }

            if !rejection_text.is_empty() {
                p {
                    class: "form-error",
                    "{rejection_text}"
                }
            }

            button {
                class: "btn btn-primary btn-block",
                r#type: "submit",
                "Send Message"
            }
        }
    }
}

/// Returns the HTML input type for a field.
pub fn input_type(field: FormField) -> &'static str {
    match field {
        FormField::Email => "email",
        FormField::Phone => "tel",
        FormField::Name | FormField::Message => "text",
    }
}

/// A labelled input bound to one form field.
#[component]
fn FieldInput(
    mut state: Signal<ViewState>,
    field: FormField,
    value: String,
    phone_hint: String,
) -> Element {
    let placeholder = if field == FormField::Phone { phone_hint } else { String::new() };

    rsx! {
        div {
            class: "form-row",
            label {
                class: "form-label",
                "{field}"
            }
            if field == FormField::Message {
                textarea {
                    class: "form-input form-textarea",
                    name: field.key(),
                    rows: "5",
                    required: field.is_required(),
                    value: "{value}",
                    oninput: move |evt| {
                        state.write().process_event(ViewEvent::FieldChanged {
                            field,
                            value: evt.value(),
                        });
                    },
                }
            } else {
                input {
                    class: "form-input",
                    r#type: input_type(field),
                    name: field.key(),
                    required: field.is_required(),
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |evt| {
                        state.write().process_event(ViewEvent::FieldChanged {
                            field,
                            value: evt.value(),
                        });
                    },
                }
            }
        }
    }
}
