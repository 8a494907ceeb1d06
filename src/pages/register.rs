//! Registration Launchpad
//!
//! The six-step delegate registration form. Steps are rendered from the
//! static step catalog; every control reads and writes the session's
//! answer store, so navigating back and forth restores prior input.

use std::collections::HashSet;

use dioxus::prelude::*;
use tracing::{error, info};

use ceis_core::{
    fee, AnswerStore, ChoiceOption, FieldDef, FieldKind, FormSession, Phase,
    RegistrationPayload, SubmissionClient,
};
use ceis_ui::{Button, ButtonVariant, ChoiceGroup, Input, SelectField, Starfield, StepIndicator, TextArea};

use crate::components::{
    NavHeader, PhotoUpload, SignaturePadView, SuccessView, UploadStatus, ZodiacPicker,
};
use crate::context::use_app_config;

#[component]
pub fn Register() -> Element {
    let mut session = use_signal(FormSession::new);
    let invalid: Signal<HashSet<&'static str>> = use_signal(HashSet::new);
    let notice: Signal<Option<String>> = use_signal(|| None);
    let photo_status: Signal<UploadStatus> = use_signal(|| UploadStatus::Idle);
    let config = use_app_config();

    // The photo read finishes on its own schedule; whenever the status
    // lands on Ready the attachment goes into the store, even if the user
    // has already moved past the upload step.
    use_effect(move || {
        let status = photo_status.read();
        match &*status {
            UploadStatus::Ready(attachment) => {
                session.write().answers.set_photo(attachment.clone());
            }
            UploadStatus::Idle => session.write().answers.clear_photo(),
            _ => {}
        }
    });

    if session.read().phase() == Phase::Submitted {
        return rsx! {
            Starfield {}
            NavHeader {}
            main { class: "page", SuccessView {} }
        };
    }

    let step = session.read().step();
    let total_steps = session.read().step_count();
    let step_def = session.read().current_step_def();
    let submitting = session.read().phase() == Phase::Submitting;

    let continue_label = if submitting {
        "PREPARING LAUNCH..."
    } else if session.read().is_last_step() {
        "Chart Your Course"
    } else {
        "Continue"
    };

    let on_continue = {
        let mut session = session;
        let mut invalid = invalid;
        let mut notice = notice;
        move |_| {
            use ceis_core::Advance;
            let outcome = session.write().advance();
            match outcome {
                Advance::Invalid(missing) => {
                    invalid.set(missing.into_iter().collect());
                }
                Advance::Next(step) => {
                    invalid.write().clear();
                    info!(step, "advanced to step");
                }
                Advance::ReadyToSubmit => {
                    invalid.write().clear();
                    notice.set(None);
                    let payload = RegistrationPayload::from_store(&session.read().answers);
                    let endpoint = config.read().sheets_url.clone();
                    spawn(async move {
                        let client = SubmissionClient::new(endpoint);
                        match client.submit(&payload).await {
                            Ok(()) => session.write().mark_submitted(),
                            Err(e) => {
                                error!(error = %e, "registration failed");
                                notice.set(Some(format!(
                                    "Transmission failed: {e}. Please try again."
                                )));
                                session.write().submission_failed();
                            }
                        }
                    });
                }
            }
        }
    };

    rsx! {
        Starfield {}
        NavHeader {}
        main { class: "page",
            div { class: "registration-launchpad",
                h1 {
                    class: "orbitron text-gradient-gold",
                    style: "text-align: center; font-size: 2.2rem; margin-bottom: 0.6rem;",
                    "Registration Launchpad"
                }
                p {
                    style: "text-align: center; color: var(--text-muted); margin-bottom: 2.5rem;",
                    "Step {step} of {total_steps}"
                }
                StepIndicator { total: total_steps, current: step }

                div { class: "glass-card",
                    h2 {
                        class: "orbitron",
                        style: "color: var(--gold-supernova); margin-bottom: 1.8rem; letter-spacing: 1px;",
                        "{step_def.title}"
                    }

                    if step == 6 {
                        TermsBox {}
                    }

                    for field in step_def.fields.iter() {
                        {field_view(
                            session,
                            photo_status,
                            field,
                            still_invalid(&invalid.read(), &session.read().answers, field.key),
                        )}
                    }

                    if step == 5 {
                        FeeCard { session }
                    }
                }

                div { class: "form-nav",
                    if step > 1 {
                        Button {
                            variant: ButtonVariant::Glass,
                            disabled: submitting,
                            onclick: move |_| {
                                let mut s = session;
                                s.write().back();
                            },
                            "Back"
                        }
                    } else {
                        div {}
                    }
                    Button {
                        variant: ButtonVariant::Cta,
                        disabled: submitting,
                        onclick: on_continue,
                        "{continue_label}"
                    }
                }

                if let Some(message) = notice.read().as_ref() {
                    p { class: "submit-error", "{message}" }
                }
            }
        }
    }
}

/// Whether a field flagged by the last failed Continue should still show
/// its error mark. The mark clears as soon as the user fills the field,
/// without waiting for the next Continue click.
fn still_invalid(flagged: &HashSet<&'static str>, answers: &AnswerStore, key: &str) -> bool {
    flagged.contains(key) && !answers.is_filled(key)
}

/// Renders one field from the step catalog, bound to the session store.
fn field_view(
    session: Signal<FormSession>,
    photo_status: Signal<UploadStatus>,
    field: &'static FieldDef,
    invalid: bool,
) -> Element {
    let key = field.key;
    let value = session.read().answers.value(key).to_string();
    let label = field.label.to_string();
    let placeholder = field.placeholder.to_string();
    let mut session = session;

    match field.kind {
        FieldKind::Text | FieldKind::Email | FieldKind::Tel | FieldKind::Date => {
            let input_type = match field.kind {
                FieldKind::Email => "email",
                FieldKind::Tel => "tel",
                FieldKind::Date => "date",
                _ => "text",
            }
            .to_string();
            rsx! {
                Input {
                    value,
                    label,
                    placeholder,
                    input_type,
                    required: field.required,
                    invalid,
                    oninput: move |v: String| session.write().answers.set(key, v),
                }
            }
        }
        FieldKind::TextArea { rows } => rsx! {
            TextArea {
                value,
                label,
                placeholder,
                rows,
                required: field.required,
                invalid,
                oninput: move |v: String| session.write().answers.set(key, v),
            }
        },
        FieldKind::Select { options } => rsx! {
            SelectField {
                value,
                label,
                placeholder,
                options,
                required: field.required,
                invalid,
                onchange: move |v: String| session.write().answers.set(key, v),
            }
        },
        FieldKind::Choice { options } => rsx! {
            ChoiceGroup {
                options,
                selected: value,
                label,
                required: field.required,
                invalid,
                on_select: move |opt: ChoiceOption| {
                    session.write().select_choice(key, opt.value, opt.price);
                },
            }
        },
        FieldKind::ZodiacGrid => rsx! {
            ZodiacPicker {
                selected: value,
                label,
                invalid,
                on_select: move |name: &'static str| session.write().answers.set(key, name),
            }
        },
        FieldKind::Photo => rsx! {
            PhotoUpload {
                label,
                hint: placeholder,
                status: photo_status,
            }
        },
        FieldKind::Signature => rsx! {
            SignaturePadView {
                label,
                invalid,
                on_signed: move |data_uri: String| session.write().answers.set(key, data_uri),
                on_clear: move |_| session.write().answers.clear(key),
            }
        },
        FieldKind::Checkbox => {
            let checked = session.read().answers.is_filled(key);
            rsx! {
                div { class: "input-group",
                    label {
                        class: "terms-item",
                        style: if invalid { "color: var(--danger); cursor: pointer;" } else { "cursor: pointer;" },
                        input {
                            r#type: "checkbox",
                            checked,
                            onchange: move |e| {
                                if e.checked() {
                                    session.write().answers.set(key, "Accepted");
                                } else {
                                    session.write().answers.clear(key);
                                }
                            },
                        }
                        span {
                            "{field.label}"
                            if field.required {
                                span { class: "required-mark", " *" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Live participation fee summary shown on the logistics step.
#[component]
fn FeeCard(session: Signal<FormSession>) -> Element {
    let total = fee::total(&session.read().answers);
    rsx! {
        div { class: "glass-card fee-card",
            h4 { style: "color: var(--text-muted); font-size: 0.8rem; letter-spacing: 2px; text-transform: uppercase; margin-bottom: 0.5rem;",
                "Total Participation Fee"
            }
            p { {fee::format_total(total)} }
        }
    }
}

/// The delegate commitments list shown above the signature.
#[component]
fn TermsBox() -> Element {
    const TERMS: &[&str] = &[
        "I commit to attending the full duration of the conference.",
        "I will respect the venue, the agenda, and my fellow delegates.",
        "I understand the participation fee is non-refundable after confirmation.",
        "I authorize the use of conference photos featuring me for AIESEC communications.",
        "I will follow the safety instructions of the organizing committee at all times.",
    ];

    rsx! {
        div { style: "margin-bottom: 2rem;",
            for (i, term) in TERMS.iter().enumerate() {
                div { class: "terms-item",
                    span { style: "color: var(--gold-supernova);", "{i + 1}." }
                    span { "{term}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ceis_core::steps::keys;

    fn flagged(fields: &[&'static str]) -> HashSet<&'static str> {
        fields.iter().copied().collect()
    }

    #[test]
    fn error_mark_clears_once_the_field_is_filled() {
        let mut answers = AnswerStore::new();
        let flagged = flagged(&[keys::NAME]);
        assert!(still_invalid(&flagged, &answers, keys::NAME));

        answers.set(keys::NAME, "Nour Ben Salah");
        assert!(!still_invalid(&flagged, &answers, keys::NAME));
    }

    #[test]
    fn unflagged_fields_never_show_the_mark() {
        let answers = AnswerStore::new();
        assert!(!still_invalid(&HashSet::new(), &answers, keys::EMAIL));
    }

    #[test]
    fn clearing_a_flagged_checkbox_brings_the_mark_back() {
        let mut answers = AnswerStore::new();
        let flagged = flagged(&[keys::TERMS]);

        answers.set(keys::TERMS, "Accepted");
        assert!(!still_invalid(&flagged, &answers, keys::TERMS));

        answers.clear(keys::TERMS);
        assert!(still_invalid(&flagged, &answers, keys::TERMS));
    }
}
