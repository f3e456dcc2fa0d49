//! Sign-in / sign-up screen backed by the mock auth backend.

use api::{AuthBackend, AuthError, Provider};
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use store::{AuthMode, Field, FieldErrors, UserRecord};

use crate::app_state::use_backend;
use crate::auth_form::{AuthCopy, AuthForm};
use crate::icons::{FaArrowLeft, FaEye, FaEyeSlash, FaFacebook, FaGoogle};
use crate::views::Brand;
use crate::Icon;

#[component]
pub fn AuthView(
    mode: AuthMode,
    on_auth_complete: EventHandler<UserRecord>,
    on_back: EventHandler<()>,
    on_switch_mode: EventHandler<()>,
) -> Element {
    let backend = use_backend();
    let mut form = use_signal(AuthForm::new);

    let copy = AuthCopy::for_mode(mode);
    let fields = form.read().fields().clone();
    let errors = form.read().errors().clone();
    let pending = form.read().is_pending();
    let show_password = form.read().show_password();
    let password_type = if show_password { "text" } else { "password" };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !form.write().begin_submit() {
            return;
        }
        let fields = form.read().fields().clone();
        let service = backend();
        // Not tied to this view: a sign-up must reach the store even if the
        // screen goes away before the delay ends.
        spawn_forever(async move {
            let result = service.validate_and_submit(mode, fields).await;
            if let Some(user) = settle(form, result) {
                on_auth_complete.call(user);
            }
        });
    };

    let mut sign_in_with = move |provider: Provider| {
        if !form.write().begin_submit() {
            return;
        }
        let service = backend();
        spawn_forever(async move {
            let user = service.login_with_provider(provider).await;
            if let Some(user) = settle(form, Ok(user)) {
                on_auth_complete.call(user);
            }
        });
    };

    rsx! {
        div {
            class: "auth",

            header {
                class: "auth-header",
                button {
                    class: "icon-btn",
                    title: "Back",
                    disabled: pending,
                    onclick: move |_| {
                        if form.read().can_leave() {
                            on_back.call(());
                        }
                    },
                    Icon { icon: FaArrowLeft, width: 18, height: 18 }
                }
                Brand {}
            }

            div {
                class: "auth-body",

                div {
                    class: "auth-intro",
                    h1 { "{copy.title}" }
                    p { "{copy.subtitle}" }
                }

                form {
                    class: "auth-form",
                    novalidate: true,
                    onsubmit: handle_submit,

                    if mode == AuthMode::Signup {
                        FormField {
                            label: "Full Name",
                            name: Field::Name.as_str().to_string(),
                            input_type: "text",
                            value: fields.name.clone(),
                            placeholder: "Enter your full name",
                            error: error_text(&errors, Field::Name),
                            on_input: move |value: String| form.write().set_field(Field::Name, value),
                        }
                    }

                    FormField {
                        label: "Email Address",
                        name: Field::Email.as_str().to_string(),
                        input_type: "email",
                        value: fields.email.clone(),
                        placeholder: "Enter your email",
                        error: error_text(&errors, Field::Email),
                        on_input: move |value: String| form.write().set_field(Field::Email, value),
                    }

                    div {
                        class: "password-field",
                        FormField {
                            label: "Password",
                            name: Field::Password.as_str().to_string(),
                            input_type: password_type.to_string(),
                            value: fields.password.clone(),
                            placeholder: "Enter your password",
                            error: error_text(&errors, Field::Password),
                            on_input: move |value: String| form.write().set_field(Field::Password, value),
                        }
                        button {
                            class: "password-toggle",
                            r#type: "button",
                            title: if show_password { "Hide password" } else { "Show password" },
                            onclick: move |_| form.write().toggle_show_password(),
                            if show_password {
                                Icon { icon: FaEyeSlash, width: 18, height: 18 }
                            } else {
                                Icon { icon: FaEye, width: 18, height: 18 }
                            }
                        }
                    }

                    if mode == AuthMode::Signup {
                        FormField {
                            label: "Confirm Password",
                            name: Field::ConfirmPassword.as_str().to_string(),
                            input_type: password_type.to_string(),
                            value: fields.confirm_password.clone(),
                            placeholder: "Confirm your password",
                            error: error_text(&errors, Field::ConfirmPassword),
                            on_input: move |value: String| form.write().set_field(Field::ConfirmPassword, value),
                        }
                    }

                    button {
                        class: "btn btn--primary btn--large btn--block",
                        r#type: "submit",
                        disabled: pending,
                        if pending {
                            div { class: "spinner" }
                        } else {
                            "{copy.submit}"
                        }
                    }
                }

                div {
                    class: "auth-divider",
                    span { "Or continue with" }
                }

                div {
                    class: "auth-social",
                    for provider in Provider::ALL {
                        button {
                            key: "{provider.id()}",
                            class: "btn btn--outline",
                            disabled: pending,
                            onclick: move |_| sign_in_with(provider),
                            {match provider {
                                Provider::Google => rsx! { Icon { icon: FaGoogle, width: 18, height: 18 } },
                                Provider::Facebook => rsx! { Icon { icon: FaFacebook, width: 18, height: 18 } },
                            }}
                            span { "{provider.name()}" }
                        }
                    }
                }

                p {
                    class: "auth-switch",
                    "{copy.switch_prompt} "
                    button {
                        class: "link-btn",
                        r#type: "button",
                        disabled: pending,
                        onclick: move |_| {
                            if !form.read().can_leave() {
                                return;
                            }
                            form.write().switch_mode();
                            on_switch_mode.call(());
                        },
                        "{copy.switch_action}"
                    }
                }

                if mode == AuthMode::Signup {
                    p {
                        class: "auth-terms",
                        "By creating an account, you agree to SignMate's Terms of Service and Privacy Policy."
                    }
                }
            }
        }
    }
}

/// Hand the backend's answer to the form. If the view is already gone the
/// form signal is dropped, and a successful result is still passed on.
fn settle(
    mut form: Signal<AuthForm>,
    result: Result<UserRecord, AuthError>,
) -> Option<UserRecord> {
    match form.try_write() {
        Ok(mut form) => form.finish_submit(result),
        Err(_) => result.ok(),
    }
}

fn error_text(errors: &FieldErrors, field: Field) -> Option<String> {
    errors.get(field).map(ToString::to_string)
}

/// Labelled input with its inline error underneath.
#[component]
fn FormField(
    label: String,
    name: String,
    input_type: String,
    value: String,
    placeholder: String,
    error: Option<String>,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            label { class: "form-label", r#for: "{name}", "{label}" }
            input {
                id: "{name}",
                class: if error.is_some() { "form-input form-input--error" } else { "form-input" },
                r#type: "{input_type}",
                name: "{name}",
                value: "{value}",
                placeholder: "{placeholder}",
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
            if let Some(ref message) = error {
                p { class: "form-error", "{message}" }
            }
        }
    }
}
