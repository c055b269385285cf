//! Contact form: field state, validation and submission.

use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;

use crate::config::EmailJsConfig;
use crate::email::{EmailJsClient, EmailSender, TemplateParams};
use crate::error::EmailResult;

pub const MSG_REQUIRED: &str = "Please fill in all required fields";
pub const MSG_SENDING: &str = "Sending...";
pub const MSG_SENT: &str = "✓ Message sent successfully! I'll get back to you soon.";
pub const MSG_FAILED: &str = "Failed to send. Please try again.";

pub const DEFAULT_PHONE: &str = "Not provided";
pub const DEFAULT_SUBJECT: &str = "Portfolio Inquiry";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

impl ContactFields {
    /// `None` when a required field is empty.
    pub fn to_params(&self) -> Option<TemplateParams> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return None;
        }
        Some(TemplateParams {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: or_default(&self.phone, DEFAULT_PHONE),
            subject: or_default(&self.subject, DEFAULT_SUBJECT),
            message: self.message.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub status: Option<String>,
    pub loading: bool,
}

impl ContactForm {
    /// Validate and enter the sending state. Returns what to send, or `None`
    /// after setting the validation message.
    pub fn begin(&mut self) -> Option<TemplateParams> {
        if self.loading {
            return None;
        }
        match self.fields.to_params() {
            Some(params) => {
                self.loading = true;
                self.status = Some(MSG_SENDING.to_string());
                Some(params)
            }
            None => {
                self.status = Some(MSG_REQUIRED.to_string());
                None
            }
        }
    }

    pub fn finish(&mut self, result: EmailResult<()>) {
        self.loading = false;
        match result {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.status = Some(MSG_SENT.to_string());
            }
            Err(e) => {
                log::warn!("contact form send failed: {}", e);
                self.status = Some(MSG_FAILED.to_string());
            }
        }
    }
}

/// Run one submission against the form signal: validate, send, record the
/// outcome. A submit while another is in flight is ignored.
pub async fn submit<S: EmailSender>(form: RwSignal<ContactForm>, sender: &S) {
    let Some(params) = form.try_update(|f| f.begin()).flatten() else {
        return;
    };
    let result = sender.send(&params).await;
    form.update(|f| f.finish(result));
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let client = SendWrapper::new(std::rc::Rc::new(EmailJsClient::new(EmailJsConfig::from_build_env())));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let client = (*client).clone();
        spawn_local(async move {
            submit(form, client.as_ref()).await;
        });
    };

    macro_rules! field {
        ($name:ident) => {
            (
                move || form.with(|f| f.fields.$name.clone()),
                move |ev: leptos::ev::Event| form.update(|f| f.fields.$name = event_target_value(&ev)),
            )
        };
    }
    let (name, set_name) = field!(name);
    let (email, set_email) = field!(email);
    let (phone, set_phone) = field!(phone);
    let (subject, set_subject) = field!(subject);
    let (message, set_message) = field!(message);

    let profile = crate::config::PROFILE;

    view! {
        <section id="contact" class="section" aria-label="Contact Information">
            <div class="section-tag"><span>"CONTACT"</span></div>
            <h2 class="section-title">"Let's "<span class="accent">"Connect"</span></h2>
            <div class="contact-grid">
                <div class="contact-info">
                    <p>"Have a project in mind? Send a message and I'll reply as soon as I can."</p>
                    <a class="contact-line" href=format!("mailto:{}", profile.email)>{profile.email}</a>
                    <p class="contact-line">{profile.location}</p>
                </div>
                <form class="contact-form" on:submit=on_submit>
                    <input class="field" placeholder="Your Name *" required prop:value=name on:input=set_name />
                    <input class="field" type="email" placeholder="Your Email *" required prop:value=email on:input=set_email />
                    <input class="field" type="tel" placeholder="Your Phone (Optional)" prop:value=phone on:input=set_phone />
                    <input class="field" placeholder="Subject (Optional)" prop:value=subject on:input=set_subject />
                    <textarea class="field" rows="5" placeholder="Your Message *" required prop:value=message on:input=set_message></textarea>
                    {move || form.with(|f| f.status.clone()).map(|s| view! { <p class="form-status">{s}</p> })}
                    <button type="submit" class="btn btn-primary" disabled=move || form.with(|f| f.loading)>
                        {move || if form.with(|f| f.loading) { MSG_SENDING } else { "Send Message" }}
                    </button>
                </form>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EmailError;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct MockSender {
        fail: bool,
        sent: RefCell<Vec<TemplateParams>>,
    }

    impl MockSender {
        fn new(fail: bool) -> Self {
            MockSender { fail, sent: RefCell::new(Vec::new()) }
        }
    }

    impl EmailSender for MockSender {
        async fn send(&self, params: &TemplateParams) -> EmailResult<()> {
            self.sent.borrow_mut().push(params.clone());
            if self.fail {
                Err(EmailError::Status { status: 500, body: "down".into() })
            } else {
                Ok(())
            }
        }
    }

    fn filled() -> ContactForm {
        ContactForm {
            fields: ContactFields {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                phone: String::new(),
                subject: String::new(),
                message: "Hi there".into(),
            },
            ..Default::default()
        }
    }

    /// Submit through a form signal the way the component does.
    fn run(form: ContactForm, sender: &MockSender) -> ContactForm {
        let owner = Owner::new();
        owner.set();
        let signal = RwSignal::new(form);
        block_on(submit(signal, sender));
        signal.get_untracked()
    }

    #[test]
    fn missing_required_field_never_sends() {
        for clear in 0..3 {
            let mut form = filled();
            match clear {
                0 => form.fields.name.clear(),
                1 => form.fields.email.clear(),
                _ => form.fields.message.clear(),
            }
            let sender = MockSender::new(false);
            let form = run(form, &sender);
            assert!(sender.sent.borrow().is_empty());
            assert_eq!(form.status.as_deref(), Some(MSG_REQUIRED));
            assert!(!form.loading);
        }
    }

    #[test]
    fn success_resets_fields() {
        let sender = MockSender::new(false);
        let form = run(filled(), &sender);

        assert_eq!(form.fields, ContactFields::default());
        assert_eq!(form.status.as_deref(), Some(MSG_SENT));
        assert!(!form.loading);

        let sent = sender.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].phone, DEFAULT_PHONE);
        assert_eq!(sent[0].subject, DEFAULT_SUBJECT);
    }

    #[test]
    fn failure_keeps_fields_and_clears_loading() {
        let before = filled().fields;
        let form = run(filled(), &MockSender::new(true));

        assert_eq!(form.fields, before);
        assert_eq!(form.status.as_deref(), Some(MSG_FAILED));
        assert!(!form.loading);
    }

    #[test]
    fn submit_in_flight_is_ignored() {
        let mut busy = filled();
        busy.loading = true;
        let sender = MockSender::new(false);
        let form = run(busy.clone(), &sender);
        assert!(sender.sent.borrow().is_empty());
        assert_eq!(form, busy);
    }

    #[test]
    fn begin_marks_loading() {
        let mut form = filled();
        assert!(form.begin().is_some());
        assert!(form.loading);
        assert_eq!(form.status.as_deref(), Some(MSG_SENDING));
        // A second submit while in flight is ignored.
        assert!(form.begin().is_none());
    }

    #[test]
    fn optional_fields_pass_through_when_set() {
        let mut form = filled();
        form.fields.phone = "555".into();
        form.fields.subject = "Hello".into();
        let params = form.fields.to_params().unwrap();
        assert_eq!(params.phone, "555");
        assert_eq!(params.subject, "Hello");
    }
}
