//! Build-time configuration.
//!
//! EmailJS identifiers are baked in at compile time from the environment, so
//! a build without them still runs: the contact form then reports a send
//! failure instead of posting.

use crate::error::{EmailError, EmailResult};

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone, PartialEq)]
pub struct EmailJsConfig {
    pub service_id: Option<&'static str>,
    pub template_id: Option<&'static str>,
    pub public_key: Option<&'static str>,
}

/// The three identifiers, all present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmailJsIds {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

fn non_empty(v: Option<&'static str>) -> Option<&'static str> {
    v.filter(|s| !s.trim().is_empty())
}

impl EmailJsConfig {
    pub fn from_build_env() -> Self {
        EmailJsConfig {
            service_id: non_empty(option_env!("EMAILJS_SERVICE_ID")),
            template_id: non_empty(option_env!("EMAILJS_TEMPLATE_ID")),
            public_key: non_empty(option_env!("EMAILJS_PUBLIC_KEY")),
        }
    }

    pub fn ids(&self) -> EmailResult<EmailJsIds> {
        Ok(EmailJsIds {
            service_id: self.service_id.ok_or(EmailError::NotConfigured("EMAILJS_SERVICE_ID"))?,
            template_id: self.template_id.ok_or(EmailError::NotConfigured("EMAILJS_TEMPLATE_ID"))?,
            public_key: self.public_key.ok_or(EmailError::NotConfigured("EMAILJS_PUBLIC_KEY"))?,
        })
    }
}

/// Who the site is about. Shown in the sidebar, headers and the résumé.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteProfile {
    pub name: &'static str,
    pub short_name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub copyright: &'static str,
}

pub const PROFILE: SiteProfile = SiteProfile {
    name: "Ramesh Maharjan",
    short_name: "RAMESH",
    title: "Full-Stack Developer",
    email: "mhrjan0@gmail.com",
    location: "Kathmandu, Nepal",
    copyright: "© 2025 Ramesh. All Rights Reserved",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_ids_are_reported_in_order() {
        let cfg = EmailJsConfig {
            service_id: Some("svc"),
            template_id: None,
            public_key: None,
        };
        match cfg.ids() {
            Err(EmailError::NotConfigured(name)) => assert_eq!(name, "EMAILJS_TEMPLATE_ID"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn complete_config_yields_ids() {
        let cfg = EmailJsConfig {
            service_id: Some("svc"),
            template_id: Some("tpl"),
            public_key: Some("key"),
        };
        let ids = cfg.ids().unwrap();
        assert_eq!(ids.public_key, "key");
    }

    #[test]
    fn blank_values_count_as_missing() {
        assert_eq!(non_empty(Some("  ")), None);
        assert_eq!(non_empty(Some("x")), Some("x"));
    }
}
