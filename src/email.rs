use std::future::Future;

use gloo_net::http::Request;
use serde::Serialize;

use crate::config::{EmailJsConfig, EMAILJS_ENDPOINT};
use crate::error::{EmailError, EmailResult};

/// Template variables of one contact message, optional fields already defaulted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// Delivers a contact message somewhere.
pub trait EmailSender {
    fn send(&self, params: &TemplateParams) -> impl Future<Output = EmailResult<()>>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// EmailJS REST client.
pub struct EmailJsClient {
    config: EmailJsConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Self {
        EmailJsClient { config }
    }
}

impl EmailSender for EmailJsClient {
    async fn send(&self, params: &TemplateParams) -> EmailResult<()> {
        let ids = self.config.ids()?;
        let body = SendRequest {
            service_id: ids.service_id,
            template_id: ids.template_id,
            user_id: ids.public_key,
            template_params: params,
        };

        let resp = Request::post(EMAILJS_ENDPOINT).json(&body)?.send().await?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(EmailError::Status { status, body });
        }
        log::info!("contact message delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let params = TemplateParams {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: "Not provided".into(),
            subject: "Portfolio Inquiry".into(),
            message: "Hello".into(),
        };
        let body = SendRequest {
            service_id: "svc",
            template_id: "tpl",
            user_id: "key",
            template_params: &params,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["service_id"], "svc");
        assert_eq!(json["user_id"], "key");
        assert_eq!(json["template_params"]["phone"], "Not provided");
        assert_eq!(json["template_params"]["message"], "Hello");
    }

    #[test]
    fn unconfigured_client_fails_without_network() {
        let client = EmailJsClient::new(EmailJsConfig {
            service_id: None,
            template_id: None,
            public_key: None,
        });
        let params = TemplateParams {
            name: "a".into(),
            email: "b".into(),
            phone: String::new(),
            subject: String::new(),
            message: "c".into(),
        };
        let result = futures::executor::block_on(client.send(&params));
        assert!(matches!(result, Err(EmailError::NotConfigured("EMAILJS_SERVICE_ID"))));
    }
}
