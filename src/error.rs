use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while delivering the contact form.
#[derive(Debug, Error)]
pub enum EmailError {
    #[error("email request failed: {0}")]
    Request(String),

    #[error("email service answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("email service not configured: missing {0}")]
    NotConfigured(&'static str),
}

impl From<gloo_net::Error> for EmailError {
    fn from(e: gloo_net::Error) -> Self {
        EmailError::Request(e.to_string())
    }
}

/// Failures while building or saving the résumé document.
#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("browser call failed: {0}")]
    Dom(String),

    #[error("document encoding failed: {0}")]
    Encode(String),
}

impl ResumeError {
    pub fn dom(what: &str, err: JsValue) -> Self {
        ResumeError::Dom(format!("{}: {:?}", what, err))
    }
}

pub type EmailResult<T> = Result<T, EmailError>;
pub type ResumeResult<T> = Result<T, ResumeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_cause() {
        let e = EmailError::Status { status: 400, body: "bad template".into() };
        assert_eq!(e.to_string(), "email service answered 400: bad template");
        assert!(EmailError::NotConfigured("EMAILJS_SERVICE_ID")
            .to_string()
            .contains("EMAILJS_SERVICE_ID"));
        assert_eq!(ResumeError::Encode("x".into()).to_string(), "document encoding failed: x");
    }
}
