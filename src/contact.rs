//! Contact forms and the outbound mail action.
//!
//! The page has two forms: the sticky quick-consult bar (one free-text field
//! plus a privacy consent toggle) and the franchise inquiry form (name, phone,
//! preferred region). Neither talks to a server. A valid submission becomes an
//! [`OutboundMessage`] handed to a [`ContactAction`], which in a browser opens
//! a pre-filled mail composer via a `mailto:` URL. Delivery is never confirmed.
//!
//! A submission missing required input is not an error: it comes back as
//! [`Submission::Blocked`] with the prompt to show, the action is not invoked,
//! and the form keeps its contents so the visitor can fix and retry.

use crate::config::ContactConfig;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::fmt;

/// Characters escaped the way `encodeURIComponent` escapes them.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A composed message, ready for the host's mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl OutboundMessage {
    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            utf8_percent_encode(&self.subject, URI_COMPONENT),
            utf8_percent_encode(&self.body, URI_COMPONENT),
        )
    }
}

/// Hand-off point to the host environment.
pub trait ContactAction {
    fn send(&mut self, message: &OutboundMessage);
}

/// Collects messages instead of opening a mail client.
#[derive(Debug, Default)]
pub struct Outbox {
    pub sent: Vec<OutboundMessage>,
}

impl ContactAction for Outbox {
    fn send(&mut self, message: &OutboundMessage) {
        tracing::info!(to = %message.to, subject = %message.subject, "contact message composed");
        self.sent.push(message.clone());
    }
}

/// Required input that was missing from a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyRequiredInput {
    Consent,
    Message,
    Name,
    Phone,
}

impl EmptyRequiredInput {
    /// The prompt shown to the visitor.
    pub fn prompt(self) -> &'static str {
        match self {
            EmptyRequiredInput::Consent => "개인정보 취급방침에 동의해주세요.",
            EmptyRequiredInput::Message => "정보를 입력해주세요.",
            EmptyRequiredInput::Name => "성함을 입력해주세요.",
            EmptyRequiredInput::Phone => "연락처를 입력해주세요.",
        }
    }
}

impl fmt::Display for EmptyRequiredInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prompt())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Sent(OutboundMessage),
    Blocked(EmptyRequiredInput),
}

// =============================================================================
// Quick consult
// =============================================================================

/// The sticky consultation bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickConsult {
    /// Free text, usually "name / region / phone".
    pub message: String,
    pub agree_privacy: bool,
}

impl QuickConsult {
    /// Gate on consent and a non-blank message, then send and clear the message.
    ///
    /// Consent is checked first. The consent toggle survives a successful send.
    pub fn submit(&mut self, config: &ContactConfig, action: &mut impl ContactAction) -> Submission {
        if !self.agree_privacy {
            return Submission::Blocked(EmptyRequiredInput::Consent);
        }
        if self.message.trim().is_empty() {
            return Submission::Blocked(EmptyRequiredInput::Message);
        }
        let message = OutboundMessage {
            to: config.email.clone(),
            subject: config.quick_subject.clone(),
            body: format!("간편 상담 신청\n\n내용: {}\n\n연락 부탁드립니다.", self.message),
        };
        action.send(&message);
        self.message.clear();
        Submission::Sent(message)
    }
}

// =============================================================================
// Franchise inquiry
// =============================================================================

/// The full inquiry form in the franchise section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FranchiseInquiry {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Preferred region, optional.
    pub location: String,
}

impl FranchiseInquiry {
    /// Require name and phone, then send and reset every field.
    pub fn submit(&mut self, config: &ContactConfig, action: &mut impl ContactAction) -> Submission {
        if self.name.trim().is_empty() {
            return Submission::Blocked(EmptyRequiredInput::Name);
        }
        if self.phone.trim().is_empty() {
            return Submission::Blocked(EmptyRequiredInput::Phone);
        }
        let message = OutboundMessage {
            to: config.email.clone(),
            subject: config.inquiry_subject.clone(),
            body: format!(
                "이름: {}\n연락처: {}\n희망 지역: {}\n\n{}",
                self.name, self.phone, self.location, config.inquiry_closing
            ),
        };
        action.send(&message);
        *self = FranchiseInquiry::default();
        Submission::Sent(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ContactConfig {
        ContactConfig {
            email: "franchise@example.com".to_string(),
            ..ContactConfig::default()
        }
    }

    // =========================================================================
    // Quick consult gating
    // =========================================================================

    #[test]
    fn quick_consult_without_consent_never_sends() {
        let mut outbox = Outbox::default();
        for message in ["", "   ", "홍길동 / 서울 / 010-1234-5678"] {
            let mut form = QuickConsult {
                message: message.to_string(),
                agree_privacy: false,
            };
            let result = form.submit(&config(), &mut outbox);
            assert_eq!(result, Submission::Blocked(EmptyRequiredInput::Consent));
            assert_eq!(form.message, message);
        }
        assert!(outbox.sent.is_empty());
    }

    #[test]
    fn quick_consult_blank_message_never_sends() {
        let mut outbox = Outbox::default();
        let mut form = QuickConsult {
            message: " \n\t ".to_string(),
            agree_privacy: true,
        };
        let result = form.submit(&config(), &mut outbox);
        assert_eq!(result, Submission::Blocked(EmptyRequiredInput::Message));
        assert_eq!(form.message, " \n\t ");
        assert!(outbox.sent.is_empty());
    }

    #[test]
    fn quick_consult_sends_and_clears_message() {
        let mut outbox = Outbox::default();
        let mut form = QuickConsult {
            message: "홍길동 / 서울".to_string(),
            agree_privacy: true,
        };
        let result = form.submit(&config(), &mut outbox);
        assert!(matches!(result, Submission::Sent(_)));
        assert_eq!(outbox.sent.len(), 1);
        assert_eq!(outbox.sent[0].to, "franchise@example.com");
        assert!(outbox.sent[0].body.contains("내용: 홍길동 / 서울"));
        assert!(form.message.is_empty());
        assert!(form.agree_privacy);
    }

    // =========================================================================
    // Franchise inquiry
    // =========================================================================

    #[test]
    fn inquiry_requires_name_then_phone() {
        let mut outbox = Outbox::default();
        let mut form = FranchiseInquiry {
            phone: "010-0000-0000".to_string(),
            ..Default::default()
        };
        assert_eq!(
            form.submit(&config(), &mut outbox),
            Submission::Blocked(EmptyRequiredInput::Name)
        );
        form.name = "김점주".to_string();
        form.phone.clear();
        assert_eq!(
            form.submit(&config(), &mut outbox),
            Submission::Blocked(EmptyRequiredInput::Phone)
        );
        assert!(outbox.sent.is_empty());
        assert_eq!(form.name, "김점주");
    }

    #[test]
    fn inquiry_body_lists_fields_and_form_resets() {
        let mut outbox = Outbox::default();
        let mut form = FranchiseInquiry {
            name: "김점주".to_string(),
            phone: "010-1111-2222".to_string(),
            email: String::new(),
            location: "서울 강남구".to_string(),
        };
        let Submission::Sent(message) = form.submit(&config(), &mut outbox) else {
            panic!("inquiry should be sent");
        };
        assert_eq!(message.subject, ContactConfig::default().inquiry_subject);
        assert!(message.body.starts_with("이름: 김점주\n연락처: 010-1111-2222\n희망 지역: 서울 강남구"));
        assert_eq!(form, FranchiseInquiry::default());
    }

    // =========================================================================
    // mailto composition
    // =========================================================================

    #[test]
    fn mailto_url_encodes_like_uri_component() {
        let message = OutboundMessage {
            to: "a@example.com".to_string(),
            subject: "Hi there (1)".to_string(),
            body: "line1\nline2 & more".to_string(),
        };
        assert_eq!(
            message.mailto_url(),
            "mailto:a@example.com?subject=Hi%20there%20(1)&body=line1%0Aline2%20%26%20more"
        );
    }

    #[test]
    fn mailto_url_encodes_utf8() {
        let message = OutboundMessage {
            to: "a@example.com".to_string(),
            subject: "문의".to_string(),
            body: String::new(),
        };
        assert_eq!(
            message.mailto_url(),
            "mailto:a@example.com?subject=%EB%AC%B8%EC%9D%98&body="
        );
    }

    #[test]
    fn prompts_are_displayable() {
        assert_eq!(
            EmptyRequiredInput::Consent.to_string(),
            "개인정보 취급방침에 동의해주세요."
        );
    }
}
