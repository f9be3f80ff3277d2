//! rk_comms - Mesh messaging and SOS state for Rakshak
//!
//! This crate provides:
//! - The conversation view model backing the Communicate screen
//! - The SOS broadcast state controller
//! - The cosmetic mesh connectivity display
//!
//! There is no transport behind any of this. Messages are a hardcoded demo
//! log, sending clears the compose draft without delivering anything, and
//! the mesh counter is a fixed number.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub mod sos;

pub use sos::{SosController, SosState, SOS_CONFIRM_BODY, SOS_CONFIRM_TITLE};

/// Maximum compose draft length, in characters
pub const DRAFT_MAX_CHARS: usize = 280;

/// Message categories carried by the community feed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Status,
    Emergency,
    Info,
    Response,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Status => "status",
            MessageKind::Emergency => "emergency",
            MessageKind::Info => "info",
            MessageKind::Response => "response",
        }
    }

    pub fn is_emergency(&self) -> bool {
        matches!(self, MessageKind::Emergency)
    }
}

impl std::str::FromStr for MessageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "status" => Ok(MessageKind::Status),
            "emergency" => Ok(MessageKind::Emergency),
            "info" => Ok(MessageKind::Info),
            "response" => Ok(MessageKind::Response),
            other => Err(format!("unknown message kind: {other}")),
        }
    }
}

/// A community update message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: String,
    pub content: String,
    pub sent_at: DateTime<Utc>,
    pub kind: MessageKind,
    pub is_own: bool,
    #[serde(default)]
    pub is_verified: bool,
}

/// Ordered message log plus the compose draft
///
/// Messages render strictly in insertion order; there are no delivery or
/// acknowledgment semantics.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    messages: Vec<Message>,
    draft: String,
}

/// Compose presets for the quick-action row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    ImSafe,
    NeedHelp,
    HazardReport,
}

impl QuickAction {
    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::ImSafe => "I'm Safe",
            QuickAction::NeedHelp => "Need Help",
            QuickAction::HazardReport => "Hazard Report",
        }
    }

    /// Draft text the action fills in
    pub fn preset(&self) -> &'static str {
        match self {
            QuickAction::ImSafe => "I'm safe and accounted for",
            QuickAction::NeedHelp => "Need help at my location",
            QuickAction::HazardReport => "Reporting a hazard near my location",
        }
    }
}

impl ConversationLog {
    /// Empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// The hardcoded demo log
    pub fn demo() -> Self {
        let now = Utc::now();
        Self {
            messages: vec![
                Message {
                    id: "1".to_string(),
                    sender: "John D.".to_string(),
                    content: "Everyone safe at the community center".to_string(),
                    sent_at: now - Duration::minutes(2),
                    kind: MessageKind::Status,
                    is_own: false,
                    is_verified: false,
                },
                Message {
                    id: "2".to_string(),
                    sender: "You".to_string(),
                    content: "Roads blocked on Main St, taking alternate route".to_string(),
                    sent_at: now - Duration::minutes(5),
                    kind: MessageKind::Info,
                    is_own: true,
                    is_verified: false,
                },
                Message {
                    id: "3".to_string(),
                    sender: "Maria S.".to_string(),
                    content: "Need medical assistance at Pine & 5th".to_string(),
                    sent_at: now - Duration::minutes(8),
                    kind: MessageKind::Emergency,
                    is_own: false,
                    is_verified: false,
                },
                Message {
                    id: "4".to_string(),
                    sender: "Rescuer Alpha".to_string(),
                    content: "Medical team dispatched to Pine & 5th".to_string(),
                    sent_at: now - Duration::minutes(6),
                    kind: MessageKind::Response,
                    is_own: false,
                    is_verified: true,
                },
            ],
            draft: String::new(),
        }
    }

    /// Messages in render order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Current compose draft
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Append a character to the draft, capped at [`DRAFT_MAX_CHARS`]
    pub fn push_char(&mut self, c: char) {
        if self.draft.chars().count() < DRAFT_MAX_CHARS {
            self.draft.push(c);
        }
    }

    /// Remove the last character of the draft
    pub fn pop_char(&mut self) {
        self.draft.pop();
    }

    /// Replace the draft, truncating to [`DRAFT_MAX_CHARS`]
    pub fn set_draft(&mut self, text: &str) {
        self.draft = text.chars().take(DRAFT_MAX_CHARS).collect();
    }

    /// Whether the draft has sendable content
    pub fn can_send(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// "Send" the draft
    ///
    /// Clears the draft and reports whether anything was there to send.
    /// Mesh transport would enqueue the payload here.
    pub fn send(&mut self) -> bool {
        if !self.can_send() {
            return false;
        }
        tracing::debug!(chars = self.draft.chars().count(), "draft discarded by send stub");
        self.draft.clear();
        true
    }
}

/// Cosmetic mesh connectivity display
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MeshStatus {
    /// Nearby connection count
    pub connections: u32,
    /// Whether the wide-area network is reachable
    pub online: bool,
}

impl MeshStatus {
    /// Demo state: offline with a few mesh peers, matching the demo log
    pub fn demo() -> Self {
        Self {
            connections: 3,
            online: false,
        }
    }

    /// Header label next to the message list
    pub fn status_label(&self) -> &'static str {
        if self.online {
            "Online"
        } else {
            "Offline - Mesh Only"
        }
    }

    pub fn summary(&self) -> String {
        format!("Mesh Network: {} connections", self.connections)
    }

    pub fn range_hint(&self) -> &'static str {
        "Range: ~200m"
    }

    pub fn relay_line(&self) -> String {
        format!("Messages relay through {} nearby devices", self.connections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_log_order() {
        let log = ConversationLog::demo();
        let ids: Vec<&str> = log.messages().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_order_ignores_ownership_and_kind() {
        // Mixed is_own and kinds must not reorder anything
        let log = ConversationLog::demo();
        assert!(log.messages()[1].is_own);
        assert!(!log.messages()[2].is_own);
        assert_eq!(log.messages()[2].kind, MessageKind::Emergency);
        assert_eq!(log.messages()[3].kind, MessageKind::Response);
    }

    #[test]
    fn test_verified_flag() {
        let log = ConversationLog::demo();
        assert!(log.messages()[3].is_verified);
        assert!(!log.messages()[0].is_verified);
    }

    #[test]
    fn test_message_kind_roundtrip() {
        for kind in [
            MessageKind::Status,
            MessageKind::Emergency,
            MessageKind::Info,
            MessageKind::Response,
        ] {
            let parsed: MessageKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        assert!("broadcast".parse::<MessageKind>().is_err());
    }

    #[test]
    fn test_is_verified_defaults_false_in_json() {
        let raw = r#"{
            "id": "9",
            "sender": "Pat",
            "content": "ok",
            "sent_at": "2026-08-07T10:00:00Z",
            "kind": "status",
            "is_own": false
        }"#;
        let msg: Message = serde_json::from_str(raw).unwrap();
        assert!(!msg.is_verified);
    }

    #[test]
    fn test_draft_cap() {
        let mut log = ConversationLog::new();
        for _ in 0..(DRAFT_MAX_CHARS + 40) {
            log.push_char('x');
        }
        assert_eq!(log.draft().chars().count(), DRAFT_MAX_CHARS);

        log.set_draft(&"y".repeat(DRAFT_MAX_CHARS + 40));
        assert_eq!(log.draft().chars().count(), DRAFT_MAX_CHARS);
    }

    #[test]
    fn test_send_clears_draft_without_appending() {
        let mut log = ConversationLog::demo();
        let before = log.messages().len();

        log.set_draft("Water station open at the library");
        assert!(log.can_send());
        assert!(log.send());

        assert!(log.draft().is_empty());
        assert_eq!(log.messages().len(), before);
    }

    #[test]
    fn test_send_rejects_blank_draft() {
        let mut log = ConversationLog::new();
        assert!(!log.send());
        log.set_draft("   ");
        assert!(!log.can_send());
        assert!(!log.send());
    }

    #[test]
    fn test_pop_char() {
        let mut log = ConversationLog::new();
        log.set_draft("ab");
        log.pop_char();
        assert_eq!(log.draft(), "a");
        log.pop_char();
        log.pop_char();
        assert_eq!(log.draft(), "");
    }

    #[test]
    fn test_quick_action_fills_draft() {
        let mut log = ConversationLog::new();
        log.set_draft(QuickAction::ImSafe.preset());
        assert!(log.can_send());
        assert_eq!(log.draft(), "I'm safe and accounted for");
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn draft_never_exceeds_cap(ops in prop::collection::vec(prop::option::of(any::<char>()), 0..600)) {
                let mut log = ConversationLog::new();
                for op in ops {
                    match op {
                        Some(c) => log.push_char(c),
                        None => log.pop_char(),
                    }
                    prop_assert!(log.draft().chars().count() <= DRAFT_MAX_CHARS);
                }
            }
        }
    }

    #[test]
    fn test_mesh_status_labels() {
        let mesh = MeshStatus::demo();
        assert_eq!(mesh.connections, 3);
        assert_eq!(mesh.status_label(), "Offline - Mesh Only");
        assert_eq!(mesh.summary(), "Mesh Network: 3 connections");
        assert_eq!(mesh.relay_line(), "Messages relay through 3 nearby devices");

        let online = MeshStatus {
            connections: 5,
            online: true,
        };
        assert_eq!(online.status_label(), "Online");
    }
}
