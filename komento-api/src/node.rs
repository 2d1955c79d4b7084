use chrono::Utc;

use crate::Time;

#[derive(
    Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct NodeId(pub String);

impl NodeId {
    /// 32 bits of entropy rendered as lowercase hex. Unique enough for ids
    /// that only ever live inside one browser's storage.
    pub fn generate() -> NodeId {
        let mut bytes = [0u8; 4];
        match getrandom::getrandom(&mut bytes) {
            Ok(()) => NodeId(format!("{:x}", u32::from_be_bytes(bytes))),
            Err(err) => {
                tracing::warn!(%err, "random source unavailable, falling back to timestamp ids");
                NodeId(Utc::now().timestamp_millis().to_string())
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Comment,
    Reply,
}

/// A top-level comment, as persisted under the `"comments"` key.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub text: String,
    pub created_at: Time,

    /// Ids of direct replies, most recent first. `None` rather than an empty
    /// list, so that the serialized record drops the field entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_ids: Option<Vec<NodeId>>,
}

impl Comment {
    pub fn now(text: String) -> Comment {
        Comment {
            id: NodeId::generate(),
            kind: NodeKind::Comment,
            text,
            created_at: Utc::now(),
            reply_ids: None,
        }
    }
}

/// A reply to a comment or to another reply, as persisted under the
/// `"replies"` key. Replies nest to arbitrary depth; which mapping the
/// parent lives in is decided by looking `parent_id` up, not by depth.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: NodeId,
    pub parent_id: NodeId,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub text: String,
    pub created_at: Time,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_ids: Option<Vec<NodeId>>,
}

impl Reply {
    pub fn now(parent_id: NodeId, text: String) -> Reply {
        Reply {
            id: NodeId::generate(),
            parent_id,
            kind: NodeKind::Reply,
            text,
            created_at: Utc::now(),
            reply_ids: None,
        }
    }
}

/// Prepends `id` to a `replyIds` slot, creating the list if absent.
pub fn prepend_reply(slot: &mut Option<Vec<NodeId>>, id: NodeId) {
    match slot {
        Some(ids) => ids.insert(0, id),
        None => *slot = Some(vec![id]),
    }
}

/// Removes `id` from a `replyIds` slot; a list emptied this way drops back
/// to `None` so the field never serializes as `[]`.
pub fn unlink_reply(slot: &mut Option<Vec<NodeId>>, id: &NodeId) {
    if let Some(ids) = slot {
        ids.retain(|i| i != id);
        if ids.is_empty() {
            *slot = None;
        }
    }
}
