use std::collections::HashMap;

use komento_api::{
    prepend_reply, unlink_reply, validate_text, Comment, Error, NodeId, Reply,
};

use crate::storage::{StorageBackend, COMMENTS_KEY, REPLIES_KEY};
use crate::util::sort_by_recency;

/// Client-side store for the whole comment tree: top-level comments and
/// nested replies live in two independent mappings, linked by id through
/// each node's `replyIds`. Every mutation mirrors both mappings to the
/// injected backend before returning.
pub struct CommentStore<B> {
    comments: HashMap<NodeId, Comment>,
    replies: HashMap<NodeId, Reply>,
    backend: B,
}

impl<B: StorageBackend> CommentStore<B> {
    /// Rehydrates from `backend`. A missing, corrupt or empty mapping leaves
    /// the in-memory default in place.
    pub fn load(backend: B) -> CommentStore<B> {
        let mut store = CommentStore {
            comments: HashMap::new(),
            replies: HashMap::new(),
            backend,
        };
        if let Some(comments) = store.backend.load::<HashMap<NodeId, Comment>>(COMMENTS_KEY) {
            if !comments.is_empty() {
                store.comments = comments;
            }
        }
        if let Some(replies) = store.backend.load::<HashMap<NodeId, Reply>>(REPLIES_KEY) {
            if !replies.is_empty() {
                store.replies = replies;
            }
        }
        store
    }

    pub fn add_comment(&mut self, text: &str) -> Result<Comment, Error> {
        let text = validate_text(text)?;
        let comment = Comment::now(text.to_string());
        self.comments.insert(comment.id.clone(), comment.clone());
        self.persist();
        Ok(comment)
    }

    /// Inserts a reply under `parent_id`, prepending its id to the parent's
    /// `replyIds`. Returns `Ok(None)` without touching any state when the
    /// parent has vanished from both mappings.
    pub fn add_reply(&mut self, parent_id: &NodeId, text: &str) -> Result<Option<Reply>, Error> {
        let text = validate_text(text)?;
        let reply = Reply::now(parent_id.clone(), text.to_string());
        if let Some(parent) = self.comments.get_mut(parent_id) {
            prepend_reply(&mut parent.reply_ids, reply.id.clone());
        } else if let Some(parent) = self.replies.get_mut(parent_id) {
            prepend_reply(&mut parent.reply_ids, reply.id.clone());
        } else {
            tracing::warn!(parent = %parent_id.0, "dropping reply to a parent that no longer exists");
            return Ok(None);
        }
        self.replies.insert(reply.id.clone(), reply.clone());
        self.persist();
        Ok(Some(reply))
    }

    /// Replaces the text of a comment or reply in place, preserving every
    /// other field including `replyIds`. Unknown ids are ignored.
    pub fn update_text(&mut self, id: &NodeId, text: &str) -> Result<(), Error> {
        let text = validate_text(text)?;
        if let Some(comment) = self.comments.get_mut(id) {
            comment.text = text.to_string();
        } else if let Some(reply) = self.replies.get_mut(id) {
            reply.text = text.to_string();
        } else {
            tracing::warn!(id = %id.0, "ignoring edit of a node that no longer exists");
            return Ok(());
        }
        self.persist();
        Ok(())
    }

    /// Cascading delete of `id` and every descendant reachable through
    /// `replyIds`. The traversal works on copies of both mappings, committed
    /// atomically once it completes; a non-existent id is a no-op.
    pub fn delete(&mut self, id: &NodeId) {
        if !self.comments.contains_key(id) && !self.replies.contains_key(id) {
            return;
        }
        let mut comments = self.comments.clone();
        let mut replies = self.replies.clone();
        delete_subtree(id, &mut comments, &mut replies);
        self.comments = comments;
        self.replies = replies;
        self.persist();
    }

    /// Resets both mappings to empty, without going through the cascade.
    pub fn delete_all(&mut self) {
        self.comments.clear();
        self.replies.clear();
        self.persist();
    }

    /// Top-level comments, newest first.
    pub fn comments_by_recency(&self) -> Vec<&Comment> {
        let mut list: Vec<&Comment> = self.comments.values().collect();
        sort_by_recency(&mut list);
        list
    }

    pub fn comment(&self, id: &NodeId) -> Option<&Comment> {
        self.comments.get(id)
    }

    pub fn reply(&self, id: &NodeId) -> Option<&Reply> {
        self.replies.get(id)
    }

    pub fn comments(&self) -> &HashMap<NodeId, Comment> {
        &self.comments
    }

    pub fn replies(&self) -> &HashMap<NodeId, Reply> {
        &self.replies
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn persist(&mut self) {
        if let Err(err) = self.backend.save(COMMENTS_KEY, &self.comments) {
            tracing::warn!(%err, "failed persisting comments, in-memory state stays authoritative");
        }
        if let Err(err) = self.backend.save(REPLIES_KEY, &self.replies) {
            tracing::warn!(%err, "failed persisting replies, in-memory state stays authoritative");
        }
    }
}

/// Depth-first removal: children are fully detached before the node itself
/// is finalized, and each node is finalized exactly once.
fn delete_subtree(
    id: &NodeId,
    comments: &mut HashMap<NodeId, Comment>,
    replies: &mut HashMap<NodeId, Reply>,
) {
    let child_ids = match (comments.get(id), replies.get(id)) {
        (Some(comment), _) => comment.reply_ids.clone().unwrap_or_default(),
        (None, Some(reply)) => reply.reply_ids.clone().unwrap_or_default(),
        (None, None) => return,
    };
    for child_id in &child_ids {
        // children are always replies, never top-level comments
        if replies.contains_key(child_id) {
            delete_subtree(child_id, comments, replies);
        } else {
            tracing::warn!(id = %child_id.0, "skipping dangling reply id in cascade delete");
        }
    }
    finalize_removal(id, comments, replies);
}

fn finalize_removal(
    id: &NodeId,
    comments: &mut HashMap<NodeId, Comment>,
    replies: &mut HashMap<NodeId, Reply>,
) {
    if comments.remove(id).is_some() {
        // top-level comments have no parent link to fix up
        return;
    }
    if let Some(reply) = replies.remove(id) {
        if let Some(parent) = replies.get_mut(&reply.parent_id) {
            unlink_reply(&mut parent.reply_ids, id);
        } else if let Some(parent) = comments.get_mut(&reply.parent_id) {
            unlink_reply(&mut parent.reply_ids, id);
        } else {
            tracing::warn!(parent = %reply.parent_id.0, "deleted reply's parent no longer exists");
        }
    }
}

#[cfg(test)]
mod tests {
    use komento_api::NodeKind;

    use super::*;
    use crate::storage::MemoryBackend;

    fn store() -> CommentStore<MemoryBackend> {
        CommentStore::load(MemoryBackend::default())
    }

    #[test]
    fn add_comment_trims_and_generates_a_fresh_id() {
        let mut store = store();
        let first = store.add_comment("first!").unwrap();
        let second = store.add_comment("  spaced out  ").unwrap();

        assert_eq!(second.text, "spaced out");
        assert_eq!(second.kind, NodeKind::Comment);
        assert_ne!(first.id, second.id);
        assert_eq!(store.comments().len(), 2);
    }

    #[test]
    fn add_comment_rejects_whitespace_only_text() {
        let mut store = store();
        assert_eq!(store.add_comment("   "), Err(Error::EmptyText));
        assert!(store.is_empty());
    }

    #[test]
    fn replies_are_kept_most_recent_first() {
        let mut store = store();
        let comment = store.add_comment("parent").unwrap();
        let r1 = store.add_reply(&comment.id, "one").unwrap().unwrap();
        let r2 = store.add_reply(&comment.id, "two").unwrap().unwrap();
        let r3 = store.add_reply(&comment.id, "three").unwrap().unwrap();

        let parent = store.comment(&comment.id).unwrap();
        assert_eq!(
            parent.reply_ids,
            Some(vec![r3.id.clone(), r2.id.clone(), r1.id.clone()]),
        );
        assert_eq!(store.replies().len(), 3);
    }

    #[test]
    fn replies_nest_under_other_replies() {
        let mut store = store();
        let comment = store.add_comment("parent").unwrap();
        let reply = store.add_reply(&comment.id, "child").unwrap().unwrap();
        let nested = store.add_reply(&reply.id, "grandchild").unwrap().unwrap();

        assert_eq!(nested.parent_id, reply.id);
        assert_eq!(nested.kind, NodeKind::Reply);
        assert_eq!(
            store.reply(&reply.id).unwrap().reply_ids,
            Some(vec![nested.id.clone()]),
        );
        // nesting depth does not move nodes out of the replies mapping
        assert!(store.comment(&nested.id).is_none());
        assert!(store.reply(&nested.id).is_some());
    }

    #[test]
    fn reply_to_a_vanished_parent_is_a_noop() {
        let mut store = store();
        store.add_comment("unrelated").unwrap();
        let result = store.add_reply(&NodeId(String::from("gone")), "hello");

        assert_eq!(result, Ok(None));
        assert_eq!(store.comments().len(), 1);
        assert!(store.replies().is_empty());
    }

    #[test]
    fn reply_with_empty_text_mutates_nothing() {
        let mut store = store();
        let comment = store.add_comment("parent").unwrap();
        assert_eq!(store.add_reply(&comment.id, " \n"), Err(Error::EmptyText));
        assert_eq!(store.comment(&comment.id).unwrap().reply_ids, None);
        assert!(store.replies().is_empty());
    }

    #[test]
    fn update_text_edits_in_place_and_preserves_children() {
        let mut store = store();
        let comment = store.add_comment("tpyo").unwrap();
        let reply = store.add_reply(&comment.id, "first draft").unwrap().unwrap();

        store.update_text(&comment.id, "  typo  ").unwrap();
        store.update_text(&reply.id, "second draft").unwrap();

        let updated = store.comment(&comment.id).unwrap();
        assert_eq!(updated.text, "typo");
        assert_eq!(updated.created_at, comment.created_at);
        assert_eq!(updated.reply_ids, Some(vec![reply.id.clone()]));
        assert_eq!(store.reply(&reply.id).unwrap().text, "second draft");
    }

    #[test]
    fn update_text_rejects_empty_and_ignores_unknown_ids() {
        let mut store = store();
        let comment = store.add_comment("keep me").unwrap();

        assert_eq!(store.update_text(&comment.id, "  "), Err(Error::EmptyText));
        assert_eq!(store.comment(&comment.id).unwrap().text, "keep me");

        assert_eq!(store.update_text(&NodeId(String::from("gone")), "hi"), Ok(()));
        assert_eq!(store.comments().len(), 1);
    }

    #[test]
    fn cascade_delete_removes_every_descendant() {
        let mut store = store();
        let keep = store.add_comment("survivor").unwrap();
        let comment = store.add_comment("doomed").unwrap();
        let r1 = store.add_reply(&comment.id, "child").unwrap().unwrap();
        let r2 = store.add_reply(&r1.id, "grandchild").unwrap().unwrap();
        store.add_reply(&r2.id, "great-grandchild").unwrap().unwrap();
        store.add_reply(&r1.id, "second grandchild").unwrap().unwrap();

        store.delete(&comment.id);

        assert!(store.comment(&comment.id).is_none());
        assert!(store.replies().is_empty());
        assert_eq!(store.comments().len(), 1);
        assert!(store.comment(&keep.id).is_some());
    }

    #[test]
    fn deleting_a_subtree_unlinks_it_from_its_parent() {
        let mut store = store();
        let comment = store.add_comment("parent").unwrap();
        let first = store.add_reply(&comment.id, "one").unwrap().unwrap();
        let second = store.add_reply(&comment.id, "two").unwrap().unwrap();
        store.add_reply(&first.id, "nested under one").unwrap().unwrap();

        store.delete(&first.id);

        assert_eq!(
            store.comment(&comment.id).unwrap().reply_ids,
            Some(vec![second.id.clone()]),
        );
        assert_eq!(store.replies().len(), 1);
    }

    #[test]
    fn deleting_the_last_reply_drops_the_reply_ids_field() {
        let mut store = store();
        let comment = store.add_comment("parent").unwrap();
        let reply = store.add_reply(&comment.id, "only child").unwrap().unwrap();

        store.delete(&reply.id);

        assert_eq!(store.comment(&comment.id).unwrap().reply_ids, None);
        assert!(store.replies().is_empty());
    }

    #[test]
    fn deleting_an_unknown_id_changes_nothing() {
        let mut store = store();
        let comment = store.add_comment("parent").unwrap();
        store.add_reply(&comment.id, "child").unwrap().unwrap();

        store.delete(&NodeId(String::from("gone")));

        assert_eq!(store.comments().len(), 1);
        assert_eq!(store.replies().len(), 1);
    }

    #[test]
    fn delete_all_empties_both_mappings() {
        let mut store = store();
        let comment = store.add_comment("parent").unwrap();
        let reply = store.add_reply(&comment.id, "child").unwrap().unwrap();
        store.add_reply(&reply.id, "grandchild").unwrap().unwrap();
        store.add_comment("another").unwrap();

        store.delete_all();

        assert!(store.comments().is_empty());
        assert!(store.replies().is_empty());
    }

    #[test]
    fn persist_then_reload_round_trips_the_whole_tree() {
        let mut store = store();
        let c1 = store.add_comment("first thread").unwrap();
        let c2 = store.add_comment("second thread").unwrap();
        let r1 = store.add_reply(&c1.id, "on first").unwrap().unwrap();
        store.add_reply(&r1.id, "nested on first").unwrap().unwrap();
        store.add_reply(&c2.id, "on second").unwrap().unwrap();

        let reloaded = CommentStore::load(store.backend().clone());

        assert_eq!(reloaded.comments(), store.comments());
        assert_eq!(reloaded.replies(), store.replies());
    }

    #[test]
    fn loading_corrupt_state_starts_empty() {
        let mut backend = MemoryBackend::default();
        backend.save(COMMENTS_KEY, &"not a mapping").unwrap();
        backend.save(REPLIES_KEY, &[1, 2, 3]).unwrap();

        let store = CommentStore::load(backend);
        assert!(store.comments().is_empty());
        assert!(store.replies().is_empty());
    }

    #[test]
    fn loading_empty_mappings_keeps_in_memory_defaults() {
        let mut store = store();
        store.add_comment("flushed").unwrap();
        store.delete_all();

        // both keys now hold `{}`, which must not count as persisted state
        let reloaded = CommentStore::load(store.backend().clone());
        assert!(reloaded.is_empty());
        assert!(reloaded.replies().is_empty());
    }
}
