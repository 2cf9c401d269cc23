//! Topic names and the topic-to-handler routing table.

use crate::events::{ProductAssociationOp, WarningSentenceOp};

/// Fixed topic names this process subscribes to.
pub mod topics {
    pub const SYNC_ADD_WARNING_SENTENCE: &str = "sync-add-warning-sentence";
    pub const SYNC_UPDATE_WARNING_SENTENCE: &str = "sync-update-warning-sentence";
    pub const SYNC_DELETE_WARNING_SENTENCE: &str = "sync-delete-warning-sentence";
    pub const SYNC_ADD_PRODUCT: &str = "sync-add-product";
    pub const SYNC_UPDATE_PRODUCT: &str = "sync-update-product";
    pub const SYNC_DELETE_PRODUCT: &str = "sync-delete-product";
    pub const SYNC_ADD_USER: &str = "sync-add-user";

    /// The full subscription list. Note that `sync-update-product` is
    /// subscribed but has no routed handler; messages on it fall through
    /// with no action.
    pub const SUBSCRIBED: [&str; 7] = [
        SYNC_ADD_WARNING_SENTENCE,
        SYNC_UPDATE_WARNING_SENTENCE,
        SYNC_DELETE_WARNING_SENTENCE,
        SYNC_ADD_PRODUCT,
        SYNC_UPDATE_PRODUCT,
        SYNC_DELETE_PRODUCT,
        SYNC_ADD_USER,
    ];
}

/// Handling path for a recognized topic: which payload shape to decode and
/// which dispatcher operation to invoke, with the semantic operation made
/// explicit rather than implied by the topic string downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    WarningSentence(WarningSentenceOp),
    ProductAssociation(ProductAssociationOp),
    User,
}

/// Pure topic-name to handling-path mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopicRouter;

impl TopicRouter {
    /// Returns the handling path for `topic`, or `None` for any topic
    /// outside the routed set. Unrecognized topics are never an error.
    pub fn route(&self, topic: &str) -> Option<Route> {
        match topic {
            topics::SYNC_ADD_WARNING_SENTENCE => {
                Some(Route::WarningSentence(WarningSentenceOp::Add))
            }
            topics::SYNC_UPDATE_WARNING_SENTENCE => {
                Some(Route::WarningSentence(WarningSentenceOp::Update))
            }
            topics::SYNC_DELETE_WARNING_SENTENCE => {
                Some(Route::WarningSentence(WarningSentenceOp::Delete))
            }
            topics::SYNC_ADD_PRODUCT => {
                Some(Route::ProductAssociation(ProductAssociationOp::Attach))
            }
            topics::SYNC_DELETE_PRODUCT => {
                Some(Route::ProductAssociation(ProductAssociationOp::Detach))
            }
            topics::SYNC_ADD_USER => Some(Route::User),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_every_handled_topic_exactly() {
        let router = TopicRouter;
        assert_eq!(
            router.route("sync-add-warning-sentence"),
            Some(Route::WarningSentence(WarningSentenceOp::Add))
        );
        assert_eq!(
            router.route("sync-update-warning-sentence"),
            Some(Route::WarningSentence(WarningSentenceOp::Update))
        );
        assert_eq!(
            router.route("sync-delete-warning-sentence"),
            Some(Route::WarningSentence(WarningSentenceOp::Delete))
        );
        assert_eq!(
            router.route("sync-add-product"),
            Some(Route::ProductAssociation(ProductAssociationOp::Attach))
        );
        assert_eq!(
            router.route("sync-delete-product"),
            Some(Route::ProductAssociation(ProductAssociationOp::Detach))
        );
        assert_eq!(router.route("sync-add-user"), Some(Route::User));
    }

    #[test]
    fn update_product_is_subscribed_but_not_routed() {
        assert!(topics::SUBSCRIBED.contains(&topics::SYNC_UPDATE_PRODUCT));
        assert_eq!(TopicRouter.route(topics::SYNC_UPDATE_PRODUCT), None);
    }

    #[test]
    fn unknown_topics_are_not_routed() {
        assert_eq!(TopicRouter.route("sync-add-something-else"), None);
        assert_eq!(TopicRouter.route(""), None);
    }

    #[test]
    fn routed_set_is_exactly_the_subscribed_set_minus_update_product() {
        for topic in topics::SUBSCRIBED {
            let routed = TopicRouter.route(topic).is_some();
            assert_eq!(routed, topic != topics::SYNC_UPDATE_PRODUCT, "{topic}");
        }
    }
}
