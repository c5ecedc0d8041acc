//! Handler module - TEA update function and message handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `settings_handlers`: Settings session and tab handlers
//! - `lifecycle`: Target-identity synchronization

pub(crate) mod lifecycle;
pub(crate) mod settings_handlers;
pub(crate) mod update;


use maptoc_core::{NodeId, NodeKind, SettingsPatch};

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Intents the embedding event loop should dispatch after update.
///
/// Every variant is fire-and-forget from the panel core's perspective:
/// external collaborators act on them and feed any outcome back as an
/// ordinary [`Message`].
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Ask the control-state collaborator to close the panel; it answers
    /// with `Message::TargetChanged(None)`
    ClosePanel,

    /// Commit a durable change to the layer/group store
    CommitNodeChange {
        node: NodeId,
        kind: NodeKind,
        changes: SettingsPatch,
    },

    /// Fetch capability metadata for a layer. Tagged with the node id so
    /// late results for a superseded target can be discarded.
    FetchCapabilities {
        node: NodeId,
        /// Service endpoint from the layer's configuration, if any
        endpoint: Option<String>,
    },

    /// Tell the style-editor collaborator its surface visibility changed
    StyleEditorToggled { open: bool },
}

/// Result of processing one message
#[derive(Debug, Clone, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
