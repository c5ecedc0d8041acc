//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Capability fetches are executed here on the tokio runtime; every other
//! intent is forwarded untouched to the embedding collaborators through
//! the intent channel.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::warn;
use url::Url;

use maptoc_core::prelude::*;
use maptoc_core::{NodeId, SettingsPatch};

use crate::handler::UpdateAction;
use crate::message::Message;

/// External collaborator that answers capability fetches for a layer.
///
/// Implementations own the transport (HTTP client, local cache, test
/// stub). The returned patch is applied to the session with
/// `affects_original = true`.
#[trait_variant::make(CapabilityService: Send)]
pub trait LocalCapabilityService {
    async fn fetch_capabilities(&self, node: &NodeId, endpoint: Url) -> Result<SettingsPatch>;
}

/// Execute an action.
///
/// `FetchCapabilities` spawns a background task whose result returns as a
/// `Message::CapabilitiesReceived`, still tagged with the node id it was
/// issued for. All other actions are external intents and go out on
/// `intent_tx`, fire-and-forget.
pub fn handle_action<S>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    intent_tx: mpsc::Sender<UpdateAction>,
    service: Arc<S>,
) where
    S: CapabilityService + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchCapabilities { node, endpoint } => {
            let Some(raw) = endpoint else {
                warn!(%node, "Capability fetch skipped: layer has no service endpoint");
                let error = Error::missing_endpoint(node.clone()).to_string();
                let _ = msg_tx.try_send(Message::CapabilitiesReceived {
                    node,
                    result: Err(error),
                });
                return;
            };
            let url = match Url::parse(&raw) {
                Ok(url) => url,
                Err(e) => {
                    warn!(%node, endpoint = %raw, error = %e, "Invalid service endpoint");
                    let error = Error::invalid_endpoint(raw).to_string();
                    let _ = msg_tx.try_send(Message::CapabilitiesReceived {
                        node,
                        result: Err(error),
                    });
                    return;
                }
            };
            tokio::spawn(async move {
                let result = service
                    .fetch_capabilities(&node, url)
                    .await
                    .map_err(|e| e.to_string());
                if msg_tx
                    .send(Message::CapabilitiesReceived { node, result })
                    .await
                    .is_err()
                {
                    warn!("Message channel closed before capability result delivery");
                }
            });
        }

        other => {
            if intent_tx.try_send(other).is_err() {
                warn!("Intent channel full or closed, external intent dropped");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maptoc_core::NodeKind;

    struct StubService;

    impl CapabilityService for StubService {
        async fn fetch_capabilities(&self, _node: &NodeId, _endpoint: Url) -> Result<SettingsPatch> {
            let mut patch = SettingsPatch::new();
            patch.insert("availableFormats".to_string(), "image/png".into());
            Ok(patch)
        }
    }

    #[tokio::test]
    async fn test_fetch_capabilities_sends_result_message() {
        let (msg_tx, mut msg_rx) = mpsc::channel(8);
        let (intent_tx, _intent_rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::FetchCapabilities {
                node: "L1".to_string(),
                endpoint: Some("https://maps.example.com/wms".to_string()),
            },
            msg_tx,
            intent_tx,
            Arc::new(StubService),
        );

        match msg_rx.recv().await.unwrap() {
            Message::CapabilitiesReceived { node, result } => {
                assert_eq!(node, "L1");
                let patch = result.unwrap();
                assert_eq!(patch.get("availableFormats").unwrap(), "image/png");
            }
            other => panic!("expected CapabilitiesReceived, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_without_endpoint_reports_error() {
        let (msg_tx, mut msg_rx) = mpsc::channel(8);
        let (intent_tx, _intent_rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::FetchCapabilities {
                node: "L1".to_string(),
                endpoint: None,
            },
            msg_tx,
            intent_tx,
            Arc::new(StubService),
        );

        match msg_rx.recv().await.unwrap() {
            Message::CapabilitiesReceived { node, result } => {
                assert_eq!(node, "L1");
                assert!(result.unwrap_err().contains("no service endpoint"));
            }
            other => panic!("expected CapabilitiesReceived, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_with_invalid_endpoint_reports_error() {
        let (msg_tx, mut msg_rx) = mpsc::channel(8);
        let (intent_tx, _intent_rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::FetchCapabilities {
                node: "L1".to_string(),
                endpoint: Some("not a url".to_string()),
            },
            msg_tx,
            intent_tx,
            Arc::new(StubService),
        );

        match msg_rx.recv().await.unwrap() {
            Message::CapabilitiesReceived { result, .. } => {
                assert!(result.unwrap_err().contains("Invalid service endpoint"));
            }
            other => panic!("expected CapabilitiesReceived, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_external_intents_forwarded() {
        let (msg_tx, _msg_rx) = mpsc::channel(8);
        let (intent_tx, mut intent_rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::CommitNodeChange {
                node: "G1".to_string(),
                kind: NodeKind::Groups,
                changes: SettingsPatch::new(),
            },
            msg_tx,
            intent_tx,
            Arc::new(StubService),
        );

        match intent_rx.recv().await.unwrap() {
            UpdateAction::CommitNodeChange { node, kind, .. } => {
                assert_eq!(node, "G1");
                assert_eq!(kind, NodeKind::Groups);
            }
            other => panic!("expected CommitNodeChange, got {other:?}"),
        }
    }
}
