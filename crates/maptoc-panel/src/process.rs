//! Message processing loop
//!
//! Drains a message and its synchronous follow-ups through the update
//! function, forwarding each produced action to [`handle_action`]. Because
//! everything here runs on the caller's single dispatch path, transitions
//! are serialized in dispatch order and never interleave mid-update.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::actions::{handle_action, CapabilityService};
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::PanelState;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut PanelState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    intent_tx: &mpsc::Sender<UpdateAction>,
    service: &Arc<S>,
) where
    S: CapabilityService + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), intent_tx.clone(), Arc::clone(service));
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
