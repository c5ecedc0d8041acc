//! maptoc-panel - Settings-session state and routing for the maptoc panel
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! layer/group settings panel: a [`PanelState`] model, a closed [`Message`]
//! set, a single [`handler::update`] reducer that routes every message to a
//! pure state transition or an [`UpdateAction`] intent, and the dispatch
//! plumbing that executes capability fetches in the background.

pub mod actions;
pub mod config;
pub mod handler;
pub mod message;
pub mod process;
pub mod resolver;
pub mod session;
pub mod state;
pub mod tabs;

// Re-export primary types
pub use actions::CapabilityService;
pub use config::PanelConfig;
pub use handler::{update, UpdateAction, UpdateResult};
pub use message::Message;
pub use process::process_message;
pub use resolver::resolve;
pub use session::SettingsSession;
pub use state::PanelState;
pub use tabs::SettingsTab;

// Re-export core types the panel API surfaces
pub use maptoc_core::{
    DockLayoutMetrics, Entity, NodeId, NodeKind, Resolved, SettingsPatch, SettingsValue,
    TargetDescriptor,
};
