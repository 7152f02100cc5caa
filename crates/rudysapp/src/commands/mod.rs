//! # Command Layer
//!
//! This module contains the **core business logic** of Rudy's. Each area lives
//! in its own submodule and implements plain Rust functions over the
//! repository and the session.
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Validate input before it reaches the repository
//! - Call into [`StoreRepository`](crate::store::StoreRepository) and
//!   [`SessionState`](crate::session::SessionState)
//! - Return a structured [`CmdResult`] with the data to show and leveled messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O** beyond the storage backend: no stdout, no terminal concerns
//! - **Access checks**: the owner guard lives in the API facade
//! - **Fail on "not found"**: an unknown store or item is a normal outcome,
//!   reported as a warning message with an empty result
//!
//! ## Command Modules
//!
//! - [`stores`]: Register, list and show stores
//! - [`items`]: Add, show and search items
//! - [`nearby`]: Rank stores by distance from the user
//! - [`owner`]: Sign-in flows, logout, current owner
//! - [`layout`]: Layout suggestions and accepting them as items
//! - [`map`]: Map widget data for a store or item

use crate::geo::RankedStore;
use crate::layout::LayoutSuggestion;
use crate::map::MapView;
use crate::model::{Item, Store, StoreOwner, StoreSummary};
use crate::session::PendingVerification;
use serde::Serialize;

pub mod items;
pub mod layout;
pub mod map;
pub mod nearby;
pub mod owner;
pub mod stores;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stores: Vec<Store>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ranked: Vec<RankedStore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<StoreOwner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<PendingVerification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<StoreSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<MapView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<LayoutSuggestion>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_stores(mut self, stores: Vec<Store>) -> Self {
        self.stores = stores;
        self
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}
