//! In-memory [`TabHost`] for handler tests.

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use rustc_hash::{FxHashMap, FxHashSet};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::identifiers::{TabId, WindowId};
use crate::tabs::TabSnapshot;

use super::TabHost;

// ============================================================================
// HostCall
// ============================================================================

/// A recorded call against [`MockHost`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum HostCall {
    Move(TabId, u32),
    Activate(TabId),
    Query(WindowId),
    QueryActive,
    Script(TabId, Vec<Value>),
    WaitForLayout(WindowId, Duration),
}

// ============================================================================
// MockHost
// ============================================================================

#[derive(Default)]
struct MockState {
    windows: FxHashMap<WindowId, Vec<TabSnapshot>>,
    calls: Vec<HostCall>,
    fail_move: bool,
    fail_query: bool,
    fail_activate: FxHashSet<TabId>,
    script_result: Option<std::result::Result<Value, String>>,
}

/// Tab strip model that behaves like a browser for move/activate/query.
#[derive(Default)]
pub(crate) struct MockHost {
    state: Mutex<MockState>,
}

impl MockHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Seeds a window with tabs; indices are rewritten to strip order.
    pub(crate) fn with_window(self, window_id: WindowId, tabs: Vec<TabSnapshot>) -> Self {
        {
            let mut state = self.state.lock();
            let strip = state.windows.entry(window_id).or_default();
            strip.extend(tabs);
            reindex(strip);
        }
        self
    }

    pub(crate) fn fail_move(self) -> Self {
        self.state.lock().fail_move = true;
        self
    }

    pub(crate) fn fail_query(self) -> Self {
        self.state.lock().fail_query = true;
        self
    }

    pub(crate) fn fail_activate(self, tab_id: TabId) -> Self {
        self.state.lock().fail_activate.insert(tab_id);
        self
    }

    pub(crate) fn script_returns(self, result: std::result::Result<Value, String>) -> Self {
        self.state.lock().script_result = Some(result);
        self
    }

    /// Removes a tab as if the user closed it.
    pub(crate) fn close_tab(&self, tab_id: TabId) {
        let mut state = self.state.lock();
        for strip in state.windows.values_mut() {
            strip.retain(|t| t.id != tab_id);
            reindex(strip);
        }
    }

    pub(crate) fn calls(&self) -> Vec<HostCall> {
        self.state.lock().calls.clone()
    }

    /// Returns only the activation calls, in order.
    pub(crate) fn activations(&self) -> Vec<TabId> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                HostCall::Activate(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn strip(&self, window_id: WindowId) -> Vec<TabId> {
        self.state
            .lock()
            .windows
            .get(&window_id)
            .map(|strip| strip.iter().map(|t| t.id).collect())
            .unwrap_or_default()
    }

    pub(crate) fn active_tab(&self, window_id: WindowId) -> Option<TabId> {
        self.state
            .lock()
            .windows
            .get(&window_id)
            .and_then(|strip| strip.iter().find(|t| t.active).map(|t| t.id))
    }
}

fn reindex(strip: &mut [TabSnapshot]) {
    for (index, tab) in strip.iter_mut().enumerate() {
        tab.index = index as u32;
    }
}

fn no_such_tab(tab_id: TabId) -> Error {
    Error::tab_not_found(tab_id)
}

// ============================================================================
// TabHost
// ============================================================================

#[async_trait]
impl TabHost for MockHost {
    async fn move_tab(&self, tab_id: TabId, index: u32) -> Result<()> {
        let mut state = self.state.lock();
        state.calls.push(HostCall::Move(tab_id, index));

        if state.fail_move {
            return Err(no_such_tab(tab_id));
        }

        for strip in state.windows.values_mut() {
            if let Some(position) = strip.iter().position(|t| t.id == tab_id) {
                let tab = strip.remove(position);
                // Unpinned tabs cannot move in front of pinned ones.
                let pinned = strip.iter().filter(|t| t.pinned).count();
                let floor = if tab.pinned { 0 } else { pinned };
                let target = (index as usize).max(floor).min(strip.len());
                strip.insert(target, tab);
                reindex(strip);
                return Ok(());
            }
        }

        Err(no_such_tab(tab_id))
    }

    async fn activate_tab(&self, tab_id: TabId) -> Result<()> {
        let mut state = self.state.lock();
        state.calls.push(HostCall::Activate(tab_id));

        if state.fail_activate.contains(&tab_id) {
            return Err(Error::protocol("Activation rejected"));
        }

        for strip in state.windows.values_mut() {
            if strip.iter().any(|t| t.id == tab_id) {
                for tab in strip.iter_mut() {
                    tab.active = tab.id == tab_id;
                }
                return Ok(());
            }
        }

        Err(no_such_tab(tab_id))
    }

    async fn query_window(&self, window_id: WindowId) -> Result<Vec<TabSnapshot>> {
        let mut state = self.state.lock();
        state.calls.push(HostCall::Query(window_id));

        if state.fail_query {
            return Err(Error::protocol(format!("Invalid window id: {window_id}")));
        }

        Ok(state.windows.get(&window_id).cloned().unwrap_or_default())
    }

    async fn query_active(&self) -> Result<Option<TabSnapshot>> {
        let mut state = self.state.lock();
        state.calls.push(HostCall::QueryActive);

        let mut windows: Vec<_> = state.windows.iter().collect();
        windows.sort_by_key(|(id, _)| **id);
        Ok(windows
            .into_iter()
            .flat_map(|(_, strip)| strip.iter())
            .find(|t| t.active)
            .cloned())
    }

    async fn execute_script(
        &self,
        tab_id: TabId,
        _script: &str,
        args: Vec<Value>,
    ) -> Result<Value> {
        let mut state = self.state.lock();
        state.calls.push(HostCall::Script(tab_id, args));

        match state.script_result.clone() {
            Some(Ok(value)) => Ok(value),
            Some(Err(message)) => Err(Error::protocol(message)),
            None => Ok(Value::Null),
        }
    }

    async fn wait_for_layout(&self, window_id: WindowId, fallback: Duration) {
        self.state
            .lock()
            .calls
            .push(HostCall::WaitForLayout(window_id, fallback));
        tokio::time::sleep(fallback).await;
    }
}
