//! [`TabHost`] backed by the extension's WebSocket connection.

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::identifiers::{TabId, WindowId};
use crate::protocol::{Command, Request, Response, ScriptingCommand, TabsCommand};
use crate::tabs::TabSnapshot;
use crate::transport::Connection;

use super::TabHost;

// ============================================================================
// RemoteHost
// ============================================================================

/// Sends tab commands to the extension and decodes its responses.
#[derive(Clone)]
pub struct RemoteHost {
    connection: Connection,
}

impl fmt::Debug for RemoteHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteHost")
            .field("pending", &self.connection.pending_count())
            .finish_non_exhaustive()
    }
}

impl RemoteHost {
    /// Wraps an established connection.
    #[inline]
    #[must_use]
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }

    /// Returns the underlying connection.
    #[inline]
    #[must_use]
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Sends a command and returns the raw response.
    async fn send(&self, command: Command) -> Result<Response> {
        let request = Request::new(command);
        debug!(id = %request.id, method = request.command.method(), "Sending command");
        self.connection.send(request).await
    }

    async fn send_tabs(&self, command: TabsCommand) -> Result<Response> {
        self.send(Command::Tabs(command)).await
    }
}

// ============================================================================
// TabHost
// ============================================================================

#[async_trait]
impl TabHost for RemoteHost {
    async fn move_tab(&self, tab_id: TabId, index: u32) -> Result<()> {
        self.send_tabs(TabsCommand::Move { tab_id, index })
            .await?
            .into_result()
            .map_err(|e| e.for_tab(tab_id))?;
        Ok(())
    }

    async fn activate_tab(&self, tab_id: TabId) -> Result<()> {
        self.send_tabs(TabsCommand::Activate { tab_id })
            .await?
            .into_result()
            .map_err(|e| e.for_tab(tab_id))?;
        Ok(())
    }

    async fn query_window(&self, window_id: WindowId) -> Result<Vec<TabSnapshot>> {
        self.send_tabs(TabsCommand::Query { window_id })
            .await?
            .decode_field("tabs")
    }

    async fn query_active(&self) -> Result<Option<TabSnapshot>> {
        self.send_tabs(TabsCommand::QueryActive)
            .await?
            .decode_field("tab")
    }

    async fn execute_script(
        &self,
        tab_id: TabId,
        script: &str,
        args: Vec<Value>,
    ) -> Result<Value> {
        let command = Command::Scripting(ScriptingCommand::ExecuteScript {
            tab_id,
            script: script.to_string(),
            args,
        });

        let mut result = self
            .send(command)
            .await?
            .into_result()
            .map_err(|e| e.for_tab(tab_id))?;
        Ok(result.get_mut("value").map(Value::take).unwrap_or(Value::Null))
    }
}

// ============================================================================
// Tests
// ============================================================================
