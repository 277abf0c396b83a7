use super::*;

use crate::api::connections::ConnectionError;

/// Rename the player. No reply on success; a name refused by the configured
/// rule is echoed back.
pub(super) async fn handle_set_name(
    state: &WsState,
    connection_id: ConnectionId,
    name: String,
    raw: &str,
) -> Option<Outgoing> {
    let desired = match state.connections.name_rule().accept(name) {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!(connection_id = %connection_id, error = %e, "Rejected set_name");
            return Some(Outgoing::echo(raw));
        }
    };

    match state.connections.rename(connection_id, &desired).await {
        Ok(_) => None,
        Err(ConnectionError::NotFound) => {
            tracing::warn!(
                connection_id = %connection_id,
                "set_name from a connection with no session"
            );
            None
        }
        Err(e) => {
            tracing::warn!(connection_id = %connection_id, error = %e, "set_name failed");
            None
        }
    }
}
