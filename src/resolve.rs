//! Name-to-id resolution for dependent lookups.
//!
//! Commands accept either an id or a display name; names are resolved
//! through list endpoints before the primary operation runs. Zero matches
//! always fail. What happens on more than one match is a per-command
//! decision carried by `MatchPolicy`: some lookups take the first match,
//! others refuse and list the candidates.

use crate::error::CommandError;
use crate::http::encode_query_value;
use crate::session::Session;
use serde_json::Value;

/// How a lookup treats more than one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Take the first entry the server returned.
    FirstWins,
    /// Fail with a distinct ambiguity error listing candidate ids.
    RequireUnique,
}

/// Items of a list response (`{"value": [...]}`).
pub fn collection(response: &Value) -> Vec<Value> {
    response
        .get("value")
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default()
}

/// Select the resolved entity from a lookup's matches.
///
/// `entity` and `name` feed the error messages, e.g.
/// `The specified team 'Finance' does not exist.`
pub fn pick_match(
    entity: &str,
    name: &str,
    matches: Vec<Value>,
    policy: MatchPolicy,
) -> Result<Value, CommandError> {
    let mut matches = matches;
    match matches.len() {
        0 => Err(CommandError::Resolution(format!(
            "The specified {} '{}' does not exist.",
            entity, name
        ))),
        1 => Ok(matches.remove(0)),
        _ => match policy {
            MatchPolicy::FirstWins => Ok(matches.remove(0)),
            MatchPolicy::RequireUnique => {
                let ids: Vec<String> = matches
                    .iter()
                    .map(|m| {
                        m.get("id")
                            .and_then(|id| id.as_str())
                            .unwrap_or("?")
                            .to_string()
                    })
                    .collect();
                Err(CommandError::Resolution(format!(
                    "Multiple {}s with name '{}' found: {}",
                    entity,
                    name,
                    ids.join(", ")
                )))
            }
        },
    }
}

/// Resolve a team's id from its display name.
///
/// The group directory also holds non-team groups; a group without the
/// `team` capability is reported as a missing team, matching what the
/// server itself would say for the archive endpoint.
pub async fn team_id_by_name(session: &Session, name: &str) -> Result<String, CommandError> {
    let response = session
        .get(&format!("/groups?displayName={}", encode_query_value(name)))
        .await?;
    let group = pick_match("team", name, collection(&response), MatchPolicy::RequireUnique)?;

    let is_team = group
        .get("capabilities")
        .and_then(|c| c.as_array())
        .map(|caps| caps.iter().any(|c| c.as_str() == Some("team")))
        .unwrap_or(false);
    if !is_team {
        return Err(CommandError::Resolution(format!(
            "The specified team '{}' does not exist.",
            name
        )));
    }

    entity_id("team", &group)
}

/// The `id` field of a resolved entity.
pub fn entity_id(entity: &str, value: &Value) -> Result<String, CommandError> {
    value
        .get("id")
        .and_then(|id| id.as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            CommandError::Transport(format!("Resolved {} carries no id field", entity))
        })
}
