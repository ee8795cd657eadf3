// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Agent entrypoint.
//!
//! Two payload shapes are accepted:
//! - `{"task": "start_new_activity_flow", "activityId", "sessionId"}` runs the
//!   deterministic new-activity workflow (fetch, suggest three names).
//! - `{"prompt", "sessionId"}` is a user reply within a session.

use super::reply::{interpret_reply, Reply};
use super::session::{PendingSuggestions, SessionStore};
use super::tools::{creative_names, update_activity_name, update_activity_privacy};
use crate::clients::ActivityClient;
use crate::error::{AppError, Result};
use crate::models::de::option_id_string;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Task name of the workflow triggered by a newly uploaded activity.
pub const NEW_ACTIVITY_TASK: &str = "start_new_activity_flow";

const SUGGESTIONS_MESSAGE: &str = "Here are 3 creative name suggestions for your activity. \
    Reply with 1, 2, or 3 to choose one, or tell me what you'd like to name it!";

const HELP_MESSAGE: &str = "I can rename your activity (reply with a suggestion number or \
    \"rename to ...\") or change its privacy (public, private, or followers only).";

const NO_ACTIVITY_MESSAGE: &str =
    "I couldn't find an activity for this conversation. Upload an activity to get started!";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvocationPayload {
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default, rename = "activityId", deserialize_with = "option_id_string")]
    pub activity_id: Option<String>,
    #[serde(default, rename = "sessionId", deserialize_with = "option_id_string")]
    pub session_id: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Suggestions produced by the new-activity workflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub struct NewActivityFlowResponse {
    pub activity_id: String,
    pub creative_names: Vec<String>,
    pub message: String,
}

/// Answer to a user reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub struct ReplyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InvocationResponse {
    NewActivity(NewActivityFlowResponse),
    Reply(ReplyResponse),
}

pub async fn handle_invocation(
    client: &dyn ActivityClient,
    sessions: &SessionStore,
    payload: InvocationPayload,
) -> Result<InvocationResponse> {
    match (payload.task.as_deref(), payload.prompt.as_deref()) {
        (Some(NEW_ACTIVITY_TASK), _) => {
            let (Some(activity_id), Some(session_id)) = (
                payload.activity_id.as_deref(),
                payload.session_id.as_deref(),
            ) else {
                return Err(AppError::BadRequest(
                    "Missing required parameters: activityId and sessionId".to_string(),
                ));
            };
            start_new_activity_flow(client, sessions, activity_id, session_id)
                .await
                .map(InvocationResponse::NewActivity)
        }
        (Some(task), _) => Err(AppError::BadRequest(format!("Unknown task '{}'", task))),
        (None, Some(prompt)) => {
            handle_reply(client, sessions, payload.session_id.as_deref(), prompt)
                .await
                .map(InvocationResponse::Reply)
        }
        (None, None) => Err(AppError::BadRequest(
            "Invalid payload structure. Expected either 'task' for deterministic workflow \
             or 'prompt' for conversational workflow."
                .to_string(),
        )),
    }
}

/// Fetch the activity, suggest names and remember them for the session.
pub async fn start_new_activity_flow(
    client: &dyn ActivityClient,
    sessions: &SessionStore,
    activity_id: &str,
    session_id: &str,
) -> Result<NewActivityFlowResponse> {
    tracing::info!(activity_id, session_id, "Starting new activity flow");

    let activity = client.fetch(activity_id).await?;
    let names = creative_names(&activity).creative_names;

    sessions.remember(
        session_id,
        PendingSuggestions {
            activity_id: activity_id.to_string(),
            names: names.clone(),
        },
    );

    Ok(NewActivityFlowResponse {
        activity_id: activity_id.to_string(),
        creative_names: names,
        message: SUGGESTIONS_MESSAGE.to_string(),
    })
}

async fn handle_reply(
    client: &dyn ActivityClient,
    sessions: &SessionStore,
    session_id: Option<&str>,
    prompt: &str,
) -> Result<ReplyResponse> {
    if prompt.trim().is_empty() {
        return Err(AppError::BadRequest(
            "No prompt found in input, please provide a message.".to_string(),
        ));
    }

    let reply = interpret_reply(prompt);
    tracing::debug!(session_id, reply = ?reply, "Interpreted reply");

    if reply == Reply::Unknown {
        return Ok(ReplyResponse {
            activity_id: None,
            message: HELP_MESSAGE.to_string(),
        });
    }

    let Some(pending) = session_id.and_then(|id| sessions.get(id)) else {
        return Ok(ReplyResponse {
            activity_id: None,
            message: NO_ACTIVITY_MESSAGE.to_string(),
        });
    };
    let activity_id = pending.activity_id.as_str();

    let message = match reply {
        Reply::ChooseSuggestion(index) => match pending.names.get(index) {
            Some(name) => update_activity_name(client, activity_id, name).await?.message,
            None => format!(
                "Please pick a number between 1 and {}.",
                pending.names.len()
            ),
        },
        Reply::Rename(name) => update_activity_name(client, activity_id, &name).await?.message,
        Reply::SetPrivacy(setting) => {
            update_activity_privacy(client, activity_id, setting.as_str())
                .await?
                .message
        }
        Reply::Unknown => HELP_MESSAGE.to_string(),
    };

    Ok(ReplyResponse {
        activity_id: Some(pending.activity_id.clone()),
        message,
    })
}
