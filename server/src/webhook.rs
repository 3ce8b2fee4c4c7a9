//! Voice platform webhook: typed events in, spoken replies out.

use crate::AppState;
use axum::{extract::State, Json};
use engine::voice::{format_results, format_single, NOT_FOUND, NO_RESULTS};
use engine::{PropertyId, RawCriteria};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const SAVED: &str = "I've saved your search criteria. Let me search for properties that match.";
const UNKNOWN_FUNCTION: &str = "I don't understand that request. Could you please rephrase?";

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum WebhookEvent {
    FunctionCall {
        #[serde(rename = "functionCall")]
        function_call: FunctionCall,
        #[serde(default)]
        call: Option<CallInfo>,
    },
    StatusUpdate {
        #[serde(default)]
        status: Option<String>,
        #[serde(default)]
        call: Option<CallInfo>,
    },
    EndOfCallReport {
        #[serde(default)]
        call: Option<CallInfo>,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub parameters: Value,
}

#[derive(Debug, Deserialize)]
pub struct CallInfo {
    pub id: String,
}

/// What the assistant should say, plus structured data for the UI.
#[derive(Debug, Serialize)]
pub struct VoiceReply {
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl VoiceReply {
    fn say(text: impl Into<String>) -> Self {
        Self { result: text.into(), data: None }
    }

    fn with_data(text: impl Into<String>, data: Value) -> Self {
        Self { result: text.into(), data: Some(data) }
    }
}

/// Payloads that fit no known event shape are acknowledged like any other unhandled event.
pub async fn webhook_handler(State(state): State<AppState>, Json(body): Json<Value>) -> Json<Value> {
    let event = serde_json::from_value::<WebhookEvent>(body).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "unrecognized webhook payload");
        WebhookEvent::Other
    });
    Json(dispatch(&state, event))
}

pub fn dispatch(state: &AppState, event: WebhookEvent) -> Value {
    match event {
        WebhookEvent::FunctionCall { function_call, call } => {
            let call_id = call.as_ref().map(|c| c.id.as_str());
            tracing::info!(name = %function_call.name, call_id, "function call");
            let reply = call_function(state, function_call, call_id);
            serde_json::to_value(reply).unwrap_or_else(|_| json!({ "result": UNKNOWN_FUNCTION }))
        }
        WebhookEvent::StatusUpdate { status, call } => {
            tracing::info!(call_id = call.as_ref().map(|c| c.id.as_str()), status = status.as_deref(), "call status");
            json!({ "success": true })
        }
        WebhookEvent::EndOfCallReport { call } => {
            if let Some(call) = call {
                let had_session = state.sessions.remove(&call.id).is_some();
                tracing::info!(call_id = %call.id, had_session, "call ended");
            }
            json!({ "success": true })
        }
        WebhookEvent::Other => json!({ "success": true }),
    }
}

fn call_function(state: &AppState, call: FunctionCall, call_id: Option<&str>) -> VoiceReply {
    match call.name.as_str() {
        "searchProperties" => search_properties(state, call.parameters, call_id),
        "getPropertyDetails" => property_details(state, &call.parameters),
        "saveSearchCriteria" => save_criteria(state, call.parameters, call_id),
        _ => VoiceReply::say(UNKNOWN_FUNCTION),
    }
}

fn parse_raw(parameters: Value) -> Result<RawCriteria, serde_json::Error> {
    if parameters.is_null() {
        return Ok(RawCriteria::default());
    }
    serde_json::from_value(parameters)
}

fn clarify(reason: impl std::fmt::Display) -> VoiceReply {
    VoiceReply::say(format!("Sorry, I didn't quite catch that: {reason}. Could you say it another way?"))
}

fn search_properties(state: &AppState, parameters: Value, call_id: Option<&str>) -> VoiceReply {
    let raw = match parse_raw(parameters) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "unreadable search parameters");
            return clarify("the search details were garbled");
        }
    };
    let raw = match call_id.and_then(|id| state.sessions.get(id)) {
        Some(saved) => raw.merged_over(&saved),
        None => raw,
    };
    let criteria = match raw.normalize() {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(error = %e, "invalid search criteria");
            return clarify(e);
        }
    };

    let results = state.engine.search(&criteria);
    if results.is_empty() {
        return VoiceReply::say(NO_RESULTS);
    }
    let text = format_results(&results);
    let count = results.len();
    VoiceReply::with_data(text, json!({ "properties": results, "count": count }))
}

fn property_id(v: &Value) -> Option<PropertyId> {
    match v {
        Value::Number(n) => n.as_u64().and_then(|id| PropertyId::try_from(id).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn property_details(state: &AppState, parameters: &Value) -> VoiceReply {
    let property = parameters
        .get("propertyId")
        .and_then(property_id)
        .and_then(|id| state.engine.get_by_id(id));
    match property {
        Some(p) => VoiceReply::with_data(format_single(p), json!({ "property": p })),
        None => VoiceReply::say(NOT_FOUND),
    }
}

fn save_criteria(state: &AppState, parameters: Value, call_id: Option<&str>) -> VoiceReply {
    let raw = match parse_raw(parameters) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "unreadable criteria to save");
            return clarify("the search details were garbled");
        }
    };
    let saved = match call_id {
        Some(id) => {
            state.sessions.save(id, raw);
            true
        }
        None => {
            tracing::warn!("saveSearchCriteria without a call id");
            false
        }
    };
    VoiceReply::with_data(SAVED, json!({ "saved": saved }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_ids_from_numbers_and_strings() {
        assert_eq!(property_id(&json!(12)), Some(12));
        assert_eq!(property_id(&json!(" 12 ")), Some(12));
        assert_eq!(property_id(&json!(-1)), None);
        assert_eq!(property_id(&json!("twelve")), None);
        assert_eq!(property_id(&json!(null)), None);
    }

    #[test]
    fn events_decode_by_type_tag() {
        let e: WebhookEvent = serde_json::from_value(json!({
            "type": "function-call",
            "call": {"id": "c1"},
            "functionCall": {"name": "searchProperties"}
        }))
        .unwrap();
        match e {
            WebhookEvent::FunctionCall { function_call, call } => {
                assert_eq!(function_call.name, "searchProperties");
                assert!(function_call.parameters.is_null());
                assert_eq!(call.map(|c| c.id).as_deref(), Some("c1"));
            }
            other => panic!("unexpected {other:?}"),
        }
        let e: WebhookEvent = serde_json::from_value(json!({"type": "hang"})).unwrap();
        assert!(matches!(e, WebhookEvent::Other));
    }
}
