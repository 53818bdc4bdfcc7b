use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::Mutex};
use tracing::info;

pub const SCRIPT_ROUTE: &str = "/exec";
pub const LEADS_ROUTE: &str = "/leads";

/// Lead name for which the script reports an error.
pub const ERROR_NAME: &str = "error";
/// Lead name for which the server responds with HTTP 500.
pub const CRASH_NAME: &str = "crash";

pub async fn start_server(host: IpAddr, port: u16) -> anyhow::Result<()> {
    info!("Starting lead endpoint testing server on {host}:{port}");
    info!("Lead endpoint: http://{host}:{port}{SCRIPT_ROUTE}");
    info!("Received leads: http://{host}:{port}{LEADS_ROUTE}");
    info!(
        "Leads named {ERROR_NAME:?} are answered with a script error, leads named \
         {CRASH_NAME:?} with HTTP 500"
    );

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(LeadStore::default()))
        .await
        .context("Failed to start HTTP server")
}

pub fn router(store: LeadStore) -> Router<()> {
    Router::new()
        .route(SCRIPT_ROUTE, routing::post(exec))
        .route(LEADS_ROUTE, routing::get(list))
        .with_state(store)
}

/// Leads accepted by the testing server, in the order they were received.
#[derive(Debug, Clone, Default)]
pub struct LeadStore(Arc<Mutex<Vec<ReceivedLead>>>);

impl LeadStore {
    pub async fn leads(&self) -> Vec<ReceivedLead> {
        self.0.lock().await.clone()
    }

    async fn push(&self, lead: ReceivedLead) {
        self.0.lock().await.push(lead);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceivedLead {
    pub content_type: Option<String>,
    pub name: String,
    pub whatsapp: String,
    pub mobile: String,
    pub email: String,
    pub message: String,
}

#[derive(Deserialize)]
struct LeadBody {
    #[serde(default)]
    name: String,
    #[serde(default)]
    whatsapp: String,
    #[serde(default)]
    mobile: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    message: String,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
struct ScriptResponse {
    status: &'static str,
    message: String,
}

impl ScriptResponse {
    fn success() -> Self {
        Self {
            status: "success",
            message: "Form submitted successfully".into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}

async fn exec(State(store): State<LeadStore>, headers: HeaderMap, body: String) -> Response {
    let lead = match serde_json::from_str::<LeadBody>(&body) {
        Ok(lead) => lead,
        Err(err) => return Json(ScriptResponse::error(format!("SyntaxError: {err}"))).into_response(),
    };

    match lead.name.as_str() {
        CRASH_NAME => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        ERROR_NAME => return Json(ScriptResponse::error("Simulated script error")).into_response(),
        _ => {}
    }

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(Into::into);

    info!(name = %lead.name, "Received lead");
    store
        .push(ReceivedLead {
            content_type,
            name: lead.name,
            whatsapp: lead.whatsapp,
            mobile: lead.mobile,
            email: lead.email,
            message: lead.message,
        })
        .await;

    Json(ScriptResponse::success()).into_response()
}

async fn list(State(store): State<LeadStore>) -> Json<Vec<ReceivedLead>> {
    Json(store.leads().await)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn malformed_body() {
        let store = LeadStore::default();

        let response = exec(State(store.clone()), HeaderMap::new(), "not json".into()).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(store.leads().await.is_empty());
    }

    #[tokio::test]
    async fn missing_fields_default_to_empty() {
        let store = LeadStore::default();

        exec(State(store.clone()), HeaderMap::new(), r#"{"name":"Asha"}"#.into()).await;

        assert_eq!(
            store.leads().await,
            [ReceivedLead {
                content_type: None,
                name: "Asha".into(),
                whatsapp: String::new(),
                mobile: String::new(),
                email: String::new(),
                message: String::new(),
            }]
        );
    }

    #[test]
    fn script_responses() {
        assert_eq!(
            serde_json::to_string(&ScriptResponse::success()).unwrap(),
            r#"{"status":"success","message":"Form submitted successfully"}"#
        );
    }
}
