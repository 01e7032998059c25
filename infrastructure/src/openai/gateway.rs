//! Chat-completions LLM Gateway implementation

use super::protocol::{ChatCompletionRequest, WireMessage, parse_completion};
use crate::config::FileApiConfig;
use async_trait::async_trait;
use router_application::ports::llm_gateway::{
    CompletionRequest, GatewayError, LlmGateway, Role,
};
use router_domain::preview;
use tracing::{debug, info};

/// Gateway for an OpenAI-compatible `/chat/completions` endpoint
///
/// One POST per request, bearer authentication, timeout taken from the
/// request. Non-2xx responses and network failures are transport errors;
/// a 2xx body without `choices[0].message.content` is a protocol error.
pub struct ChatCompletionsGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    default_system: String,
}

impl ChatCompletionsGateway {
    pub fn new(config: &FileApiConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let endpoint = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        info!(endpoint = %endpoint, model = %config.model, "Chat completions gateway ready");

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            default_system: config.system_prompt.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// System message first, then the request's history
    fn body<'a>(&'a self, request: &'a CompletionRequest) -> ChatCompletionRequest<'a> {
        let system = request.system.as_deref().unwrap_or(&self.default_system);
        let messages = std::iter::once(WireMessage {
            role: Role::System,
            content: system,
        })
        .chain(request.messages.iter().map(|m| WireMessage {
            role: m.role,
            content: &m.content,
        }))
        .collect();

        ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

fn transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Transport(error.to_string())
    }
}

#[async_trait]
impl LlmGateway for ChatCompletionsGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        debug!(
            step = request.step,
            temperature = request.temperature,
            max_tokens = request.max_tokens,
            "POST {}",
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .timeout(request.timeout)
            .json(&self.body(request))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: preview(&text, 200),
            });
        }

        parse_completion(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::State,
        http::{HeaderMap, StatusCode},
        routing::post,
    };
    use router_application::ports::llm_gateway::ChatMessage;
    use router_domain::StepProfile;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::net::TcpListener;

    /// Requests seen by the test endpoint
    #[derive(Clone, Default)]
    struct Received(Arc<Mutex<Vec<(HeaderMap, Value)>>>);

    impl Received {
        fn take(&self) -> Vec<(HeaderMap, Value)> {
            std::mem::take(&mut *self.0.lock().unwrap())
        }
    }

    fn config(base_url: &str) -> FileApiConfig {
        FileApiConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    /// Serve `/v1/chat/completions` with a canned reply; returns the base URL
    async fn spawn_endpoint(status: StatusCode, body: &'static str) -> (String, Received) {
        let received = Received::default();
        let app = Router::new()
            .route(
                "/v1/chat/completions",
                post(
                    move |State(received): State<Received>,
                          headers: HeaderMap,
                          Json(request): Json<Value>| async move {
                        received.0.lock().unwrap().push((headers, request));
                        (status, body)
                    },
                ),
            )
            .with_state(received.clone());

        let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}/v1", addr), received)
    }

    #[test]
    fn test_body_prepends_system_prompt() {
        let gateway = ChatCompletionsGateway::new(&config("http://localhost:1/v1/")).unwrap();
        assert_eq!(gateway.endpoint(), "http://localhost:1/v1/chat/completions");

        let profile = StepProfile::new("chat", 0.2);
        let request = CompletionRequest::chat(
            profile,
            vec![ChatMessage::user("hi"), ChatMessage::assistant("hello")],
        );
        let body = serde_json::to_value(gateway.body(&request)).unwrap();
        assert_eq!(body["model"], "bens_model");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(
            body["messages"][0]["content"],
            "You are a helpful reasoning assistant."
        );
        assert_eq!(body["messages"][2]["role"], "assistant");
        assert_eq!(body["temperature"], 0.2);

        let request = request.with_system("custom");
        let body = serde_json::to_value(gateway.body(&request)).unwrap();
        assert_eq!(body["messages"][0]["content"], "custom");
    }

    #[tokio::test]
    async fn test_complete_round_trip() {
        let (base_url, received) = spawn_endpoint(
            StatusCode::OK,
            r#"{"choices":[{"message":{"role":"assistant","content":"FINAL: 42"}}]}"#,
        )
        .await;
        let gateway = ChatCompletionsGateway::new(&config(&base_url)).unwrap();

        let profile = StepProfile::new("math.solve", 0.7);
        let request = CompletionRequest::new(profile, "You are a solver.", "What is 6 * 7?");
        let text = gateway.complete(&request).await.unwrap();
        assert_eq!(text, "FINAL: 42");

        let received = received.take();
        assert_eq!(received.len(), 1);
        let (headers, body) = &received[0];
        assert_eq!(headers["authorization"], "Bearer cse476");
        assert_eq!(body["model"], "bens_model");
        assert_eq!(body["messages"][0]["content"], "You are a solver.");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "What is 6 * 7?");
        assert_eq!(body["max_tokens"], 256);
    }

    #[tokio::test]
    async fn test_non_success_status_is_transport() {
        let (base_url, _received) =
            spawn_endpoint(StatusCode::SERVICE_UNAVAILABLE, "overloaded").await;
        let gateway = ChatCompletionsGateway::new(&config(&base_url)).unwrap();

        let request = CompletionRequest::new(StepProfile::new("classify", 0.0), "s", "p");
        let err = gateway.complete(&request).await.unwrap_err();
        assert_eq!(
            err,
            GatewayError::Status {
                status: 503,
                body: "overloaded".to_string()
            }
        );
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_malformed_body_is_protocol() {
        let (base_url, _received) = spawn_endpoint(StatusCode::OK, r#"{"choices":[]}"#).await;
        let gateway = ChatCompletionsGateway::new(&config(&base_url)).unwrap();

        let request = CompletionRequest::new(StepProfile::new("classify", 0.0), "s", "p");
        let err = gateway.complete(&request).await.unwrap_err();
        assert!(err.is_protocol());
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport() {
        let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = ChatCompletionsGateway::new(&config(&format!("http://{}/v1", addr))).unwrap();
        let profile =
            StepProfile::new("classify", 0.0).with_timeout_override(Some(Duration::from_secs(5)));
        let request = CompletionRequest::new(profile, "s", "p");

        let err = gateway.complete(&request).await.unwrap_err();
        assert!(err.is_transport());
    }
}
