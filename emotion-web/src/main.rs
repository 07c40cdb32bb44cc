//! Servidor web Axum com WebSocket para visualização da análise de emoções em tempo real

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use emotion_core::{
    corpus::demo_reviews,
    evaluation::{evaluate, Evaluation},
    EmotionPipeline, PipelineEvent, ReviewAnalysis, ReviewRecord,
};
use emotion_web::{init_tracing, load_pipeline, ServerConfig};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

/// Estado compartilhado da aplicação
struct AppState {
    pipeline: EmotionPipeline,
}

#[derive(Deserialize)]
struct AnalyzeRequest {
    text: String,
    #[serde(default)]
    sentiment: Option<String>,
}

#[derive(Serialize)]
struct BatchItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<ReviewAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct BatchResponse {
    results: Vec<BatchItem>,
    evaluation: Evaluation,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ServerConfig::from_env();
    let pipeline = load_pipeline(config.lexicon.as_deref())?;
    let state = Arc::new(AppState { pipeline });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/analyze", post(analyze_handler))
        .route("/batch", post(batch_handler))
        .route("/ws", get(ws_handler))
        .route("/demo-reviews", get(demo_reviews_handler))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    info!("🚀 Servidor de emoções iniciado em http://{}", config.addr);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Retorna a página principal HTML
async fn index_handler() -> impl IntoResponse {
    Html(include_str!("templates/index.html"))
}

fn bad_request(message: String) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

/// Análise via HTTP POST (sem streaming)
async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    if req.text.trim().is_empty() {
        return bad_request("Texto vazio".to_string());
    }

    let record = ReviewRecord::new(req.text, req.sentiment.unwrap_or_default());
    match state.pipeline.analyze_record(&record) {
        Ok(analysis) => Json(analysis).into_response(),
        Err(err) => bad_request(err.to_string()),
    }
}

/// Análise de um lote de reviews, com avaliação contra o sentimento anotado
async fn batch_handler(
    State(state): State<Arc<AppState>>,
    Json(records): Json<Vec<ReviewRecord>>,
) -> impl IntoResponse {
    // rayon bloqueia: roda fora do runtime assíncrono
    let handle = tokio::task::spawn_blocking(move || {
        let results = state.pipeline.analyze_batch(&records);
        let evaluation = evaluate(&results);
        (results, evaluation)
    });

    let (results, evaluation) = match handle.await {
        Ok(output) => output,
        Err(err) => {
            warn!("Lote interrompido: {}", err);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Falha ao processar o lote" })),
            )
                .into_response();
        }
    };

    let results = results
        .into_iter()
        .map(|result| match result {
            Ok(analysis) => BatchItem {
                analysis: Some(analysis),
                error: None,
            },
            Err(err) => BatchItem {
                analysis: None,
                error: Some(err.to_string()),
            },
        })
        .collect();

    Json(BatchResponse {
        results,
        evaluation,
    })
    .into_response()
}

/// Retorna reviews de demonstração
async fn demo_reviews_handler() -> impl IntoResponse {
    Json(demo_reviews())
}

/// Upgrade HTTP → WebSocket
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_websocket(socket, state))
}

/// Lógica do WebSocket: recebe a review, executa o pipeline e envia eventos em tempo real
async fn handle_websocket(mut socket: WebSocket, state: Arc<AppState>) {
    info!("WebSocket conectado");

    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Text(text) => {
                // Tenta parsear como JSON {text, sentiment}; senão usa como texto puro
                let record = match serde_json::from_str::<AnalyzeRequest>(&text) {
                    Ok(req) => ReviewRecord::new(req.text.trim(), req.sentiment.unwrap_or_default()),
                    Err(_) => ReviewRecord::new(text.trim(), ""),
                };

                if record.text.is_empty() {
                    continue;
                }

                info!("Analisando via WebSocket: {} chars", record.text.len());

                let (tx, rx) = std::sync::mpsc::channel::<PipelineEvent>();
                let pipeline_state = Arc::clone(&state);

                // Pipeline é síncrono: roda em thread separada
                let handle = tokio::task::spawn_blocking(move || {
                    pipeline_state.pipeline.analyze_streaming(&record, tx);
                });
                handle.await.ok();

                let events: Vec<PipelineEvent> = rx.try_iter().collect();
                for event in &events {
                    if let Ok(json) = serde_json::to_string(event) {
                        if socket.send(Message::Text(json)).await.is_err() {
                            return; // cliente desconectou
                        }
                        // Pequena pausa para animação visual (passo a passo)
                        tokio::time::sleep(tokio::time::Duration::from_millis(35)).await;
                    }
                }
            }
            Message::Close(_) => {
                info!("WebSocket desconectado");
                return;
            }
            Message::Ping(payload) => {
                let _ = socket.send(Message::Pong(payload)).await;
            }
            _ => {}
        }
    }
}
