use actix_web::{web, HttpResponse, Responder};
use log::{error, info, warn};

use crate::model::{truncate_context, MODEL_ID};
use crate::web::error::ChatError;
use crate::web::models::{ChatRequest, ChatResponse, HealthResponse, StatusResponse};
use crate::AppState;

// Service identity
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(StatusResponse {
        status: "ok".to_string(),
        model: MODEL_ID.to_string(),
    })
}

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
    })
}

// Chat API endpoint
pub async fn chat(
    data: web::Data<AppState>,
    req: web::Json<ChatRequest>,
) -> Result<HttpResponse, ChatError> {
    let ChatRequest { context, question } = req.into_inner();
    let context = context.unwrap_or_default();
    let context = truncate_context(&context);

    let question = match question {
        Some(q) if !q.is_empty() => q,
        _ => {
            warn!("Rejecting chat request without a question");
            return Err(ChatError::BadRequest);
        }
    };

    info!(
        "Chat request: question {} chars, context {} chars",
        question.chars().count(),
        context.chars().count()
    );

    match data.model.ask(context, &question).await {
        Ok(answer) => Ok(HttpResponse::Ok().json(ChatResponse {
            success: true,
            answer,
        })),
        Err(e) => {
            error!("Chat request failed: {}", e);
            Err(e)
        }
    }
}
