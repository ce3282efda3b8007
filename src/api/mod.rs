pub mod cardapio_handlers;
pub mod comanda_handlers;
pub mod routes;

pub use cardapio_handlers::*;
pub use comanda_handlers::*;
pub use routes::*;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

use crate::model::ErroValidacao;

pub type AppState<S> = Arc<S>;

/// Envelope único de resposta da API: `sucesso` sempre presente, `dados`
/// no sucesso, `mensagem` nas falhas (e em sucessos de mutação).
#[derive(Debug, Serialize)]
pub struct Resposta<T> {
    pub sucesso: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mensagem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dados: Option<T>,
}

impl<T> Resposta<T> {
    pub fn ok(dados: T) -> Self {
        Self {
            sucesso: true,
            mensagem: None,
            dados: Some(dados),
        }
    }

    pub fn ok_com_mensagem(dados: T, mensagem: impl Into<String>) -> Self {
        Self {
            sucesso: true,
            mensagem: Some(mensagem.into()),
            dados: Some(dados),
        }
    }
}

impl Resposta<()> {
    pub fn falha(mensagem: impl Into<String>) -> Self {
        Self {
            sucesso: false,
            mensagem: Some(mensagem.into()),
            dados: None,
        }
    }
}

/// Erro de handler já no formato de resposta.
pub type Falha = (StatusCode, Json<Resposta<()>>);

pub(crate) fn falha(status: StatusCode, mensagem: impl Into<String>) -> Falha {
    (status, Json(Resposta::falha(mensagem)))
}

pub(crate) fn falha_validacao(erro: ErroValidacao) -> Falha {
    falha(StatusCode::BAD_REQUEST, erro.to_string())
}

pub(crate) fn falha_interna(mensagem: &str) -> Falha {
    falha(StatusCode::INTERNAL_SERVER_ERROR, mensagem)
}

/// Ids chegam como texto na rota; o contrato exige inteiro positivo e um 400
/// no envelope (não o erro padrão do framework) quando não for.
pub(crate) fn parse_id(bruto: &str) -> Result<i64, Falha> {
    bruto
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| falha_validacao(ErroValidacao::IdInvalido))
}

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
