use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::{cardapio_handlers, comanda_handlers, health_check};
use crate::store::traits::Store;

pub fn create_router<S: Store + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Cardápio
        .route("/api/cardapio", get(cardapio_handlers::listar_cardapio::<S>))
        .route(
            "/api/cardapio",
            post(cardapio_handlers::criar_item_cardapio::<S>),
        )
        .route(
            "/api/cardapio/:id",
            get(cardapio_handlers::obter_item_cardapio::<S>),
        )
        .route(
            "/api/cardapio/:id",
            put(cardapio_handlers::atualizar_item_cardapio::<S>),
        )
        .route(
            "/api/cardapio/:id",
            delete(cardapio_handlers::deletar_item_cardapio::<S>),
        )
        // Comandas
        .route("/api/comandas", get(comanda_handlers::listar_comandas::<S>))
        .route("/api/comandas", post(comanda_handlers::criar_comanda::<S>))
        .route(
            "/api/comandas/mesa/:numero_mesa",
            get(comanda_handlers::listar_comandas_por_mesa::<S>),
        )
        .route(
            "/api/comandas/:id",
            get(comanda_handlers::obter_comanda::<S>),
        )
        .route(
            "/api/comandas/:id",
            patch(comanda_handlers::atualizar_status_comanda::<S>),
        )
        .route(
            "/api/comandas/:id",
            delete(comanda_handlers::deletar_comanda::<S>),
        )
        .layer(CorsLayer::permissive())
}
