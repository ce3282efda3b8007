use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::{falha, falha_interna, falha_validacao, parse_id, AppState, Falha, Resposta};
use crate::model::{CriarItemCardapio, ItemCardapio};
use crate::store::traits::Store;

/// GET /api/cardapio
pub async fn listar_cardapio<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Json<Resposta<Vec<ItemCardapio>>>, Falha> {
    match store.listar_itens().await {
        Ok(itens) => Ok(Json(Resposta::ok(itens))),
        Err(erro) => {
            log::error!("erro ao listar cardápio: {erro:#}");
            Err(falha_interna("Erro ao acessar o banco de dados"))
        }
    }
}

/// GET /api/cardapio/:id
pub async fn obter_item_cardapio<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Resposta<ItemCardapio>>, Falha> {
    let id = parse_id(&id)?;

    match store.obter_item(id).await {
        Ok(Some(item)) => Ok(Json(Resposta::ok(item))),
        Ok(None) => Err(falha(
            StatusCode::NOT_FOUND,
            "Item não encontrado no cardápio",
        )),
        Err(erro) => {
            log::error!("erro ao buscar item {id} do cardápio: {erro:#}");
            Err(falha_interna("Erro ao buscar item do cardápio"))
        }
    }
}

/// POST /api/cardapio
pub async fn criar_item_cardapio<S: Store>(
    State(store): State<AppState<S>>,
    Json(corpo): Json<CriarItemCardapio>,
) -> Result<(StatusCode, Json<Resposta<ItemCardapio>>), Falha> {
    let novo = corpo.validar().map_err(falha_validacao)?;

    match store.criar_item(novo).await {
        Ok(item) => Ok((
            StatusCode::CREATED,
            Json(Resposta::ok_com_mensagem(
                item,
                "Item adicionado ao cardápio com sucesso",
            )),
        )),
        Err(erro) => {
            log::error!("erro ao criar item do cardápio: {erro:#}");
            Err(falha_interna("Erro ao criar item no cardápio"))
        }
    }
}

/// PUT /api/cardapio/:id — substituição completa dos campos.
pub async fn atualizar_item_cardapio<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<String>,
    Json(corpo): Json<CriarItemCardapio>,
) -> Result<Json<Resposta<ItemCardapio>>, Falha> {
    let id = parse_id(&id)?;
    let dados = corpo.validar().map_err(falha_validacao)?;

    match store.atualizar_item(id, dados).await {
        Ok(Some(item)) => Ok(Json(Resposta::ok_com_mensagem(
            item,
            "Item atualizado com sucesso",
        ))),
        Ok(None) => Err(falha(
            StatusCode::NOT_FOUND,
            "Item não encontrado no cardápio",
        )),
        Err(erro) => {
            log::error!("erro ao atualizar item {id} do cardápio: {erro:#}");
            Err(falha_interna("Erro ao atualizar item do cardápio"))
        }
    }
}

/// DELETE /api/cardapio/:id — devolve o item removido.
pub async fn deletar_item_cardapio<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Resposta<ItemCardapio>>, Falha> {
    let id = parse_id(&id)?;

    match store.remover_item(id).await {
        Ok(Some(item)) => Ok(Json(Resposta::ok_com_mensagem(
            item,
            "Item removido do cardápio com sucesso",
        ))),
        Ok(None) => Err(falha(
            StatusCode::NOT_FOUND,
            "Item não encontrado no cardápio",
        )),
        Err(erro) => {
            log::error!("erro ao remover item {id} do cardápio: {erro:#}");
            Err(falha_interna("Erro ao deletar item do cardápio"))
        }
    }
}
