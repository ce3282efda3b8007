use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::{falha, falha_interna, falha_validacao, parse_id, AppState, Falha, Resposta};
use crate::model::{AtualizarStatusComanda, Comanda, CriarComanda, ErroValidacao};
use crate::store::traits::Store;

/// GET /api/comandas — da mais recente para a mais antiga.
pub async fn listar_comandas<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Json<Resposta<Vec<Comanda>>>, Falha> {
    match store.listar_comandas().await {
        Ok(comandas) => Ok(Json(Resposta::ok(comandas))),
        Err(erro) => {
            log::error!("erro ao listar comandas: {erro:#}");
            Err(falha_interna("Erro ao listar comandas"))
        }
    }
}

/// GET /api/comandas/:id
pub async fn obter_comanda<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Resposta<Comanda>>, Falha> {
    let id = parse_id(&id)?;

    match store.obter_comanda(id).await {
        Ok(Some(comanda)) => Ok(Json(Resposta::ok(comanda))),
        Ok(None) => Err(falha(StatusCode::NOT_FOUND, "Comanda não encontrada")),
        Err(erro) => {
            log::error!("erro ao buscar comanda {id}: {erro:#}");
            Err(falha_interna("Erro ao buscar comanda"))
        }
    }
}

/// GET /api/comandas/mesa/:numero_mesa
pub async fn listar_comandas_por_mesa<S: Store>(
    State(store): State<AppState<S>>,
    Path(numero_mesa): Path<String>,
) -> Result<Json<Resposta<Vec<Comanda>>>, Falha> {
    let mesa = numero_mesa
        .parse::<i32>()
        .ok()
        .filter(|mesa| *mesa > 0)
        .ok_or_else(|| falha_validacao(ErroValidacao::NumeroMesaInvalido))?;

    match store.listar_por_mesa(mesa).await {
        Ok(comandas) => Ok(Json(Resposta::ok(comandas))),
        Err(erro) => {
            log::error!("erro ao listar comandas da mesa {mesa}: {erro:#}");
            Err(falha_interna("Erro ao listar comandas da mesa"))
        }
    }
}

/// POST /api/comandas — status inicial sempre `pendente`.
pub async fn criar_comanda<S: Store>(
    State(store): State<AppState<S>>,
    Json(corpo): Json<CriarComanda>,
) -> Result<(StatusCode, Json<Resposta<Comanda>>), Falha> {
    let nova = corpo.validar().map_err(falha_validacao)?;

    match store.criar_comanda(nova).await {
        Ok(comanda) => Ok((
            StatusCode::CREATED,
            Json(Resposta::ok_com_mensagem(
                comanda,
                "Comanda criada com sucesso",
            )),
        )),
        Err(erro) => {
            log::error!("erro ao criar comanda: {erro:#}");
            Err(falha_interna("Erro ao criar comanda"))
        }
    }
}

/// PATCH /api/comandas/:id — valida o status antes de tocar qualquer linha.
pub async fn atualizar_status_comanda<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<String>,
    Json(corpo): Json<AtualizarStatusComanda>,
) -> Result<Json<Resposta<Comanda>>, Falha> {
    let id = parse_id(&id)?;
    let status = corpo.validar().map_err(falha_validacao)?;

    match store.atualizar_status(id, status).await {
        Ok(Some(comanda)) => Ok(Json(Resposta::ok_com_mensagem(
            comanda,
            "Status da comanda atualizado com sucesso",
        ))),
        Ok(None) => Err(falha(StatusCode::NOT_FOUND, "Comanda não encontrada")),
        Err(erro) => {
            log::error!("erro ao atualizar status da comanda {id}: {erro:#}");
            Err(falha_interna("Erro ao atualizar status da comanda"))
        }
    }
}

/// DELETE /api/comandas/:id — devolve a comanda removida.
pub async fn deletar_comanda<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Resposta<Comanda>>, Falha> {
    let id = parse_id(&id)?;

    match store.remover_comanda(id).await {
        Ok(Some(comanda)) => Ok(Json(Resposta::ok_com_mensagem(
            comanda,
            "Comanda removida com sucesso",
        ))),
        Ok(None) => Err(falha(StatusCode::NOT_FOUND, "Comanda não encontrada")),
        Err(erro) => {
            log::error!("erro ao deletar comanda {id}: {erro:#}");
            Err(falha_interna("Erro ao deletar comanda"))
        }
    }
}
