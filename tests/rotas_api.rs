use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use restaurante_api::api::routes::create_router;
use restaurante_api::store::MemoryStore;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> axum::Router {
    create_router().with_state(Arc::new(MemoryStore::new()))
}

async fn requisicao(
    app: &axum::Router,
    metodo: Method,
    caminho: &str,
    corpo: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(metodo).uri(caminho);
    let request = match corpo {
        Some(corpo) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(corpo.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resposta = app.clone().oneshot(request).await.unwrap();
    let status = resposta.status();
    let bytes = axum::body::to_bytes(resposta.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn corpo_comanda(mesa: i64) -> Value {
    json!({
        "mesa": mesa,
        "itens": [
            {"id": 1, "nome": "Prato Feito", "quantidade": 2, "preco_unitario": 13.0, "subtotal": 26.0},
            {"id": 2, "nome": "Suco de Laranja", "quantidade": 2, "preco_unitario": 8.0, "subtotal": 16.0}
        ],
        "total": 42.0
    })
}

#[tokio::test]
async fn health_check_responde() {
    let app = app();
    let (status, json) = requisicao(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn criar_item_devolve_201_e_busca_devolve_o_mesmo() {
    let app = app();

    let (status, json) = requisicao(
        &app,
        Method::POST,
        "/api/cardapio",
        Some(json!({"nome": "Suco", "preco": 8.0})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["sucesso"], true);
    assert_eq!(json["dados"]["id"], 1);
    assert_eq!(json["dados"]["preco"], 8.0);
    assert_eq!(json["dados"]["descricao"], Value::Null);

    let criado = json["dados"].clone();
    let (status, json) = requisicao(&app, Method::GET, "/api/cardapio/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["dados"], criado);
}

#[tokio::test]
async fn criar_item_sem_preco_devolve_400_nomeando_os_campos() {
    let app = app();
    let (status, json) = requisicao(
        &app,
        Method::POST,
        "/api/cardapio",
        Some(json!({"nome": "Suco"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["sucesso"], false);
    assert_eq!(json["mensagem"], "Nome e preço são obrigatórios");
    assert!(json.get("dados").is_none());
}

#[tokio::test]
async fn ids_gerados_sao_distintos_e_crescentes() {
    let app = app();
    for (esperado, nome) in [(1, "Suco"), (2, "Doce"), (3, "Pizza")] {
        let (_, json) = requisicao(
            &app,
            Method::POST,
            "/api/cardapio",
            Some(json!({"nome": nome, "preco": 10.0})),
        )
        .await;
        assert_eq!(json["dados"]["id"], esperado);
    }
}

#[tokio::test]
async fn id_malformado_devolve_400_no_envelope() {
    let app = app();
    for caminho in ["/api/cardapio/abc", "/api/cardapio/0", "/api/cardapio/-2"] {
        let (status, json) = requisicao(&app, Method::GET, caminho, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["mensagem"], "ID inválido. Deve ser um número positivo.");
    }
}

#[tokio::test]
async fn item_inexistente_devolve_404() {
    let app = app();
    let (status, json) = requisicao(&app, Method::GET, "/api/cardapio/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["mensagem"], "Item não encontrado no cardápio");
}

#[tokio::test]
async fn atualizar_item_inexistente_devolve_404_sem_criar_linha() {
    let app = app();
    let (status, _) = requisicao(
        &app,
        Method::PUT,
        "/api/cardapio/42",
        Some(json!({"nome": "Suco", "preco": 9.0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, json) = requisicao(&app, Method::GET, "/api/cardapio", None).await;
    assert_eq!(json["dados"], json!([]));
}

#[tokio::test]
async fn atualizar_item_substitui_os_campos() {
    let app = app();
    requisicao(
        &app,
        Method::POST,
        "/api/cardapio",
        Some(json!({"nome": "Suco", "preco": 8.0, "descricao": "500ml"})),
    )
    .await;

    let (status, json) = requisicao(
        &app,
        Method::PUT,
        "/api/cardapio/1",
        Some(json!({"nome": "Suco de Uva", "preco": 9.5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["dados"]["nome"], "Suco de Uva");
    assert_eq!(json["dados"]["preco"], 9.5);
    assert_eq!(json["dados"]["descricao"], Value::Null);
}

#[tokio::test]
async fn deletar_item_duas_vezes_devolve_sucesso_depois_404() {
    let app = app();
    requisicao(
        &app,
        Method::POST,
        "/api/cardapio",
        Some(json!({"nome": "Suco", "preco": 8.0})),
    )
    .await;

    let (status, json) = requisicao(&app, Method::DELETE, "/api/cardapio/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["dados"]["nome"], "Suco");

    let (status, _) = requisicao(&app, Method::DELETE, "/api/cardapio/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn criar_comanda_comeca_pendente_e_aparece_nas_listagens() {
    let app = app();

    let (status, json) =
        requisicao(&app, Method::POST, "/api/comandas", Some(corpo_comanda(5))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["dados"]["status"], "pendente");
    assert_eq!(json["dados"]["total"], 42.0);
    assert_eq!(json["dados"]["itens"].as_array().unwrap().len(), 2);

    requisicao(&app, Method::POST, "/api/comandas", Some(corpo_comanda(8))).await;

    // Mais recente primeiro
    let (_, json) = requisicao(&app, Method::GET, "/api/comandas", None).await;
    let comandas = json["dados"].as_array().unwrap();
    assert_eq!(comandas.len(), 2);
    assert_eq!(comandas[0]["mesa"], 8);
    assert_eq!(comandas[1]["mesa"], 5);

    let (_, json) = requisicao(&app, Method::GET, "/api/comandas/mesa/5", None).await;
    assert_eq!(json["dados"].as_array().unwrap().len(), 1);

    let (_, json) = requisicao(&app, Method::GET, "/api/comandas/mesa/99", None).await;
    assert_eq!(json["dados"], json!([]));
}

#[tokio::test]
async fn criar_comanda_rejeita_corpos_invalidos() {
    let app = app();

    let casos = [
        (
            json!({"mesa": 5, "itens": [{"id": 1, "nome": "Doce", "quantidade": 1, "preco_unitario": 7.0, "subtotal": 7.0}]}),
            "Mesa, itens e total são obrigatórios",
        ),
        (
            json!({"mesa": 5, "itens": [], "total": 10.0}),
            "Itens deve ser um array não vazio",
        ),
        (
            json!({"mesa": 5, "itens": [{"id": 1, "nome": "Doce", "quantidade": 1, "preco_unitario": 7.0, "subtotal": 7.0}], "total": 0.0}),
            "Total deve ser um número positivo",
        ),
    ];

    for (corpo, mensagem) in casos {
        let (status, json) = requisicao(&app, Method::POST, "/api/comandas", Some(corpo)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["mensagem"], mensagem);
    }

    let (_, json) = requisicao(&app, Method::GET, "/api/comandas", None).await;
    assert_eq!(json["dados"], json!([]));
}

#[tokio::test]
async fn patch_atualiza_status_e_renova_timestamp() {
    let app = app();
    let (_, json) =
        requisicao(&app, Method::POST, "/api/comandas", Some(corpo_comanda(5))).await;
    let antes = chrono::DateTime::parse_from_rfc3339(json["dados"]["atualizado_em"].as_str().unwrap())
        .unwrap();

    let (status, json) = requisicao(
        &app,
        Method::PATCH,
        "/api/comandas/1",
        Some(json!({"status": "em_preparo"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["dados"]["status"], "em_preparo");
    let depois = chrono::DateTime::parse_from_rfc3339(json["dados"]["atualizado_em"].as_str().unwrap())
        .unwrap();
    assert!(depois >= antes);
}

#[tokio::test]
async fn patch_com_status_invalido_devolve_400_sem_tocar_na_comanda() {
    let app = app();
    requisicao(&app, Method::POST, "/api/comandas", Some(corpo_comanda(5))).await;

    let (status, json) = requisicao(
        &app,
        Method::PATCH,
        "/api/comandas/1",
        Some(json!({"status": "invalido"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["mensagem"],
        "Status inválido. Use: pendente, em_preparo, pronto, entregue, cancelado"
    );

    let (_, json) = requisicao(&app, Method::GET, "/api/comandas/1", None).await;
    assert_eq!(json["dados"]["status"], "pendente");
}

#[tokio::test]
async fn patch_em_comanda_inexistente_devolve_404() {
    let app = app();
    let (status, json) = requisicao(
        &app,
        Method::PATCH,
        "/api/comandas/42",
        Some(json!({"status": "pronto"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["mensagem"], "Comanda não encontrada");
}

#[tokio::test]
async fn mesa_malformada_devolve_400() {
    let app = app();
    for caminho in ["/api/comandas/mesa/abc", "/api/comandas/mesa/0"] {
        let (status, json) = requisicao(&app, Method::GET, caminho, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["mensagem"], "Número da mesa inválido");
    }
}

#[tokio::test]
async fn deletar_comanda_devolve_a_removida_e_depois_404() {
    let app = app();
    requisicao(&app, Method::POST, "/api/comandas", Some(corpo_comanda(5))).await;

    let (status, json) = requisicao(&app, Method::DELETE, "/api/comandas/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["dados"]["mesa"], 5);
    assert_eq!(json["mensagem"], "Comanda removida com sucesso");

    let (status, _) = requisicao(&app, Method::DELETE, "/api/comandas/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
