use anyhow::{Context, Result};
use serde_json::Value;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use crate::model::{
    Comanda, ItemCardapio, ItemComanda, NovaComanda, NovoItemCardapio, StatusComanda,
};
use crate::store::traits::{CardapioStore, ComandaStore, Store};

#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store with the given database URL
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(20)
            .connect(database_url)
            .await
            .context("Failed to create PostgreSQL connection pool")?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;
        Ok(())
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn mapear_item(row: &PgRow) -> ItemCardapio {
    ItemCardapio {
        id: row.get("id"),
        nome: row.get("nome"),
        preco: row.get("preco"),
        descricao: row.get("descricao"),
    }
}

fn mapear_comanda(row: &PgRow) -> Result<Comanda> {
    let status: String = row.get("status");
    let itens = ItemComanda::do_blob(row.get::<Value, _>("itens"))?;

    Ok(Comanda {
        id: row.get("id"),
        mesa: row.get("mesa"),
        // A coluna tem CHECK nos cinco valores; o fallback cobre dados fora
        // do constraint em bancos antigos.
        status: StatusComanda::parse(&status).unwrap_or(StatusComanda::Pendente),
        itens,
        total: row.get("total"),
        criado_em: row.get("criado_em"),
        atualizado_em: row.get("atualizado_em"),
    })
}

#[async_trait::async_trait]
impl CardapioStore for PostgresStore {
    async fn listar_itens(&self) -> Result<Vec<ItemCardapio>> {
        let rows = sqlx::query("SELECT id, nome, preco, descricao FROM cardapio ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list menu items")?;

        Ok(rows.iter().map(mapear_item).collect())
    }

    async fn obter_item(&self, id: i64) -> Result<Option<ItemCardapio>> {
        let row = sqlx::query("SELECT id, nome, preco, descricao FROM cardapio WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch menu item")?;

        Ok(row.as_ref().map(mapear_item))
    }

    async fn criar_item(&self, novo: NovoItemCardapio) -> Result<ItemCardapio> {
        let row = sqlx::query(
            "INSERT INTO cardapio (nome, preco, descricao) VALUES ($1, $2, $3) \
             RETURNING id, nome, preco, descricao",
        )
        .bind(&novo.nome)
        .bind(novo.preco)
        .bind(&novo.descricao)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert menu item")?;

        Ok(mapear_item(&row))
    }

    async fn atualizar_item(
        &self,
        id: i64,
        dados: NovoItemCardapio,
    ) -> Result<Option<ItemCardapio>> {
        let row = sqlx::query(
            "UPDATE cardapio SET nome = $1, preco = $2, descricao = $3 WHERE id = $4 \
             RETURNING id, nome, preco, descricao",
        )
        .bind(&dados.nome)
        .bind(dados.preco)
        .bind(&dados.descricao)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update menu item")?;

        Ok(row.as_ref().map(mapear_item))
    }

    async fn remover_item(&self, id: i64) -> Result<Option<ItemCardapio>> {
        let row = sqlx::query(
            "DELETE FROM cardapio WHERE id = $1 RETURNING id, nome, preco, descricao",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to delete menu item")?;

        Ok(row.as_ref().map(mapear_item))
    }
}

#[async_trait::async_trait]
impl ComandaStore for PostgresStore {
    async fn listar_comandas(&self) -> Result<Vec<Comanda>> {
        let rows = sqlx::query(
            "SELECT id, mesa, status, itens, total, criado_em, atualizado_em \
             FROM comandas ORDER BY criado_em DESC",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list tickets")?;

        rows.iter().map(mapear_comanda).collect()
    }

    async fn obter_comanda(&self, id: i64) -> Result<Option<Comanda>> {
        let row = sqlx::query(
            "SELECT id, mesa, status, itens, total, criado_em, atualizado_em \
             FROM comandas WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch ticket")?;

        row.as_ref().map(mapear_comanda).transpose()
    }

    async fn listar_por_mesa(&self, mesa: i32) -> Result<Vec<Comanda>> {
        let rows = sqlx::query(
            "SELECT id, mesa, status, itens, total, criado_em, atualizado_em \
             FROM comandas WHERE mesa = $1 ORDER BY criado_em DESC",
        )
        .bind(mesa)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list tickets for table")?;

        rows.iter().map(mapear_comanda).collect()
    }

    async fn criar_comanda(&self, nova: NovaComanda) -> Result<Comanda> {
        let itens = serde_json::to_value(&nova.itens)
            .context("Failed to serialize ticket items")?;

        let row = sqlx::query(
            "INSERT INTO comandas (mesa, status, itens, total) VALUES ($1, $2, $3, $4) \
             RETURNING id, mesa, status, itens, total, criado_em, atualizado_em",
        )
        .bind(nova.mesa)
        .bind(StatusComanda::Pendente.as_str())
        .bind(itens)
        .bind(nova.total)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert ticket")?;

        mapear_comanda(&row)
    }

    async fn atualizar_status(
        &self,
        id: i64,
        status: StatusComanda,
    ) -> Result<Option<Comanda>> {
        let row = sqlx::query(
            "UPDATE comandas SET status = $1, atualizado_em = NOW() WHERE id = $2 \
             RETURNING id, mesa, status, itens, total, criado_em, atualizado_em",
        )
        .bind(status.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update ticket status")?;

        row.as_ref().map(mapear_comanda).transpose()
    }

    async fn remover_comanda(&self, id: i64) -> Result<Option<Comanda>> {
        let row = sqlx::query(
            "DELETE FROM comandas WHERE id = $1 \
             RETURNING id, mesa, status, itens, total, criado_em, atualizado_em",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to delete ticket")?;

        row.as_ref().map(mapear_comanda).transpose()
    }
}

impl Store for PostgresStore {}
