use anyhow::{Context, Result};
use sqlx::PgConnection;

use crate::seed::data;

/// Reset determinístico de uma tabela dentro de uma transação maior.
///
/// O seeder recebe a conexão transacional e nada mais: trunca a sua tabela
/// (zerando o contador de ids), insere o dataset em ordem com parâmetros
/// vinculados e propaga o primeiro erro sem limpeza parcial. Commit e
/// rollback são exclusivos do maestro.
#[async_trait::async_trait]
pub trait Seeder: Send + Sync {
    /// Tabela que este seeder repovoa.
    fn tabela(&self) -> &'static str;

    /// Tabelas que precisam ter sido semeadas antes desta.
    fn depende_de(&self) -> &'static [&'static str] {
        &[]
    }

    /// Trunca e insere; devolve quantas linhas entraram.
    async fn executar(&self, conn: &mut PgConnection) -> Result<u64>;
}

pub struct CardapioSeeder;

#[async_trait::async_trait]
impl Seeder for CardapioSeeder {
    fn tabela(&self) -> &'static str {
        "cardapio"
    }

    async fn executar(&self, conn: &mut PgConnection) -> Result<u64> {
        // RESTART IDENTITY faz o próximo id voltar a 1; o dataset de
        // comandas conta com os ids 1 a 6.
        sqlx::query("TRUNCATE TABLE cardapio RESTART IDENTITY CASCADE")
            .execute(&mut *conn)
            .await
            .context("Failed to truncate cardapio")?;

        let mut inseridos = 0;
        for item in data::cardapio() {
            sqlx::query("INSERT INTO cardapio (nome, preco, descricao) VALUES ($1, $2, $3)")
                .bind(&item.nome)
                .bind(item.preco)
                .bind(&item.descricao)
                .execute(&mut *conn)
                .await
                .with_context(|| format!("Failed to insert menu item '{}'", item.nome))?;
            inseridos += 1;
        }

        Ok(inseridos)
    }
}

pub struct ComandasSeeder;

#[async_trait::async_trait]
impl Seeder for ComandasSeeder {
    fn tabela(&self) -> &'static str {
        "comandas"
    }

    fn depende_de(&self) -> &'static [&'static str] {
        &["cardapio"]
    }

    async fn executar(&self, conn: &mut PgConnection) -> Result<u64> {
        sqlx::query("TRUNCATE TABLE comandas RESTART IDENTITY CASCADE")
            .execute(&mut *conn)
            .await
            .context("Failed to truncate comandas")?;

        let mut inseridas = 0;
        for comanda in data::comandas() {
            let itens = serde_json::to_value(&comanda.itens)
                .context("Failed to serialize seed ticket items")?;

            sqlx::query(
                "INSERT INTO comandas (mesa, status, itens, total) VALUES ($1, $2, $3, $4)",
            )
            .bind(comanda.mesa)
            .bind(comanda.status.as_str())
            .bind(itens)
            .bind(comanda.total)
            .execute(&mut *conn)
            .await
            .with_context(|| format!("Failed to insert ticket for table {}", comanda.mesa))?;
            inseridas += 1;
        }

        Ok(inseridas)
    }
}
