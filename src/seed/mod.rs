//! Seed do banco: datasets fixos, seeders por entidade e o maestro que os
//! executa como uma unidade atômica.

pub mod data;
pub mod seeders;

pub use seeders::{CardapioSeeder, ComandasSeeder, Seeder};

use anyhow::{bail, Context, Result};
use sqlx::PgPool;

/// Lista de seeders na ordem de execução. Um seeder novo entra aqui na
/// posição certa, declarando seus antecessores em `Seeder::depende_de`;
/// `validar_ordem` confere a declaração antes de abrir qualquer conexão.
pub fn seeders() -> Vec<Box<dyn Seeder>> {
    vec![Box::new(CardapioSeeder), Box::new(ComandasSeeder)]
}

/// Cada dependência declarada precisa aparecer antes na lista.
pub fn validar_ordem(seeders: &[Box<dyn Seeder>]) -> Result<()> {
    let mut vistos: Vec<&str> = Vec::new();
    for seeder in seeders {
        for dependencia in seeder.depende_de() {
            if !vistos.contains(dependencia) {
                bail!(
                    "seeder de '{}' depende de '{}', que não vem antes na lista",
                    seeder.tabela(),
                    dependencia
                );
            }
        }
        vistos.push(seeder.tabela());
    }
    Ok(())
}

/// Roda todos os seeders registrados em uma única transação, sobre uma única
/// conexão dedicada do pool: ou todos os datasets entram, ou nenhum. Devolve
/// quantas linhas cada tabela recebeu.
pub async fn executar_seed(pool: &PgPool) -> Result<Vec<(&'static str, u64)>> {
    let lista = seeders();
    validar_ordem(&lista)?;

    let mut tx = pool
        .begin()
        .await
        .context("Failed to begin seed transaction")?;
    let mut relatorio = Vec::with_capacity(lista.len());

    for seeder in &lista {
        log::info!("populando tabela: {}", seeder.tabela());
        match seeder.executar(&mut tx).await {
            Ok(inseridos) => relatorio.push((seeder.tabela(), inseridos)),
            Err(erro) => {
                // Reverte tudo que os seeders anteriores fizeram nesta
                // execução, truncates inclusive.
                tx.rollback()
                    .await
                    .context("Failed to roll back seed transaction")?;
                return Err(erro.context(format!(
                    "seed da tabela '{}' falhou; transação revertida",
                    seeder.tabela()
                )));
            }
        }
    }

    tx.commit()
        .await
        .context("Failed to commit seed transaction")?;

    Ok(relatorio)
}
