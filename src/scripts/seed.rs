//! Popula o banco com os dados iniciais do cardápio e das comandas.
//!
//! Operação em lote de execução única: valida a configuração, abre uma
//! transação, roda os seeders em ordem de dependência e encerra o processo
//! com código 0 (sucesso) ou 1 (falha). Nunca deixa dados parciais: qualquer
//! erro reverte a transação inteira.

use restaurante_api::config::AppConfig;
use restaurante_api::seed;
use restaurante_api::store::PostgresStore;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    match executar().await {
        Ok(relatorio) => {
            println!("Seed concluído com sucesso:");
            for (tabela, inseridos) in relatorio {
                println!("   {tabela}: {inseridos} linhas");
            }
            std::process::exit(0);
        }
        Err(erro) => {
            eprintln!("Erro ao popular o banco de dados: {erro:#}");
            if let Some(codigo) = codigo_do_banco(&erro) {
                eprintln!("Código do erro no banco: {codigo}");
            }
            eprintln!();
            eprintln!("Possíveis causas:");
            eprintln!("   1. PostgreSQL não está rodando");
            eprintln!("   2. Credenciais erradas no .env (DATABASE_URL)");
            eprintln!("   3. Permissões insuficientes no banco de dados");
            std::process::exit(1);
        }
    }
}

async fn executar() -> anyhow::Result<Vec<(&'static str, u64)>> {
    let config = AppConfig::load()?;
    // Sem alvo configurado o seed nem tenta conectar.
    let database_url = config.require_database_url()?;

    let store = PostgresStore::new(&database_url).await?;
    store.migrate().await?;

    let resultado = seed::executar_seed(store.pool()).await;

    // Devolve a conexão e fecha o pool antes de sair, com ou sem erro, para
    // nenhuma conexão manter o processo vivo.
    store.pool().close().await;

    resultado
}

fn codigo_do_banco(erro: &anyhow::Error) -> Option<String> {
    erro.downcast_ref::<sqlx::Error>()
        .and_then(|erro| erro.as_database_error())
        .and_then(|erro| erro.code())
        .map(|codigo| codigo.into_owned())
}
