use anyhow::Result;

use crate::model::{Comanda, ItemCardapio, NovaComanda, NovoItemCardapio, StatusComanda};

/// Operações sobre o catálogo. Mutações que miram um id devolvem `None`
/// quando a linha não existe; cabe ao handler traduzir isso em 404.
#[async_trait::async_trait]
pub trait CardapioStore: Send + Sync {
    async fn listar_itens(&self) -> Result<Vec<ItemCardapio>>;
    async fn obter_item(&self, id: i64) -> Result<Option<ItemCardapio>>;
    async fn criar_item(&self, novo: NovoItemCardapio) -> Result<ItemCardapio>;
    async fn atualizar_item(&self, id: i64, dados: NovoItemCardapio)
        -> Result<Option<ItemCardapio>>;
    async fn remover_item(&self, id: i64) -> Result<Option<ItemCardapio>>;
}

/// Operações sobre comandas. Listagens vêm da mais recente para a mais
/// antiga; `atualizar_status` devolve o pós-estado com `atualizado_em`
/// renovado.
#[async_trait::async_trait]
pub trait ComandaStore: Send + Sync {
    async fn listar_comandas(&self) -> Result<Vec<Comanda>>;
    async fn obter_comanda(&self, id: i64) -> Result<Option<Comanda>>;
    async fn listar_por_mesa(&self, mesa: i32) -> Result<Vec<Comanda>>;
    async fn criar_comanda(&self, nova: NovaComanda) -> Result<Comanda>;
    async fn atualizar_status(&self, id: i64, status: StatusComanda)
        -> Result<Option<Comanda>>;
    async fn remover_comanda(&self, id: i64) -> Result<Option<Comanda>>;
}

pub trait Store: CardapioStore + ComandaStore + Send + Sync {}
