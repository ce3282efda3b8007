use anyhow::Result;
use chrono::Utc;
use parking_lot::RwLock;

use crate::model::{
    Comanda, ItemCardapio, NovaComanda, NovoItemCardapio, StatusComanda,
};
use crate::store::traits::{CardapioStore, ComandaStore, Store};

/// Implementação em memória dos mesmos contratos do `PostgresStore`, com
/// contadores próprios de id. Serve de dublê nos testes de rota e permite
/// subir a API sem banco.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    cardapio: Vec<ItemCardapio>,
    comandas: Vec<Comanda>,
    ultimo_id_item: i64,
    ultimo_id_comanda: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CardapioStore for MemoryStore {
    async fn listar_itens(&self) -> Result<Vec<ItemCardapio>> {
        Ok(self.inner.read().cardapio.clone())
    }

    async fn obter_item(&self, id: i64) -> Result<Option<ItemCardapio>> {
        Ok(self
            .inner
            .read()
            .cardapio
            .iter()
            .find(|item| item.id == id)
            .cloned())
    }

    async fn criar_item(&self, novo: NovoItemCardapio) -> Result<ItemCardapio> {
        let mut inner = self.inner.write();
        inner.ultimo_id_item += 1;
        let item = ItemCardapio {
            id: inner.ultimo_id_item,
            nome: novo.nome,
            preco: novo.preco,
            descricao: novo.descricao,
        };
        inner.cardapio.push(item.clone());
        Ok(item)
    }

    async fn atualizar_item(
        &self,
        id: i64,
        dados: NovoItemCardapio,
    ) -> Result<Option<ItemCardapio>> {
        let mut inner = self.inner.write();
        let Some(item) = inner.cardapio.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };
        item.nome = dados.nome;
        item.preco = dados.preco;
        item.descricao = dados.descricao;
        Ok(Some(item.clone()))
    }

    async fn remover_item(&self, id: i64) -> Result<Option<ItemCardapio>> {
        let mut inner = self.inner.write();
        let Some(posicao) = inner.cardapio.iter().position(|item| item.id == id) else {
            return Ok(None);
        };
        Ok(Some(inner.cardapio.remove(posicao)))
    }
}

#[async_trait::async_trait]
impl ComandaStore for MemoryStore {
    async fn listar_comandas(&self) -> Result<Vec<Comanda>> {
        // Inserção é cronológica, então a ordem inversa é "mais recente primeiro".
        Ok(self.inner.read().comandas.iter().rev().cloned().collect())
    }

    async fn obter_comanda(&self, id: i64) -> Result<Option<Comanda>> {
        Ok(self
            .inner
            .read()
            .comandas
            .iter()
            .find(|comanda| comanda.id == id)
            .cloned())
    }

    async fn listar_por_mesa(&self, mesa: i32) -> Result<Vec<Comanda>> {
        Ok(self
            .inner
            .read()
            .comandas
            .iter()
            .rev()
            .filter(|comanda| comanda.mesa == mesa)
            .cloned()
            .collect())
    }

    async fn criar_comanda(&self, nova: NovaComanda) -> Result<Comanda> {
        let mut inner = self.inner.write();
        inner.ultimo_id_comanda += 1;
        let agora = Utc::now();
        let comanda = Comanda {
            id: inner.ultimo_id_comanda,
            mesa: nova.mesa,
            status: StatusComanda::Pendente,
            itens: nova.itens,
            total: nova.total,
            criado_em: agora,
            atualizado_em: agora,
        };
        inner.comandas.push(comanda.clone());
        Ok(comanda)
    }

    async fn atualizar_status(
        &self,
        id: i64,
        status: StatusComanda,
    ) -> Result<Option<Comanda>> {
        let mut inner = self.inner.write();
        let Some(comanda) = inner.comandas.iter_mut().find(|comanda| comanda.id == id) else {
            return Ok(None);
        };
        comanda.status = status;
        comanda.atualizado_em = Utc::now();
        Ok(Some(comanda.clone()))
    }

    async fn remover_comanda(&self, id: i64) -> Result<Option<Comanda>> {
        let mut inner = self.inner.write();
        let Some(posicao) = inner.comandas.iter().position(|comanda| comanda.id == id) else {
            return Ok(None);
        };
        Ok(Some(inner.comandas.remove(posicao)))
    }
}

impl Store for MemoryStore {}
