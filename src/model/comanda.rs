use anyhow::Context;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::model::ErroValidacao;

/// Estados possíveis de uma comanda. Persistido como texto na coluna
/// `status`, restrita a estes cinco valores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusComanda {
    Pendente,
    EmPreparo,
    Pronto,
    Entregue,
    Cancelado,
}

impl StatusComanda {
    pub const TODOS: [StatusComanda; 5] = [
        StatusComanda::Pendente,
        StatusComanda::EmPreparo,
        StatusComanda::Pronto,
        StatusComanda::Entregue,
        StatusComanda::Cancelado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusComanda::Pendente => "pendente",
            StatusComanda::EmPreparo => "em_preparo",
            StatusComanda::Pronto => "pronto",
            StatusComanda::Entregue => "entregue",
            StatusComanda::Cancelado => "cancelado",
        }
    }

    pub fn parse(texto: &str) -> Option<Self> {
        match texto {
            "pendente" => Some(StatusComanda::Pendente),
            "em_preparo" => Some(StatusComanda::EmPreparo),
            "pronto" => Some(StatusComanda::Pronto),
            "entregue" => Some(StatusComanda::Entregue),
            "cancelado" => Some(StatusComanda::Cancelado),
            _ => None,
        }
    }
}

impl fmt::Display for StatusComanda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Linha de uma comanda: snapshot do item do cardápio no momento do pedido.
/// Alterações posteriores no cardápio não afetam comandas já registradas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemComanda {
    pub id: i64,
    pub nome: String,
    pub quantidade: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub preco_unitario: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}

impl ItemComanda {
    /// Único ponto de desserialização dos itens vindos do banco. A coluna
    /// JSONB pode chegar já estruturada ou como texto codificado, dependendo
    /// de como o driver entregou o valor.
    pub fn do_blob(valor: Value) -> anyhow::Result<Vec<ItemComanda>> {
        match valor {
            Value::String(texto) => {
                serde_json::from_str(&texto).context("itens da comanda armazenados como texto inválido")
            }
            outro => serde_json::from_value(outro)
                .context("itens da comanda em formato inesperado"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comanda {
    pub id: i64,
    pub mesa: i32,
    pub status: StatusComanda,
    pub itens: Vec<ItemComanda>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
}

/// Entrada já validada para criação de uma comanda. O status inicial é
/// sempre `pendente`; o cliente não escolhe.
#[derive(Debug, Clone, PartialEq)]
pub struct NovaComanda {
    pub mesa: i32,
    pub itens: Vec<ItemComanda>,
    pub total: Decimal,
}

/// Corpo bruto de POST /api/comandas.
#[derive(Debug, Clone, Deserialize)]
pub struct CriarComanda {
    pub mesa: Option<i32>,
    pub itens: Option<Vec<ItemComanda>>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total: Option<Decimal>,
}

impl CriarComanda {
    pub fn validar(self) -> Result<NovaComanda, ErroValidacao> {
        let (Some(mesa), Some(itens), Some(total)) = (self.mesa, self.itens, self.total) else {
            return Err(ErroValidacao::CamposComandaObrigatorios);
        };

        if itens.is_empty() {
            return Err(ErroValidacao::ItensVazios);
        }
        if mesa <= 0 {
            return Err(ErroValidacao::MesaInvalida);
        }
        // Total zero também é rejeitado; decisão registrada em DESIGN.md.
        if total <= Decimal::ZERO {
            return Err(ErroValidacao::TotalInvalido);
        }

        Ok(NovaComanda { mesa, itens, total })
    }
}

/// Corpo bruto de PATCH /api/comandas/:id.
#[derive(Debug, Clone, Deserialize)]
pub struct AtualizarStatusComanda {
    pub status: Option<String>,
}

impl AtualizarStatusComanda {
    pub fn validar(&self) -> Result<StatusComanda, ErroValidacao> {
        self.status
            .as_deref()
            .and_then(StatusComanda::parse)
            .ok_or(ErroValidacao::StatusInvalido)
    }
}
