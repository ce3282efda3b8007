use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::ErroValidacao;

/// Item do cardápio como persistido (id gerado pelo banco).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCardapio {
    pub id: i64,
    pub nome: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub preco: Decimal,
    pub descricao: Option<String>,
}

/// Entrada já validada para criação ou substituição de um item.
#[derive(Debug, Clone, PartialEq)]
pub struct NovoItemCardapio {
    pub nome: String,
    pub preco: Decimal,
    pub descricao: Option<String>,
}

/// Corpo bruto de POST/PUT em /api/cardapio. Todos os campos são opcionais
/// para que a validação (e não o extrator de JSON) produza as mensagens de
/// erro do contrato.
#[derive(Debug, Clone, Deserialize)]
pub struct CriarItemCardapio {
    pub nome: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub preco: Option<Decimal>,
    pub descricao: Option<String>,
}

impl CriarItemCardapio {
    pub fn validar(self) -> Result<NovoItemCardapio, ErroValidacao> {
        let nome = self
            .nome
            .map(|nome| nome.trim().to_string())
            .filter(|nome| !nome.is_empty())
            .ok_or(ErroValidacao::CamposItemObrigatorios)?;

        let preco = self.preco.ok_or(ErroValidacao::CamposItemObrigatorios)?;
        if preco <= Decimal::ZERO {
            return Err(ErroValidacao::PrecoInvalido);
        }

        Ok(NovoItemCardapio {
            nome,
            preco,
            descricao: self.descricao,
        })
    }
}
