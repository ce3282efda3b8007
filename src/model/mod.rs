pub mod cardapio;
pub mod comanda;

pub use cardapio::*;
pub use comanda::*;

use thiserror::Error;

/// Rejeições de entrada do cliente. O texto de cada variante é exatamente a
/// mensagem devolvida no envelope com status 400.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ErroValidacao {
    #[error("ID inválido. Deve ser um número positivo.")]
    IdInvalido,
    #[error("Nome e preço são obrigatórios")]
    CamposItemObrigatorios,
    #[error("Preço deve ser um número positivo")]
    PrecoInvalido,
    #[error("Mesa, itens e total são obrigatórios")]
    CamposComandaObrigatorios,
    #[error("Itens deve ser um array não vazio")]
    ItensVazios,
    #[error("Mesa deve ser um número positivo")]
    MesaInvalida,
    #[error("Número da mesa inválido")]
    NumeroMesaInvalido,
    #[error("Total deve ser um número positivo")]
    TotalInvalido,
    #[error("Status inválido. Use: pendente, em_preparo, pronto, entregue, cancelado")]
    StatusInvalido,
}
