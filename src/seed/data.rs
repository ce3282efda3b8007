//! Datasets fixos do seed. Só dados, nenhuma lógica de INSERT: quem sabe
//! carregar cada tabela é o seeder correspondente.

use rust_decimal::Decimal;

use crate::model::{ItemComanda, NovoItemCardapio, StatusComanda};

/// Registro de comanda do dataset. Diferente de `NovaComanda`, carrega o
/// status: as comandas de exemplo cobrem estados variados do fluxo.
#[derive(Debug, Clone)]
pub struct ComandaSeed {
    pub mesa: i32,
    pub status: StatusComanda,
    pub itens: Vec<ItemComanda>,
    pub total: Decimal,
}

fn item(nome: &str, preco_centavos: i64, descricao: Option<&str>) -> NovoItemCardapio {
    NovoItemCardapio {
        nome: nome.to_string(),
        preco: Decimal::new(preco_centavos, 2),
        descricao: descricao.map(str::to_string),
    }
}

fn linha(id: i64, nome: &str, quantidade: u32, preco_centavos: i64) -> ItemComanda {
    let preco_unitario = Decimal::new(preco_centavos, 2);
    ItemComanda {
        id,
        nome: nome.to_string(),
        quantidade,
        preco_unitario,
        subtotal: preco_unitario * Decimal::from(quantidade),
    }
}

/// Itens do cardápio, na ordem de inserção. Após o TRUNCATE com RESTART
/// IDENTITY eles recebem os ids 1 a 6, que o dataset de comandas referencia.
pub fn cardapio() -> Vec<NovoItemCardapio> {
    vec![
        item("Prato Feito", 1300, Some("Arroz, feijão, bife e salada")),
        item("Suco de Laranja", 800, Some("Suco natural 500ml")),
        item("Hambúrguer Artesanal", 3500, Some("Pão, carne 180g, queijo e batata")),
        item("Pizza Margherita", 4000, Some("Pizza tradicional italiana")),
        item("Refrigerante", 700, Some("Lata 350ml")),
        item("Doce", 700, Some("Sobremesa do dia")),
    ]
}

/// Comandas de exemplo. Os ids dos itens só são válidos porque o seeder do
/// cardápio roda antes, na mesma transação.
pub fn comandas() -> Vec<ComandaSeed> {
    vec![
        ComandaSeed {
            mesa: 5,
            status: StatusComanda::Pendente,
            itens: vec![
                linha(1, "Prato Feito", 2, 1300),
                linha(2, "Suco de Laranja", 2, 800),
            ],
            total: Decimal::new(4200, 2),
        },
        ComandaSeed {
            mesa: 8,
            status: StatusComanda::EmPreparo,
            itens: vec![
                linha(3, "Hambúrguer Artesanal", 1, 3500),
                linha(5, "Refrigerante", 1, 700),
            ],
            total: Decimal::new(4200, 2),
        },
        ComandaSeed {
            mesa: 12,
            status: StatusComanda::Pronto,
            itens: vec![
                linha(4, "Pizza Margherita", 1, 4000),
                linha(2, "Suco de Laranja", 3, 800),
                linha(6, "Doce", 2, 700),
            ],
            total: Decimal::new(7800, 2),
        },
    ]
}
