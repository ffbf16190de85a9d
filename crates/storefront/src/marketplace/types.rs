//! Wire types for the marketplace backend API.
//!
//! These mirror the backend's JSON exactly (Portuguese field names,
//! camelCase where the backend uses it) and are converted into the domain
//! types from `feira-astral-core` before anything else sees them.

use rust_decimal::Decimal;
use serde::Deserialize;

use feira_astral_core::{Category, ProducerId, ProductId};

/// One record of the `GET /produto` response array.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub descricao: String,
    pub preco: Decimal,
    pub medida: String,
    #[serde(rename = "qtdEstoque")]
    pub qtd_estoque: u32,
    pub categoria: Category,
    pub imagem: String,
    pub disponivel: bool,
    pub produtor: ProducerRecord,
}

/// Nested producer record inside a product record.
#[derive(Debug, Clone, Deserialize)]
pub struct ProducerRecord {
    pub id: ProducerId,
    pub nome: String,
    pub disponivel: bool,
    pub telefone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_backend_record() {
        let json = r#"{
            "id": 3,
            "descricao": "Banana prata",
            "preco": 4.5,
            "medida": "kg",
            "qtdEstoque": 12,
            "categoria": "FRUTAS",
            "imagem": "banana.png",
            "disponivel": true,
            "produtor": {
                "id": 1,
                "nome": "Sitio Boa Vista",
                "disponivel": true,
                "telefone": "27999990000"
            }
        }"#;

        let record: ProductRecord = serde_json::from_str(json).expect("valid record");
        assert_eq!(record.id, ProductId::new(3));
        assert_eq!(record.descricao, "Banana prata");
        assert_eq!(record.preco, Decimal::new(45, 1));
        assert_eq!(record.qtd_estoque, 12);
        assert_eq!(record.categoria, Category::Frutas);
        assert_eq!(record.produtor.nome, "Sitio Boa Vista");
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let json = r#"{
            "id": 3,
            "descricao": "x",
            "preco": 1,
            "medida": "un",
            "qtdEstoque": 1,
            "categoria": "PEIXES",
            "imagem": "x.png",
            "disponivel": true,
            "produtor": {"id": 1, "nome": "n", "disponivel": true, "telefone": "t"}
        }"#;

        assert!(serde_json::from_str::<ProductRecord>(json).is_err());
    }
}
