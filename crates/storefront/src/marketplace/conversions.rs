//! Conversions from backend wire records to domain types.

use std::collections::HashMap;
use std::sync::Arc;

use feira_astral_core::{Price, Producer, ProducerId, Product};

use super::types::{ProducerRecord, ProductRecord};

fn convert_producer(record: ProducerRecord) -> Producer {
    Producer {
        id: record.id,
        name: record.nome,
        available: record.disponivel,
        phone: record.telefone,
    }
}

/// Materialize a full catalog response into domain products.
///
/// Producers are shared: every product from the same vendor points at one
/// `Arc<Producer>`, keyed by producer id. The whole batch is converted
/// before anything is returned, so callers never observe a partially
/// converted catalog.
pub fn convert_catalog(records: Vec<ProductRecord>) -> Vec<Product> {
    let mut producers: HashMap<ProducerId, Arc<Producer>> = HashMap::new();

    records
        .into_iter()
        .map(|record| {
            let producer = Arc::clone(
                producers
                    .entry(record.produtor.id)
                    .or_insert_with(|| Arc::new(convert_producer(record.produtor))),
            );

            Product {
                id: record.id,
                description: record.descricao,
                price: Price::new(record.preco),
                unit: record.medida,
                stock_quantity: record.qtd_estoque,
                category: record.categoria,
                image: record.imagem,
                available: record.disponivel,
                producer,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use feira_astral_core::{Category, ProductId};
    use rust_decimal::Decimal;

    fn record(id: i64, producer_id: i64) -> ProductRecord {
        ProductRecord {
            id: ProductId::new(id),
            descricao: format!("produto {id}"),
            preco: Decimal::new(250, 2),
            medida: "kg".to_string(),
            qtd_estoque: 5,
            categoria: Category::Legumes,
            imagem: "img.png".to_string(),
            disponivel: true,
            produtor: ProducerRecord {
                id: ProducerId::new(producer_id),
                nome: format!("produtor {producer_id}"),
                disponivel: true,
                telefone: "27999990000".to_string(),
            },
        }
    }

    #[test]
    fn test_producers_are_deduplicated_by_id() {
        let products = convert_catalog(vec![record(1, 10), record(2, 10), record(3, 11)]);

        assert_eq!(products.len(), 3);
        assert!(Arc::ptr_eq(&products[0].producer, &products[1].producer));
        assert!(!Arc::ptr_eq(&products[0].producer, &products[2].producer));
        assert_eq!(products[2].producer.name, "produtor 11");
    }

    #[test]
    fn test_fields_map_onto_domain_product() {
        let products = convert_catalog(vec![record(7, 1)]);
        let product = &products[0];

        assert_eq!(product.id, ProductId::new(7));
        assert_eq!(product.description, "produto 7");
        assert_eq!(product.price, Price::from_centavos(250));
        assert_eq!(product.unit, "kg");
        assert_eq!(product.stock_quantity, 5);
        assert_eq!(product.category, Category::Legumes);
        assert!(product.available);
    }
}
