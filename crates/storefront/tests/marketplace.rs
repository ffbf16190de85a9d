//! Marketplace client tests against a stub backend.
//!
//! Each test spins up a tiny axum server on an ephemeral port that plays
//! the marketplace backend, then drives the real client against it.

use std::sync::Arc;

use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;

use feira_astral_core::Category;
use feira_astral_storefront::config::MarketplaceConfig;
use feira_astral_storefront::marketplace::{MarketplaceClient, MarketplaceError};

/// Start a stub backend and return a client pointed at it.
async fn client_for(app: Router) -> MarketplaceClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });

    MarketplaceClient::new(&MarketplaceConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: 5,
    })
}

fn catalog_body() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "descricao": "Banana prata",
            "preco": 5.50,
            "medida": "kg",
            "qtdEstoque": 12,
            "categoria": "FRUTAS",
            "imagem": "https://cdn.example.com/banana.jpg",
            "disponivel": true,
            "produtor": {
                "id": 10,
                "nome": "Sítio Boa Vista",
                "disponivel": true,
                "telefone": "11999990000"
            }
        },
        {
            "id": 2,
            "descricao": "Alface crespa",
            "preco": 3.0,
            "medida": "unidade",
            "qtdEstoque": 30,
            "categoria": "VERDURAS",
            "imagem": "https://cdn.example.com/alface.jpg",
            "disponivel": true,
            "produtor": {
                "id": 10,
                "nome": "Sítio Boa Vista",
                "disponivel": true,
                "telefone": "11999990000"
            }
        }
    ])
}

#[tokio::test]
async fn get_products_decodes_and_maps_fields() {
    let app = Router::new().route(
        "/produto",
        get(|| async { axum::Json(catalog_body()) }),
    );
    let client = client_for(app).await;

    let products = client.get_products().await.expect("catalog fetch");

    assert_eq!(products.len(), 2);
    let banana = &products[0];
    assert_eq!(banana.id.as_i64(), 1);
    assert_eq!(banana.description, "Banana prata");
    assert_eq!(banana.unit, "kg");
    assert_eq!(banana.stock_quantity, 12);
    assert_eq!(banana.category, Category::Frutas);
    assert_eq!(banana.price.to_string(), "R$ 5.50");
    assert_eq!(banana.producer.name, "Sítio Boa Vista");
}

#[tokio::test]
async fn get_products_shares_producers_within_batch() {
    let app = Router::new().route(
        "/produto",
        get(|| async { axum::Json(catalog_body()) }),
    );
    let client = client_for(app).await;

    let products = client.get_products().await.expect("catalog fetch");

    // Both records name the same producer, so the batch carries one
    // shared allocation rather than two copies.
    assert!(Arc::ptr_eq(&products[0].producer, &products[1].producer));
}

#[tokio::test]
async fn get_products_rejects_malformed_body() {
    let app = Router::new().route("/produto", get(|| async { "not json" }));
    let client = client_for(app).await;

    let err = client.get_products().await.expect_err("parse failure");
    assert!(matches!(err, MarketplaceError::Parse(_)));
}

#[tokio::test]
async fn get_products_rejects_unknown_category() {
    let app = Router::new().route(
        "/produto",
        get(|| async {
            axum::Json(json!([
                {
                    "id": 1,
                    "descricao": "Mistério",
                    "preco": 1.0,
                    "medida": "kg",
                    "qtdEstoque": 1,
                    "categoria": "TEMPEROS",
                    "imagem": "",
                    "disponivel": true,
                    "produtor": {"id": 1, "nome": "X", "disponivel": true, "telefone": ""}
                }
            ]))
        }),
    );
    let client = client_for(app).await;

    let err = client.get_products().await.expect_err("unknown category");
    assert!(matches!(err, MarketplaceError::Parse(_)));
}

#[tokio::test]
async fn get_products_surfaces_backend_status() {
    let app = Router::new().route(
        "/produto",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response() }),
    );
    let client = client_for(app).await;

    let err = client.get_products().await.expect_err("status failure");
    assert!(
        matches!(err, MarketplaceError::Status(status) if status == StatusCode::INTERNAL_SERVER_ERROR)
    );
}

#[tokio::test]
async fn is_open_true_only_on_200() {
    let app = Router::new().route("/feira/aberta", get(|| async { StatusCode::OK }));
    let client = client_for(app).await;
    assert!(client.is_open().await);

    let app = Router::new().route(
        "/feira/aberta",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let client = client_for(app).await;
    assert!(!client.is_open().await);
}

#[tokio::test]
async fn get_products_honors_the_configured_timeout() {
    let app = Router::new().route(
        "/produto",
        get(|| async {
            tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            axum::Json(catalog_body())
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });

    let client = MarketplaceClient::new(&MarketplaceConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: 1,
    });

    let err = client.get_products().await.expect_err("timed out");
    assert!(matches!(err, MarketplaceError::Http(e) if e.is_timeout()));
}

#[tokio::test]
async fn is_open_false_when_backend_unreachable() {
    // Bind and immediately drop the listener so the port refuses connections
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let client = MarketplaceClient::new(&MarketplaceConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: 1,
    });

    assert!(!client.is_open().await);
}
