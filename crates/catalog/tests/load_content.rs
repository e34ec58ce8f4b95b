use std::io::Write;

use axum::{http::StatusCode, routing::get, Router};
use storefront_catalog::{ContentSource, ContentStore, LoadFailure};
use storefront_core::ProductId;

const DOCUMENT: &str = r#"{
    "brand": {"name": "Barboss Room", "slogan": "Premium streetwear."},
    "products": [
        {"id": "si-ghost-pants-001", "name": "Ghost Pants", "brand": "Stone Island",
         "category": "pants", "price": 1450, "sizes": ["M", "L"], "new": true,
         "img": "/assets/products/si-pants-real.jpg"},
        {"id": "cp-shirt-001", "name": "Overshirt", "brand": "C.P. Company",
         "category": "shirts", "price": 800, "sold": true, "img": "/assets/products/cp.jpg"}
    ],
    "categories": [{"name": "Pants", "url": "shop.html?cat=pants"}],
    "brands": ["Stone Island", "C.P. Company"],
    "lookbook": [{"img": "/assets/lookbook/look-01.jpg", "title": "Street Legend"}]
}"#;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(app: Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn assert_fixture_catalog(store: &ContentStore) {
    assert_eq!(store.products().len(), 2);
    assert_eq!(store.products()[0].id.as_str(), "si-ghost-pants-001");
    assert!(store.product(&ProductId::new("cp-shirt-001")).unwrap().is_sold);
    assert_eq!(store.categories().len(), 1);
    assert_eq!(store.brands(), ["Stone Island", "C.P. Company"]);
    assert_eq!(store.lookbook()[0].title.as_deref(), Some("Street Legend"));
}

#[tokio::test]
async fn loads_document_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DOCUMENT.as_bytes()).unwrap();

    let store = ContentStore::load(&ContentSource::file(file.path()))
        .await
        .unwrap();
    assert_fixture_catalog(&store);
}

#[tokio::test]
async fn malformed_file_falls_back_to_empty_catalog() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"products\": [").unwrap();
    let source = ContentSource::file(file.path());

    assert!(matches!(
        ContentStore::load(&source).await,
        Err(LoadFailure::Parse(_))
    ));
    let store = ContentStore::load_or_empty(&source).await;
    assert!(store.is_empty());
    assert_eq!(store.brand_header().slogan, "Premium streetwear.");
}

#[tokio::test]
async fn loads_document_over_http() {
    let app = Router::new().route("/content.json", get(|| async { DOCUMENT }));
    let server = TestServer::spawn(app).await;

    let source = ContentSource::url(format!("{}/content.json", server.base_url));
    let store = ContentStore::load(&source).await.unwrap();
    assert_fixture_catalog(&store);
}

#[tokio::test]
async fn http_error_status_is_a_load_failure() {
    let app = Router::new().route("/content.json", get(|| async { StatusCode::NOT_FOUND }));
    let server = TestServer::spawn(app).await;

    let source = ContentSource::url(format!("{}/content.json", server.base_url));
    assert!(matches!(
        ContentStore::load(&source).await,
        Err(LoadFailure::Http { .. })
    ));
    assert!(ContentStore::load_or_empty(&source).await.is_empty());
}
