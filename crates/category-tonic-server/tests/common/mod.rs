#![allow(dead_code)]

use category_tonic_core::{
    category_store::{Category, CategoryStore, MemoryStore, Result, StoreError},
    proto::{CreateCategoryRequest, category_service_client::CategoryServiceClient},
};
use category_tonic_server::server::{
    config::ServerConfig,
    service::{CategoryHandler, build_category_service},
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::{Channel, Server};

pub fn request(name: &str, description: &str) -> CreateCategoryRequest {
    CreateCategoryRequest {
        name: name.to_string(),
        description: description.to_string(),
    }
}

/// Store that can fail a chosen create call and can store names that differ
/// from the requested ones.
#[derive(Default)]
pub struct FlakyStore {
    pub records: MemoryStore,
    creates: AtomicUsize,
    fail_create_at: Option<usize>,
    store_suffix: Option<&'static str>,
}

impl FlakyStore {
    pub fn failing_create_at(n: usize) -> Self {
        Self {
            fail_create_at: Some(n),
            ..Self::default()
        }
    }

    pub fn with_suffix(suffix: &'static str) -> Self {
        Self {
            store_suffix: Some(suffix),
            ..Self::default()
        }
    }
}

impl CategoryStore for FlakyStore {
    async fn create(&self, name: String, description: String) -> Result<Category> {
        let call = self.creates.fetch_add(1, Ordering::SeqCst);
        if self.fail_create_at == Some(call) {
            return Err(StoreError::unavailable("disk on fire"));
        }
        let (name, description) = match self.store_suffix {
            Some(suffix) => (format!("{name}{suffix}"), format!("{description}{suffix}")),
            None => (name, description),
        };
        self.records.create(name, description).await
    }

    async fn find_all(&self) -> Result<Vec<Category>> {
        self.records.find_all().await
    }

    async fn find(&self, id: &str) -> Result<Category> {
        self.records.find(id).await
    }
}

pub struct TestServer<S> {
    pub client: CategoryServiceClient<Channel>,
    pub handler: CategoryHandler<S>,
    pub store: Arc<S>,
}

/// Serves `store` on an ephemeral local port and connects a client to it.
pub async fn spawn_server<S: CategoryStore>(store: S) -> TestServer<S> {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let store = Arc::new(store);
    let handler = CategoryHandler::with_shared_store(Arc::clone(&store), ServerConfig::default());
    let service = build_category_service(handler.clone());

    tokio::spawn(async move {
        Server::builder()
            .add_service(service)
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    let client = CategoryServiceClient::connect(format!("http://{addr}"))
        .await
        .unwrap();

    TestServer {
        client,
        handler,
        store,
    }
}
