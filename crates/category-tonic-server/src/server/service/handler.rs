//! gRPC service implementation for categories.
//!
//! [`CategoryHandler`] implements the generated [`CategoryService`] trait by
//! translating wire requests into [`CategoryStore`] calls and storage records
//! back into wire messages. It keeps no state between calls beyond a shared
//! store handle, its configuration, and a shutdown token.
//!
//! ## Error reporting
//!
//! - Unary calls and `CreateCategoryStream` report any storage or receive
//!   failure as `INTERNAL`.
//! - `CreateCategoryBiDiStream` forwards failures without translation.
//!
//! See [`category_tonic_core::Error`] for the exact mapping.

use crate::server::{
    config::ServerConfig,
    streaming::{collect::collect_creates, echo::echo_creates},
    telemetry::{
        InflightStream, increment_categories_created, increment_errors, increment_requests,
    },
};
use category_tonic_core::{
    Error,
    category_store::CategoryStore,
    proto::{
        Blank, Category, CategoryGetRequest, CategoryList, CategoryResponse,
        CreateCategoryRequest, category_service_server::CategoryService,
    },
};
use core::pin::Pin;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_stream::{Stream, wrappers::ReceiverStream};
use tokio_util::sync::CancellationToken;
use tonic::{Request, Response, Status, Streaming};

const CREATE_CATEGORY: &str = "CreateCategory";
const LIST_CATEGORIES: &str = "ListCategories";
const GET_CATEGORY: &str = "GetCategory";
const CREATE_CATEGORY_STREAM: &str = "CreateCategoryStream";
const CREATE_CATEGORY_BIDI_STREAM: &str = "CreateCategoryBiDiStream";

/// The `CategoryService` implementation, generic over its storage backend.
///
/// Cloning is cheap; clones share the store and the shutdown token.
pub struct CategoryHandler<S> {
    store: Arc<S>,
    config: ServerConfig,
    shutdown: CancellationToken,
}

impl<S> Clone for CategoryHandler<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
            shutdown: self.shutdown.clone(),
        }
    }
}

impl<S: CategoryStore> CategoryHandler<S> {
    pub fn new(store: S, config: ServerConfig) -> Self {
        Self::with_shared_store(Arc::new(store), config)
    }

    /// Creates a handler over a store that the caller keeps a handle to.
    pub fn with_shared_store(store: Arc<S>, config: ServerConfig) -> Self {
        Self {
            store,
            config,
            shutdown: CancellationToken::new(),
        }
    }

    /// Ends every open stream with `UNAVAILABLE` and rejects new ones.
    ///
    /// Unary calls are unaffected; the transport drains them.
    pub fn shutdown(&self) {
        #[cfg(feature = "tracing")]
        tracing::info!("Cancelling open category streams");
        self.shutdown.cancel();
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }
}

/// Counts the call and, on failure, the error before handing the status to
/// tonic.
fn finish<T>(rpc: &'static str, result: Result<T, Error>) -> Result<Response<T>, Status> {
    match result {
        Ok(message) => Ok(Response::new(message)),
        Err(e) => {
            increment_errors(rpc);
            #[cfg(feature = "tracing")]
            tracing::warn!(rpc, "{}", e);
            Err(e.into())
        }
    }
}

#[tonic::async_trait]
impl<S: CategoryStore> CategoryService for CategoryHandler<S> {
    type CreateCategoryBiDiStreamStream =
        Pin<Box<dyn Stream<Item = Result<Category, Status>> + Send>>;

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(name = %req.get_ref().name)))]
    async fn create_category(
        &self,
        req: Request<CreateCategoryRequest>,
    ) -> Result<Response<CategoryResponse>, Status> {
        increment_requests(CREATE_CATEGORY);
        let CreateCategoryRequest { name, description } = req.into_inner();

        let result = self
            .store
            .create(name, description)
            .await
            .map(|category| {
                increment_categories_created(1);
                CategoryResponse::from(category)
            })
            .map_err(Error::Create);
        finish(CREATE_CATEGORY, result)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    async fn list_categories(
        &self,
        _req: Request<Blank>,
    ) -> Result<Response<CategoryList>, Status> {
        increment_requests(LIST_CATEGORIES);

        let result = self
            .store
            .find_all()
            .await
            .map(CategoryList::from_iter)
            .map_err(Error::List);
        finish(LIST_CATEGORIES, result)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(id = %req.get_ref().id)))]
    async fn get_category(
        &self,
        req: Request<CategoryGetRequest>,
    ) -> Result<Response<Category>, Status> {
        increment_requests(GET_CATEGORY);

        let result = self
            .store
            .find(&req.get_ref().id)
            .await
            .map(Category::from)
            .map_err(Error::Get);
        finish(GET_CATEGORY, result)
    }

    /// Creates every streamed category and replies once, after the client
    /// half-closes, with all of them in input order.
    ///
    /// Runs inside the call's own future: a cancelled call drops any
    /// in-flight create.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    async fn create_category_stream(
        &self,
        req: Request<Streaming<CreateCategoryRequest>>,
    ) -> Result<Response<CategoryList>, Status> {
        increment_requests(CREATE_CATEGORY_STREAM);
        let _inflight = InflightStream::start(CREATE_CATEGORY_STREAM);

        let result = collect_creates(&*self.store, req.into_inner(), &self.shutdown)
            .await
            .inspect(|list| increment_categories_created(list.categories.len() as u64));
        finish(CREATE_CATEGORY_STREAM, result)
    }

    /// Creates each streamed category and replies with it right away.
    ///
    /// The receive loop runs on its own task and stops as soon as the client
    /// drops the response stream.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    async fn create_category_bi_di_stream(
        &self,
        req: Request<Streaming<CreateCategoryRequest>>,
    ) -> Result<Response<Self::CreateCategoryBiDiStreamStream>, Status> {
        increment_requests(CREATE_CATEGORY_BIDI_STREAM);

        if self.is_shutting_down() {
            increment_errors(CREATE_CATEGORY_BIDI_STREAM);
            return Err(Error::ServiceShutdown.into());
        }

        let (tx, rx) = mpsc::channel(self.config.stream_buffer_size);
        let store = Arc::clone(&self.store);
        let shutdown = self.shutdown.clone();
        let inbound = req.into_inner();

        let fut = async move {
            let _inflight = InflightStream::start(CREATE_CATEGORY_BIDI_STREAM);
            let created = echo_creates(&*store, inbound, tx, shutdown).await;
            increment_categories_created(created);
        };
        #[cfg(feature = "tracing")]
        let fut = {
            use tracing::Instrument;
            fut.instrument(tracing::info_span!("bidi_stream"))
        };

        tokio::spawn(fut);

        Ok(Response::new(Box::pin(ReceiverStream::new(rx))))
    }
}
