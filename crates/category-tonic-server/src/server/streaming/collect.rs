use category_tonic_core::{
    Error,
    category_store::CategoryStore,
    proto::{CategoryList, CreateCategoryRequest},
};
use core::pin::pin;
use tokio_stream::{Stream, StreamExt};
use tokio_util::sync::CancellationToken;
use tonic::Status;

/// Creates every category read from `inbound` and returns them, in input
/// order, once the client half-closes the stream.
///
/// The first receive or storage failure aborts the whole call. Categories
/// created before the failure stay persisted but are not reported back.
pub async fn collect_creates<S, I>(
    store: &S,
    inbound: I,
    shutdown: &CancellationToken,
) -> Result<CategoryList, Error>
where
    S: CategoryStore,
    I: Stream<Item = Result<CreateCategoryRequest, Status>>,
{
    let mut inbound = pin!(inbound);
    let mut created = Vec::new();

    loop {
        let next = tokio::select! {
            biased;
            () = shutdown.cancelled() => return Err(Error::ServiceShutdown),
            next = inbound.next() => next,
        };

        let request = match next {
            Some(Ok(request)) => request,
            Some(Err(status)) => return Err(Error::Receive(status)),
            None => break,
        };

        let category = store
            .create(request.name, request.description)
            .await
            .map_err(Error::Create)?;
        created.push(category);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(count = created.len(), "client stream finished");
    Ok(created.into_iter().collect())
}
