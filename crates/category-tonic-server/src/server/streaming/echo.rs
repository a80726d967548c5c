use category_tonic_core::{
    Error,
    category_store::CategoryStore,
    proto::{Category, CreateCategoryRequest},
};
use core::pin::pin;
use tokio::sync::mpsc;
use tokio_stream::{Stream, StreamExt};
use tokio_util::sync::CancellationToken;
use tonic::Status;

/// Creates each category read from `inbound` and immediately sends the
/// result to `tx`.
///
/// Each reply carries the storage-assigned id together with the name and
/// description from the request. The loop ends when:
///
/// - the client half-closes the stream (clean end),
/// - a receive error arrives (forwarded to the client unchanged),
/// - storage fails (forwarded as the raw storage error),
/// - the client stops listening (`tx` closed; nothing is sent), or
/// - `shutdown` is cancelled (`UNAVAILABLE` is always the last reply, even
///   while a send is waiting on a full buffer).
///
/// Returns the number of categories created.
pub async fn echo_creates<S, I>(
    store: &S,
    inbound: I,
    tx: mpsc::Sender<Result<Category, Status>>,
    shutdown: CancellationToken,
) -> u64
where
    S: CategoryStore,
    I: Stream<Item = Result<CreateCategoryRequest, Status>>,
{
    let mut inbound = pin!(inbound);
    let mut created = 0;

    loop {
        let next = tokio::select! {
            biased;
            () = shutdown.cancelled() => {
                report_shutdown(&tx).await;
                break;
            }
            () = tx.closed() => {
                #[cfg(feature = "tracing")]
                tracing::debug!("client stopped listening");
                break;
            }
            next = inbound.next() => next,
        };

        let request = match next {
            Some(Ok(request)) => request,
            Some(Err(status)) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("receive failed: {}", status);
                send(&tx, Err(status), &shutdown).await;
                break;
            }
            None => break,
        };

        let stored = match store
            .create(request.name.clone(), request.description.clone())
            .await
        {
            Ok(stored) => stored,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("create failed: {}", e);
                send(&tx, Err(Error::Store(e).into()), &shutdown).await;
                break;
            }
        };
        created += 1;

        if !send(&tx, Ok(request.into_echo(stored.id)), &shutdown).await {
            break;
        }
    }

    created
}

/// Waits for room in the reply buffer, giving up if the client goes away or
/// the service shuts down. Returns `true` if `reply` was queued.
async fn send(
    tx: &mpsc::Sender<Result<Category, Status>>,
    reply: Result<Category, Status>,
    shutdown: &CancellationToken,
) -> bool {
    tokio::select! {
        biased;
        () = shutdown.cancelled() => {
            report_shutdown(tx).await;
            false
        }
        sent = tx.send(reply) => {
            #[cfg(feature = "tracing")]
            if let Err(e) = &sent {
                tracing::debug!("failed to send reply: {}", e);
            }
            sent.is_ok()
        }
    }
}

/// Queues `UNAVAILABLE` as the final reply. Waits for the client to drain a
/// full buffer so the stream never ends looking like a clean finish.
async fn report_shutdown(tx: &mpsc::Sender<Result<Category, Status>>) {
    tokio::select! {
        biased;
        () = tx.closed() => {}
        _ = tx.send(Err(Error::ServiceShutdown.into())) => {}
    }
}
