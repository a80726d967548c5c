mod common;

use category_tonic_core::{
    category_store::{CategoryStore, MemoryStore},
    proto::{Blank, CategoryGetRequest},
};
use common::{FlakyStore, request, spawn_server};
use std::collections::HashSet;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_stream::{StreamExt, wrappers::ReceiverStream};
use tonic::Code;

#[tokio::test]
async fn create_then_get_round_trips_through_the_wire() {
    let mut server = spawn_server(MemoryStore::new()).await;

    let created = server
        .client
        .create_category(request("Books", "Paper and ink"))
        .await
        .unwrap()
        .into_inner()
        .category
        .unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.name, "Books");
    assert_eq!(created.description, "Paper and ink");

    let found = server
        .client
        .get_category(CategoryGetRequest {
            id: created.id.clone(),
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(found, created);
}

#[tokio::test]
async fn list_contains_every_created_category() {
    let mut server = spawn_server(MemoryStore::new()).await;

    let mut created = HashSet::new();
    for (name, description) in [("A", "a"), ("B", "b"), ("C", "c")] {
        let category = server
            .client
            .create_category(request(name, description))
            .await
            .unwrap()
            .into_inner()
            .category
            .unwrap();
        created.insert((category.id, category.name, category.description));
    }

    let listed: HashSet<_> = server
        .client
        .list_categories(Blank {})
        .await
        .unwrap()
        .into_inner()
        .categories
        .into_iter()
        .map(|c| (c.id, c.name, c.description))
        .collect();

    assert_eq!(listed, created);
}

#[tokio::test]
async fn get_unknown_id_is_internal() {
    let mut server = spawn_server(MemoryStore::new()).await;

    let status = server
        .client
        .get_category(CategoryGetRequest {
            id: "nope".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Internal);
    assert!(status.message().starts_with("Error getting category"));
}

#[tokio::test]
async fn create_stream_replies_once_in_input_order() {
    let mut server = spawn_server(MemoryStore::new()).await;

    let list = server
        .client
        .create_category_stream(tokio_stream::iter(vec![
            request("A", "a"),
            request("B", "b"),
        ]))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(list.categories.len(), 2);
    assert_eq!(list.categories[0].name, "A");
    assert_eq!(list.categories[0].description, "a");
    assert_eq!(list.categories[1].name, "B");
    assert_eq!(list.categories[1].description, "b");
    assert!(list.categories.iter().all(|c| !c.id.is_empty()));
}

#[tokio::test]
async fn create_stream_failure_reports_only_internal() {
    let mut server = spawn_server(FlakyStore::failing_create_at(1)).await;

    let status = server
        .client
        .create_category_stream(tokio_stream::iter(vec![
            request("A", "a"),
            request("B", "b"),
        ]))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Internal);
    assert_eq!(
        status.message(),
        "Error creating category: storage unavailable: disk on fire"
    );

    // The first record was persisted even though it was never reported.
    let persisted = server.store.find_all().await.unwrap();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].name, "A");
}

#[tokio::test]
async fn bidi_echoes_request_fields_with_storage_id() {
    let mut server = spawn_server(FlakyStore::with_suffix(" [stored]")).await;

    let replies: Vec<_> = server
        .client
        .create_category_bi_di_stream(tokio_stream::iter(vec![request("X", "x")]))
        .await
        .unwrap()
        .into_inner()
        .collect::<Result<_, _>>()
        .await
        .unwrap();

    assert_eq!(replies.len(), 1);
    let reply = &replies[0];
    assert_eq!(reply.name, "X");
    assert_eq!(reply.description, "x");

    let stored = server.store.find(&reply.id).await.unwrap();
    assert_eq!(stored.name, "X [stored]");
}

#[tokio::test]
async fn bidi_replies_before_the_next_request_is_sent() {
    let mut server = spawn_server(MemoryStore::new()).await;
    let (tx, rx) = mpsc::channel(4);

    let mut replies = server
        .client
        .create_category_bi_di_stream(ReceiverStream::new(rx))
        .await
        .unwrap()
        .into_inner();

    for (name, description) in [("A", "a"), ("B", "b"), ("C", "c")] {
        tx.send(request(name, description)).await.unwrap();
        let reply = tokio::time::timeout(Duration::from_secs(5), replies.next())
            .await
            .expect("reply arrives without further input")
            .expect("stream still open")
            .unwrap();
        assert_eq!(reply.name, name);
        assert_eq!(reply.description, description);
    }

    drop(tx);
    assert!(replies.next().await.is_none());
    assert_eq!(server.store.find_all().await.unwrap().len(), 3);
}

#[tokio::test]
async fn bidi_storage_failure_is_propagated_raw() {
    let mut server = spawn_server(FlakyStore::failing_create_at(1)).await;

    let mut replies = server
        .client
        .create_category_bi_di_stream(tokio_stream::iter(vec![
            request("A", "a"),
            request("B", "b"),
            request("C", "c"),
        ]))
        .await
        .unwrap()
        .into_inner();

    let first = replies.next().await.unwrap().unwrap();
    assert_eq!(first.name, "A");

    let status = replies.next().await.unwrap().unwrap_err();
    assert_eq!(status.code(), Code::Unknown);
    assert_eq!(status.message(), "storage unavailable: disk on fire");

    // "C" is never read once the stream has failed.
    assert_eq!(server.store.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn shutdown_ends_open_streams_with_unavailable() {
    let mut server = spawn_server(MemoryStore::new()).await;
    let (tx, rx) = mpsc::channel(1);

    let mut replies = server
        .client
        .create_category_bi_di_stream(ReceiverStream::new(rx))
        .await
        .unwrap()
        .into_inner();

    tx.send(request("A", "a")).await.unwrap();
    replies.next().await.unwrap().unwrap();

    server.handler.shutdown();

    let status = tokio::time::timeout(Duration::from_secs(5), replies.next())
        .await
        .expect("stream ends after shutdown")
        .unwrap()
        .unwrap_err();
    assert_eq!(status.code(), Code::Unavailable);

    let status = server
        .client
        .create_category_bi_di_stream(tokio_stream::iter(vec![request("B", "b")]))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Unavailable);
}
