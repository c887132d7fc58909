//! Concurrency guarantees of the link service over a real (in-memory) store:
//! no lost click updates, and exactly one winner per contested code.

use std::sync::Arc;

use linksnip::error::AppError;
use linksnip::infrastructure::persistence::MemoryLinkRepository;
use linksnip::prelude::{CodeGenerator, LinkService};

fn service() -> Arc<LinkService> {
    Arc::new(LinkService::new(
        Arc::new(MemoryLinkRepository::new()),
        CodeGenerator::with_seed(6, 42),
    ))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_resolutions_lose_no_clicks() {
    let service = service();
    let link = service
        .shorten(None, "https://example.com/hot".to_string(), None)
        .await
        .unwrap();

    const RESOLVERS: usize = 50;
    let mut handles = Vec::with_capacity(RESOLVERS);
    for _ in 0..RESOLVERS {
        let service = service.clone();
        let code = link.code.clone();
        handles.push(tokio::spawn(async move { service.resolve(&code).await }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let stats = service.stats(&link.code).await.unwrap();
    assert_eq!(stats.click_count, RESOLVERS as i64);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_contested_custom_code_has_one_winner() {
    let service = service();

    const WRITERS: usize = 10;
    let mut handles = Vec::with_capacity(WRITERS);
    for i in 0..WRITERS {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service
                .shorten(
                    Some(i as i64),
                    format!("https://example.com/{i}"),
                    Some("contested".to_string()),
                )
                .await
        }));
    }

    let mut created = 0;
    let mut taken = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(link) => {
                assert_eq!(link.code, "contested");
                created += 1;
            }
            Err(AppError::CodeTaken { .. }) => taken += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(taken, WRITERS - 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_generated_shortens_stay_unique() {
    let service = service();

    const WRITERS: usize = 20;
    let mut handles = Vec::with_capacity(WRITERS);
    for i in 0..WRITERS {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service
                .shorten(None, format!("https://example.com/{i}"), None)
                .await
        }));
    }

    let mut codes = std::collections::HashSet::new();
    for handle in handles {
        let link = handle.await.unwrap().unwrap();
        codes.insert(link.code);
    }

    assert_eq!(codes.len(), WRITERS);
}
