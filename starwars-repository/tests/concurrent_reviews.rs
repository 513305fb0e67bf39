//! Integration tests for concurrent review writes.
//!
//! These tests run many writers against one shared service on a
//! multi-threaded runtime and check that the per-episode log neither loses
//! entries nor reorders any single writer's reviews.

use std::sync::Arc;
use std::time::Duration;

use starwars_repository::memory::{seed, InMemoryStore};
use starwars_repository::{StarWarsService, StarWarsServiceConfig};
use starwars_shared::{Episode, ReviewInput};

const WRITERS: usize = 8;
const REVIEWS_PER_WRITER: usize = 25;

fn shared_service(delay: Duration) -> Arc<StarWarsService> {
    let store = Arc::new(InMemoryStore::from_dataset(seed::starwars_dataset()));
    Arc::new(StarWarsService::with_config(
        store,
        StarWarsServiceConfig::with_review_write_delay(delay),
    ))
}

async fn write_concurrently(service: Arc<StarWarsService>, episode: Episode) {
    let mut handles = Vec::with_capacity(WRITERS);
    for writer in 0..WRITERS {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            for seq in 0..REVIEWS_PER_WRITER {
                let input = ReviewInput::new(1 + (seq % 5) as i32)
                    .with_commentary(format!("{}:{}", writer, seq));
                service.create_review(episode, input).await.unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }
}

fn parse_commentary(commentary: &str) -> (usize, usize) {
    let (writer, seq) = commentary.split_once(':').unwrap();
    (writer.parse().unwrap(), seq.parse().unwrap())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends_lose_nothing_and_keep_caller_order() {
    let service = shared_service(Duration::ZERO);

    write_concurrently(service.clone(), Episode::Jedi).await;

    let reviews = service.reviews(Episode::Jedi, None).await;
    assert_eq!(reviews.len(), WRITERS * REVIEWS_PER_WRITER);

    let mut last_seq: Vec<Option<usize>> = vec![None; WRITERS];
    for review in &reviews {
        let (writer, seq) = parse_commentary(review.commentary.as_deref().unwrap());
        if let Some(previous) = last_seq[writer] {
            assert!(seq > previous, "writer {} reordered: {} after {}", writer, seq, previous);
        }
        last_seq[writer] = Some(seq);
    }
    assert!(last_seq.iter().all(|seq| *seq == Some(REVIEWS_PER_WRITER - 1)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends_with_write_delay() {
    let service = shared_service(Duration::from_millis(1));

    write_concurrently(service.clone(), Episode::Empire).await;

    assert_eq!(
        service.reviews(Episode::Empire, None).await.len(),
        WRITERS * REVIEWS_PER_WRITER
    );
    assert!(service.reviews(Episode::Jedi, None).await.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_reads_proceed_while_writes_are_pending() {
    let service = shared_service(Duration::from_millis(200));

    let writer = {
        let service = service.clone();
        tokio::spawn(async move {
            service
                .create_review(Episode::NewHope, ReviewInput::new(5))
                .await
                .unwrap()
        })
    };

    // The write is still sleeping; lookups must not wait for it.
    let hero = tokio::time::timeout(Duration::from_millis(100), service.hero(None))
        .await
        .expect("read blocked by pending write")
        .unwrap();
    assert_eq!(hero.name(), "R2-D2");

    let review = writer.await.unwrap();
    assert_eq!(service.reviews(Episode::NewHope, None).await, vec![review]);
}
