//! Multi-page sweeps over listing and recipe pages.
//!
//! Every sweep keeps going past failed pages: a page that cannot be fetched or
//! parsed is logged and contributes nothing.

use log::warn;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

pub mod details;
pub mod listing;

/// Runs `job` over `items` with at most `max_concurrency` in flight and returns the
/// outputs in input order. Jobs whose task panicked are dropped.
///
/// `items` is pulled lazily: the next item is only taken once a permit is free.
pub(crate) async fn run_bounded<It, I, T, F, Fut>(
    items: It,
    max_concurrency: usize,
    job: F,
) -> Vec<T>
where
    It: IntoIterator<Item = I>,
    I: Send + 'static,
    T: Send + 'static,
    F: Fn(I) -> Fut,
    Fut: Future<Output = T> + Send + 'static,
{
    let semaphore = Arc::new(Semaphore::new(max_concurrency.max(1)));
    let mut tasks = JoinSet::new();

    let mut items = items.into_iter().enumerate();
    loop {
        let Ok(permit) = Arc::clone(&semaphore).acquire_owned().await else {
            break;
        };
        let Some((index, item)) = items.next() else {
            break;
        };
        let work = job(item);
        tasks.spawn(async move {
            let output = work.await;
            drop(permit);
            (index, output)
        });
    }

    let mut results = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(result) => results.push(result),
            Err(e) => warn!("Worker task failed: {}", e),
        }
    }

    results.sort_by_key(|(index, _)| *index);
    results.into_iter().map(|(_, output)| output).collect()
}
