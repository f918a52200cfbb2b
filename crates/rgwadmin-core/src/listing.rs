//! Lazy enumerate-then-fetch listings.
//!
//! The admin API has no bulk read: listing users or buckets is one call for
//! the ids followed by one detail call per id. [`lazy_listing`] exposes that
//! fan-out as a stream, so nothing is sent before the first poll and each
//! pulled item costs exactly one detail call.

use std::future::Future;

use futures::StreamExt;
use futures::stream::{self, BoxStream};

use crate::client::AdminClient;
use crate::error::AdminResult;

/// A lazily-fetched sequence of admin entities.
///
/// Each consumer owns its stream; it is not meant to be shared.
pub type AdminStream<T> = BoxStream<'static, AdminResult<T>>;

enum Cursor<E> {
    Pending(E),
    Fetching(std::vec::IntoIter<String>),
    Done,
}

/// Build a stream that runs `enumerate` on first poll, then `fetch` per id.
///
/// An enumerate failure is yielded as the only item. Detail failures are
/// yielded in place and the stream continues with the next id.
pub(crate) fn lazy_listing<T, E, EFut, F, FFut>(
    client: AdminClient,
    enumerate: E,
    fetch: F,
) -> AdminStream<T>
where
    T: Send + 'static,
    E: FnOnce(AdminClient) -> EFut + Send + 'static,
    EFut: Future<Output = AdminResult<Vec<String>>> + Send + 'static,
    F: Fn(AdminClient, String) -> FFut + Send + 'static,
    FFut: Future<Output = AdminResult<T>> + Send + 'static,
{
    stream::unfold(
        (Cursor::Pending(enumerate), client, fetch),
        |(cursor, client, fetch)| async move {
            let mut ids = match cursor {
                Cursor::Pending(enumerate) => match enumerate(client.clone()).await {
                    Ok(ids) => ids.into_iter(),
                    Err(e) => return Some((Err(e), (Cursor::Done, client, fetch))),
                },
                Cursor::Fetching(ids) => ids,
                Cursor::Done => return None,
            };
            let id = ids.next()?;
            let item = fetch(client.clone(), id).await;
            Some((item, (Cursor::Fetching(ids), client, fetch)))
        },
    )
    .boxed()
}
