use std::future::Future;

use tracing::debug;

use crate::error::Result;
use crate::spotify::models::Page;

/// Drain a cursor-paginated listing into one ordered `Vec`.
///
/// Starts from `first` and calls `next` with each page's cursor until a page
/// carries no cursor or `next` yields `None`. Items keep page order and
/// within-page order; nothing is deduplicated. Errors from `next` abort the
/// drain unchanged.
pub async fn drain_pages<T, F, Fut>(first: Page<T>, mut next: F) -> Result<Vec<T>>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Option<Page<T>>>>,
{
    let mut items = first.items;
    let mut cursor = first.next;
    let mut pages = 1usize;

    while let Some(url) = cursor.take() {
        match next(url).await? {
            Some(page) => {
                pages += 1;
                items.extend(page.items);
                cursor = page.next;
            }
            None => break,
        }
    }

    debug!("Drained {} items over {} pages", items.len(), pages);
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::collections::HashMap;

    fn paged(sizes: &[usize]) -> (Page<usize>, HashMap<String, Page<usize>>) {
        let mut counter = 0;
        let mut pages: Vec<Page<usize>> = sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| {
                let items = (counter..counter + size).collect();
                counter += size;
                let next = (i + 1 < sizes.len()).then(|| format!("cursor-{}", i + 1));
                Page::new(items, next)
            })
            .collect();

        if pages.is_empty() {
            return (Page::new(Vec::new(), None), HashMap::new());
        }

        let first = pages.remove(0);
        let rest = pages
            .into_iter()
            .enumerate()
            .map(|(i, page)| (format!("cursor-{}", i + 1), page))
            .collect();
        (first, rest)
    }

    async fn drain_sizes(sizes: &[usize]) -> Vec<usize> {
        let (first, mut rest) = paged(sizes);
        drain_pages(first, |cursor| {
            let page = rest.remove(&cursor);
            async move { Ok::<_, AppError>(page) }
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_single_page() {
        assert_eq!(drain_sizes(&[3]).await, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_empty_collection() {
        assert!(drain_sizes(&[]).await.is_empty());
        assert!(drain_sizes(&[0]).await.is_empty());
    }

    #[tokio::test]
    async fn test_multiple_pages_keep_order() {
        let sizes = [2, 0, 5, 1];
        let items = drain_sizes(&sizes).await;
        assert_eq!(items.len(), sizes.iter().sum::<usize>());
        assert_eq!(items, (0..8).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_duplicates_preserved() {
        let first = Page::new(vec!["a", "b"], Some("next".to_string()));
        let items = drain_pages(first, |_| async {
            Ok::<_, AppError>(Some(Page::new(vec!["b", "a"], None)))
        })
        .await
        .unwrap();
        assert_eq!(items, vec!["a", "b", "b", "a"]);
    }

    #[tokio::test]
    async fn test_none_from_next_ends_drain() {
        let first = Page::new(vec![1], Some("gone".to_string()));
        let items = drain_pages(first, |_| async { Ok::<_, AppError>(None) }).await.unwrap();
        assert_eq!(items, vec![1]);
    }

    #[tokio::test]
    async fn test_error_propagates() {
        let first = Page::new(vec![1], Some("boom".to_string()));
        let result: Result<Vec<i32>> = drain_pages(first, |_| async {
            Err::<Option<Page<i32>>, _>(AppError::Api {
                status: 429,
                message: "rate limited".to_string(),
            })
        })
        .await;
        assert!(matches!(result, Err(AppError::Api { status: 429, .. })));
    }
}
