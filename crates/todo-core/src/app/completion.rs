//! Completion - callback 形式と async 形式の橋渡し
//!
//! callback 形式が正準な実装で、async 形式は `resolve` でそれを一度だけ呼び、
//! 結果をそのまま返すアダプタにすぎません。
//!
//! # exactly-once
//! - `Completion<T>` は `FnOnce` なので 2 回呼ぶことは型で不可能
//! - 一度も呼ばれずに drop された場合は `RepositoryError::Abandoned` で解決する
//!   （待ち続けることはない）

use std::future::Future;

use tokio::sync::oneshot;

use crate::domain::errors::RepositoryError;

/// 各操作の結果を一度だけ受け取る callback
pub type Completion<T> = Box<dyn FnOnce(Result<T, RepositoryError>) + Send + 'static>;

/// `start` に Completion を渡して即座に呼び、その結果を待つ Future を返す
pub fn resolve<T, F>(start: F) -> impl Future<Output = Result<T, RepositoryError>> + Send
where
    T: Send + 'static,
    F: FnOnce(Completion<T>),
{
    let (tx, rx) = oneshot::channel();
    start(Box::new(move |result: Result<T, RepositoryError>| {
        // 受け手が先に消えていても結果は捨てるだけ
        let _ = tx.send(result);
    }));
    async move { rx.await.unwrap_or(Err(RepositoryError::Abandoned)) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskId;

    #[tokio::test]
    async fn forwards_success() {
        let value = resolve(|done: Completion<u32>| done(Ok(7))).await;
        assert_eq!(value.unwrap(), 7);
    }

    #[tokio::test]
    async fn forwards_error_unchanged() {
        let result = resolve(|done: Completion<u32>| {
            done(Err(RepositoryError::not_found(&TaskId::new("t1"))))
        })
        .await;
        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn dropped_completion_resolves_as_abandoned() {
        let result = resolve(|done: Completion<u32>| drop(done)).await;
        assert!(matches!(result, Err(RepositoryError::Abandoned)));
    }

    #[tokio::test]
    async fn completion_may_fire_from_another_task() {
        let result = resolve(|done: Completion<&'static str>| {
            tokio::spawn(async move {
                tokio::task::yield_now().await;
                done(Ok("later"));
            });
        })
        .await;
        assert_eq!(result.unwrap(), "later");
    }
}
