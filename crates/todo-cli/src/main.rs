use std::env;
use std::process::ExitCode;

use todo_core::app::sample_tasks;
use todo_core::impls::FileKeyValueStore;
use todo_core::ports::{SystemClock, UlidGenerator};
use todo_core::{RepositoryError, ServiceBuilder, TodoService, TodoTask};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_STORE_PATH: &str = "todo-store.json";

/// demo: ファイルストアに対して add → get → complete → delete を一通り流す
async fn run(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    // (A) ストアとサービスを用意
    let store = FileKeyValueStore::open(path)?;
    let service = ServiceBuilder::new(store).build()?;
    let ids = UlidGenerator::new(SystemClock);

    // (B) 空ならサンプルを投入
    if service.get_all_async().await?.is_empty() {
        for task in sample_tasks(&ids) {
            service.create_async(task).await?;
        }
        info!(path, "seeded sample tasks");
    }

    // (C) 一覧
    let mut tasks = service.get_all_async().await?;
    tasks.sort_by_key(|t| t.date);
    for t in &tasks {
        let mark = if t.is_completed { "x" } else { " " };
        println!("[{mark}] {} {} ({})", t.date.format("%Y-%m-%d %H:%M"), t.title, t.id);
    }

    // (D) 未完了の先頭を callback 形式で取得し、async 形式で完了にする
    let Some(first_open) = tasks.iter().find(|t| !t.is_completed) else {
        println!("nothing left to do");
        return Ok(());
    };
    service.get_one(
        &first_open.id,
        Box::new(|result: Result<TodoTask, RepositoryError>| match result {
            Ok(task) => println!("callback got: {}", task.title),
            Err(e) => error!(error = %e, "callback failed"),
        }),
    );
    let done = service.complete_task_async(first_open).await?;
    println!("completed: {} (is_completed={})", done.title, done.is_completed);

    // (E) 完了済みを 1 件削除して、消えたことを確認
    if let Some(finished) = tasks.iter().find(|t| t.is_completed) {
        service.delete_async(finished).await?;
        match service.get_one_async(&finished.id).await {
            Err(e) if e.is_not_found() => println!("deleted: {}", finished.title),
            other => println!("unexpected after delete: {other:?}"),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_STORE_PATH.to_string());

    match run(&path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "todo-cli failed");
            ExitCode::FAILURE
        }
    }
}
