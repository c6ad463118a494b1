//! Interactive todo list.
//!
//! Reads commands from stdin (see `help`) and prints notifications as they
//! arrive. Configuration comes from the environment; see [`todo::config`].

use std::io::Write;
use std::sync::Arc;
use tasklist_runtime::ChannelNotifier;
use todo::command::{Command, CommandError, USAGE};
use todo::{Config, TodoEnvironment, TodoReducer, TodoState, TodoStore};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| EnvFilter::new(todo::config::DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let collection = config.load_seed()?;
    tracing::info!(records = collection.len(), policy = ?config.policy, "Starting todo list");

    let (notifier, mut toasts) = ChannelNotifier::new();
    let env = TodoEnvironment::new(Arc::new(notifier)).with_policy(config.policy);
    let store = TodoStore::new(TodoState::new(collection), TodoReducer::new(), env);

    let printer = tokio::spawn(async move {
        while let Some(notification) = toasts.recv().await {
            println!("  {notification}");
        }
    });

    print_board(&store.snapshot().await);
    println!("\n{USAGE}");
    prompt();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::List) => print_board(&store.snapshot().await),
            Ok(Command::Help) => println!("{USAGE}"),
            Ok(command) => {
                if let Some(action) = command.into_action() {
                    store.send(action).await?;
                    // Let the printer show the notification before the next prompt.
                    tokio::task::yield_now().await;
                }
            },
            Err(CommandError::Empty) => {},
            Err(error) => println!("{error} (type `help` for commands)"),
        }
        prompt();
    }

    store.shutdown();
    drop(store);
    printer.await?;
    Ok(())
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

fn print_board(state: &TodoState) {
    let collection = &state.collection;

    println!("\nTasks to do - {}", collection.pending_count());
    for record in collection.pending() {
        println!("  [{:>3}] {}", record.id, record.text);
    }

    println!("\nDone - {}", collection.completed_count());
    for record in collection.completed() {
        println!("  [{:>3}] {} ✓", record.id, record.text);
    }
}
