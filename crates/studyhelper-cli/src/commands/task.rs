//! Task list commands.

use clap::{Subcommand, ValueEnum};
use studyhelper_core::{Priority, Task, TaskCodec, TaskStore};

use crate::context::Context;

#[derive(Clone, Copy, ValueEnum)]
pub enum SortKey {
    Title,
    Priority,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        /// Task title
        title: String,
        /// High, Medium or Low
        #[arg(long, default_value = "medium")]
        priority: Priority,
        /// Mark as a work task (personal otherwise)
        #[arg(long)]
        work: bool,
    },
    /// List tasks
    List {
        /// Reorder and persist before listing
        #[arg(long, value_enum)]
        sort: Option<SortKey>,
        /// Only show titles containing this text
        #[arg(long)]
        search: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn open_store(ctx: &Context) -> Result<TaskStore, Box<dyn std::error::Error>> {
    let mut store = TaskStore::new();
    store.load(&ctx.tasks_path())?;
    Ok(store)
}

pub fn run(action: TaskAction, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TaskAction::Add {
            title,
            priority,
            work,
        } => {
            let mut store = open_store(ctx)?;
            let added = store.add(&title, priority, work)?.to_string();
            store.save(&ctx.tasks_path())?;
            println!("Task added: {added}");
        }
        TaskAction::List { sort, search, json } => {
            let mut store = open_store(ctx)?;
            if let Some(key) = sort {
                match key {
                    SortKey::Title => store.sort_by_title(),
                    SortKey::Priority => store.sort_by_priority(),
                }
                store.save(&ctx.tasks_path())?;
            }

            let shown: Vec<Task> = store
                .search(search.as_deref().unwrap_or(""))
                .into_iter()
                .cloned()
                .collect();

            if json {
                println!("{}", TaskCodec::serialize(&shown)?);
            } else if shown.is_empty() {
                println!("No tasks.");
            } else {
                for (i, task) in shown.iter().enumerate() {
                    println!("{:>3}. {task}", i + 1);
                }
            }
        }
    }
    Ok(())
}
