//! Command-line front-end for the taskpad core.
//!
//! # Responsibility
//! - Capture one user intent per invocation (add / list / edit / rm)
//!   and dispatch it through the core task board.
//! - Hold no durable state; every invocation opens its own short-lived
//!   connection to the task database.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use directories::ProjectDirs;
use std::path::PathBuf;
use taskpad_core::db::open_db;
use taskpad_core::{
    default_log_level, init_logging, SqliteTaskRepository, TaskBoard, TaskId, TaskService,
};

#[derive(Parser)]
#[command(name = "taskpad", version, about = "Local to-do list backed by SQLite")]
struct Cli {
    /// Task database file (defaults to the platform data directory).
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a task
    Add {
        /// Title of the new task; must not be blank after trimming
        title: String,
    },
    /// List tasks
    List {
        /// Only show tasks whose title contains this text (case-insensitive)
        #[arg(long, value_name = "TERM")]
        search: Option<String>,
        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replace the title of an existing task
    Edit {
        /// Id of the task to edit
        id: TaskId,
        /// New title; must not be blank after trimming
        title: String,
    },
    /// Delete a task (no error if it does not exist)
    Rm {
        /// Id of the task to delete
        id: TaskId,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let dirs = ProjectDirs::from("", "", "taskpad")
        .ok_or_else(|| anyhow!("cannot determine a platform data directory"))?;

    // Logging failures must not take the tool down.
    let log_dir = dirs.data_dir().join("logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("warning: logging disabled: {err}");
    }

    let db_path = match cli.db {
        Some(path) => path,
        None => {
            std::fs::create_dir_all(dirs.data_dir()).with_context(|| {
                format!("cannot create data directory {}", dirs.data_dir().display())
            })?;
            dirs.data_dir().join("taskpad.db")
        }
    };

    let conn = open_db(&db_path)
        .with_context(|| format!("cannot open task database at {}", db_path.display()))?;
    let mut board = TaskBoard::new(TaskService::new(SqliteTaskRepository::new(&conn)));

    match cli.command {
        Command::Add { title } => {
            let id = board.submit_new_task(&title)?;
            log::info!("event=task_add module=cli status=ok id={id}");
            println!("added task {id}");
        }
        Command::List { search, json } => {
            board.refresh()
                .with_context(|| format!("cannot read tasks from {}", db_path.display()))?;
            if let Some(term) = search {
                board.set_search_term(term);
            }
            let tasks = board.visible_tasks();
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else if tasks.is_empty() {
                println!("no tasks");
            } else {
                for task in tasks {
                    println!("{:>5}  {}", task.id, task.title);
                }
            }
        }
        Command::Edit { id, title } => {
            board.refresh()
                .with_context(|| format!("cannot read tasks from {}", db_path.display()))?;
            board.begin_edit(id);
            board.submit_edit(&title)?;
            log::info!("event=task_edit module=cli status=ok id={id}");
            println!("updated task {id}");
        }
        Command::Rm { id } => {
            board.remove_task(id)?;
            log::info!("event=task_rm module=cli status=ok id={id}");
            println!("removed task {id}");
        }
    }

    Ok(())
}
