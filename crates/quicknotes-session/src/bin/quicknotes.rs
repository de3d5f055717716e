//! QuickNotes demo client.
//!
//! Builds the configured note store, drives a controller session, and
//! prints the resulting list.
//!
//! Usage:
//!   cargo run --bin quicknotes                          # list notes
//!   cargo run --bin quicknotes -- --add TITLE CONTENT   # create, then list
//!   cargo run --bin quicknotes -- --remove ID           # delete, then list

use std::env;

use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use quicknotes_core::NoteDraft;
use quicknotes_session::NoteController;
use quicknotes_store::StoreConfig;

#[derive(Debug, Default)]
struct Args {
    add: Option<NoteDraft>,
    remove: Option<Uuid>,
}

fn parse_args() -> Result<Args, String> {
    let argv: Vec<String> = env::args().collect();
    let mut args = Args::default();

    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--add" | "-a" => {
                if i + 2 >= argv.len() {
                    return Err("--add requires TITLE and CONTENT".to_string());
                }
                args.add = Some(NoteDraft::new(&argv[i + 1], &argv[i + 2]));
                i += 3;
            }
            "--remove" | "-r" => {
                if i + 1 >= argv.len() {
                    return Err("--remove requires a note id".to_string());
                }
                let id = argv[i + 1]
                    .parse()
                    .map_err(|e| format!("invalid note id: {}", e))?;
                args.remove = Some(id);
                i += 2;
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
    }

    Ok(args)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = parse_args().map_err(|e| {
        eprintln!("Usage: quicknotes [--add TITLE CONTENT] [--remove ID]");
        e
    })?;

    let config = StoreConfig::from_env();
    let store = config.build()?;
    let mut controller = NoteController::new(store);

    controller.load().await?;

    if let Some(draft) = args.add {
        controller.add(draft).await?;
    }
    if let Some(id) = args.remove {
        controller.remove(id).await?;
    }

    if controller.notes().is_empty() {
        println!("No notes.");
    } else {
        for note in controller.notes() {
            println!(
                "[{}] {}  (updated {})",
                note.id,
                note.title,
                note.updated_at.format("%Y-%m-%d %H:%M")
            );
            println!("    {}", note.content);
        }
    }

    Ok(())
}
