use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::list_io::{self, ListError};
use crate::model::{Edge, Item, ListFile};
use crate::ops::{MoveRequest, OrderStore};
use crate::util::logging;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let file = cli.file.as_deref();

    match &cli.command {
        None => cmd_tui(&cli),
        Some(cmd) => {
            logging::init_cli();
            match cmd {
                Commands::List => cmd_list(file, json),
                Commands::Mv(args) => cmd_mv(file, args, json),
                Commands::Check => cmd_check(file, json),
            }
        }
    }
}

/// The list file given with `-f`, or the demo list.
fn load_list_or_demo(file: Option<&Path>) -> Result<ListFile, ListError> {
    match file {
        Some(path) => list_io::load_list(path),
        None => Ok(list_io::demo_list()),
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_tui(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tui(cli.log_file.as_deref())?;
    let list = load_list_or_demo(cli.file.as_deref())?;
    let title = list.list.title.clone();
    let watched = cli.file.clone();

    let items = crate::tui::run(list, watched)?;

    if cli.print {
        print_order(&title, &items, cli.json)?;
    }
    Ok(())
}

fn cmd_list(file: Option<&Path>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let list = load_list_or_demo(file)?;
    print_order(&list.list.title, &list.items, json)
}

fn print_order(title: &str, items: &[Item], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let out = ListJson {
            title: title.to_string(),
            items: items_json(items),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", format_items(items));
    }
    Ok(())
}

fn cmd_mv(file: Option<&Path>, args: &MvArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let list = load_list_or_demo(file)?;
    let mut store = OrderStore::new(list.items)?;

    let moved = if let Some(target) = &args.before {
        store.move_next_to(&args.id, target, Edge::Before)?
    } else if let Some(target) = &args.after {
        store.move_next_to(&args.id, target, Edge::After)?
    } else {
        let request = if args.up {
            MoveRequest::Up
        } else if args.down {
            MoveRequest::Down
        } else if args.top {
            MoveRequest::Top
        } else {
            MoveRequest::Bottom
        };
        store.move_by_id(&args.id, request)?
    };

    if json {
        let out = MoveJson {
            moved,
            order: order_ids(store.items()),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        if moved.is_none() {
            eprintln!("{} is already there", args.id);
        }
        print!("{}", format_items(store.items()));
    }
    Ok(())
}

fn cmd_check(file: Option<&Path>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let list = match file {
        Some(path) => list_io::read_list(path)?,
        None => list_io::demo_list(),
    };
    let errors = list_io::validate(&list);
    let count = errors.len();
    let valid = count == 0;

    if json {
        let out = CheckJson { valid, errors };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        if !valid {
            println!("Errors:");
            for err in &errors {
                println!("  {}", err);
            }
        }
        if valid {
            println!("✓ list is valid ({} items)", list.items.len());
        } else {
            println!("✗ list has errors");
        }
    }

    if valid {
        Ok(())
    } else {
        Err(format!("{} problem(s) found", count).into())
    }
}
