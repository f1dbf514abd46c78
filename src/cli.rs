// src/cli.rs
use std::{env, path::PathBuf};

use crate::{
    config::options::AppOptions,
    session::Session,
    snapshot::Snapshot,
    store::FileStore,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Append,
    Save,
    Copy,
    Clear,
    Status,
}

#[derive(Clone, Debug)]
pub struct Params {
    pub command: Command,
    pub snapshot: Option<PathBuf>,
    pub title: String,
    pub options: AppOptions,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_args(env::args().skip(1))?;
    execute(&params)
}

pub fn execute(params: &Params) -> Result<(), Box<dyn std::error::Error>> {
    let opts = &params.options;
    let mut session = Session::new(FileStore::new(&opts.storage.dir), opts.storage.key.clone());

    let snap = match &params.snapshot {
        Some(path) => {
            let snap = Snapshot::load(path)?;
            Some(if opts.capture.flatten_whitespace { snap.normalized() } else { snap })
        }
        None => None,
    };

    match params.command {
        Command::Append => {
            let snap = snap.ok_or("append needs a snapshot file")?;
            let report = session.append(&snap)?;
            eprintln!("{report}");
        }
        Command::Save => {
            match session.save_csv(snap.as_ref(), &opts.export, &params.title)? {
                Some(path) => eprintln!("Saved {}", path.display()),
                None => eprintln!("Nothing to save"),
            }
        }
        Command::Copy => {
            match session.copy_csv(snap.as_ref())? {
                Some(text) => println!("{text}"),
                None => eprintln!("Nothing to copy"),
            }
        }
        Command::Clear => {
            session.clear()?;
            eprintln!("cleared");
        }
        Command::Status => eprintln!("{}", session.summary()),
    }
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<Params, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut command = None;
    let mut snapshot = None;
    let mut title = s!();
    let mut options = AppOptions::default();

    while let Some(a) = args.next() {
        match a.as_str() {
            "append" => command = Some(Command::Append),
            "save"   => command = Some(Command::Save),
            "copy"   => command = Some(Command::Copy),
            "clear"  => command = Some(Command::Clear),
            "status" => command = Some(Command::Status),
            "--store" => options.storage.dir = PathBuf::from(args.next().ok_or("Missing value for --store")?),
            "--key" => options.storage.key = args.next().ok_or("Missing value for --key")?,
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                options.export.set_path(&v);
            }
            "--title" => title = args.next().ok_or("Missing value for --title")?,
            "--no-bom" => options.export.bom = false,
            "--raw" => options.capture.flatten_whitespace = false,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other if other.starts_with('-') => return Err(format!("Unknown arg: {}", other).into()),
            path => {
                if snapshot.is_some() {
                    return Err(format!("Unexpected extra argument: {}", path).into());
                }
                snapshot = Some(PathBuf::from(path));
            }
        }
    }

    let command = command.ok_or("Specify one of: append, save, copy, clear, status")?;
    if matches!(command, Command::Clear | Command::Status) && snapshot.is_some() {
        return Err("clear/status take no snapshot file".into());
    }
    Ok(Params { command, snapshot, title, options })
}
