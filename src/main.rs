use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use twig::areas::repository::Repository;
use twig::commands::porcelain::log::LogOptions;
use twig::config::{Author, Config, ParseMode};

#[derive(Parser)]
#[command(
    name = "twig",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal content-addressed version control system",
    long_about = "twig keeps blobs, flat trees and commits in a content-addressed store, \
    stages files in a plain-text index and reconciles the last commit, the index \
    and the working tree into a status report.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(
        long,
        global = true,
        help = "Fail on malformed index or tree records instead of skipping them"
    )]
    strict: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Add file contents to the index",
        long_about = "This command stages files for the next commit. \
        Use '.' to stage every non-ignored file in the working tree."
    )]
    Add {
        #[arg(index = 1, required = true, help = "Files to stage, or '.'")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command records the index as a new commit on the current branch."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "status",
        about = "Show the working tree status",
        long_about = "This command lists staged changes, unstaged changes and untracked files."
    )]
    Status {
        #[arg(long, help = "Print the two-column machine-readable format")]
        porcelain: bool,
    },
    #[command(
        name = "log",
        about = "Show commit logs",
        long_about = "This command lists the commits of the current branch, newest first."
    )]
    Log {
        #[arg(long, help = "Print one commit per line")]
        oneline: bool,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file as a blob and optionally write it to the object database"
    )]
    HashObject {
        #[arg(short, long, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(name = "cat-file", about = "Print the content of an object")]
    CatFile {
        #[arg(short = 'p', long, help = "The object SHA to print")]
        sha: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let parse_mode = if cli.strict {
        ParseMode::Strict
    } else {
        ParseMode::from_env()
    };
    let config = Config::default().with_parse_mode(parse_mode);
    let pwd = std::env::current_dir()?.canonicalize()?;

    match cli.command {
        Commands::Init { path } => {
            let path = match path {
                Some(path) => pwd.join(path),
                None => pwd,
            };
            let repository = Repository::new(&path, config, Box::new(std::io::stdout()))?;

            repository.init()?
        }
        Commands::Add { paths } => {
            let repository = discover(&pwd, config)?;
            let paths = paths.iter().map(|path| pwd.join(path)).collect::<Vec<_>>();

            repository.add(&paths)?
        }
        Commands::Commit { message } => {
            let repository = discover(&pwd, config)?;

            repository.commit_changes(&message, Author::load_from_env())?
        }
        Commands::Status { porcelain } => {
            let repository = discover(&pwd, config)?;

            repository.status(porcelain)?
        }
        Commands::Log { oneline } => {
            let repository = discover(&pwd, config)?;

            repository.log(&LogOptions { oneline })?
        }
        Commands::HashObject { write, file } => {
            let repository = discover(&pwd, config)?;

            repository.hash_object(&pwd.join(file), write)?
        }
        Commands::CatFile { sha } => {
            let repository = discover(&pwd, config)?;

            repository.cat_file(&sha)?
        }
    }

    Ok(())
}

fn discover(pwd: &Path, config: Config) -> Result<Repository> {
    Ok(Repository::discover(
        pwd,
        config,
        Box::new(std::io::stdout()),
    )?)
}
