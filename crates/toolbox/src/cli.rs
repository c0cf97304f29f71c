use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{debug, info};

use toolbox_core::constants::DICTIONARY_PROVIDER;
use toolbox_core::storage::{StorageError, StorageManager, StorageProviderRegistry, StorageService};
use toolbox_core::time_format::{parse_time, timestamp_to_string, to_layout, to_pattern};
use toolbox_core::value_provider::{DictionaryProvider, MapDictionary, Value, ValueContext, ValueProviderRegistry};
use toolbox_core::{ConfigData, Error, Result};

/// Toolbox: storage, value provider and date format utilities
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a date pattern such as yyyy-MM-dd into a strftime layout
    Layout {
        pattern: String,
    },
    /// Translate a strftime layout back into a date pattern
    Pattern {
        layout: String,
    },
    /// Format a Unix timestamp with a date pattern, in UTC
    Format {
        #[arg(long)]
        pattern: String,
        /// Seconds since the epoch added to NANOS
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        base: i64,
        #[arg(allow_negative_numbers = true)]
        nanos: i64,
    },
    /// Parse text with a date pattern and print it as RFC 3339
    Parse {
        #[arg(long)]
        pattern: String,
        text: String,
    },
    /// Evaluate a value provider
    Value {
        /// Settings document loaded as the dictionary provider's source
        #[arg(long)]
        dictionary: Option<String>,
        /// Context key the dictionary is stored under
        #[arg(long, default_value = "dictionary")]
        dictionary_key: String,
        name: String,
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Operate on a storage URL
    Storage {
        /// Credentials file handed to the backend factory
        #[arg(long, global = true)]
        credentials: Option<PathBuf>,
        #[command(subcommand)]
        command: StorageCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum StorageCommand {
    /// List an object or a directory's children
    List { url: String },
    /// Print whether anything exists at the URL
    Exists { url: String },
    /// Write an object's content to stdout
    Cat { url: String },
    /// Upload a local file, or stdin, to the URL
    Put {
        url: String,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Delete an object
    Rm { url: String },
}

impl StorageCommand {
    fn url(&self) -> &str {
        match self {
            StorageCommand::List { url }
            | StorageCommand::Exists { url }
            | StorageCommand::Cat { url }
            | StorageCommand::Put { url, .. }
            | StorageCommand::Rm { url } => url,
        }
    }
}

/// Run a parsed command, writing its result to `out`
pub fn run(command: Commands, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Layout { pattern } => print(out, to_layout(&pattern)),
        Commands::Pattern { layout } => print(out, to_pattern(&layout)),
        Commands::Format { pattern, base, nanos } => print(out, timestamp_to_string(&pattern, base, nanos)?),
        Commands::Parse { pattern, text } => print(out, parse_time(&pattern, &text)?.to_rfc3339()),
        Commands::Value {
            dictionary,
            dictionary_key,
            name,
            args,
        } => {
            let value = evaluate(dictionary.as_deref(), &dictionary_key, &name, args)?;
            print(out, value)
        }
        Commands::Storage { credentials, command } => {
            let storage = StorageManager::for_url(command.url(), credentials.as_deref(), &StorageProviderRegistry::new())?;
            let result = run_storage(&storage, command, out);
            storage.close()?;
            result
        }
    }
}

fn evaluate(dictionary: Option<&str>, dictionary_key: &str, name: &str, args: Vec<String>) -> Result<Value> {
    let mut registry = ValueProviderRegistry::with_builtins();
    let mut context = ValueContext::new();

    if let Some(url) = dictionary {
        let storage = StorageManager::for_url(url, None, &StorageProviderRegistry::new())?;
        let config = ConfigData::load(&storage, url)?;
        info!("Loaded {} dictionary entries from {}", config.keys().len(), url);
        context.set_dictionary(dictionary_key, MapDictionary::from(&config));
        registry.register(DICTIONARY_PROVIDER, DictionaryProvider::new(dictionary_key));
    }

    let arguments: Vec<Value> = args.into_iter().map(Value::from).collect();
    debug!("Evaluating value provider '{}' with {} argument(s)", name, arguments.len());
    Ok(registry.evaluate(name, &context, &arguments)?)
}

fn run_storage(storage: &StorageManager, command: StorageCommand, out: &mut dyn Write) -> Result<()> {
    match command {
        StorageCommand::List { url } => {
            for object in storage.list(&url)? {
                let kind = if object.is_dir() { "dir" } else { "file" };
                print(out, format!("{}\t{}\t{}", kind, object.size(), object.url()))?;
            }
            Ok(())
        }
        StorageCommand::Exists { url } => print(out, storage.exists(&url)?),
        StorageCommand::Cat { url } => {
            let object = storage.storage_object(&url)?;
            let mut reader = storage.download(&object)?;
            io::copy(&mut reader, out).map_err(|e| StorageError::io(e, "write_stdout", url.as_str()))?;
            Ok(())
        }
        StorageCommand::Put { url, file } => {
            let mut reader: Box<dyn Read> = match &file {
                Some(path) => {
                    let file = File::open(path).map_err(|e| StorageError::io(e, "open_read", path.display().to_string()))?;
                    Box::new(file)
                }
                None => Box::new(io::stdin()),
            };
            storage.upload(&url, &mut reader)?;
            info!("Uploaded {}", url);
            Ok(())
        }
        StorageCommand::Rm { url } => {
            let object = storage.storage_object(&url)?;
            storage.delete(&object)?;
            info!("Deleted {}", url);
            Ok(())
        }
    }
}

fn print(out: &mut dyn Write, value: impl std::fmt::Display) -> Result<()> {
    writeln!(out, "{}", value).map_err(|e| Error::Other(format!("Failed to write output: {}", e)))
}
