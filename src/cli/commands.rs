use crate::core::estimator::{DEFAULT_TOKEN_LIMIT, TokenBudget};
use crate::core::importer::import_files;
use crate::core::picker::run_picker;
use crate::core::session::PromptSession;
use crate::core::templates;
use crate::domain::models::{
    DEFAULT_IGNORED_FOLDERS, DEFAULT_IGNORED_SUFFIXES, ImportFilterConfig, ImportMode,
};
use crate::infra::file_system::{file_candidates, read_file_text, scan_directory};
use crate::infra::logger::setup_logger;
use crate::infra::output::{print_summary, write_output};
use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "promptsmith")]
#[command(about = "Assemble an LLM prompt from task templates and selected files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import files, pick a selection, and compose the final prompt
    Generate {
        /// Files to import directly
        paths: Vec<PathBuf>,

        /// Directory to import (applies the ignore configuration)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Task type template, e.g. Fix, Feature, Refactor
        #[arg(long)]
        task_type: Option<String>,

        /// Custom instruction template, e.g. Default, Database
        #[arg(long)]
        custom_instruction: Option<String>,

        /// Free-text task instruction
        #[arg(long)]
        prompt: Option<String>,

        /// Comma-separated file suffixes ignored during --dir imports
        #[arg(long, default_value = DEFAULT_IGNORED_SUFFIXES)]
        ignore_suffixes: String,

        /// Comma-separated folder names ignored during --dir imports
        #[arg(long, default_value = DEFAULT_IGNORED_FOLDERS)]
        ignore_folders: String,

        /// Select a file by name without the interactive picker (repeatable)
        #[arg(long)]
        select: Vec<String>,

        /// Select every imported file and skip the picker
        #[arg(long)]
        auto: bool,

        /// Write the prompt to a file instead of stdout
        #[arg(long)]
        output: Option<String>,

        /// Copy the prompt to the system clipboard
        #[arg(long)]
        clipboard: bool,

        /// Token budget the estimate is reported against
        #[arg(long, default_value_t = DEFAULT_TOKEN_LIMIT)]
        token_limit: usize,
    },
    /// List the shipped task type and custom instruction templates
    Templates,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logger(cli.verbose)?;

    match cli.command {
        Commands::Generate {
            paths,
            dir,
            task_type,
            custom_instruction,
            prompt,
            ignore_suffixes,
            ignore_folders,
            select,
            auto,
            output,
            clipboard,
            token_limit,
        } => {
            info!("Starting generate command");
            debug!(
                "Parameters: paths={:?}, dir={:?}, task_type={:?}, custom_instruction={:?}, auto={}",
                paths, dir, task_type, custom_instruction, auto
            );

            let filter = ImportFilterConfig::from_csv(&ignore_suffixes, &ignore_folders);
            let mut session = PromptSession::new(TokenBudget::new(token_limit));

            if let Some(key) = task_type {
                if templates::task_type_template(&key).is_none() {
                    warn!("Unknown task type {:?}; it will contribute nothing", key);
                }
                session.set_task_type(&key);
            }
            if let Some(key) = custom_instruction {
                if templates::custom_instruction_template(&key).is_none() {
                    warn!(
                        "Unknown custom instruction {:?}; it will contribute nothing",
                        key
                    );
                }
                session.set_custom_instruction(&key);
            }
            if let Some(text) = prompt {
                session.set_instruction(&text);
            }

            import_inputs(&mut session, &paths, dir.as_deref(), &filter)?;
            apply_selection(&mut session, &select, auto)?;

            let final_prompt = session.final_prompt();
            print_summary(session.token_estimate(), session.budget())?;
            write_output(&final_prompt, output, clipboard)
        }
        Commands::Templates => list_templates(),
    }
}

fn import_inputs(
    session: &mut PromptSession,
    paths: &[PathBuf],
    dir: Option<&std::path::Path>,
    filter: &ImportFilterConfig,
) -> anyhow::Result<()> {
    let mut warning_count = 0;

    if !paths.is_empty() {
        let (candidates, stat_warnings) = file_candidates(paths);
        warning_count += stat_warnings.len();
        let batch = import_files(candidates, ImportMode::Files, filter, read_file_text);
        warning_count += session.commit_batch(batch).len();
    }

    if let Some(root) = dir {
        let candidates = scan_directory(root)?;
        let batch = import_files(candidates, ImportMode::Folder, filter, read_file_text);
        warning_count += session.commit_batch(batch).len();
    }

    info!(
        "{} files in the list ({} import warnings)",
        session.files().len(),
        warning_count
    );
    Ok(())
}

fn apply_selection(session: &mut PromptSession, select: &[String], auto: bool) -> anyhow::Result<()> {
    if !select.is_empty() {
        for name in select {
            session.select(name)?;
        }
        return Ok(());
    }

    if auto {
        session.select_all();
        return Ok(());
    }

    if session.files().is_empty() {
        debug!("No files imported; composing a template-only prompt");
        return Ok(());
    }

    run_picker(session)
}

fn list_templates() -> anyhow::Result<()> {
    let mut stdout = io::stdout();

    writeln!(stdout, "Task types:")?;
    for key in templates::TASK_TYPES {
        writeln!(stdout, "  {}", key)?;
    }

    writeln!(stdout)?;
    writeln!(stdout, "Custom instruction sets:")?;
    for key in templates::CUSTOM_INSTRUCTION_TYPES {
        writeln!(stdout, "  {}", key)?;
    }

    Ok(())
}
