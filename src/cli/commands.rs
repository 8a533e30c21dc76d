use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::load_config;
use crate::pager::fetch_page;
use crate::resume::resume_session;
use crate::tui::run_interactive;
use crate::utils::projects_root;

/// Page size used when streaming the whole corpus in `--list` mode.
const LIST_PAGE_SIZE: usize = 50;

#[derive(Parser, Debug)]
#[command(name = "cc-session-browser")]
#[command(version)]
#[command(about = "Browse and resume Claude Code conversations", long_about = None)]
pub struct Cli {
    /// Only list conversations started in the current directory
    #[arg(long)]
    pub current_dir: bool,

    /// Print the conversation list to stdout instead of opening the browser
    #[arg(long)]
    pub list: bool,

    /// Arguments passed through to `claude` when resuming
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "CLAUDE_ARGS")]
    pub claude_args: Vec<String>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config();
    let root = projects_root()?;

    let dir_filter = if cli.current_dir {
        Some(env::current_dir().context("failed to resolve the current directory")?)
    } else {
        None
    };

    if cli.list {
        return print_list(&root, dir_filter.as_deref());
    }

    let Some(request) = run_interactive(&root, dir_filter.as_deref(), &config)? else {
        return Ok(());
    };

    println!("Resuming conversation: {}", request.session_id);
    if !request.project_path.is_empty() {
        println!("Directory: {}", request.project_path);
    }

    let code = resume_session(&request, &cli.claude_args)?;
    std::process::exit(code);
}

/// Streams every conversation through the pager, one page at a time, and
/// prints a line per conversation. A short page means the corpus is done.
fn print_list(root: &Path, dir_filter: Option<&Path>) -> Result<()> {
    let mut offset = 0;
    let mut printed = 0usize;

    loop {
        let page = fetch_page(root, LIST_PAGE_SIZE, offset, dir_filter)?;
        for conversation in &page.conversations {
            println!(
                "{}  {}  {}  {}",
                conversation.session_id,
                conversation.end_time.format("%Y-%m-%d %H:%M"),
                conversation.project_name,
                conversation.first_message.lines().next().unwrap_or(""),
            );
        }
        printed += page.conversations.len();
        if page.conversations.len() < LIST_PAGE_SIZE {
            break;
        }
        offset += LIST_PAGE_SIZE;
    }

    if printed == 0 {
        println!("No conversations found");
    }
    Ok(())
}
