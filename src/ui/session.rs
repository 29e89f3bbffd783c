//! Interactive input session
//!
//! One command per line, each handled to completion before the next line is
//! read. A fetch blocks the session for the whole network round trip.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

use super::notify::{show, Notice, NoticeLevel};
use super::table::{page_count, render_page, render_table};
use crate::commands::{fetch_comments, save_comments};
use crate::AppState;

const HELP: &str = "\
Commands:
  <url>         fetch comments for a video (same as `fetch <url>`)
  save          save the fetched comments to CSV
  next | prev   scroll the comment table
  page <n>      jump to page n
  help          show this help
  quit          exit";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Fetch(String),
    Save,
    NextPage,
    PrevPage,
    Page(usize),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Parse one line of user input
pub fn parse_command(line: &str) -> SessionCommand {
    let line = line.trim();
    if line.is_empty() {
        return SessionCommand::Empty;
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_ascii_lowercase().as_str() {
        "fetch" => SessionCommand::Fetch(rest.to_string()),
        "save" => SessionCommand::Save,
        "next" | "n" => SessionCommand::NextPage,
        "prev" | "p" => SessionCommand::PrevPage,
        "page" => match rest.parse::<usize>() {
            Ok(n) if n > 0 => SessionCommand::Page(n - 1),
            _ => SessionCommand::Unknown(line.to_string()),
        },
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        // 其他输入都当作 URL 输入框的内容
        _ => SessionCommand::Fetch(line.to_string()),
    }
}

/// Run the interactive session until `quit` or end of input
pub async fn run_session<R, W>(state: &mut AppState, input: R, mut out: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "{} v{}", state.config.ui.title, crate::VERSION)?;
    writeln!(out, "Type `help` for commands.")?;

    let page_size = state.config.ui.page_size;
    let mut page = 0usize;
    let mut lines = input.lines();

    loop {
        write!(out, "URL> ")?;
        out.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        let command = parse_command(&line);
        debug!("Session command: {:?}", command);

        match command {
            SessionCommand::Empty => continue,
            SessionCommand::Quit => break,
            SessionCommand::Help => writeln!(out, "{}", HELP)?,
            SessionCommand::Fetch(url) => {
                let refresh = match fetch_comments(state, &url).await {
                    Ok(_) => true,
                    Err(notice) => {
                        show(&mut out, &notice)?;
                        // 上游失败时表格被清空，URL 无效时保持原样
                        notice.level == NoticeLevel::Error
                    }
                };
                if refresh {
                    page = 0;
                    writeln!(out, "{}", render_page(state.session.records(), page, page_size))?;
                }
            }
            SessionCommand::Save => show(&mut out, &save_comments(state))?,
            SessionCommand::NextPage => {
                let last = page_count(state.session.len(), page_size) - 1;
                page = (page + 1).min(last);
                writeln!(out, "{}", render_page(state.session.records(), page, page_size))?;
            }
            SessionCommand::PrevPage => {
                page = page.saturating_sub(1);
                writeln!(out, "{}", render_page(state.session.records(), page, page_size))?;
            }
            SessionCommand::Page(n) => {
                let last = page_count(state.session.len(), page_size) - 1;
                page = n.min(last);
                writeln!(out, "{}", render_page(state.session.records(), page, page_size))?;
            }
            SessionCommand::Unknown(text) => {
                show(&mut out, &Notice::warning(format!("Unknown command: {}", text)))?;
            }
        }
    }

    Ok(())
}

/// Fetch once, print the full table and optionally save.
///
/// Returns `false` when any step produced a warning or error.
pub async fn run_once<W: Write>(
    state: &mut AppState,
    url: &str,
    save: bool,
    mut out: W,
) -> Result<bool> {
    if let Err(notice) = fetch_comments(state, url).await {
        show(&mut out, &notice)?;
        return Ok(false);
    }

    writeln!(out, "{}", render_table(state.session.records()))?;

    if save {
        let notice = save_comments(state);
        show(&mut out, &notice)?;
        return Ok(notice.level == NoticeLevel::Success);
    }

    Ok(true)
}
