// mypl: MyPL lexer, parser and AST explorer

use std::fs;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use mypl::cli::{MyplArgs, MyplSubcommand};
use mypl::parser::{Lexer, ParseError, TokenKind};
use mypl::printer::Printer;
use mypl::report::format_diagnostic;
use mypl::ui::App;

fn main() -> Result<ExitCode> {
    let args = MyplArgs::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(io::stderr)
        .init();

    let Some(subcommand) = args.subcommand else {
        MyplArgs::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match subcommand {
        MyplSubcommand::Check { file } => {
            let source = read_source(&file)?;
            match mypl::parse(&source) {
                Ok(program) => {
                    tracing::info!("parsed {} declarations", program.decls.len());
                    println!(
                        "{}: ok ({} declarations)",
                        file.display(),
                        program.decls.len()
                    );
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => Ok(report(&source, &file, &err)),
            }
        }
        MyplSubcommand::Print { file } => {
            let source = read_source(&file)?;
            match mypl::parse(&source) {
                Ok(program) => {
                    print!("{}", Printer::print(&program));
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => Ok(report(&source, &file, &err)),
            }
        }
        MyplSubcommand::Tokens { file } => {
            let source = read_source(&file)?;
            let mut lexer = Lexer::new(&source);
            let mut count = 0usize;
            loop {
                let token = match lexer.next_token() {
                    Ok(token) => token,
                    Err(err) => return Ok(report(&source, &file, &err)),
                };
                println!(
                    "{}:{} {} {}",
                    token.line(),
                    token.column(),
                    token.kind.name(),
                    token.lexeme
                );
                count += 1;
                if token.is(TokenKind::Eos) {
                    break;
                }
            }
            tracing::info!("emitted {} tokens", count);
            Ok(ExitCode::SUCCESS)
        }
        MyplSubcommand::Explore { file } => {
            let source = read_source(&file)?;
            explore(source, &file)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read_source(path: &Path) -> Result<String> {
    tracing::debug!("reading {}", path.display());
    let source = fs::read_to_string(path)
        .with_context(|| format!("cannot read source file '{}'", path.display()))?;
    tracing::debug!("read {} bytes", source.len());
    Ok(source)
}

fn report(source: &str, path: &Path, err: &ParseError) -> ExitCode {
    tracing::debug!(kind = %err.kind, "parse failed");
    eprint!("{}", format_diagnostic(source, &path.display().to_string(), err));
    ExitCode::FAILURE
}

fn explore(source: String, path: &Path) -> Result<()> {
    // Everything that can log happens before the alternate screen
    let mut app = App::new(source, path.display().to_string());
    tracing::debug!(
        tokens = app.tokens.len(),
        outline_rows = app.outline.len(),
        "explorer ready"
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("explorer event loop failed")
}
