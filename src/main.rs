use calc_expr::cli::{
    self, BatchOptions, CliError, EvalOptions, execute_batch, execute_check, execute_eval,
    execute_tokens, render_tokens,
};
use calc_expr::{FormatOptions, input::decode_input};
use clap::{ArgAction, Parser as ClapParser, Subcommand};
use std::io::{self, Read};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "calc")]
#[command(about = "Calc - evaluate arithmetic expressions with precise error reporting")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    debug: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression and print the result
    Eval {
        /// The expression (reads one expression per line from stdin if not provided)
        expression: Option<String>,

        /// Fractional digits kept in the printed result
        #[arg(long, env = "CALC_MAX_DECIMALS", default_value_t = 6)]
        max_decimals: u32,

        /// Print the unrounded value
        #[arg(long, conflicts_with = "json")]
        raw: bool,

        /// Print a JSON object with the value and its formatted form
        #[arg(long)]
        json: bool,
    },

    /// Only validate syntax, don't evaluate
    Check {
        /// The expression to check
        expression: String,
    },

    /// Print the token stream of an expression
    Tokens {
        /// The expression to tokenize
        expression: String,
    },

    /// Evaluate a JSON array of expressions
    Batch {
        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Fractional digits kept in formatted results
        #[arg(long, env = "CALC_MAX_DECIMALS", default_value_t = 6)]
        max_decimals: u32,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Show the grammar and error reference
    Docs,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let result = match cli.command {
        Commands::Eval {
            expression,
            max_decimals,
            raw,
            json,
        } => run_eval(expression, max_decimals, raw, json),
        Commands::Check { expression } => execute_check(&expression).map(|expr| {
            tracing::debug!(%expr, "parsed");
            println!("Syntax is valid");
        }),
        Commands::Tokens { expression } => execute_tokens(&expression).map(|tokens| {
            print!("{}", render_tokens(&tokens));
        }),
        Commands::Batch {
            input,
            max_decimals,
            pretty,
        } => run_batch(input, max_decimals, pretty),
        Commands::Docs => {
            print!("{}", cli::get_docs());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(true)
        .with_env_filter(env_filter)
        .init();
}

fn read_stdin() -> Result<Option<String>, CliError> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }
    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;
    Ok(Some(decode_input(&buffer)?.to_string()))
}

fn run_eval(
    expression: Option<String>,
    max_decimals: u32,
    raw: bool,
    json: bool,
) -> Result<(), CliError> {
    let expressions: Vec<String> = match expression {
        Some(e) => vec![e],
        None => read_stdin()?
            .ok_or(CliError::NoInput)?
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect(),
    };

    if expressions.is_empty() {
        return Err(CliError::NoInput);
    }

    for expression in expressions {
        let options = EvalOptions {
            expression,
            format: FormatOptions::with_max_decimals(max_decimals),
            raw,
            json,
        };
        println!("{}", execute_eval(&options)?);
    }
    Ok(())
}

fn run_batch(input: Option<String>, max_decimals: u32, pretty: bool) -> Result<(), CliError> {
    let input = match input {
        Some(s) => s,
        None => read_stdin()?.ok_or(CliError::NoInput)?,
    };

    let options = BatchOptions {
        input,
        format: FormatOptions::with_max_decimals(max_decimals),
    };

    let output = execute_batch(&options)?;
    let json = if pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }?;
    println!("{}", json);
    Ok(())
}
