use clap::{Parser as ClapParser, Subcommand};
use fqparser::cli::{self, CheckOptions, CheckResult, CliError};
use fqparser::{LogLevel, ParserConfig};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "fq")]
#[command(about = "fq - parse find-style file-selection queries")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); overrides FQ_LOG_LEVEL
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a query and print its expression tree
    Check {
        /// The query to parse (reads from stdin if not provided)
        query: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't print the tree
        #[arg(long)]
        syntax_only: bool,

        /// Print the query in canonical find syntax instead of JSON
        #[arg(long, conflicts_with = "pretty")]
        canonical: bool,
    },

    /// Print the tokens the parser consumes, one JSON object per line,
    /// up to the point where parsing stopped
    Tokens {
        /// The query to scan (reads from stdin if not provided)
        query: Option<String>,
    },

    /// Print the reductions the parser reports, in order
    Reductions {
        /// The query to parse (reads from stdin if not provided)
        query: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let level = match cli.log_level {
        Some(level) => level,
        None => LogLevel::from_env()?,
    };
    cli::init_logging(level);

    let config = ParserConfig::from_env()?;

    match cli.command {
        Commands::Check {
            query,
            pretty,
            syntax_only,
            canonical,
        } => {
            let options = CheckOptions {
                query: read_query(query)?,
                syntax_only,
                canonical,
                config,
            };
            run_check(&options, pretty)
        }
        Commands::Tokens { query } => {
            let trace = cli::collect_tokens(&read_query(query)?, config);
            for token in &trace.tokens {
                println!("{}", cli::token_to_json(token));
            }
            match trace.error {
                Some(e) => Err(e.into()),
                None => Ok(()),
            }
        }
        Commands::Reductions { query } => {
            for call in cli::collect_reductions(&read_query(query)?, config)? {
                println!("{}", call);
            }
            Ok(())
        }
    }
}

fn read_query(query: Option<String>) -> Result<String, CliError> {
    match query {
        Some(q) => Ok(q),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        None => Err(CliError::NoInput),
    }
}

fn run_check(options: &CheckOptions, pretty: bool) -> Result<(), CliError> {
    match cli::execute_check(options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Parsed { tree } => {
            let json = if pretty {
                format!("{:#}", tree)
            } else {
                tree.to_string()
            };
            println!("{}", json);
        }
        CheckResult::Canonical(text) => println!("{}", text),
    }
    Ok(())
}
