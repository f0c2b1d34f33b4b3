use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rpntree::{EvalContext, Evaluator, ExpressionTree, TraversalOrder};
use serde_json::json;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Printed on stdout when evaluation divides by zero.
const DIVZERO_SENTINEL: &str = "DIVZERO";

const EXIT_ERROR: u8 = 1;
const EXIT_DIVZERO: u8 = 3;

/// Deepest tree `--draw` and `--json` will render; both recurse per level.
const MAX_RENDER_DEPTH: usize = 4096;

/// Build expression trees from postfix tokens and evaluate postfix arithmetic
#[derive(Parser, Debug)]
#[command(name = "rpntree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Raise log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    debug: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a tree from postfix tokens and print its renderings
    Tree {
        /// Rendering to print (repeatable; default: all three)
        #[arg(short, long = "order", value_enum)]
        orders: Vec<TraversalOrder>,

        /// Also draw the tree
        #[arg(long)]
        draw: bool,

        /// Print a JSON document instead of plain text
        #[arg(long)]
        json: bool,

        /// Postfix tokens; arguments are also split on whitespace.
        /// Put operands that start with '-' after `--`
        #[arg(allow_negative_numbers = true)]
        tokens: Vec<String>,
    },

    /// Evaluate a postfix integer expression
    Eval {
        /// Print a JSON document instead of plain text
        #[arg(long)]
        json: bool,

        /// Expression tokens, e.g. `5 1 2 + 4 * + 3 -`
        #[arg(required = true, allow_negative_numbers = true)]
        expression: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .with_env_var("RPNTREE_LOG")
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!(verbosity, "logging initialized");
}

fn execute_command(cli: &Cli) -> Result<ExitCode> {
    match &cli.command {
        Commands::Tree {
            orders,
            draw,
            json,
            tokens,
        } => run_tree(&split_tokens(tokens), orders, *draw, *json),
        Commands::Eval { json, expression } => {
            let ctx = EvalContext {
                trace: cli.debug >= 3,
                ..EvalContext::default()
            };
            run_eval(&expression.join(" "), ctx, *json)
        }
    }
}

fn split_tokens(args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| arg.split_whitespace())
        .map(String::from)
        .collect()
}

fn run_tree(
    tokens: &[String],
    orders: &[TraversalOrder],
    draw: bool,
    json: bool,
) -> Result<ExitCode> {
    let tree = ExpressionTree::from_postfix(tokens).context("failed to build expression tree")?;

    if draw || json {
        let depth = tree.root().map_or(0, |root| root.depth());
        if depth > MAX_RENDER_DEPTH {
            bail!(
                "tree is {} levels deep; --draw and --json render at most {}",
                depth,
                MAX_RENDER_DEPTH
            );
        }
    }

    let orders = if orders.is_empty() {
        TraversalOrder::ALL.to_vec()
    } else {
        orders.to_vec()
    };

    if json {
        let mut renderings = serde_json::Map::new();
        for order in &orders {
            renderings.insert(order.name().to_string(), json!(tree.traverse(*order)));
        }
        let doc = json!({
            "tokens": tokens,
            "renderings": renderings,
            "tree": tree.root(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(ExitCode::SUCCESS);
    }

    for order in orders {
        println!("{}: {}", order, tree.traverse(order).join(" "));
    }

    if draw {
        if let Some(root) = tree.root() {
            print!("{}", root.diagram());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_eval(expression: &str, ctx: EvalContext, json: bool) -> Result<ExitCode> {
    let outcome = Evaluator::with_context(ctx).evaluate(expression);

    if json {
        let (doc, code) = match &outcome {
            Ok(value) => (
                json!({ "expression": expression, "result": value }),
                ExitCode::SUCCESS,
            ),
            Err(e) if e.is_division_by_zero() => (
                json!({ "expression": expression, "error": DIVZERO_SENTINEL }),
                ExitCode::from(EXIT_DIVZERO),
            ),
            Err(e) => (
                json!({ "expression": expression, "error": e.to_string() }),
                ExitCode::from(EXIT_ERROR),
            ),
        };
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(code);
    }

    match outcome {
        Ok(value) => {
            println!("{}", value);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_division_by_zero() => {
            println!("{}", DIVZERO_SENTINEL);
            Ok(ExitCode::from(EXIT_DIVZERO))
        }
        Err(e) => Err(e).with_context(|| format!("failed to evaluate '{}'", expression)),
    }
}
