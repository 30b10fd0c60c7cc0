use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::debug;
use stackcalc_rs::{
    build_pyramid, Calculator, EvaluatorOptions, LiteralPolicy, ReductionStrategy,
};

/// Evaluates arithmetic statements and builds number pyramids.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate statements given as arguments, or one per line on stdin.
    Eval {
        /// Number of fractional digits kept in the result.
        #[arg(short, long, default_value_t = EvaluatorOptions::DEFAULT_PRECISION)]
        precision: u32,

        /// Drop malformed number literals instead of rejecting the statement.
        #[arg(long)]
        lenient: bool,

        /// Reduce at most one pending operator per incoming operator.
        #[arg(long)]
        single_pop: bool,

        statements: Vec<String>,
    },
    /// Lay out integers as a pyramid.
    Pyramid {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i32>,
    },
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let args = Args::parse();
    debug!("{:?}", args);

    match args.command {
        Command::Eval {
            precision,
            lenient,
            single_pop,
            statements,
        } => {
            let mut options = EvaluatorOptions::new().precision(precision);
            if lenient {
                options = options.literal_policy(LiteralPolicy::Lenient);
            }
            if single_pop {
                options = options.strategy(ReductionStrategy::SinglePop);
            }
            let calculator = Calculator::with_options(options);

            let statements = if statements.is_empty() {
                match io::stdin().lock().lines().collect::<Result<Vec<_>, _>>() {
                    Ok(lines) => lines,
                    Err(e) => {
                        eprintln!("Failed to read stdin: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                statements
            };

            let mut all_valid = true;
            for statement in &statements {
                match calculator.try_evaluate(statement) {
                    Ok(result) => println!("{result}"),
                    Err(e) => {
                        all_valid = false;
                        println!("invalid");
                        debug!("{statement:?}: {e}");
                    }
                }
            }

            if all_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Command::Pyramid { numbers } => match build_pyramid(&numbers) {
            Ok(pyramid) => {
                for row in pyramid {
                    let line = row
                        .iter()
                        .map(|value| value.to_string())
                        .collect::<Vec<_>>()
                        .join(" ");
                    println!("{line}");
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Cannot build pyramid: {e}");
                ExitCode::FAILURE
            }
        },
    }
}
