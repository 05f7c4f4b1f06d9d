use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};
use treecalc::run;

/// treecalc scans, builds and evaluates a flat arithmetic expression such as
/// `40*4+8`. Operators have no precedence: the leftmost operator is applied
/// last, so `40*4+8` means `40*(4+8)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to evaluate. Digits and `+ - * /` only, no spaces.
    #[arg(default_value = "40*4+8")]
    expression: String,
}

fn main() {
    let args = Args::parse();

    // RUST_LOG controls the log level, defaulting to warn.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter)
         .with_writer(std::io::stderr)
         .with_target(false)
         .init();

    println!("{}", args.expression);
    match run(&args.expression) {
        Ok(evaluation) => {
            println!("{:?}", evaluation.token_values());
            println!("{}", evaluation.rendered);
            println!("{}", evaluation.value);
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
