mod result;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use result::SolverError;
use result::SolverResult;
use santa_solver::core::checking::verify_assignment;
use santa_solver::core::convert_case::Case;
use santa_solver::core::statistics::configure_statistic_logging;
use santa_solver::core::AssignmentEngine;
use santa_solver::core::EngineOptions;
use santa_solver::core::DEFAULT_MAX_ATTEMPTS;
use santa_solver::parsers::parse_instance_file;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The draw to solve, given in the `.santa` format:
    ///  - 'c ...' lines are comments,
    ///  - 'p santa <n>' is the header, stating the number of participants,
    ///  - 'n <id> <id> ...' lists participants,
    ///  - 'x <giver> <receiver>' forbids the giver from drawing the receiver,
    ///  - 'r <giver> <receiver>' is a pairing of the previous round, which may not be repeated.
    #[clap(verbatim_doc_comment)]
    instance_path: PathBuf,

    /// The seed of the draw.
    ///
    /// The same instance drawn with the same seed always results in the same assignment. The seed
    /// of every draw is printed on a 'c seed <seed>' line before the assignment, so that a draw
    /// with a drawn seed can be reproduced.
    ///
    /// Possible values: u64
    #[arg(short = 'r', long = "random-seed", verbatim_doc_comment)]
    random_seed: Option<u64>,

    /// The number of attempts after which the solver gives up on finding an assignment.
    ///
    /// Every attempt is a complete search from a fresh random order of the givers; an instance
    /// for which all attempts fail is reported as exhausted, even if an assignment might exist.
    ///
    /// Possible values: usize
    #[arg(long = "max-attempts", default_value_t = DEFAULT_MAX_ATTEMPTS, verbatim_doc_comment)]
    max_attempts: usize,

    /// Enables log message output from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of statistics from the solver; every statistic is printed on its own
    /// line starting with '%%'.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,

    /// Verifies the assignment against the instance before printing it.
    ///
    /// Possible values: bool
    #[arg(long = "check", verbatim_doc_comment)]
    check: bool,
}

fn configure_logging(verbose: bool, log_statistics: bool) {
    if log_statistics {
        let _ = configure_statistic_logging("%%", None, Some(Case::Camel), None);
    }

    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            writeln!(
                buf,
                "[{}] {}",
                record.level().as_str().to_lowercase(),
                record.args()
            )
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
    info!("Logging successfully configured");
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> SolverResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics);

    if santa_solver::core::asserts::SANTA_ASSERT_LEVEL_DEFINITION
        >= santa_solver::core::asserts::SANTA_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the assert level is set to {}, every drawn assignment is verified before it is returned.",
            santa_solver::core::asserts::SANTA_ASSERT_LEVEL_DEFINITION
        );
    }

    let instance = parse_instance_file(&args.instance_path)?;
    info!(
        "Read {} participants from {}",
        instance.participants.len(),
        args.instance_path.display()
    );

    let request = instance.into_request(args.random_seed);

    let mut engine = AssignmentEngine::new(EngineOptions::with_max_attempts(args.max_attempts));
    let assignment = engine
        .generate(&request)
        .map_err(SolverError::assignment)?;

    if args.check {
        verify_assignment(
            request.participants(),
            request.exclusions(),
            request.no_repeat(),
            &assignment,
        )
        .map_err(SolverError::verification)?;
        info!("The assignment satisfies all constraints");
    }

    let mut stdout = std::io::stdout().lock();
    if let Some(seed) = assignment.seed() {
        writeln!(stdout, "c seed {seed}")?;
    }
    write!(stdout, "{assignment}")?;
    stdout.flush()?;

    Ok(())
}
