use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{arg, value_parser, ArgMatches, Command};
use env_logger::{Builder, Env, Target};
use log::{error, Level};

use u_tspga::ga::{GaConfig, GaRunner, Population, Selection};
use u_tspga::tsplib::{read_initial_population, TsplibProblem};

fn cli() -> Command {
    Command::new("tsp-ga")
        .about("Approximates a TSPLIB tour with a generational genetic algorithm")
        .arg(arg!(<PROBLEM> "TSPLIB problem file").value_parser(value_parser!(PathBuf)))
        .arg(arg!(<INITIAL> "Initial population file").value_parser(value_parser!(PathBuf)))
        .arg(
            arg!(--selection <STRATEGY> "Mating pool selection")
                .value_parser(["tournament", "proportional"])
                .default_value("tournament")
                .required(false),
        )
        .arg(
            arg!(--iterations <N> "Number of generations")
                .value_parser(value_parser!(usize))
                .default_value("100")
                .required(false),
        )
        .arg(
            arg!(--"mutation-probability" <P> "Probability of mutating each child")
                .value_parser(value_parser!(f64))
                .default_value("0.3")
                .required(false),
        )
        .arg(
            arg!(--seed <SEED> "Seed for a reproducible run")
                .value_parser(value_parser!(u64))
                .required(false),
        )
        .arg(arg!(-v --verbose "Log every generation"))
}

struct Options {
    problem: PathBuf,
    initial: PathBuf,
    config: GaConfig,
}

impl Options {
    fn from_matches(matches: &ArgMatches) -> Option<Self> {
        let selection = matches
            .get_one::<String>("selection")
            .and_then(|s| Selection::parse(s))
            .unwrap_or_default();
        let mut config = GaConfig::default()
            .with_selection(selection)
            .with_iterations(*matches.get_one::<usize>("iterations")?)
            .with_mutation_probability(*matches.get_one::<f64>("mutation-probability")?);
        if let Some(&seed) = matches.get_one::<u64>("seed") {
            config = config.with_seed(seed);
        }

        Some(Self {
            problem: matches.get_one::<PathBuf>("PROBLEM")?.clone(),
            initial: matches.get_one::<PathBuf>("INITIAL")?.clone(),
            config,
        })
    }
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let _ = Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| writeln!(buf, "{} {}", level_tag(record.level()), record.args()))
        .target(Target::Stderr)
        .try_init();
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

fn run(options: &Options) -> u_tspga::Result<()> {
    let problem = TsplibProblem::from_file(&options.problem)?;
    let matrix = problem.distance_matrix()?;
    let rows = read_initial_population(&options.initial, matrix.size())?;
    let population = Population::load(&matrix, rows)?;

    println!("Name: {}", problem.name);
    println!("Description: {}", problem.comment);
    println!("Size: {}", matrix.size());

    let result = GaRunner::run(population, &options.config)?;

    let path: Vec<String> = result.best.iter().map(usize::to_string).collect();
    println!("Initial length: {}", result.initial_record);
    println!("Iterations: {}", result.iterations);
    println!("Elapsed: {:.3}s", result.elapsed.as_secs_f64());
    println!("Record: {}", result.record);
    println!("Path: {}", path.join(" "));
    Ok(())
}

/// Parses `args`; on failure prints clap's message and yields the exit code:
/// success for `--help`, failure (status 1) for usage errors.
fn parse_args<I, T>(args: I) -> Result<ArgMatches, ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    cli().try_get_matches_from(args).map_err(|e| {
        let _ = e.print();
        if e.use_stderr() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    })
}

fn main() -> ExitCode {
    let matches = match parse_args(std::env::args_os()) {
        Ok(matches) => matches,
        Err(code) => return code,
    };
    init_logger(matches.get_flag("verbose"));

    let Some(options) = Options::from_matches(&matches) else {
        error!("missing command-line arguments");
        return ExitCode::FAILURE;
    };

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let matches = cli()
            .try_get_matches_from(["tsp-ga", "a.tsp", "a.init"])
            .expect("valid args");
        let options = Options::from_matches(&matches).expect("options");
        assert_eq!(options.problem, PathBuf::from("a.tsp"));
        assert_eq!(options.initial, PathBuf::from("a.init"));
        assert_eq!(options.config, GaConfig::default());
    }

    #[test]
    fn test_overrides() {
        let matches = cli()
            .try_get_matches_from([
                "tsp-ga",
                "a.tsp",
                "a.init",
                "--selection",
                "proportional",
                "--iterations",
                "7",
                "--mutation-probability",
                "0.5",
                "--seed",
                "9",
            ])
            .expect("valid args");
        let config = Options::from_matches(&matches).expect("options").config;
        assert_eq!(config.selection, Selection::Proportional);
        assert_eq!(config.iterations, 7);
        assert_eq!(config.mutation_probability, 0.5);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_wrong_argument_count() {
        assert!(cli().try_get_matches_from(["tsp-ga", "a.tsp"]).is_err());
        assert!(cli().try_get_matches_from(["tsp-ga", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_usage_errors_exit_with_failure() {
        assert_eq!(parse_args(["tsp-ga", "a.tsp"]).err(), Some(ExitCode::FAILURE));
        assert_eq!(
            parse_args(["tsp-ga", "a", "b", "--iterations", "many"]).err(),
            Some(ExitCode::FAILURE)
        );
        assert_eq!(parse_args(["tsp-ga", "--help"]).err(), Some(ExitCode::SUCCESS));
        assert!(parse_args(["tsp-ga", "a.tsp", "a.init"]).is_ok());
    }
}
