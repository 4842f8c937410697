use clap::{Parser, ValueEnum};
use pomvars::config::{ExtractMode, PrefixPolicy, TaskConfiguration, VariableScope};
use pomvars::logger::TracingBuildLogger;
use pomvars::publisher::{BuildContextPublisher, InMemoryPlanStore, PlanBinding, PlanIdentity};
use pomvars::task::ExtractVariablesTask;
use pomvars::variables::Variable;
use pomvars::{NAME, VERSION};
use std::path::PathBuf;
use std::process;
use tracing::{debug, error, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Extract Maven POM values as named build variables.
#[derive(Debug, Parser)]
#[command(name = "pomvars", version, about)]
struct CliArgs {
    /// Base directory the project file is resolved against
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Project file path relative to the base directory (defaults to pom.xml)
    #[arg(long)]
    project_file: Option<String>,

    /// Extract a single custom element instead of the GAV coordinates
    #[arg(long, requires = "element")]
    variable_name: Option<String>,

    /// Path expression for the custom element, e.g. dependencies[0].groupId
    #[arg(long, requires = "variable_name")]
    element: Option<String>,

    /// Replace the default "maven." variable prefix (GAV mode only)
    #[arg(long, conflicts_with = "variable_name")]
    prefix: Option<String>,

    /// Strip a trailing -SNAPSHOT from the extracted version (GAV mode only)
    #[arg(long, conflicts_with = "variable_name")]
    strip_snapshot: bool,

    /// Variable scope to publish into
    #[arg(long, value_enum, default_value_t = ScopeArg::Job)]
    scope: ScopeArg,

    /// Top-level plan key for plan-scoped variables
    #[arg(long, default_value = "LOCAL-PLAN")]
    plan_key: String,

    /// Build result key for plan-scoped variables
    #[arg(long, default_value = "LOCAL-PLAN-1")]
    build_result_key: String,

    /// Output format for the produced variables
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScopeArg {
    Job,
    Result,
    Plan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let args = CliArgs::parse();
    init_logging(&args);

    debug!("{} v{} starting", NAME, VERSION);

    match run(&args) {
        Ok(variables) => print_variables(&variables, args.format),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}

fn run(args: &CliArgs) -> anyhow::Result<Vec<Variable>> {
    let config = TaskConfiguration {
        project_file: args.project_file.clone(),
        mode: extract_mode(args),
        scope: match args.scope {
            ScopeArg::Job => VariableScope::JobLocal,
            ScopeArg::Result => VariableScope::JobResult,
            ScopeArg::Plan => VariableScope::Plan,
        },
    };

    let logger = TracingBuildLogger;
    let plan_store = InMemoryPlanStore::new(&logger);
    let plan = match config.scope {
        VariableScope::Plan => Some(PlanBinding {
            identity: PlanIdentity {
                top_level_plan_key: args.plan_key.clone(),
                build_result_key: args.build_result_key.clone(),
            },
            detached: false,
            store: Box::new(plan_store),
        }),
        _ => None,
    };
    let mut publisher = BuildContextPublisher::new(plan);

    let task = ExtractVariablesTask::new(&args.dir, &config);
    let variables = task.execute(&mut publisher, &logger)?;
    Ok(variables)
}

fn extract_mode(args: &CliArgs) -> ExtractMode {
    match (&args.variable_name, &args.element) {
        (Some(variable_name), Some(element)) => ExtractMode::Custom {
            variable_name: variable_name.clone(),
            element: element.clone(),
        },
        _ => ExtractMode::Gav {
            prefix: match &args.prefix {
                Some(prefix) => PrefixPolicy::Custom(prefix.clone()),
                None => PrefixPolicy::Default,
            },
            strip_snapshot: args.strip_snapshot,
        },
    }
}

fn print_variables(variables: &[Variable], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for variable in variables {
                println!("{}={}", variable.name, variable.value);
            }
        }
        OutputFormat::Json => {
            // Variables are few; serialization cannot realistically fail.
            match serde_json::to_string_pretty(variables) {
                Ok(json) => println!("{}", json),
                Err(err) => {
                    error!("failed to serialize variables: {}", err);
                    process::exit(1);
                }
            }
        }
    }
}

fn init_logging(args: &CliArgs) {
    let level = if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let mut filter = EnvFilter::from_default_env();
    if std::env::var("RUST_LOG").is_err() {
        filter = filter.add_directive(format!("pomvars={}", level).parse().unwrap());
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
