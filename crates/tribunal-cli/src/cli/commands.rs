use super::args::{Cli, Command, InitArgs, RunArgs};
use crate::exit_codes;
use tribunal_core::config::{load_config, write_sample_config, EvalConfig};
use tribunal_core::eval::dataset;
use tribunal_core::eval::driver::{run_suite, EvalCase};
use tribunal_core::providers::ModelRegistry;
use tribunal_core::report::console;
use tribunal_core::report::{ResultsWriter, RunSummary, StrategyScore};
use tribunal_core::strategy::build_strategies;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Run(args) => run(args).await,
        Command::Init(args) => init(&args),
    }
}

fn init(args: &InitArgs) -> anyhow::Result<i32> {
    if args.path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        );
    }
    write_sample_config(&args.path)?;
    println!("wrote {}", args.path.display());
    Ok(exit_codes::SUCCESS)
}

async fn run(args: RunArgs) -> anyhow::Result<i32> {
    let mut cfg = load_config(&args.config)?;
    if let Some(rows) = args.rows {
        cfg.rows = rows;
    }
    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }

    let api_key = std::env::var(&cfg.backends.api_key_env).unwrap_or_default();
    if api_key.is_empty() {
        tracing::warn!(
            var = %cfg.backends.api_key_env,
            "API key variable unset; hosted backends will be rejected"
        );
    }
    let registry = ModelRegistry::from_config(&cfg.backends, &api_key);
    let strategies = build_strategies(&cfg.strategies, &registry)?;
    let cases = load_cases(&cfg)?;
    tracing::info!(
        cases = cases.len(),
        strategies = strategies.len(),
        seed = cfg.seed,
        "starting evaluation run"
    );

    let names: Vec<String> = strategies.iter().map(|s| s.name().to_string()).collect();
    let writer = ResultsWriter::new(&cfg.output.results_path, names);

    let outcomes = match run_suite(&strategies, &cases, cfg.on_row_failure, |outcome| {
        writer.append(outcome)
    })
    .await
    {
        Ok(outcomes) => outcomes,
        Err(e) => {
            eprintln!("run aborted: {e:?}");
            return Ok(exit_codes::RUN_FAILED);
        }
    };

    let metrics = tribunal_metrics::per_strategy(&outcomes);
    let scores: Vec<StrategyScore> = metrics
        .iter()
        .map(|m| StrategyScore {
            strategy: m.strategy.clone(),
            f1: m.f1(),
            tpr: m.tpr(),
            tnr: m.tnr(),
        })
        .collect();
    let summary = RunSummary::new(outcomes.len(), scores);
    summary.append_to(&cfg.output.summary_path)?;
    console::print_summary(&summary);
    Ok(exit_codes::SUCCESS)
}

fn load_cases(cfg: &EvalConfig) -> anyhow::Result<Vec<EvalCase>> {
    let ds = &cfg.dataset;
    if let Some(path) = &ds.path {
        let rows = dataset::load_rows(path, ds.format, ds.skip_rows, cfg.seed)?;
        Ok(dataset::cases_from_rows(&rows, cfg.rows))
    } else {
        let correct = ds
            .correct_path
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("dataset is missing 'correct_path'"))?;
        let hallucinated = ds
            .hallucinated_path
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("dataset is missing 'hallucinated_path'"))?;
        dataset::load_paired_cases(
            correct,
            hallucinated,
            ds.format,
            ds.skip_rows,
            cfg.seed,
            cfg.rows,
        )
    }
}
