//! Pipewiz - Question catalog for a CI/CD scaffolding wizard
//!
//! CLI tool for inspecting the wizard's questions, previewing which ones a
//! flow would ask, and resolving a flow from an answer file.

use pipewiz::{
    answers::{self, OptionSet},
    catalog::{Flow, QuestionId},
    cli::{Cli, Commands, OutputFormat},
    question::{ChoiceSource, Visibility},
    AnswerFile, OfflineChoices, Result, Wizard,
};
use std::path::{Path, PathBuf};
use tracing::{debug, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    let cli = Cli::parse_args();

    // Set up logging
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    if let Err(e) = execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<()> {
    let options = load_options(cli.options_file.as_deref(), &cli.set)?;

    match cli.command {
        Commands::Flows => cmd_flows(),
        Commands::Questions { flow, json } => cmd_questions(flow.map(Flow::from), json),
        Commands::Plan { flow, answers, json } => cmd_plan(flow.into(), options, answers, json),
        Commands::Run {
            flow,
            answers,
            defaults,
            stored_only,
            format,
        } => cmd_run(flow.into(), options, &answers, defaults, stored_only, format),
    }
}

/// Options file (explicit, or the default one if present) plus `--set` pairs
fn load_options(path: Option<&Path>, pairs: &[String]) -> Result<OptionSet> {
    let path: Option<PathBuf> = match path {
        Some(p) => Some(p.to_path_buf()),
        None => answers::default_options_path(),
    };

    let base = match path {
        Some(p) => OptionSet::load(&p)?,
        None => OptionSet::new(),
    };

    let options = base.merge_pairs(pairs)?;
    debug!("{} option(s) supplied", options.len());
    Ok(options)
}

fn cmd_flows() -> Result<()> {
    for flow in Flow::ALL {
        let keys: Vec<&str> = flow.order().iter().map(|id| id.key()).collect();
        println!("{:<8} {}", flow.kind(), keys.join(", "));
    }
    Ok(())
}

fn cmd_questions(flow: Option<Flow>, json: bool) -> Result<()> {
    let ids: &[QuestionId] = match flow {
        Some(f) => f.order(),
        None => QuestionId::ALL,
    };

    if json {
        let rows: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| {
                let q = id.question();
                serde_json::json!({
                    "id": q.id,
                    "name": q.name,
                    "kind": q.kind,
                    "store": q.store,
                    "validated": q.validate.is_some(),
                    "remote": matches!(q.choices, Some(ChoiceSource::Remote(_))),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for id in ids {
        let q = id.question();
        let store = if q.store { "stored" } else { "-" };
        println!("{:<24} {:<24} {:<9} {}", q.id, q.name, format!("{:?}", q.kind), store);
    }
    Ok(())
}

fn cmd_plan(
    flow: Flow,
    options: OptionSet,
    answers_path: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let answers = match answers_path {
        Some(p) => answers::load_answers(&p)?,
        None => pipewiz::AnswerSet::new(),
    };

    let wizard = Wizard::new(flow.questions(), options);
    let steps = wizard.plan(&answers);

    if json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    for step in &steps {
        let decision = match &step.visibility {
            Visibility::Prompt => "ask".to_string(),
            Visibility::Skip => "skip".to_string(),
            Visibility::CarryForward(v) => format!("from option: {}", v),
        };
        println!("{:<24} {}", step.id, decision);
    }

    let asked = steps.iter().filter(|s| s.visibility.is_prompt()).count();
    println!("\n{} of {} question(s) would be asked.", asked, steps.len());
    Ok(())
}

fn cmd_run(
    flow: Flow,
    options: OptionSet,
    answers_path: &Path,
    defaults: bool,
    stored_only: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut prompter = AnswerFile::new(answers::load_answers(answers_path)?);
    if defaults {
        prompter = prompter.with_defaults();
    }

    let wizard = Wizard::new(flow.questions(), options);
    let mut resolved = wizard.run(&mut prompter, &OfflineChoices)?;

    if stored_only {
        resolved = resolved.storable(wizard.questions());
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&resolved)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&resolved)?),
    }
    Ok(())
}
