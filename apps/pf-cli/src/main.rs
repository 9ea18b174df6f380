use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use pf_analysis::{NodeOutcome, PassKind, PassOutput, PassSet};
use pf_app::{
    AnalysisRequest, AppError, AppResult, list_chemicals, list_kinds, load_config,
    load_flowsheet, run_analysis, summarize,
};
use pf_results::ResultsBundle;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "procflow CLI - process calculations for chemical flowsheets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate flowsheet file syntax and structure
    Validate {
        /// Path to the flowsheet YAML or JSON file
        flowsheet_path: PathBuf,
    },
    /// Run the analysis passes on a flowsheet
    Analyze {
        /// Path to the flowsheet YAML or JSON file
        flowsheet_path: PathBuf,
        /// Pass to run (repeatable); all passes when omitted
        #[arg(long = "pass", value_name = "PASS")]
        passes: Vec<String>,
        /// Run passes concurrently
        #[arg(long)]
        parallel: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Analysis configuration file overriding the one in the flowsheet
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List reference chemicals
    Chemicals {
        /// Filter by id, name or formula
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// List equipment kinds and their categories
    Kinds,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Yaml,
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { flowsheet_path } => cmd_validate(&flowsheet_path),
        Commands::Analyze {
            flowsheet_path,
            passes,
            parallel,
            format,
            config,
        } => cmd_analyze(&flowsheet_path, &passes, parallel, format, config.as_deref()),
        Commands::Chemicals { query } => cmd_chemicals(&query),
        Commands::Kinds => cmd_kinds(),
    }
}

fn cmd_validate(flowsheet_path: &Path) -> AppResult<()> {
    println!("Validating flowsheet: {}", flowsheet_path.display());
    let file = load_flowsheet(flowsheet_path)?;
    let summary = summarize(&file);
    println!("✓ Flowsheet is valid");
    println!("  Name: {} (version {})", summary.name, summary.version);
    println!(
        "  {} nodes, {} streams{}",
        summary.node_count,
        summary.stream_count,
        if summary.has_config {
            ", embedded config"
        } else {
            ""
        }
    );
    for (category, count) in summary.categories {
        println!("    {:?}: {}", category, count);
    }
    Ok(())
}

fn parse_passes(keys: &[String]) -> AppResult<PassSet> {
    if keys.is_empty() {
        return Ok(PassSet::all());
    }
    keys.iter()
        .map(|k| k.parse::<PassKind>())
        .collect::<Result<PassSet, _>>()
        .map_err(|e| AppError::InvalidInput(e.to_string()))
}

fn cmd_analyze(
    flowsheet_path: &Path,
    passes: &[String],
    parallel: bool,
    format: OutputFormat,
    config_path: Option<&Path>,
) -> AppResult<()> {
    let file = load_flowsheet(flowsheet_path)?;
    let request = AnalysisRequest {
        passes: parse_passes(passes)?,
        parallel,
        config: config_path.map(load_config).transpose()?,
    };
    let bundle = run_analysis(&file, &request)?;

    match format {
        OutputFormat::Json => println!("{}", bundle.to_json_pretty()?),
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&bundle)
                .map_err(|e| AppError::Results(format!("Failed to serialize results: {}", e)))?;
            print!("{}", yaml);
        }
        OutputFormat::Table => print_tables(&bundle),
    }
    Ok(())
}

fn print_section<T>(
    title: &str,
    output: &Option<PassOutput<T>>,
    header: &str,
    row: impl Fn(&T) -> String,
) {
    let Some(output) = output else {
        return;
    };
    println!("\n{} ({} entries)", title, output.len());
    println!("  {}", header);
    for outcome in &output.outcomes {
        match outcome {
            NodeOutcome::Computed(record) => println!("  {}", row(record)),
            NodeOutcome::Failed(failure) => {
                println!("  {:<16} FAILED [{}] {}", failure.id.as_str(), failure.reason.code(), failure.reason)
            }
        }
    }
}

fn print_tables(bundle: &ResultsBundle) {
    let report = &bundle.report;
    println!("Analysis {}", bundle.manifest.analysis_id);
    println!(
        "  {} nodes, {} streams, engine {}",
        bundle.manifest.node_count, bundle.manifest.stream_count, bundle.manifest.engine_version
    );

    print_section(
        "Mass balance",
        &report.mass_balance,
        "node             in          out         accumulation",
        |r| format!("{:<16} {:<11.4} {:<11.4} {:.4}", r.id.as_str(), r.in_flow, r.out_flow, r.accumulation),
    );
    print_section(
        "Energy balance",
        &report.energy_balance,
        "node             in          out         delta",
        |r| format!("{:<16} {:<11.4} {:<11.4} {:.4}", r.id.as_str(), r.in_energy, r.out_energy, r.delta_e),
    );
    print_section(
        "Vapor-liquid equilibrium",
        &report.vle,
        "node             T (C)       P           Psat        K",
        |r| {
            format!(
                "{:<16} {:<11.2} {:<11.4} {:<11.4} {:.4}",
                r.id.as_str(), r.temperature, r.pressure, r.vapor_pressure, r.equilibrium_constant
            )
        },
    );
    print_section(
        "Heat transfer",
        &report.heat_transfer,
        "node             duty        U           dT",
        |r| {
            format!(
                "{:<16} {:<11.4} {:<11.4} {:.4}",
                r.id.as_str(), r.heat_duty, r.overall_coefficient, r.delta_t
            )
        },
    );
    print_section(
        "Mass transfer",
        &report.mass_transfer,
        "node             flux        k           driving force",
        |r| {
            format!(
                "{:<16} {:<11.4} {:<11.4} {:.4}",
                r.id.as_str(), r.mass_flux, r.transfer_coefficient, r.driving_force
            )
        },
    );
    print_section(
        "Kinetics",
        &report.kinetics,
        "node             rate        conversion  selectivity",
        |r| {
            format!(
                "{:<16} {:<11.4e} {:<11.4} {:.4}",
                r.id.as_str(), r.reaction_rate, r.conversion, r.selectivity
            )
        },
    );
    print_section(
        "Pressure drop",
        &report.pressure_drop,
        "node             deltaP      Re          f           v",
        |r| {
            format!(
                "{:<16} {:<11.4e} {:<11.4e} {:<11.5} {:.4}",
                r.id.as_str(), r.delta_p, r.reynolds_number, r.friction_factor, r.velocity
            )
        },
    );

    if !report.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &report.warnings {
            println!("  ! {}", warning);
        }
    }

    let totals = &bundle.totals;
    println!("\nTotals (failed entries excluded: {})", totals.failed_entries);
    println!(
        "  flow in {:.4}, out {:.4}, accumulation {:.4}",
        totals.in_flow, totals.out_flow, totals.accumulation
    );
    println!(
        "  energy in {:.4}, out {:.4}, heat duty {:.4}",
        totals.in_energy, totals.out_energy, totals.heat_duty
    );
}

fn cmd_chemicals(query: &str) -> AppResult<()> {
    let chemicals = list_chemicals(query);
    if chemicals.is_empty() {
        println!("No chemicals match '{}'", query);
        return Ok(());
    }
    for chem in chemicals {
        println!(
            "  {:<14} {:<18} {:<8} MW {:>7.2}  Tb {:>7.1} C",
            chem.id.as_str(), chem.name, chem.formula, chem.molecular_weight, chem.boiling_point_c
        );
    }
    Ok(())
}

fn cmd_kinds() -> AppResult<()> {
    for (kind, category) in list_kinds() {
        println!("  {:<16} {:?}", kind.key(), category);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_default_to_all() {
        assert_eq!(parse_passes(&[]).unwrap(), PassSet::all());
    }

    #[test]
    fn passes_parse_by_key() {
        let set = parse_passes(&["vle".to_string(), "kinetics".to_string()]).unwrap();
        assert!(set.contains(PassKind::Vle));
        assert!(set.contains(PassKind::Kinetics));
        assert!(!set.contains(PassKind::MassBalance));

        assert!(matches!(
            parse_passes(&["entropy".to_string()]),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn cli_parses_analyze_flags() {
        let cli = Cli::try_parse_from([
            "pf-cli",
            "analyze",
            "plant.yaml",
            "--pass",
            "vle",
            "--pass",
            "mass_balance",
            "--parallel",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Analyze {
                passes,
                parallel,
                format,
                config,
                ..
            } => {
                assert_eq!(passes, vec!["vle", "mass_balance"]);
                assert!(parallel);
                assert!(matches!(format, OutputFormat::Json));
                assert!(config.is_none());
            }
            _ => panic!("expected analyze"),
        }
    }
}
