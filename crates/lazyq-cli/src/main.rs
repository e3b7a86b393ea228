//! lazyq CLI: runs the query-operator tutorial over a product catalog.

mod tutorial;

use clap::{Parser, Subcommand};
use lazyq_core::catalog::load_catalog;
use lazyq_core::config::{OutputFormat, TutorialConfig};
use lazyq_core::record::{sample_catalog, Product};
use tracing_subscriber::EnvFilter;
use tutorial::{run_tutorial, section_names, Section};

#[derive(Parser)]
#[command(name = "lazyq")]
#[command(about = "Walk through lazy query operators over an in-memory catalog", long_about = None)]
struct Cli {
    /// Log every operator materialization (sets the filter to `trace`)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the tutorial sections and print their results
    Run {
        /// Catalog file (.json, .yaml/.yml or .csv) replacing the sample catalog
        #[arg(short, long)]
        catalog: Option<String>,

        /// Only print these sections (repeatable, case-insensitive)
        #[arg(short, long = "section")]
        sections: Vec<String>,

        /// Output format: text or json (overrides config)
        #[arg(short, long)]
        format: Option<String>,

        /// Separator for the AGGREGATE section (overrides config)
        #[arg(long)]
        separator: Option<String>,
    },

    /// List the tutorial section names in run order
    List,
}

/// Command-line values that take precedence over the environment.
#[derive(Debug, Default)]
struct RunOverrides {
    catalog: Option<String>,
    sections: Vec<String>,
    format: Option<String>,
    separator: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            catalog,
            sections,
            format,
            separator,
        } => {
            let overrides = RunOverrides {
                catalog,
                sections,
                format,
                separator,
            };
            if let Err(e) = run(overrides) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::List => {
            for name in section_names() {
                println!("{}", name);
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(overrides: RunOverrides) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = TutorialConfig::from_env();
    apply_overrides(&mut config, overrides)?;

    let products = load_products(&config)?;
    tracing::info!(products = products.len(), output = %config.output, "running tutorial");

    let sections = run_tutorial(&config, products)?;
    print!("{}", render(&sections, config.output)?);
    Ok(())
}

fn apply_overrides(
    cfg: &mut TutorialConfig,
    overrides: RunOverrides,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = overrides.catalog {
        cfg.catalog_path = Some(path);
    }
    if !overrides.sections.is_empty() {
        cfg.sections = overrides.sections;
    }
    if let Some(format) = overrides.format {
        cfg.output = format.parse::<OutputFormat>()?;
    }
    if let Some(sep) = overrides.separator {
        cfg.name_separator = sep;
    }
    if let Some(unknown) = cfg
        .sections
        .iter()
        .find(|s| !section_names().any(|name| name.eq_ignore_ascii_case(s)))
    {
        let msg = format!("unknown section '{}' (see `lazyq list`)", unknown);
        return Err(msg.into());
    }
    Ok(())
}

fn load_products(cfg: &TutorialConfig) -> Result<Vec<Product>, Box<dyn std::error::Error>> {
    match &cfg.catalog_path {
        Some(path) => Ok(load_catalog(path)?),
        None => Ok(sample_catalog()),
    }
}

fn render(sections: &[Section], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(sections)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for section in sections {
                out.push_str(section.name);
                out.push_str(":\n");
                for line in &section.lines {
                    out.push_str(line);
                    out.push('\n');
                }
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_overrides, render, RunOverrides};
    use crate::tutorial::{run_tutorial, section_names, Section};
    use lazyq_core::config::{OutputFormat, TutorialConfig};
    use lazyq_core::record::sample_catalog;

    fn run_sections(names: &[&str]) -> Vec<Section> {
        let config = TutorialConfig {
            sections: names.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        };
        run_tutorial(&config, sample_catalog()).expect("tutorial runs")
    }

    fn lines_of(name: &str) -> Vec<String> {
        let mut sections = run_sections(&[name]);
        assert_eq!(sections.len(), 1, "section {} not found", name);
        sections.remove(0).lines
    }

    #[test]
    fn cli_overrides_higher_priority_than_env() {
        let mut config = TutorialConfig::from_lookup(|key| match key {
            "LAZYQ_OUTPUT" => Some("json".into()),
            "LAZYQ_NAME_SEPARATOR" => Some(" | ".into()),
            _ => None,
        });
        assert_eq!(config.output, OutputFormat::Json);

        let overrides = RunOverrides {
            format: Some("text".into()),
            sections: vec!["RANGE".into()],
            ..Default::default()
        };
        apply_overrides(&mut config, overrides).expect("valid overrides");
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.sections, vec!["RANGE".to_string()]);
        // Untouched by the CLI, so the environment value stays.
        assert_eq!(config.name_separator, " | ");
    }

    #[test]
    fn unknown_format_is_rejected() {
        let mut config = TutorialConfig::default();
        let overrides = RunOverrides {
            format: Some("xml".into()),
            ..Default::default()
        };
        assert!(apply_overrides(&mut config, overrides).is_err());
    }

    #[test]
    fn unknown_section_is_rejected() {
        let mut config = TutorialConfig::default();
        let overrides = RunOverrides {
            sections: vec!["where".into(), "WHEREVER".into()],
            ..Default::default()
        };
        let err = apply_overrides(&mut config, overrides).expect_err("unknown section");
        assert!(err.to_string().contains("WHEREVER"));

        // Names from the environment are checked too.
        let mut config = TutorialConfig::from_lookup(|key| match key {
            "LAZYQ_SECTIONS" => Some("orderby,nope".into()),
            _ => None,
        });
        let result = apply_overrides(&mut config, RunOverrides::default());
        assert!(result.is_err());

        let mut config = TutorialConfig::default();
        let overrides = RunOverrides {
            sections: vec!["groupby".into(), "TakeLast".into()],
            ..Default::default()
        };
        assert!(apply_overrides(&mut config, overrides).is_ok());
    }

    #[test]
    fn every_section_runs_in_order() {
        let sections = run_sections(&[]);
        let names: Vec<&str> = sections.iter().map(|s| s.name).collect();
        let expected: Vec<&str> = section_names().collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn add_range_feeds_later_sections() {
        assert_eq!(
            lines_of("AGGREGATES"),
            vec!["COUNT: 8, MAX: 1200, AVERAGE: 413.125, SUM: 3305".to_string()]
        );
        assert_eq!(
            lines_of("FIRST_LAST_ELEMENTAT"),
            vec!["FIRST: Laptop, LAST: Mouse, ELEMENTAT(2): Desk".to_string()]
        );
    }

    #[test]
    fn where_runs_before_add_range() {
        assert_eq!(
            lines_of("WHERE"),
            vec!["Laptop", "Smartphone", "Headphones"]
        );
    }

    #[test]
    fn order_by_price_is_ascending() {
        assert_eq!(
            lines_of("ORDERBY"),
            vec![
                "Notebook - 5",
                "Mouse - 50",
                "Chair - 150",
                "Headphones - 200",
                "Desk - 300",
                "Tablet - 600",
                "Smartphone - 800",
                "Laptop - 1200",
            ]
        );
    }

    #[test]
    fn group_join_lists_categories_with_products() {
        assert_eq!(
            lines_of("GROUPJOIN"),
            vec![
                "Electronics:",
                "- Laptop",
                "- Smartphone",
                "- Headphones",
                "- Tablet",
                "- Mouse",
                "Furniture:",
                "- Desk",
                "- Chair",
            ]
        );
    }

    #[test]
    fn take_while_and_skip_while_stop_at_first_failure() {
        // Laptop (1200) is first, so nothing is skipped and nothing is taken.
        assert_eq!(lines_of("SKIPWHILE").len(), 8);
        assert!(lines_of("TAKEWHILE").is_empty());
        assert_eq!(
            lines_of("SKIPWHILE_NAMES"),
            vec!["Skipped Names: Bob/Charlie/David/Eve"]
        );
        assert_eq!(lines_of("TAKEWHILE_NAMES"), vec!["Take Names: "]);
        assert_eq!(
            lines_of("TAKEWHILE_SHORT_NAMES"),
            vec!["TakeWhile Result: Bob, Eve"]
        );
        assert_eq!(
            lines_of("SKIPWHILE_NUMBERS"),
            vec!["SkipWhile Result: 4, 5, 6, 7"]
        );
    }

    #[test]
    fn replace_renames_desk() {
        let lines = lines_of("REPLACE");
        assert_eq!(lines[2], "Office Desk 300");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn aggregate_uses_configured_separator() {
        let config = TutorialConfig {
            sections: vec!["aggregate".into()],
            name_separator: ",".into(),
            ..Default::default()
        };
        let sections = run_tutorial(&config, sample_catalog()).expect("tutorial runs");
        let expected = format!(
            "Combined product names: {}",
            "Laptop,Smartphone,Desk,Chair,Headphones,Notebook,Tablet,Mouse"
        );
        assert_eq!(sections[0].lines, vec![expected]);
    }

    #[test]
    fn text_and_json_rendering() {
        let sections = run_sections(&["REPEAT"]);
        let text = render(&sections, OutputFormat::Text).expect("render text");
        assert_eq!(text, "REPEAT:\nHello\nHello\nHello\n");

        let json = render(&sections, OutputFormat::Json).expect("render json");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(parsed[0]["name"], "REPEAT");
        assert_eq!(parsed[0]["lines"].as_array().map(|a| a.len()), Some(3));
    }
}
