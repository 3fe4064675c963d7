//! `demo-check` command line

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use demo_check::{init_tracing, render, run_all, run_demo, CheckConfig, Demo, OutputFormat};
use std::path::PathBuf;

fn cli() -> Command {
    let mut cli = Command::new("demo-check")
        .version(demo_check::VERSION)
        .about("Verify committed finance demo notebooks and figures")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("root")
                .long("root")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Repository root (defaults to the workspace this binary was built from)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Output as JSON"),
        );

    for demo in Demo::ALL {
        cli = cli.subcommand(
            Command::new(demo.name()).about(format!("Run the {} artifact check", demo.name())),
        );
    }

    cli.subcommand(Command::new("all").about("Check every demo, stopping at the first failure"))
        .subcommand(Command::new("list").about("List demos and their artifact paths"))
}

fn config_from(matches: &ArgMatches) -> CheckConfig {
    let mut config = CheckConfig::new();
    if let Some(root) = matches.get_one::<PathBuf>("root") {
        config = config.with_root(root);
    }
    if matches.get_flag("json") {
        config = config.with_format(OutputFormat::Json);
    }
    config
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let matches = cli().get_matches();
    let Some((name, args)) = matches.subcommand() else {
        return Ok(());
    };
    let config = config_from(args);

    match name {
        "list" => {
            for demo in Demo::ALL {
                println!("{:<14} {:<16} {}", demo.name(), demo.selector(), demo.notebook());
                println!("{:<14} {:<16} {}", "", "figure", demo.figure());
            }
        }
        "all" => {
            let reports = run_all(&config)?;
            println!("{}", render(&reports, config.format)?);
        }
        name => {
            let demo: Demo = name.parse()?;
            let report = run_demo(demo, &config)
                .with_context(|| format!("root: {}", config.root.display()))?;
            println!("{}", render(std::slice::from_ref(&report), config.format)?);
        }
    }

    Ok(())
}
