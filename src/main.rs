use std::{env, process::ExitCode};

use ariadne::{Color, Label, Report, ReportKind, Source};
use savage_rules::{Attrs, MemoryGraph, Ruleset, Variant};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

fn main() -> ExitCode {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	let args = env::args().skip(1).collect::<Vec<_>>();
	match args.first().map(String::as_str) {
		Some("check") => check(&args[1..].join(" ")),
		_ => load(&args),
	}
}

/// Loads a ruleset into an in-memory graph and summarizes what was registered.
fn load(args: &[String]) -> ExitCode {
	let mut ruleset = Ruleset::default();
	for arg in args {
		match arg.as_str() {
			"--super-powers" => ruleset = ruleset.with_super_powers(true),
			other => match other.parse::<Variant>() {
				Ok(variant) => ruleset.variant = variant,
				Err(err) => {
					eprintln!("{err}");
					eprintln!("Usage: savage-rules [swade|swd] [--super-powers]");
					eprintln!("       savage-rules check <attrs>");
					return ExitCode::FAILURE;
				}
			},
		}
	}

	let mut graph = MemoryGraph::new();
	let report = ruleset.load(&mut graph);

	println!(
		"Loaded {}{}",
		ruleset.variant,
		if ruleset.super_powers { " with the Super Powers Companion" } else { "" }
	);
	for (category, catalog) in graph.categories() {
		println!("{category:>20}: {}", catalog.len());
	}
	println!("{:>20}: {}", "rules", graph.rules().len());
	println!("{:>20}: {}", "requirements", graph.requirements().len());

	if report.warnings.is_empty() {
		ExitCode::SUCCESS
	} else {
		println!();
		for warning in &report.warnings {
			println!("Warning: {warning}");
		}
		ExitCode::FAILURE
	}
}

/// Parses a single attrs string, reporting any problems against the input.
fn check(input: &str) -> ExitCode {
	match input.parse::<Attrs>() {
		Ok(attrs) => {
			for field in attrs.iter() {
				println!("{}: {:?}", field.key, field.values);
			}
			println!("Canonical: {attrs}");
			ExitCode::SUCCESS
		}
		Err(err) => {
			for problem in &err.problems {
				let report = Report::build(ReportKind::Error, problem.span.clone())
					.with_message("Invalid attrs")
					.with_label(
						Label::new(problem.span.clone())
							.with_message(&problem.message)
							.with_color(Color::Red),
					)
					.finish();
				if let Err(io_err) = report.eprint(Source::from(input)) {
					eprintln!("{}: {io_err}", problem.message);
				}
			}
			ExitCode::FAILURE
		}
	}
}
