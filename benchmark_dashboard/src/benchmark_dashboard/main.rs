//!
//! The benchmark dashboard binary.
//!

pub(crate) mod arguments;

use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;
use self::arguments::Command;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => benchmark_dashboard::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            benchmark_dashboard::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    arguments.validate()?;
    let config = match arguments.config {
        Some(path) => benchmark_dashboard::Config::try_from_path(path)?,
        None => benchmark_dashboard::Config::default(),
    };
    let quiet = arguments.quiet;

    match arguments.command {
        Command::Append {
            data_path,
            series,
            input,
            tool,
            commit,
            date,
            repo_url,
            max_items,
            output_path,
        } => {
            let series = series
                .or_else(|| config.series.clone())
                .unwrap_or_else(|| benchmark_dashboard::BenchmarkSuite::DEFAULT_SERIES.to_owned());
            let existing = if data_path.exists() {
                match benchmark_dashboard::Document::try_from(data_path.as_path()) {
                    Ok(document) => Some(document),
                    Err(error) if error.is_empty() => None,
                    Err(error) => return Err(error.into()),
                }
            } else {
                None
            };
            let mut document = if let Some(document) = existing {
                document
            } else {
                if !quiet {
                    println!(
                        "    {} data file {data_path:?}",
                        "Creating".bright_green().bold()
                    );
                }
                benchmark_dashboard::Document::new(
                    benchmark_dashboard::BenchmarkSuite::default(),
                    config.encoding(),
                )
            };
            if document.suite.repo_url.is_empty() {
                if let Some(repo_url) = repo_url.or_else(|| config.repo_url.clone()) {
                    document.suite.repo_url = repo_url;
                }
            }

            let input = benchmark_dashboard::Input::try_from((input.as_path(), tool))?;
            let commit = benchmark_dashboard::Commit::try_from(commit.as_path())?;
            let date = match date {
                Some(date) => date,
                None => u64::try_from(chrono::Utc::now().timestamp_millis())?,
            };
            if !quiet {
                println!(
                    "   {} {} benchmarks of commit {} to series `{series}`",
                    "Appending".bright_green().bold(),
                    input.benches.len(),
                    commit.short_id(),
                );
            }
            let run = benchmark_dashboard::CommitRun::new(
                commit,
                date,
                input.tool.to_string(),
                input.benches,
            );
            let warnings = document.suite.append(series.as_str(), run)?;
            print_warnings(warnings.as_slice(), quiet);

            if let Some(max_items) = max_items.or(config.max_items) {
                let dropped = document.suite.truncate(series.as_str(), max_items);
                if !quiet && dropped > 0 {
                    println!(
                        "    {} {dropped} oldest runs of series `{series}`",
                        "Dropping".bright_green().bold()
                    );
                }
            }

            let output_path = output_path.unwrap_or(data_path);
            document.save(output_path.as_path())?;
        }
        Command::Render {
            data_paths,
            series,
            filter,
            output_format,
            output_path,
        } => {
            let document = load_merged(data_paths, false, quiet)?;
            let filter = filter
                .map(|filter| regex::Regex::new(filter.as_str()))
                .transpose()?;
            let series = if !series.is_empty() {
                series
            } else if let Some(series) = config.series.clone() {
                vec![series]
            } else {
                document.suite.all_series().keys().cloned().collect()
            };

            let renderings: Vec<benchmark_dashboard::Rendering> = series
                .iter()
                .map(|series| {
                    benchmark_dashboard::render_filtered(
                        &document.suite,
                        series.as_str(),
                        filter.as_ref(),
                    )
                })
                .collect();
            for rendering in renderings.iter() {
                print_warnings(rendering.warnings.as_slice(), quiet);
                if !quiet {
                    rendering.write_all(&mut std::io::stdout())?;
                }
            }

            if let Some(output_path) = output_path {
                if !quiet {
                    println!(
                        "   {} {output_format} to {output_path:?}",
                        "Rendering".bright_green().bold()
                    );
                }
                let output =
                    benchmark_dashboard::Output::try_from((renderings.as_slice(), output_format))?;
                output.write_to_file(output_path.as_path())?;
            }
        }
        Command::Merge {
            data_paths,
            output_format,
            output_path,
        } => {
            let mut document = load_merged(data_paths, true, quiet)?;
            if output_format == benchmark_dashboard::OutputFormat::DataJs
                && document.encoding == benchmark_dashboard::Encoding::Json
            {
                document.encoding = config.encoding();
            }
            if !quiet {
                println!(
                    "     {} {} runs to {output_path:?}",
                    "Merging".bright_green().bold(),
                    document.suite.run_count(),
                );
            }
            let output = benchmark_dashboard::Output::try_from((document, output_format))?;
            output.write_to_file(output_path.as_path())?;
        }
    }

    Ok(())
}

///
/// Loads the data files in parallel and merges them in the argument order.
///
/// Every file that fails to load is reported. With `strict`, any failure aborts the
/// operation; otherwise failed files are skipped. The merged document keeps the
/// encoding of the first loaded file.
///
fn load_merged(
    data_paths: Vec<PathBuf>,
    strict: bool,
    quiet: bool,
) -> anyhow::Result<benchmark_dashboard::Document> {
    let data_paths = benchmark_dashboard::loader::resolve_paths(data_paths)?;

    let mut merged: Option<benchmark_dashboard::Document> = None;
    let mut failures = 0;
    for (path, result) in benchmark_dashboard::loader::load_all(data_paths.as_slice()) {
        match result {
            Ok(document) => {
                if !quiet {
                    println!("     {} {path:?}", "Loading".bright_green().bold());
                }
                if let Some(merged) = merged.as_mut() {
                    merged.suite.merge(document.suite);
                } else {
                    merged = Some(document);
                }
            }
            Err(error) => {
                failures += 1;
                if strict {
                    eprintln!("{} {error}", "Error:".bright_red().bold());
                } else {
                    eprintln!(
                        "{} {error}, skipping {}",
                        "Warning:".yellow().bold(),
                        display_name(path.as_path())
                    );
                }
            }
        }
    }

    if strict && failures > 0 {
        anyhow::bail!(
            "{failures} of {} data files could not be loaded.",
            data_paths.len()
        );
    }
    match merged {
        Some(document) => Ok(document),
        None => anyhow::bail!("None of the {failures} data files could be loaded."),
    }
}

///
/// Prints non-fatal data inconsistencies.
///
fn print_warnings(warnings: &[benchmark_dashboard::SchemaWarning], quiet: bool) {
    if quiet {
        return;
    }
    for warning in warnings.iter() {
        eprintln!("{} {warning}", "Warning:".yellow().bold());
    }
}

///
/// Returns the file name of a path for short messages.
///
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
