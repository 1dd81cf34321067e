// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search command implementation.

use std::io::Write;

use termcolor::StandardStream;

use kwscan::cli::{Cli, OutputFormat, SearchArgs};
use kwscan::color;
use kwscan::engine::Engine;
use kwscan::error::ExitCode;
use kwscan::output::json::JsonFormatter;
use kwscan::output::text::TextFormatter;
use kwscan::output::{FormatOptions, TextReport};
use kwscan::pattern::PatternId;
use kwscan::reader::{FileReader, TextBuffer};
use kwscan::scanner::{Callback, Match, MatchCollection, MatchSink, ShortTextPolicy};
use kwscan::settings::{Settings, load_config};
use kwscan::source::TextSource;
use kwscan::timing::{PhaseTiming, Stopwatch, TimingInfo};

/// A text argument after loading.
struct Loaded {
    name: String,
    text: kwscan::Result<TextBuffer>,
}

/// One text's report plus the error that failed it, if any.
struct Outcome {
    report: TextReport,
    error: Option<kwscan::Error>,
}

impl Outcome {
    fn done(report: TextReport) -> Self {
        Self {
            report,
            error: None,
        }
    }

    fn failed(name: String, error: kwscan::Error) -> Self {
        Self {
            report: TextReport::failed(name, &error),
            error: Some(error),
        }
    }
}

/// Run the search command.
pub fn run(cli: &Cli, args: &SearchArgs) -> anyhow::Result<ExitCode> {
    let mut watch = Stopwatch::start();
    let cwd = std::env::current_dir()?;
    let config = load_config(cli.config.as_deref(), &cwd)?;

    let mut settings = Settings::resolve(&args.keywords, &config)?;
    if args.strict {
        settings.engine.scan.short_text = ShortTextPolicy::Error;
    }
    let keywords = settings.keywords.load()?;

    let reader = FileReader::new();
    let texts: Vec<Loaded> = args
        .texts
        .iter()
        .map(|arg| {
            let source = TextSource::detect(arg);
            Loaded {
                name: source.name(),
                text: source.load(&reader),
            }
        })
        .collect();
    let load_ms = watch.lap();

    let engine = Engine::new(keywords, settings.engine)?;
    let build_ms = watch.lap();

    let format = args.output.unwrap_or(config.output.format);
    let options = FormatOptions::with_limit(args.limit.unwrap_or(config.output.limit));
    let jobs = args.jobs.unwrap_or(config.search.jobs);

    let mut text_out = (format == OutputFormat::Text).then(|| {
        TextFormatter::stdout(color::choose(args.color, args.no_color), options.clone())
    });

    let outcomes = if args.verbose {
        scan_streaming(&engine, texts, &options, text_out.as_mut())?
    } else {
        scan_parallel(&engine, texts, &options, jobs)?
    };
    let scan_ms = watch.lap();

    for outcome in &outcomes {
        if let Some(error) = &outcome.error {
            eprintln!("kwscan: {}: {}", outcome.report.source, error);
        }
    }
    let (reports, errors): (Vec<TextReport>, Vec<Option<kwscan::Error>>) =
        outcomes.into_iter().map(|o| (o.report, o.error)).unzip();
    let total: usize = reports.iter().map(|r| r.total).sum();

    let timing = args.timing.then(|| TimingInfo {
        phases: PhaseTiming {
            load_ms,
            build_ms,
            scan_ms,
            total_ms: watch.total(),
        },
        texts: reports.len(),
        bytes: reports.iter().map(|r| r.bytes).sum(),
    });

    match text_out {
        Some(mut out) => {
            if !args.verbose {
                for report in &reports {
                    if args.count {
                        out.write_count(report)?;
                    } else {
                        out.write_report(report)?;
                    }
                }
                out.write_truncation_message()?;
            }
            if reports.len() > 1 && !args.count {
                out.write_summary(&reports)?;
            }
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            JsonFormatter::new(&mut lock).write_search(
                &engine.case_mode().to_string(),
                engine.patterns().len(),
                &reports,
                timing.as_ref(),
            )?;
            lock.flush()?;
        }
    }

    if let Some(timing) = &timing {
        eprintln!("{}", timing.phases.format_text());
        eprintln!("{}", timing.format_throughput());
    }

    if let Some(error) = errors.into_iter().flatten().next() {
        return Ok(ExitCode::from(&error));
    }
    Ok(if total > 0 {
        ExitCode::Success
    } else {
        ExitCode::NoMatch
    })
}

/// Scan all loaded texts on a rayon pool, sharing one engine.
fn scan_parallel(
    engine: &Engine,
    texts: Vec<Loaded>,
    options: &FormatOptions,
    jobs: usize,
) -> anyhow::Result<Vec<Outcome>> {
    let buffers: Vec<&TextBuffer> = texts.iter().filter_map(|t| t.text.as_ref().ok()).collect();
    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;
    let mut results = pool.install(|| engine.search_many(&buffers)).into_iter();

    let outcomes = texts
        .into_iter()
        .map(|loaded| match loaded.text {
            Err(error) => Outcome::failed(loaded.name, error),
            Ok(buffer) => match results.next() {
                Some(Ok(matches)) => Outcome::done(TextReport::new(
                    loaded.name,
                    buffer.len(),
                    engine.patterns(),
                    &matches,
                    options,
                )),
                Some(Err(error)) => Outcome::failed(loaded.name, error),
                None => Outcome::failed(
                    loaded.name,
                    kwscan::Error::Internal("missing scan result".to_string()),
                ),
            },
        })
        .collect();
    Ok(outcomes)
}

/// Scan texts one at a time, reporting each match as it is found.
fn scan_streaming(
    engine: &Engine,
    texts: Vec<Loaded>,
    options: &FormatOptions,
    mut out: Option<&mut TextFormatter<StandardStream>>,
) -> anyhow::Result<Vec<Outcome>> {
    let mut outcomes = Vec::with_capacity(texts.len());

    for loaded in texts {
        let buffer = match loaded.text {
            Ok(buffer) => buffer,
            Err(error) => {
                outcomes.push(Outcome::failed(loaded.name, error));
                continue;
            }
        };

        let mut collection = MatchCollection::new();
        let mut events = Vec::new();
        let mut write_error = None;
        let result = {
            let mut sink = Callback(|m: Match| {
                collection.on_match(m);
                events.push(m);
                if write_error.is_none()
                    && let Some(out) = out.as_deref_mut()
                    && let Err(e) = out.write_match(&loaded.name, m.offset, &keyword(engine, m.pattern))
                {
                    write_error = Some(e);
                }
            });
            engine.search(&buffer, &mut sink)
        };
        if let Some(e) = write_error {
            return Err(e.into());
        }

        outcomes.push(match result {
            Ok(_) => Outcome::done(
                TextReport::new(
                    loaded.name,
                    buffer.len(),
                    engine.patterns(),
                    &collection,
                    options,
                )
                .with_events(events),
            ),
            Err(error) => Outcome::failed(loaded.name, error),
        });
    }

    Ok(outcomes)
}

fn keyword(engine: &Engine, id: PatternId) -> String {
    engine
        .patterns()
        .get(id)
        .map(|p| p.display().into_owned())
        .unwrap_or_default()
}
