//! Text output formatter.
//!
//! Grouped format (default):
//! ```text
//! <source>: <total> matches
//!   <keyword>: <offset>, <offset>, ...
//! ```
//!
//! Streaming format (`--verbose`), one line per match in scan order:
//! ```text
//! <source>:<offset>: <keyword>
//! ```

use std::io::Write;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::{FormatOptions, TextReport};
use crate::color::scheme;
use crate::tables::TableStats;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
    options: FormatOptions,
    truncated: bool,
}

impl TextFormatter<StandardStream> {
    /// Create a formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self::new(StandardStream::stdout(color_choice), options)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W, options: FormatOptions) -> Self {
        Self {
            out,
            options,
            truncated: false,
        }
    }

    /// Write one match as soon as it is found.
    pub fn write_match(&mut self, source: &str, offset: usize, keyword: &str) -> std::io::Result<()> {
        self.write_source(source)?;
        write!(self.out, ":")?;
        self.out.set_color(&scheme::offset())?;
        write!(self.out, "{}", offset)?;
        self.out.reset()?;
        write!(self.out, ": ")?;
        self.out.set_color(&scheme::keyword())?;
        write!(self.out, "{}", keyword)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    /// Write the grouped report for one text.
    pub fn write_report(&mut self, report: &TextReport) -> std::io::Result<()> {
        if report.is_failed() {
            return Ok(());
        }

        self.write_source(&report.source)?;
        write!(self.out, ": ")?;
        self.out.set_color(&scheme::count())?;
        write!(self.out, "{}", report.total)?;
        self.out.reset()?;
        writeln!(self.out, " {}", plural(report.total, "match", "matches"))?;

        for hits in &report.keywords {
            write!(self.out, "  ")?;
            self.out.set_color(&scheme::keyword())?;
            write!(self.out, "{}", hits.keyword)?;
            self.out.reset()?;
            write!(self.out, ": ")?;

            for (i, offset) in hits.offsets.iter().enumerate() {
                if i > 0 {
                    write!(self.out, ", ")?;
                }
                self.out.set_color(&scheme::offset())?;
                write!(self.out, "{}", offset)?;
                self.out.reset()?;
            }
            if hits.truncated {
                self.truncated = true;
                write!(self.out, " (+{} more)", hits.count - hits.offsets.len())?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Write only the match count for one text.
    pub fn write_count(&mut self, report: &TextReport) -> std::io::Result<()> {
        if report.is_failed() {
            return Ok(());
        }
        self.write_source(&report.source)?;
        writeln!(self.out, ": {}", report.total)
    }

    /// Write the summary line across several texts.
    pub fn write_summary(&mut self, reports: &[TextReport]) -> std::io::Result<()> {
        let total: usize = reports.iter().map(|r| r.total).sum();
        let matched = reports.iter().filter(|r| r.total > 0).count();
        writeln!(
            self.out,
            "{} {} in {} of {} {}",
            total,
            plural(total, "match", "matches"),
            matched,
            reports.len(),
            plural(reports.len(), "text", "texts"),
        )
    }

    /// Write truncation hint if any offsets were dropped.
    pub fn write_truncation_message(&mut self) -> std::io::Result<()> {
        if let Some(limit) = self.options.limit
            && self.truncated
        {
            writeln!(
                self.out,
                "Showing at most {} offsets per keyword. Use --limit 0 to see all.",
                limit
            )?;
        }
        Ok(())
    }

    /// Write table statistics.
    pub fn write_stats(&mut self, stats: &TableStats) -> std::io::Result<()> {
        self.write_heading("tables")?;
        writeln!(self.out, "  patterns: {}", stats.patterns)?;
        writeln!(self.out, "  case mode: {}", stats.case_mode)?;
        writeln!(self.out, "  min length: {}", stats.min_len)?;
        writeln!(self.out, "  block width: {}", stats.block)?;
        writeln!(self.out, "  default shift: {}", stats.default_shift)?;
        writeln!(self.out, "  zero-shift buckets: {}", stats.zero_shift_buckets)?;
        writeln!(self.out, "  prefix buckets: {}", stats.prefix_buckets)?;
        writeln!(
            self.out,
            "  largest candidate bucket: {}",
            stats.largest_candidate_bucket
        )?;

        self.write_heading("shift histogram")?;
        for entry in &stats.shift_histogram {
            writeln!(self.out, "  {:>4}: {}", entry.shift, entry.slots)?;
        }
        Ok(())
    }

    /// Check if any keyword's offsets were truncated.
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_source(&mut self, source: &str) -> std::io::Result<()> {
        self.out.set_color(&scheme::source())?;
        write!(self.out, "{}", source)?;
        self.out.reset()
    }

    fn write_heading(&mut self, title: &str) -> std::io::Result<()> {
        self.out.set_color(&scheme::heading())?;
        write!(self.out, "{}", title)?;
        self.out.reset()?;
        writeln!(self.out, ":")
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
