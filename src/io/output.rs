use crate::config::EffortParameters;
use crate::core::{ComplexityLevel, DatabaseUsage, SizeCategory};
use crate::effort::EffortTotals;
use crate::formatting::{ColoredFormatter, FormattingConfig, OutputFormatter};
use crate::report::{
    CategoryMatrix, DatabaseBreakdown, GroupKey, GroupMetric, GroupSummary, InputSummary,
    MigrationReport, ReportRow,
};
use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;
use std::io::Write;

/// Suggested name for the CSV export
pub const DEFAULT_EXPORT_FILE_NAME: &str = "talend_migration_analysis.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
    Markdown,
    Terminal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    /// Rows in the most complex section
    pub top: usize,
    /// Rows in the easiest section
    pub tail: usize,
    /// Optional extra group-by section
    pub grouping: Option<(Vec<GroupKey>, GroupMetric)>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top: crate::config::default_top(),
            tail: crate::config::default_top(),
            grouping: None,
        }
    }
}

impl ReportOptions {
    fn groups(&self, report: &MigrationReport) -> Option<(GroupMetric, Vec<GroupSummary>)> {
        self.grouping
            .as_ref()
            .map(|(keys, metric)| (*metric, report.group_by(keys, *metric)))
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &MigrationReport) -> anyhow::Result<()>;
}

/// Writes the export table: one line per file, highest score first.
pub struct CsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_report(&mut self, report: &MigrationReport) -> anyhow::Result<()> {
        let mut csv_writer = csv::Writer::from_writer(&mut self.writer);
        if report.rows.is_empty() {
            csv_writer.write_record(EXPORT_COLUMNS)?;
        }
        for row in &report.rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Export column order
pub const EXPORT_COLUMNS: [&str; 7] = [
    "file",
    "component_count",
    "size_category",
    "complexity",
    "database_usage",
    "complexity_score",
    "estimated_hours",
];

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a InputSummary,
    parameters: &'a EffortParameters,
    totals: &'a EffortTotals,
    rows: &'a [ReportRow],
    complexity_distribution: Vec<(ComplexityLevel, usize)>,
    size_distribution: Vec<(SizeCategory, usize)>,
    database_distribution: Vec<(DatabaseUsage, usize)>,
    database_breakdown: Vec<DatabaseBreakdown>,
    size_complexity_counts: CategoryMatrix<usize>,
    effort_breakdown: CategoryMatrix<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    groups: Option<Vec<GroupSummary>>,
}

pub struct JsonWriter<W: Write> {
    writer: W,
    options: ReportOptions,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W, options: ReportOptions) -> Self {
        Self { writer, options }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &MigrationReport) -> anyhow::Result<()> {
        let document = JsonReport {
            summary: &report.summary,
            parameters: &report.parameters,
            totals: &report.totals,
            rows: &report.rows,
            complexity_distribution: report.complexity_distribution(),
            size_distribution: report.size_distribution(),
            database_distribution: report.database_distribution(),
            database_breakdown: report.database_breakdown(),
            size_complexity_counts: report.size_complexity_counts(),
            effort_breakdown: report.effort_breakdown(),
            groups: self.options.groups(report).map(|(_, groups)| groups),
        };
        let json = serde_json::to_string_pretty(&document)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
    options: ReportOptions,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, options: ReportOptions) -> Self {
        Self { writer, options }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &MigrationReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Migration Analysis Report")?;
        writeln!(self.writer)?;
        self.write_summary(report)?;
        self.write_effort(report)?;
        self.write_files("Most Complex Jobs", report.top(self.options.top))?;
        self.write_files("Easiest Jobs", report.bottom(self.options.tail))?;
        self.write_database_breakdown(report)?;
        self.write_matrix(
            "Files by Size and Complexity",
            &report.size_complexity_counts(),
            |v| v.to_string(),
        )?;
        self.write_matrix(
            "Estimated Hours by Size and Complexity",
            &report.effort_breakdown(),
            |v| format_hours(*v),
        )?;
        if let Some((metric, groups)) = self.options.groups(report) {
            self.write_groups(metric, &groups)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_summary(&mut self, report: &MigrationReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Total rows | {} |", report.summary.total_rows)?;
        writeln!(self.writer, "| Unique files | {} |", report.summary.unique_files)?;
        writeln!(
            self.writer,
            "| Unique components | {} |",
            report.summary.unique_component_types
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_effort(&mut self, report: &MigrationReport) -> anyhow::Result<()> {
        let totals = &report.totals;
        let params = &report.parameters;
        writeln!(self.writer, "## Effort Estimate")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Total Hours | Total Days | Total Weeks | Total Files |")?;
        writeln!(self.writer, "|-------------|------------|-------------|-------------|")?;
        writeln!(
            self.writer,
            "| {} | {} | {} | {} |",
            format_hours(totals.total_hours),
            format_hours(totals.total_days),
            format_hours(totals.total_weeks),
            totals.total_files
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Assumes {} developers, {} hours/day, {} days/week.",
            params.developers, params.hours_per_day, params.days_per_week
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_files(&mut self, title: &str, rows: &[ReportRow]) -> anyhow::Result<()> {
        writeln!(self.writer, "## {}", title)?;
        writeln!(self.writer)?;
        if rows.is_empty() {
            writeln!(self.writer, "No files analyzed.")?;
            writeln!(self.writer)?;
            return Ok(());
        }
        writeln!(
            self.writer,
            "| File | Score | Complexity | Size | Database Usage | Hours |"
        )?;
        writeln!(
            self.writer,
            "|------|-------|------------|------|----------------|-------|"
        )?;
        for row in rows {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} |",
                escape_cell(&row.file),
                row.complexity_score,
                row.complexity,
                row.size_category,
                row.database_usage,
                format_hours(row.estimated_hours)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_database_breakdown(&mut self, report: &MigrationReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Database Usage Breakdown")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Database Usage | File Count | Avg Complexity Score |")?;
        writeln!(self.writer, "|----------------|------------|----------------------|")?;
        for entry in report.database_breakdown() {
            writeln!(
                self.writer,
                "| {} | {} | {:.2} |",
                entry.database_usage, entry.file_count, entry.avg_complexity_score
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_matrix<T>(
        &mut self,
        title: &str,
        matrix: &CategoryMatrix<T>,
        render: impl Fn(&T) -> String,
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "## {}", title)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Size | Low | Medium | High |")?;
        writeln!(self.writer, "|------|-----|--------|------|")?;
        for (size, columns) in &matrix.cells {
            let cells: Vec<String> = columns.iter().map(|(_, v)| render(v)).collect();
            writeln!(self.writer, "| {} | {} |", size, cells.join(" | "))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_groups(&mut self, metric: GroupMetric, groups: &[GroupSummary]) -> anyhow::Result<()> {
        writeln!(self.writer, "## Grouped by {}", metric_label(metric))?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Group | Count | Sum | Mean |")?;
        writeln!(self.writer, "|-------|-------|-----|------|")?;
        for group in groups {
            writeln!(
                self.writer,
                "| {} | {} | {:.2} | {:.2} |",
                group.label.describe(),
                group.count,
                group.sum,
                group.mean
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    options: ReportOptions,
    formatter: ColoredFormatter,
    plain: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, options: ReportOptions, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            options,
            plain: !formatting.color.should_use_color(),
            formatter: ColoredFormatter::new(formatting),
        }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(if self.plain {
                presets::ASCII_FULL
            } else {
                presets::UTF8_FULL
            })
            .set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    fn section(&mut self, emoji: &str, fallback: &str, title: &str) -> anyhow::Result<()> {
        let marker = self.formatter.emoji(emoji, fallback);
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} {}",
            marker,
            self.formatter.header(title)
        )?;
        Ok(())
    }

    fn write_files(&mut self, rows: &[ReportRow]) -> anyhow::Result<()> {
        if rows.is_empty() {
            writeln!(self.writer, "{}", self.formatter.dim("No files analyzed."))?;
            return Ok(());
        }
        let mut table = self.table();
        table.set_header(vec![
            "File",
            "Components",
            "Size",
            "Complexity",
            "Database Usage",
            "Score",
            "Hours",
        ]);
        for row in rows {
            table.add_row(vec![
                row.file.clone(),
                row.component_count.to_string(),
                row.size_category.to_string(),
                self.formatter
                    .complexity(row.complexity, row.complexity.label()),
                row.database_usage.to_string(),
                row.complexity_score.to_string(),
                format_hours(row.estimated_hours),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_matrix<T>(
        &mut self,
        matrix: &CategoryMatrix<T>,
        render: impl Fn(&T) -> String,
    ) -> anyhow::Result<()> {
        let mut table = self.table();
        table.set_header(vec!["Size", "Low", "Medium", "High"]);
        for (size, columns) in &matrix.cells {
            let mut cells = vec![size.to_string()];
            cells.extend(columns.iter().map(|(_, v)| render(v)));
            table.add_row(cells);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &MigrationReport) -> anyhow::Result<()> {
        self.section("📊", "[STATS]", "Data Overview")?;
        writeln!(self.writer, "Total rows: {}", report.summary.total_rows)?;
        writeln!(self.writer, "Unique files: {}", report.summary.unique_files)?;
        writeln!(
            self.writer,
            "Unique components: {}",
            report.summary.unique_component_types
        )?;

        self.section("⏱", "[EFFORT]", "Effort Estimation Results")?;
        let totals = report.totals;
        writeln!(
            self.writer,
            "Total Hours: {}   Total Days: {}   Total Weeks: {}   Total Files: {}",
            self.formatter.bold(&format_hours(totals.total_hours)),
            self.formatter.bold(&format_hours(totals.total_days)),
            self.formatter.bold(&format_hours(totals.total_weeks)),
            self.formatter.bold(&totals.total_files.to_string())
        )?;
        let params = report.parameters;
        writeln!(
            self.writer,
            "{}",
            self.formatter.dim(&format!(
                "{} developers x {} hours/day, {} days/week",
                params.developers, params.hours_per_day, params.days_per_week
            ))
        )?;

        let top = self.options.top;
        self.section("🔥", "[TOP]", &format!("Top {} Most Complex Jobs", top))?;
        self.write_files(report.top(top))?;

        let tail = self.options.tail;
        self.section("✅", "[EASY]", &format!("Bottom {} Easiest Jobs", tail))?;
        self.write_files(report.bottom(tail))?;

        self.section("🗄", "[DB]", "Database Usage Breakdown")?;
        let mut table = self.table();
        table.set_header(vec!["Database Usage", "File Count", "Avg Complexity Score"]);
        for entry in report.database_breakdown() {
            table.add_row(vec![
                entry.database_usage.to_string(),
                entry.file_count.to_string(),
                format!("{:.2}", entry.avg_complexity_score),
            ]);
        }
        writeln!(self.writer, "{table}")?;

        self.section("📈", "[CHART]", "Files Distribution: Size vs Complexity")?;
        self.write_matrix(&report.size_complexity_counts(), |v| v.to_string())?;

        self.section("📈", "[CHART]", "Estimated Hours by Size and Complexity")?;
        self.write_matrix(&report.effort_breakdown(), |v| format_hours(*v))?;

        if let Some((metric, groups)) = self.options.groups(report) {
            self.section("🔍", "[GROUP]", &format!("Grouped by {}", metric_label(metric)))?;
            let mut table = self.table();
            table.set_header(vec!["Group", "Count", "Sum", "Mean"]);
            for group in groups {
                table.add_row(vec![
                    group.label.describe(),
                    group.count.to_string(),
                    format!("{:.2}", group.sum),
                    format!("{:.2}", group.mean),
                ]);
            }
            writeln!(self.writer, "{table}")?;
        }

        if report.rows.is_empty() {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "{}",
                self.formatter.warning("Input contained no component rows.")
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    writer: Box<dyn Write>,
    options: ReportOptions,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Csv => Box::new(CsvWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer, options)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer, options)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, options, formatting)),
    }
}

/// A raw `|` would end the Markdown cell early.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn format_hours(value: f64) -> String {
    format!("{:.1}", value)
}

fn metric_label(metric: GroupMetric) -> &'static str {
    match metric {
        GroupMetric::ComplexityScore => "complexity score",
        GroupMetric::EstimatedHours => "estimated hours",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ComponentRow;
    use crate::pipeline::analyze;

    fn sample_report() -> MigrationReport {
        let rows = vec![
            ComponentRow::new("job1.kjb", "tMap", "tMap_1"),
            ComponentRow::new("job2.kjb", "tRunJob", "tRunJob_1"),
        ];
        analyze(&rows, &EffortParameters::default()).unwrap()
    }

    fn render<F>(write: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> anyhow::Result<()>,
    {
        let mut buffer = Vec::new();
        write(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_csv_header_and_order() {
        let report = sample_report();

        let output = render(|buf| CsvWriter::new(buf).write_report(&report));

        let mut lines = output.lines();
        assert_eq!(lines.next().unwrap(), EXPORT_COLUMNS.join(","));
        assert_eq!(lines.next().unwrap(), "job2.kjb,1,Small,High,Other/None,5,12.0");
        assert_eq!(lines.next().unwrap(), "job1.kjb,1,Small,Low,Snowflake Only,1,6.4");
    }

    #[test]
    fn test_csv_empty_report_still_has_header() {
        let report = analyze(&[], &EffortParameters::default()).unwrap();

        let output = render(|buf| CsvWriter::new(buf).write_report(&report));

        assert_eq!(output.trim_end(), EXPORT_COLUMNS.join(","));
    }

    #[test]
    fn test_json_contains_totals_and_groups() {
        let report = sample_report();
        let options = ReportOptions {
            grouping: Some((vec![GroupKey::Complexity], GroupMetric::EstimatedHours)),
            ..Default::default()
        };

        let output = render(|buf| JsonWriter::new(buf, options.clone()).write_report(&report));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["totals"]["total_files"], 2);
        assert_eq!(value["rows"][0]["database_usage"], "Other/None");
        assert_eq!(value["groups"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_markdown_sections() {
        let report = sample_report();

        let output =
            render(|buf| MarkdownWriter::new(buf, ReportOptions::default()).write_report(&report));

        assert!(output.starts_with("# Migration Analysis Report"));
        assert!(output.contains("## Most Complex Jobs"));
        assert!(output.contains("| job2.kjb | 5 | High | Small | Other/None | 12.0 |"));
        assert!(output.contains("| 18.4 |"));
        assert!(!output.contains("## Grouped by"));
    }

    #[test]
    fn test_markdown_escapes_pipes_in_file_names() {
        let rows = vec![ComponentRow::new("a|b.kjb", "tMap", "tMap_1")];
        let report = analyze(&rows, &EffortParameters::default()).unwrap();

        let output =
            render(|buf| MarkdownWriter::new(buf, ReportOptions::default()).write_report(&report));

        assert!(output.contains("| a\\|b.kjb | 1 | Low |"));
    }

    /// Accepts nothing; every write fails like a full disk.
    struct FullDevice;

    impl Write for FullDevice {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("no space left on device"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_buffered_write_failures_are_reported() {
        let report = sample_report();

        for format in [
            OutputFormat::Csv,
            OutputFormat::Json,
            OutputFormat::Markdown,
            OutputFormat::Terminal,
        ] {
            let destination = Box::new(std::io::BufWriter::new(FullDevice));
            let mut writer = create_writer(
                format,
                destination,
                ReportOptions::default(),
                FormattingConfig::plain(),
            );

            assert!(
                writer.write_report(&report).is_err(),
                "{:?} swallowed the write error",
                format
            );
        }
    }

    fn strip_ansi(text: &str) -> String {
        let mut plain = String::with_capacity(text.len());
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                plain.push(c);
            }
        }
        plain
    }

    #[test]
    fn test_coloured_terminal_table_stays_aligned() {
        let report = sample_report();
        let formatting = FormattingConfig {
            color: crate::formatting::ColorMode::Always,
            emoji: crate::formatting::EmojiMode::Never,
        };

        let output = render(|buf| {
            TerminalWriter::new(buf, ReportOptions::default(), formatting).write_report(&report)
        });
        let plain = strip_ansi(&output);

        let table: Vec<&str> = plain
            .lines()
            .skip_while(|line| !line.contains("Most Complex Jobs"))
            .skip(1)
            .take_while(|line| !line.trim().is_empty())
            .collect();
        assert!(table.iter().any(|line| line.contains("job2.kjb")));
        let width = table[0].chars().count();
        assert!(table.iter().all(|line| line.chars().count() == width));
    }

    #[test]
    fn test_terminal_plain_output() {
        let report = sample_report();

        let output = render(|buf| {
            TerminalWriter::new(buf, ReportOptions::default(), FormattingConfig::plain())
                .write_report(&report)
        });

        assert!(output.contains("[STATS] Data Overview"));
        assert!(output.contains("Total Hours: 18.4"));
        assert!(output.contains("job2.kjb"));
    }
}
