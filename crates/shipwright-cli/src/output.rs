//! Design reporters for the supported output formats.
//!
//! Each reporter renders accepted designs to stdout as they arrive, so a
//! long-running search streams results instead of buffering them. Formatting
//! is split into pure string builders so it stays testable without capturing
//! process output.

use std::fmt::Write as _;

use clap::ValueEnum;
use shipwright_lib::{Catalog, Design, DesignSummary, Reporter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per design: aggregates plus a compact part roster.
    Pretty,
    /// Multi-line block per design with per-part masses.
    Verbose,
    /// Comma-separated rows with a single header line.
    Csv,
    /// One JSON object per line.
    Json,
}

/// Build the reporter for the selected format.
pub fn reporter(format: OutputFormat) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Pretty => Box::new(PrettyReporter),
        OutputFormat::Verbose => Box::new(VerboseReporter),
        OutputFormat::Csv => Box::new(CsvReporter {
            header_written: false,
        }),
        OutputFormat::Json => Box::new(JsonReporter),
    }
}

struct PrettyReporter;

impl Reporter for PrettyReporter {
    fn report(&mut self, catalog: &Catalog, design: &Design, ordinal: usize) -> bool {
        let summary = DesignSummary::from_design(catalog, design, ordinal);
        println!("{}", pretty_line(&summary));
        true
    }
}

struct VerboseReporter;

impl Reporter for VerboseReporter {
    fn report(&mut self, catalog: &Catalog, design: &Design, ordinal: usize) -> bool {
        let summary = DesignSummary::from_design(catalog, design, ordinal);
        print!("{}", verbose_block(&summary));
        true
    }
}

struct CsvReporter {
    header_written: bool,
}

impl Reporter for CsvReporter {
    fn report(&mut self, catalog: &Catalog, design: &Design, ordinal: usize) -> bool {
        if !self.header_written {
            println!("{}", csv_header());
            self.header_written = true;
        }
        let summary = DesignSummary::from_design(catalog, design, ordinal);
        println!("{}", csv_row(&summary));
        true
    }
}

struct JsonReporter;

impl Reporter for JsonReporter {
    fn report(&mut self, catalog: &Catalog, design: &Design, ordinal: usize) -> bool {
        let summary = DesignSummary::from_design(catalog, design, ordinal);
        match serde_json::to_string(&summary) {
            Ok(line) => {
                println!("{line}");
                true
            }
            Err(error) => {
                tracing::error!(%error, "failed to serialize design summary");
                false
            }
        }
    }
}

fn pretty_line(summary: &DesignSummary) -> String {
    let mut line = format!(
        "#{} mass {:.0} t  cost {}  twr {:.1}  h-twr {:.1}  time {:.0} s  fuel {:.1} t/h  speed {:.0} |",
        summary.index,
        summary.mass,
        summary.cost,
        summary.twr,
        summary.horizontal_twr,
        summary.combat_time,
        summary.fuel_usage,
        summary.speed,
    );
    for part in &summary.parts {
        let _ = write!(line, " {}x{}", part.count, part.name);
    }
    line
}

fn verbose_block(summary: &DesignSummary) -> String {
    let mut block = format!(
        "design #{}: mass {:.1} t, area {}, cost {}\n",
        summary.index, summary.mass, summary.area, summary.cost
    );
    let _ = writeln!(
        block,
        "  twr {:.2}, horizontal twr {:.2}, speed {:.0} km/h",
        summary.twr, summary.horizontal_twr, summary.speed
    );
    let _ = writeln!(
        block,
        "  combat time {:.0} s, fuel usage {:.1} t/h",
        summary.combat_time, summary.fuel_usage
    );
    for part in &summary.parts {
        let _ = writeln!(
            block,
            "  {:>4} x {:<10} {:8.1} t",
            part.count, part.name, part.mass
        );
    }
    block
}

fn csv_header() -> String {
    "index,cost,mass,area,twr,horizontal_twr,combat_time,speed,fuel_usage,parts".to_string()
}

fn csv_row(summary: &DesignSummary) -> String {
    // The parts column is space-separated name:count pairs; names never
    // contain commas, so no quoting is needed.
    let parts = summary
        .parts
        .iter()
        .map(|part| format!("{}:{}", part.name, part.count))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{},{},{:.1},{},{:.2},{:.2},{:.0},{:.0},{:.2},{}",
        summary.index,
        summary.cost,
        summary.mass,
        summary.area,
        summary.twr,
        summary.horizontal_twr,
        summary.combat_time,
        summary.speed,
        summary.fuel_usage,
        parts
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> DesignSummary {
        let catalog = Catalog::builtin().unwrap();
        let slots = *catalog.slots();
        let mut design = Design::new(&catalog);
        design.add_with_hull(&catalog, slots.engine_d30s, 4);
        design.add_with_hull(&catalog, slots.tank_small, 3);
        DesignSummary::from_design(&catalog, &design, 2)
    }

    #[test]
    fn pretty_line_carries_the_ordinal_and_part_roster() {
        let line = pretty_line(&sample_summary());
        assert!(line.starts_with("#2 mass"));
        assert!(line.contains("4xe_d30s"));
        assert!(line.contains("3xtank_1x2"));
        assert!(!line.contains('\n'));
    }

    #[test]
    fn verbose_block_lists_every_composed_part() {
        let summary = sample_summary();
        let block = verbose_block(&summary);
        for part in &summary.parts {
            assert!(block.contains(&part.name), "missing part {}", part.name);
        }
        assert!(block.contains("combat time"));
    }

    #[test]
    fn csv_row_has_the_same_arity_as_the_header() {
        let header_columns = csv_header().split(',').count();
        let row = csv_row(&sample_summary());
        assert_eq!(row.split(',').count(), header_columns);
        assert!(row.starts_with("2,"));
        assert!(row.ends_with(|c: char| !c.is_whitespace()));
    }

    #[test]
    fn csv_parts_column_is_comma_free() {
        let row = csv_row(&sample_summary());
        let parts_column = row.rsplit(',').next().unwrap();
        assert!(parts_column.contains("e_d30s:4"));
        assert!(parts_column.contains("tank_1x2:3"));
    }
}
