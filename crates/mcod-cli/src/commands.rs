use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use mcod_classify::{OtherCauseClassifier, SuicideClassifier, resolve_batch};
use mcod_cli::io::{read_csv, write_csv};
use mcod_model::ClassifyOptions;
use mcod_standards::{CauseCodeTable, RuccRegistry, paths};
use mcod_transform::{
    StandardizationColumns, classify_location, filter_urbanicity, index_rates, standardize,
};

use crate::cli::{BatchArgs, IndexArgs, OtherArgs, StandardizeArgs, SuicideArgs, UrbanicityArgs};

/// The catalog table selected by `--catalog`, `MCOD_CATALOG`, or the built-in asset.
pub fn load_catalogs(path: Option<&Path>) -> Result<Cow<'static, CauseCodeTable>> {
    let path = path.map(Path::to_path_buf).or_else(paths::catalog_override);
    match path {
        Some(path) => {
            let table = CauseCodeTable::from_path(&path)
                .with_context(|| format!("load catalog asset {}", path.display()))?;
            info!(
                path = %path.display(),
                version = table.version(),
                fingerprint = table.fingerprint(),
                "using catalog override"
            );
            Ok(Cow::Owned(table))
        }
        None => Ok(Cow::Borrowed(
            CauseCodeTable::builtin().context("load built-in catalogs")?,
        )),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

/// Reads the batch and settles the data year.
fn load_batch(args: &BatchArgs) -> Result<(DataFrame, i64)> {
    let df = read_csv(&args.input)?;
    let year = match args.year {
        Some(year) => year,
        None => {
            let resolved = resolve_batch(&df).context("resolve year from batch")?;
            debug!(year = resolved.year, revision = %resolved.revision, "year from batch");
            i64::from(resolved.year)
        }
    };
    Ok((df, year))
}

pub fn run_suicide(args: &SuicideArgs, table: &CauseCodeTable) -> Result<()> {
    let span = info_span!("suicide", input = %args.batch.input.display());
    let _guard = span.enter();
    let (df, year) = load_batch(&args.batch)?;
    let options = ClassifyOptions::new().with_primary_in_method_scan(!args.record_axes_only);
    let classifier = SuicideClassifier::new(table, options);

    if args.counts {
        let suicides = classifier.detect(&df, year)?;
        let counts = classifier.method_counts(&suicides, year)?;
        let mut out = Table::new();
        out.set_header(vec!["Method", "Records"]);
        apply_table_style(&mut out);
        for (method, count) in counts.iter() {
            out.add_row(vec![method.to_string(), count.to_string()]);
        }
        out.add_row(vec!["suicides".to_string(), counts.total.to_string()]);
        println!("{out}");
        return Ok(());
    }

    let suicides = classifier.detect(&df, year)?;
    let mut out = match args.method {
        Some(method) => classifier.by_method(&suicides, year, method.into())?,
        None => suicides,
    };
    write_csv(&mut out, args.batch.output.as_deref())
}

pub fn run_other(args: &OtherArgs, table: &CauseCodeTable) -> Result<()> {
    let span = info_span!("other", input = %args.batch.input.display());
    let _guard = span.enter();
    let (df, year) = load_batch(&args.batch)?;
    let mut out = OtherCauseClassifier::new(table).classify(&df, year, args.cause.into())?;
    write_csv(&mut out, args.batch.output.as_deref())
}

pub fn run_catalogs(table: &CauseCodeTable) -> Result<()> {
    let mut out = Table::new();
    out.set_header(vec!["Cause", "Revision", "Match", "Codes"]);
    apply_table_style(&mut out);
    for catalog in table.entries() {
        out.add_row(vec![
            catalog.cause().to_string(),
            catalog.revision().to_string(),
            catalog.mode().as_str().to_string(),
            catalog.len().to_string(),
        ]);
    }
    println!("{out}");
    println!("{} {}", table.name(), table.version());
    println!("sha256 {}", table.fingerprint());
    Ok(())
}

pub fn run_urbanicity(args: &UrbanicityArgs) -> Result<()> {
    let span = info_span!("urbanicity", input = %args.batch.input.display());
    let _guard = span.enter();
    let dir = args.rucc_dir.clone().unwrap_or_else(paths::rucc_dir);
    let registry = RuccRegistry::load_dir(&dir)
        .with_context(|| format!("load RUCC tables from {}", dir.display()))?;
    let (df, year) = load_batch(&args.batch)?;
    let mut out = match args.class {
        Some(class) => filter_urbanicity(&df, year, &registry, class.into())?,
        None => classify_location(&df, year, &registry)?,
    };
    write_csv(&mut out, args.batch.output.as_deref())
}

pub fn run_index(args: &IndexArgs) -> Result<()> {
    let df = read_csv(&args.input)?;
    let mut out = index_rates(&df, &args.rate_column, &args.year_column)?;
    write_csv(&mut out, args.output.as_deref())
}

pub fn run_standardize(args: &StandardizeArgs) -> Result<()> {
    let deaths = read_csv(&args.input)?;
    let population = read_csv(&args.population)?;
    let columns = StandardizationColumns::new(args.age_column.as_str())
        .with_age_group(args.age_group_column.as_str())
        .with_population(args.population_column.as_str());
    let rates = standardize(&deaths, &population, &columns)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rates)?);
        return Ok(());
    }
    let mut out = Table::new();
    out.set_header(vec!["Age group", "Deaths", "Population", "Rate", "Weight", "Weighted"]);
    apply_table_style(&mut out);
    for group in &rates.groups {
        out.add_row(vec![
            group.label.to_string(),
            group.deaths.to_string(),
            format!("{:.0}", group.population),
            format!("{:.4}", group.raw_rate),
            format!("{:.6}", group.weight),
            format!("{:.4}", group.standardized_rate),
        ]);
    }
    println!("{out}");
    println!("Raw rate (per 100,000 persons): {:.2}", rates.raw_rate);
    println!(
        "Age-standardized rate (per 100,000 persons): {:.2}",
        rates.standardized_rate
    );
    Ok(())
}
