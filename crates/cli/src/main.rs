//! # pigview-cli
//!
//! Command-line interface for the pigview anomaly triage engine.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use backend::{AnalysisClient, DemoDataset};
use clap::{Parser, Subcommand};
use triage::{
    aggregate_segments, apply_view, classify_confidence, classify_severity, validate_records,
    AnomalyRecord, ClientConfig, SortField, SortOrder, ViewState,
};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "pigview")]
#[command(about = "Pipeline-inspection anomaly triage CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate a result set into per-segment tier counts
    Segments {
        /// Saved results JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print one page of the sorted, filtered results table
    List {
        /// Saved results JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Sort column (joint, type, confidence, severity, persistence, growth)
        #[arg(short, long, default_value = "confidence")]
        sort: String,

        /// Sort order (asc, desc)
        #[arg(long, default_value = "desc")]
        order: String,

        /// Keep only records not yet marked viewed
        #[arg(long)]
        unviewed_only: bool,

        /// Keep only records from this segment number onward
        #[arg(long)]
        from_segment: Option<u32>,

        /// Zero-based page index
        #[arg(short, long, default_value = "0")]
        page: usize,

        /// Rows per page
        #[arg(long, default_value = "30")]
        page_size: usize,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Upload inspection CSVs, run the analysis, and save the result set
    Analyze {
        /// Inspection CSV files to submit
        #[arg(short, long, required = true, num_args = 1..)]
        files: Vec<PathBuf>,

        /// Analysis service base URL (default: $PIGVIEW_API_URL)
        #[arg(long)]
        api_url: Option<String>,

        /// Output file for the result set
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Toggle the authoritative viewed flag for one anomaly
    MarkViewed {
        /// Anomaly number
        #[arg(short, long)]
        anomaly: u64,

        /// Analysis service base URL (default: $PIGVIEW_API_URL)
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Dump the embedded demonstration result set
    Demo {
        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Load a saved result set from a JSON file.
fn load_results(path: &PathBuf) -> CliResult<Vec<AnomalyRecord>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse JSON: {}", e))?;

    // Accept both a bare array and the service's {"results": [...]} shape.
    let value = match json.get("results") {
        Some(results) => results.clone(),
        None => json,
    };
    let records: Vec<AnomalyRecord> =
        serde_json::from_value(value).map_err(|e| format!("Bad record shape: {}", e))?;

    validate_records(&records).map_err(|e| e.to_string())?;
    Ok(records)
}

fn parse_sort_field(name: &str) -> CliResult<SortField> {
    match name.to_lowercase().as_str() {
        "joint" | "jointnumber" => Ok(SortField::JointNumber),
        "type" | "anomalytype" => Ok(SortField::AnomalyType),
        "confidence" => Ok(SortField::Confidence),
        "severity" => Ok(SortField::Severity),
        "persistence" => Ok(SortField::Persistence),
        "growth" | "growthrate" => Ok(SortField::GrowthRate),
        other => Err(format!(
            "Unknown sort column '{}' (expected joint, type, confidence, severity, persistence, growth)",
            other
        )),
    }
}

fn parse_sort_order(name: &str) -> CliResult<SortOrder> {
    match name.to_lowercase().as_str() {
        "asc" => Ok(SortOrder::Ascending),
        "desc" => Ok(SortOrder::Descending),
        other => Err(format!("Unknown sort order '{}' (expected asc or desc)", other)),
    }
}

fn client_for(api_url: Option<String>) -> AnalysisClient {
    match api_url {
        Some(url) => AnalysisClient::new(ClientConfig::new(url)),
        None => AnalysisClient::from_env(),
    }
}

/// Write a JSON value to a file or stdout.
fn write_json(value: &serde_json::Value, output: Option<&PathBuf>) -> CliResult<()> {
    if let Some(path) = output {
        let mut file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, value)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        println!("Written to {:?}", path);
    } else {
        println!("{}", serde_json::to_string_pretty(value).unwrap());
    }
    Ok(())
}

/// Run segments command
fn run_segments(input: PathBuf, output: Option<PathBuf>) -> CliResult<()> {
    let records = load_results(&input)?;
    println!(
        "Loaded {} anomaly records from {:?}",
        records.len(),
        input.file_name().unwrap_or_default()
    );

    let segments = aggregate_segments(&records).map_err(|e| e.to_string())?;

    println!("{:>8}  {:>6}  {:>5}  {:>8}  {:>5}", "Segment", "Severe", "New", "Existing", "Total");
    for segment in &segments {
        println!(
            "{:>8}  {:>6}  {:>5}  {:>8}  {:>5}",
            segment.segment_number, segment.severe, segment.new, segment.existing, segment.total
        );
    }
    println!("{} segments, {} anomalies", segments.len(), records.len());

    if output.is_some() {
        let json = serde_json::to_value(&segments).map_err(|e| e.to_string())?;
        write_json(&json, output.as_ref())?;
    }
    Ok(())
}

/// Run list command
#[allow(clippy::too_many_arguments)]
fn run_list(
    input: PathBuf,
    sort: String,
    order: String,
    unviewed_only: bool,
    from_segment: Option<u32>,
    page: usize,
    page_size: usize,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let records = load_results(&input)?;

    let view = ViewState {
        sort_field: parse_sort_field(&sort)?,
        sort_order: parse_sort_order(&order)?,
        unviewed_only,
        segment_filter: from_segment,
        page,
        page_size,
    };

    let results = apply_view(&records, &view);
    match results.row_range(view.page_size) {
        Some((first, last)) => println!(
            "Showing {}-{} of {} anomalies (page {} of {})",
            first,
            last,
            results.total_matches,
            results.page + 1,
            results.total_pages
        ),
        None => println!("No matching anomalies"),
    }
    if let Some(segment) = view.segment_filter {
        println!("Filtered from segment {} onward", segment);
    }

    println!(
        "{:>9}  {:>7}  {:>10}  {:<14}  {:>10}  {:>8}  {:>11}  {:>6}  {:>6}",
        "Anomaly#", "Joint#", "StartDist", "Type", "Confidence", "Severity", "Persistence",
        "Growth", "Viewed"
    );
    for row in &results.rows {
        println!(
            "{:>9}  {:>7}  {:>10.1}  {:<14}  {:>4.1} {:<5}  {:>3.1} {:<4}  {:>11.0}  {:>6.2}  {:>6}",
            row.anomaly_number,
            row.joint_number,
            row.start_distance,
            row.anomaly_type,
            row.confidence,
            format!("({})", classify_confidence(row.confidence).name()),
            row.severity,
            format!("({})", classify_severity(row.severity).name()),
            row.persistence,
            row.growth_rate,
            if row.viewed { "Y" } else { "N" }
        );
    }

    if output.is_some() {
        let json = serde_json::to_value(&results).map_err(|e| e.to_string())?;
        write_json(&json, output.as_ref())?;
    }
    Ok(())
}

/// Run analyze command
fn run_analyze(
    files: Vec<PathBuf>,
    api_url: Option<String>,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let client = client_for(api_url);
    println!(
        "Submitting {} file(s) to {}...",
        files.len(),
        client.base_url()
    );

    let records = client
        .run_analysis_blocking(&files)
        .map_err(|e| e.to_string())?;
    println!("Analysis returned {} anomaly records", records.len());

    let json = serde_json::json!({ "results": records });
    write_json(&json, output.as_ref())?;
    Ok(())
}

/// Run mark-viewed command
fn run_mark_viewed(anomaly: u64, api_url: Option<String>) -> CliResult<()> {
    let client = client_for(api_url);
    client
        .toggle_viewed_blocking(anomaly)
        .map_err(|e| e.to_string())?;
    println!("Toggled viewed flag for anomaly #{}", anomaly);
    Ok(())
}

/// Run demo command
fn run_demo(output: Option<PathBuf>) -> CliResult<()> {
    let records = DemoDataset::new().load().map_err(|e| e.to_string())?;
    println!("Demonstration result set: {} anomaly records", records.len());
    let json = serde_json::to_value(&records).map_err(|e| e.to_string())?;
    write_json(&json, output.as_ref())?;
    Ok(())
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Segments { input, output } => run_segments(input, output),

        Commands::List {
            input,
            sort,
            order,
            unviewed_only,
            from_segment,
            page,
            page_size,
            output,
        } => run_list(
            input,
            sort,
            order,
            unviewed_only,
            from_segment,
            page,
            page_size,
            output,
        ),

        Commands::Analyze {
            files,
            api_url,
            output,
        } => run_analyze(files, api_url, output),

        Commands::MarkViewed { anomaly, api_url } => run_mark_viewed(anomaly, api_url),

        Commands::Demo { output } => run_demo(output),
    };

    if let Err(message) = result {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}
