// src/main.rs
use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use outage_extractor::extractors::{ExtractorConfig, LookaheadPolicy, OutageExtractor};
use outage_extractor::portal::{self, client::LOOKUP_PAGE_URL, PageSource};
use outage_extractor::report::render_report;
use outage_extractor::storage::{OutageRecord, StorageManager};
use outage_extractor::utils::{self, AppError};

/// Extracts the power outage schedule from a lookup result page
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "html", "url"])))]
struct Args {
    /// Customer code the page was looked up for (used to name saved artifacts)
    #[arg(short, long, env = "MAKH")]
    code: Option<String>,

    /// File with the visible page text, or '-' for stdin
    #[arg(short, long)]
    input: Option<String>,

    /// Saved HTML of the result page
    #[arg(long)]
    html: Option<PathBuf>,

    /// URL of an already rendered result page
    #[arg(long)]
    url: Option<String>,

    /// Output directory for saved artifacts
    #[arg(short, long, env = "OUTAGE_OUTPUT_DIR", default_value = "./artifacts")]
    output_dir: PathBuf,

    /// Save the JSON record and the raw page text to the output directory
    #[arg(short, long)]
    save: bool,

    /// Print the result as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Debug mode - write an annotated dump of the isolated section
    #[arg(short, long)]
    debug: bool,

    /// Look-ahead policy for schedule blocks: stop-at-next-code or unbounded
    #[arg(long, env = "OUTAGE_LOOKAHEAD", default_value_t = LookaheadPolicy::StopAtNextCode)]
    lookahead: LookaheadPolicy,
}

impl Args {
    fn page_source(&self) -> Result<PageSource, AppError> {
        match (&self.input, &self.html, &self.url) {
            (Some(input), None, None) if input == "-" => Ok(PageSource::Stdin),
            (Some(input), None, None) => Ok(PageSource::TextFile(PathBuf::from(input))),
            (None, Some(html), None) => Ok(PageSource::HtmlFile(html.clone())),
            (None, None, Some(url)) => Ok(PageSource::Url(url.clone())),
            _ => Err(AppError::Config("Exactly one of --input, --html or --url is required".to_string())),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging("info");

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);
    tracing::debug!("Result pages come from the lookup form at {}", LOOKUP_PAGE_URL);

    // 3. Load the page text
    let source = args.page_source()?;
    let page_text = portal::load_page_text(&source).await?;
    if page_text.trim().is_empty() {
        tracing::warn!("Page text from {} is empty", source.describe());
    }

    // 4. Extract
    let extractor = OutageExtractor::with_config(ExtractorConfig { lookahead: args.lookahead });
    let result = extractor.extract(&page_text);
    tracing::info!(
        "Extracted {} schedule entr{} (customer found: {}, address found: {})",
        result.entries.len(),
        if result.entries.len() == 1 { "y" } else { "ies" },
        result.customer.is_some(),
        result.address.is_some()
    );
    if !result.has_outages() {
        tracing::info!("No outage scheduled for this customer");
    }

    // 5. Debug dump and persistence
    let mut saved_record = None;
    if args.debug || args.save {
        let storage = StorageManager::new(&args.output_dir)?;

        if args.debug {
            let dump_path = storage.base_dir().join("section_debug.txt");
            if let Err(e) = utils::text_debug::save_debug_dump(&page_text, &dump_path) {
                tracing::warn!("Failed to write debug dump: {}", e);
            }
        }

        if args.save {
            let record = OutageRecord::new(args.code.clone(), source.describe(), result.clone());
            match storage.save_record(&record, &page_text) {
                Ok(saved) => saved_record = Some(saved.record),
                Err(e) => tracing::error!("Failed to save extraction record: {}", e),
            }
        }
    }

    // 6. Print
    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| AppError::Processing(format!("Cannot serialize result: {}", e)))?;
        println!("{}", json);
    } else {
        print!("{}", render_report(&result));
        if let Some(path) = &saved_record {
            println!("Saved: {}", path.display());
        }
    }

    Ok(())
}
