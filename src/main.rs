use clap::Parser;
use league_rank::core::{LineSource, ResultSink};
use league_rank::domain::model::OutputFormat;
use league_rank::utils::{logger, validation::Validate};
use league_rank::{
    CliConfig, CsvSink, FileSource, JsonSink, LeagueEngine, StandingsPipeline, StdinSource,
    TextSink,
};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting league-rank");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let source: Box<dyn LineSource> = match config.input.as_deref() {
        Some(path) => match FileSource::open(path) {
            Ok(source) => Box::new(source),
            Err(e) => {
                tracing::error!("❌ Cannot open input file: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(2);
            }
        },
        None => Box::new(StdinSource::new()),
    };

    let sink: Box<dyn ResultSink> = match config.format {
        OutputFormat::Text => Box::new(TextSink::stdout()),
        OutputFormat::Csv => Box::new(CsvSink::stdout()),
        OutputFormat::Json => Box::new(JsonSink::stdout()),
    };

    let pipeline = StandingsPipeline::new(source, sink, config);
    let mut engine = LeagueEngine::new(pipeline);

    match engine.run() {
        Ok(summary) => {
            tracing::info!(
                "✅ Ranked {} teams from {} result lines",
                summary.teams_ranked,
                summary.ingest.lines_read
            );
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
