use anyhow::Result;
use league_rank::core::Pipeline;
use league_rank::domain::model::{MalformedPolicy, OutputFormat, StandingRow};
use league_rank::utils::error::LeagueError;
use league_rank::{
    CliConfig, CsvSink, FileSource, JsonSink, LeagueEngine, StandingsPipeline, TextSink,
};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use tempfile::NamedTempFile;

const FIXTURE: &str = "\
Lions 3, Snakes 3
Tarantulas 1, FC Awesome 0
Lions 1, FC Awesome 1
Tarantulas 3, Snakes 1
Lions 4, Grouches 0
";

const EXPECTED_TABLE: &str = "\
1. Tarantulas, 6 pts
2. Lions, 5 pts
3. FC Awesome, 1 pt
3. Snakes, 1 pt
5. Grouches, 0 pts
";

/// Shared in-memory writer so the test can read back what the sink
/// wrote after the pipeline has consumed it.
#[derive(Clone, Default)]
struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn fixture_file(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

fn config(input: &NamedTempFile, on_malformed: MalformedPolicy, format: OutputFormat) -> CliConfig {
    CliConfig {
        input: Some(input.path().to_str().unwrap().to_string()),
        on_malformed,
        format,
        verbose: false,
    }
}

#[test]
fn test_end_to_end_canonical_fixture() -> Result<()> {
    let file = fixture_file(FIXTURE)?;
    let buffer = SharedBuf::default();

    let pipeline = StandingsPipeline::new(
        FileSource::open(file.path())?,
        TextSink::new(buffer.clone()),
        config(&file, MalformedPolicy::Abort, OutputFormat::Text),
    );
    let summary = LeagueEngine::new(pipeline).run()?;

    assert_eq!(buffer.contents(), EXPECTED_TABLE);
    assert_eq!(summary.ingest.lines_read, 5);
    assert_eq!(summary.ingest.results_folded, 5);
    assert_eq!(summary.ingest.skipped, 0);
    assert_eq!(summary.teams_ranked, 5);
    Ok(())
}

#[test]
fn test_end_to_end_skip_policy_keeps_going() -> Result<()> {
    let tainted = format!("Lions vs Snakes\n{}", FIXTURE);
    let file = fixture_file(&tainted)?;
    let buffer = SharedBuf::default();

    let pipeline = StandingsPipeline::new(
        FileSource::open(file.path())?,
        TextSink::new(buffer.clone()),
        config(&file, MalformedPolicy::Skip, OutputFormat::Text),
    );
    let summary = LeagueEngine::new(pipeline).run()?;

    assert_eq!(buffer.contents(), EXPECTED_TABLE);
    assert_eq!(summary.ingest.lines_read, 6);
    assert_eq!(summary.ingest.skipped, 1);
    Ok(())
}

#[test]
fn test_end_to_end_abort_reports_the_offending_line() -> Result<()> {
    let tainted = "Lions 3, Snakes 3\nTarantulas 1, FC Awesome 0\nLions vs Snakes\n";
    let file = fixture_file(tainted)?;

    let pipeline = StandingsPipeline::new(
        FileSource::open(file.path())?,
        TextSink::new(SharedBuf::default()),
        config(&file, MalformedPolicy::Abort, OutputFormat::Text),
    );
    let err = LeagueEngine::new(pipeline).run().unwrap_err();

    match err {
        LeagueError::LineError { line_no, source } => {
            assert_eq!(line_no, 3);
            assert!(matches!(*source, LeagueError::MalformedLineError { .. }));
        }
        other => panic!("expected LineError, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_end_to_end_json_format() -> Result<()> {
    let file = fixture_file(FIXTURE)?;
    let buffer = SharedBuf::default();

    let pipeline = StandingsPipeline::new(
        FileSource::open(file.path())?,
        JsonSink::new(buffer.clone()),
        config(&file, MalformedPolicy::Abort, OutputFormat::Json),
    );
    LeagueEngine::new(pipeline).run()?;

    let rows: Vec<StandingRow> = serde_json::from_str(&buffer.contents())?;
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].team, "Tarantulas");
    assert_eq!(rows[0].rank, 1);
    assert_eq!(rows[0].points, 6);
    assert_eq!(rows[0].matches_played, 2);
    assert_eq!(rows[3].rank, 3);
    assert_eq!(rows[4].rank, 5);
    Ok(())
}

#[test]
fn test_end_to_end_csv_format() -> Result<()> {
    let file = fixture_file(FIXTURE)?;
    let buffer = SharedBuf::default();

    let pipeline = StandingsPipeline::new(
        FileSource::open(file.path())?,
        CsvSink::new(buffer.clone()),
        config(&file, MalformedPolicy::Abort, OutputFormat::Csv),
    );
    LeagueEngine::new(pipeline).run()?;

    let expected = "\
rank,team,points,matches_played
1,Tarantulas,6,2
2,Lions,5,3
3,FC Awesome,1,2
3,Snakes,1,2
5,Grouches,0,1
";
    assert_eq!(buffer.contents(), expected);
    Ok(())
}

#[test]
fn test_end_to_end_empty_input() -> Result<()> {
    let file = fixture_file("")?;
    let buffer = SharedBuf::default();

    let pipeline = StandingsPipeline::new(
        FileSource::open(file.path())?,
        TextSink::new(buffer.clone()),
        config(&file, MalformedPolicy::Abort, OutputFormat::Text),
    );
    let summary = LeagueEngine::new(pipeline).run()?;

    assert_eq!(buffer.contents(), "");
    assert_eq!(summary.ingest.lines_read, 0);
    assert_eq!(summary.teams_ranked, 0);
    Ok(())
}

#[test]
fn test_ranking_reflects_the_current_snapshot() -> Result<()> {
    let file = fixture_file("Lions 3, Snakes 3\n")?;
    let buffer = SharedBuf::default();

    let mut pipeline = StandingsPipeline::new(
        FileSource::open(file.path())?,
        TextSink::new(buffer.clone()),
        config(&file, MalformedPolicy::Abort, OutputFormat::Text),
    );

    pipeline.ingest()?;
    let rows = pipeline.rank()?;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].rank, 1);
    assert_eq!(rows[1].rank, 1);

    // computed fresh from the snapshot on every request
    assert_eq!(pipeline.rank()?, rows);
    Ok(())
}
