use seqdex::{AnalysisType, Analyzer, Collector, CollectorConfig, Result};

#[test]
fn test_exact_and_back_front_chain_round_trip() -> Result<()> {
    let collector: Collector<char, u32> = Collector::builder()
        .with_analyzer_chain([Analyzer::BackNGram, Analyzer::FrontNGram])
        .build()?;

    let sequences: Vec<Vec<char>> = ["abc", "adefg"]
        .iter()
        .map(|s| s.chars().collect())
        .collect();
    collector.analyze_all(&sequences, 1);

    let results = collector.matcher().match_text("def");
    assert!(!results.is_empty());
    assert!(results.iter().any(|r| r.token().text() == "def"));
    assert!(results.iter().all(|r| *r.reference() == 1));

    // Exact only knows whole sequences.
    let exact = collector
        .matcher()
        .with_analysis_type(AnalysisType::Exact)
        .match_text("def");
    assert!(exact.is_empty());
    assert_eq!(
        collector
            .matcher()
            .with_analysis_type(AnalysisType::Exact)
            .match_text("adefg")
            .len(),
        1
    );
    Ok(())
}

#[test]
fn test_lowercase_analyzer() -> Result<()> {
    let collector: Collector<char, &str> = Collector::builder()
        .with_analyzer(Analyzer::LowerCase)
        .build()?;
    collector.analyze_text("aDeFg", "mixed");

    let results = collector.matcher().match_text("adefg");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].token().text(), "adefg");
    assert!(results[0].has_analysis_type(&AnalysisType::LowerCase));

    // Queries are not folded.
    assert!(collector.matcher().match_text("ADEFG").is_empty());
    Ok(())
}

#[test]
fn test_insertion_tolerance() -> Result<()> {
    let collector: Collector<char, u32> = Collector::builder().with_insertions().build()?;
    collector.analyze_text("abcdef", 9);

    // One extra symbol in the query is tolerated.
    let results = collector
        .matcher()
        .with_analysis_type(Analyzer::insertions().analysis_type())
        .match_text("cdXe");
    assert!(results.iter().any(|r| r.token().text() == "cde"));

    // Two extra symbols are not.
    let results = collector
        .matcher()
        .with_analysis_type(Analyzer::insertions().analysis_type())
        .match_text("cXdXe");
    assert!(results.is_empty());
    Ok(())
}

#[test]
fn test_inverse_matching() -> Result<()> {
    let collector: Collector<char, u32> = Collector::builder()
        .with_analyzer(Analyzer::Inverse)
        .build()?;
    collector.analyze_text("abc", 3);

    let results = collector
        .matcher()
        .with_analysis_type(AnalysisType::Inverse)
        .match_text("abc");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].token().text(), "cba");
    Ok(())
}

#[test]
fn test_references_are_attached_verbatim() -> Result<()> {
    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        id: u64,
        name: String,
    }

    let collector: Collector<char, Record> = Collector::builder().build()?;
    let record = Record {
        id: 42,
        name: "answer".to_string(),
    };
    collector.analyze_text("life", record.clone());

    let results = collector.matcher().match_text("life");
    assert_eq!(results[0].reference(), &record);
    Ok(())
}

#[test]
fn test_generic_alphabet() -> Result<()> {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    enum Base {
        A,
        C,
        G,
        T,
    }
    impl seqdex::Symbol for Base {}

    let collector: Collector<Base, &str> = Collector::builder()
        .with_sub_sequence_analysis()
        .build()?;
    collector.analyze(&[Base::G, Base::A, Base::T, Base::T, Base::A, Base::C], "gene-1");

    let results = collector.matcher().match_sequence(&[Base::T, Base::T, Base::A]);
    assert_eq!(results.len(), 1);
    assert_eq!(*results[0].reference(), "gene-1");
    assert_eq!(results[0].token().start_position(), Some(3));
    assert_eq!(collector.matcher().matching_depth(&[Base::A, Base::T, Base::G]), 2);
    Ok(())
}

#[test]
fn test_collector_from_json_config() -> Result<()> {
    let config = CollectorConfig::from_json(r#"{"shard_count": 2, "sequence_limit": 4}"#)?;
    let collector: Collector<char, u32> = Collector::builder()
        .with_config(config)
        .with_from_back_analysis()
        .build()?;
    collector.analyze_text("abcdef", 1);

    assert_eq!(collector.config().shard_count, 2);
    assert_eq!(collector.index_sizes(), vec![1, 4]);
    assert!(collector.matcher().match_text("ef").is_empty());
    assert_eq!(collector.matcher().match_text("cd").len(), 1);
    Ok(())
}

#[test]
fn test_stats_serialize() -> Result<()> {
    let collector: Collector<char, u32> = Collector::builder().build()?;
    collector.analyze_text("abc", 1);

    let json = serde_json::to_string(&collector.stats())?;
    assert!(json.contains("\"sequences_ingested\":1"));
    assert!(json.contains("\"analysis_type\":\"exact\""));
    Ok(())
}
