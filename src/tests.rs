#[cfg(test)]
mod tests {
    use {
        crate::analyzer_core::{
            parse_table, render_text_insights, AnalysisPayload, IngestError, Metric,
        },
    };

    const SAMPLE_CSV: &str = "\
Date,PR,PSI,VPI,LAR,Actual VPI,VS,CS
01-01-2024,0.10,0.50,0.30,0.80,0.28,100,10000
01-02-2024,0.20,0.52,0.31,0.81,0.29,200,10000
01-03-2024,0.30,0.54,0.32,0.82,0.30,300,10000
01-04-2024,0.40,0.56,0.33,0.83,0.31,400,10000
";

    /// Parse-to-payload flow over one in-memory dataset
    #[test]
    fn test_csv_to_payload_flow() {
        let table = parse_table(SAMPLE_CSV).unwrap();
        assert_eq!(table.len(), 4);

        let payload = AnalysisPayload::from_table(&table);

        // VS 100..400 against constant CS 10000
        let score = payload.attack_cost_model.attack_resistance_score.unwrap();
        assert!((score - (1.0 - 0.025_f64.powi(2))).abs() < 1e-12);

        // PR and VS rise together in the sample
        let r = payload
            .correlation_matrix
            .get(Metric::Pr, Metric::Vs)
            .unwrap();
        assert!((r - 1.0).abs() < 1e-9);

        // The interquartile band of 4 rows keeps PR ranks 1 and 2
        assert_eq!(payload.optimal_vs.optimal_vs_mean, Some(250.0));
        assert_eq!(payload.optimal_vs.participation_range, Some((0.2, 0.3)));
    }

    /// Month labels come straight from the dates in the file
    #[test]
    fn test_monthly_labels_from_csv() {
        let table = parse_table(SAMPLE_CSV).unwrap();
        let payload = AnalysisPayload::from_table(&table);

        let vs = payload.monthly_stats.get(Metric::Vs).unwrap();
        let labels: Vec<&str> = vs.monthly_data.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["2024-01", "2024-02", "2024-03", "2024-04"]);
    }

    /// Nested JSON objects keep column order rather than alphabetical order
    #[test]
    fn test_payload_json_nested_order() {
        let table = parse_table(SAMPLE_CSV).unwrap();
        let json = AnalysisPayload::from_table(&table)
            .to_json_pretty()
            .unwrap();

        let pr_at = json.find("\"PR\"").unwrap();
        let vs_at = json.find("\"VS\"").unwrap();
        let cs_at = json.find("\"CS\"").unwrap();
        assert!(pr_at < vs_at && vs_at < cs_at);
    }

    /// The fallback report is stable for the same input
    #[test]
    fn test_fallback_report_deterministic() {
        let table = parse_table(SAMPLE_CSV).unwrap();
        let payload = AnalysisPayload::from_table(&table);
        assert_eq!(
            render_text_insights(&payload),
            render_text_insights(&payload)
        );
    }

    /// Column validation happens before any row parsing
    #[test]
    fn test_missing_column_rejected() {
        let err = parse_table("Date,PR,PSI,VPI,LAR,Actual VPI,VS\n01-01-2024,1,1,1,1,1,1\n")
            .unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn(ref c) if c == "CS"));
    }
}
