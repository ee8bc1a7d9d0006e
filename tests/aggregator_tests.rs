use approx::assert_relative_eq;

use runstat::aggregator::Aggregator;
use runstat::error::MeasureError;
use runstat::stats::OutlierRule;
use runstat::table::Table;

fn table(rows: Vec<Vec<f64>>) -> Table {
    Table::from_rows(rows).unwrap()
}

#[test]
fn test_single_run_is_returned_unchanged() {
    let run = table(vec![vec![1.5, 2.25, 3.125], vec![0.1, 0.2, 0.3]]);
    let result = Aggregator::default().aggregate(&[run.clone()]).unwrap();
    assert_eq!(result, run);
}

#[test]
fn test_outlier_run_is_ignored_per_cell() {
    // Cell (0, 1) spikes in the last run, everything else is steady.
    let runs: Vec<Table> = [1.0, 2.0, 3.0, 4.0, 100.0]
        .iter()
        .map(|&v| table(vec![vec![5.0, v], vec![7.0, 7.0]]))
        .collect();

    let result = Aggregator::new(2.0, OutlierRule::LeaveOneOut)
        .aggregate(&runs)
        .unwrap();
    assert_eq!(result.shape(), (2, 2));
    assert_eq!(result.get(0, 0), 5.0);
    assert_relative_eq!(result.get(0, 1), 2.5, epsilon = 1e-12);
    assert_eq!(result.row(1), &[7.0, 7.0]);
}

#[test]
fn test_z_score_rule() {
    let runs: Vec<Table> = [10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 50.0]
        .iter()
        .map(|&v| table(vec![vec![v]]))
        .collect();
    let result = Aggregator::new(2.0, OutlierRule::ZScore)
        .aggregate(&runs)
        .unwrap();
    assert_eq!(result.get(0, 0), 10.0);
}

#[test]
fn test_shape_is_categories_by_samples() {
    for n in [1, 2, 7, 50] {
        let runs: Vec<Table> = (0..n)
            .map(|i| table(vec![vec![i as f64; 4]; 3]))
            .collect();
        let result = Aggregator::default().aggregate(&runs).unwrap();
        assert_eq!(result.shape(), (3, 4));
    }
}

#[test]
fn test_aggregation_is_deterministic() {
    let runs: Vec<Table> = (0..20)
        .map(|i| {
            let v = (i as f64 * 1.7).sin() * 100.0;
            table(vec![vec![v, v * 2.0], vec![v + 3.0, -v]])
        })
        .collect();
    let aggregator = Aggregator::default();
    let first = aggregator.aggregate(&runs).unwrap();
    for _ in 0..5 {
        assert_eq!(aggregator.aggregate(&runs).unwrap(), first);
    }
}

#[test]
fn test_empty_collection_is_an_error() {
    assert!(matches!(
        Aggregator::default().aggregate(&[]),
        Err(MeasureError::NoRuns)
    ));
}

#[test]
fn test_mismatched_runs_are_an_error() {
    let runs = vec![
        table(vec![vec![1.0, 2.0]]),
        table(vec![vec![1.0, 2.0]]),
        table(vec![vec![1.0, 2.0, 3.0]]),
    ];
    match Aggregator::default().aggregate(&runs) {
        Err(MeasureError::ShapeMismatch {
            run,
            expected,
            found,
        }) => {
            assert_eq!(run, 2);
            assert_eq!(expected, (1, 2));
            assert_eq!(found, (1, 3));
        }
        other => panic!("expected shape mismatch, got {:?}", other),
    }
}
