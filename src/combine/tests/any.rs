use super::BoxFut;
use crate::combine::{any, fulfilled, rejected, AggregateError};

use std::time::Duration;
use tokio::time::sleep;

#[tokio::test]
async fn any_takes_the_first_fulfillment() -> anyhow::Result<()> {
    let value = any(vec![rejected("a".to_string()), fulfilled(5)]).await;
    assert_eq!(value, Ok(5));
    Ok(())
}

#[tokio::test]
async fn any_aggregates_every_rejection_in_input_order() -> anyhow::Result<()> {
    let failure = any(vec![
        rejected::<i32, _>("a".to_string()),
        rejected("b".to_string()),
    ])
    .await;

    assert_eq!(
        failure,
        Err(AggregateError {
            reasons: vec!["a".to_string(), "b".to_string()],
        })
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn any_aggregate_order_ignores_settlement_order() -> anyhow::Result<()> {
    let futures: Vec<BoxFut<i32, &'static str>> = vec![
        Box::pin(async {
            sleep(Duration::from_millis(100)).await;
            Err("slow")
        }),
        Box::pin(async {
            sleep(Duration::from_millis(10)).await;
            Err("fast")
        }),
    ];

    let failure = any(futures).await;
    assert_eq!(
        failure,
        Err(AggregateError {
            reasons: vec!["slow", "fast"],
        })
    );
    Ok(())
}

#[tokio::test]
async fn any_short_circuits_past_pending_inputs() -> anyhow::Result<()> {
    let futures: Vec<BoxFut<i32, String>> = vec![
        Box::pin(futures::future::pending()),
        Box::pin(fulfilled(9)),
    ];

    assert_eq!(any(futures).await, Ok(9));
    Ok(())
}

#[tokio::test]
async fn any_of_nothing_rejects_with_empty_aggregate() -> anyhow::Result<()> {
    let empty: Vec<futures::future::Ready<Result<i32, String>>> = vec![];
    let failure = any(empty).await;

    assert_eq!(failure, Err(AggregateError { reasons: vec![] }));
    Ok(())
}

#[test]
fn aggregate_error_display_counts_reasons() {
    let error = AggregateError {
        reasons: vec!["a", "b", "c"],
    };
    assert_eq!(error.to_string(), "all futures rejected (3 rejection reasons)");
}
