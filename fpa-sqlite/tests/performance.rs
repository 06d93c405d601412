mod common;

use common::{full, midnight, pms, seeded};
use fpa_core::{analytics::AnalyticsError, models::ProductType};
use time::macros::date;

#[tokio::test]
async fn test_lagos_week_over_week() -> anyhow::Result<()> {
    let analytics = seeded(vec![
        pms("Lagos", midnight(date!(2024 - 11 - 01)), 700.0),
        pms("Lagos", midnight(date!(2024 - 11 - 08)), 770.0),
    ])
    .await?;

    let results = analytics
        .performance(date!(2024 - 11 - 08), 2, "Lagos", Some("pms"))
        .await?;

    assert_eq!(results.len(), 1);
    let lagos = &results[0];
    assert_eq!(lagos.state, "Lagos");
    assert_eq!(lagos.product, ProductType::Pms);
    assert_eq!(lagos.latest, Some(770.0));
    assert_eq!(lagos.previous, Some(700.0));
    assert_eq!(lagos.change, 0.70);
    assert_eq!(lagos.percentage_change, 0.0010);

    let prices: Vec<_> = lagos.history.iter().map(|point| point.price).collect();
    assert_eq!(prices, vec![Some(770.0), Some(700.0)], "newest first");

    Ok(())
}

#[tokio::test]
async fn test_duration_is_at_least_two() -> anyhow::Result<()> {
    let analytics = seeded(vec![
        pms("Lagos", midnight(date!(2024 - 10 - 25)), 690.0),
        pms("Lagos", midnight(date!(2024 - 11 - 01)), 700.0),
        pms("Lagos", midnight(date!(2024 - 11 - 08)), 770.0),
    ])
    .await?;

    for duration in [0, 1, 2] {
        let results = analytics
            .performance(date!(2024 - 11 - 08), duration, "Lagos", Some("pms"))
            .await?;
        assert_eq!(results[0].history.len(), 2);
        assert_eq!(results[0].previous, Some(700.0));
    }

    let wide = analytics
        .performance(date!(2024 - 11 - 08), 3, "Lagos", Some("pms"))
        .await?;
    assert_eq!(wide[0].previous, Some(690.0));
    assert_eq!(wide[0].change, 0.8);
    assert_eq!(wide[0].percentage_change, 0.0012);

    Ok(())
}

#[tokio::test]
async fn test_short_window_is_zeroed() -> anyhow::Result<()> {
    let analytics = seeded(vec![
        pms("Lagos", midnight(date!(2024 - 11 - 01)), 700.0),
        pms("Lagos", midnight(date!(2024 - 11 - 08)), 770.0),
    ])
    .await?;

    // three samples are asked for but only two exist
    let results = analytics
        .performance(date!(2024 - 11 - 08), 3, "Lagos", Some("pms"))
        .await?;
    assert_eq!(results[0].history.len(), 2);
    assert_eq!(results[0].previous, None);
    assert_eq!(results[0].change, 0.0);
    assert_eq!(results[0].percentage_change, 0.0);

    // a single sample never has a delta
    let single = analytics
        .performance(date!(2024 - 11 - 01), 2, "Lagos", Some("pms"))
        .await?;
    assert_eq!(single[0].history.len(), 1);
    assert_eq!(single[0].change, 0.0);
    assert_eq!(single[0].percentage_change, 0.0);

    Ok(())
}

#[tokio::test]
async fn test_zero_and_missing_prices() -> anyhow::Result<()> {
    let analytics = seeded(vec![
        full("Kano", "North West", midnight(date!(2024 - 11 - 01)), [0.0, 1200.0, 1100.0, 1400.0]),
        {
            let mut record = full("Kano", "North West", midnight(date!(2024 - 11 - 08)), [650.0, 1250.0, 1150.0, 1450.0]);
            record.lpg = None;
            record
        },
    ])
    .await?;

    let results = analytics
        .performance(date!(2024 - 11 - 08), 2, "Kano", None)
        .await?;

    let pms = &results[0];
    assert_eq!(pms.product, ProductType::Pms);
    assert_eq!(pms.previous, Some(0.0));
    assert_eq!(pms.change, 6.5);
    assert_eq!(pms.percentage_change, 0.0, "zero baseline");

    let lpg = &results[3];
    assert_eq!(lpg.product, ProductType::Lpg);
    assert_eq!(lpg.latest, None);
    assert_eq!(lpg.change, 0.0, "missing latest");
    assert_eq!(lpg.percentage_change, 0.0);

    Ok(())
}

#[tokio::test]
async fn test_all_products_in_fixed_order() -> anyhow::Result<()> {
    let analytics = seeded(vec![
        full("Lagos", "South West", midnight(date!(2024 - 11 - 01)), [700.0, 1200.0, 1100.0, 1400.0]),
        full("Lagos", "South West", midnight(date!(2024 - 11 - 08)), [770.0, 1260.0, 1100.0, 1330.0]),
    ])
    .await?;

    let results = analytics
        .performance(date!(2024 - 11 - 08), 2, "lagos", None)
        .await?;

    let products: Vec<_> = results.iter().map(|result| result.product).collect();
    assert_eq!(products, ProductType::ALL.to_vec());

    let changes: Vec<_> = results.iter().map(|result| result.change).collect();
    assert_eq!(changes, vec![0.7, 0.6, 0.0, -0.7]);

    let ago = &results[1];
    assert_eq!(ago.percentage_change, 0.0005);

    Ok(())
}

#[tokio::test]
async fn test_blank_state_covers_every_state() -> anyhow::Result<()> {
    let analytics = seeded(vec![
        pms("Lagos", midnight(date!(2024 - 11 - 01)), 700.0),
        pms("Lagos", midnight(date!(2024 - 11 - 08)), 770.0),
        pms("Abia", midnight(date!(2024 - 11 - 01)), 690.0),
        pms("Abia", midnight(date!(2024 - 11 - 08)), 680.0),
    ])
    .await?;

    let results = analytics
        .performance(date!(2024 - 11 - 08), 2, "", Some("pms"))
        .await?;

    let states: Vec<_> = results.iter().map(|result| result.state.as_str()).collect();
    assert_eq!(states, vec!["Abia", "Lagos"]);
    assert_eq!(results[0].change, -0.1);

    Ok(())
}

#[tokio::test]
async fn test_repeated_calls_agree() -> anyhow::Result<()> {
    let analytics = seeded(vec![
        pms("Lagos", midnight(date!(2024 - 11 - 01)), 700.0),
        pms("Lagos", midnight(date!(2024 - 11 - 08)), 770.0),
        pms("Kano", midnight(date!(2024 - 11 - 08)), 650.0),
    ])
    .await?;

    let first = analytics
        .performance(date!(2024 - 11 - 08), 2, "", None)
        .await?;
    let second = analytics
        .performance(date!(2024 - 11 - 08), 2, "", None)
        .await?;
    assert_eq!(first, second);

    Ok(())
}

#[tokio::test]
async fn test_unknown_product_is_rejected() -> anyhow::Result<()> {
    let analytics = seeded(Vec::new()).await?;

    let result = analytics
        .performance(date!(2024 - 11 - 08), 2, "Lagos", Some("diesel"))
        .await;

    assert!(matches!(result, Err(AnalyticsError::InvalidProduct(_))));

    Ok(())
}
