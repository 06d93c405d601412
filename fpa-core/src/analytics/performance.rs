use super::{AnalyticsError, AnalyticsResult, PriceAnalytics, metrics};
use crate::{
    models::{PriceFilter, PricePoint, ProductPerformance, ProductType, StateSeries, end_of_day},
    ports::PriceRepository,
};
use time::Date;

/// A window shorter than this cannot express a delta.
const MIN_WINDOW: usize = 2;

impl<R: PriceRepository> PriceAnalytics<R> {
    /// Price movement per state across the newest `duration` records up to
    /// and including `period`.
    ///
    /// `duration` is raised to at least 2. Without a `product`, every product
    /// is reported, in [`ProductType::ALL`] order. A blank `state` covers every
    /// state.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn performance(
        &self,
        period: Date,
        duration: usize,
        state: &str,
        product: Option<&str>,
    ) -> AnalyticsResult<Vec<ProductPerformance>, R> {
        let products = match product {
            Some(tag) => vec![tag.parse::<ProductType>()?],
            None => ProductType::ALL.to_vec(),
        };
        let window = duration.max(MIN_WINDOW);
        let filter = PriceFilter::new()
            .with_state(Some(state))
            .on_or_before(end_of_day(period));

        let mut results = Vec::new();
        for product in products {
            let series = self
                .repository
                .scan_grouped_history(&filter, product, window)
                .await
                .map_err(AnalyticsError::Repository)?;

            tracing::debug!(%product, states = series.len(), "scanned grouped history");
            results.extend(
                series
                    .into_iter()
                    .map(|series| summarize(series, product, window)),
            );
        }

        Ok(results)
    }
}

/// Reduce a newest-first series to its window and deltas.
pub(crate) fn summarize(series: StateSeries, product: ProductType, window: usize) -> ProductPerformance {
    let StateSeries {
        state,
        periods,
        prices,
    } = series;

    let latest = prices.first().copied().flatten();
    let previous = if prices.len() >= window {
        prices[window - 1]
    } else {
        None
    };

    let history = periods
        .into_iter()
        .zip(prices)
        .take(window)
        .map(|(period, price)| PricePoint { period, price })
        .collect();

    ProductPerformance {
        state,
        product,
        history,
        latest,
        previous,
        change: metrics::change(latest, previous),
        percentage_change: metrics::percentage_change(latest, previous),
    }
}
