use super::{AnalyticsError, AnalyticsResult, PriceAnalytics, metrics};
use crate::{
    models::{PriceFilter, PricePoint, ProductType, WeeklyReport, end_of_day, start_of_day},
    ports::PriceRepository,
    week::resolve_week,
};

impl<R: PriceRepository> PriceAnalytics<R> {
    /// The price movement of one product in one state across a calendar week.
    ///
    /// The week is resolved with [`resolve_week`]. `latest` and `previous`
    /// are the two newest prices inside the week; with fewer than two
    /// samples there is nothing to compare and every delta is zero. A blank
    /// `state` is rejected rather than widened to every state.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn weekly_report(
        &self,
        product: &str,
        state: &str,
        week: i64,
        year: i64,
    ) -> AnalyticsResult<WeeklyReport, R> {
        let product = product.parse::<ProductType>()?;
        let days = resolve_week(week, year)?;

        let filter = PriceFilter::new()
            .with_state(Some(state))
            .on_or_after(start_of_day(days[0]))
            .on_or_before(end_of_day(days[6]));
        if filter.state.is_none() {
            return Err(AnalyticsError::InvalidArgument(
                "weekly report requires a state".to_owned(),
            ));
        }

        let history: Vec<PricePoint> = self
            .repository
            .scan_ordered(&filter, None)
            .await
            .map_err(AnalyticsError::Repository)?
            .into_iter()
            .map(|record| PricePoint {
                period: record.period,
                price: record.price(product),
            })
            .collect();

        let latest = history.first().and_then(|point| point.price).unwrap_or(0.0);
        let previous = history.get(1).and_then(|point| point.price).unwrap_or(0.0);
        let (change, percentage_change) = if history.len() < 2 {
            (0.0, 0.0)
        } else {
            (
                metrics::change(Some(latest), Some(previous)),
                metrics::percentage_change(Some(latest), Some(previous)),
            )
        };

        Ok(WeeklyReport {
            state: state.to_owned(),
            product,
            history,
            latest,
            previous,
            change,
            percentage_change,
        })
    }
}
