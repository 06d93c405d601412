use super::{push_filter, to_sql_count};
use crate::{
    Db,
    types::{PRICE_COLUMNS, PriceRow, SeriesRow},
};
use fpa_core::{
    models::{Pagination, PriceFilter, PriceRecord, ProductType, StateSeries},
    ports::PriceRepository,
};
use sqlx::QueryBuilder;
use time::OffsetDateTime;

impl PriceRepository for Db {
    async fn scan_latest_per_state(
        &self,
        filter: &PriceFilter,
    ) -> Result<Vec<PriceRecord>, Self::Error> {
        let mut query_builder = QueryBuilder::new(format!(
            r#"
            select {PRICE_COLUMNS} from (
                select
                    *,
                    row_number() over (
                        partition by lower(state)
                        order by period desc, id desc
                    ) as recency
                from
                    price
            "#
        ));
        push_filter(&mut query_builder, filter);
        query_builder.push(
            r#"
            )
            where
                recency = 1
            order by
                period desc, id desc
            "#,
        );

        query_builder
            .build_query_as::<PriceRow>()
            .fetch_all(&self.reader)
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }

    async fn scan_ordered(
        &self,
        filter: &PriceFilter,
        limit: Option<usize>,
    ) -> Result<Vec<PriceRecord>, Self::Error> {
        let mut query_builder = QueryBuilder::new(format!("select {PRICE_COLUMNS} from price"));
        push_filter(&mut query_builder, filter);
        query_builder.push(" order by period desc, id desc");
        if let Some(limit) = limit {
            query_builder.push(" limit ").push_bind(to_sql_count(limit));
        }

        query_builder
            .build_query_as::<PriceRow>()
            .fetch_all(&self.reader)
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }

    async fn scan_grouped_history(
        &self,
        filter: &PriceFilter,
        product: ProductType,
        limit: usize,
    ) -> Result<Vec<StateSeries>, Self::Error> {
        // `product` comes from a closed enum, so splicing its tag into the
        // statement cannot inject anything
        let column = product.as_str();
        let mut query_builder = QueryBuilder::new(format!(
            r#"
            select state, period, price from (
                select
                    state,
                    period,
                    {column} as price,
                    row_number() over (
                        partition by lower(state)
                        order by period desc, id desc
                    ) as recency
                from
                    price
            "#
        ));
        push_filter(&mut query_builder, filter);
        query_builder
            .push(
                r#"
            )
            where
                recency <= "#,
            )
            .push_bind(to_sql_count(limit))
            .push(
                r#"
            order by
                lower(state), recency
            "#,
            );

        let rows = query_builder
            .build_query_as::<SeriesRow>()
            .fetch_all(&self.reader)
            .await?;

        let mut series: Vec<StateSeries> = Vec::new();
        for row in rows {
            let period: OffsetDateTime = row.period.try_into()?;
            match series.last_mut() {
                Some(current) if current.state.eq_ignore_ascii_case(&row.state) => {
                    current.periods.push(period);
                    current.prices.push(row.price);
                }
                _ => series.push(StateSeries {
                    state: row.state,
                    periods: vec![period],
                    prices: vec![row.price],
                }),
            }
        }

        Ok(series)
    }

    async fn scan_paged(
        &self,
        filter: &PriceFilter,
        page: Pagination,
    ) -> Result<Vec<PriceRecord>, Self::Error> {
        let mut query_builder = QueryBuilder::new(format!("select {PRICE_COLUMNS} from price"));
        push_filter(&mut query_builder, filter);
        query_builder
            .push(" order by id asc limit ")
            .push_bind(to_sql_count(page.limit))
            .push(" offset ")
            .push_bind(to_sql_count(page.skip));

        query_builder
            .build_query_as::<PriceRow>()
            .fetch_all(&self.reader)
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }

    async fn count_prices(&self, filter: &PriceFilter) -> Result<u64, Self::Error> {
        let mut query_builder = QueryBuilder::new("select count(*) from price");
        push_filter(&mut query_builder, filter);

        let count: i64 = query_builder
            .build_query_scalar()
            .fetch_one(&self.reader)
            .await?;

        Ok(count.max(0) as u64)
    }

    async fn get_price(&self, id: i64) -> Result<Option<PriceRecord>, Self::Error> {
        let query = format!("select {PRICE_COLUMNS} from price where id = $1");
        sqlx::query_as::<_, PriceRow>(&query)
            .bind(id)
            .fetch_optional(&self.reader)
            .await?
            .map(TryInto::try_into)
            .transpose()
    }
}
