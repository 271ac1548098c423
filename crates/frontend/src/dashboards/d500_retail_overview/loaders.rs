//! The six dashboard loaders and the bootstrap that starts them.
//!
//! A loader fetches one resource and writes one render target. Loaders
//! share nothing: a failure is logged by `run_loader` and the target keeps
//! its pre-load state, while the other loaders carry on.

use super::api;
use super::charts;
use super::error::LoadError;
use super::view_model::{OverviewCards, StoreRow};
use crate::shared::chart::{render_chart, ChartConfig};
use leptos::html::Canvas;
use leptos::prelude::*;
use std::future::Future;
use std::pin::Pin;

pub type LoaderTask = Pin<Box<dyn Future<Output = Result<(), LoadError>>>>;
pub type SpawnedTask = Pin<Box<dyn Future<Output = ()>>>;

pub const REVENUE_CHART_ID: &str = "revenueChart";
pub const CATEGORY_CHART_ID: &str = "categoryChart";
pub const SEGMENT_CHART_ID: &str = "segmentChart";
pub const PRODUCTS_CHART_ID: &str = "productsChart";

pub struct Loader {
    pub name: &'static str,
    task: LoaderTask,
}

impl Loader {
    pub fn new(
        name: &'static str,
        task: impl Future<Output = Result<(), LoadError>> + 'static,
    ) -> Self {
        Self {
            name,
            task: Box::pin(task),
        }
    }
}

/// Drives one loader to completion; errors end here
pub async fn run_loader(loader: Loader) {
    let Loader { name, task } = loader;
    match task.await {
        Ok(()) => log::debug!("Loaded {}", name),
        Err(err) => log::error!("Error loading {}: {}", name, err),
    }
}

/// Hands every loader to `spawn` without waiting on any of them
pub fn bootstrap<S>(loaders: Vec<Loader>, spawn: S)
where
    S: Fn(SpawnedTask),
{
    for loader in loaders {
        spawn(Box::pin(run_loader(loader)));
    }
}

/// Render targets owned by the dashboard view
#[derive(Clone, Copy)]
pub struct DashboardTargets {
    pub overview: WriteSignal<Option<OverviewCards>>,
    pub stores: WriteSignal<Option<Vec<StoreRow>>>,
    pub revenue_chart: NodeRef<Canvas>,
    pub category_chart: NodeRef<Canvas>,
    pub segment_chart: NodeRef<Canvas>,
    pub products_chart: NodeRef<Canvas>,
}

pub fn dashboard_loaders(targets: DashboardTargets) -> Vec<Loader> {
    vec![
        Loader::new("sales overview", load_sales_overview(targets.overview)),
        Loader::new("monthly trends", load_monthly_trend(targets.revenue_chart)),
        Loader::new("category sales", load_category_sales(targets.category_chart)),
        Loader::new(
            "customer segments",
            load_customer_segments(targets.segment_chart),
        ),
        Loader::new("top products", load_top_products(targets.products_chart)),
        Loader::new("store performance", load_store_performance(targets.stores)),
    ]
}

async fn load_sales_overview(
    target: WriteSignal<Option<OverviewCards>>,
) -> Result<(), LoadError> {
    let payload = api::get_sales_overview().await?;
    target.set(Some(OverviewCards::from_payload(&payload)));
    Ok(())
}

async fn load_monthly_trend(canvas: NodeRef<Canvas>) -> Result<(), LoadError> {
    fetch_then_draw(api::get_monthly_trends(), charts::monthly_trend, |config| {
        draw(canvas, REVENUE_CHART_ID, config)
    })
    .await
}

async fn load_category_sales(canvas: NodeRef<Canvas>) -> Result<(), LoadError> {
    fetch_then_draw(api::get_category_sales(), charts::category_sales, |config| {
        draw(canvas, CATEGORY_CHART_ID, config)
    })
    .await
}

async fn load_customer_segments(canvas: NodeRef<Canvas>) -> Result<(), LoadError> {
    fetch_then_draw(api::get_customer_segments(), charts::customer_segments, |config| {
        draw(canvas, SEGMENT_CHART_ID, config)
    })
    .await
}

async fn load_top_products(canvas: NodeRef<Canvas>) -> Result<(), LoadError> {
    fetch_then_draw(api::get_top_products(), charts::top_products, |config| {
        draw(canvas, PRODUCTS_CHART_ID, config)
    })
    .await
}

async fn load_store_performance(
    target: WriteSignal<Option<Vec<StoreRow>>>,
) -> Result<(), LoadError> {
    let stores = api::get_store_performance().await?;
    target.set(Some(stores.iter().map(StoreRow::from).collect()));
    Ok(())
}

/// Chart loaders: fetch, build the config, then draw. A failed fetch
/// returns before `draw` is reached, so the canvas stays empty.
async fn fetch_then_draw<T, Fut, B, D>(fetch: Fut, build: B, draw: D) -> Result<(), LoadError>
where
    Fut: Future<Output = Result<Vec<T>, LoadError>>,
    B: FnOnce(&[T]) -> ChartConfig,
    D: FnOnce(&ChartConfig) -> Result<(), LoadError>,
{
    let rows = fetch.await?;
    draw(&build(rows.as_slice()))
}

fn draw(
    canvas: NodeRef<Canvas>,
    id: &'static str,
    config: &ChartConfig,
) -> Result<(), LoadError> {
    let element = canvas
        .get_untracked()
        .ok_or(LoadError::MissingTarget(id))?;
    render_chart(&element, config).map_err(|err| LoadError::Chart(format!("{:?}", err)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d500_retail_overview::MonthlyPoint;
    use std::cell::{Cell, RefCell};
    use std::pin::pin;
    use std::rc::Rc;
    use std::task::{Context, Poll, Waker};

    fn block_on<F: Future>(fut: F) -> F::Output {
        let mut fut = pin!(fut);
        let mut cx = Context::from_waker(Waker::noop());
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(output) => output,
            Poll::Pending => panic!("future was expected to complete without I/O"),
        }
    }

    fn poll_to_end(mut task: SpawnedTask) {
        let mut cx = Context::from_waker(Waker::noop());
        assert_eq!(task.as_mut().poll(&mut cx), Poll::Ready(()));
    }

    #[test]
    fn test_failed_loader_does_not_stop_the_others() {
        let rendered: Vec<Rc<Cell<bool>>> = (0..6).map(|_| Rc::new(Cell::new(false))).collect();

        let loaders = rendered
            .iter()
            .enumerate()
            .map(|(i, flag)| {
                let flag = flag.clone();
                Loader::new("test", async move {
                    if i == 1 {
                        return Err(LoadError::Request("connection refused".into()));
                    }
                    flag.set(true);
                    Ok(())
                })
            })
            .collect();

        let spawned = RefCell::new(Vec::new());
        bootstrap(loaders, |task| spawned.borrow_mut().push(task));

        let spawned = spawned.into_inner();
        assert_eq!(spawned.len(), 6);
        // nothing runs until the executor polls
        assert!(rendered.iter().all(|flag| !flag.get()));

        for task in spawned {
            poll_to_end(task);
        }

        let states: Vec<bool> = rendered.iter().map(|flag| flag.get()).collect();
        assert_eq!(states, vec![true, false, true, true, true, true]);
    }

    #[test]
    fn test_failed_fetch_skips_chart_construction() {
        let drawn = Cell::new(false);
        let result = block_on(fetch_then_draw(
            async { Err::<Vec<MonthlyPoint>, _>(LoadError::Request("offline".into())) },
            charts::monthly_trend,
            |_| {
                drawn.set(true);
                Ok(())
            },
        ));

        assert!(matches!(result, Err(LoadError::Request(_))));
        assert!(!drawn.get());
    }

    #[test]
    fn test_fetched_rows_reach_the_chart() {
        let labels = RefCell::new(Vec::new());
        let points = vec![
            MonthlyPoint { month: "2024-01".into(), revenue: 10.0 },
            MonthlyPoint { month: "2024-02".into(), revenue: 20.0 },
        ];
        let result = block_on(fetch_then_draw(
            async move { Ok(points) },
            charts::monthly_trend,
            |config| {
                *labels.borrow_mut() = config.data.labels.clone();
                Ok(())
            },
        ));

        assert!(result.is_ok());
        assert_eq!(labels.into_inner(), vec!["2024-01", "2024-02"]);
    }

    #[test]
    fn test_draw_error_is_reported() {
        let result = block_on(fetch_then_draw(
            async { Ok(Vec::<MonthlyPoint>::new()) },
            charts::monthly_trend,
            |_| Err(LoadError::MissingTarget(REVENUE_CHART_ID)),
        ));
        assert!(matches!(result, Err(LoadError::MissingTarget("revenueChart"))));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LoadError::MissingTarget(REVENUE_CHART_ID).to_string(),
            "render target #revenueChart is not mounted"
        );
        assert_eq!(LoadError::Status(404).to_string(), "HTTP error: 404");
    }
}
