// src/handlers/insights.rs

use astra::Request;
use tracing::{info, warn};

use crate::advisor::market_analysis;
use crate::app::App;
use crate::domain::{
    analyze_corridor, filter_listings, hourly_profile, CorridorTraffic, CuisineType,
    FilterCriteria, RestaurantType, StartupCostBracket,
};
use crate::errors::ServerError;
use crate::forms::{read_form, FormData};
use crate::responses::{html_response, see_other, ResultResp};
use crate::session::{LocationDetail, Page, SessionHandle};
use crate::spreadsheets::export_listings_xlsx;
use crate::templates::pages::{insights_page, InsightsVm};

fn choice<T>(form: &FormData, key: &str, from_label: fn(&str) -> Option<T>) -> Result<T, ServerError> {
    let raw = form.require(key)?;
    from_label(raw).ok_or_else(|| ServerError::BadRequest(format!("unknown {key}: {raw:?}")))
}

fn criteria_from_form(form: &FormData, app: &App) -> Result<FilterCriteria, ServerError> {
    let restaurant_type = choice(form, "restaurant_type", RestaurantType::from_label)?;
    let cuisines = form
        .get_all("cuisine")
        .map(|raw| {
            CuisineType::from_label(raw)
                .ok_or_else(|| ServerError::BadRequest(format!("unknown cuisine: {raw:?}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let startup_costs = choice(form, "startup_costs", StartupCostBracket::from_label)?;
    let square_footage = app
        .config
        .square_footage
        .parse(form.require("square_footage")?)
        .map_err(ServerError::BadRequest)?;

    Ok(FilterCriteria {
        restaurant_type,
        cuisines,
        startup_costs,
        square_footage,
    })
}

/// GET /insights
pub fn show(app: &App, session: &SessionHandle) -> ResultResp {
    let state = app.sessions.with_state(session, |s| {
        s.navigate(Page::Insights);
        s.clone()
    });

    let catalog_error = match app.tables.catalog() {
        Ok(_) => None,
        Err(e) => {
            warn!(error = %e, "catalog unavailable");
            Some(e.to_string())
        }
    };

    let (traffic, hourly) = match state.insights.detail() {
        Some(detail) => {
            let traffic = match app.tables.traffic() {
                Ok(table) => analyze_corridor(table.samples(), &detail.name),
                Err(e) => {
                    warn!(error = %e, "traffic table unavailable");
                    CorridorTraffic::NoData {
                        corridor: detail.name.clone(),
                    }
                }
            };
            let hourly = match &traffic {
                CorridorTraffic::Available(_) => {
                    let table = app.tables.hourly();
                    Some(hourly_profile(
                        table.as_ref().map(|t| t.samples()),
                        &detail.name,
                    ))
                }
                CorridorTraffic::NoData { .. } => None,
            };
            (Some(traffic), hourly)
        }
        None => (None, None),
    };

    let vm = InsightsVm {
        range: app.config.square_footage,
        catalog_error,
        stage: &state.insights,
        traffic,
        hourly,
    };
    html_response(insights_page(&vm))
}

/// POST /insights/filter
pub fn filter(req: &mut Request, app: &App, session: &SessionHandle) -> ResultResp {
    let form = read_form(req)?;
    let criteria = criteria_from_form(&form, app)?;

    // The view reports the load failure itself.
    let catalog = match app.tables.catalog() {
        Ok(catalog) => catalog,
        Err(_) => return see_other(Page::Insights.path()),
    };

    let results = filter_listings(catalog.listings(), &criteria);
    info!(
        restaurant_type = %criteria.restaurant_type,
        cuisines = criteria.cuisines.len(),
        square_footage = criteria.square_footage.value(),
        matches = results.len(),
        "filters applied"
    );

    app.sessions.with_state(session, |s| {
        s.navigate(Page::Insights);
        s.insights.show_results(criteria, results);
    });
    see_other(Page::Insights.path())
}

/// POST /insights/select
///
/// The advice call runs without holding the session lock; the selection is
/// checked before and applied after it.
pub fn select(req: &mut Request, app: &App, session: &SessionHandle) -> ResultResp {
    let form = read_form(req)?;
    let name = form.require("location")?.to_string();

    app.sessions
        .with_state(session, |s| s.insights.ensure_selectable(&name))?;

    let advice = market_analysis(
        app.advisor.as_ref(),
        &name,
        app.config.advisor.market_max_tokens,
    );
    info!(location = %name, failed = advice.is_failure(), "market analysis fetched");

    app.sessions.with_state(session, |s| {
        s.insights.select(LocationDetail { name, advice })
    })?;
    see_other("/insights#detail")
}

/// GET /insights/export
pub fn export(app: &App, session: &SessionHandle) -> ResultResp {
    let state = app.sessions.snapshot(session);

    match (state.insights.criteria(), state.insights.results()) {
        (Some(criteria), Some(results)) if !results.is_empty() => {
            info!(rows = results.len(), "exporting locations");
            export_listings_xlsx(results, criteria)
        }
        _ => Err(ServerError::BadRequest(
            "nothing to export; submit the filters first".to_string(),
        )),
    }
}
