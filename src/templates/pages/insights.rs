// templates/pages/insights.rs

use crate::domain::{
    CorridorTraffic, CuisineType, FilterCriteria, HourlyProfile, PricedListing, RestaurantType,
    SquareFootageRange, StartupCostBracket, TrafficInsights,
};
use crate::domain::traffic::Extremes;
use crate::session::{InsightsStage, LocationDetail, Page};
use crate::templates::components::{alert, bar_chart, button, card, empty_state, line_chart, stat};
use crate::templates::desktop_layout;
use crate::templates::format::{dollars, people, thousands};
use maud::{html, Markup};

pub const NO_MATCHES: &str = "No matching plazas found. Please adjust your selection criteria.";

pub struct InsightsVm<'a> {
    pub range: SquareFootageRange,
    /// Set when the catalog could not be loaded; the form is hidden.
    pub catalog_error: Option<String>,
    pub stage: &'a InsightsStage,
    /// Present only once a location is selected.
    pub traffic: Option<CorridorTraffic>,
    pub hourly: Option<HourlyProfile>,
}

pub fn insights_page(vm: &InsightsVm) -> Markup {
    desktop_layout(
        Page::Insights,
        html! {
            h1 { (Page::Insights.title()) }
            p {
                "Explore and compare prime locations in San Jose for opening your restaurant. "
                "Tailor your search by restaurant style, cuisine, budget and space requirements."
            }

            @if let Some(message) = &vm.catalog_error {
                (alert(message))
            } @else {
                (filter_form(vm.stage.criteria(), &vm.range))

                @if let Some(results) = vm.stage.results() {
                    (results_section(results, vm.stage.detail()))
                }

                @if let Some(detail) = vm.stage.detail() {
                    (detail_section(detail, vm.traffic.as_ref(), vm.hourly.as_ref()))
                }
            }

            form class="reload" action="/reload" method="post" {
                (button("Reload data"))
            }
        },
    )
}

fn filter_form(criteria: Option<&FilterCriteria>, range: &SquareFootageRange) -> Markup {
    let square_footage = criteria
        .map(|c| c.square_footage.value())
        .unwrap_or(range.min);

    html! {
        form class="filters" action="/insights/filter" method="post" {
            div class="field" {
                label for="restaurant_type" { "Restaurant Type:" }
                select id="restaurant_type" name="restaurant_type" {
                    @for choice in RestaurantType::ALL {
                        option value=(choice.label())
                            selected[criteria.is_some_and(|c| c.restaurant_type == *choice)] {
                            (choice.label())
                        }
                    }
                }
            }
            div class="field" {
                label for="cuisine" { "Cuisine Type:" }
                select id="cuisine" name="cuisine" multiple size="6" {
                    @for choice in CuisineType::ALL {
                        option value=(choice.label())
                            selected[criteria.is_some_and(|c| c.cuisines.contains(choice))] {
                            (choice.label())
                        }
                    }
                }
            }
            div class="field" {
                label for="startup_costs" { "Startup Costs:" }
                select id="startup_costs" name="startup_costs" {
                    @for choice in StartupCostBracket::ALL {
                        option value=(choice.label())
                            selected[criteria.is_some_and(|c| c.startup_costs == *choice)] {
                            (choice.label())
                        }
                    }
                }
            }
            div class="field" {
                label for="square_footage" { "Desired Square Footage (sq ft):" }
                input type="number" id="square_footage" name="square_footage"
                    min=(range.min) max=(range.max) step=(range.step) value=(square_footage);
            }
            (button("Submit"))
        }
    }
}

fn results_section(results: &[PricedListing], detail: Option<&LocationDetail>) -> Markup {
    if results.is_empty() {
        return empty_state(NO_MATCHES);
    }

    html! {
        section class="results" {
            h2 { "Potential Locations:" }
            table class="wide-table" id="results" {
                thead {
                    tr {
                        th { "Image" }
                        th { "Center Name" }
                        th { "Address" }
                        th { "Price Range" }
                        th { "Monthly Lease Cost" }
                        th { "Yearly Lease Cost" }
                        th { "Vacancy Status" }
                    }
                }
                tbody {
                    @for row in results {
                        tr {
                            td {
                                @if !row.listing.image_url.is_empty() {
                                    img src=(row.listing.image_url) alt=(row.name());
                                }
                            }
                            td class="name" { (row.name()) }
                            td { (row.listing.address) }
                            td { (row.listing.price_range) }
                            td class="monthly" { (dollars(row.lease.monthly)) }
                            td class="yearly" { (dollars(row.lease.yearly)) }
                            td { (row.listing.vacancy_status) }
                        }
                    }
                }
            }
            a class="btn export" href="/insights/export" { "Download as spreadsheet" }

            form class="picker" action="/insights/select" method="post" {
                label for="location" { "Learn more about a specific location:" }
                select id="location" name="location" {
                    @for row in results {
                        option value=(row.name())
                            selected[detail.is_some_and(|d| d.name == row.name())] {
                            (row.name())
                        }
                    }
                }
                (button("Show details"))
            }
        }
    }
}

fn detail_section(
    detail: &LocationDetail,
    traffic: Option<&CorridorTraffic>,
    hourly: Option<&HourlyProfile>,
) -> Markup {
    html! {
        section class="detail" id="detail" {
            h2 { "Detailed Information about " (detail.name) }
            @if detail.advice.is_failure() {
                (alert(detail.advice.text()))
            } @else {
                div class="advice" { (detail.advice.text()) }
            }

            @match traffic {
                Some(CorridorTraffic::Available(insights)) => {
                    (traffic_section(insights, hourly))
                }
                Some(CorridorTraffic::NoData { corridor }) => {
                    (empty_state(&format!("No foot traffic data available for {corridor}.")))
                }
                None => {}
            }
        }
    }
}

fn extremes_line(what: &str, extremes: Option<Extremes>) -> Markup {
    html! {
        @if let Some(ex) = extremes {
            div class="extremes" {
                p class="busiest" {
                    "Busiest " (what) ": " strong { (ex.busiest.label) } " (" (people(ex.busiest.value)) ")"
                }
                p class="quietest" {
                    "Quietest " (what) ": " strong { (ex.quietest.label) } " (" (people(ex.quietest.value)) ")"
                }
            }
        }
    }
}

fn traffic_section(insights: &TrafficInsights, hourly: Option<&HourlyProfile>) -> Markup {
    html! {
        section class="traffic" {
            p class="muted" {
                "Foot traffic recorded for " (insights.corridor) " from "
                (insights.first_date.format("%B %-d, %Y").to_string()) " to "
                (insights.last_date.format("%B %-d, %Y").to_string()) "."
            }

            (bar_chart("Average Foot Traffic by Day of Week", &insights.by_weekday, "Visitors"))
            (extremes_line("day", insights.weekday_extremes()))

            (line_chart("Foot Traffic by Week of Month", &insights.by_week_of_month, "Visitors"))
            (extremes_line("week", insights.week_extremes()))

            (bar_chart("Total Foot Traffic by Month", &insights.by_month, "Visitors"))
            (extremes_line("month", insights.month_extremes()))
            p {
                "Higher foot traffic can indicate a greater number of potential customers, which helps "
                "with planning peak hours, marketing efforts and staffing."
            }

            @if let Some(profile) = hourly {
                (bar_chart("Foot Traffic by Hour", &profile.buckets, "Visitors"))
                @if profile.is_estimate() {
                    p class="muted estimate" {
                        "No hourly counts exist for this corridor; the curve above is a typical estimate."
                    }
                }
            }

            h3 { "Overall Foot Traffic Insights" }
            div class="stats" {
                (stat("Overall Average Foot Traffic Per Day", &format!("{} people", people(insights.average_per_day))))
                (stat("Overall Average Foot Traffic Per Week", &format!("{} people", people(insights.average_per_week))))
                (stat("Total Foot Traffic Per Year", &format!("{} people", thousands(insights.total_per_year))))
            }

            @if insights.by_year.len() > 1 {
                (card("Totals by Year", html! {
                    ul class="years" {
                        @for year in &insights.by_year {
                            li { (year.label) ": " (people(year.value)) " people" }
                        }
                    }
                }))
            }
        }
    }
}
