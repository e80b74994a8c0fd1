use maud::{html, Markup};

pub mod charts;
pub mod error;

pub use charts::{bar_chart, line_chart};
pub use error::html_error_response;

pub fn button(label: &str) -> Markup {
    html! {
        button class="btn" type="submit" { (label) }
    }
}

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Headline number with a caption underneath.
pub fn stat(label: &str, value: &str) -> Markup {
    html! {
        div class="stat" {
            span class="stat-value" { (value) }
            span class="stat-label" { (label) }
        }
    }
}

pub fn empty_state(message: &str) -> Markup {
    html! {
        p class="empty-state" { (message) }
    }
}

/// Error box rendered inside a page instead of replacing it.
pub fn alert(message: &str) -> Markup {
    html! {
        div class="alert" role="alert" { (message) }
    }
}
