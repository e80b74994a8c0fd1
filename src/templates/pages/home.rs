// templates/pages/home.rs

use crate::session::Page;
use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        Page::Landing,
        html! {
            h1 class="main-title" { "Welcome to Foot Flow!" }
            p {
                "Foot Flow helps aspiring and seasoned restaurant owners find prime locations in San Jose. "
                "It combines foot traffic, leasing options and market analysis so you can decide where to "
                "open your next restaurant. Narrow the search by restaurant type, cuisine, budget and floor "
                "space to find a plaza that fits your plans."
            }

            h2 { "Features" }
            div class="features" {
                a class="feature-card" href=(Page::Insights.path()) {
                    (card(Page::Insights.title(), html! {
                        p { "Explore location-specific data for choosing the right restaurant spot." }
                    }))
                }
                a class="feature-card" href=(Page::Chat.path()) {
                    (card(Page::Chat.title(), html! {
                        p { "Ask questions about setting up your business in San Jose." }
                    }))
                }
            }
        },
    )
}
