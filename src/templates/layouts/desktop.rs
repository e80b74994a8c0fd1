use crate::session::Page;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(active: Page, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Foot Flow | " (active.title()) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="topbar" {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#FF4B4B"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class="icon"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M4 21v-13l8 -5l8 5v13" {}
                        path d="M9 21v-6h6v6" {}
                    }
                    h3 { "Foot Flow" }
                    nav {
                        ul {
                            @for page in Page::ALL {
                                li {
                                    a href=(page.path())
                                      class=[(page == active).then_some("active")] {
                                        (page.title())
                                    }
                                }
                            }
                        }
                    }
                }
                main class="content" {
                    (content)
                }
            }
        }
    }
}
