use maud::{html, Markup, DOCTYPE};

use crate::{names, utils};

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="/static/index.css";
    }
}

fn header() -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."brand" {
                        a href=(names::HOME_URL) {
                            strong { "Gain Knowledge" }
                        }
                    }
                }
                ul {
                    li { a href=(names::CATEGORIES_URL) { "Categories" } }
                    li { a href=(names::USER_COURSES_URL) { "My Courses" } }
                    li."secondary" { (utils::VERSION) }
                }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";

            (css())

            title { (format!("{title} - Gain Knowledge")) }
        }

        body."container" {
            (header())
            (main(body))
        }
    }
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) " - Gain Knowledge" }
        (body)
    }
}

/// HTMX requests get a fragment with an out-of-band title, full page loads
/// get the whole document.
pub fn render(is_htmx: bool, title: &str, body: Markup) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body)
    }
}
