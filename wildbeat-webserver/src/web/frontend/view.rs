use maud::{html, Markup, DOCTYPE};

const ACCENT_COLOR: &str = "#D4A574";

fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body style="font-family: Arial; text-align: center; padding: 50px;" {
                (content)
            }
        }
    }
}

pub fn review_approved(frontend_url: &str) -> Markup {
    let reviews_url = format!("{}/reviews", frontend_url.trim_end_matches('/'));
    page(
        "Review Approved",
        html! {
            h1 style=(format!("color: {ACCENT_COLOR};")) { "✅ Review Approved!" }
            p { "The review has been approved and is now live on your website." }
            a href=(reviews_url)
              style=(format!("background: {ACCENT_COLOR}; color: white; padding: 12px 24px; text-decoration: none; border-radius: 6px;")) {
                "View Reviews"
            }
        },
    )
}

pub fn review_not_found() -> Markup {
    page(
        "Review Not Found",
        html! { h1 { "Review not found or already approved" } },
    )
}

pub fn review_approval_failed() -> Markup {
    page("Error", html! { h1 { "Error approving review" } })
}
