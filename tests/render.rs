use leptos::*;
use leptos_router::*;
use site_navigation::links::ACTIVE_LINK_COLOR;
use site_navigation::navigation::Navigation;
use site_navigation::theme::Theme;

fn render_at(path: &str) -> String {
    let url = format!("http://localhost{}", path);

    leptos::ssr::render_to_string(move || {
        provide_context(RouterIntegrationContext::new(ServerIntegration {
            path: url.clone(),
        }));
        view! {
            <Router>
                <Navigation theme=Theme::dark() />
            </Router>
        }
    })
    .to_string()
}

/// Opening tag of the anchor pointing at `href`.
fn anchor<'a>(html: &'a str, href: &str) -> &'a str {
    let attr = format!("href=\"{}\"", href);
    let at = html.find(&attr).expect("link rendered");
    let start = html[..at].rfind("<a").expect("anchor start");
    let end = at + html[at..].find('>').expect("anchor end");
    &html[start..=end]
}

#[test]
fn posts_route_highlights_posts_link() {
    let html = render_at("/posts");

    assert!(anchor(&html, "/posts").contains(ACTIVE_LINK_COLOR));
    assert!(!anchor(&html, "/").contains(ACTIVE_LINK_COLOR));
}

#[test]
fn home_route_highlights_home_link() {
    let html = render_at("/");

    assert!(anchor(&html, "/").contains(ACTIVE_LINK_COLOR));
    assert!(!anchor(&html, "/posts").contains(ACTIVE_LINK_COLOR));
}

#[test]
fn renders_banner_links_and_spacer() {
    let html = render_at("/");

    assert!(html.contains("position: fixed; width: 100%"));
    assert!(html.contains("display: block"));
    assert!(html.contains("https://github.com/ChristopherBiscardi/gatsby-mdx"));
    assert!(html.contains("https://medium.com/@chrisbiscardi"));
    assert!(html.contains("Home"));
    assert!(html.contains("Posts"));
    // unmeasured on the server
    assert!(html.contains("height: 0px"));
    assert!(html.contains(&Theme::dark().colors.background));
}
