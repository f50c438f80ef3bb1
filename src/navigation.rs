use crate::links::{is_current, link_style, NavLinkSpec, NAV_LINKS};
use crate::notice::{use_notice, NoticeBanner};
use crate::scroll::use_window_scroll_position;
use crate::size::{spacer_binding, use_element_height};
use crate::theme::Theme;
use leptos::*;
use leptos_router::*;

/// Fixed site header: notice banner above the link bar.
///
/// The header sits outside the document flow, so a spacer of the same
/// measured height follows it to keep page content from sliding underneath.
#[component]
pub fn Navigation(#[prop(optional)] theme: Option<Theme>) -> impl IntoView {
    let theme = theme.unwrap_or_else(Theme::configured);

    let header = create_node_ref::<html::Div>();
    let height = use_element_height(header);

    let scroll = use_window_scroll_position();
    let show_notice = use_notice(Signal::derive(move || scroll.get().y));

    let nav_style = format!("background: {}; display: flex", theme.colors.background);

    view! {
        <div node_ref=header style="position: fixed; width: 100%">
            <NoticeBanner visible=show_notice />
            <nav style=nav_style>
                <ul style="display: flex; list-style-type: none">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <NavLink link=*link theme=theme.clone() /> })
                        .collect_view()}
                </ul>
            </nav>
        </div>
        <div style=spacer_binding(height)></div>
    }
}

#[component]
fn NavLink(link: NavLinkSpec, theme: Theme) -> impl IntoView {
    let location = use_location();
    let current = move || location.pathname.with(|path| is_current(link.target, path));
    let style = move || link_style(&theme.colors, current());

    view! {
        <li>
            <A href=link.target exact=true attr:style=style>
                {link.label}
            </A>
        </li>
    }
}
