use crate::theme::Colors;

/// Color applied to the link pointing at the page being viewed.
pub const ACTIVE_LINK_COLOR: &str = "#8be9fd";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLinkSpec {
    pub target: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLinkSpec; 2] = [
    NavLinkSpec {
        target: "/",
        label: "Home",
    },
    NavLinkSpec {
        target: "/posts",
        label: "Posts",
    },
];

/// A link is current only when its target is exactly the active path.
pub fn is_current(target: &str, pathname: &str) -> bool {
    target == pathname
}

pub fn link_style(colors: &Colors, current: bool) -> String {
    let color = if current {
        ACTIVE_LINK_COLOR
    } else {
        colors.text.as_str()
    };

    format!(
        "font-family: \"Inter UI\", sans-serif; \
         text-decoration: none; \
         border-bottom: 1px solid {}; \
         padding: 0.5rem; \
         font-weight: 400; \
         font-size: 16px; \
         color: {}; \
         display: inline-block",
        colors.text, color
    )
}
