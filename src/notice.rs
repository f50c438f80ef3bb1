//! Scroll-driven visibility of the notice banner.
//!
//! The banner hides once the page scrolls past [`HIDE_ABOVE`] and only comes
//! back after scrolling up beyond [`SHOW_BELOW`]. Offsets in between leave the
//! current state untouched so the banner does not flicker around a single line.

use leptos::*;
use tracing::debug;

pub const HIDE_ABOVE: f64 = 50.0;
pub const SHOW_BELOW: f64 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoticeState {
    pub visible: bool,
    /// Offset the next transition is measured against.
    pub threshold: f64,
}

impl NoticeState {
    pub const fn visible() -> Self {
        NoticeState {
            visible: true,
            threshold: HIDE_ABOVE,
        }
    }

    pub const fn hidden() -> Self {
        NoticeState {
            visible: false,
            threshold: SHOW_BELOW,
        }
    }

    /// Next state after the window reports scroll offset `y`.
    pub fn observe(self, y: f64) -> Self {
        if self.visible && y > self.threshold {
            debug!(y, "hiding notice");
            NoticeState::hidden()
        } else if !self.visible && y < self.threshold {
            debug!(y, "showing notice");
            NoticeState::visible()
        } else {
            self
        }
    }
}

impl Default for NoticeState {
    fn default() -> Self {
        NoticeState::visible()
    }
}

/// Derives `showNotice` from a vertical scroll offset.
///
/// Every offset change is folded into the hysteresis state as it happens,
/// whether or not anything reads the result in between. The returned signal
/// only notifies when visibility actually flips.
pub fn use_notice(offset: Signal<f64>) -> Signal<bool> {
    let state = store_value(NoticeState::default());
    let (visible, set_visible) = create_signal(state.get_value().visible);

    create_isomorphic_effect(move |_| {
        let next = state.get_value().observe(offset.get());
        state.set_value(next);
        if next.visible != visible.get_untracked() {
            set_visible.set(next.visible);
        }
    });

    visible.into()
}

pub struct NoticeLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NOTICE_LINKS: [NoticeLink; 3] = [
    NoticeLink {
        href: "https://github.com/ChristopherBiscardi/gatsby-mdx",
        label: "gatsby-mdx",
    },
    NoticeLink {
        href: "https://www.gatsbyjs.org/blog/2018-11-11-introducing-gatsby-themes/",
        label: "gatsby themes",
    },
    NoticeLink {
        href: "https://medium.com/@chrisbiscardi",
        label: "to Medium",
    },
];

const LINK_STYLE: &str = "color: #ff5e99";

pub fn banner_style(visible: bool) -> String {
    format!(
        "background: #592000; padding: 1rem; color: white; display: {}",
        if visible { "block" } else { "none" }
    )
}

#[component]
pub fn NoticeBanner(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let [mdx, themes, medium] = &NOTICE_LINKS;

    view! {
        <div style=move || banner_style(visible.get())>
            <p style="margin-bottom: 0; max-width: 100%">
                "Warning: Under Construction. I am using this site as my playground as I build\u{a0}"
                <a style=LINK_STYLE href=mdx.href>{mdx.label}</a>
                <span>" and "</span>
                <a style=LINK_STYLE href=themes.href>{themes.label}</a>
                ". During this time I will also repost new content\u{a0}"
                <a style=LINK_STYLE href=medium.href>{medium.label}</a>
            </p>
        </div>
    }
}
