use leptos::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollPosition {
    pub x: f64,
    pub y: f64,
}

/// Window scroll offsets, refreshed on every `scroll` event.
///
/// Stays at the origin while rendering on the server.
pub fn use_window_scroll_position() -> ReadSignal<ScrollPosition> {
    let (position, set_position) = create_signal(ScrollPosition::default());

    #[cfg(feature = "hydrate")]
    {
        let read = || {
            let window = window();
            ScrollPosition {
                x: window.scroll_x().unwrap_or_default(),
                y: window.scroll_y().unwrap_or_default(),
            }
        };

        set_position.set(read());
        let handle = window_event_listener(ev::scroll, move |_| set_position.set(read()));
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_position;

    position
}
