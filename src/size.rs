use leptos::*;

/// Tracks the rendered height of `target` in pixels.
///
/// Reads `0` until the element is mounted and measured, which is also what
/// server rendering produces.
pub fn use_element_height(target: NodeRef<html::Div>) -> ReadSignal<f64> {
    let (height, set_height) = create_signal(0.0);

    #[cfg(feature = "hydrate")]
    target.on_load(move |element| {
        use wasm_bindgen::{closure::Closure, JsCast};

        let element: web_sys::HtmlElement = (*element).clone().unchecked_into();
        set_height.set(f64::from(element.offset_height()));

        let measured = element.clone();
        let on_resize = Closure::<dyn FnMut(js_sys::Array)>::new(move |_entries: js_sys::Array| {
            set_height.set(f64::from(measured.offset_height()));
        });

        match web_sys::ResizeObserver::new(on_resize.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&element);
                on_cleanup(move || {
                    observer.disconnect();
                    drop(on_resize);
                });
            }
            Err(err) => tracing::warn!("resize observer unavailable: {:?}", err),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (target, set_height);

    height
}

pub fn spacer_style(height: f64) -> String {
    format!("height: {}px", height)
}

/// Style binding for the spacer that reserves room below the fixed header.
pub fn spacer_binding(height: ReadSignal<f64>) -> impl Fn() -> String + Copy + 'static {
    move || spacer_style(height.get())
}
