use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod components {
    pub mod floating;
    pub mod reveal;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use super::*;
    use crate::components::floating::{FloatingShapes, FloatingShapesProps, Keyframe, ShapeKind, ShapeSpec};
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn mount_page() -> (yew::AppHandle<Home>, web_sys::Element) {
        let root = document().create_element("div").unwrap();
        document().body().unwrap().append_child(&root).unwrap();
        let handle = yew::Renderer::<Home>::with_root(root.clone()).render();
        (handle, root)
    }

    fn unmount(handle: yew::AppHandle<Home>, root: web_sys::Element) {
        handle.destroy();
        root.remove();
        web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
    }

    #[wasm_bindgen_test]
    async fn hero_title_and_checkout_links_match_config() {
        let (handle, root) = mount_page();
        TimeoutFuture::new(50).await;

        let h1 = root.query_selector(".hero h1").unwrap().unwrap();
        assert_eq!(
            h1.text_content().unwrap(),
            format!("{}{}", config::HERO_TITLE_LEAD, config::HERO_TITLE_ACCENT)
        );

        let links = root.query_selector_all("a.cta-button").unwrap();
        assert_eq!(links.length(), 2);
        for i in 0..links.length() {
            let link: web_sys::Element = links.item(i).unwrap().dyn_into().unwrap();
            assert_eq!(link.get_attribute("href").unwrap(), config::CHECKOUT_URL);
        }

        unmount(handle, root);
    }

    #[wasm_bindgen_test]
    async fn exactly_one_video_embed_with_configured_source() {
        let (handle, root) = mount_page();
        TimeoutFuture::new(50).await;

        let frames = root.query_selector_all("iframe").unwrap();
        assert_eq!(frames.length(), 1);
        let frame: web_sys::Element = frames.item(0).unwrap().dyn_into().unwrap();
        assert_eq!(frame.get_attribute("src").unwrap(), config::VIDEO_EMBED_URL);

        unmount(handle, root);
    }

    #[wasm_bindgen_test]
    async fn footer_has_exactly_the_two_social_links() {
        let (handle, root) = mount_page();
        TimeoutFuture::new(50).await;

        let links = root.query_selector_all("footer .social-link").unwrap();
        assert_eq!(links.length(), 2);
        let first: web_sys::Element = links.item(0).unwrap().dyn_into().unwrap();
        let second: web_sys::Element = links.item(1).unwrap().dyn_into().unwrap();
        assert_eq!(first.get_attribute("href").unwrap(), config::INSTAGRAM_URL);
        assert_eq!(second.get_attribute("href").unwrap(), config::FACEBOOK_URL);

        unmount(handle, root);
    }

    #[wasm_bindgen_test]
    async fn topic_card_reveals_once_and_stays_revealed() {
        let (handle, root) = mount_page();
        TimeoutFuture::new(100).await;

        let card = root.query_selector(".topic-grid .reveal").unwrap().unwrap();
        let style = card.get_attribute("style").unwrap_or_default();
        assert!(style.contains("opacity: 0"), "below-fold card should start hidden: {style}");

        card.scroll_into_view();
        TimeoutFuture::new(300).await;
        let style = card.get_attribute("style").unwrap_or_default();
        assert!(style.contains("opacity: 1"), "card should reveal in view: {style}");

        web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
        TimeoutFuture::new(200).await;
        let style = card.get_attribute("style").unwrap_or_default();
        assert!(style.contains("opacity: 1"), "reveal must not revert: {style}");

        unmount(handle, root);
    }

    const TEST_SHAPES: &[ShapeSpec] = &[ShapeSpec {
        name: "residue-dot",
        kind: ShapeKind::Dot,
        width_px: 8.0,
        height_px: 8.0,
        anchor: "top: 1rem; left: 1rem;",
        color: "#22d3ee",
        opacity: 0.2,
        path: &[
            Keyframe { at: 0.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
            Keyframe { at: 1.0, x_px: 0.0, y_px: -10.0, rotate_deg: 0.0, scale: 1.0 },
        ],
        period_s: 4.0,
        delay_s: 0.0,
    }];

    #[wasm_bindgen_test]
    async fn floating_shapes_leave_no_residue_after_unmount() {
        let root = document().create_element("div").unwrap();
        document().body().unwrap().append_child(&root).unwrap();

        for _ in 0..3 {
            let handle = yew::Renderer::<FloatingShapes>::with_root_and_props(
                root.clone(),
                FloatingShapesProps { shapes: TEST_SHAPES },
            )
            .render();
            TimeoutFuture::new(20).await;
            assert!(root.query_selector(".residue-dot").unwrap().is_some());
            handle.destroy();
            TimeoutFuture::new(20).await;
            assert_eq!(root.child_element_count(), 0);
        }

        root.remove();
    }
}
