use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod i18n;
mod upload;
mod components {
    pub mod notice;
    pub mod result_panel;
}
mod pages {
    pub mod analysis;
    pub mod landing;
    pub mod not_found;
}
mod utils {
    pub mod sections;
    pub mod share;
}

use pages::{analysis::Analysis, landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/analysis")]
    Analysis,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Landing /> },
        Route::Analysis => html! { <Analysis /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Backend at {:?}", config::get_backend_url());
    yew::Renderer::<App>::new().render();
}
