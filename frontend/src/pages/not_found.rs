use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>{r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif;
                    color: #1e40af;
                    background: #eff6ff;
                }
                .not-found h1 {
                    font-size: 4rem;
                    margin: 0;
                }
                .back-home-button {
                    background: #2563eb;
                    color: white;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    text-decoration: none;
                }
            "#}</style>
            <h1>{"404"}</h1>
            <p>{"This page does not exist."}</p>
            <Link<Route> to={Route::Home} classes="back-home-button">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
