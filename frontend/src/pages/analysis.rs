use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, File, FileList, HtmlInputElement, HtmlSelectElement, XmlHttpRequest};
use yew::prelude::*;

use crate::components::notice::{flash, Notice, NoticeState};
use crate::components::result_panel::ResultPanel;
use crate::config;
use crate::i18n::analysis::ANALYSIS;
use crate::upload::client::post_image;
use crate::upload::error::UploadError;
use crate::upload::filters::{compare_style, preview_style, DISPLAY_FILTERS};
use crate::upload::preview::PreviewSet;
use crate::upload::result::AnalysisResult;
use crate::upload::state::{
    pick_single_image, UploadAction, UploadState, View, MAX_CONTRAST, MAX_ZOOM, MIN_CONTRAST,
    MIN_ZOOM,
};
use crate::utils::share::{share_current_page, ShareOutcome};

type State = UploadState<File>;

/// Request currently on the wire, tagged with its ticket.
type InFlight = Rc<RefCell<Option<(u64, XmlHttpRequest)>>>;

fn file_list_to_vec(files: &FileList) -> Vec<File> {
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}

fn select_files(state: &UseReducerHandle<State>, files: Vec<File>) {
    if state.view() != View::Empty {
        return;
    }
    let Some(file) = pick_single_image(files) else {
        return;
    };
    match PreviewSet::for_file(&file, DISPLAY_FILTERS.len()) {
        Ok(previews) => state.dispatch(UploadAction::Select {
            file,
            previews: Rc::new(previews),
        }),
        Err(e) => log::error!("Failed to create previews: {}", e),
    }
}

fn abort_in_flight(in_flight: &InFlight) {
    if let Some((ticket, xhr)) = in_flight.borrow_mut().take() {
        log::info!("Abandoning request {}", ticket);
        if let Err(e) = xhr.abort() {
            log::warn!("Failed to abort request {}: {:?}", ticket, e);
        }
    }
}

fn submit(state: &UseReducerHandle<State>, in_flight: &InFlight) {
    let Some((file, ticket)) = state.begin_submit() else {
        return;
    };
    state.dispatch(UploadAction::Submitted { ticket });

    let state = state.clone();
    let in_flight = in_flight.clone();
    spawn_local(async move {
        let progress_state = state.clone();
        let started = in_flight.clone();
        let outcome = post_image(
            &config::prediction_endpoint(),
            &file,
            move |percent| progress_state.dispatch(UploadAction::Progress { ticket, percent }),
            move |xhr| *started.borrow_mut() = Some((ticket, xhr)),
        )
        .await;

        {
            let mut current = in_flight.borrow_mut();
            if matches!(current.as_ref(), Some((t, _)) if *t == ticket) {
                current.take();
            }
        }

        let result = match outcome {
            Ok((status, body)) => AnalysisResult::from_response(status, &body),
            Err(UploadError::Aborted) => {
                log::info!("Request {} aborted", ticket);
                return;
            }
            Err(e) => AnalysisResult::from_transport(&e),
        };
        state.dispatch(UploadAction::Completed { ticket, result });
    });
}

#[function_component(Analysis)]
pub fn analysis() -> Html {
    let state = use_reducer(State::default);
    let language = use_state(|| ANALYSIS.default_code());
    let notice = use_reducer(NoticeState::default);
    let drag_active = use_state(|| false);
    let in_flight: InFlight = use_mut_ref(|| None);
    let file_input = use_node_ref();
    let text = ANALYSIS.text(&language);

    // Leaving the page abandons whatever is still uploading.
    {
        let in_flight = in_flight.clone();
        use_effect_with_deps(
            move |_| {
                move || abort_in_flight(&in_flight)
            },
            (),
        );
    }

    let on_language_change = {
        let language = language.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let code = select.value();
            if ANALYSIS.contains(&code) {
                language.set(ANALYSIS.entry(&code).code);
            }
        })
    };

    let on_drag_over = {
        let drag_active = drag_active.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            if !*drag_active {
                drag_active.set(true);
            }
        })
    };

    let on_drag_leave = {
        let drag_active = drag_active.clone();
        Callback::from(move |_: DragEvent| drag_active.set(false))
    };

    let on_drop = {
        let state = state.clone();
        let drag_active = drag_active.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_active.set(false);
            let files = e
                .data_transfer()
                .and_then(|dt| dt.files())
                .map(|files| file_list_to_vec(&files))
                .unwrap_or_default();
            select_files(&state, files);
        })
    };

    let on_pick = {
        let file_input = file_input.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_file_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let files = input.files().map(|files| file_list_to_vec(&files)).unwrap_or_default();
            // Allow picking the same file again after a reset.
            input.set_value("");
            select_files(&state, files);
        })
    };

    let on_zoom = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(zoom) = input.value().parse::<f64>() {
                state.dispatch(UploadAction::SetZoom(zoom));
            }
        })
    };

    let on_contrast = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(contrast) = input.value().parse::<f64>() {
                state.dispatch(UploadAction::SetContrast(contrast));
            }
        })
    };

    let on_toggle_compare = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(UploadAction::ToggleCompare))
    };

    let on_submit = {
        let state = state.clone();
        let in_flight = in_flight.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            submit(&state, &in_flight);
        })
    };

    let on_retry = {
        let state = state.clone();
        let in_flight = in_flight.clone();
        Callback::from(move |_: MouseEvent| {
            abort_in_flight(&in_flight);
            state.dispatch(UploadAction::Reset);
        })
    };

    let on_share = {
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            if share_current_page() == ShareOutcome::Unsupported {
                flash(&notice, text.share_unsupported);
            }
        })
    };

    let body = match state.view() {
        View::Empty => html! {
            <div class="fade-in" key="dropzone">
                <div
                    class={classes!("dropzone", drag_active.then_some("active"))}
                    onclick={on_pick}
                    ondragover={on_drag_over}
                    ondragleave={on_drag_leave}
                    ondrop={on_drop}
                >
                    <input
                        ref={file_input}
                        type="file"
                        accept="image/*"
                        style="display: none;"
                        onchange={on_file_change}
                    />
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p class="dropzone-text">{text.dropzone_text}</p>
                    <p class="dropzone-formats">{text.supported_formats}</p>
                </div>
            </div>
        },
        View::Previewing => {
            let filter = state.selected_filter();
            let main_src = state.preview_url(state.filter_index).unwrap_or_default().to_string();
            let original_src = state.preview_url(0).unwrap_or_default().to_string();
            html! {
                <div class="fade-in preview" key="preview">
                    <div class="preview-grid">
                        <div class="preview-image">
                            <img
                                src={main_src}
                                alt="Medical image preview"
                                style={preview_style(filter, state.zoom, state.contrast)}
                            />
                            if state.compare_mode {
                                <div class="compare-overlay">
                                    <div class="compare-half">
                                        <img
                                            src={original_src}
                                            alt="Original medical image"
                                            style={compare_style(state.zoom, state.contrast)}
                                        />
                                    </div>
                                </div>
                            }
                        </div>
                        <div class="preview-controls">
                            <div class="control-row">
                                <label for="zoom">{text.zoom_label}</label>
                                <input
                                    type="range"
                                    id="zoom"
                                    min={MIN_ZOOM.to_string()}
                                    max={MAX_ZOOM.to_string()}
                                    step="0.1"
                                    value={state.zoom.to_string()}
                                    oninput={on_zoom}
                                />
                            </div>
                            <div class="control-row">
                                <label for="contrast">{text.contrast_label}</label>
                                <input
                                    type="range"
                                    id="contrast"
                                    min={MIN_CONTRAST.to_string()}
                                    max={MAX_CONTRAST.to_string()}
                                    value={state.contrast.to_string()}
                                    oninput={on_contrast}
                                />
                            </div>
                            <button
                                class={classes!("compare-button", state.compare_mode.then_some("active"))}
                                onclick={on_toggle_compare}
                            >
                                <i class="fa-solid fa-image"></i>
                                {text.compare_label}
                            </button>
                            <div class="filter-buttons">
                                { for DISPLAY_FILTERS.iter().enumerate().map(|(index, display_filter)| {
                                    let state = state.clone();
                                    html! {
                                        <button
                                            key={display_filter.name}
                                            class={classes!("filter-button", (state.filter_index == index).then_some("selected"))}
                                            onclick={Callback::from(move |_: MouseEvent| state.dispatch(UploadAction::SelectFilter(index)))}
                                        >
                                            {display_filter.name}
                                        </button>
                                    }
                                }) }
                            </div>
                        </div>
                    </div>
                    <div class="submit-row">
                        <button class="analyze-button" onclick={on_submit} disabled={state.uploading}>
                            if state.uploading {
                                <span>{text.analyzing_text}</span>
                                <i class="fa-solid fa-rotate spin"></i>
                            } else {
                                <span>{text.analyze_button}</span>
                                <i class="fa-solid fa-chevron-right"></i>
                            }
                        </button>
                        if state.uploading {
                            <div class="progress" role="progressbar" aria-valuenow={state.progress.to_string()} aria-valuemin="0" aria-valuemax="100">
                                <div class="progress-bar" style={format!("width: {}%;", state.progress)}></div>
                            </div>
                        }
                    </div>
                </div>
            }
        }
        View::Resulted => match state.result.clone() {
            Some(result) => html! {
                <div class="fade-in" key="results">
                    <ResultPanel
                        result={result}
                        language={*language}
                        on_retry={on_retry}
                        on_share={on_share}
                    />
                </div>
            },
            None => html! {},
        },
    };

    html! {
        <div class="analysis-page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <style>{ANALYSIS_CSS}</style>
            <div class="analysis-card">
                <div class="analysis-header">
                    <h1>{text.title}</h1>
                    <label class="language-select">
                        <span class="sr-only">{text.language_label}</span>
                        <select onchange={on_language_change}>
                            { for ANALYSIS.entries().iter().map(|entry| html! {
                                <option value={entry.code} selected={entry.code == *language}>
                                    {entry.native_name}
                                </option>
                            }) }
                        </select>
                    </label>
                </div>
                <p class="analysis-subtitle">{text.subtitle}</p>
                {body}
            </div>
            <Notice message={notice.message()} />
        </div>
    }
}

const ANALYSIS_CSS: &str = r#"
    .analysis-page {
        min-height: 100vh;
        background: linear-gradient(135deg, #dbeafe, #bfdbfe, #93c5fd);
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif;
    }
    .analysis-card {
        width: 100%;
        max-width: 72rem;
        background: rgba(255, 255, 255, 0.8);
        backdrop-filter: blur(16px);
        border: 1px solid #bfdbfe;
        border-radius: 1.5rem;
        box-shadow: 0 25px 50px rgba(30, 64, 175, 0.25);
        padding: 2rem;
    }
    .analysis-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        margin-bottom: 2rem;
    }
    .analysis-header h1 {
        font-size: 2rem;
        color: #1e40af;
        margin: 0;
    }
    .language-select select {
        background: #dbeafe;
        color: #1e40af;
        border: none;
        border-radius: 0.375rem;
        padding: 0.25rem 0.5rem;
    }
    .sr-only {
        position: absolute;
        width: 1px;
        height: 1px;
        overflow: hidden;
        clip: rect(0, 0, 0, 0);
    }
    .analysis-subtitle {
        font-size: 1.25rem;
        color: #2563eb;
        text-align: center;
        margin-bottom: 2rem;
    }
    .fade-in {
        animation: fade-in 0.3s ease-out;
    }
    @keyframes fade-in {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .dropzone {
        border: 2px dashed #60a5fa;
        border-radius: 1rem;
        padding: 2rem;
        text-align: center;
        cursor: pointer;
        transition: background 0.2s;
    }
    .dropzone:hover, .dropzone.active {
        background: #eff6ff;
    }
    .dropzone i {
        font-size: 4rem;
        color: #3b82f6;
        margin-bottom: 1rem;
    }
    .dropzone-text {
        font-size: 1.125rem;
        color: #1e40af;
    }
    .dropzone-formats {
        font-size: 0.875rem;
        color: #2563eb;
    }
    .preview-grid {
        display: grid;
        grid-template-columns: 2fr 1fr;
        gap: 1rem;
    }
    .preview-image {
        position: relative;
        overflow: hidden;
        border-radius: 0.5rem;
    }
    .preview-image img {
        width: 100%;
        height: auto;
        display: block;
    }
    .compare-overlay {
        position: absolute;
        inset: 0;
    }
    .compare-half {
        width: 50%;
        height: 100%;
        overflow: hidden;
    }
    .compare-half img {
        width: 200%;
        max-width: none;
        height: 100%;
        object-fit: cover;
    }
    .preview-controls {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .control-row {
        display: flex;
        justify-content: space-between;
        align-items: center;
        color: #1e40af;
    }
    .control-row input {
        width: 66%;
    }
    .compare-button, .filter-button {
        background: #dbeafe;
        color: #1e40af;
        border: none;
        border-radius: 0.375rem;
        padding: 0.5rem 1rem;
        cursor: pointer;
    }
    .compare-button.active, .filter-button.selected {
        background: #3b82f6;
        color: white;
    }
    .filter-buttons {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 0.5rem;
    }
    .submit-row {
        margin-top: 1.5rem;
        text-align: center;
    }
    .analyze-button {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.75rem 1.5rem;
        background: #2563eb;
        color: white;
        border: none;
        border-radius: 9999px;
        font-weight: 500;
        cursor: pointer;
    }
    .analyze-button:disabled {
        opacity: 0.7;
        cursor: progress;
    }
    .spin {
        animation: spin 1s linear infinite;
    }
    @keyframes spin {
        to { transform: rotate(360deg); }
    }
    .progress {
        margin: 1rem auto 0;
        max-width: 24rem;
        height: 0.5rem;
        background: #dbeafe;
        border-radius: 9999px;
        overflow: hidden;
    }
    .progress-bar {
        height: 100%;
        background: #2563eb;
        transition: width 0.2s;
    }
    .result-box, .measurements {
        background: rgba(255, 255, 255, 0.9);
        border: 1px solid #bfdbfe;
        border-radius: 0.75rem;
        padding: 1.5rem;
        margin-bottom: 1.5rem;
    }
    .result-box h3 {
        font-size: 1.5rem;
        color: #1e40af;
        margin-top: 0;
    }
    .result-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr));
        gap: 1.5rem;
    }
    .result-card {
        background: #eff6ff;
        border-radius: 0.5rem;
        padding: 1rem;
        text-align: center;
        color: #1e40af;
    }
    .result-card i {
        font-size: 2rem;
        color: #3b82f6;
    }
    .result-card p {
        font-size: 1.25rem;
        font-weight: bold;
        color: #2563eb;
    }
    .result-error {
        display: flex;
        flex-direction: column;
        align-items: center;
        color: #ef4444;
    }
    .result-error > i {
        font-size: 3rem;
    }
    .result-actions {
        display: flex;
        justify-content: center;
        gap: 1rem;
    }
    .retry-button, .share-button {
        padding: 0.75rem 1.5rem;
        border: none;
        border-radius: 9999px;
        font-weight: 500;
        cursor: pointer;
    }
    .retry-button {
        background: #dbeafe;
        color: #1e40af;
    }
    .retry-button.danger {
        background: #ef4444;
        color: white;
    }
    .share-button {
        background: #22c55e;
        color: white;
    }
    .notice {
        position: fixed;
        bottom: 1.5rem;
        left: 50%;
        transform: translateX(-50%);
        background: #1e3a8a;
        color: white;
        padding: 0.75rem 1.25rem;
        border-radius: 0.5rem;
        display: flex;
        gap: 0.5rem;
        align-items: center;
    }
    @media (max-width: 768px) {
        .preview-grid {
            grid-template-columns: 1fr;
        }
        .analysis-header h1 {
            font-size: 1.5rem;
        }
    }
"#;
