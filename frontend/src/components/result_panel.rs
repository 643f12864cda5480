use yew::prelude::*;

use crate::i18n::analysis::{AnalysisText, ANALYSIS};
use crate::upload::result::{AnalysisResult, ResultField};

#[derive(Properties, PartialEq, Clone)]
pub struct ResultPanelProps {
    pub result: AnalysisResult,
    pub language: &'static str,
    pub on_retry: Callback<MouseEvent>,
    pub on_share: Callback<MouseEvent>,
}

fn field_card(field: &ResultField, icon: &'static str) -> Html {
    html! {
        <div class="result-card">
            <i class={classes!("fa-solid", icon)}></i>
            <h4>{field.label}</h4>
            <p>{field.value.clone()}</p>
        </div>
    }
}

fn icon_for(field: &ResultField, text: &AnalysisText) -> &'static str {
    if field.label == text.diagnosis_label {
        "fa-heart-pulse"
    } else if field.label == text.tumor_size_label {
        "fa-maximize"
    } else if field.label == text.confidence_label {
        "fa-chart-column"
    } else {
        "fa-bolt"
    }
}

#[function_component]
pub fn ResultPanel(props: &ResultPanelProps) -> Html {
    let text = ANALYSIS.text(props.language);

    let body = match &props.result {
        AnalysisResult::Failure { error } => html! {
            <div class="result-error">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{error.clone()}</p>
                <button class="retry-button danger" onclick={props.on_retry.clone()}>
                    <i class="fa-solid fa-rotate-right"></i>
                    {text.retry_button}
                </button>
            </div>
        },
        AnalysisResult::Success(prediction) => {
            let summary = prediction.summary_fields(text);
            let measurements = prediction.measurement_fields(text);
            html! {
                <>
                    <div class="result-grid">
                        { for summary.iter().map(|field| field_card(field, icon_for(field, text))) }
                    </div>
                    if !measurements.is_empty() {
                        <div class="measurements">
                            <h4>{text.measurements_title}</h4>
                            { for measurements.iter().map(|field| html! {
                                <p>{format!("{}: {}", field.label, field.value)}</p>
                            }) }
                        </div>
                    }
                </>
            }
        }
    };

    html! {
        <div class="results">
            <div class="result-box">
                <h3>{text.results_title}</h3>
                {body}
            </div>
            <div class="result-actions">
                <button class="retry-button" onclick={props.on_retry.clone()}>
                    {text.retry_button}
                </button>
                <button class="share-button" onclick={props.on_share.clone()}>
                    <i class="fa-solid fa-share-nodes"></i>
                    {text.share_label}
                </button>
            </div>
        </div>
    }
}
