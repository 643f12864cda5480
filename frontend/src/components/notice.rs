use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// How long a notice stays on screen.
pub const NOTICE_MS: u32 = 4_000;

static NEXT_NOTICE_ID: AtomicU64 = AtomicU64::new(1);

/// The notice on screen, tagged with the id of the `flash` that showed it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeState {
    current: Option<(u64, &'static str)>,
}

pub enum NoticeAction {
    Show { id: u64, message: &'static str },
    /// Clears the notice only if it is still the one shown under `id`.
    Expire { id: u64 },
}

impl NoticeState {
    pub fn message(&self) -> Option<&'static str> {
        self.current.map(|(_, message)| message)
    }

    pub fn apply(self, action: NoticeAction) -> Self {
        match action {
            NoticeAction::Show { id, message } => Self {
                current: Some((id, message)),
            },
            NoticeAction::Expire { id } => match self.current {
                Some((current, _)) if current == id => Self::default(),
                _ => self,
            },
        }
    }
}

impl Reducible for NoticeState {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct NoticeProps {
    pub message: Option<&'static str>,
}

/// Non-blocking toast at the bottom of the page.
#[function_component]
pub fn Notice(props: &NoticeProps) -> Html {
    match props.message {
        Some(message) => html! {
            <div class="notice" role="status">
                <i class="fa-solid fa-circle-info"></i>
                <span>{message}</span>
            </div>
        },
        None => html! {},
    }
}

/// Shows `message` for [`NOTICE_MS`]. A later flash keeps its full time on
/// screen; the earlier timer no longer matches and does nothing.
pub fn flash(notice: &UseReducerHandle<NoticeState>, message: &'static str) {
    let id = NEXT_NOTICE_ID.fetch_add(1, Ordering::Relaxed);
    notice.dispatch(NoticeAction::Show { id, message });
    let notice = notice.clone();
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_MS).await;
        notice.dispatch(NoticeAction::Expire { id });
    });
}
