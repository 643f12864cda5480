use std::rc::Rc;

use yew::prelude::*;

use super::filters::{DisplayFilter, DISPLAY_FILTERS};
use super::preview::PreviewSet;
use super::result::AnalysisResult;

pub const DEFAULT_ZOOM: f64 = 1.0;
pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 3.0;
pub const DEFAULT_CONTRAST: f64 = 100.0;
pub const MIN_CONTRAST: f64 = 50.0;
pub const MAX_CONTRAST: f64 = 150.0;

/// What the upload page needs to know about a picked file.
pub trait UploadFile: Clone + 'static {
    fn name(&self) -> String;
    fn mime_type(&self) -> String;
}

impl UploadFile for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn mime_type(&self) -> String {
        self.type_()
    }
}

/// Accepts a drop or picker selection only when it is exactly one image.
pub fn pick_single_image<F: UploadFile>(files: Vec<F>) -> Option<F> {
    let mut files = files.into_iter();
    let file = files.next()?;
    if files.next().is_some() {
        log::info!("Ignoring multi-file selection");
        return None;
    }
    if !file.mime_type().starts_with("image/") {
        log::info!("Ignoring non-image file {} ({})", file.name(), file.mime_type());
        return None;
    }
    Some(file)
}

/// Which of the three mutually exclusive panels is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Empty,
    Previewing,
    Resulted,
}

pub enum UploadAction<F> {
    Select { file: F, previews: Rc<PreviewSet> },
    SelectFilter(usize),
    SetZoom(f64),
    SetContrast(f64),
    ToggleCompare,
    Submitted { ticket: u64 },
    Progress { ticket: u64, percent: u8 },
    Completed { ticket: u64, result: AnalysisResult },
    Reset,
}

/// State of the upload workflow.
///
/// Every request carries a ticket. `Reset` moves the current ticket forward,
/// so progress and completions from an abandoned request no longer match and
/// are dropped.
#[derive(Clone, Debug)]
pub struct UploadState<F> {
    pub file: Option<F>,
    pub previews: Option<Rc<PreviewSet>>,
    pub filter_index: usize,
    pub zoom: f64,
    pub contrast: f64,
    pub compare_mode: bool,
    pub uploading: bool,
    pub progress: u8,
    pub result: Option<AnalysisResult>,
    ticket: u64,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            file: None,
            previews: None,
            filter_index: 0,
            zoom: DEFAULT_ZOOM,
            contrast: DEFAULT_CONTRAST,
            compare_mode: false,
            uploading: false,
            progress: 0,
            result: None,
            ticket: 0,
        }
    }
}

impl<F: UploadFile> UploadState<F> {
    pub fn view(&self) -> View {
        match (&self.file, &self.result) {
            (_, Some(_)) => View::Resulted,
            (Some(_), None) => View::Previewing,
            (None, None) => View::Empty,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.view() == View::Previewing && !self.uploading
    }

    /// File and ticket for a new request, or `None` when submitting would be
    /// a no-op (nothing selected, or a request already in flight).
    pub fn begin_submit(&self) -> Option<(F, u64)> {
        if !self.can_submit() {
            return None;
        }
        let file = self.file.clone()?;
        Some((file, self.ticket + 1))
    }

    pub fn selected_filter(&self) -> &'static DisplayFilter {
        &DISPLAY_FILTERS[self.filter_index.min(DISPLAY_FILTERS.len() - 1)]
    }

    pub fn preview_url(&self, index: usize) -> Option<&str> {
        self.previews.as_deref().and_then(|previews| previews.get(index))
    }

    pub fn apply(mut self, action: UploadAction<F>) -> Self {
        match action {
            UploadAction::Select { file, previews } => {
                if self.view() != View::Empty || self.uploading {
                    return self;
                }
                if previews.len() != DISPLAY_FILTERS.len() {
                    log::warn!(
                        "Expected {} previews, got {}",
                        DISPLAY_FILTERS.len(),
                        previews.len()
                    );
                    return self;
                }
                log::info!("Selected {} ({})", file.name(), file.mime_type());
                self.file = Some(file);
                self.previews = Some(previews);
                self.result = None;
                self.filter_index = 0;
                self.progress = 0;
            }
            UploadAction::SelectFilter(index) => {
                if index < DISPLAY_FILTERS.len() {
                    self.filter_index = index;
                }
            }
            UploadAction::SetZoom(zoom) => {
                if zoom.is_finite() {
                    self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
                }
            }
            UploadAction::SetContrast(contrast) => {
                if contrast.is_finite() {
                    self.contrast = contrast.clamp(MIN_CONTRAST, MAX_CONTRAST);
                }
            }
            UploadAction::ToggleCompare => {
                self.compare_mode = !self.compare_mode;
            }
            UploadAction::Submitted { ticket } => {
                if self.can_submit() && ticket == self.ticket + 1 {
                    self.ticket = ticket;
                    self.uploading = true;
                    self.progress = 0;
                }
            }
            UploadAction::Progress { ticket, percent } => {
                if self.uploading && ticket == self.ticket {
                    self.progress = self.progress.max(percent.min(100));
                }
            }
            UploadAction::Completed { ticket, result } => {
                if !self.uploading || ticket != self.ticket {
                    log::debug!("Dropping result of abandoned request {}", ticket);
                    return self;
                }
                self.uploading = false;
                self.result = Some(result);
            }
            UploadAction::Reset => {
                // Dropping the previews here revokes their URLs once no
                // other snapshot holds them.
                return Self {
                    ticket: self.ticket + 1,
                    ..Self::default()
                };
            }
        }
        self
    }
}

impl<F: UploadFile> Reducible for UploadState<F> {
    type Action = UploadAction<F>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::preview::tests::tracked;
    use crate::upload::result::{Confidence, Prediction};
    use std::cell::RefCell;
    use std::collections::HashSet;

    #[derive(Clone, Debug, PartialEq)]
    struct FakeFile {
        name: &'static str,
        mime: &'static str,
    }

    impl UploadFile for FakeFile {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn mime_type(&self) -> String {
            self.mime.to_string()
        }
    }

    const SCAN: FakeFile = FakeFile {
        name: "scan.png",
        mime: "image/png",
    };

    type Released = Rc<RefCell<Vec<String>>>;

    fn selected(released: &Released) -> UploadState<FakeFile> {
        UploadState::default().apply(UploadAction::Select {
            file: SCAN,
            previews: Rc::new(tracked(DISPLAY_FILTERS.len(), released)),
        })
    }

    fn benign() -> AnalysisResult {
        AnalysisResult::Success(Prediction {
            prediction: "Benign".into(),
            confidence: Confidence::Score(0.92),
            tumor_characteristics: None,
        })
    }

    fn assert_defaults(state: &UploadState<FakeFile>) {
        assert!(state.file.is_none());
        assert!(state.previews.is_none());
        assert!(state.result.is_none());
        assert_eq!(state.progress, 0);
        assert_eq!(state.zoom, DEFAULT_ZOOM);
        assert_eq!(state.contrast, DEFAULT_CONTRAST);
        assert!(!state.compare_mode);
        assert_eq!(state.filter_index, 0);
        assert!(!state.uploading);
        assert_eq!(state.view(), View::Empty);
    }

    #[test]
    fn picks_exactly_one_image() {
        assert_eq!(pick_single_image(vec![SCAN]), Some(SCAN));
        assert_eq!(pick_single_image::<FakeFile>(vec![]), None);
        assert_eq!(pick_single_image(vec![SCAN, SCAN]), None);
        let pdf = FakeFile {
            name: "report.pdf",
            mime: "application/pdf",
        };
        assert_eq!(pick_single_image(vec![pdf]), None);
        let dicom = FakeFile {
            name: "scan.dcm",
            mime: "application/dicom",
        };
        assert_eq!(pick_single_image(vec![dicom]), None);
    }

    #[test]
    fn select_moves_empty_to_previewing_with_one_preview_per_filter() {
        let released = Released::default();
        let state = selected(&released);

        assert_eq!(state.view(), View::Previewing);
        assert_eq!(state.file, Some(SCAN));
        let previews = state.previews.as_ref().expect("previews");
        assert_eq!(previews.len(), DISPLAY_FILTERS.len());
        let distinct: HashSet<&str> = (0..previews.len()).filter_map(|i| previews.get(i)).collect();
        assert_eq!(distinct.len(), DISPLAY_FILTERS.len());
        assert_eq!(state.preview_url(2), Some("blob:test/2"));
    }

    #[test]
    fn select_with_wrong_preview_count_is_ignored_and_released() {
        let released = Released::default();
        let state = UploadState::default().apply(UploadAction::Select {
            file: SCAN,
            previews: Rc::new(tracked(1, &released)),
        });
        assert_eq!(state.view(), View::Empty);
        assert_eq!(released.borrow().len(), 1);
    }

    #[test]
    fn submit_without_file_is_a_noop() {
        let state = UploadState::<FakeFile>::default();
        assert!(state.begin_submit().is_none());

        let state = state.apply(UploadAction::Submitted { ticket: 1 });
        assert!(!state.uploading);
        assert_defaults(&state);
    }

    #[test]
    fn only_one_request_in_flight() {
        let released = Released::default();
        let state = selected(&released);
        let (_, ticket) = state.begin_submit().expect("can submit");
        let state = state.apply(UploadAction::Submitted { ticket });

        assert!(state.uploading);
        assert!(state.begin_submit().is_none());
        let state = state.apply(UploadAction::Submitted { ticket: ticket + 1 });
        assert_eq!(state.ticket, ticket);
    }

    #[test]
    fn benign_scenario_end_to_end() {
        let released = Released::default();
        let mut state = selected(&released);
        assert_eq!(state.previews.as_ref().map(|p| p.len()), Some(3));

        let (file, ticket) = state.begin_submit().expect("can submit");
        assert_eq!(file, SCAN);
        state = state.apply(UploadAction::Submitted { ticket });

        let mut seen = Vec::new();
        for percent in [0, 12, 40, 35, 80, 100] {
            state = state.apply(UploadAction::Progress { ticket, percent });
            seen.push(state.progress);
        }
        assert_eq!(seen, [0, 12, 40, 40, 80, 100]);

        state = state.apply(UploadAction::Completed {
            ticket,
            result: benign(),
        });
        assert_eq!(state.view(), View::Resulted);
        assert!(!state.uploading);
        assert_eq!(state.result, Some(benign()));
    }

    #[test]
    fn error_result_then_retry_returns_to_empty() {
        let released = Released::default();
        let state = selected(&released);
        let (_, ticket) = state.begin_submit().expect("can submit");
        let state = state
            .apply(UploadAction::Submitted { ticket })
            .apply(UploadAction::Completed {
                ticket,
                result: AnalysisResult::failure("X"),
            });

        assert_eq!(state.view(), View::Resulted);
        assert_eq!(state.result, Some(AnalysisResult::failure("X")));

        let state = state.apply(UploadAction::Reset);
        assert_defaults(&state);
        assert_eq!(released.borrow().len(), DISPLAY_FILTERS.len());
    }

    #[test]
    fn reset_from_every_view_restores_defaults() {
        let released = Released::default();

        let empty = UploadState::<FakeFile>::default()
            .apply(UploadAction::SetZoom(2.0))
            .apply(UploadAction::Reset);
        assert_defaults(&empty);

        let previewing = selected(&released)
            .apply(UploadAction::SetZoom(2.5))
            .apply(UploadAction::SetContrast(70.0))
            .apply(UploadAction::ToggleCompare)
            .apply(UploadAction::SelectFilter(2))
            .apply(UploadAction::Reset);
        assert_defaults(&previewing);

        let state = selected(&released);
        let (_, ticket) = state.begin_submit().expect("can submit");
        let resulted = state
            .apply(UploadAction::Submitted { ticket })
            .apply(UploadAction::Progress { ticket, percent: 100 })
            .apply(UploadAction::Completed { ticket, result: benign() })
            .apply(UploadAction::Reset);
        assert_defaults(&resulted);
    }

    #[test]
    fn reset_mid_flight_drops_late_result() {
        let released = Released::default();
        let state = selected(&released);
        let (_, ticket) = state.begin_submit().expect("can submit");
        let state = state
            .apply(UploadAction::Submitted { ticket })
            .apply(UploadAction::Progress { ticket, percent: 30 })
            .apply(UploadAction::Reset)
            .apply(UploadAction::Progress { ticket, percent: 90 })
            .apply(UploadAction::Completed { ticket, result: benign() });

        assert_defaults(&state);
    }

    #[test]
    fn stale_request_cannot_complete_a_new_one() {
        let released = Released::default();
        let state = selected(&released);
        let (_, first) = state.begin_submit().expect("can submit");
        let state = state
            .apply(UploadAction::Submitted { ticket: first })
            .apply(UploadAction::Reset);

        let state = state.apply(UploadAction::Select {
            file: SCAN,
            previews: Rc::new(tracked(DISPLAY_FILTERS.len(), &released)),
        });
        let (_, second) = state.begin_submit().expect("can submit");
        assert!(second > first);
        let state = state
            .apply(UploadAction::Submitted { ticket: second })
            .apply(UploadAction::Completed {
                ticket: first,
                result: AnalysisResult::failure("late"),
            });
        assert!(state.uploading);
        assert!(state.result.is_none());
    }

    #[test]
    fn zoom_and_contrast_are_clamped() {
        let state = UploadState::<FakeFile>::default()
            .apply(UploadAction::SetZoom(5.0))
            .apply(UploadAction::SetContrast(10.0));
        assert_eq!(state.zoom, MAX_ZOOM);
        assert_eq!(state.contrast, MIN_CONTRAST);

        let state = state
            .apply(UploadAction::SetZoom(0.2))
            .apply(UploadAction::SetContrast(400.0));
        assert_eq!(state.zoom, MIN_ZOOM);
        assert_eq!(state.contrast, MAX_CONTRAST);

        let state = state
            .apply(UploadAction::SetZoom(1.7))
            .apply(UploadAction::SetContrast(f64::NAN));
        assert_eq!(state.zoom, 1.7);
        assert_eq!(state.contrast, MAX_CONTRAST);
    }

    #[test]
    fn filter_selection_stays_in_range() {
        let released = Released::default();
        let state = selected(&released).apply(UploadAction::SelectFilter(1));
        assert_eq!(state.filter_index, 1);
        assert_eq!(state.selected_filter().name, "X-Ray");

        let state = state.apply(UploadAction::SelectFilter(DISPLAY_FILTERS.len()));
        assert_eq!(state.filter_index, 1);
    }

    #[test]
    fn select_is_ignored_outside_empty() {
        let released = Released::default();
        let state = selected(&released);
        let other = FakeFile {
            name: "other.jpg",
            mime: "image/jpeg",
        };
        let state = state.apply(UploadAction::Select {
            file: other,
            previews: Rc::new(tracked(DISPLAY_FILTERS.len(), &released)),
        });
        assert_eq!(state.file, Some(SCAN));
        // The rejected set is released right away.
        assert_eq!(released.borrow().len(), DISPLAY_FILTERS.len());
    }
}
