use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{File, FormData, ProgressEvent, XmlHttpRequest};

use super::error::UploadError;

/// Multipart field the prediction endpoint reads the image from.
pub const FILE_FIELD: &str = "file";

const UPLOAD_TIMEOUT_MS: u32 = 120_000;

#[derive(Clone, Copy, Debug)]
enum Finish {
    Loaded,
    Failed,
    TimedOut,
    Aborted,
}

/// Percentage of an upload, or `None` when the total is unknown.
pub fn progress_percent(loaded: f64, total: f64) -> Option<u8> {
    if !total.is_finite() || total <= 0.0 || !loaded.is_finite() {
        return None;
    }
    Some((loaded * 100.0 / total).round().clamp(0.0, 100.0) as u8)
}

/// Posts `file` as multipart form data and resolves with the response status
/// and body once the exchange finishes.
///
/// XHR is used instead of fetch because fetch exposes no upload progress.
/// `on_started` receives the request handle so the caller can abort it.
pub async fn post_image(
    url: &str,
    file: &File,
    on_progress: impl Fn(u8) + 'static,
    on_started: impl FnOnce(XmlHttpRequest),
) -> Result<(u16, String), UploadError> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())?;

    let xhr = XmlHttpRequest::new()?;
    xhr.open_with_async("POST", url, true)?;
    xhr.set_timeout(UPLOAD_TIMEOUT_MS);
    let upload = xhr.upload()?;

    let (tx, rx) = oneshot::channel::<Finish>();
    let tx = Rc::new(RefCell::new(Some(tx)));
    let finisher = |finish: Finish| {
        let tx = tx.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(finish);
            }
        })
    };
    let on_load = finisher(Finish::Loaded);
    let on_error = finisher(Finish::Failed);
    let on_timeout = finisher(Finish::TimedOut);
    let on_abort = finisher(Finish::Aborted);
    let on_upload_progress = Closure::<dyn FnMut(ProgressEvent)>::new(move |event: ProgressEvent| {
        if !event.length_computable() {
            return;
        }
        if let Some(percent) = progress_percent(event.loaded(), event.total()) {
            on_progress(percent);
        }
    });

    xhr.set_onload(Some(on_load.as_ref().unchecked_ref()));
    xhr.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    xhr.set_ontimeout(Some(on_timeout.as_ref().unchecked_ref()));
    xhr.set_onabort(Some(on_abort.as_ref().unchecked_ref()));
    upload.set_onprogress(Some(on_upload_progress.as_ref().unchecked_ref()));

    xhr.send_with_opt_form_data(Some(&form))?;
    on_started(xhr.clone());

    // A dropped sender means the handlers went away without firing.
    let finish = rx.await.unwrap_or(Finish::Aborted);

    // Detach before the closures are dropped at the end of this scope.
    xhr.set_onload(None);
    xhr.set_onerror(None);
    xhr.set_ontimeout(None);
    xhr.set_onabort(None);
    upload.set_onprogress(None);

    match finish {
        Finish::Loaded => {
            let status = xhr.status()?;
            let body = xhr.response_text()?.unwrap_or_default();
            log::info!("Prediction endpoint answered {} ({} bytes)", status, body.len());
            Ok((status, body))
        }
        Finish::Failed => Err(UploadError::Network),
        Finish::TimedOut => Err(UploadError::Timeout),
        Finish::Aborted => Err(UploadError::Aborted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_and_clamps() {
        assert_eq!(progress_percent(0.0, 2_000_000.0), Some(0));
        assert_eq!(progress_percent(1_000_000.0, 2_000_000.0), Some(50));
        assert_eq!(progress_percent(1_999_999.0, 2_000_000.0), Some(100));
        assert_eq!(progress_percent(333.0, 1000.0), Some(33));
        assert_eq!(progress_percent(2_500.0, 2_000.0), Some(100));
    }

    #[test]
    fn unknown_total_has_no_percent() {
        assert_eq!(progress_percent(10.0, 0.0), None);
        assert_eq!(progress_percent(10.0, f64::NAN), None);
        assert_eq!(progress_percent(f64::INFINITY, 10.0), None);
    }
}
