use std::fmt;

use web_sys::{File, Url};

use super::error::UploadError;

/// Object URLs pointing at one selected file, one per display filter.
///
/// The URLs are revoked when the set is dropped, so replacing or clearing the
/// upload state (or unmounting the page) releases them.
pub struct PreviewSet {
    urls: Vec<String>,
    release: Box<dyn Fn(&str)>,
}

impl PreviewSet {
    pub fn new(urls: Vec<String>, release: impl Fn(&str) + 'static) -> Self {
        Self {
            urls,
            release: Box::new(release),
        }
    }

    /// Creates `count` independent object URLs for the same file bytes.
    pub fn for_file(file: &File, count: usize) -> Result<Self, UploadError> {
        let mut set = Self::new(Vec::with_capacity(count), revoke_object_url);
        for _ in 0..count {
            // URLs created so far are revoked by Drop if this fails.
            let url = Url::create_object_url_with_blob(file)?;
            set.urls.push(url);
        }
        Ok(set)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.urls.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }
}

impl Drop for PreviewSet {
    fn drop(&mut self) {
        for url in &self.urls {
            (self.release)(url);
        }
    }
}

impl PartialEq for PreviewSet {
    fn eq(&self, other: &Self) -> bool {
        self.urls == other.urls
    }
}

impl fmt::Debug for PreviewSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewSet").field("urls", &self.urls).finish()
    }
}

fn revoke_object_url(url: &str) {
    if let Err(e) = Url::revoke_object_url(url) {
        log::warn!("Failed to revoke preview URL {}: {:?}", url, e);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Preview set backed by fake URLs that records every release.
    pub(crate) fn tracked(count: usize, released: &Rc<RefCell<Vec<String>>>) -> PreviewSet {
        let released = released.clone();
        let urls = (0..count).map(|i| format!("blob:test/{}", i)).collect();
        PreviewSet::new(urls, move |url| released.borrow_mut().push(url.to_string()))
    }

    #[test]
    fn drop_releases_every_url_once() {
        let released = Rc::new(RefCell::new(Vec::new()));
        let set = tracked(3, &released);
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(1), Some("blob:test/1"));
        assert!(released.borrow().is_empty());

        drop(set);
        assert_eq!(*released.borrow(), vec!["blob:test/0", "blob:test/1", "blob:test/2"]);
    }

    #[test]
    fn shared_set_releases_with_last_owner() {
        let released = Rc::new(RefCell::new(Vec::new()));
        let set = Rc::new(tracked(2, &released));
        let other = set.clone();
        drop(set);
        assert!(released.borrow().is_empty());
        drop(other);
        assert_eq!(released.borrow().len(), 2);
    }
}
