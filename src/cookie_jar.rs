//! Browser Cookie Jar
//!
//! `document.cookie` access for the task persistence slot.

use wasm_bindgen::JsCast;

use todo_core::{CookieJar, CookieStorage, StorageError, StorageResult, TaskPersistence};

/// The page's `document.cookie`
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentCookieJar;

fn html_document() -> StorageResult<web_sys::HtmlDocument> {
    let doc = web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| StorageError::Unavailable("no document".to_string()))?;
    doc.dyn_into::<web_sys::HtmlDocument>()
        .map_err(|_| StorageError::Unavailable("not an HTML document".to_string()))
}

impl CookieJar for DocumentCookieJar {
    fn cookies(&self) -> StorageResult<String> {
        html_document()?
            .cookie()
            .map_err(|e| StorageError::Io(format!("{:?}", e)))
    }

    fn set_cookie(&self, line: &str) -> StorageResult<()> {
        html_document()?
            .set_cookie(line)
            .map_err(|e| StorageError::Io(format!("{:?}", e)))
    }
}

pub type BrowserPersistence = TaskPersistence<CookieStorage<DocumentCookieJar>>;

/// Persistence over the `tasks` cookie with the default attributes
pub fn browser_persistence() -> BrowserPersistence {
    TaskPersistence::new(CookieStorage::new(DocumentCookieJar))
}
