const APP_NAME: &str = "FitCoach";

#[must_use]
pub fn page_title(page: &str) -> String {
    let page = page.trim();
    if page.is_empty() {
        APP_NAME.to_string()
    } else {
        format!("{page} | {APP_NAME}")
    }
}

/// Document title of the current page. The previous title is restored on drop.
pub struct PageTitle {
    previous: String,
}

impl PageTitle {
    #[must_use]
    pub fn set(page: &str) -> Self {
        let document = gloo_utils::document();
        let previous = document.title();
        document.set_title(&page_title(page));
        Self { previous }
    }
}

impl Drop for PageTitle {
    fn drop(&mut self) {
        gloo_utils::document().set_title(&self.previous);
    }
}
