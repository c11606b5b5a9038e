//! Error page view model.

use askama::Template;

/// Generic error page rendered by [`crate::error::AppError`].
#[derive(Debug, Template)]
#[template(path = "error.html")]
pub struct ErrorView {
    pub status: u16,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_status_and_message() {
        let html = ErrorView {
            status: 404,
            message: "Campaign with id 9 not found".to_string(),
        }
        .render()
        .unwrap();

        assert!(html.contains("404"));
        assert!(html.contains("Campaign with id 9 not found"));
    }
}
