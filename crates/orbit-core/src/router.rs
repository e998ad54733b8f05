/// Client-side page routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Start,
    Main,
    About,
    Project(String),
}

impl Route {
    /// Match a pathname. `None` means "redirect to start".
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "/start" => Some(Route::Start),
            "/main" => Some(Route::Main),
            "/about" => Some(Route::About),
            _ => {
                let slug = trimmed.strip_prefix("/projects/")?;
                if slug.is_empty() || slug.contains('/') {
                    None
                } else {
                    Some(Route::Project(slug.to_string()))
                }
            }
        }
    }

    /// Like `parse`, with the root and unmatched paths resolved to `Start`.
    /// The flag reports whether the address bar needs replacing.
    pub fn resolve(path: &str) -> (Self, bool) {
        match Self::parse(path) {
            Some(route) => (route, false),
            None => (Route::Start, true),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Start => "/start".to_string(),
            Route::Main => "/main".to_string(),
            Route::About => "/about".to_string(),
            Route::Project(slug) => format!("/projects/{slug}"),
        }
    }

    /// Whether this page shows the orbit scene (and owns the worker fetch).
    #[inline]
    pub fn is_main(&self) -> bool {
        matches!(self, Route::Main)
    }
}
