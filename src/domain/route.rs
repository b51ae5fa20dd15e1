#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Upload,
    Analysis,
}

impl Route {
    pub fn as_path(&self) -> &'static str {
        match self {
            Route::Upload => "/upload",
            Route::Analysis => "/analysis",
        }
    }
}
