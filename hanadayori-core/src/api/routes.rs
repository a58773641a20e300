macro_rules! api_path {
    ($path:literal) => {
        concat!("/api", $path)
    };
}

/// JSON API routes shared by the server and its clients
pub mod api {
    pub mod images {
        /// Verbatim proxy to the photo search endpoint.
        pub const SEARCH: &str = api_path!("/images");
        pub const VARIETY: &str = api_path!("/images/variety");
    }

    pub mod flowers {
        pub const CATALOG: &str = api_path!("/flowers");
    }

    pub mod cards {
        pub const CREATE: &str = api_path!("/cards");
        pub const RESOLVE: &str = api_path!("/cards/resolve");
    }
}

/// Browser-facing pages
pub mod pages {
    /// Creation entry point; incomplete links redirect here.
    pub const HOME: &str = "/";
    pub const VIEW: &str = "/view";
}

pub mod health {
    pub const PING: &str = "/ping";
    pub const HEALTH: &str = "/health";
}
