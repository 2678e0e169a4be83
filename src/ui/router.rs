//! Two-screen navigation.

/// Current screen, with the email carried as a path parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` — the purchase form.
    Purchase,
    /// `/achievements/{email}` — the achievements summary.
    Achievements { email: String },
}

impl Route {
    /// Parse a path string, as accepted for CLI deep links.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim();
        if path == "/" {
            return Some(Route::Purchase);
        }
        let email = path.strip_prefix("/achievements/")?;
        if email.is_empty() || email.contains('/') {
            return None;
        }
        Some(Route::Achievements {
            email: email.to_string(),
        })
    }

    /// Path form of the route, shown in the header.
    pub fn path(&self) -> String {
        match self {
            Route::Purchase => "/".to_string(),
            Route::Achievements { email } => format!("/achievements/{email}"),
        }
    }
}
