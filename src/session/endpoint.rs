//! Endpoint configuration store

/// Holds the currently active backend base URL
///
/// Initialized from a build-time or environment default and overridable at
/// runtime through the settings affordance. `set` replaces the value
/// unconditionally; no validation is performed here and no history of prior
/// values is kept. The controller reads the value at the moment a request is
/// dispatched, so an edit never redirects an in-flight request.
#[derive(Debug, Clone)]
pub struct EndpointStore {
    url: String,
}

impl EndpointStore {
    /// Create a store holding the given base URL
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Current base URL
    #[must_use]
    pub fn get(&self) -> &str {
        &self.url
    }

    /// Replace the base URL for subsequent dispatches
    pub fn set(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }
}
