use super::month_availability::ViewedMonth;
use super::session::BookingSession;
use crate::http_handler::http_client::HTTPClient;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Bundles the shared components of the booking surface, providing access to
/// the HTTP client and the session from the embedding event loop.
#[derive(Clone)]
pub struct BookingContext {
    /// The HTTP client for performing network requests.
    client: Arc<HTTPClient>,
    /// The booking session driving calendar, day dialog and submission.
    session: Arc<RwLock<BookingSession>>,
}

impl BookingContext {
    /// Creates a new context for booking `room_id`, starting on
    /// `initial_month`.
    ///
    /// # Arguments
    /// - `base_url`: The base URL to initialize the HTTP client.
    /// - `room_id`: The room this flow books.
    /// - `initial_month`: The month the calendar opens on.
    pub fn new(base_url: &str, room_id: &str, initial_month: ViewedMonth) -> Self {
        let client = Arc::new(HTTPClient::new(base_url));
        let session = Arc::new(RwLock::new(BookingSession::new(room_id, initial_month)));
        Self { client, session }
    }

    /// Provides a cloned reference to the HTTP client.
    pub fn client(&self) -> Arc<HTTPClient> { Arc::clone(&self.client) }

    /// Provides a cloned reference to the booking session.
    pub fn session(&self) -> Arc<RwLock<BookingSession>> { Arc::clone(&self.session) }
}
