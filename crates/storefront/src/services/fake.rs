//! In-memory sweet shop used by page and handler tests.

use std::sync::{Arc, Mutex};

use reqwest::StatusCode;
use sweet_shop_core::{Price, SearchParams, Sweet, SweetId};

use super::{AuthService, SweetService};
use crate::api::ApiError;
use crate::models::{AuthToken, Credentials, LoginSession, User};

pub const VALID_USERNAME: &str = "alice";
pub const VALID_PASSWORD: &str = "correct-horse";
pub const TOKEN: &str = "test-token";

/// Calls observed by the fake, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Login(String),
    Register(String),
    GetAll,
    Search(SearchParams),
    Purchase(SweetId, u32),
}

#[derive(Default)]
struct State {
    sweets: Vec<Sweet>,
    calls: Vec<Call>,
    login_error: Option<Option<String>>,
    listing_fails: bool,
    purchase_error: Option<Option<String>>,
}

/// Fake backend: one valid account, a mutable catalog, and switchable failures.
#[derive(Clone, Default)]
pub struct FakeShop {
    state: Arc<Mutex<State>>,
}

#[allow(clippy::unwrap_used)]
impl FakeShop {
    pub fn with_sweets(sweets: Vec<Sweet>) -> Self {
        let shop = Self::default();
        shop.state.lock().unwrap().sweets = sweets;
        shop
    }

    /// Make every login fail, optionally with a server message.
    pub fn reject_logins(&self, message: Option<&str>) {
        self.state.lock().unwrap().login_error = Some(message.map(String::from));
    }

    pub fn fail_listings(&self) {
        self.state.lock().unwrap().listing_fails = true;
    }

    /// Make every purchase fail, optionally with a server message.
    pub fn reject_purchases(&self, message: Option<&str>) {
        self.state.lock().unwrap().purchase_error = Some(message.map(String::from));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|c| predicate(c)).count()
    }

    pub fn stock_of(&self, id: SweetId) -> Option<u32> {
        self.state
            .lock()
            .unwrap()
            .sweets
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.quantity_in_stock)
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }
}

pub fn sweet(id: i64, name: &str, stock: u32) -> Sweet {
    Sweet {
        id: SweetId::new(id),
        name: name.to_string(),
        category: "Indian".to_string(),
        price: Price::from_cents(250),
        quantity_in_stock: stock,
    }
}

fn rejected(status: StatusCode, message: Option<String>) -> ApiError {
    ApiError::Rejected { status, message }
}

#[allow(clippy::unwrap_used)]
impl AuthService for FakeShop {
    async fn login(&self, credentials: &Credentials) -> Result<LoginSession, ApiError> {
        use secrecy::ExposeSecret;

        self.record(Call::Login(credentials.username.clone()));
        if let Some(message) = self.state.lock().unwrap().login_error.clone() {
            return Err(rejected(StatusCode::UNAUTHORIZED, message));
        }
        if credentials.username != VALID_USERNAME
            || credentials.password.expose_secret() != VALID_PASSWORD
        {
            return Err(rejected(StatusCode::UNAUTHORIZED, None));
        }
        Ok(LoginSession {
            token: AuthToken::new(TOKEN),
            user: User {
                id: None,
                username: credentials.username.clone(),
                role: None,
            },
        })
    }

    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.record(Call::Register(credentials.username.clone()));
        if credentials.username == VALID_USERNAME {
            return Err(rejected(
                StatusCode::CONFLICT,
                Some("Username already exists".to_string()),
            ));
        }
        Ok(())
    }
}

#[allow(clippy::unwrap_used)]
impl SweetService for FakeShop {
    async fn get_all_sweets(&self, _token: &AuthToken) -> Result<Vec<Sweet>, ApiError> {
        self.record(Call::GetAll);
        let state = self.state.lock().unwrap();
        if state.listing_fails {
            return Err(rejected(StatusCode::INTERNAL_SERVER_ERROR, None));
        }
        Ok(state.sweets.clone())
    }

    async fn search_sweets(
        &self,
        _token: &AuthToken,
        params: &SearchParams,
    ) -> Result<Vec<Sweet>, ApiError> {
        self.record(Call::Search(params.clone()));
        let state = self.state.lock().unwrap();
        if state.listing_fails {
            return Err(rejected(StatusCode::INTERNAL_SERVER_ERROR, None));
        }
        let needle = params.name.as_deref().unwrap_or_default().to_lowercase();
        Ok(state
            .sweets
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn purchase_sweet(
        &self,
        _token: &AuthToken,
        id: SweetId,
        quantity: u32,
    ) -> Result<(), ApiError> {
        self.record(Call::Purchase(id, quantity));
        let mut state = self.state.lock().unwrap();
        if let Some(message) = state.purchase_error.clone() {
            return Err(rejected(StatusCode::BAD_REQUEST, message));
        }
        let sweet = state
            .sweets
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| rejected(StatusCode::NOT_FOUND, Some("Sweet not found".to_string())))?;
        sweet.quantity_in_stock = sweet
            .quantity_in_stock
            .checked_sub(quantity)
            .ok_or_else(|| rejected(StatusCode::BAD_REQUEST, Some("Insufficient stock".to_string())))?;
        Ok(())
    }
}
