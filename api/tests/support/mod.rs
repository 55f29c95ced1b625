#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use resort_api::application::ports::UniqueWrite;
use resort_api::application::ports::booking_repository::{
    BookingInsert, BookingListing, BookingRepository, StatusChange,
};
use resort_api::application::ports::payment_repository::PaymentRepository;
use resort_api::application::ports::resort_repository::ResortRepository;
use resort_api::application::ports::room_repository::RoomRepository;
use resort_api::application::ports::room_type_repository::RoomTypeRepository;
use resort_api::application::ports::user_repository::{UserRepository, UserRow};
use resort_api::bootstrap::app_context::{AppContext, AppServices};
use resort_api::bootstrap::config::Config;
use resort_api::domain::bookings::availability::first_conflict;
use resort_api::domain::bookings::booking::{Booking, BookingStatus, NewBooking};
use resort_api::domain::payments::payment::{NewPayment, Payment, PaymentStatus};
use resort_api::domain::resorts::resort::{Resort, ResortDetails};
use resort_api::domain::resorts::room::{Room, RoomDetails};
use resort_api::domain::resorts::room_type::{RoomType, RoomTypeDetails};
use resort_api::domain::users::role::Role;
use resort_api::presentation::http::api_routes;
use resort_api::presentation::http::auth::issue_token;

fn now() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc::now()
}

#[derive(Default)]
pub struct InMemoryUsers {
    rows: Mutex<Vec<UserRow>>,
}

impl InMemoryUsers {
    pub fn insert(&self, row: UserRow) {
        self.rows.lock().unwrap().push(row);
    }

    pub fn remove(&self, id: Uuid) {
        self.rows.lock().unwrap().retain(|u| u.id != id);
    }

    pub fn set_role(&self, id: Uuid, role: Role) {
        for u in self.rows.lock().unwrap().iter_mut() {
            if u.id == id {
                u.role = role;
            }
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(
        &self,
        email: &str,
        name: &str,
        password_hash: &str,
        role: Role,
    ) -> anyhow::Result<UniqueWrite<UserRow>> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.email == email) {
            return Ok(UniqueWrite::Duplicate);
        }
        let row = UserRow {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: name.to_string(),
            role,
            password_hash: Some(password_hash.to_string()),
            created_at: now(),
        };
        rows.push(row.clone());
        Ok(UniqueWrite::Written(UserRow {
            password_hash: None,
            ..row
        }))
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRow>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<UserRow>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .map(|u| UserRow {
                password_hash: None,
                ..u
            }))
    }
}

#[derive(Default)]
pub struct InMemoryResorts {
    rows: Mutex<Vec<Resort>>,
}

#[async_trait]
impl ResortRepository for InMemoryResorts {
    async fn list(&self) -> anyhow::Result<Vec<Resort>> {
        let mut out = self.rows.lock().unwrap().clone();
        out.reverse();
        Ok(out)
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Resort>> {
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, owner_id: Uuid, details: &ResortDetails) -> anyhow::Result<Resort> {
        let resort = Resort {
            id: Uuid::new_v4(),
            owner_id,
            details: details.clone(),
            created_at: now(),
            updated_at: now(),
        };
        self.rows.lock().unwrap().push(resort.clone());
        Ok(resort)
    }

    async fn update(&self, id: Uuid, details: &ResortDetails) -> anyhow::Result<Option<Resort>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|r| r.id == id).map(|r| {
            r.details = details.clone();
            r.updated_at = now();
            r.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() != before)
    }
}

#[derive(Default)]
pub struct InMemoryRoomTypes {
    rows: Mutex<Vec<RoomType>>,
}

#[async_trait]
impl RoomTypeRepository for InMemoryRoomTypes {
    async fn list_for_resort(&self, resort_id: Uuid) -> anyhow::Result<Vec<RoomType>> {
        self.list_for_resorts(&[resort_id]).await
    }

    async fn list_for_resorts(&self, resort_ids: &[Uuid]) -> anyhow::Result<Vec<RoomType>> {
        let mut out: Vec<RoomType> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|rt| resort_ids.contains(&rt.resort_id))
            .cloned()
            .collect();
        out.sort_by_key(|rt| rt.details.display_order);
        Ok(out)
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<RoomType>> {
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn create(
        &self,
        resort_id: Uuid,
        details: &RoomTypeDetails,
    ) -> anyhow::Result<RoomType> {
        let rt = RoomType {
            id: Uuid::new_v4(),
            resort_id,
            details: details.clone(),
            created_at: now(),
            updated_at: now(),
        };
        self.rows.lock().unwrap().push(rt.clone());
        Ok(rt)
    }

    async fn update(
        &self,
        id: Uuid,
        details: &RoomTypeDetails,
    ) -> anyhow::Result<Option<RoomType>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|r| r.id == id).map(|r| {
            r.details = details.clone();
            r.updated_at = now();
            r.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() != before)
    }
}

#[derive(Default)]
pub struct InMemoryRooms {
    rows: Mutex<Vec<Room>>,
}

#[async_trait]
impl RoomRepository for InMemoryRooms {
    async fn list_for_resort(&self, resort_id: Uuid) -> anyhow::Result<Vec<Room>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.resort_id == resort_id)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Room>> {
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_number(
        &self,
        resort_id: Uuid,
        room_number: &str,
    ) -> anyhow::Result<Option<Room>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.resort_id == resort_id && r.details.room_number == room_number)
            .cloned())
    }

    async fn create(
        &self,
        resort_id: Uuid,
        details: &RoomDetails,
    ) -> anyhow::Result<UniqueWrite<Room>> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|r| r.resort_id == resort_id && r.details.room_number == details.room_number)
        {
            return Ok(UniqueWrite::Duplicate);
        }
        let room = Room {
            id: Uuid::new_v4(),
            resort_id,
            details: details.clone(),
            created_at: now(),
            updated_at: now(),
        };
        rows.push(room.clone());
        Ok(UniqueWrite::Written(room))
    }

    async fn update(
        &self,
        id: Uuid,
        details: &RoomDetails,
    ) -> anyhow::Result<Option<UniqueWrite<Room>>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(resort_id) = rows.iter().find(|r| r.id == id).map(|r| r.resort_id) else {
            return Ok(None);
        };
        if rows.iter().any(|r| {
            r.id != id && r.resort_id == resort_id && r.details.room_number == details.room_number
        }) {
            return Ok(Some(UniqueWrite::Duplicate));
        }
        Ok(rows.iter_mut().find(|r| r.id == id).map(|r| {
            r.details = details.clone();
            r.updated_at = now();
            UniqueWrite::Written(r.clone())
        }))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() != before)
    }
}

/// Holds the lock across check and insert, like the row lock in Postgres.
pub struct InMemoryBookings {
    rows: Mutex<Vec<Booking>>,
    users: Arc<InMemoryUsers>,
    resorts: Arc<InMemoryResorts>,
    rooms: Arc<InMemoryRooms>,
}

impl InMemoryBookings {
    fn listing(&self, b: &Booking) -> BookingListing {
        let resort_name = self
            .resorts
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == b.resort_id)
            .map(|r| r.details.name.clone())
            .unwrap_or_default();
        let room_number = b.room_id.and_then(|rid| {
            self.rooms
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == rid)
                .map(|r| r.details.room_number.clone())
        });
        let (guest_name, guest_email) = self
            .users
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == b.user_id)
            .map(|u| (u.name.clone(), u.email.clone()))
            .unwrap_or_default();
        BookingListing {
            booking: b.clone(),
            resort_name,
            room_number,
            guest_name,
            guest_email,
        }
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookings {
    async fn list_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<BookingListing>> {
        let mut rows: Vec<Booking> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        rows.reverse();
        Ok(rows.iter().map(|b| self.listing(b)).collect())
    }

    async fn list_for_resort(&self, resort_id: Uuid) -> anyhow::Result<Vec<BookingListing>> {
        let mut rows: Vec<Booking> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.resort_id == resort_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.stay.check_in().cmp(&a.stay.check_in()));
        Ok(rows.iter().map(|b| self.listing(b)).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Booking>> {
        Ok(self.rows.lock().unwrap().iter().find(|b| b.id == id).cloned())
    }

    async fn create_if_available(&self, booking: &NewBooking) -> anyhow::Result<BookingInsert> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(room_id) = booking.room_id {
            if let Some(existing) = first_conflict(rows.iter(), room_id, &booking.stay) {
                return Ok(BookingInsert::Conflict {
                    existing_id: existing.id,
                });
            }
        }
        let created = Booking {
            id: Uuid::new_v4(),
            user_id: booking.user_id,
            resort_id: booking.resort_id,
            room_id: booking.room_id,
            stay: booking.stay,
            status: BookingStatus::Pending,
            created_at: now(),
            updated_at: now(),
        };
        rows.push(created.clone());
        Ok(BookingInsert::Created(created))
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> anyhow::Result<Option<StatusChange>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(current) = rows.iter().find(|b| b.id == id).cloned() else {
            return Ok(None);
        };
        if status.holds_room() && !current.status.holds_room() {
            if let Some(room_id) = current.room_id {
                let others = rows.iter().filter(|b| b.id != id);
                if let Some(existing) = first_conflict(others, room_id, &current.stay) {
                    return Ok(Some(StatusChange::Conflict {
                        existing_id: existing.id,
                    }));
                }
            }
        }
        Ok(rows.iter_mut().find(|b| b.id == id).map(|b| {
            b.status = status;
            b.updated_at = now();
            StatusChange::Updated(b.clone())
        }))
    }
}

#[derive(Default)]
pub struct InMemoryPayments {
    rows: Mutex<Vec<Payment>>,
}

#[async_trait]
impl PaymentRepository for InMemoryPayments {
    async fn list_for_booking(&self, booking_id: Uuid) -> anyhow::Result<Vec<Payment>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.booking_id == booking_id)
            .cloned()
            .collect())
    }

    async fn transaction_exists(&self, transaction_id: &str) -> anyhow::Result<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.transaction_id == transaction_id))
    }

    async fn create(&self, payment: &NewPayment) -> anyhow::Result<UniqueWrite<Payment>> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|p| p.transaction_id == payment.transaction_id)
        {
            return Ok(UniqueWrite::Duplicate);
        }
        let saved = Payment {
            id: Uuid::new_v4(),
            booking_id: payment.booking_id,
            amount_cents: payment.amount_cents,
            currency: payment.currency,
            payment_method: payment.payment_method,
            transaction_id: payment.transaction_id.clone(),
            status: PaymentStatus::Pending,
            payment_date: now(),
            created_at: now(),
        };
        rows.push(saved.clone());
        Ok(UniqueWrite::Written(saved))
    }
}

pub struct TestApp {
    pub router: Router,
    pub cfg: Config,
    pub users: Arc<InMemoryUsers>,
}

pub struct SeededUser {
    pub user: UserRow,
    pub token: String,
}

pub fn test_config() -> Config {
    Config {
        api_port: 0,
        frontend_url: None,
        database_url: String::new(),
        jwt_secret: "integration-test-secret".into(),
        jwt_expires_secs: 3600,
        is_production: false,
    }
}

impl TestApp {
    pub fn new() -> Self {
        let cfg = test_config();
        let users = Arc::new(InMemoryUsers::default());
        let resorts = Arc::new(InMemoryResorts::default());
        let rooms = Arc::new(InMemoryRooms::default());
        let bookings = Arc::new(InMemoryBookings {
            rows: Mutex::new(Vec::new()),
            users: users.clone(),
            resorts: resorts.clone(),
            rooms: rooms.clone(),
        });
        let services = AppServices::new(
            users.clone(),
            resorts,
            Arc::new(InMemoryRoomTypes::default()),
            rooms,
            bookings,
            Arc::new(InMemoryPayments::default()),
        );
        let ctx = AppContext::new(cfg.clone(), services);
        Self {
            router: api_routes(ctx),
            cfg,
            users,
        }
    }

    /// Inserts a user directly (skipping password hashing) and mints a token.
    pub fn seed_user(&self, name: &str, role: Role) -> SeededUser {
        let user = UserRow {
            id: Uuid::new_v4(),
            email: format!("{}@example.com", name.to_lowercase()),
            name: name.to_string(),
            role,
            password_hash: None,
            created_at: now(),
        };
        self.users.insert(user.clone());
        let token = issue_token(&self.cfg, &user).expect("token");
        SeededUser { user, token }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(t) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {t}"));
        }
        let req = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(req).await
    }

    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let resp = self.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, token, None).await
    }

    /// Creates a resort owned by `owner` through the API and returns its id.
    pub async fn create_resort(&self, owner: &SeededUser, name: &str) -> String {
        let (status, body) = self
            .post(
                "/api/resorts",
                Some(&owner.token),
                serde_json::json!({
                    "name": name,
                    "location": "Goa",
                    "contact_email": "desk@example.com"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn create_room(&self, owner: &SeededUser, resort_id: &str, number: &str) -> String {
        let (status, body) = self
            .post(
                &format!("/api/resorts/{resort_id}/rooms"),
                Some(&owner.token),
                serde_json::json!({
                    "name": format!("Room {number}"),
                    "room_number": number,
                    "price_per_night_cents": 15_000,
                    "capacity": 2
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_str().unwrap().to_string()
    }
}
