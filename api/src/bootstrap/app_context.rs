use std::sync::Arc;

use crate::application::ports::booking_repository::BookingRepository;
use crate::application::ports::payment_repository::PaymentRepository;
use crate::application::ports::resort_repository::ResortRepository;
use crate::application::ports::room_repository::RoomRepository;
use crate::application::ports::room_type_repository::RoomTypeRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    user_repo: Arc<dyn UserRepository>,
    resort_repo: Arc<dyn ResortRepository>,
    room_type_repo: Arc<dyn RoomTypeRepository>,
    room_repo: Arc<dyn RoomRepository>,
    booking_repo: Arc<dyn BookingRepository>,
    payment_repo: Arc<dyn PaymentRepository>,
}

impl AppServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        resort_repo: Arc<dyn ResortRepository>,
        room_type_repo: Arc<dyn RoomTypeRepository>,
        room_repo: Arc<dyn RoomRepository>,
        booking_repo: Arc<dyn BookingRepository>,
        payment_repo: Arc<dyn PaymentRepository>,
    ) -> Self {
        Self {
            user_repo,
            resort_repo,
            room_type_repo,
            room_repo,
            booking_repo,
            payment_repo,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }

    pub fn resort_repo(&self) -> Arc<dyn ResortRepository> {
        self.services.resort_repo.clone()
    }

    pub fn room_type_repo(&self) -> Arc<dyn RoomTypeRepository> {
        self.services.room_type_repo.clone()
    }

    pub fn room_repo(&self) -> Arc<dyn RoomRepository> {
        self.services.room_repo.clone()
    }

    pub fn booking_repo(&self) -> Arc<dyn BookingRepository> {
        self.services.booking_repo.clone()
    }

    pub fn payment_repo(&self) -> Arc<dyn PaymentRepository> {
        self.services.payment_repo.clone()
    }
}
