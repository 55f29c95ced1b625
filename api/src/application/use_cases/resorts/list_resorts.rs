use std::collections::HashMap;

use uuid::Uuid;

use crate::application::dto::resorts::ResortWithRoomTypesDto;
use crate::application::ports::resort_repository::ResortRepository;
use crate::application::ports::room_type_repository::RoomTypeRepository;
use crate::domain::resorts::room_type::RoomType;

pub struct ListResorts<'a, R, T>
where
    R: ResortRepository + ?Sized,
    T: RoomTypeRepository + ?Sized,
{
    pub resorts: &'a R,
    pub room_types: &'a T,
}

impl<'a, R, T> ListResorts<'a, R, T>
where
    R: ResortRepository + ?Sized,
    T: RoomTypeRepository + ?Sized,
{
    pub async fn execute(&self) -> anyhow::Result<Vec<ResortWithRoomTypesDto>> {
        let resorts = self.resorts.list().await?;
        let ids: Vec<Uuid> = resorts.iter().map(|r| r.id).collect();
        let mut by_resort: HashMap<Uuid, Vec<RoomType>> = HashMap::new();
        if !ids.is_empty() {
            for rt in self.room_types.list_for_resorts(&ids).await? {
                by_resort.entry(rt.resort_id).or_default().push(rt);
            }
        }
        Ok(resorts
            .into_iter()
            .map(|resort| {
                let room_types = by_resort.remove(&resort.id).unwrap_or_default();
                ResortWithRoomTypesDto { resort, room_types }
            })
            .collect())
    }
}
