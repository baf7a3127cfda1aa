use async_trait::async_trait;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity
    async fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity, None when the id is unknown
    async fn get_by_id(&self, id: i64) -> LibraryResult<Option<Entity>>;

    // check whether an entity exists
    async fn exist(&self, id: i64) -> LibraryResult<bool>;

    // all entities ordered by id
    async fn get_all(&self) -> LibraryResult<Vec<Entity>>;

    // delete an entity
    async fn delete(&self, id: i64) -> LibraryResult<usize>;
}
