/// Primary key type shared by every entity. The relational schema uses
/// plain auto-increment integer keys.
pub type ID = i32;

pub trait Entity {
    fn id(&self) -> ID;
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
