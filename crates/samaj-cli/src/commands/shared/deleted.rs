use serde::Serialize;

/// Response printed after a successful delete.
#[derive(Debug, Serialize)]
pub struct DeletedResponse<'a> {
    pub deleted: bool,
    pub entity: &'static str,
    pub id: &'a str,
}

impl<'a> DeletedResponse<'a> {
    #[must_use]
    pub const fn new(entity: &'static str, id: &'a str) -> Self {
        Self {
            deleted: true,
            entity,
            id,
        }
    }
}
