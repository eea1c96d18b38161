use uuid::Uuid;

#[derive(Debug)]
pub struct AuthenticateDto {
    pub id: Uuid,
}
