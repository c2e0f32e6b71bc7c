use validator::Validate;

/// Draft of a new staff account. `password` is plaintext and is hashed
/// before it reaches storage.
#[derive(Clone, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub last_name: String,
    #[validate(length(max = 32))]
    pub phone_num: Option<String>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, max = 128, message = "must be 8-128 characters"))]
    pub password: String,
    pub hotel_id: Option<i32>,
    pub role_id: Option<i32>,
}
