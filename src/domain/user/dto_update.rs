use validator::Validate;

/// Patch for a staff account. A `password` here is plaintext and replaces
/// the stored hash. `Some(None)` on a reference clears it.
#[derive(Clone, Default, Validate)]
pub struct UserChanges {
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub last_name: Option<String>,
    #[validate(length(max = 32))]
    pub phone_num: Option<String>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(min = 8, max = 128, message = "must be 8-128 characters"))]
    pub password: Option<String>,
    pub hotel_id: Option<Option<i32>>,
    pub role_id: Option<Option<i32>>,
}
