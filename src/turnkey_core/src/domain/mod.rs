pub mod access_token;
pub mod email;
pub mod owner;
pub mod owner_name;
pub mod password;
pub mod unique_entity_id;
