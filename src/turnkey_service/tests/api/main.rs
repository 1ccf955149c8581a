mod authenticate;
mod helpers;
mod register_owner;
