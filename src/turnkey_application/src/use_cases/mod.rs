pub mod authenticate_owner;
pub mod errors;
pub mod register_owner;

#[cfg(test)]
mod test_doubles;
