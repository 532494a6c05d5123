#[cfg(test)]
pub mod impl_fake;
pub mod impl_json_file;
pub mod interface;
