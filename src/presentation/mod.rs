pub mod main;
pub mod scene;

#[cfg(test)]
mod tests;
