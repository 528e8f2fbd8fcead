pub mod credential_loader;
pub mod report;
