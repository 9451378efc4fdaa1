/// Network adapters for remote Maven repositories
mod maven_repository_client;

pub use maven_repository_client::MavenRepositoryClient;
