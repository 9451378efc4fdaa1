mod mediation;
mod packaging;

pub use mediation::MediationPolicy;
pub use packaging::PackagingPolicy;
