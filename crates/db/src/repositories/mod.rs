pub mod observation_repo;

pub use observation_repo::ObservationRepo;
