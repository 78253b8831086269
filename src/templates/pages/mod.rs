pub mod directory;
pub mod profile;

pub use directory::{directory_page, results_partial, DirectoryVm};
pub use profile::{profile_page, ProfileVm};
