mod directory_tests;
mod lang_tests;
mod profile_tests;
mod submission_tests;
