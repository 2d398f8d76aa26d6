pub mod verify_tests;
pub mod book_tests;
