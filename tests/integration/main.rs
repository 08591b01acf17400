mod common;
mod recognition_tests;
