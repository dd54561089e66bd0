mod process_tests;
mod run_tests;
