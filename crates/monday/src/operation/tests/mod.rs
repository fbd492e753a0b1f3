mod operation_tests;
mod payload_tests;
