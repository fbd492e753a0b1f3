mod boards_tests;
mod column_value_tests;
