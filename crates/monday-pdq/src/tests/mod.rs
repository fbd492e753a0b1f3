mod columns_tests;
mod groups_tests;
mod items_tests;
mod test_utils;
