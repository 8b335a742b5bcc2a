//! Unit test modules.

mod activity_list_test;
mod changes_test;
mod parser_test;
