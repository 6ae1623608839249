mod conditionals_tests;
mod definitions_tests;
mod expressions_tests;
mod io_tests;
